use crate::Route;
use dioxus::prelude::*;
use watchverse_core::{ApiClient, SearchQuery};
use watchverse_ui::{HeaderView, NavItem};

/// The submitted header search, shared with whichever page is showing.
#[derive(Clone, Copy)]
pub struct SearchState(pub Signal<Option<SearchQuery>>);

/// Query for a header submit. Blank input leaves the current search (and
/// every subscribed page) untouched.
fn submitted_query(raw: &str) -> Option<SearchQuery> {
    let query = SearchQuery::new(raw);
    if query.is_none() {
        tracing::debug!("Ignoring blank search submit");
    }
    query
}

#[component]
pub fn AppLayout() -> Element {
    let client: ApiClient = use_context();
    let current_route = use_route::<Route>();
    let mut search_input = use_signal(String::new);
    let mut search = use_context_provider(|| SearchState(Signal::new(None))).0;

    let on_detail_page = matches!(current_route, Route::MovieDetails { .. });
    let nav_items = vec![
        NavItem {
            id: "home".to_string(),
            label: "Home".to_string(),
            is_active: matches!(current_route, Route::Home {}),
        },
        NavItem {
            id: "movies".to_string(),
            label: "Movies".to_string(),
            is_active: matches!(current_route, Route::Movies {} | Route::MoviesByGenre { .. }),
        },
    ];

    let mut clear_search = move || {
        search_input.set(String::new());
        search.set(None);
    };

    rsx! {
        HeaderView {
            nav_items,
            on_nav_click: move |id: String| {
                clear_search();
                match id.as_str() {
                    "home" => navigator().push(Route::Home {}),
                    "movies" => navigator().push(Route::Movies {}),
                    _ => None,
                };
            },
            on_brand_click: move |_| {
                clear_search();
                navigator().push(Route::Home {});
            },
            search_value: search_input(),
            on_search_change: move |value: String| search_input.set(value),
            on_search_submit: move |raw: String| {
                let Some(query) = submitted_query(&raw) else {
                    return;
                };
                search.set(Some(query));
                // Only the listing pages render results
                if on_detail_page {
                    navigator().push(Route::Home {});
                }
            },
            on_logout: move |_| {
                clear_search();
                client.logout();
            },
        }
        main { class: "pt-16",
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_submit_changes_nothing() {
        assert_eq!(submitted_query(""), None);
        assert_eq!(submitted_query("   "), None);
        assert_eq!(submitted_query("\t\n"), None);
    }

    #[test]
    fn submit_is_trimmed() {
        let query = submitted_query("  dune ");
        assert_eq!(query.as_ref().map(SearchQuery::as_str), Some("dune"));
    }
}
