//! Per-page view state machine.
//!
//! ```text
//! Idle ──begin──▶ Loading ──finish(Ok, non-empty)──▶ Ready(data)
//!                    │    ──finish(Ok, empty)──────▶ Empty
//!                    │    ──finish(Err NotFound)───▶ NotFound
//!                    └────finish(Err other)───────▶ Error(message)
//! any state ──begin──▶ Loading
//! ```
//!
//! Every `begin` hands out a ticket with a higher sequence number than the
//! last. `finish` only applies the latest ticket, so a slow response for an
//! earlier trigger (e.g. a genre the user already switched away from) can
//! never overwrite a newer one.

use crate::client::ApiError;
use crate::models::{Movie, MovieResponse};
use tracing::{debug, warn};

/// Data a page can show, and whether it counts as "nothing found".
pub trait ViewData {
    fn is_empty(&self) -> bool;
}

impl ViewData for MovieResponse {
    fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl ViewData for Movie {
    fn is_empty(&self) -> bool {
        false
    }
}

impl<T> ViewData for Vec<T> {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Empty,
    NotFound,
    Error(String),
}

/// What a page renders for its current state.
///
/// A failed fetch is never shown as such: the page keeps its last results,
/// or looks the same as an empty result. Details go to the log only.
#[derive(Debug, PartialEq)]
pub enum Visible<'a, T> {
    Loading,
    Data(&'a T),
    Empty,
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct ViewController<T> {
    name: &'static str,
    state: ViewState<T>,
    latest: u64,
    previous: Option<T>,
}

impl<T: ViewData + Clone> ViewController<T> {
    /// `name` only labels log lines.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: ViewState::Idle,
            latest: 0,
            previous: None,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// Enter `Loading` for a new fetch and return its ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.state = ViewState::Loading;
        RequestTicket(self.latest)
    }

    /// Apply a fetch result. Returns `false` if the ticket was superseded
    /// and the result was dropped.
    pub fn finish(&mut self, ticket: RequestTicket, result: Result<T, ApiError>) -> bool {
        if ticket.0 != self.latest {
            debug!(
                "{}: dropping stale response #{} (latest #{})",
                self.name, ticket.0, self.latest
            );
            return false;
        }

        self.state = match result {
            Ok(data) if data.is_empty() => {
                self.previous = None;
                ViewState::Empty
            }
            Ok(data) => {
                self.previous = Some(data.clone());
                ViewState::Ready(data)
            }
            Err(ApiError::NotFound) => {
                debug!("{}: not found", self.name);
                self.previous = None;
                ViewState::NotFound
            }
            Err(e) => {
                warn!("{}: fetch failed: {}", self.name, e);
                ViewState::Error(e.to_string())
            }
        };
        true
    }

    /// Last successfully loaded data, kept across later loads and failures.
    pub fn previous(&self) -> Option<&T> {
        self.previous.as_ref()
    }

    /// What to render: the current data, or the previous data while a new
    /// load is running or after it failed.
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            ViewState::Ready(data) => Some(data),
            ViewState::Loading | ViewState::Error(_) => self.previous.as_ref(),
            ViewState::Idle | ViewState::Empty | ViewState::NotFound => None,
        }
    }

    pub fn visible(&self) -> Visible<'_, T> {
        match &self.state {
            ViewState::Idle | ViewState::Loading => Visible::Loading,
            ViewState::Ready(data) => Visible::Data(data),
            ViewState::Empty => Visible::Empty,
            ViewState::NotFound => Visible::NotFound,
            ViewState::Error(_) => self.previous().map_or(Visible::Empty, Visible::Data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(titles: &[&str]) -> MovieResponse {
        let results = titles
            .iter()
            .enumerate()
            .map(|(i, t)| {
                serde_json::from_value(serde_json::json!({"id": i as i64 + 1, "title": t}))
                    .unwrap()
            })
            .collect();
        MovieResponse { page: 1, results }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn starts_idle_and_loads() {
        let mut view = ViewController::<MovieResponse>::new("test");
        assert_eq!(view.state(), &ViewState::Idle);

        let ticket = view.begin();
        assert!(view.is_loading());
        assert!(view.finish(ticket, Ok(page(&["A"]))));
        assert_eq!(view.state(), &ViewState::Ready(page(&["A"])));
    }

    #[test]
    fn empty_page_is_empty_not_error() {
        let mut view = ViewController::<MovieResponse>::new("test");
        let ticket = view.begin();
        view.finish(ticket, Ok(page(&[])));
        assert_eq!(view.state(), &ViewState::Empty);
        assert_eq!(view.data(), None);
    }

    #[test]
    fn not_found_is_distinct_from_error() {
        let mut view = ViewController::<Movie>::new("detail");
        let ticket = view.begin();
        view.finish(ticket, Err(ApiError::NotFound));
        assert_eq!(view.state(), &ViewState::NotFound);
    }

    #[test]
    fn failure_keeps_previous_results_visible() {
        let mut view = ViewController::<MovieResponse>::new("test");
        let first = view.begin();
        view.finish(first, Ok(page(&["A", "B"])));

        let second = view.begin();
        assert_eq!(view.data(), Some(&page(&["A", "B"])));
        view.finish(second, Err(server_error()));

        assert!(matches!(view.state(), ViewState::Error(msg) if msg.contains("boom")));
        assert_eq!(view.data(), Some(&page(&["A", "B"])));
    }

    #[test]
    fn failure_shows_previous_results_instead_of_an_error() {
        let mut view = ViewController::<MovieResponse>::new("test");
        let first = view.begin();
        view.finish(first, Ok(page(&["A"])));
        let second = view.begin();
        assert_eq!(view.visible(), Visible::Loading);
        view.finish(second, Err(server_error()));

        assert_eq!(view.visible(), Visible::Data(&page(&["A"])));
    }

    #[test]
    fn failure_without_previous_results_looks_empty() {
        let mut view = ViewController::<MovieResponse>::new("test");
        let ticket = view.begin();
        view.finish(ticket, Err(server_error()));

        assert!(matches!(view.state(), ViewState::Error(_)));
        assert_eq!(view.visible(), Visible::Empty);
    }

    #[test]
    fn failed_detail_load_without_data_is_not_shown_as_error() {
        let mut view = ViewController::<Movie>::new("detail");
        let ticket = view.begin();
        view.finish(ticket, Err(server_error()));
        assert_eq!(view.visible(), Visible::Empty);

        let ticket = view.begin();
        view.finish(ticket, Err(ApiError::NotFound));
        assert_eq!(view.visible(), Visible::NotFound);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut view = ViewController::<MovieResponse>::new("test");
        let slow = view.begin();
        let fast = view.begin();

        assert!(view.finish(fast, Ok(page(&["Horror"]))));
        assert!(!view.finish(slow, Ok(page(&["Action"]))));
        assert_eq!(view.state(), &ViewState::Ready(page(&["Horror"])));
    }

    #[test]
    fn stale_failure_does_not_clobber_loading() {
        let mut view = ViewController::<MovieResponse>::new("test");
        let old = view.begin();
        let _current = view.begin();
        assert!(!view.finish(old, Err(server_error())));
        assert!(view.is_loading());
    }

    #[test]
    fn new_results_replace_old_wholesale() {
        let mut view = ViewController::<MovieResponse>::new("test");
        let t = view.begin();
        view.finish(t, Ok(page(&["A", "B", "C"])));
        let t = view.begin();
        view.finish(t, Ok(page(&["D"])));
        assert_eq!(view.data(), Some(&page(&["D"])));
    }
}
