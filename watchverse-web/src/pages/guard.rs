//! Route guards
//!
//! Both layouts follow `AuthState`, so a logout from anywhere (the header
//! button or a 401 from any fetch) redirects on the next render.

use crate::{AuthState, Route};
use dioxus::prelude::*;

/// Protected area: signed-out users are sent to `/login`.
#[component]
pub fn AuthGuard() -> Element {
    let AuthState(authenticated) = use_context();

    use_effect(move || {
        if !authenticated() {
            tracing::debug!("Not signed in, redirecting to login");
            navigator().replace(Route::Login {});
        }
    });

    if !authenticated() {
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

/// Login and register: signed-in users are sent home.
#[component]
pub fn GuestOnly() -> Element {
    let AuthState(authenticated) = use_context();

    use_effect(move || {
        if authenticated() {
            navigator().replace(Route::Home {});
        }
    });

    if authenticated() {
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
