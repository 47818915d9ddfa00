use crate::Route;
use dioxus::prelude::*;
use watchverse_core::{ApiClient, ApiError};
use watchverse_ui::LoginFormView;

/// Message shown under an auth form for a failed submit.
pub(super) fn auth_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
        ApiError::Network(_) => "Can't reach the server. Check your connection.".to_string(),
        _ => "Something went wrong. Please try again.".to_string(),
    }
}

#[component]
pub fn Login() -> Element {
    let client: ApiClient = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |_: ()| {
        if submitting() {
            return;
        }
        let client = client.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match client.login(&email(), &password()).await {
                Ok(user) => {
                    tracing::info!("Signed in as {}", user.username);
                    navigator().replace(Route::Home {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(auth_error_message(&e)));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        LoginFormView {
            email: email(),
            password: password(),
            on_email_change: move |value: String| email.set(value),
            on_password_change: move |value: String| password.set(value),
            on_submit,
            on_register_click: move |_| {
                navigator().push(Route::Register {});
            },
            submitting: submitting(),
            error: error(),
        }
    }
}
