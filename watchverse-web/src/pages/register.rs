use super::login::auth_error_message;
use crate::Route;
use dioxus::prelude::*;
use watchverse_core::ApiClient;
use watchverse_ui::RegisterFormView;

#[component]
pub fn Register() -> Element {
    let client: ApiClient = use_context();
    let mut username = use_signal(String::new);
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
            match client.register(&username(), &email(), &password()).await {
                Ok(user) => {
                    tracing::info!("Registered {}", user.username);
                    navigator().replace(Route::Home {});
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    error.set(Some(auth_error_message(&e)));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        RegisterFormView {
            username: username(),
            email: email(),
            password: password(),
            on_username_change: move |value: String| username.set(value),
            on_email_change: move |value: String| email.set(value),
            on_password_change: move |value: String| password.set(value),
            on_submit,
            on_login_click: move |_| {
                navigator().push(Route::Login {});
            },
            submitting: submitting(),
            error: error(),
        }
    }
}
