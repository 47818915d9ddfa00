//! Login and registration forms
//!
//! Controlled views: field values, the in-flight flag and the error message
//! all come from the page, which owns the session calls.

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::helpers::ErrorDisplay;
use crate::components::icons::FilmIcon;
use crate::components::text_input::{TextInput, TextInputSize, TextInputType};
use dioxus::prelude::*;

#[component]
fn AuthCard(title: &'static str, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center bg-black bg-gradient-to-br from-black via-gray-950 to-red-950/40 px-4",
            div { class: "flex items-center gap-2 text-red-600 text-4xl font-extrabold mb-8",
                FilmIcon { class: "w-9 h-9" }
                "WatchVerse"
            }
            div { class: "w-full max-w-md bg-black/75 rounded-lg p-8 md:p-12 shadow-2xl",
                h1 { class: "text-3xl font-bold text-white mb-6", "{title}" }
                {children}
            }
        }
    }
}

#[component]
pub fn LoginFormView(
    email: String,
    password: String,
    on_email_change: EventHandler<String>,
    on_password_change: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_register_click: EventHandler<()>,
    #[props(default)] submitting: bool,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        AuthCard { title: "Sign In",
            form {
                class: "space-y-4",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                if let Some(message) = error {
                    ErrorDisplay { message }
                }
                TextInput {
                    value: email,
                    on_input: on_email_change,
                    size: TextInputSize::Medium,
                    input_type: TextInputType::Email,
                    placeholder: "Email",
                    required: true,
                    autofocus: true,
                    disabled: submitting,
                }
                TextInput {
                    value: password,
                    on_input: on_password_change,
                    size: TextInputSize::Medium,
                    input_type: TextInputType::Password,
                    placeholder: "Password",
                    required: true,
                    disabled: submitting,
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    r#type: "submit",
                    loading: submitting,
                    class: "w-full mt-4",
                    if submitting { "Signing in..." } else { "Sign In" }
                }
            }
            p { class: "mt-8 text-gray-400",
                "New to WatchVerse? "
                button {
                    class: "text-white hover:underline",
                    onclick: move |_| on_register_click.call(()),
                    "Sign up now"
                }
            }
        }
    }
}

#[component]
pub fn RegisterFormView(
    username: String,
    email: String,
    password: String,
    on_username_change: EventHandler<String>,
    on_email_change: EventHandler<String>,
    on_password_change: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_login_click: EventHandler<()>,
    #[props(default)] submitting: bool,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        AuthCard { title: "Sign Up",
            form {
                class: "space-y-4",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                if let Some(message) = error {
                    ErrorDisplay { message }
                }
                TextInput {
                    value: username,
                    on_input: on_username_change,
                    size: TextInputSize::Medium,
                    placeholder: "Username",
                    required: true,
                    autofocus: true,
                    disabled: submitting,
                }
                TextInput {
                    value: email,
                    on_input: on_email_change,
                    size: TextInputSize::Medium,
                    input_type: TextInputType::Email,
                    placeholder: "Email",
                    required: true,
                    disabled: submitting,
                }
                TextInput {
                    value: password,
                    on_input: on_password_change,
                    size: TextInputSize::Medium,
                    input_type: TextInputType::Password,
                    placeholder: "Password",
                    required: true,
                    disabled: submitting,
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    r#type: "submit",
                    loading: submitting,
                    class: "w-full mt-4",
                    if submitting { "Creating account..." } else { "Sign Up" }
                }
            }
            p { class: "mt-8 text-gray-400",
                "Already have an account? "
                button {
                    class: "text-white hover:underline",
                    onclick: move |_| on_login_click.call(()),
                    "Sign in"
                }
            }
        }
    }
}
