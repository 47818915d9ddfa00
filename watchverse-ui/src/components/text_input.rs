//! Reusable text input component

use dioxus::prelude::*;

/// Input `type` attribute
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextInputType {
    #[default]
    Text,
    Email,
    Password,
    Search,
}

impl TextInputType {
    fn as_str(self) -> &'static str {
        match self {
            TextInputType::Text => "text",
            TextInputType::Email => "email",
            TextInputType::Password => "password",
            TextInputType::Search => "search",
        }
    }
}

/// Text input size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputSize {
    /// Header search box
    Small,
    /// Auth form fields
    Medium,
}

/// Controlled text input
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    size: TextInputSize,
    #[props(default)] input_type: TextInputType,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] autofocus: bool,
) -> Element {
    let padding = match size {
        TextInputSize::Small => "px-3 py-1.5 text-sm",
        TextInputSize::Medium => "px-4 py-3",
    };

    let base = "w-full bg-gray-800/80 border border-gray-700 rounded text-white placeholder-gray-500 focus:outline-none focus:border-white";
    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };
    let class = format!("{base} {padding} {disabled_class}");

    rsx! {
        input {
            r#type: input_type.as_str(),
            class: "{class}",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            disabled,
            required,
            oninput: move |e| on_input.call(e.value()),
            onmounted: move |event| async move {
                if autofocus {
                    let _ = event.data().set_focus(true).await;
                }
            },
        }
    }
}
