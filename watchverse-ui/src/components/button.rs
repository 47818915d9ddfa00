//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button - accessibility and disabled handling without visual styling.
/// Used internally by Button and for cards/links that style themselves.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled: is_disabled,
            aria_label: aria_label.as_deref(),
            aria_busy: if loading { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Brand red - form submits
    Primary,
    /// White - the "Play" call to action on banners
    Light,
    /// Translucent gray - secondary banner actions
    Secondary,
    /// Text only
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

/// Styled button. Pass `r#type: "submit"` inside forms and leave `onclick` unset.
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let padding = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm",
        ButtonSize::Medium => "px-5 py-2",
        ButtonSize::Large => "px-8 py-3 text-lg",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-red-600 hover:bg-red-700 text-white font-semibold disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Light => "bg-white hover:bg-white/80 text-black font-semibold",
        ButtonVariant::Secondary => "bg-gray-500/70 hover:bg-gray-500/50 text-white font-semibold",
        ButtonVariant::Ghost => "text-gray-300 hover:text-white",
    };

    let base = "inline-flex items-center justify-center gap-2 rounded transition-colors";
    let computed_class = match &class {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            loading,
            r#type,
            class: Some(computed_class),
            onclick: move |e| {
                if let Some(handler) = &onclick {
                    handler.call(e);
                }
            },
            if loading {
                span { class: "animate-spin rounded-full h-4 w-4 border-b-2 border-current" }
            }
            {children}
        }
    }
}
