//! Image with a fallback chain
//!
//! Tries `image.src`, then `image.fallback`, and finally renders a placeholder
//! tile. Failed URLs are remembered by value, so new props start a fresh chain.

use crate::components::icons::ImageIcon;
use crate::display_types::ImageSource;
use dioxus::prelude::*;

fn next_candidate<'a>(image: &'a ImageSource, failed: &[String]) -> Option<&'a str> {
    [image.src.as_deref(), image.fallback.as_deref()]
        .into_iter()
        .flatten()
        .find(|url| !failed.iter().any(|f| f == url))
}

#[component]
pub fn FallbackImage(
    image: ImageSource,
    alt: String,
    #[props(default = "w-full h-full object-cover".to_string())]
    class: String,
) -> Element {
    let mut failed = use_signal(Vec::<String>::new);
    let current = next_candidate(&image, &failed.read()).map(str::to_owned);

    match current {
        Some(url) => {
            let failed_url = url.clone();
            rsx! {
                img {
                    class: "{class}",
                    src: "{url}",
                    alt: "{alt}",
                    loading: "lazy",
                    onerror: move |_| failed.write().push(failed_url.clone()),
                }
            }
        }
        None => rsx! {
            div {
                class: "{class} flex items-center justify-center bg-gray-800 text-gray-500",
                role: "img",
                aria_label: "{alt}",
                ImageIcon { class: "w-10 h-10" }
            }
        },
    }
}
