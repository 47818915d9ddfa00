//! Common helper UI components

mod back_button;
mod empty_state;
mod error_display;
mod fallback_image;
mod loading_spinner;
mod page_container;

pub use back_button::BackButton;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use fallback_image::FallbackImage;
pub use loading_spinner::LoadingSpinner;
pub use page_container::PageContainer;
