//! Shared UI components

pub mod auth_form;
pub mod button;
pub mod featured_movie;
pub mod genre_dropdown;
pub mod header;
pub mod helpers;
pub mod icons;
pub mod movie_card;
pub mod movie_detail;
pub mod movie_row;
pub mod not_found;
pub mod text_input;

pub use auth_form::{LoginFormView, RegisterFormView};
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use featured_movie::FeaturedMovie;
pub use genre_dropdown::GenreDropdown;
pub use header::{HeaderView, NavItem};
pub use helpers::{
    BackButton, EmptyState, ErrorDisplay, FallbackImage, LoadingSpinner, PageContainer,
};
pub use icons::{
    AlertTriangleIcon, ArrowLeftIcon, CalendarIcon, ChevronDownIcon, ClockIcon, FilmIcon,
    ImageIcon, InfoIcon, LogOutIcon, PlayIcon, PlusIcon, SearchIcon, StarIcon, TrendingUpIcon,
};
pub use movie_card::MovieCard;
pub use movie_detail::{MovieDetailView, MovieNotFoundView};
pub use movie_row::{MovieGrid, MovieRow};
pub use not_found::NotFoundView;
pub use text_input::{TextInput, TextInputSize, TextInputType};
