mod guard;
mod home;
mod layout;
mod login;
mod movie_details;
mod movies;
mod not_found;
mod register;

pub use guard::{AuthGuard, GuestOnly};
pub use home::Home;
pub use layout::{AppLayout, SearchState};
pub use login::Login;
pub use movie_details::MovieDetails;
pub use movies::{Movies, MoviesByGenre};
pub use not_found::NotFound;
pub use register::Register;
