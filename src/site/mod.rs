//! Site routes and page content.

pub mod pages;
pub mod routes;

pub use pages::{page, HERO_HEADLINES};
pub use routes::Route;
