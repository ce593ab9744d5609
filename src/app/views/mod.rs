//! # Views
//!
//! Rendering of the application state: the pure card formatter and the
//! terminal screen that frames it.

pub mod card;
pub mod screen;

pub use card::{profile_card_lines, website_link};
pub use screen::ProfileScreen;
