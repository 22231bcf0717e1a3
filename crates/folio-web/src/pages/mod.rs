//! Page components

pub mod admin;
pub mod public;
mod not_found;

pub use not_found::NotFoundPage;
