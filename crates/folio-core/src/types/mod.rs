//! Payload types exchanged with the content backend

mod account;
mod content;
mod paginated;
mod validation;

pub use account::*;
pub use content::*;
pub use paginated::*;
pub use validation::*;
