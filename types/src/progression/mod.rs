//! Progression domain types.
//!
//! Defines the ladder constants, the session/gamble state records and the validation errors
//! shared by the execution layer and clients.

mod constants;
mod error;
mod session;

pub use constants::*;
pub use error::*;
pub use session::*;

#[cfg(test)]
mod tests;
