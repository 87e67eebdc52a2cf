//! Admissibility rules for candidate entries.
//!
//! Every create and update goes through this module; deletes do not.
//! Validation is stateless: each call is a pure function of the candidate,
//! the owner's stored entries, and the caller-supplied current date.

pub mod error;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use service::{ValidationService, VacationBalance};
