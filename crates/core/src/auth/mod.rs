//! Authentication primitives.
//!
//! Password hashing and verification with Argon2id. Token issuance lives in
//! the shared crate; routing-level auth lives in the API layer.

mod password;

pub use password::{PasswordError, hash_password, verify_password};
