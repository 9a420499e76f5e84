//! Password hashing for stored credentials
//!
//! Argon2id with a random per-password salt; hashes are stored as PHC
//! strings so the parameters travel with the hash.

mod password;

pub use password::{HashParams, PasswordHashing};

#[cfg(test)]
pub(crate) use password::test_hashing;
