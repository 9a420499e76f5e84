//! # keygate-core
//!
//! Core functionality for keygate:
//! - Key-value store abstraction with Redis and in-memory backends
//! - Argon2id password hashing
//! - Login-or-register flow over expiring credential records
//! - Item CRUD over the same store

pub mod credential;
pub mod crypto;
pub mod error;
pub mod item;
pub mod settings;
pub mod storage;
mod keygate;

pub use credential::{CredentialStore, LoginOutcome, LoginService, DEFAULT_CREDENTIAL_TTL};
pub use crypto::{HashParams, PasswordHashing};
pub use error::{CoreError, Result};
pub use item::{Item, ItemStore};
pub use keygate::Keygate;
pub use settings::{Settings, StoreBackend};
pub use storage::{KeyValueStore, MemoryStore, RedisStore};
