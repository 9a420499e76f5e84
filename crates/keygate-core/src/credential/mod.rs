//! Credential storage and the login-or-register flow

mod login;
mod store;
mod types;

pub use login::LoginService;
pub use store::CredentialStore;
pub use types::*;
