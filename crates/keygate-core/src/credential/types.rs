//! Credential type definitions

use std::time::Duration;

/// Default lifetime of a credential record: 10 minutes
pub const DEFAULT_CREDENTIAL_TTL: Duration = Duration::from_secs(10 * 60);

/// Result of a login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// No record existed; one was created from the supplied password
    Created,
    /// The supplied password matched the stored hash
    Authenticated,
    /// The supplied password did not match
    Rejected,
}
