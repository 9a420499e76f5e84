//! Login orchestration
//!
//! First login for an identifier registers it; later logins verify against
//! the stored hash. The lookup and the create are separate store round
//! trips, so two simultaneous first logins for the same identifier can both
//! register and the last write wins.

use tracing::{debug, info, warn};

use super::store::CredentialStore;
use super::types::LoginOutcome;
use crate::crypto::PasswordHashing;
use crate::error::{CoreError, Result};

/// Login orchestrator
#[derive(Clone)]
pub struct LoginService {
    /// Credential store adapter
    credentials: CredentialStore,
    /// Password hasher
    hashing: PasswordHashing,
}

impl LoginService {
    /// Create a new login service
    pub fn new(credentials: CredentialStore, hashing: PasswordHashing) -> Self {
        Self {
            credentials,
            hashing,
        }
    }

    /// Log in, registering the identifier if it has no stored credential
    pub async fn login(&self, login_id: &str, password: &str) -> Result<LoginOutcome> {
        debug!("Login attempt for {}", login_id);

        let Some(stored_hash) = self.credentials.get(login_id).await? else {
            let password_hash = self.hashing.hash(password)?;
            self.credentials.set(login_id, &password_hash).await?;

            info!("Created user {}", login_id);
            return Ok(LoginOutcome::Created);
        };

        if self.hashing.verify(password, &stored_hash) {
            info!("Login successful for {}", login_id);
            Ok(LoginOutcome::Authenticated)
        } else {
            warn!("Login failed for {}", login_id);
            Ok(LoginOutcome::Rejected)
        }
    }

    /// Verify a password for an identifier that must already exist
    ///
    /// Unlike [`login`](Self::login) this never registers; an unknown
    /// identifier is an error.
    pub async fn authenticate(&self, login_id: &str, password: &str) -> Result<bool> {
        let stored_hash = self
            .credentials
            .get(login_id)
            .await?
            .ok_or_else(|| CoreError::CredentialNotFound(login_id.to_string()))?;

        Ok(self.hashing.verify(password, &stored_hash))
    }

    /// Credential store backing this service
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::test_hashing;
    use crate::storage::{KeyValueStore, MemoryStore};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_service() -> (LoginService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let service = LoginService::new(CredentialStore::new(store.clone()), test_hashing());
        (service, store)
    }

    /// Store whose every operation fails
    struct FailingStore;

    #[async_trait]
    impl KeyValueStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(CoreError::Store("connection refused".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str, _ttl: Option<Duration>) -> Result<()> {
            Err(CoreError::Store("connection refused".to_string()))
        }

        async fn delete(&self, _key: &str) -> Result<()> {
            Err(CoreError::Store("connection refused".to_string()))
        }

        fn backend_name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_first_login_creates() {
        let (service, store) = test_service();

        let outcome = service.login("u1", "secret").await.unwrap();

        assert_eq!(outcome, LoginOutcome::Created);
        let stored = store.get("u1").await.unwrap().unwrap();
        assert_ne!(stored, "secret");
        assert!(stored.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_second_login_same_password() {
        let (service, _) = test_service();

        service.login("u1", "secret").await.unwrap();
        let outcome = service.login("u1", "secret").await.unwrap();

        assert_eq!(outcome, LoginOutcome::Authenticated);
    }

    #[tokio::test]
    async fn test_second_login_wrong_password() {
        let (service, _) = test_service();

        service.login("u1", "secret").await.unwrap();
        let outcome = service.login("u1", "not-the-secret").await.unwrap();

        assert_eq!(outcome, LoginOutcome::Rejected);
    }

    #[tokio::test]
    async fn test_rejected_login_keeps_original_hash() {
        let (service, store) = test_service();

        service.login("u1", "secret").await.unwrap();
        let before = store.get("u1").await.unwrap();
        service.login("u1", "other").await.unwrap();

        assert_eq!(store.get("u1").await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_login_against_non_hash_value_is_rejected() {
        let (service, store) = test_service();

        // An item stored under the same key aliases the identifier
        store.set("shared-id", "item-value", None).await.unwrap();

        let outcome = service.login("shared-id", "item-value").await.unwrap();
        assert_eq!(outcome, LoginOutcome::Rejected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_credential_expires_after_ttl() {
        let (service, store) = test_service();

        assert_eq!(
            service.login("u1", "pw").await.unwrap(),
            LoginOutcome::Created
        );

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(
            service.login("u1", "pw").await.unwrap(),
            LoginOutcome::Authenticated
        );

        tokio::time::advance(Duration::from_secs(11 * 60 - 1)).await;
        assert_eq!(store.get("u1").await.unwrap(), None);

        // Expired identifiers register again
        assert_eq!(
            service.login("u1", "new-pw").await.unwrap(),
            LoginOutcome::Created
        );
    }

    #[tokio::test]
    async fn test_store_error_on_lookup() {
        let service = LoginService::new(
            CredentialStore::new(Arc::new(FailingStore)),
            test_hashing(),
        );

        let result = service.login("u1", "pw").await;
        assert!(matches!(result, Err(CoreError::Store(_))));
    }

    #[tokio::test]
    async fn test_authenticate() {
        let (service, _) = test_service();

        service.login("u1", "secret").await.unwrap();

        assert!(service.authenticate("u1", "secret").await.unwrap());
        assert!(!service.authenticate("u1", "wrong").await.unwrap());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_does_not_register() {
        let (service, store) = test_service();

        let result = service.authenticate("ghost", "pw").await;

        assert!(matches!(result, Err(CoreError::CredentialNotFound(id)) if id == "ghost"));
        assert!(store.is_empty().await);
    }
}
