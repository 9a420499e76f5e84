//! Service settings
//!
//! Loaded from an optional JSON file; anything not present in the file keeps
//! its default. The server binary layers command-line overrides on top.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

use crate::crypto::{HashParams, PasswordHashing};
use crate::error::{CoreError, Result};

/// Which key-value backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Networked Redis server
    #[default]
    Redis,
    /// In-process map, lost on exit
    Memory,
}

impl FromStr for StoreBackend {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => Err(CoreError::Config(format!("Unknown store backend: {}", other))),
        }
    }
}

/// Service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Address to bind the HTTP listener to
    pub host: String,
    /// Port for the HTTP listener
    pub port: u16,
    /// Key-value backend
    pub store: StoreBackend,
    /// Redis connection URL (used when `store` is `redis`)
    pub redis_url: String,
    /// Lifetime of credential records in seconds
    pub credential_ttl_secs: u64,
    /// Password hashing cost
    pub hash: HashParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            store: StoreBackend::Redis,
            redis_url: "redis://127.0.0.1:6379/0".to_string(),
            credential_ttl_secs: 600,
            hash: HashParams::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Check values that would otherwise only fail at request time
    pub fn validate(&self) -> Result<()> {
        if self.credential_ttl_secs == 0 {
            return Err(CoreError::Config(
                "credentialTtlSecs must be greater than zero".to_string(),
            ));
        }

        PasswordHashing::new(self.hash)?;
        Ok(())
    }

    /// Credential lifetime as a duration
    pub fn credential_ttl(&self) -> Duration {
        Duration::from_secs(self.credential_ttl_secs)
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
