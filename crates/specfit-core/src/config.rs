//! Explicit configuration objects passed to adapters at construction.
//!
//! Nothing in core reads global state on its own. The composition root
//! builds these (optionally from environment variables) and hands them to
//! the catalog adapter, the hardware probe and the check service.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::paths::{PathError, default_catalog_path};

/// Environment variable naming the catalog driver.
pub const ENV_DB_DRIVER: &str = "DB_DRIVER";
/// Environment variable naming the catalog host.
pub const ENV_DB_SERVER: &str = "DB_SERVER";
/// Environment variable naming the catalog database.
pub const ENV_DB_DATABASE: &str = "DB_DATABASE";
/// Environment variable holding the catalog user name.
pub const ENV_DB_USERNAME: &str = "DB_USERNAME";
/// Environment variable holding the catalog password.
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";

/// The only catalog driver currently implemented.
pub const SQLITE_DRIVER: &str = "sqlite";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported catalog driver '{0}' (supported: sqlite)")]
    UnsupportedDriver(String),

    #[error("Catalog database must not be empty")]
    EmptyDatabase,

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Login for a catalog backend.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Connection settings for the requirement catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Backend driver name.
    pub driver: String,
    /// Server host for networked backends. Unused by `sqlite`.
    pub host: Option<String>,
    /// Database name; a file path for `sqlite`.
    pub database: String,
    /// Optional login. Unused by `sqlite`.
    pub credentials: Option<Credentials>,
}

impl CatalogConfig {
    /// Configuration for a `SQLite` catalog file.
    pub fn sqlite(path: impl Into<PathBuf>) -> Self {
        Self {
            driver: SQLITE_DRIVER.to_string(),
            host: None,
            database: path.into().to_string_lossy().into_owned(),
            credentials: None,
        }
    }

    /// Build from the process environment (`DB_DRIVER`, `DB_SERVER`,
    /// `DB_DATABASE`, `DB_USERNAME`, `DB_PASSWORD`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys fall back to
    /// the `sqlite` driver and the default catalog path.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let driver = get(ENV_DB_DRIVER).unwrap_or_else(|| SQLITE_DRIVER.to_string());
        let database = match get(ENV_DB_DATABASE) {
            Some(db) => db,
            None => default_catalog_path()?.to_string_lossy().into_owned(),
        };
        let credentials = match (get(ENV_DB_USERNAME), get(ENV_DB_PASSWORD)) {
            (Some(username), password) => Some(Credentials {
                username,
                password: password.unwrap_or_default(),
            }),
            (None, _) => None,
        };

        let config = Self {
            driver,
            host: get(ENV_DB_SERVER),
            database,
            credentials,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the adapter can honor this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.driver.eq_ignore_ascii_case(SQLITE_DRIVER) {
            return Err(ConfigError::UnsupportedDriver(self.driver.clone()));
        }
        if self.database.trim().is_empty() {
            return Err(ConfigError::EmptyDatabase);
        }
        Ok(())
    }

    /// Path of the catalog file for the `sqlite` driver.
    pub fn sqlite_path(&self) -> PathBuf {
        PathBuf::from(&self.database)
    }
}

/// Settings for sampling the local host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Free storage is measured on the disk holding this path.
    pub storage_path: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        let root = if cfg!(windows) { "C:\\" } else { "/" };
        Self {
            storage_path: PathBuf::from(root),
        }
    }
}

impl ProbeConfig {
    #[must_use]
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }
}

/// Retry behavior for transient catalog failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u8,
    /// Delay before the first retry; doubled for each further retry.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    #[must_use]
    pub const fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Delay before retry number `attempt` (1-based).
    #[must_use]
    pub fn delay_for(&self, attempt: u8) -> Duration {
        let exponent = u32::from(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(2u32.saturating_pow(exponent))
    }
}
