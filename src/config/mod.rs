//! Configuration types for the Paladins API client.
//!
//! # Overview
//!
//! - [`PaladinsConfig`]: credentials plus request behaviour settings
//! - [`PaladinsConfigBuilder`]: a builder for constructing [`PaladinsConfig`] instances
//! - [`DevId`]: a validated developer id
//! - [`AuthKey`]: a validated authorization key with masked debug output
//! - [`BaseUrl`]: a validated API base URL
//! - [`RetryBackoff`]: the wait between soft-failure retries
//! - [`Language`], [`Portal`], [`Queue`]: identifier enums used by endpoints
//!
//! # Example
//!
//! ```rust
//! use paladins_api::{PaladinsConfig, DevId, AuthKey};
//!
//! let config = PaladinsConfig::builder()
//!     .dev_id(DevId::new("1004").unwrap())
//!     .auth_key(AuthKey::new("23DF3C7E9BD14D84BF892AD206B6755C").unwrap())
//!     .max_tries(5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_tries(), 5);
//! assert_eq!(config.session_key(), "paladins.sessionId");
//! ```

mod newtypes;
mod retry;
mod types;

pub use newtypes::{AuthKey, BaseUrl, DevId};
pub use retry::RetryBackoff;
pub use types::{Language, Portal, Queue};

use std::time::Duration;

use crate::error::ConfigError;

/// Default number of attempts for a request that keeps failing softly.
pub const DEFAULT_MAX_TRIES: u32 = 3;

/// Default prefix of the session cache key.
pub const DEFAULT_CACHE_NAMESPACE: &str = "paladins";

/// Configuration for the Paladins API client.
///
/// Credentials are immutable for the lifetime of a client built from this
/// configuration.
///
/// # Thread Safety
///
/// `PaladinsConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct PaladinsConfig {
    dev_id: DevId,
    auth_key: AuthKey,
    base_url: BaseUrl,
    max_tries: u32,
    retry_backoff: RetryBackoff,
    timeout: Option<Duration>,
    cache_namespace: String,
    user_agent_prefix: Option<String>,
}

impl PaladinsConfig {
    /// Creates a new builder for constructing a `PaladinsConfig`.
    #[must_use]
    pub fn builder() -> PaladinsConfigBuilder {
        PaladinsConfigBuilder::new()
    }

    /// Returns the developer id.
    #[must_use]
    pub const fn dev_id(&self) -> &DevId {
        &self.dev_id
    }

    /// Returns the authorization key.
    #[must_use]
    pub const fn auth_key(&self) -> &AuthKey {
        &self.auth_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the total number of attempts made for a softly failing request.
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// Returns the delay policy between soft-failure retries.
    #[must_use]
    pub const fn retry_backoff(&self) -> &RetryBackoff {
        &self.retry_backoff
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the namespace of the session cache key.
    #[must_use]
    pub fn cache_namespace(&self) -> &str {
        &self.cache_namespace
    }

    /// Returns the cache key the session token is stored under.
    #[must_use]
    pub fn session_key(&self) -> String {
        format!("{}.sessionId", self.cache_namespace)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PaladinsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PaladinsConfig>();
};

/// Builder for constructing [`PaladinsConfig`] instances.
///
/// `dev_id` and `auth_key` are required.
///
/// # Defaults
///
/// - `base_url`: `https://api.paladins.com/paladinsapi.svc`
/// - `max_tries`: 3
/// - `retry_backoff`: immediate
/// - `timeout`: `None` (transport default)
/// - `cache_namespace`: `"paladins"`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct PaladinsConfigBuilder {
    dev_id: Option<DevId>,
    auth_key: Option<AuthKey>,
    base_url: Option<BaseUrl>,
    max_tries: Option<u32>,
    retry_backoff: Option<RetryBackoff>,
    timeout: Option<Duration>,
    cache_namespace: Option<String>,
    user_agent_prefix: Option<String>,
}

impl PaladinsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the developer id (required).
    #[must_use]
    pub fn dev_id(mut self, dev_id: DevId) -> Self {
        self.dev_id = Some(dev_id);
        self
    }

    /// Sets the authorization key (required).
    #[must_use]
    pub fn auth_key(mut self, key: AuthKey) -> Self {
        self.auth_key = Some(key);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the total number of attempts for a softly failing request.
    #[must_use]
    pub const fn max_tries(mut self, tries: u32) -> Self {
        self.max_tries = Some(tries);
        self
    }

    /// Sets the delay policy between soft-failure retries.
    #[must_use]
    pub const fn retry_backoff(mut self, backoff: RetryBackoff) -> Self {
        self.retry_backoff = Some(backoff);
        self
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the namespace of the session cache key.
    #[must_use]
    pub fn cache_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.cache_namespace = Some(namespace.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PaladinsConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `dev_id` or
    /// `auth_key` are not set, and [`ConfigError::InvalidMaxTries`] if
    /// `max_tries` is zero.
    pub fn build(self) -> Result<PaladinsConfig, ConfigError> {
        let dev_id = self
            .dev_id
            .ok_or(ConfigError::MissingRequiredField { field: "dev_id" })?;
        let auth_key = self
            .auth_key
            .ok_or(ConfigError::MissingRequiredField { field: "auth_key" })?;

        let max_tries = self.max_tries.unwrap_or(DEFAULT_MAX_TRIES);
        if max_tries == 0 {
            return Err(ConfigError::InvalidMaxTries { tries: max_tries });
        }

        Ok(PaladinsConfig {
            dev_id,
            auth_key,
            base_url: self.base_url.unwrap_or_default(),
            max_tries,
            retry_backoff: self.retry_backoff.unwrap_or_default(),
            timeout: self.timeout,
            cache_namespace: self
                .cache_namespace
                .unwrap_or_else(|| DEFAULT_CACHE_NAMESPACE.to_string()),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
