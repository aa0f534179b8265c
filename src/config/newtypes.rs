//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated developer id.
///
/// The id is the first URL segment of every authenticated request and is
/// part of every signature.
///
/// # Example
///
/// ```rust
/// use paladins_api::DevId;
///
/// let id = DevId::new("1004").unwrap();
/// assert_eq!(id.as_ref(), "1004");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DevId(String);

impl DevId {
    /// Creates a new validated developer id.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDevId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ConfigError::EmptyDevId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for DevId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DevId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated authorization key.
///
/// The key never leaves the process: it only feeds the request signature.
/// Its `Debug` output is masked so it cannot leak into logs.
///
/// # Example
///
/// ```rust
/// use paladins_api::AuthKey;
///
/// let key = AuthKey::new("23DF3C7E9BD14D84BF892AD206B6755C").unwrap();
/// assert_eq!(format!("{:?}", key), "AuthKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthKey(String);

impl AuthKey {
    /// Creates a new validated authorization key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(ConfigError::EmptyAuthKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for AuthKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthKey(*****)")
    }
}

/// A validated API base URL.
///
/// The URL must carry a scheme and a host. A trailing slash is stripped so
/// that method paths can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use paladins_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.paladins.com/paladinsapi.svc/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.paladins.com/paladinsapi.svc");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The public Paladins API endpoint.
    pub const DEFAULT: &'static str = "https://api.paladins.com/paladinsapi.svc";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or
    /// no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string
        let host = rest.split([':', '/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() {
            return Err(invalid());
        }

        Ok(Self(url))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
