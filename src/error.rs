//! Error types for client configuration.
//!
//! Everything that can go wrong while assembling a [`PaladinsConfig`] is a
//! [`ConfigError`]. Request-time failures live in
//! [`crate::clients::PaladinsError`].
//!
//! # Example
//!
//! ```rust
//! use paladins_api::{DevId, ConfigError};
//!
//! let result = DevId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyDevId)));
//! ```
//!
//! [`PaladinsConfig`]: crate::PaladinsConfig

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Developer id cannot be empty.
    #[error("Developer id cannot be empty. Please provide the id issued with your API credentials.")]
    EmptyDevId,

    /// Authorization key cannot be empty.
    #[error("Authorization key cannot be empty. Please provide the key issued with your API credentials.")]
    EmptyAuthKey,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.paladins.com/paladinsapi.svc').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The attempt bound must allow at least one request.
    #[error("Invalid max_tries {tries}. At least one attempt is required.")]
    InvalidMaxTries {
        /// The rejected value.
        tries: u32,
    },

    /// A language code did not match any known language.
    #[error("Unknown language code '{code}'")]
    UnknownLanguage {
        /// The unrecognized code.
        code: String,
    },
}
