//! Request-time error types.
//!
//! Every endpoint method returns `Result<_, PaladinsError>`. The variants
//! map one-to-one onto the ways a call can fail:
//!
//! - [`PaladinsError::NotFound`]: HTTP 404
//! - [`PaladinsError::Proxy`]: HTTP 502 from the API gateway
//! - [`PaladinsError::Session`]: session creation was rejected or malformed
//! - [`PaladinsError::Domain`]: the API kept answering with an in-band
//!   error message until the attempts ran out
//! - [`PaladinsError::InvalidArgument`]: a player reference could not be used
//! - [`PaladinsError::Status`], [`PaladinsError::InvalidResponse`]: the body
//!   could not be decoded
//! - [`PaladinsError::Network`]: transport failure
//!
//! # Example
//!
//! ```rust,ignore
//! use paladins_api::PaladinsError;
//!
//! match client.get_player("Androxus", Portal::Steam).await {
//!     Ok(player) => println!("{player}"),
//!     Err(PaladinsError::InvalidArgument { reason }) => eprintln!("{reason}"),
//!     Err(PaladinsError::Domain { message, tries }) => {
//!         eprintln!("API refused after {tries} tries: {message}");
//!     }
//!     Err(other) => eprintln!("request failed: {other}"),
//! }
//! ```

use thiserror::Error;

/// Unified error type for all request-time failures.
#[derive(Debug, Error)]
pub enum PaladinsError {
    /// The endpoint answered 404.
    #[error("Not Found: {url}")]
    NotFound {
        /// The requested URL.
        url: String,
    },

    /// The API gateway answered 502.
    #[error("Paladins/Proxy error: {url}")]
    Proxy {
        /// The requested URL.
        url: String,
    },

    /// The remote service refused to create a session.
    #[error("Session could not be created: {message}")]
    Session {
        /// The remote message, verbatim.
        message: String,
    },

    /// The API reported an in-band error on every attempt.
    #[error("Request failed after {tries} tries: {message}")]
    Domain {
        /// The `ret_msg` of the last response.
        message: String,
        /// The number of attempts made.
        tries: u32,
    },

    /// A caller-supplied argument could not be turned into a request.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: String,
    },

    /// A non-success status with a body that is not JSON.
    #[error("Unexpected HTTP status {code}: {url}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The requested URL.
        url: String,
    },

    /// A success status with a body that is not JSON.
    #[error("Invalid JSON response from {url}: {message}")]
    InvalidResponse {
        /// The requested URL.
        url: String,
        /// The decoder error.
        message: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
