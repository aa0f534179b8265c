//! # Paladins API Rust Client
//!
//! An async client for the Hi-Rez Paladins developer API, handling request
//! signing, session lifecycle and the API's in-band error convention.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PaladinsConfig`] and [`PaladinsConfigBuilder`]
//! - Validated newtypes for the developer id, authorization key and base URL
//! - MD5 request signing with minute-granular UTC timestamps
//! - Session reuse with a pluggable [`auth::SessionStore`]
//! - Bounded retries on in-band `ret_msg` failures
//! - One method per endpoint on [`PaladinsClient`], see [`api`]
//!
//! ## Quick Start
//!
//! ```rust
//! use paladins_api::{AuthKey, DevId, PaladinsConfig, RetryBackoff};
//! use std::time::Duration;
//!
//! let config = PaladinsConfig::builder()
//!     .dev_id(DevId::new("1004").unwrap())
//!     .auth_key(AuthKey::new("23DF3C7E9BD14D84BF892AD206B6755C").unwrap())
//!     .max_tries(3)
//!     .retry_backoff(RetryBackoff::exponential(Duration::from_millis(250)))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_tries(), 3);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use paladins_api::{Language, PaladinsClient, PlayerRef, Portal};
//!
//! let client = PaladinsClient::shared(config)?;
//!
//! // A session is created on first use and reused for 12 minutes.
//! let champions = client.get_champions(Language::English).await?;
//!
//! // Players can be looked up by id or by name on a portal.
//! let player = client.get_player("Androxus", Portal::Steam).await?;
//! let same = client.get_player(PlayerRef::Id(712_345), Portal::Steam).await?;
//! ```
//!
//! ## Sharing a Session Between Processes
//!
//! The API limits how many sessions a developer id may open per day. Back
//! the client with an external cache to share one session:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use paladins_api::PaladinsClient;
//!
//! let store: Arc<dyn paladins_api::auth::SessionStore> = Arc::new(MyRedisStore::new());
//! let client = PaladinsClient::with_store(config, store)?;
//! ```
//!
//! ## Error Handling
//!
//! Every request returns [`PaladinsError`]:
//!
//! - [`PaladinsError::Domain`]: the API kept answering with a `ret_msg`
//! - [`PaladinsError::NotFound`]: HTTP 404, never retried
//! - [`PaladinsError::Proxy`]: HTTP 502, never retried
//! - [`PaladinsError::Session`]: `createsession` was not approved
//! - [`PaladinsError::InvalidArgument`]: a player could not be resolved
//!
//! ## Design Principles
//!
//! - **No global state**: clients are instance-based; share one explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use api::PlayerRef;
pub use auth::Session;
pub use config::{
    AuthKey, BaseUrl, DevId, Language, PaladinsConfig, PaladinsConfigBuilder, Portal, Queue,
    RetryBackoff,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::{PaladinsClient, PaladinsError};
