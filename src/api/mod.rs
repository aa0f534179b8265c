//! Endpoint wrappers.
//!
//! One method per remote endpoint, grouped by topic. Every wrapper is a
//! fixed method name plus an ordered parameter list handed to
//! [`PaladinsClient::request`](crate::PaladinsClient::request); responses
//! are returned as raw [`serde_json::Value`] because the API's payload
//! shapes vary per endpoint and change between patches.
//!
//! - [`system`]: connectivity, session and usage diagnostics
//! - [`champions`]: champions, cards, skins and items
//! - [`players`]: player lookup, profiles and per-player stats
//! - [`matches`]: match details, queues and leagues

pub mod champions;
pub mod matches;
pub mod players;
pub mod system;

pub use players::PlayerRef;
