//! Session storage capability.
//!
//! The client keeps its session id in a [`SessionStore`]. Any key/value
//! store that supports per-entry expiry can back it: implement the trait
//! over your cache and hand it to
//! [`PaladinsClient::with_store`](crate::PaladinsClient::with_store).
//! Without one, the client uses [`LocalSessionStore`], which keeps a single
//! entry in process memory.
//!
//! # Example
//!
//! ```rust
//! use chrono::Duration;
//! use paladins_api::auth::{LocalSessionStore, SessionStore};
//!
//! let store = LocalSessionStore::new();
//! store.save("paladins.sessionId", "ABC123", Duration::minutes(12));
//!
//! assert!(store.contains("paladins.sessionId"));
//! assert_eq!(store.fetch("paladins.sessionId").as_deref(), Some("ABC123"));
//! ```

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// A key/value store with per-entry expiry.
///
/// Implementations must report an entry as absent once its TTL has elapsed.
/// A zero TTL is how the client discards a session the API rejected.
pub trait SessionStore: Send + Sync {
    /// Returns `true` if `key` holds a live value.
    fn contains(&self, key: &str) -> bool;

    /// Returns the live value under `key`.
    fn fetch(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key` for `ttl`.
    fn save(&self, key: &str, value: &str, ttl: Duration);
}

#[derive(Debug)]
struct Entry {
    key: String,
    value: String,
    expires: DateTime<Utc>,
}

impl Entry {
    fn live(&self, key: &str) -> bool {
        self.key == key && Utc::now() < self.expires
    }
}

/// In-process fallback store holding one entry.
///
/// Saving under a new key replaces the previous entry.
#[derive(Debug, Default)]
pub struct LocalSessionStore {
    slot: Mutex<Option<Entry>>,
}

impl LocalSessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the stored entry.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Entry>> {
        // A poisoned slot only ever holds a complete entry, so it stays usable.
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SessionStore for LocalSessionStore {
    fn contains(&self, key: &str) -> bool {
        self.lock().as_ref().is_some_and(|entry| entry.live(key))
    }

    fn fetch(&self, key: &str) -> Option<String> {
        self.lock()
            .as_ref()
            .filter(|entry| entry.live(key))
            .map(|entry| entry.value.clone())
    }

    fn save(&self, key: &str, value: &str, ttl: Duration) {
        *self.lock() = Some(Entry {
            key: key.to_string(),
            value: value.to_string(),
            expires: Utc::now() + ttl,
        });
    }
}
