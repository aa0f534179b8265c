//! Session lifecycle.
//!
//! [`SessionManager`] answers "which session id do I send?" for every
//! authenticated call. It reads the id from its [`SessionStore`] and, when
//! the store has none or it lapsed, creates one through the supplied
//! future and stores it for [`session_lifetime`].
//!
//! Refresh is single-flight: callers that find the store empty queue on a
//! mutex and re-check the store once they hold it, so a burst of
//! concurrent calls mints one remote session instead of one each.
//!
//! When the API rejects a stored id, [`SessionManager::invalidate`] expires
//! it so the next resolve mints a fresh one.

use std::future::Future;
use std::sync::Arc;

use chrono::Duration;
use tokio::sync::Mutex;

use crate::auth::session::{session_lifetime, Session};
use crate::auth::store::SessionStore;
use crate::clients::PaladinsError;

/// Resolves and refreshes the session id held in a [`SessionStore`].
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    key: String,
    refresh: Mutex<()>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Creates a manager keeping its session under `key` in `store`.
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            refresh: Mutex::new(()),
        }
    }

    /// Returns the cache key of the session id.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the stored session id if it is still live.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        if self.store.contains(&self.key) {
            self.store.fetch(&self.key)
        } else {
            None
        }
    }

    /// Expires the stored session if it is still `session_id`.
    ///
    /// A different id means another caller already replaced it, and that
    /// newer session is left alone.
    pub fn invalidate(&self, session_id: &str) {
        if self.current().as_deref() == Some(session_id) {
            self.store.save(&self.key, "", Duration::zero());
            tracing::info!(key = %self.key, "Discarded session rejected by the API");
        }
    }

    /// Returns a live session id, calling `create` if there is none.
    ///
    /// # Errors
    ///
    /// Propagates the error of `create`. Nothing is stored on failure, so
    /// the next call tries again.
    pub async fn resolve<F, Fut>(&self, create: F) -> Result<String, PaladinsError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Session, PaladinsError>>,
    {
        if let Some(id) = self.current() {
            return Ok(id);
        }

        let _guard = self.refresh.lock().await;

        // Another caller may have refreshed while we waited.
        if let Some(id) = self.current() {
            return Ok(id);
        }

        let session = create().await?;
        self.store.save(&self.key, &session.id, session_lifetime());
        tracing::info!(key = %self.key, expires = %session.expires, "Created new API session");

        Ok(session.id)
    }
}

// Verify SessionManager is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionManager>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::LocalSessionStore;
    use chrono::Utc;
    use std::sync::atomic::{AtomicU32, Ordering};

    const KEY: &str = "paladins.sessionId";

    fn manager() -> (Arc<LocalSessionStore>, SessionManager) {
        let store = Arc::new(LocalSessionStore::new());
        let manager = SessionManager::new(store.clone(), KEY);
        (store, manager)
    }

    async fn mint(counter: &AtomicU32) -> Result<Session, PaladinsError> {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Session::new(format!("S{n}"), Utc::now()))
    }

    #[tokio::test]
    async fn test_first_call_creates_session() {
        let (store, manager) = manager();
        let created = AtomicU32::new(0);

        let id = manager.resolve(|| mint(&created)).await.unwrap();

        assert_eq!(id, "S1");
        assert_eq!(created.load(Ordering::SeqCst), 1);
        assert_eq!(store.fetch(KEY).as_deref(), Some("S1"));
    }

    #[tokio::test]
    async fn test_live_session_is_reused_verbatim() {
        let (_store, manager) = manager();
        let created = AtomicU32::new(0);

        let first = manager.resolve(|| mint(&created)).await.unwrap();
        let second = manager.resolve(|| mint(&created)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(created.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_session_is_replaced_once() {
        let (store, manager) = manager();
        let created = AtomicU32::new(0);
        store.save(KEY, "OLD", Duration::seconds(-1));

        let first = manager.resolve(|| mint(&created)).await.unwrap();
        let second = manager.resolve(|| mint(&created)).await.unwrap();

        assert_eq!(first, "S1");
        assert_eq!(second, "S1");
        assert_eq!(created.load(Ordering::SeqCst), 1);
    }

    /// Records the TTL of every save before delegating.
    #[derive(Default)]
    struct TtlStore {
        inner: LocalSessionStore,
        ttls: std::sync::Mutex<Vec<Duration>>,
    }

    impl SessionStore for TtlStore {
        fn contains(&self, key: &str) -> bool {
            self.inner.contains(key)
        }

        fn fetch(&self, key: &str) -> Option<String> {
            self.inner.fetch(key)
        }

        fn save(&self, key: &str, value: &str, ttl: Duration) {
            self.ttls.lock().unwrap().push(ttl);
            self.inner.save(key, value, ttl);
        }
    }

    #[tokio::test]
    async fn test_stored_session_lives_twelve_minutes() {
        let store = Arc::new(TtlStore::default());
        let manager = SessionManager::new(store.clone(), KEY);
        let created = AtomicU32::new(0);

        manager.resolve(|| mint(&created)).await.unwrap();

        assert_eq!(*store.ttls.lock().unwrap(), vec![Duration::minutes(12)]);
    }

    #[tokio::test]
    async fn test_invalidated_session_is_replaced() {
        let (store, manager) = manager();
        let created = AtomicU32::new(0);

        let first = manager.resolve(|| mint(&created)).await.unwrap();
        manager.invalidate(&first);
        assert!(!store.contains(KEY));

        let second = manager.resolve(|| mint(&created)).await.unwrap();
        assert_eq!(second, "S2");
        assert_eq!(created.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_leaves_a_newer_session_alone() {
        let (store, manager) = manager();
        let created = AtomicU32::new(0);

        manager.resolve(|| mint(&created)).await.unwrap();
        manager.invalidate("OLDER");

        assert_eq!(store.fetch(KEY).as_deref(), Some("S1"));
    }

    #[tokio::test]
    async fn test_failed_creation_stores_nothing() {
        let (store, manager) = manager();

        let result = manager
            .resolve(|| async {
                Err(PaladinsError::Session {
                    message: "Invalid Developer Id".to_string(),
                })
            })
            .await;

        assert!(matches!(result, Err(PaladinsError::Session { .. })));
        assert!(!store.contains(KEY));
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_creation() {
        let (_store, manager) = manager();
        let manager = Arc::new(manager);
        let created = Arc::new(AtomicU32::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let manager = manager.clone();
            let created = created.clone();
            handles.push(tokio::spawn(async move {
                manager
                    .resolve(|| async move {
                        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                        mint(&created).await
                    })
                    .await
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "S1");
        }
        assert_eq!(created.load(Ordering::SeqCst), 1);
    }
}
