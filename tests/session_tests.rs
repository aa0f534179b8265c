//! Integration tests for the session lifecycle.
//!
//! These tests verify that sessions are created lazily, reused while live,
//! replaced once lapsed and kept in whichever store the client was given.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use paladins_api::auth::{LocalSessionStore, SessionStore};
use paladins_api::{AuthKey, BaseUrl, DevId, PaladinsClient, PaladinsConfig, PaladinsError};
use serde_json::json;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SESSION_KEY: &str = "paladins.sessionId";

fn create_config(server: &MockServer) -> PaladinsConfig {
    PaladinsConfig::builder()
        .dev_id(DevId::new("1004").unwrap())
        .auth_key(AuthKey::new("23DF3C7E9BD14D84BF892AD206B6755C").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

async fn mount_session(server: &MockServer, session_id: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/createsessionJson/1004/[0-9a-f]{32}/\d{14}$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ret_msg": "Approved",
            "session_id": session_id,
            "timestamp": "3/9/2024 5:42:31 PM"
        })))
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts `testsession`, answering for calls that carry `session_id`.
async fn mount_test_session(server: &MockServer, session_id: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path_regex(format!(
            r"^/testsessionJson/1004/[0-9a-f]{{32}}/{session_id}/\d{{14}}$"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            "This was a successful test with the following parameters added"
        )))
        .expect(times)
        .mount(server)
        .await;
}

/// A store backed by a map, recording every key and TTL it was asked to save.
#[derive(Default)]
struct RecordingStore {
    entries: Mutex<HashMap<String, (String, DateTime<Utc>)>>,
    saved_keys: Mutex<Vec<String>>,
    saved_ttls: Mutex<Vec<Duration>>,
}

impl SessionStore for RecordingStore {
    fn contains(&self, key: &str) -> bool {
        self.fetch(key).is_some()
    }

    fn fetch(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .filter(|(_, expires)| Utc::now() < *expires)
            .map(|(value, _)| value.clone())
    }

    fn save(&self, key: &str, value: &str, ttl: Duration) {
        self.saved_keys.lock().unwrap().push(key.to_string());
        self.saved_ttls.lock().unwrap().push(ttl);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), Utc::now() + ttl));
    }
}

#[tokio::test]
async fn test_session_is_reused_across_calls() {
    let server = MockServer::start().await;
    mount_session(&server, "S1", 1).await;
    mount_test_session(&server, "S1", 3).await;

    let client = PaladinsClient::new(create_config(&server)).unwrap();
    for _ in 0..3 {
        client.test_session().await.unwrap();
    }
}

#[tokio::test]
async fn test_session_is_stored_for_twelve_minutes() {
    let server = MockServer::start().await;
    mount_session(&server, "S1", 1).await;
    mount_test_session(&server, "S1", 1).await;

    let store = Arc::new(RecordingStore::default());
    let client = PaladinsClient::with_store(create_config(&server), store.clone()).unwrap();
    client.test_session().await.unwrap();

    assert_eq!(*store.saved_ttls.lock().unwrap(), vec![Duration::minutes(12)]);
    assert_eq!(store.fetch(SESSION_KEY).as_deref(), Some("S1"));
}

#[tokio::test]
async fn test_lapsed_session_is_replaced_exactly_once() {
    let server = MockServer::start().await;
    mount_session(&server, "S2", 1).await;
    mount_test_session(&server, "OLD", 0).await;
    mount_test_session(&server, "S2", 2).await;

    let store = Arc::new(LocalSessionStore::new());
    store.save(SESSION_KEY, "OLD", Duration::seconds(-1));

    let client = PaladinsClient::with_store(create_config(&server), store.clone()).unwrap();
    client.test_session().await.unwrap();
    client.test_session().await.unwrap();

    assert_eq!(store.fetch(SESSION_KEY).as_deref(), Some("S2"));
}

#[tokio::test]
async fn test_cleared_store_forces_a_new_session() {
    let server = MockServer::start().await;
    mount_session(&server, "S1", 2).await;
    mount_test_session(&server, "S1", 2).await;

    let store = Arc::new(LocalSessionStore::new());
    let client = PaladinsClient::with_store(create_config(&server), store.clone()).unwrap();

    client.test_session().await.unwrap();
    store.clear();
    client.test_session().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_calls_share_one_session() {
    let server = MockServer::start().await;
    mount_session(&server, "S1", 1).await;
    mount_test_session(&server, "S1", 8).await;

    let client = PaladinsClient::shared(create_config(&server)).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.test_session().await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn test_external_store_receives_the_session() {
    let server = MockServer::start().await;
    mount_session(&server, "S1", 1).await;
    mount_test_session(&server, "S1", 1).await;

    let store = Arc::new(RecordingStore::default());
    let client = PaladinsClient::with_store(create_config(&server), store.clone()).unwrap();
    client.test_session().await.unwrap();

    assert_eq!(*store.saved_keys.lock().unwrap(), vec![SESSION_KEY.to_string()]);
    assert_eq!(store.fetch(SESSION_KEY).as_deref(), Some("S1"));
}

#[tokio::test]
async fn test_session_already_in_external_store_is_used() {
    let server = MockServer::start().await;
    mount_session(&server, "unused", 0).await;
    mount_test_session(&server, "SHARED", 1).await;

    let store = Arc::new(RecordingStore::default());
    store.save(SESSION_KEY, "SHARED", Duration::minutes(5));

    let client = PaladinsClient::with_store(create_config(&server), store).unwrap();
    client.test_session().await.unwrap();
}

#[tokio::test]
async fn test_cache_namespace_changes_the_session_key() {
    let server = MockServer::start().await;
    mount_session(&server, "S1", 1).await;
    mount_test_session(&server, "S1", 1).await;

    let config = PaladinsConfig::builder()
        .dev_id(DevId::new("1004").unwrap())
        .auth_key(AuthKey::new("secret").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .cache_namespace("bot")
        .build()
        .unwrap();

    let store = Arc::new(RecordingStore::default());
    let client = PaladinsClient::with_store(config, store.clone()).unwrap();
    client.test_session().await.unwrap();

    assert_eq!(*store.saved_keys.lock().unwrap(), vec!["bot.sessionId".to_string()]);
}

#[tokio::test]
async fn test_rejected_session_fails_the_call_and_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/createsessionJson/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ret_msg": "Invalid Developer Id",
            "session_id": "",
            "timestamp": "3/9/2024 5:42:31 PM"
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/testsessionJson/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("ok")))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(LocalSessionStore::new());
    let client = PaladinsClient::with_store(create_config(&server), store.clone()).unwrap();

    for _ in 0..2 {
        let result = client.test_session().await;
        assert!(matches!(
            result,
            Err(PaladinsError::Session { message }) if message == "Invalid Developer Id"
        ));
    }
    assert!(!store.contains(SESSION_KEY));
}

#[tokio::test]
async fn test_create_session_does_not_touch_the_store() {
    let server = MockServer::start().await;
    mount_session(&server, "FRESH", 1).await;

    let store = Arc::new(LocalSessionStore::new());
    let client = PaladinsClient::with_store(create_config(&server), store.clone()).unwrap();

    let session = client.create_session().await.unwrap();

    assert_eq!(session.id, "FRESH");
    assert!(!store.contains(SESSION_KEY));
}

#[tokio::test]
async fn test_session_rejected_by_the_api_is_discarded_and_replaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/createsessionJson/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ret_msg": "Approved",
            "session_id": "S1",
            "timestamp": "3/9/2024 5:42:31 PM"
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_session(&server, "S2", 1).await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/testsessionJson/1004/[0-9a-f]{32}/S1/\d{14}$"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ret_msg": "Invalid session id."})),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_test_session(&server, "S2", 1).await;

    let store = Arc::new(RecordingStore::default());
    let client = PaladinsClient::with_store(create_config(&server), store.clone()).unwrap();
    client.test_session().await.unwrap();

    assert_eq!(
        *store.saved_ttls.lock().unwrap(),
        vec![Duration::minutes(12), Duration::zero(), Duration::minutes(12)]
    );
    assert_eq!(store.fetch(SESSION_KEY).as_deref(), Some("S2"));
}
