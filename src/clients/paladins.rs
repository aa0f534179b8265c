//! The Paladins API client.
//!
//! [`PaladinsClient`] ties the pieces together: it signs each call, resolves
//! a session through its [`SessionManager`], builds the URL, sends the GET
//! and retries while the API answers with an in-band `ret_msg`.
//!
//! Endpoint wrappers (`get_player`, `get_match_details`, ...) live in
//! [`crate::api`] and all funnel into [`PaladinsClient::request`].

use std::sync::Arc;

use chrono::Utc;

use crate::auth::manager::SessionManager;
use crate::auth::session::{CreateSessionResponse, Session};
use crate::auth::signature::SignedRequest;
use crate::auth::store::{LocalSessionStore, SessionStore};
use crate::clients::errors::PaladinsError;
use crate::clients::http_client::HttpClient;
use crate::clients::url::{build_url, AuthSegment, Param};
use crate::config::PaladinsConfig;

/// Method name of the session-creation endpoint.
pub const CREATE_SESSION: &str = "createsession";

/// Start of the `ret_msg` the API sends for an unknown or lapsed session.
pub const INVALID_SESSION: &str = "Invalid session id";

/// Client for the Paladins developer API.
///
/// Construct one per set of credentials and share it (for example behind an
/// `Arc`, see [`PaladinsClient::shared`]). Sharing keeps the session count
/// down: every instance with its own store mints its own sessions, and the
/// API caps how many a developer id may open per day.
///
/// # Thread Safety
///
/// `PaladinsClient` is `Send + Sync`. Session refresh is serialized
/// internally, so concurrent calls that find the session expired wait for a
/// single `createsession` round trip.
///
/// # Example
///
/// ```rust,ignore
/// use paladins_api::{AuthKey, DevId, Language, PaladinsClient, PaladinsConfig};
///
/// let config = PaladinsConfig::builder()
///     .dev_id(DevId::new("1004")?)
///     .auth_key(AuthKey::new("23DF3C7E9BD14D84BF892AD206B6755C")?)
///     .build()?;
///
/// let client = PaladinsClient::new(config)?;
/// let champions = client.get_champions(Language::English).await?;
/// ```
#[derive(Debug)]
pub struct PaladinsClient {
    config: PaladinsConfig,
    http: HttpClient,
    sessions: SessionManager,
}

// Verify PaladinsClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PaladinsClient>();
};

impl PaladinsClient {
    /// Creates a client that keeps its session in process memory.
    ///
    /// # Errors
    ///
    /// Returns [`PaladinsError::Network`] if the HTTP client cannot be built.
    pub fn new(config: PaladinsConfig) -> Result<Self, PaladinsError> {
        Self::with_store(config, Arc::new(LocalSessionStore::new()))
    }

    /// Creates a client that keeps its session in `store`.
    ///
    /// Use this to share one session between processes through an external
    /// cache. The session id is stored under
    /// [`PaladinsConfig::session_key`].
    ///
    /// # Errors
    ///
    /// Returns [`PaladinsError::Network`] if the HTTP client cannot be built.
    pub fn with_store(
        config: PaladinsConfig,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, PaladinsError> {
        let http = HttpClient::new(&config)?;
        let sessions = SessionManager::new(store, config.session_key());

        Ok(Self {
            config,
            http,
            sessions,
        })
    }

    /// Creates a client meant to be built once at startup and shared.
    ///
    /// # Errors
    ///
    /// Returns [`PaladinsError::Network`] if the HTTP client cannot be built.
    pub fn shared(config: PaladinsConfig) -> Result<Arc<Self>, PaladinsError> {
        Self::new(config).map(Arc::new)
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &PaladinsConfig {
        &self.config
    }

    /// Asks the API for a brand-new session.
    ///
    /// This always performs a remote call and does not touch the session
    /// store; authenticated endpoints go through [`Self::session_id`]
    /// instead, which only calls this when the stored session lapsed.
    ///
    /// # Errors
    ///
    /// Returns [`PaladinsError::Session`] if the API does not approve the
    /// request, or any transport error from the GET.
    pub async fn create_session(&self) -> Result<Session, PaladinsError> {
        let signed = SignedRequest::new(
            self.config.dev_id(),
            self.config.auth_key(),
            CREATE_SESSION,
            Utc::now(),
        );
        let auth = AuthSegment {
            dev_id: self.config.dev_id().as_ref(),
            signature: &signed.signature,
            session: None,
            timestamp: &signed.timestamp,
        };
        let url = build_url(self.config.base_url().as_ref(), CREATE_SESSION, Some(&auth), &[]);

        tracing::debug!("Requesting new API session");
        let response = self.http.get(&url).await?;

        let parsed: CreateSessionResponse =
            serde_json::from_value(response.into_body()).map_err(|e| PaladinsError::Session {
                message: format!("Malformed createsession response: {e}"),
            })?;

        Session::from_response(parsed, Utc::now())
    }

    /// Returns a live session id, creating one if needed.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Self::create_session`] when a new session was
    /// needed and could not be created.
    pub async fn session_id(&self) -> Result<String, PaladinsError> {
        self.sessions.resolve(|| self.create_session()).await
    }

    /// Calls an authenticated endpoint.
    ///
    /// `method` is the lowercase endpoint name without the `Json` suffix
    /// (e.g. `"getplayer"`). Falsy `params` are dropped from the URL.
    ///
    /// # Errors
    ///
    /// - [`PaladinsError::Domain`] if every attempt came back with a `ret_msg`
    /// - [`PaladinsError::NotFound`] / [`PaladinsError::Proxy`] on 404 / 502,
    ///   without retrying
    /// - [`PaladinsError::Session`] if no session could be obtained
    /// - transport and decoding errors
    pub async fn request(
        &self,
        method: &str,
        params: &[Param],
    ) -> Result<serde_json::Value, PaladinsError> {
        self.execute(method, params, true).await
    }

    /// Calls an endpoint that takes no credentials (`ping`).
    ///
    /// # Errors
    ///
    /// Same as [`Self::request`], minus session errors.
    pub async fn request_unauthenticated(
        &self,
        method: &str,
        params: &[Param],
    ) -> Result<serde_json::Value, PaladinsError> {
        self.execute(method, params, false).await
    }

    async fn execute(
        &self,
        method: &str,
        params: &[Param],
        authenticated: bool,
    ) -> Result<serde_json::Value, PaladinsError> {
        let max_tries = self.config.max_tries();
        let backoff = self.config.retry_backoff();

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            // Each attempt is a full request: new signature, session re-checked.
            let (url, session) = if authenticated {
                let (url, session) = self.signed_url(method, params).await?;
                (url, Some(session))
            } else {
                let url = build_url(self.config.base_url().as_ref(), method, None, params);
                (url, None)
            };

            tracing::debug!(method, attempt = tries, "Sending API request");
            let response = self.http.get(&url).await?;

            let Some(message) = response.ret_msg() else {
                return Ok(response.into_body());
            };

            if let Some(session) = session.filter(|_| message.starts_with(INVALID_SESSION)) {
                self.sessions.invalidate(&session);
            }

            if tries >= max_tries {
                return Err(PaladinsError::Domain { message, tries });
            }

            tracing::warn!(
                method,
                attempt = tries,
                max_tries,
                ret_msg = %message,
                "API returned an in-band error, retrying"
            );

            let delay = backoff.delay(tries - 1);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }

    /// Builds an authenticated URL, returning it with the session it carries.
    async fn signed_url(
        &self,
        method: &str,
        params: &[Param],
    ) -> Result<(String, String), PaladinsError> {
        let signed = SignedRequest::new(
            self.config.dev_id(),
            self.config.auth_key(),
            method,
            Utc::now(),
        );
        let session = self.session_id().await?;
        let auth = AuthSegment {
            dev_id: self.config.dev_id().as_ref(),
            signature: &signed.signature,
            session: Some(&session),
            timestamp: &signed.timestamp,
        };

        let url = build_url(
            self.config.base_url().as_ref(),
            method,
            Some(&auth),
            params,
        );

        Ok((url, session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthKey, BaseUrl, DevId};
    use serde_json::json;
    use wiremock::matchers::{method, path, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, max_tries: u32) -> PaladinsClient {
        let config = PaladinsConfig::builder()
            .dev_id(DevId::new("1004").unwrap())
            .auth_key(AuthKey::new("secret").unwrap())
            .base_url(BaseUrl::new(server.uri()).unwrap())
            .max_tries(max_tries)
            .build()
            .unwrap();
        PaladinsClient::new(config).unwrap()
    }

    async fn mount_session(server: &MockServer, id: &str) {
        Mock::given(method("GET"))
            .and(path_regex(r"^/createsessionJson/1004/[0-9a-f]{32}/\d{12}00$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ret_msg": "Approved",
                "session_id": id,
                "timestamp": "3/9/2024 5:42:31 PM"
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_create_session_parses_approved_reply() {
        let server = MockServer::start().await;
        mount_session(&server, "S1").await;

        let session = client(&server, 3).create_session().await.unwrap();
        assert_eq!(session.id, "S1");
        assert!(session.expires > Utc::now());
    }

    #[tokio::test]
    async fn test_create_session_surfaces_rejection_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/createsessionJson/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ret_msg": "Exception - Timestamp",
                "session_id": "",
                "timestamp": "3/9/2024 5:42:31 PM"
            })))
            .mount(&server)
            .await;

        let result = client(&server, 3).create_session().await;
        assert!(matches!(
            result,
            Err(PaladinsError::Session { message }) if message == "Exception - Timestamp"
        ));
    }

    #[tokio::test]
    async fn test_unauthenticated_request_has_no_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pingJson"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("Ping successful")))
            .expect(1)
            .mount(&server)
            .await;

        let body = client(&server, 3)
            .request_unauthenticated("ping", &[])
            .await
            .unwrap();
        assert_eq!(body, json!("Ping successful"));
    }

    #[tokio::test]
    async fn test_soft_failure_single_try_fails_immediately() {
        let server = MockServer::start().await;
        mount_session(&server, "S1").await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/getmotdJson/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ret_msg": "busy"})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server, 1).request("getmotd", &[]).await;
        assert!(matches!(
            result,
            Err(PaladinsError::Domain { message, tries: 1 }) if message == "busy"
        ));
    }

    #[tokio::test]
    async fn test_rejected_session_is_replaced_before_the_retry() {
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
        mount_session(&server, "S2").await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/getmotdJson/1004/[0-9a-f]{32}/S1/\d{14}$"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"ret_msg": "Invalid session id."})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/getmotdJson/1004/[0-9a-f]{32}/S2/\d{14}$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let body = client(&server, 3).request("getmotd", &[]).await.unwrap();
        assert_eq!(body, json!([]));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaladinsClient>();
    }
}
