//! HTTP transport for the Paladins API.
//!
//! [`HttpClient`] issues a single GET and classifies the outcome. It does
//! not retry; soft-failure retries happen one level up, in
//! [`PaladinsClient`](crate::PaladinsClient), because every retry needs a
//! fresh signature.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::clients::errors::PaladinsError;
use crate::clients::http_response::HttpResponse;
use crate::config::PaladinsConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Thin wrapper over `reqwest::Client`.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PaladinsError::Network`] if the underlying reqwest client
    /// cannot be created (e.g. TLS initialization failure).
    pub fn new(config: &PaladinsConfig) -> Result<Self, PaladinsError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Paladins API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .default_headers(default_headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Sends a GET to `url` and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// - [`PaladinsError::NotFound`] on 404
    /// - [`PaladinsError::Proxy`] on 502
    /// - [`PaladinsError::Status`] on any other non-2xx status, unless the
    ///   body is a JSON object with a `ret_msg`
    /// - [`PaladinsError::InvalidResponse`] on a 2xx status whose body is not JSON
    /// - [`PaladinsError::Network`] on transport failure
    pub async fn get(&self, url: &str) -> Result<HttpResponse, PaladinsError> {
        let res = self.client.get(url).send().await?;
        let code = res.status().as_u16();

        match code {
            404 => {
                return Err(PaladinsError::NotFound {
                    url: url.to_string(),
                })
            }
            502 => {
                return Err(PaladinsError::Proxy {
                    url: url.to_string(),
                })
            }
            _ => {}
        }

        let body_text = res.text().await?;
        let body = match serde_json::from_str(&body_text) {
            Ok(body) => body,
            Err(_) if !(200..=299).contains(&code) => {
                return Err(PaladinsError::Status {
                    code,
                    url: url.to_string(),
                })
            }
            Err(e) => {
                return Err(PaladinsError::InvalidResponse {
                    url: url.to_string(),
                    message: e.to_string(),
                })
            }
        };

        let response = HttpResponse::new(code, body);
        // A non-success status is only worth a retry if it carries a ret_msg.
        if !response.is_ok() && response.ret_msg().is_none() {
            return Err(PaladinsError::Status {
                code: response.code,
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}
