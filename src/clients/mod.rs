//! HTTP client types for Paladins API communication.
//!
//! # Overview
//!
//! - [`PaladinsClient`]: the API client; signs, authenticates and retries
//! - [`HttpClient`]: the thin async GET layer over `reqwest`
//! - [`HttpResponse`]: a decoded response body with its status code
//! - [`Param`] and [`build_url`]: positional URL assembly
//! - [`PaladinsError`]: every failure a request can end in
//!
//! # Retry Behavior
//!
//! The API reports many failures in-band: the HTTP status is 200 and the
//! JSON object carries a non-null `ret_msg`. Such a response is retried
//! until `max_tries` attempts were made, then surfaced as
//! [`PaladinsError::Domain`]. HTTP 404 and 502 are never retried.
//!
//! ```rust
//! use paladins_api::clients::HttpResponse;
//! use serde_json::json;
//!
//! let soft = HttpResponse::new(200, json!({"ret_msg": "Invalid session id."}));
//! assert_eq!(soft.ret_msg().as_deref(), Some("Invalid session id."));
//!
//! let fine = HttpResponse::new(200, json!([{"ret_msg": null}]));
//! assert!(fine.ret_msg().is_none());
//! ```

mod errors;
mod http_client;
mod http_response;
mod paladins;
mod url;

pub use errors::PaladinsError;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;
pub use paladins::{PaladinsClient, CREATE_SESSION, INVALID_SESSION};
pub use url::{build_url, AuthSegment, Param};
