//! HTTP response type.
//!
//! The API reports most domain errors in-band: the status is 200 and the
//! JSON object carries a non-null `ret_msg`. [`HttpResponse::ret_msg`]
//! exposes that marker.

/// A decoded response from the API.
///
/// # Example
///
/// ```rust
/// use paladins_api::clients::HttpResponse;
/// use serde_json::json;
///
/// let ok = HttpResponse::new(200, json!([{"Name": "Androxus", "ret_msg": null}]));
/// assert!(ok.ret_msg().is_none());
///
/// let soft = HttpResponse::new(200, json!({"ret_msg": "Invalid session id."}));
/// assert_eq!(soft.ret_msg().as_deref(), Some("Invalid session id."));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The decoded JSON body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Field carrying the in-band error message.
    pub const RET_MSG: &'static str = "ret_msg";

    /// Creates a response from a status code and decoded body.
    #[must_use]
    pub const fn new(code: u16, body: serde_json::Value) -> Self {
        Self { code, body }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the in-band error message, if the body is an object with a
    /// non-null `ret_msg`.
    ///
    /// Arrays are never treated as soft failures: list endpoints repeat a
    /// `ret_msg` on every row, usually `null`, sometimes informational.
    #[must_use]
    pub fn ret_msg(&self) -> Option<String> {
        match self.body.as_object()?.get(Self::RET_MSG)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(message) => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Consumes the response, returning the body.
    #[must_use]
    pub fn into_body(self) -> serde_json::Value {
        self.body
    }
}
