//! Request signing.
//!
//! Every authenticated call carries a UTC timestamp at minute resolution and
//! an MD5 signature binding the developer id, the method name, the
//! authorization key and that timestamp. The remote service rejects
//! signatures whose timestamp is outside its window, so both values are
//! computed fresh for every call.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use paladins_api::auth::signature::{signature, timestamp};
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 9, 17, 42, 31).unwrap();
//! let ts = timestamp(now);
//! assert_eq!(ts, "20240309174200");
//!
//! let sig = signature("1004", "createsession", "SECRET", &ts);
//! assert_eq!(sig.len(), 32);
//! ```

use chrono::{DateTime, Utc};

use crate::config::{AuthKey, DevId};

/// Timestamp layout expected by the API. Seconds are always `00`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M00";

/// Formats `now` as the request timestamp (`YYYYMMDDHHMM00`).
#[must_use]
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Computes the lowercase hex MD5 of `dev_id + method + auth_key + timestamp`.
#[must_use]
pub fn signature(dev_id: &str, method: &str, auth_key: &str, timestamp: &str) -> String {
    let digest = md5::compute(format!("{dev_id}{method}{auth_key}{timestamp}"));
    format!("{digest:x}")
}

/// The signature and timestamp of a single call.
///
/// Never reuse one across calls; build a new one per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedRequest {
    /// Hex MD5 signature.
    pub signature: String,
    /// Minute-resolution UTC timestamp.
    pub timestamp: String,
}

impl SignedRequest {
    /// Signs `method` for the given credentials at instant `now`.
    #[must_use]
    pub fn new(dev_id: &DevId, auth_key: &AuthKey, method: &str, now: DateTime<Utc>) -> Self {
        let timestamp = timestamp(now);
        let signature = signature(dev_id.as_ref(), method, auth_key.as_ref(), &timestamp);
        Self {
            signature,
            timestamp,
        }
    }
}
