//! Remote session tokens.
//!
//! The API mints a session id through `createsession`. The id authorizes
//! every other authenticated endpoint until it lapses; the client treats it
//! as valid for [`session_lifetime`] from the moment it was created,
//! measured on the local clock.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::clients::PaladinsError;

/// How long a freshly created session is used before it is replaced.
pub const SESSION_LIFETIME_MINUTES: i64 = 12;

/// [`SESSION_LIFETIME_MINUTES`] as a duration.
#[must_use]
pub fn session_lifetime() -> Duration {
    Duration::minutes(SESSION_LIFETIME_MINUTES)
}

/// Value of `ret_msg` on a successful session creation.
pub const APPROVED: &str = "Approved";

/// Body returned by `createsession`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreateSessionResponse {
    /// `"Approved"` on success, an error description otherwise.
    pub ret_msg: Option<String>,
    /// The new session id.
    pub session_id: Option<String>,
    /// Server-side creation time, informational only.
    pub timestamp: Option<String>,
}

/// An authenticated session.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use paladins_api::Session;
///
/// let now = Utc::now();
/// let session = Session::new("1465AFCA32DBDB800BEF8C3C1E9C1A7B".to_string(), now);
/// assert_eq!(session.expires, now + chrono::Duration::minutes(12));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// The session id sent on every authenticated request.
    pub id: String,

    /// When the session was created, on the local clock.
    pub created: DateTime<Utc>,

    /// When the client stops using the session.
    pub expires: DateTime<Utc>,
}

impl Session {
    /// Creates a session that expires [`session_lifetime`] after `created`.
    #[must_use]
    pub fn new(id: String, created: DateTime<Utc>) -> Self {
        Self {
            id,
            created,
            expires: created + session_lifetime(),
        }
    }

    /// Validates a `createsession` reply.
    ///
    /// # Errors
    ///
    /// Returns [`PaladinsError::Session`] carrying the remote `ret_msg`
    /// verbatim if it is not `"Approved"`, or a fixed message if the reply
    /// has no session id.
    pub fn from_response(
        response: CreateSessionResponse,
        created: DateTime<Utc>,
    ) -> Result<Self, PaladinsError> {
        let ret_msg = response.ret_msg.unwrap_or_default();
        if ret_msg != APPROVED {
            return Err(PaladinsError::Session { message: ret_msg });
        }

        match response.session_id {
            Some(id) if !id.is_empty() => Ok(Self::new(id, created)),
            _ => Err(PaladinsError::Session {
                message: "Approved response did not contain a session_id".to_string(),
            }),
        }
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
