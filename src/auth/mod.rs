//! Request signing and session handling.
//!
//! Every authenticated call carries a developer id, an MD5 signature, a
//! session id and a UTC timestamp. This module produces those pieces:
//!
//! - [`signature`]: the per-request signature and timestamp
//! - [`Session`]: a session granted by `createsession`
//! - [`SessionStore`]: where the current session id lives between calls
//! - [`LocalSessionStore`]: the in-process fallback store
//! - [`SessionManager`]: reuses the stored session and refreshes it once
//!   it lapses
//!
//! # Session Lifetime
//!
//! The API expires a session after 15 minutes. The client treats it as
//! dead after 12 so that a session is never used right at its edge.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use paladins_api::auth::signature;
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 9, 17, 42, 31).unwrap();
//! let ts = signature::timestamp(now);
//! assert_eq!(ts, "20240309174200");
//!
//! let sig = signature::signature("1004", "getplayer", "SECRET", &ts);
//! assert_eq!(sig.len(), 32);
//! ```

pub mod manager;
pub mod session;
pub mod signature;
pub mod store;

pub use manager::SessionManager;
pub use session::Session;
pub use signature::SignedRequest;
pub use store::{LocalSessionStore, SessionStore};
