//! Request URL assembly.
//!
//! Every request is a GET on
//!
//! ```text
//! <base>/<method>Json[/<devId>/<signature>[/<session>]/<timestamp>][/<param>...]
//! ```
//!
//! Parameters are positional path segments. A parameter that is empty,
//! zero (numeric or the text `"0"`) or absent is left out entirely, so the
//! segments after it shift left.
//! Callers rely on that: passing `0` or `""` is how an optional trailing
//! argument is omitted. No escaping is applied; values must already be
//! path-safe.

use std::fmt;

use chrono::NaiveDate;

use crate::config::{Language, Portal, Queue};

/// A positional URL parameter.
///
/// # Example
///
/// ```rust
/// use paladins_api::clients::Param;
///
/// assert!(Param::from("Androxus").is_truthy());
/// assert!(!Param::from("").is_truthy());
/// assert!(!Param::from("0").is_truthy());
/// assert!(!Param::from(0u64).is_truthy());
/// assert!(!Param::from(None::<u64>).is_truthy());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Param {
    /// A text segment.
    Text(String),
    /// A numeric segment.
    Number(i64),
    /// No value.
    Absent,
}

impl Param {
    /// Returns `true` if the parameter produces a path segment.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty() && text != "0",
            Self::Number(n) => *n != 0,
            Self::Absent => false,
        }
    }

    /// Joins ids with commas, as the batch endpoints expect.
    #[must_use]
    pub fn list<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> Self {
        let joined = items
            .into_iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self::Text(joined)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
            Self::Absent => Ok(()),
        }
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Param {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

macro_rules! number_param {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Param {
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Number)
                }
            }
        )*
    };
}

number_param!(i32, i64, u8, u16, u32, u64, usize);

impl<T: Into<Self>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<Language> for Param {
    fn from(value: Language) -> Self {
        Self::Number(i64::from(value.id()))
    }
}

impl From<Portal> for Param {
    fn from(value: Portal) -> Self {
        Self::Number(i64::from(value.id()))
    }
}

impl From<Queue> for Param {
    fn from(value: Queue) -> Self {
        Self::Number(i64::from(value.id()))
    }
}

impl From<NaiveDate> for Param {
    fn from(value: NaiveDate) -> Self {
        Self::Text(value.format("%Y%m%d").to_string())
    }
}

/// The credential segments of an authenticated URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSegment<'a> {
    /// Developer id.
    pub dev_id: &'a str,
    /// Request signature.
    pub signature: &'a str,
    /// Session id; `None` only for `createsession`.
    pub session: Option<&'a str>,
    /// Request timestamp.
    pub timestamp: &'a str,
}

/// Builds the full request URL for `method`.
///
/// # Example
///
/// ```rust
/// use paladins_api::clients::{build_url, AuthSegment, Param};
///
/// let auth = AuthSegment {
///     dev_id: "1004",
///     signature: "5f1e",
///     session: Some("ABCD"),
///     timestamp: "20240309174200",
/// };
/// let url = build_url(
///     "https://api.paladins.com/paladinsapi.svc",
///     "getqueuestats",
///     Some(&auth),
///     &[Param::from(712_345u64), Param::from(0u32), Param::from(486u32)],
/// );
/// assert_eq!(
///     url,
///     "https://api.paladins.com/paladinsapi.svc/getqueuestatsJson/1004/5f1e/ABCD/20240309174200/712345/486"
/// );
/// ```
#[must_use]
pub fn build_url(
    base: &str,
    method: &str,
    auth: Option<&AuthSegment<'_>>,
    params: &[Param],
) -> String {
    let mut url = format!("{base}/{method}Json");

    if let Some(auth) = auth {
        url.push('/');
        url.push_str(auth.dev_id);
        url.push('/');
        url.push_str(auth.signature);
        if let Some(session) = auth.session {
            url.push('/');
            url.push_str(session);
        }
        url.push('/');
        url.push_str(auth.timestamp);
    }

    for param in params.iter().filter(|param| param.is_truthy()) {
        url.push('/');
        url.push_str(&param.to_string());
    }

    url
}
