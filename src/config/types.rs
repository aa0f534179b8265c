//! Identifier enums shared by the endpoint wrappers.
//!
//! The remote API addresses languages, platforms and queues by numeric id.
//! These enums name the well-known ids and keep an escape hatch for the
//! rest.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Language used for localized data (champion names, cards, items).
///
/// # Example
///
/// ```rust
/// use paladins_api::Language;
///
/// let lang: Language = "pt".parse().unwrap();
/// assert_eq!(lang, Language::Portuguese);
/// assert_eq!(lang.id(), 10);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English (1).
    #[default]
    English,
    /// German (2).
    German,
    /// French (3).
    French,
    /// Chinese (5).
    Chinese,
    /// Spanish (7).
    Spanish,
    /// Latin American Spanish (9).
    SpanishLatinAmerica,
    /// Portuguese (10).
    Portuguese,
    /// Russian (11).
    Russian,
    /// Polish (12).
    Polish,
    /// Turkish (13).
    Turkish,
}

impl Language {
    /// Returns the numeric language code sent to the API.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::English => 1,
            Self::German => 2,
            Self::French => 3,
            Self::Chinese => 5,
            Self::Spanish => 7,
            Self::SpanishLatinAmerica => 9,
            Self::Portuguese => 10,
            Self::Russian => 11,
            Self::Polish => 12,
            Self::Turkish => 13,
        }
    }

    /// Returns the language for a numeric code, if known.
    #[must_use]
    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Self::English),
            2 => Some(Self::German),
            3 => Some(Self::French),
            5 => Some(Self::Chinese),
            7 => Some(Self::Spanish),
            9 => Some(Self::SpanishLatinAmerica),
            10 => Some(Self::Portuguese),
            11 => Some(Self::Russian),
            12 => Some(Self::Polish),
            13 => Some(Self::Turkish),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        match code.as_str() {
            "en" | "english" => Ok(Self::English),
            "de" | "german" => Ok(Self::German),
            "fr" | "french" => Ok(Self::French),
            "zh" | "chinese" => Ok(Self::Chinese),
            "es" | "spanish" => Ok(Self::Spanish),
            "es-419" | "es-la" => Ok(Self::SpanishLatinAmerica),
            "pt" | "portuguese" => Ok(Self::Portuguese),
            "ru" | "russian" => Ok(Self::Russian),
            "pl" | "polish" => Ok(Self::Polish),
            "tr" | "turkish" => Ok(Self::Turkish),
            _ => code
                .parse::<u32>()
                .ok()
                .and_then(Self::from_id)
                .ok_or(ConfigError::UnknownLanguage { code }),
        }
    }
}

/// Account platform ("portal") a player is registered on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Portal {
    /// Hi-Rez account (1).
    HiRez,
    /// Steam (5). The default platform for name lookups.
    #[default]
    Steam,
    /// `PlayStation` (9).
    PlayStation,
    /// Xbox (10).
    Xbox,
    /// Nintendo Switch (22).
    Switch,
    /// Discord (25).
    Discord,
    /// Epic Games (28).
    Epic,
    /// Any other portal id.
    Other(u32),
}

impl Portal {
    /// Returns the numeric portal id.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::HiRez => 1,
            Self::Steam => 5,
            Self::PlayStation => 9,
            Self::Xbox => 10,
            Self::Switch => 22,
            Self::Discord => 25,
            Self::Epic => 28,
            Self::Other(id) => id,
        }
    }
}

impl From<u32> for Portal {
    fn from(id: u32) -> Self {
        match id {
            1 => Self::HiRez,
            5 => Self::Steam,
            9 => Self::PlayStation,
            10 => Self::Xbox,
            22 => Self::Switch,
            25 => Self::Discord,
            28 => Self::Epic,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Match queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Queue {
    /// Casual siege (424).
    Casual,
    /// Onslaught (452).
    Onslaught,
    /// Team deathmatch (469).
    TeamDeathmatch,
    /// Competitive, keyboard and mouse (486).
    Ranked,
    /// Competitive, controller (428).
    RankedController,
    /// Any other queue id.
    Other(u32),
}

impl Queue {
    /// Returns the numeric queue id.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::Casual => 424,
            Self::Onslaught => 452,
            Self::TeamDeathmatch => 469,
            Self::Ranked => 486,
            Self::RankedController => 428,
            Self::Other(id) => id,
        }
    }
}

impl From<u32> for Queue {
    fn from(id: u32) -> Self {
        match id {
            424 => Self::Casual,
            452 => Self::Onslaught,
            469 => Self::TeamDeathmatch,
            486 => Self::Ranked,
            428 => Self::RankedController,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
