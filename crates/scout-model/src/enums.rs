//! Closed vocabularies of the roster.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Primary time-of-day availability of a scout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
    Dawn,
}

impl Shift {
    pub const ALL: [Shift; 4] = [Self::Morning, Self::Afternoon, Self::Night, Self::Dawn];

    /// Canonical label, used in storage and spreadsheets.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Manhã",
            Self::Afternoon => "Tarde",
            Self::Night => "Noite",
            Self::Dawn => "Madrugada",
        }
    }

    /// Catalog key for the localized label.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Morning => "common.morning",
            Self::Afternoon => "common.afternoon",
            Self::Night => "common.night",
            Self::Dawn => "common.dawn",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shift {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manhã" | "manha" | "morning" => Ok(Self::Morning),
            "tarde" | "afternoon" => Ok(Self::Afternoon),
            "noite" | "night" => Ok(Self::Night),
            "madrugada" | "dawn" => Ok(Self::Dawn),
            _ => Err(ModelError::InvalidShift(s.to_string())),
        }
    }
}

impl Serialize for Shift {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Shift {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for an optional shift stored as `""` when unset.
pub(crate) mod optional_shift {
    use super::Shift;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(shift: &Option<Shift>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(shift.map_or("", Shift::label))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Shift>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

/// Interface language of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Pt,
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Self::Pt, Self::En, Self::Es];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
            Self::Es => "es",
        }
    }

    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Pt => "Português",
            Self::En => "English",
            Self::Es => "Español",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" | "pt-br" => Ok(Self::Pt),
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(ModelError::InvalidLocale(s.to_string())),
        }
    }
}
