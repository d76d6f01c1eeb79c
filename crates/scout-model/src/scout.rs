//! Participant records and registration drafts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::enums::{Shift, optional_shift};
use crate::error::{RequiredField, ValidationError};

/// Language code assigned when none is given.
pub const DEFAULT_LANGUAGE: &str = "PT";

/// Language codes offered by the registration form.
pub const LANGUAGE_CODES: [&str; 4] = ["PT", "EN", "ES", "CN"];

/// Boss maps offered by the registration form. Free text is still accepted.
pub const KNOWN_MAPS: [&str; 5] = ["LAB BICHEON", "LAB TOURO", "LAB SERPENTE", "MYSTIC", "SNAKE"];

/// Record field names in storage and spreadsheet column order.
pub const WIRE_FIELDS: [&str; 9] = [
    "id",
    "mapa",
    "turnoPrincipal",
    "nick",
    "poder",
    "cla",
    "idioma",
    "funcaoWB",
    "timestamp",
];

/// Opaque record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoutId(String);

impl ScoutId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ScoutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ScoutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ScoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One participant's registration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scout {
    pub id: ScoutId,
    #[serde(rename = "mapa")]
    pub location: String,
    #[serde(rename = "turnoPrincipal", with = "optional_shift", default)]
    pub shift: Option<Shift>,
    #[serde(rename = "nick")]
    pub nickname: String,
    #[serde(rename = "poder", default)]
    pub power: String,
    #[serde(rename = "cla")]
    pub clan: String,
    #[serde(rename = "idioma", default = "default_language")]
    pub language: String,
    #[serde(rename = "funcaoWB", default)]
    pub role: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Scout {
    /// Validate a draft and turn it into a record created at `now`.
    pub fn register(draft: NewScout, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        draft.validate()?;
        Ok(Self {
            id: ScoutId::generate(),
            location: draft.location,
            shift: draft.shift,
            nickname: draft.nickname,
            power: draft.power,
            clan: draft.clan,
            language: draft.language,
            role: draft.role,
            created_at: now,
        })
    }
}

/// Registration form contents before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScout {
    pub location: String,
    pub shift: Option<Shift>,
    pub nickname: String,
    pub power: String,
    pub clan: String,
    pub language: String,
    pub role: String,
}

impl Default for NewScout {
    fn default() -> Self {
        Self {
            location: String::new(),
            shift: None,
            nickname: String::new(),
            power: String::new(),
            clan: String::new(),
            language: default_language(),
            role: String::new(),
        }
    }
}

impl NewScout {
    /// Presence check on map, nickname and clan. Reports every missing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::Location, &self.location),
            (RequiredField::Nickname, &self.nickname),
            (RequiredField::Clan, &self.clan),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> NewScout {
        NewScout {
            location: "MYSTIC".to_string(),
            nickname: "Foo".to_string(),
            clan: "Alpha".to_string(),
            ..NewScout::default()
        }
    }

    #[test]
    fn validate_reports_all_missing_fields() {
        let err = NewScout::default().validate().unwrap_err();
        assert_eq!(
            err.missing,
            vec![
                RequiredField::Location,
                RequiredField::Nickname,
                RequiredField::Clan
            ]
        );
        assert_eq!(err.to_string(), "missing required fields: mapa, nick, cla");
    }

    #[test]
    fn validate_accepts_complete_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn register_generates_distinct_ids() {
        let now = Utc::now();
        let a = Scout::register(draft(), now).unwrap();
        let b = Scout::register(draft(), now).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_with_wire_names() {
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let mut scout = Scout::register(draft(), now).unwrap();
        scout.id = ScoutId::from("abc");
        let value = serde_json::to_value(&scout).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for field in WIRE_FIELDS {
            assert!(keys.contains(&field), "missing {field}");
        }
        assert_eq!(value["turnoPrincipal"], "");
        assert_eq!(value["idioma"], "PT");
    }

    #[test]
    fn deserializes_board_json() {
        let json = r#"{
            "id": "7f1c",
            "mapa": "LAB BICHEON",
            "turnoPrincipal": "Manhã",
            "nick": "Foo",
            "poder": "120k",
            "cla": "Alpha",
            "idioma": "PT",
            "funcaoWB": "tank",
            "timestamp": "2024-05-01T12:30:00.000Z"
        }"#;
        let scout: Scout = serde_json::from_str(json).unwrap();
        assert_eq!(scout.id.as_str(), "7f1c");
        assert_eq!(scout.shift, Some(Shift::Morning));
        assert_eq!(scout.role, "tank");
    }
}
