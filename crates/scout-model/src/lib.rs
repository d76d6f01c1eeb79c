//! Data model for the MIR4 world boss scout roster.
//!
//! A roster is a flat list of [`Scout`] records. Records are created from a
//! validated [`NewScout`] draft (the registration form) or by spreadsheet
//! import, and are persisted using the board's wire field names
//! (`mapa`, `turnoPrincipal`, `nick`, ...).

pub mod enums;
pub mod error;
pub mod scout;

pub use enums::{Locale, Shift};
pub use error::{ModelError, RequiredField, Result, ValidationError};
pub use scout::{
    DEFAULT_LANGUAGE, KNOWN_MAPS, LANGUAGE_CODES, NewScout, Scout, ScoutId, WIRE_FIELDS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn register_builds_record_from_draft() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
        let draft = NewScout {
            location: "LAB TOURO".to_string(),
            nickname: "Kage".to_string(),
            clan: "Ronin".to_string(),
            shift: Some(Shift::Night),
            ..NewScout::default()
        };
        let scout = Scout::register(draft, now).expect("valid draft");
        assert_eq!(scout.location, "LAB TOURO");
        assert_eq!(scout.language, DEFAULT_LANGUAGE);
        assert_eq!(scout.shift, Some(Shift::Night));
        assert_eq!(scout.created_at, now);
        assert!(!scout.id.as_str().is_empty());
    }
}
