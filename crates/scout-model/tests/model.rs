//! Tests for scout-model types.

use chrono::{TimeZone, Utc};
use scout_model::{NewScout, RequiredField, Scout, Shift};

#[test]
fn missing_clan_is_rejected() {
    let draft = NewScout {
        location: "SNAKE".to_string(),
        nickname: "Rin".to_string(),
        ..NewScout::default()
    };
    let err = Scout::register(draft, Utc::now()).unwrap_err();
    assert_eq!(err.missing, vec![RequiredField::Clan]);
}

#[test]
fn optional_fields_are_carried_over() {
    let now = Utc.with_ymd_and_hms(2024, 11, 5, 22, 15, 0).unwrap();
    let draft = NewScout {
        location: "LAB SERPENTE".to_string(),
        shift: Some(Shift::Dawn),
        nickname: "Yume".to_string(),
        power: "98.5k".to_string(),
        clan: "Lotus".to_string(),
        language: "ES".to_string(),
        role: "healer".to_string(),
    };
    let scout = Scout::register(draft, now).unwrap();
    assert_eq!(scout.power, "98.5k");
    assert_eq!(scout.language, "ES");
    assert_eq!(scout.role, "healer");
    assert_eq!(scout.shift, Some(Shift::Dawn));
    assert!(scout.created_at >= now);
}

#[test]
fn record_json_round_trip_keeps_unset_shift() {
    let scout = Scout::register(
        NewScout {
            location: "MYSTIC".to_string(),
            nickname: "Foo".to_string(),
            clan: "Alpha".to_string(),
            ..NewScout::default()
        },
        Utc::now(),
    )
    .unwrap();
    let json = serde_json::to_string(&scout).expect("serialize scout");
    let round: Scout = serde_json::from_str(&json).expect("deserialize scout");
    assert_eq!(round, scout);
    assert_eq!(round.shift, None);
}
