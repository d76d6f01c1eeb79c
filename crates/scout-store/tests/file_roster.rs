//! Roster persistence through the file-backed store.

use chrono::Utc;
use scout_model::{Locale, NewScout, Scout, Shift};
use scout_store::{FileStore, KeyValueStore, Roster, SCOUTS_KEY, load_locale, save_locale};
use tempfile::tempdir;

fn draft(nickname: &str, language: &str) -> NewScout {
    NewScout {
        location: "MYSTIC".to_string(),
        shift: Some(Shift::Afternoon),
        nickname: nickname.to_string(),
        clan: "Ronin".to_string(),
        language: language.to_string(),
        ..NewScout::default()
    }
}

#[test]
fn fresh_directory_starts_empty() {
    let dir = tempdir().unwrap();
    let roster = Roster::open(FileStore::new(dir.path())).unwrap();
    assert!(roster.is_empty());
}

#[test]
fn mutations_survive_reopen() {
    let dir = tempdir().unwrap();
    let mut roster = Roster::open(FileStore::new(dir.path())).unwrap();
    roster.register(draft("Kage", "PT"), Utc::now()).unwrap();
    let gone = roster.register(draft("Rin", "EN"), Utc::now()).unwrap().id.clone();
    roster.register(draft("Yume", "ES"), Utc::now()).unwrap();
    assert!(roster.delete(&gone));
    assert!(roster.last_persist_error().is_none());

    let reopened = Roster::open(FileStore::new(dir.path())).unwrap();
    let names: Vec<&str> = reopened.scouts().iter().map(|s| s.nickname.as_str()).collect();
    assert_eq!(names, ["Yume", "Kage"]);
}

#[test]
fn replace_all_overwrites_stored_list() {
    let dir = tempdir().unwrap();
    let mut roster = Roster::open(FileStore::new(dir.path())).unwrap();
    roster.register(draft("old", "PT"), Utc::now()).unwrap();

    let imported = vec![Scout::register(draft("new", "EN"), Utc::now()).unwrap()];
    roster.replace_all(imported.clone());

    let reopened = Roster::open(FileStore::new(dir.path())).unwrap();
    assert_eq!(reopened.scouts(), imported.as_slice());
}

#[test]
fn stored_list_is_board_json() {
    let dir = tempdir().unwrap();
    let mut roster = Roster::open(FileStore::new(dir.path())).unwrap();
    roster.register(draft("Kage", "PT"), Utc::now()).unwrap();

    let raw = FileStore::new(dir.path()).get(SCOUTS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["nick"], "Kage");
    assert_eq!(value[0]["turnoPrincipal"], "Tarde");
}

#[test]
fn language_preference_shares_the_directory() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    save_locale(&mut store, Locale::En).unwrap();
    assert_eq!(load_locale(&FileStore::new(dir.path())), Locale::En);
    assert!(dir.path().join("language-preference.json").exists());
}
