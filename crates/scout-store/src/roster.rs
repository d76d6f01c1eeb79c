//! The record store: owns the roster and mirrors it to storage.

use chrono::{DateTime, Utc};
use scout_model::{NewScout, Scout, ScoutId, ValidationError};

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

/// Storage key for the JSON-encoded record list.
pub const SCOUTS_KEY: &str = "scouts-list";

/// Ordered list of scouts, newest registration first.
///
/// Every mutation updates the in-memory list and then writes the whole list
/// back to the store. A failed write is logged and kept in
/// [`Roster::last_persist_error`]; it never undoes the in-memory change.
#[derive(Debug)]
pub struct Roster<S> {
    store: S,
    scouts: Vec<Scout>,
    last_persist_error: Option<StoreError>,
}

impl<S: KeyValueStore> Roster<S> {
    /// Load the last persisted list, or start empty if nothing was stored.
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read, or if the stored list cannot be
    /// decoded. A corrupt list is reported instead of being replaced so that
    /// the next write does not destroy it.
    pub fn open(store: S) -> Result<Self> {
        let scouts = match store.get(SCOUTS_KEY)? {
            Some(raw) => serde_json::from_str::<Vec<Scout>>(&raw).map_err(|source| {
                StoreError::Corrupt {
                    key: SCOUTS_KEY.to_string(),
                    source,
                }
            })?,
            None => Vec::new(),
        };
        tracing::debug!(count = scouts.len(), "loaded roster");
        Ok(Self {
            store,
            scouts,
            last_persist_error: None,
        })
    }

    pub fn scouts(&self) -> &[Scout] {
        &self.scouts
    }

    pub fn len(&self) -> usize {
        self.scouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scouts.is_empty()
    }

    pub fn get(&self, id: &ScoutId) -> Option<&Scout> {
        self.scouts.iter().find(|scout| &scout.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Error from the most recent write, cleared by the next successful one.
    pub fn last_persist_error(&self) -> Option<&StoreError> {
        self.last_persist_error.as_ref()
    }

    /// Prepend a record.
    ///
    /// # Errors
    ///
    /// Rejects a record whose identifier is already present.
    pub fn add(&mut self, scout: Scout) -> Result<()> {
        if self.get(&scout.id).is_some() {
            return Err(StoreError::DuplicateId(scout.id));
        }
        tracing::info!(id = %scout.id, clan = %scout.clan, "scout added");
        self.scouts.insert(0, scout);
        self.persist();
        Ok(())
    }

    /// Validate a registration draft and prepend the resulting record.
    pub fn register(
        &mut self,
        draft: NewScout,
        now: DateTime<Utc>,
    ) -> std::result::Result<&Scout, ValidationError> {
        let scout = Scout::register(draft, now)?;
        tracing::info!(id = %scout.id, clan = %scout.clan, "scout registered");
        self.scouts.insert(0, scout);
        self.persist();
        Ok(&self.scouts[0])
    }

    /// Remove the record with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &ScoutId) -> bool {
        let before = self.scouts.len();
        self.scouts.retain(|scout| &scout.id != id);
        if self.scouts.len() == before {
            tracing::debug!(id = %id, "delete ignored, no such scout");
            return false;
        }
        tracing::info!(id = %id, "scout deleted");
        self.persist();
        true
    }

    /// Overwrite the whole roster, as an import does.
    pub fn replace_all(&mut self, scouts: Vec<Scout>) {
        tracing::info!(
            previous = self.scouts.len(),
            count = scouts.len(),
            "roster replaced"
        );
        self.scouts = scouts;
        self.persist();
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.scouts)
            .map_err(StoreError::Serialization)
            .and_then(|json| self.store.set(SCOUTS_KEY, &json));
        match result {
            Ok(()) => self.last_persist_error = None,
            Err(error) => {
                tracing::error!(%error, "failed to persist roster");
                self.last_persist_error = Some(error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<()> {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }

    fn draft(nickname: &str) -> NewScout {
        NewScout {
            location: "LAB BICHEON".to_string(),
            nickname: nickname.to_string(),
            clan: "Alpha".to_string(),
            ..NewScout::default()
        }
    }

    #[test]
    fn register_prepends_and_persists() {
        let mut roster = Roster::open(MemoryStore::new()).unwrap();
        roster.register(draft("first"), Utc::now()).unwrap();
        roster.register(draft("second"), Utc::now()).unwrap();
        let names: Vec<&str> = roster.scouts().iter().map(|s| s.nickname.as_str()).collect();
        assert_eq!(names, ["second", "first"]);

        let reopened = Roster::open(roster.into_store()).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.scouts()[0].nickname, "second");
    }

    #[test]
    fn invalid_draft_leaves_roster_unchanged() {
        let mut roster = Roster::open(MemoryStore::new()).unwrap();
        roster.register(draft("kept"), Utc::now()).unwrap();
        let err = roster
            .register(NewScout::default(), Utc::now())
            .unwrap_err();
        assert_eq!(err.missing.len(), 3);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn delete_missing_id_is_a_no_op() {
        let mut roster = Roster::open(MemoryStore::new()).unwrap();
        roster.register(draft("a"), Utc::now()).unwrap();
        let before = roster.scouts().to_vec();
        assert!(!roster.delete(&ScoutId::from("nope")));
        assert_eq!(roster.scouts(), before.as_slice());
    }

    #[test]
    fn delete_removes_only_matching_record() {
        let mut roster = Roster::open(MemoryStore::new()).unwrap();
        roster.register(draft("a"), Utc::now()).unwrap();
        let id = roster.register(draft("b"), Utc::now()).unwrap().id.clone();
        assert!(roster.delete(&id));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.scouts()[0].nickname, "a");
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut roster = Roster::open(MemoryStore::new()).unwrap();
        let scout = Scout::register(draft("a"), Utc::now()).unwrap();
        roster.add(scout.clone()).unwrap();
        assert!(matches!(roster.add(scout), Err(StoreError::DuplicateId(_))));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn corrupt_list_is_reported() {
        let mut store = MemoryStore::new();
        store.set(SCOUTS_KEY, "{not json").unwrap();
        assert!(matches!(
            Roster::open(store),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn failed_persist_keeps_memory_state() {
        let mut roster = Roster::open(BrokenStore).unwrap();
        roster.register(draft("a"), Utc::now()).unwrap();
        assert_eq!(roster.len(), 1);
        assert!(roster.last_persist_error().is_some());
    }
}
