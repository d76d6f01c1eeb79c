//! Interface language preference.

use scout_model::Locale;

use crate::error::Result;
use crate::kv::KeyValueStore;

/// Storage key for the interface language code.
pub const LANGUAGE_KEY: &str = "language-preference";

/// Load the saved interface language, falling back to the default.
pub fn load_locale(store: &impl KeyValueStore) -> Locale {
    match store.get(LANGUAGE_KEY) {
        Ok(Some(code)) => code.parse().unwrap_or_else(|_| {
            tracing::warn!(code = %code, "ignoring unknown language preference");
            Locale::default()
        }),
        Ok(None) => Locale::default(),
        Err(error) => {
            tracing::warn!(%error, "could not read language preference");
            Locale::default()
        }
    }
}

pub fn save_locale(store: &mut impl KeyValueStore, locale: Locale) -> Result<()> {
    store.set(LANGUAGE_KEY, locale.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn defaults_to_portuguese() {
        assert_eq!(load_locale(&MemoryStore::new()), Locale::Pt);
    }

    #[test]
    fn saved_locale_is_loaded() {
        let mut store = MemoryStore::new();
        save_locale(&mut store, Locale::Es).unwrap();
        assert_eq!(load_locale(&store), Locale::Es);
    }

    #[test]
    fn unknown_code_falls_back() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "klingon").unwrap();
        assert_eq!(load_locale(&store), Locale::Pt);
    }
}
