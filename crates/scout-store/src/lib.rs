//! Local persistence for the scout roster.
//!
//! The board keeps everything in a small key-value store:
//!
//! - `scouts-list` - JSON array of [`scout_model::Scout`] records
//! - `language-preference` - interface language code (`pt`, `en`, `es`)
//!
//! [`Roster`] owns the record list and mirrors it to the store after every
//! mutation. Storage backends implement [`KeyValueStore`]; [`FileStore`] keeps
//! one file per key in a data directory and [`MemoryStore`] lives in memory.
//!
//! # Example
//!
//! ```ignore
//! use scout_store::{FileStore, Roster};
//!
//! let store = FileStore::new("/path/to/data");
//! let mut roster = Roster::open(store)?;
//! roster.register(draft, chrono::Utc::now())?;
//! ```

mod error;
mod kv;
mod preference;
mod roster;

pub use error::{Result, StoreError};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use preference::{LANGUAGE_KEY, load_locale, save_locale};
pub use roster::{Roster, SCOUTS_KEY};
