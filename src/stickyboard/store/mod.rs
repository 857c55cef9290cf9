//! # Storage Layer
//!
//! Two layers, split the same way as content I/O and business rules:
//!
//! - [`KeyValueStore`]: the raw persistent key-value collaborator. Strings in,
//!   strings out, plus typed `load`/`store` helpers on top. It knows nothing
//!   about notes.
//! - [`board_store::BoardStore`]: the two board collections (notes and
//!   layouts) held in memory, written through to a `KeyValueStore` on every
//!   commit, with the layout invariant re-established on each commit.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file per key in a data directory.
//! - [`memory::InMemoryStore`]: a map, for tests. Can simulate write failures.
//!
//! ## Keys
//!
//! ```text
//! <data dir>/
//! ├── sticky-notes.json          # every note, active and trashed
//! ├── sticky-notes-layout.json   # grid entries for active notes
//! └── config.json                # board configuration
//! ```

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod board_store;
pub mod fs;
pub mod memory;

pub const NOTES_KEY: &str = "sticky-notes";
pub const LAYOUT_KEY: &str = "sticky-notes-layout";

/// Durable mapping from string keys to serialized values.
///
/// Takes `&self` throughout: implementations handle their own interior
/// mutability, the board is single-threaded.
pub trait KeyValueStore {
    /// Raw payload for `key`, or `None` if it was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the payload for `key`. Must not leave a partial value behind.
    fn write(&self, key: &str, payload: &str) -> Result<()>;

    /// Typed read, falling back to `default` when the key is absent.
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T>
    where
        Self: Sized,
    {
        match self.read(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(default),
        }
    }

    fn store<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let payload = serde_json::to_string_pretty(value)?;
        self.write(key, &payload)
    }
}
