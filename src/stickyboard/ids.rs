//! Identity and stacking-order allocation.
//!
//! Neither the id counter nor the z-index high-water mark is persisted. Both
//! are derived from the loaded notes by [`max_id_suffix`] and [`max_z_index`]
//! when the board opens, and then advanced in memory by [`Sequencer`].
//!
//! Values are reserved at the moment they are handed out, before any gateway
//! round trip. A rejected create burns its id; ids stay unique and strictly
//! increasing either way.

use crate::error::{BoardError, Result};
use crate::model::{Note, NoteId};
use std::cell::Cell;

pub const DEFAULT_ID_PREFIX: &str = "n";

/// Highest numeric suffix among ids shaped `prefix + digits`. Other ids are ignored.
pub fn max_id_suffix<'a>(prefix: &str, ids: impl IntoIterator<Item = &'a NoteId>) -> u64 {
    ids.into_iter()
        .filter_map(|id| id.numeric_suffix(prefix))
        .max()
        .unwrap_or(0)
}

/// Highest z-index across all notes, trashed ones included, or 0.
pub fn max_z_index(notes: &[Note]) -> i64 {
    notes.iter().map(|n| n.z_index).max().unwrap_or(0).max(0)
}

#[derive(Debug)]
pub struct Sequencer {
    prefix: String,
    last_suffix: Cell<u64>,
    max_z: Cell<i64>,
}

impl Sequencer {
    pub fn from_notes(prefix: &str, notes: &[Note]) -> Self {
        Self {
            prefix: prefix.to_string(),
            last_suffix: Cell::new(max_id_suffix(prefix, notes.iter().map(|n| &n.id))),
            max_z: Cell::new(max_z_index(notes)),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Fails once the numeric suffix would pass `u64::MAX`; nothing is reserved then.
    pub fn allocate_id(&self) -> Result<NoteId> {
        let next = self
            .last_suffix
            .get()
            .checked_add(1)
            .ok_or_else(|| BoardError::Store("id space exhausted".into()))?;
        self.last_suffix.set(next);
        Ok(NoteId::new(format!("{}{}", self.prefix, next)))
    }

    /// Reserve the next front-most z-index.
    pub fn next_z(&self) -> Result<i64> {
        let next = self
            .max_z
            .get()
            .checked_add(1)
            .ok_or_else(|| BoardError::Store("z-index space exhausted".into()))?;
        self.max_z.set(next);
        Ok(next)
    }

    pub fn current_max_z(&self) -> i64 {
        self.max_z.get()
    }

    /// Raise the high-water marks to cover a note that arrived from outside
    /// the allocator (a full-replace update).
    pub fn observe(&self, note: &Note) {
        if note.z_index > self.max_z.get() {
            self.max_z.set(note.z_index);
        }
        if let Some(suffix) = note.id.numeric_suffix(&self.prefix) {
            if suffix > self.last_suffix.get() {
                self.last_suffix.set(suffix);
            }
        }
    }
}
