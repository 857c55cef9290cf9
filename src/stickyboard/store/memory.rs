use super::KeyValueStore;
use crate::error::{BoardError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `write` fail until switched off again.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(BoardError::Store("Simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::layout::default_placement;
    use crate::model::{now_millis, Color, LayoutEntry, Note, NoteId};
    use crate::store::{LAYOUT_KEY, NOTES_KEY};

    /// Builds a pre-seeded store, as if a previous session had left data behind.
    #[derive(Default)]
    pub struct StoreFixture {
        notes: Vec<Note>,
        layouts: Vec<LayoutEntry>,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        /// Active note with a layout entry.
        pub fn with_active_note(mut self, id: &str, text: &str, z_index: i64) -> Self {
            let mut note = Note::new(NoteId::from(id), Color::Yellow, z_index);
            note.text = text.to_string();
            self.layouts
                .push(default_placement(&note.id, self.layouts.len()));
            self.notes.push(note);
            self
        }

        /// Trashed note, no layout entry.
        pub fn with_trashed_note(mut self, id: &str, text: &str, z_index: i64) -> Self {
            let mut note = Note::new(NoteId::from(id), Color::Plum, z_index);
            note.text = text.to_string();
            self.notes.push(note.trashed(now_millis()));
            self
        }

        /// Raw layout entry, whether or not a matching note exists.
        pub fn with_layout(mut self, entry: LayoutEntry) -> Self {
            self.layouts.push(entry);
            self
        }

        pub fn build(self) -> InMemoryStore {
            let store = InMemoryStore::new();
            store.store(NOTES_KEY, &self.notes).unwrap();
            store.store(LAYOUT_KEY, &self.layouts).unwrap();
            store
        }
    }
}
