use super::{KeyValueStore, LAYOUT_KEY, NOTES_KEY};
use crate::error::Result;
use crate::ids::Sequencer;
use crate::layout;
use crate::model::{LayoutEntry, Note, NoteId};
use std::cell::RefCell;
use tracing::{debug, info};

/// The two board collections at one point in time.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub notes: Vec<Note>,
    pub layouts: Vec<LayoutEntry>,
}

impl Snapshot {
    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn find_mut(&mut self, id: &NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| &n.id == id)
    }

    pub fn active_notes(&self) -> Vec<Note> {
        self.notes.iter().filter(|n| n.is_active()).cloned().collect()
    }

    pub fn trashed_notes(&self) -> Vec<Note> {
        self.notes.iter().filter(|n| n.is_deleted).cloned().collect()
    }

    pub fn active_layouts(&self) -> Vec<LayoutEntry> {
        layout::active_layouts(&self.layouts, &self.notes)
    }

    /// Give `id` a fresh default placement at the end of the layout.
    pub fn place(&mut self, id: &NoteId) {
        layout::remove(&mut self.layouts, id);
        let count = self.active_layouts().len();
        self.layouts.push(layout::default_placement(id, count));
    }
}

/// In-memory board state written through to a [`KeyValueStore`].
///
/// Readers get clones; writers go through [`BoardStore::commit`], which swaps
/// the whole snapshot at once. No borrow is ever held across an `.await`, so
/// any number of commands may be in flight against the same store.
pub struct BoardStore<K: KeyValueStore> {
    backend: K,
    state: RefCell<Snapshot>,
    sequencer: Sequencer,
}

impl<K: KeyValueStore> BoardStore<K> {
    /// Load both collections and repair the layout if it drifted from the notes.
    pub fn open(backend: K, id_prefix: &str) -> Result<Self> {
        let notes: Vec<Note> = backend.load(NOTES_KEY, Vec::new())?;
        let mut layouts: Vec<LayoutEntry> = backend.load(LAYOUT_KEY, Vec::new())?;

        if layout::reconcile(&mut layouts, &notes) {
            info!(entries = layouts.len(), "repaired board layout on open");
            backend.store(LAYOUT_KEY, &layouts)?;
        }

        let sequencer = Sequencer::from_notes(id_prefix, &notes);
        debug!(
            notes = notes.len(),
            max_z = sequencer.current_max_z(),
            "board opened"
        );

        Ok(Self {
            backend,
            state: RefCell::new(Snapshot { notes, layouts }),
            sequencer,
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().clone()
    }

    pub fn find(&self, id: &NoteId) -> Option<Note> {
        self.state.borrow().find(id).cloned()
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// Apply `change` to a copy of the current state, restore the layout
    /// invariant, persist whichever collections changed, then swap the copy in.
    ///
    /// `change` always sees the latest state, not the state from before the
    /// caller's gateway round trip. If persisting fails the in-memory state is
    /// left untouched and the error is returned.
    pub fn commit<T>(&self, change: impl FnOnce(&mut Snapshot) -> T) -> Result<T> {
        let mut next = self.state.borrow().clone();
        let out = change(&mut next);
        layout::reconcile(&mut next.layouts, &next.notes);

        let (notes_changed, layouts_changed) = {
            let current = self.state.borrow();
            (current.notes != next.notes, current.layouts != next.layouts)
        };
        if notes_changed {
            self.backend.store(NOTES_KEY, &next.notes)?;
        }
        if layouts_changed {
            self.backend.store(LAYOUT_KEY, &next.layouts)?;
        }

        *self.state.borrow_mut() = next;
        Ok(out)
    }
}
