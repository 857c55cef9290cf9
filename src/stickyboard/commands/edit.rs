//! Merge-then-update helpers for the two edits the board UI makes in place.
//!
//! Both only look at active notes: a trashed note cannot be recolored or
//! retyped until it is restored.

use super::update;
use crate::error::Result;
use crate::gateway::NotesGateway;
use crate::model::{Color, Note, NoteId};
use crate::store::board_store::BoardStore;
use crate::store::KeyValueStore;
use tracing::debug;

pub async fn recolor<K: KeyValueStore, G: NotesGateway>(
    store: &BoardStore<K>,
    gateway: &G,
    id: &NoteId,
    color: Color,
) -> Result<Option<Note>> {
    let Some(note) = store.find(id).filter(Note::is_active) else {
        debug!(note = %id, "recolor skipped: not on the board");
        return Ok(None);
    };
    update::run(store, gateway, Note { color, ..note }).await.map(Some)
}

pub async fn set_text<K: KeyValueStore, G: NotesGateway>(
    store: &BoardStore<K>,
    gateway: &G,
    id: &NoteId,
    text: String,
) -> Result<Option<Note>> {
    let Some(note) = store.find(id).filter(Note::is_active) else {
        debug!(note = %id, "text edit skipped: not on the board");
        return Ok(None);
    };
    update::run(store, gateway, Note { text, ..note }).await.map(Some)
}
