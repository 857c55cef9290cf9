use crate::error::Result;
use crate::gateway::NotesGateway;
use crate::layout;
use crate::model::{now_millis, Note, NoteId};
use crate::store::board_store::BoardStore;
use crate::store::KeyValueStore;
use tracing::{debug, error, info};

/// Move a note to the trash and take it off the grid.
///
/// Unknown ids and notes already in the trash are a no-op (`Ok(None)`).
pub async fn run<K: KeyValueStore, G: NotesGateway>(
    store: &BoardStore<K>,
    gateway: &G,
    id: &NoteId,
) -> Result<Option<Note>> {
    let Some(note) = store.find(id).filter(Note::is_active) else {
        debug!(note = %id, "soft delete skipped: not on the board");
        return Ok(None);
    };

    let trashed = note.trashed(now_millis());
    let saved = gateway.update_note(&trashed).await.inspect_err(|e| {
        error!(note = %id, error = %e, "failed to delete note");
    })?;

    let landed = store.commit(|snap| {
        let slot = snap.find_mut(id)?;
        *slot = saved.clone();
        layout::remove(&mut snap.layouts, id);
        Some(saved)
    })?;

    match &landed {
        Some(_) => info!(note = %id, "note moved to trash"),
        None => debug!(note = %id, "soft delete landed after the note was purged"),
    }
    Ok(landed)
}
