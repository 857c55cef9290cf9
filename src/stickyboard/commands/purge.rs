use crate::error::Result;
use crate::gateway::NotesGateway;
use crate::layout;
use crate::model::{Note, NoteId};
use crate::store::board_store::BoardStore;
use crate::store::KeyValueStore;
use tracing::{debug, error, info};

/// Permanently remove a note and its layout entry. Returns the removed note.
///
/// Works on trashed and active notes alike. An unknown id is a no-op.
pub async fn run<K: KeyValueStore, G: NotesGateway>(
    store: &BoardStore<K>,
    gateway: &G,
    id: &NoteId,
) -> Result<Option<Note>> {
    if store.find(id).is_none() {
        debug!(note = %id, "purge skipped: unknown note");
        return Ok(None);
    }

    gateway.delete_note(id).await.inspect_err(|e| {
        error!(note = %id, error = %e, "failed to permanently delete note");
    })?;

    let removed = store.commit(|snap| {
        let pos = snap.notes.iter().position(|n| &n.id == id);
        layout::remove(&mut snap.layouts, id);
        pos.map(|p| snap.notes.remove(p))
    })?;

    info!(note = %id, "note purged");
    Ok(removed)
}
