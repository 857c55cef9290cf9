use crate::error::{BoardError, Result};
use crate::gateway::NotesGateway;
use crate::model::Note;
use crate::store::board_store::BoardStore;
use crate::store::KeyValueStore;
use tracing::{debug, error, info};

/// Replace a note wholesale with `note`.
///
/// This is not a patch: every field of `note` is taken as-is, so callers merge
/// their change into a current copy first (see [`super::edit`]). If the note
/// was purged while the gateway call was in flight, nothing is re-inserted.
pub async fn run<K: KeyValueStore, G: NotesGateway>(
    store: &BoardStore<K>,
    gateway: &G,
    note: Note,
) -> Result<Note> {
    if !note.is_consistent() {
        return Err(BoardError::InconsistentNote(note.id));
    }

    let saved = gateway.update_note(&note).await.inspect_err(|e| {
        error!(note = %note.id, error = %e, "failed to update note");
    })?;

    let replaced = store.commit(|snap| match snap.find_mut(&saved.id) {
        Some(slot) => {
            *slot = saved.clone();
            true
        }
        None => false,
    })?;

    if replaced {
        store.sequencer().observe(&saved);
        info!(note = %saved.id, "note updated");
    } else {
        debug!(note = %saved.id, "update landed after the note was purged");
    }
    Ok(saved)
}
