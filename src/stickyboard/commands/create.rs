use crate::error::Result;
use crate::gateway::NotesGateway;
use crate::model::Note;
use crate::palette::ColorPicker;
use crate::store::board_store::BoardStore;
use crate::store::KeyValueStore;
use tracing::{error, info};

/// Create an empty note in front of everything else.
///
/// Id and z-index are reserved before the gateway call. The note and its
/// default placement are only added once the gateway accepts it. An exhausted
/// id or z-index space is a store error and the gateway is never called.
pub async fn run<K: KeyValueStore, G: NotesGateway>(
    store: &BoardStore<K>,
    gateway: &G,
    colors: &ColorPicker,
) -> Result<Note> {
    let seq = store.sequencer();
    let note = Note::new(seq.allocate_id()?, colors.pick(), seq.next_z()?);

    let saved = gateway.save_note(&note).await.inspect_err(|e| {
        error!(note = %note.id, error = %e, "failed to create note");
    })?;

    store.commit(|snap| {
        snap.notes.push(saved.clone());
        snap.place(&saved.id);
    })?;

    info!(note = %saved.id, z = saved.z_index, color = %saved.color, "note created");
    Ok(saved)
}
