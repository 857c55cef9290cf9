use crate::error::Result;
use crate::gateway::NotesGateway;
use crate::model::{Note, NoteId};
use crate::store::board_store::BoardStore;
use crate::store::KeyValueStore;
use tracing::{debug, error, info};

/// Bring a trashed note back to the front of the board with a fresh placement.
///
/// Unknown ids and notes that are not in the trash are a no-op (`Ok(None)`).
/// The z-index is reserved when the restore is issued, like `create` does, so
/// stacking follows the order commands were issued in, not the order the
/// gateway answers.
pub async fn run<K: KeyValueStore, G: NotesGateway>(
    store: &BoardStore<K>,
    gateway: &G,
    id: &NoteId,
) -> Result<Option<Note>> {
    if !store.find(id).is_some_and(|n| n.is_deleted) {
        debug!(note = %id, "restore skipped: not in the trash");
        return Ok(None);
    }

    let z = store.sequencer().next_z()?;

    gateway.restore_note(id).await.inspect_err(|e| {
        error!(note = %id, error = %e, "failed to restore note");
    })?;

    let restored = store.commit(|snap| {
        let current = snap.find(id).filter(|n| n.is_deleted)?;
        let restored = current.restored(z);
        if let Some(slot) = snap.find_mut(id) {
            *slot = restored.clone();
        }
        snap.place(id);
        Some(restored)
    })?;

    match &restored {
        Some(note) => info!(note = %id, z = note.z_index, "note restored"),
        None => debug!(note = %id, "restore landed after the note left the trash"),
    }
    Ok(restored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::board_from;
    use crate::commands::{create, delete};
    use crate::error::BoardError;
    use crate::gateway::{GatewayLatency, GatewayOp, SimulatedGateway};
    use crate::palette::ColorPicker;
    use crate::store::memory::fixtures::StoreFixture;

    #[tokio::test]
    async fn delete_then_restore_roundtrip() {
        let backend = StoreFixture::new()
            .with_active_note("n1", "keep me", 4)
            .with_active_note("n2", "other", 5)
            .build();
        let (store, gateway) = board_from(backend);
        let id = NoteId::from("n1");
        let before = store.find(&id).unwrap();

        delete::run(&store, &gateway, &id).await.unwrap();
        let back = run(&store, &gateway, &id).await.unwrap().unwrap();

        assert_eq!(back.id, before.id);
        assert_eq!(back.text, before.text);
        assert_eq!(back.color, before.color);
        assert!(!back.is_deleted);
        assert!(back.deleted_at.is_none());
        assert_eq!(back.z_index, 6);

        let snap = store.snapshot();
        let ids: Vec<_> = snap.active_layouts().iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, vec!["n2", "n1"]);
        assert_eq!(snap.active_layouts()[1].x, 3);
    }

    #[tokio::test]
    async fn restored_note_goes_above_newer_notes() {
        let (store, gateway) = board_from(StoreFixture::new().build());
        let colors = ColorPicker::seeded(9);
        let first = create::run(&store, &gateway, &colors).await.unwrap();
        delete::run(&store, &gateway, &first.id).await.unwrap();
        let second = create::run(&store, &gateway, &colors).await.unwrap();

        let back = run(&store, &gateway, &first.id).await.unwrap().unwrap();
        assert!(back.z_index > second.z_index);
        assert!(back.z_index > first.z_index);
    }

    #[tokio::test]
    async fn restoring_active_note_is_a_no_op() {
        let backend = StoreFixture::new().with_active_note("n1", "", 1).build();
        let (store, gateway) = board_from(backend);
        let before = store.snapshot();

        assert!(run(&store, &gateway, &NoteId::from("n1"))
            .await
            .unwrap()
            .is_none());
        assert_eq!(store.snapshot().notes, before.notes);
        assert_eq!(store.snapshot().layouts, before.layouts);
        assert_eq!(gateway.calls_of(GatewayOp::Restore), 0);
    }

    #[tokio::test]
    async fn rejected_restore_stays_in_trash() {
        let backend = StoreFixture::new().with_trashed_note("n1", "", 1).build();
        let (store, gateway) = board_from(backend);
        gateway.fail_op(GatewayOp::Restore);

        assert!(run(&store, &gateway, &NoteId::from("n1")).await.is_err());
        let snap = store.snapshot();
        assert!(snap.find(&NoteId::from("n1")).unwrap().is_deleted);
        assert!(snap.layouts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn stacking_follows_issue_order() {
        let backend = StoreFixture::new()
            .with_active_note("n1", "", 1)
            .with_trashed_note("n2", "back soon", 2)
            .build();
        let store = BoardStore::open(backend, "n").unwrap();
        let gateway = SimulatedGateway::new(GatewayLatency {
            save_ms: 200,
            restore_ms: 100,
            ..GatewayLatency::zero()
        });
        let colors = ColorPicker::seeded(4);

        // the restore is answered first but was issued second
        let n2 = NoteId::from("n2");
        let (created, restored) = tokio::join!(
            create::run(&store, &gateway, &colors),
            run(&store, &gateway, &n2)
        );
        let created = created.unwrap();
        let restored = restored.unwrap().unwrap();

        assert_eq!(created.z_index, 3);
        assert_eq!(restored.z_index, 4);
    }

    #[tokio::test]
    async fn exhausted_z_space_fails_before_the_gateway() {
        let backend = StoreFixture::new()
            .with_active_note("n1", "", i64::MAX)
            .with_trashed_note("n2", "", 1)
            .build();
        let (store, gateway) = board_from(backend);

        let err = run(&store, &gateway, &NoteId::from("n2")).await.unwrap_err();
        assert!(matches!(err, BoardError::Store(_)));
        assert_eq!(gateway.calls_of(GatewayOp::Restore), 0);
        assert!(store.find(&NoteId::from("n2")).unwrap().is_deleted);
    }
}
