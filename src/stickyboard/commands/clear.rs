//! Bulk operations. Both apply the local change first and then wait for every
//! gateway confirmation. A rejected confirmation does not undo the local
//! change: it is logged, and the first one is returned to the caller once all
//! calls have finished.

use crate::error::{BoardError, Result};
use crate::gateway::NotesGateway;
use crate::model::{now_millis, Note, NoteId};
use crate::store::board_store::BoardStore;
use crate::store::KeyValueStore;
use futures::future::join_all;
use tracing::{info, warn};

/// Move every active note to the trash. Each note gets its own `deleted_at`.
pub async fn all<K: KeyValueStore, G: NotesGateway>(
    store: &BoardStore<K>,
    gateway: &G,
) -> Result<Vec<Note>> {
    let trashed = store.commit(|snap| {
        let mut trashed = Vec::new();
        for note in snap.notes.iter_mut().filter(|n| n.is_active()) {
            *note = note.trashed(now_millis());
            trashed.push(note.clone());
        }
        snap.layouts.clear();
        trashed
    })?;
    info!(count = trashed.len(), "board cleared to trash");

    let outcomes = join_all(trashed.iter().map(|note| gateway.update_note(note))).await;
    first_failure(outcomes, "clear all")?;
    Ok(trashed)
}

/// Permanently remove every trashed note. Returns the ids removed.
pub async fn trash<K: KeyValueStore, G: NotesGateway>(
    store: &BoardStore<K>,
    gateway: &G,
) -> Result<Vec<NoteId>> {
    let purged = store.commit(|snap| {
        let (gone, kept): (Vec<Note>, Vec<Note>) =
            snap.notes.drain(..).partition(|n| n.is_deleted);
        snap.notes = kept;
        let ids: Vec<NoteId> = gone.into_iter().map(|n| n.id).collect();
        snap.layouts.retain(|e| !ids.contains(&e.id));
        ids
    })?;
    info!(count = purged.len(), "trash emptied");

    let outcomes = join_all(purged.iter().map(|id| gateway.delete_note(id))).await;
    first_failure(outcomes, "clear trash")?;
    Ok(purged)
}

fn first_failure<T>(outcomes: Vec<Result<T>>, batch: &str) -> Result<()> {
    let mut first: Option<BoardError> = None;
    for outcome in outcomes {
        if let Err(e) = outcome {
            warn!(batch, error = %e, "gateway rejected a batch confirmation; local change kept");
            first.get_or_insert(e);
        }
    }
    first.map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::restore;
    use crate::commands::testing::board_from;
    use crate::gateway::GatewayOp;
    use crate::store::memory::fixtures::StoreFixture;

    fn mixed_board() -> StoreFixture {
        StoreFixture::new()
            .with_active_note("n1", "a", 1)
            .with_trashed_note("n2", "b", 2)
            .with_active_note("n3", "c", 3)
            .with_trashed_note("n4", "d", 4)
            .with_active_note("n5", "e", 5)
    }

    #[tokio::test]
    async fn clear_all_trashes_every_active_note() {
        let (store, gateway) = board_from(mixed_board().build());

        let trashed = all(&store, &gateway).await.unwrap();
        assert_eq!(trashed.len(), 3);

        let snap = store.snapshot();
        assert!(snap.active_notes().is_empty());
        assert_eq!(snap.trashed_notes().len(), 5);
        assert!(snap.layouts.is_empty());
        assert!(snap.notes.iter().all(Note::is_consistent));
        assert_eq!(gateway.calls_of(GatewayOp::Update), 3);
    }

    #[tokio::test]
    async fn clear_all_keeps_local_change_when_gateway_rejects() {
        let (store, gateway) = board_from(mixed_board().build());
        gateway.fail_id("n3");

        let err = all(&store, &gateway).await.unwrap_err();
        assert!(err.is_persistence_failure());

        assert!(store.snapshot().active_notes().is_empty());
        // every confirmation was still attempted
        assert_eq!(gateway.calls_of(GatewayOp::Update), 3);
    }

    #[tokio::test]
    async fn clear_trash_removes_trashed_only() {
        let (store, gateway) = board_from(mixed_board().build());

        let purged = clear_ids(trash(&store, &gateway).await.unwrap());
        assert_eq!(purged, vec!["n2", "n4"]);

        let snap = store.snapshot();
        let left: Vec<_> = snap.notes.iter().map(|n| n.id.to_string()).collect();
        assert_eq!(left, vec!["n1", "n3", "n5"]);
        assert_eq!(snap.layouts.len(), 3);

        for id in ["n2", "n4"] {
            let again = restore::run(&store, &gateway, &NoteId::from(id)).await.unwrap();
            assert!(again.is_none());
        }
    }

    #[tokio::test]
    async fn clear_trash_keeps_local_change_when_gateway_rejects() {
        let (store, gateway) = board_from(mixed_board().build());
        gateway.fail_op(GatewayOp::Delete);

        assert!(trash(&store, &gateway).await.is_err());
        assert!(store.snapshot().trashed_notes().is_empty());
        assert_eq!(gateway.calls_of(GatewayOp::Delete), 2);
    }

    #[tokio::test]
    async fn clearing_an_empty_board_does_nothing() {
        let (store, gateway) = board_from(StoreFixture::new().build());
        assert!(all(&store, &gateway).await.unwrap().is_empty());
        assert!(trash(&store, &gateway).await.unwrap().is_empty());
        assert!(gateway.journal().is_empty());
    }

    fn clear_ids(ids: Vec<NoteId>) -> Vec<String> {
        ids.into_iter().map(|id| id.to_string()).collect()
    }
}
