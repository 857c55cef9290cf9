use crate::error::Result;
use crate::layout;
use crate::model::LayoutEntry;
use crate::store::board_store::BoardStore;
use crate::store::KeyValueStore;
use tracing::debug;

/// Store the geometry the user produced by dragging or resizing.
///
/// Purely local: layout changes never go through the gateway. Entries for
/// notes that are not on the board are discarded by the commit. Returns the
/// resulting active layout.
pub fn run<K: KeyValueStore>(
    store: &BoardStore<K>,
    entries: Vec<LayoutEntry>,
) -> Result<Vec<LayoutEntry>> {
    let incoming = entries.len();
    store.commit(|snap| {
        snap.layouts = layout::apply_user_layout(&snap.layouts, entries);
    })?;
    let layouts = store.snapshot().active_layouts();

    debug!(incoming, stored = layouts.len(), "user layout applied");
    Ok(layouts)
}
