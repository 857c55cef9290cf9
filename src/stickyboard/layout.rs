//! # Layout Reconciliation
//!
//! Grid geometry lives in its own collection, separate from note content, in
//! the shape the grid renderer consumes. This module holds the pure functions
//! that keep that collection in lockstep with the notes:
//!
//! - exactly one [`LayoutEntry`] per active note,
//! - no entry for a trashed or purged note.
//!
//! [`reconcile`] re-establishes both rules from any starting point. The board
//! store runs it on every commit, so individual commands only have to express
//! their intent (append a placement, drop an entry) and cannot leave the two
//! collections out of step.
//!
//! Vertical position is not computed here: new entries get `y = 0` and the
//! grid packs them upward into free space.

use crate::model::{LayoutEntry, Note, NoteId};
use std::collections::HashSet;

pub const GRID_COLUMNS: u32 = 12;
pub const DEFAULT_W: u32 = 3;
pub const DEFAULT_H: u32 = 4;
pub const MIN_W: u32 = 2;
pub const MIN_H: u32 = 3;
pub const MAX_W: u32 = 8;
pub const MAX_H: u32 = 12;

/// Placement for a note becoming active while `active_count` notes already
/// have entries. Spreads notes across the row before wrapping to column 0.
pub fn default_placement(id: &NoteId, active_count: usize) -> LayoutEntry {
    let x = ((active_count as u64 * DEFAULT_W as u64) % GRID_COLUMNS as u64) as u32;
    LayoutEntry {
        id: id.clone(),
        x,
        y: 0,
        w: DEFAULT_W,
        h: DEFAULT_H,
        min_w: MIN_W,
        min_h: MIN_H,
        max_w: MAX_W,
        max_h: MAX_H,
    }
}

/// Merge a user-driven layout into the known one.
///
/// `incoming` wins for every id it mentions and comes first; previously known
/// entries for ids it does not mention are kept after it, in their old order.
pub fn apply_user_layout(previous: &[LayoutEntry], incoming: Vec<LayoutEntry>) -> Vec<LayoutEntry> {
    let incoming: Vec<LayoutEntry> = incoming.into_iter().map(fit_to_grid).collect();
    let touched: HashSet<&NoteId> = incoming.iter().map(|e| &e.id).collect();
    let retained: Vec<LayoutEntry> = previous
        .iter()
        .filter(|e| !touched.contains(&e.id))
        .cloned()
        .collect();

    incoming.into_iter().chain(retained).collect()
}

/// Drop the entry for `id`. Returns whether anything was removed.
pub fn remove(layouts: &mut Vec<LayoutEntry>, id: &NoteId) -> bool {
    let before = layouts.len();
    layouts.retain(|e| &e.id != id);
    layouts.len() != before
}

/// Entries belonging to active notes, in persisted order.
pub fn active_layouts(layouts: &[LayoutEntry], notes: &[Note]) -> Vec<LayoutEntry> {
    let active = active_ids(notes);
    layouts
        .iter()
        .filter(|e| active.contains(&e.id))
        .cloned()
        .collect()
}

/// Bring `layouts` back to one entry per active note.
///
/// Entries for inactive or unknown ids are dropped, repeated ids keep their
/// first entry, and active notes without an entry get a default placement in
/// note order. Returns whether `layouts` changed.
pub fn reconcile(layouts: &mut Vec<LayoutEntry>, notes: &[Note]) -> bool {
    let active = active_ids(notes);
    let before = layouts.len();
    let mut seen: HashSet<NoteId> = HashSet::new();
    layouts.retain(|e| active.contains(&e.id) && seen.insert(e.id.clone()));
    let mut changed = layouts.len() != before;

    for note in notes.iter().filter(|n| n.is_active()) {
        if seen.insert(note.id.clone()) {
            let entry = default_placement(&note.id, layouts.len());
            layouts.push(entry);
            changed = true;
        }
    }

    changed
}

fn active_ids(notes: &[Note]) -> HashSet<&NoteId> {
    notes
        .iter()
        .filter(|n| n.is_active())
        .map(|n| &n.id)
        .collect()
}

/// Clamp size to the entry's own bounds and keep it inside the grid.
fn fit_to_grid(mut entry: LayoutEntry) -> LayoutEntry {
    entry.max_w = entry.max_w.max(entry.min_w).min(GRID_COLUMNS);
    entry.min_w = entry.min_w.min(entry.max_w);
    entry.max_h = entry.max_h.max(entry.min_h);

    entry.w = entry.w.clamp(entry.min_w, entry.max_w);
    entry.h = entry.h.clamp(entry.min_h, entry.max_h);
    entry.x = entry.x.min(GRID_COLUMNS - entry.w);
    entry
}
