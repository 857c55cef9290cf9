//! # API Facade
//!
//! [`StickyBoard`] is the single entry point for a board, whatever drives it.
//! It owns the three collaborators a board needs (the [`BoardStore`], a
//! [`NotesGateway`] and a [`ColorPicker`]) and dispatches each operation to
//! its command module.
//!
//! The facade holds no logic of its own: ordering against the gateway, the
//! apply policy and the layout invariant all live in `commands/` and `store/`.
//!
//! ## Generic over backends
//!
//! `StickyBoard<K: KeyValueStore, G: NotesGateway>`:
//! - Production: `StickyBoard<FileStore, SimulatedGateway>`
//! - Testing: `StickyBoard<InMemoryStore, SimulatedGateway>` with zero latency
//!
//! ## Concurrency
//!
//! All operations take `&self`. Several may be awaited together (for example
//! with `futures::join!`); each one commits against whatever state is current
//! when its gateway call returns.

use crate::commands;
use crate::config::BoardConfig;
use crate::error::Result;
use crate::gateway::NotesGateway;
use crate::model::{Color, LayoutEntry, Note, NoteId};
use crate::palette::ColorPicker;
use crate::store::board_store::BoardStore;
use crate::store::KeyValueStore;

/// Counts shown in the board header and trash toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardSummary {
    pub active: usize,
    pub trashed: usize,
}

pub struct StickyBoard<K: KeyValueStore, G: NotesGateway> {
    store: BoardStore<K>,
    gateway: G,
    colors: ColorPicker,
}

impl<K: KeyValueStore, G: NotesGateway> StickyBoard<K, G> {
    pub fn new(store: BoardStore<K>, gateway: G, colors: ColorPicker) -> Self {
        Self {
            store,
            gateway,
            colors,
        }
    }

    /// Load the board from `backend` using the id prefix and color seed in `config`.
    pub fn open(backend: K, gateway: G, config: &BoardConfig) -> Result<Self> {
        let store = BoardStore::open(backend, &config.id_prefix)?;
        let colors = match config.color_seed {
            Some(seed) => ColorPicker::seeded(seed),
            None => ColorPicker::from_entropy(),
        };
        Ok(Self::new(store, gateway, colors))
    }

    pub fn active_notes(&self) -> Vec<Note> {
        self.store.snapshot().active_notes()
    }

    pub fn trashed_notes(&self) -> Vec<Note> {
        self.store.snapshot().trashed_notes()
    }

    pub fn active_layouts(&self) -> Vec<LayoutEntry> {
        self.store.snapshot().active_layouts()
    }

    pub fn note(&self, id: &NoteId) -> Option<Note> {
        self.store.find(id)
    }

    pub fn palette(&self) -> &'static [Color] {
        self.colors.palette()
    }

    pub fn summary(&self) -> BoardSummary {
        let snap = self.store.snapshot();
        let trashed = snap.notes.iter().filter(|n| n.is_deleted).count();
        BoardSummary {
            active: snap.notes.len() - trashed,
            trashed,
        }
    }

    pub async fn create(&self) -> Result<Note> {
        commands::create::run(&self.store, &self.gateway, &self.colors).await
    }

    pub async fn update(&self, note: Note) -> Result<Note> {
        commands::update::run(&self.store, &self.gateway, note).await
    }

    pub async fn recolor(&self, id: &NoteId, color: Color) -> Result<Option<Note>> {
        commands::edit::recolor(&self.store, &self.gateway, id, color).await
    }

    pub async fn edit_text(&self, id: &NoteId, text: impl Into<String>) -> Result<Option<Note>> {
        commands::edit::set_text(&self.store, &self.gateway, id, text.into()).await
    }

    pub async fn soft_delete(&self, id: &NoteId) -> Result<Option<Note>> {
        commands::delete::run(&self.store, &self.gateway, id).await
    }

    pub async fn restore(&self, id: &NoteId) -> Result<Option<Note>> {
        commands::restore::run(&self.store, &self.gateway, id).await
    }

    pub async fn purge(&self, id: &NoteId) -> Result<Option<Note>> {
        commands::purge::run(&self.store, &self.gateway, id).await
    }

    pub async fn clear_all(&self) -> Result<Vec<Note>> {
        commands::clear::all(&self.store, &self.gateway).await
    }

    pub async fn clear_trash(&self) -> Result<Vec<NoteId>> {
        commands::clear::trash(&self.store, &self.gateway).await
    }

    pub fn apply_user_layout(&self, entries: Vec<LayoutEntry>) -> Result<Vec<LayoutEntry>> {
        commands::arrange::run(&self.store, entries)
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn store(&self) -> &BoardStore<K> {
        &self.store
    }
}
