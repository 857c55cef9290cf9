//! # Remote Mutation Gateway
//!
//! Every note mutation round-trips through a [`NotesGateway`] before the board
//! treats it as durable. The contract is four asynchronous calls, each of
//! which may reject with [`BoardError::Gateway`](crate::error::BoardError).
//! There is no retry and no timeout at this layer; a rejection simply
//! propagates to whoever issued the command.
//!
//! The trait is `?Send`: the board runs on one thread and its commands borrow
//! single-threaded state across awaits.

use crate::error::Result;
use crate::model::{Note, NoteId};
use async_trait::async_trait;
use std::fmt;

pub mod simulated;

pub use simulated::{GatewayLatency, SimulatedGateway};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOp {
    Save,
    Update,
    Delete,
    Restore,
}

impl fmt::Display for GatewayOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GatewayOp::Save => "saveNote",
            GatewayOp::Update => "updateNote",
            GatewayOp::Delete => "deleteNote",
            GatewayOp::Restore => "restoreNote",
        };
        f.write_str(name)
    }
}

#[async_trait(?Send)]
pub trait NotesGateway {
    /// Persist a new note. Echoes the stored note back.
    async fn save_note(&self, note: &Note) -> Result<Note>;

    /// Persist a changed note (including moves to the trash). Echoes it back.
    async fn update_note(&self, note: &Note) -> Result<Note>;

    /// Permanently delete.
    async fn delete_note(&self, id: &NoteId) -> Result<()>;

    /// Tell the backend a trashed note is coming back.
    async fn restore_note(&self, id: &NoteId) -> Result<()>;
}
