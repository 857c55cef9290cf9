use crate::gateway::GatewayOp;
use crate::model::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Gateway rejected {op} for note {id}: {reason}")]
    Gateway {
        op: GatewayOp,
        id: NoteId,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Note {0} is inconsistent: deleted flag and deletion time disagree")]
    InconsistentNote(NoteId),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl BoardError {
    /// True for every failure raised by the gateway or the key-value store.
    ///
    /// These are the failures that leave single-note operations un-applied.
    /// There is no transient/permanent split: callers decide what to surface.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            BoardError::Gateway { .. }
                | BoardError::Io(_)
                | BoardError::Serialization(_)
                | BoardError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
