use super::{GatewayOp, NotesGateway};
use crate::error::{BoardError, Result};
use crate::model::{Note, NoteId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::time::Duration;

/// Simulated round-trip time per operation, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayLatency {
    pub save_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    pub restore_ms: u64,
}

impl Default for GatewayLatency {
    fn default() -> Self {
        Self {
            save_ms: 200,
            update_ms: 100,
            delete_ms: 150,
            restore_ms: 100,
        }
    }
}

impl GatewayLatency {
    pub fn zero() -> Self {
        Self {
            save_ms: 0,
            update_ms: 0,
            delete_ms: 0,
            restore_ms: 0,
        }
    }

    pub fn for_op(&self, op: GatewayOp) -> Duration {
        let ms = match op {
            GatewayOp::Save => self.save_ms,
            GatewayOp::Update => self.update_ms,
            GatewayOp::Delete => self.delete_ms,
            GatewayOp::Restore => self.restore_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Stand-in for a network-backed notes API.
///
/// Sleeps for the configured latency, then either echoes the request or
/// rejects it. Rejections are injected per operation or per note id, and every
/// call is recorded in a journal for inspection.
#[derive(Default)]
pub struct SimulatedGateway {
    latency: GatewayLatency,
    failing_ops: RefCell<HashSet<GatewayOp>>,
    failing_ids: RefCell<HashSet<NoteId>>,
    journal: RefCell<Vec<(GatewayOp, NoteId)>>,
}

impl SimulatedGateway {
    pub fn new(latency: GatewayLatency) -> Self {
        Self {
            latency,
            ..Default::default()
        }
    }

    /// No latency at all.
    pub fn instant() -> Self {
        Self::new(GatewayLatency::zero())
    }

    /// Reject every call of `op` until [`SimulatedGateway::heal`].
    pub fn fail_op(&self, op: GatewayOp) {
        self.failing_ops.borrow_mut().insert(op);
    }

    /// Reject every call that concerns `id` until [`SimulatedGateway::heal`].
    pub fn fail_id(&self, id: impl Into<NoteId>) {
        self.failing_ids.borrow_mut().insert(id.into());
    }

    pub fn heal(&self) {
        self.failing_ops.borrow_mut().clear();
        self.failing_ids.borrow_mut().clear();
    }

    /// Calls received so far, in arrival order, including rejected ones.
    pub fn journal(&self) -> Vec<(GatewayOp, NoteId)> {
        self.journal.borrow().clone()
    }

    pub fn calls_of(&self, op: GatewayOp) -> usize {
        self.journal.borrow().iter().filter(|(o, _)| *o == op).count()
    }

    async fn round_trip(&self, op: GatewayOp, id: &NoteId) -> Result<()> {
        self.journal.borrow_mut().push((op, id.clone()));

        let delay = self.latency.for_op(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let rejected =
            self.failing_ops.borrow().contains(&op) || self.failing_ids.borrow().contains(id);
        if rejected {
            return Err(BoardError::Gateway {
                op,
                id: id.clone(),
                reason: "simulated network failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl NotesGateway for SimulatedGateway {
    async fn save_note(&self, note: &Note) -> Result<Note> {
        self.round_trip(GatewayOp::Save, &note.id).await?;
        Ok(note.clone())
    }

    async fn update_note(&self, note: &Note) -> Result<Note> {
        self.round_trip(GatewayOp::Update, &note.id).await?;
        Ok(note.clone())
    }

    async fn delete_note(&self, id: &NoteId) -> Result<()> {
        self.round_trip(GatewayOp::Delete, id).await
    }

    async fn restore_note(&self, id: &NoteId) -> Result<()> {
        self.round_trip(GatewayOp::Restore, id).await
    }
}
