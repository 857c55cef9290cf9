//! # Command Layer
//!
//! One module per board operation. Each `run` takes the board store and the
//! gateway explicitly and returns plain Rust values; nothing here prints.
//!
//! ## Apply policy
//!
//! Each command states when it touches local state relative to the gateway:
//!
//! | Command        | Policy              | On gateway failure                 |
//! |----------------|---------------------|------------------------------------|
//! | `create`       | confirm, then apply | nothing applied, error returned    |
//! | `update`       | confirm, then apply | nothing applied, error returned    |
//! | `edit::*`      | confirm, then apply | nothing applied, error returned    |
//! | `delete`       | confirm, then apply | nothing applied, error returned    |
//! | `restore`      | confirm, then apply | nothing applied, error returned    |
//! | `purge`        | confirm, then apply | nothing applied, error returned    |
//! | `clear::all`   | apply, then confirm | local change kept, error returned  |
//! | `clear::trash` | apply, then confirm | local change kept, error returned  |
//! | `arrange`      | local only          | n/a                                |
//!
//! "Apply" always goes through [`BoardStore::commit`](crate::store::board_store::BoardStore::commit),
//! which reads the state current at that moment. Two commands racing on the
//! same note are not ordered: whichever commits last wins.
//!
//! `create` and `restore` reserve their z-index when issued, before the
//! gateway call. Notes stack in the order those commands were issued, even
//! when the gateway answers out of order.
//!
//! Single-note commands that find nothing to do return `Ok(None)` without
//! calling the gateway.

pub mod arrange;
pub mod clear;
pub mod create;
pub mod delete;
pub mod edit;
pub mod purge;
pub mod restore;
pub mod update;

#[cfg(test)]
pub(crate) mod testing {
    use crate::gateway::SimulatedGateway;
    use crate::store::board_store::BoardStore;
    use crate::store::memory::InMemoryStore;

    pub fn empty_board() -> (BoardStore<InMemoryStore>, SimulatedGateway) {
        board_from(InMemoryStore::new())
    }

    pub fn board_from(backend: InMemoryStore) -> (BoardStore<InMemoryStore>, SimulatedGateway) {
        let store = BoardStore::open(backend, "n").unwrap();
        (store, SimulatedGateway::instant())
    }
}
