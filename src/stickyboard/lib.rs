//! # Stickyboard Architecture
//!
//! Stickyboard is the **core of a sticky-note board**: notes with a color,
//! text and stacking order, placed on a 12-column grid, moved to a trash and
//! back, and confirmed one by one against an asynchronous remote gateway.
//! It is a library that happens to ship a CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - StickyBoard facade: projections + one method per op      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Note lifecycle, gateway ordering, apply policy           │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                               │
//!                 ▼                               ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Store (store/)               │ │  Gateway (gateway/)       │
//! │  - BoardStore snapshot        │ │  - NotesGateway trait     │
//! │  - KeyValueStore backends     │ │  - SimulatedGateway       │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Invariants kept by the core
//!
//! - Every active note has exactly one layout entry and no other entry exists.
//!   [`layout::reconcile`] restores this on open and on every commit.
//! - Ids (`n1`, `n2`, ...) are never reused within a session, even when the
//!   gateway rejects the note that reserved them.
//! - `z_index` of a newly created or restored note is above every note seen
//!   so far, trashed ones included.
//! - `is_deleted` and `deleted_at` always agree.
//!
//! ## Concurrency
//!
//! Everything runs on one thread. Commands are `async` because the gateway
//! is; any number of them may be in flight against the same board. State is
//! only touched inside [`store::board_store::BoardStore::commit`], which never
//! spans an `.await`.
//!
//! ## Module Overview
//!
//! - [`api`]: The [`api::StickyBoard`] facade
//! - [`commands`]: One module per operation
//! - [`layout`]: Grid placement and reconciliation
//! - [`ids`]: Id and z-index allocation
//! - [`palette`]: Random color choice for new notes
//! - [`gateway`]: Remote mutation contract and its simulation
//! - [`store`]: Key-value persistence and the board snapshot
//! - [`model`]: `Note`, `Color`, `LayoutEntry`
//! - [`config`]: `config.json` handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod gateway;
pub mod ids;
pub mod layout;
pub mod model;
pub mod palette;
pub mod store;
