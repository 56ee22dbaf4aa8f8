//! HTTP surface for the todo CRUD service.
//!
//! # Responsibility
//! - Bridge the verb+body request protocol to `fancytodo_core::TaskService`.
//! - Own the process-wide service state for the server binary.

pub mod router;
pub mod state;

pub use router::build_router;
pub use state::{AppState, SharedState};
