//! Process-wide service state.
//!
//! # Invariants
//! - The service collection lives for the process lifetime; there is no
//!   cross-restart persistence on this side of the system.
//! - All request handlers go through the lock; writers are serialized.

use fancytodo_core::TaskService;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared state handed to every request handler.
#[derive(Debug, Default)]
pub struct AppState {
    pub service: RwLock<TaskService>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub type SharedState = Arc<AppState>;
