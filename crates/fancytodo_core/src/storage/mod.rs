//! Persistence slot contracts and implementations.
//!
//! # Responsibility
//! - Define the storage boundary for the authoritative task collection.
//! - Keep serialization details out of the store layer.
//!
//! # Invariants
//! - A slot holds exactly one value: the full collection serialized as a
//!   JSON array. Writes overwrite it wholesale.
//! - Malformed stored data is surfaced as `SlotError::Parse`, never masked
//!   as an empty collection.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json_slot;

pub use json_slot::JsonFileSlot;

pub type SlotResult<T> = Result<T, SlotError>;

/// Failure modes at the persistence boundary.
#[derive(Debug)]
pub enum SlotError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Serialize(serde_json::Error),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "slot io failure: {err}"),
            Self::Parse(err) => write!(f, "malformed stored collection: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize collection: {err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) | Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SlotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Storage contract for the task collection.
///
/// `read` distinguishes "never written" (`Ok(None)`) from "written empty"
/// (`Ok(Some(vec![]))`); the store treats both as an empty start.
pub trait TaskSlot {
    fn read(&self) -> SlotResult<Option<Vec<Task>>>;
    fn write(&mut self, tasks: &[Task]) -> SlotResult<()>;
}

/// In-memory slot for tests and ephemeral sessions.
///
/// Stores the serialized document, so reads and writes exercise the same
/// wire layout as the file-backed slot.
#[derive(Debug, Default)]
pub struct MemorySlot {
    raw: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with a raw document, bypassing serialization.
    ///
    /// Test hook for malformed-content scenarios.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }
}

impl TaskSlot for MemorySlot {
    fn read(&self) -> SlotResult<Option<Vec<Task>>> {
        match &self.raw {
            Some(raw) => {
                let tasks = serde_json::from_str(raw).map_err(SlotError::Parse)?;
                Ok(Some(tasks))
            }
            None => Ok(None),
        }
    }

    fn write(&mut self, tasks: &[Task]) -> SlotResult<()> {
        self.raw = Some(serde_json::to_string(tasks).map_err(SlotError::Serialize)?);
        Ok(())
    }
}
