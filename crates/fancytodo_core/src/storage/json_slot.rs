//! File-backed persistence slot.
//!
//! # Responsibility
//! - Persist the task collection as one JSON document on disk.
//! - Report missing files as an empty slot, not an error.
//!
//! # Invariants
//! - Every write replaces the whole document.
//! - Parent directories are created on demand before the first write.

use super::{SlotError, SlotResult, TaskSlot};
use crate::model::task::Task;
use log::{debug, error};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Slot persisting the collection to a single JSON file.
#[derive(Debug)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TaskSlot for JsonFileSlot {
    fn read(&self) -> SlotResult<Option<Vec<Task>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=slot_read module=storage status=empty path={}",
                    self.path.display()
                );
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=slot_read module=storage status=error path={} error={}",
                    self.path.display(),
                    err
                );
                return Err(err.into());
            }
        };

        let tasks: Vec<Task> = serde_json::from_str(&raw).map_err(|err| {
            error!(
                "event=slot_read module=storage status=error path={} error_code=parse_failed error={}",
                self.path.display(),
                err
            );
            SlotError::Parse(err)
        })?;

        debug!(
            "event=slot_read module=storage status=ok path={} count={}",
            self.path.display(),
            tasks.len()
        );
        Ok(Some(tasks))
    }

    fn write(&mut self, tasks: &[Task]) -> SlotResult<()> {
        let raw = serde_json::to_string(tasks).map_err(SlotError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, raw)?;

        debug!(
            "event=slot_write module=storage status=ok path={} count={}",
            self.path.display(),
            tasks.len()
        );
        Ok(())
    }
}
