//! TaskService: the request handler's in-memory collection.
//!
//! # Responsibility
//! - Expose list/create/update/remove over a collection scoped to the
//!   owning process lifetime.
//!
//! # Invariants
//! - This collection is fully independent of any `TaskStore`; the two are
//!   never synchronized.
//! - `update` replaces fields wholesale; there is no partial merge.
//! - No text validation happens here; that responsibility sits with the
//!   store-side caller.

use crate::id::TaskIdGen;
use crate::model::task::{Priority, Task, TaskId};
use log::info;

/// Stateless CRUD handler state with an injected lifecycle.
///
/// Constructed at startup and reset explicitly for test isolation, rather
/// than living as a bare process-global. Nothing here survives the process.
#[derive(Debug, Default)]
pub struct TaskService {
    tasks: Vec<Task>,
    ids: TaskIdGen,
}

impl TaskService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full current collection, unfiltered, in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task with a fresh id and `completed = false`.
    ///
    /// Accepts empty text by design: validation is the caller's concern at
    /// this layer.
    pub fn create(
        &mut self,
        text: impl Into<String>,
        due_date: Option<String>,
        priority: Priority,
    ) -> &Task {
        let id = self.ids.next();
        self.tasks.push(Task::new(id, text, due_date, priority));
        info!("event=service_create module=service status=ok id={id}");
        self.tasks.last().expect("collection is non-empty after push")
    }

    /// Replaces the matching task's fields wholesale.
    ///
    /// Every field is overwritten, `completed` and `due_date` included; a
    /// caller updating one field must resupply the rest. Returns `None`
    /// when no task matched.
    pub fn update(
        &mut self,
        id: TaskId,
        text: impl Into<String>,
        completed: bool,
        due_date: Option<String>,
        priority: Priority,
    ) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.text = text.into();
        task.completed = completed;
        task.due_date = due_date;
        task.priority = priority;
        info!("event=service_update module=service status=ok id={id}");
        Some(task)
    }

    /// Removes the matching task. Returns whether anything matched; the
    /// transport layer reports success either way.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() < before;
        info!(
            "event=service_remove module=service status={} id={id}",
            if removed { "ok" } else { "no_match" }
        );
        removed
    }

    /// Clears the collection. Test-isolation seam.
    pub fn reset(&mut self) {
        self.tasks.clear();
    }
}
