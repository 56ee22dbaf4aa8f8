//! TaskStore: single source of truth for the visible task collection.
//!
//! # Responsibility
//! - Provide create/toggle/delete/edit/filter operations over the
//!   collection.
//! - Write the full collection to the slot after every mutating operation,
//!   including rejected and not-found transitions.
//!
//! # Invariants
//! - Every mutating operation reports an explicit outcome; "no match" is
//!   distinguishable from "applied".
//! - Edit drafts are keyed by task id; at most one draft per task, and a
//!   draft only exists for a task present in the collection.
//! - Slot failures during mutation are logged, never rolled back: the
//!   in-memory state stays authoritative.

use crate::id::TaskIdGen;
use crate::model::task::{Priority, Task, TaskId};
use crate::storage::{SlotResult, TaskSlot};
use log::{info, warn};
use std::collections::HashMap;

/// Outcome of a mutating operation addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The operation changed the collection (or edit state).
    Applied,
    /// No task (or active edit) matched the id; nothing changed.
    NotFound,
}

impl ApplyOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Outcome of a create attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(TaskId),
    /// Trimmed text was empty; the collection is unchanged.
    Rejected,
}

/// Read-only filter over the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Completed,
    Incomplete,
}

/// Staged field values for one task being edited.
///
/// Distinct from the task's committed fields until `commit_edit` applies
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub text: String,
    pub due_date: Option<String>,
    pub priority: Priority,
}

/// Authoritative client-side collection with slot synchronization.
pub struct TaskStore<S: TaskSlot> {
    slot: S,
    tasks: Vec<Task>,
    drafts: HashMap<TaskId, EditDraft>,
    ids: TaskIdGen,
}

impl<S: TaskSlot> TaskStore<S> {
    /// Creates an empty store over the given slot. Call [`load`] to
    /// rehydrate a previously persisted collection.
    ///
    /// [`load`]: TaskStore::load
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            tasks: Vec::new(),
            drafts: HashMap::new(),
            ids: TaskIdGen::new(),
        }
    }

    /// Rehydrates the collection from the slot.
    ///
    /// A stored non-empty collection replaces the in-memory one; an absent
    /// or empty slot leaves the store empty. Malformed stored data
    /// propagates as a `SlotError` instead of silently starting empty.
    pub fn load(&mut self) -> SlotResult<()> {
        match self.slot.read()? {
            Some(stored) if !stored.is_empty() => {
                info!(
                    "event=store_load module=store status=ok count={}",
                    stored.len()
                );
                self.tasks = stored;
            }
            _ => {
                info!("event=store_load module=store status=empty");
            }
        }
        Ok(())
    }

    /// Serializes the full collection and overwrites the slot.
    ///
    /// Idempotent but not differential; mutation paths call this after
    /// every state transition. Exposed for callers that need the write
    /// result (mutation paths treat failures as fire-and-forget).
    pub fn persist(&mut self) -> SlotResult<()> {
        self.slot.write(&self.tasks)
    }

    /// Appends a new task unless the trimmed text is empty.
    pub fn create(
        &mut self,
        text: &str,
        due_date: Option<String>,
        priority: Priority,
    ) -> CreateOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.sync_slot("create");
            return CreateOutcome::Rejected;
        }

        let id = self.ids.next();
        self.tasks
            .push(Task::new(id, trimmed, normalize_due_date(due_date), priority));
        info!("event=store_create module=store status=ok id={id}");
        self.sync_slot("create");
        CreateOutcome::Created(id)
    }

    /// Flips `completed` for the matching task.
    pub fn toggle(&mut self, id: TaskId) -> ApplyOutcome {
        let outcome = match self.task_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                ApplyOutcome::Applied
            }
            None => ApplyOutcome::NotFound,
        };
        self.sync_slot("toggle");
        outcome
    }

    /// Removes the matching task and any draft staged for it.
    pub fn delete(&mut self, id: TaskId) -> ApplyOutcome {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let outcome = if self.tasks.len() < before {
            self.drafts.remove(&id);
            ApplyOutcome::Applied
        } else {
            ApplyOutcome::NotFound
        };
        self.sync_slot("delete");
        outcome
    }

    /// Marks the matching task as editing and seeds its draft from the
    /// task's current field values.
    ///
    /// Re-entering an edit re-seeds the draft, discarding staged values.
    pub fn begin_edit(&mut self, id: TaskId) -> ApplyOutcome {
        let draft = match self.task_mut(id) {
            Some(task) => {
                task.is_editing = true;
                EditDraft {
                    text: task.text.clone(),
                    due_date: task.due_date.clone(),
                    priority: task.priority,
                }
            }
            None => {
                self.sync_slot("begin_edit");
                return ApplyOutcome::NotFound;
            }
        };
        self.drafts.insert(id, draft);
        self.sync_slot("begin_edit");
        ApplyOutcome::Applied
    }

    /// Replaces the staged values for an active edit.
    ///
    /// `NotFound` when no edit is active for `id`.
    pub fn stage_edit(
        &mut self,
        id: TaskId,
        text: impl Into<String>,
        due_date: Option<String>,
        priority: Priority,
    ) -> ApplyOutcome {
        match self.drafts.get_mut(&id) {
            Some(draft) => {
                draft.text = text.into();
                draft.due_date = normalize_due_date(due_date);
                draft.priority = priority;
                ApplyOutcome::Applied
            }
            None => ApplyOutcome::NotFound,
        }
    }

    /// Overwrites the task's editable fields from its draft and clears the
    /// editing flag.
    ///
    /// `NotFound` when either the task or its draft is missing.
    pub fn commit_edit(&mut self, id: TaskId) -> ApplyOutcome {
        let outcome = match (self.tasks.iter_mut().find(|task| task.id == id), self.drafts.remove(&id)) {
            (Some(task), Some(draft)) => {
                task.text = draft.text;
                task.due_date = draft.due_date;
                task.priority = draft.priority;
                task.is_editing = false;
                ApplyOutcome::Applied
            }
            _ => ApplyOutcome::NotFound,
        };
        self.sync_slot("commit_edit");
        outcome
    }

    /// Drops the staged draft and clears the editing flag without applying.
    pub fn cancel_edit(&mut self, id: TaskId) -> ApplyOutcome {
        let had_draft = self.drafts.remove(&id).is_some();
        if let Some(task) = self.task_mut(id) {
            task.is_editing = false;
        }
        self.sync_slot("cancel_edit");
        if had_draft {
            ApplyOutcome::Applied
        } else {
            ApplyOutcome::NotFound
        }
    }

    /// Derived read-only view; insertion order preserved.
    pub fn filter(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| match filter {
                TaskFilter::All => true,
                TaskFilter::Completed => task.completed,
                TaskFilter::Incomplete => !task.completed,
            })
            .collect()
    }

    /// The full collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Staged draft for a task, when an edit is active.
    pub fn draft(&self, id: TaskId) -> Option<&EditDraft> {
        self.drafts.get(&id)
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    // Fire-and-forget slot write after a state transition. The in-memory
    // collection stays authoritative when the write fails.
    fn sync_slot(&mut self, op: &'static str) {
        if let Err(err) = self.slot.write(&self.tasks) {
            warn!("event=store_persist module=store status=error op={op} error={err}");
        }
    }
}

// The original form control submits an empty string when no date was
// picked; treat it as absent so the persisted layout stays `dueDate?`.
fn normalize_due_date(due_date: Option<String>) -> Option<String> {
    due_date.filter(|value| !value.trim().is_empty())
}
