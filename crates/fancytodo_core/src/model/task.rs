//! Task domain model.
//!
//! # Responsibility
//! - Define the single persisted entity and its creation defaults.
//! - Keep the serialized shape aligned with the external wire naming
//!   (`dueDate`, lowercase priority levels).
//!
//! # Invariants
//! - `id` is assigned once at creation and never reassigned.
//! - `is_editing` is transient view state and never serialized.
//! - A task starts with `completed = false`.

use serde::{Deserialize, Serialize};

/// Stable integer identifier for a task.
///
/// Timestamp-derived at creation time (millisecond epoch scale), so ids sort
/// by creation order under normal clock behavior.
pub type TaskId = i64;

/// Urgency level attached to every task.
///
/// Serialized as `low|medium|high`; unknown wire values are rejected at
/// deserialization instead of being coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Stable lowercase label, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// The single persisted entity: one todo item.
///
/// The serialized layout is `{id, text, completed, dueDate?, priority}` with
/// `dueDate` omitted when absent. There is no versioning and no migration
/// path for stored collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// Optional due date in ISO `YYYY-MM-DD` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub priority: Priority,
    /// Marks the task as currently in inline-edit mode. View-only state,
    /// never part of the persisted or service-side collection.
    #[serde(skip)]
    pub is_editing: bool,
}

impl Task {
    /// Creates a task with creation defaults applied.
    ///
    /// # Invariants
    /// - `completed` starts `false`.
    /// - `is_editing` starts `false`.
    pub fn new(
        id: TaskId,
        text: impl Into<String>,
        due_date: Option<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            due_date,
            priority,
            is_editing: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Priority, Task};

    #[test]
    fn new_task_applies_creation_defaults() {
        let task = Task::new(1, "write report", None, Priority::Medium);
        assert!(!task.completed);
        assert!(!task.is_editing);
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn serialized_layout_uses_wire_names_and_omits_absent_due_date() {
        let task = Task::new(42, "ship it", None, Priority::Low);
        let json = serde_json::to_value(&task).expect("task should serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 42,
                "text": "ship it",
                "completed": false,
                "priority": "low",
            })
        );
    }

    #[test]
    fn serialized_layout_never_contains_edit_state() {
        let mut task = Task::new(7, "draft", Some("2025-01-01".to_string()), Priority::High);
        task.is_editing = true;
        let json = serde_json::to_value(&task).expect("task should serialize");
        assert_eq!(json.get("dueDate"), Some(&serde_json::json!("2025-01-01")));
        assert!(json.get("isEditing").is_none());
        assert!(json.get("is_editing").is_none());
    }

    #[test]
    fn unknown_priority_value_is_rejected() {
        let raw = r#"{"id": 1, "text": "x", "completed": false, "priority": "urgent"}"#;
        assert!(serde_json::from_str::<Task>(raw).is_err());
    }
}
