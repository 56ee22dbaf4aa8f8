use fancytodo_core::{
    ApplyOutcome, CreateOutcome, JsonFileSlot, MemorySlot, Priority, SlotError, TaskSlot,
    TaskStore,
};
use std::fs;

#[test]
fn mutations_are_mirrored_to_the_slot() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("todos.json");

    let mut store = TaskStore::new(JsonFileSlot::new(&path));
    let id = match store.create("persisted", Some("2025-04-04".to_string()), Priority::High) {
        CreateOutcome::Created(id) => id,
        CreateOutcome::Rejected => panic!("create was rejected"),
    };
    store.toggle(id);

    let raw = fs::read_to_string(&path).expect("slot file should exist after mutation");
    let stored: serde_json::Value = serde_json::from_str(&raw).expect("slot holds valid JSON");
    assert_eq!(
        stored,
        serde_json::json!([{
            "id": id,
            "text": "persisted",
            "completed": true,
            "dueDate": "2025-04-04",
            "priority": "high",
        }])
    );
}

#[test]
fn load_rehydrates_a_previously_persisted_collection() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("todos.json");

    {
        let mut store = TaskStore::new(JsonFileSlot::new(&path));
        store.create("survives restart", None, Priority::Low);
    }

    let mut reopened = TaskStore::new(JsonFileSlot::new(&path));
    reopened.load().expect("load should succeed");
    assert_eq!(reopened.tasks().len(), 1);
    assert_eq!(reopened.tasks()[0].text, "survives restart");
    assert!(!reopened.tasks()[0].is_editing, "edit state is not persisted");
}

#[test]
fn load_with_no_stored_value_starts_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut store = TaskStore::new(JsonFileSlot::new(dir.path().join("missing.json")));
    store.load().expect("missing file is an empty slot, not an error");
    assert!(store.tasks().is_empty());
}

#[test]
fn load_with_stored_empty_collection_starts_empty() {
    let mut store = TaskStore::new(MemorySlot::with_raw("[]"));
    store.load().expect("empty collection should load");
    assert!(store.tasks().is_empty());
}

#[test]
fn malformed_stored_data_propagates_as_parse_error() {
    let mut store = TaskStore::new(MemorySlot::with_raw("{not json"));
    let err = store.load().expect_err("malformed data must not be masked");
    assert!(matches!(err, SlotError::Parse(_)));
}

#[test]
fn malformed_file_content_propagates_as_parse_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("todos.json");
    fs::write(&path, "[{\"id\": \"not a number\"}]").expect("seed file");

    let slot = JsonFileSlot::new(&path);
    assert!(matches!(slot.read(), Err(SlotError::Parse(_))));
}

#[test]
fn persist_runs_even_for_rejected_transitions() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("todos.json");

    let mut store = TaskStore::new(JsonFileSlot::new(&path));
    assert_eq!(store.create("   ", None, Priority::Low), CreateOutcome::Rejected);

    // The write is idempotent but not differential: the no-op transition
    // still overwrote the slot with the (empty) collection.
    let raw = fs::read_to_string(&path).expect("slot file should exist");
    assert_eq!(raw, "[]");
}

#[test]
fn not_found_mutations_still_persist_the_collection() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("todos.json");

    let mut store = TaskStore::new(JsonFileSlot::new(&path));
    assert_eq!(store.delete(12345), ApplyOutcome::NotFound);
    assert!(path.exists());
}

#[test]
fn explicit_persist_reports_the_write_result() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut store = TaskStore::new(JsonFileSlot::new(dir.path().join("todos.json")));
    store.create("checked write", None, Priority::Low);
    store.persist().expect("persist into a writable directory succeeds");
}
