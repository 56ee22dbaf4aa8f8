//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `fancytodo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use fancytodo_core::{CreateOutcome, MemorySlot, Priority, TaskFilter, TaskStore};

fn main() {
    println!("fancytodo_core version={}", fancytodo_core::core_version());

    // Exercise the store end to end against an in-memory slot so a broken
    // core build is visible without a server or UI attached.
    let mut store = TaskStore::new(MemorySlot::new());
    let outcome = store.create("smoke check", None, Priority::Low);
    let created = matches!(outcome, CreateOutcome::Created(_));
    println!(
        "store_smoke created={created} visible={}",
        store.filter(TaskFilter::All).len()
    );
}
