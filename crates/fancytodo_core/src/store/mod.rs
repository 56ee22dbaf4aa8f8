//! Client-side task collection orchestration.
//!
//! # Responsibility
//! - Hold the authoritative in-memory collection and its edit state.
//! - Synchronize the collection to a persistence slot on every mutation.
//!
//! # Invariants
//! - The in-memory collection is authoritative; the slot copy is
//!   best-effort and may lag.
//! - Collection order is insertion order; no operation re-sorts.

pub mod task_store;
