//! Domain model for the todo collection.
//!
//! # Responsibility
//! - Define the canonical task record shared by store and service layers.
//! - Pin the serialized wire layout used by the persistence slot and HTTP
//!   payloads.
//!
//! # Invariants
//! - `id` is stable and never reused within a collection.
//! - `priority` can only hold one of the three enumerated levels.

pub mod task;
