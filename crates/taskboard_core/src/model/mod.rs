//! Domain model for the task dashboard.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, view and form layers.
//!
//! # Invariants
//! - Every task is identified by a stable integer `TaskId`.
//! - Collection order is insertion order; ordering for display is a view
//!   concern.

pub mod task;
