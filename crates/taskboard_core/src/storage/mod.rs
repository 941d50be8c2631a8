//! State persistence contracts and backends.
//!
//! # Responsibility
//! - Define the synchronous key-value string-store used for snapshots.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Backends replace, never merge, the value stored under a key.

pub mod state_store;
