//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use taskboard_core::{MemoryStateStore, TaskStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::load(MemoryStateStore::new())?;
    println!("taskboard_core version={}", taskboard_core::core_version());
    println!("taskboard_core tasks={}", store.tasks().len());
    Ok(())
}
