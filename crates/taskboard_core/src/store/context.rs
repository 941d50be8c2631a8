//! Explicitly-initialized holder for the task store.
//!
//! # Responsibility
//! - Replace implicit module-level store wiring with explicit init and
//!   teardown owned by the embedding application.
//!
//! # Invariants
//! - Accessor use before `init` is a wiring bug and fails loudly.

use crate::storage::state_store::StateStore;
use crate::store::task_store::TaskStore;

/// Owner of the single task store instance handed to consumers.
///
/// Runtime conditions are recovered elsewhere in the crate; every panic in
/// this type marks a programming contract violation.
pub struct TaskContext<S: StateStore> {
    store: Option<TaskStore<S>>,
}

impl<S: StateStore> Default for TaskContext<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateStore> TaskContext<S> {
    /// Creates an empty context; call [`TaskContext::init`] before use.
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Installs the store.
    ///
    /// # Panics
    /// When the context is already initialized.
    pub fn init(&mut self, store: TaskStore<S>) {
        if self.store.is_some() {
            panic!("TaskContext::init called twice");
        }
        self.store = Some(store);
    }

    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    /// Read access to the task collection owner.
    ///
    /// # Panics
    /// When the context has not been initialized.
    pub fn store(&self) -> &TaskStore<S> {
        self.store
            .as_ref()
            .expect("task store requested before TaskContext::init")
    }

    /// Dispatch-capable access to the store.
    ///
    /// # Panics
    /// When the context has not been initialized.
    pub fn store_mut(&mut self) -> &mut TaskStore<S> {
        self.store
            .as_mut()
            .expect("task store dispatch requested before TaskContext::init")
    }

    /// Removes and returns the store, leaving the context uninitialized.
    ///
    /// # Panics
    /// When the context has not been initialized.
    pub fn teardown(&mut self) -> TaskStore<S> {
        self.store
            .take()
            .expect("TaskContext::teardown called before init")
    }
}
