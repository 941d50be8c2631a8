//! Core state management and derived-view logic for the Taskboard dashboard.
//! This crate is the single source of truth for task-tracking invariants.

pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use form::task_form::{validate, FormField, TaskDraft, TaskForm, ValidationErrors};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{IdSource, Task, TaskId, TaskStatus};
pub use storage::state_store::{
    MemoryStateStore, SqliteStateStore, StateStore, StorageError, StorageResult,
};
pub use store::context::TaskContext;
pub use store::task_store::{reduce, StoreError, StoreResult, TaskAction, TaskStore, TASKS_KEY};
pub use view::pipeline::{
    derive_view, status_counts, SortOrder, StatusCounts, StatusFilter, ViewMode, ViewQuery,
};
pub use view::refresh::{RefreshQueue, RefreshTicket};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
