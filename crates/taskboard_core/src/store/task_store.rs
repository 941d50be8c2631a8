//! Task store: reducer plus persistence bridge.
//!
//! # Responsibility
//! - Apply add/edit/delete actions to the authoritative collection.
//! - Write the serialized collection through storage after every mutation.
//!
//! # Invariants
//! - Each action yields a new collection value; task records are replaced,
//!   never mutated in place.
//! - When `dispatch` returns `Ok`, the new state is both the next read value
//!   and the durably written one; on a write failure the previous state
//!   stays current.
//! - Edits and deletes against an unknown id are silent no-ops.

use crate::model::task::{Task, TaskId};
use crate::storage::state_store::{StateStore, StorageError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized task collection.
pub const TASKS_KEY: &str = "tasks";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for loading and persisting the collection.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Mutation accepted by [`TaskStore::dispatch`].
///
/// `Add` expects a validated task carrying a fresh id; the store performs no
/// validation of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    Add(Task),
    Edit(Task),
    Delete(TaskId),
}

/// Pure reducer: the collection that results from applying one action.
///
/// `Edit` replaces the element whose id matches, preserving its position;
/// `Delete` removes the matching element. Neither reports a missing id.
pub fn reduce(tasks: &[Task], action: &TaskAction) -> Vec<Task> {
    match action {
        TaskAction::Add(task) => {
            let mut next = tasks.to_vec();
            next.push(task.clone());
            next
        }
        TaskAction::Edit(task) => tasks
            .iter()
            .map(|existing| {
                if existing.id == task.id {
                    task.clone()
                } else {
                    existing.clone()
                }
            })
            .collect(),
        TaskAction::Delete(id) => tasks
            .iter()
            .filter(|task| task.id != *id)
            .cloned()
            .collect(),
    }
}

/// Reducer plus write-through persistence over a [`StateStore`].
pub struct TaskStore<S: StateStore> {
    tasks: Vec<Task>,
    storage: S,
}

impl<S: StateStore> TaskStore<S> {
    /// Loads the persisted collection from `storage`.
    ///
    /// An absent or unparsable stored value seeds an empty collection; only
    /// storage transport failures are reported as errors.
    pub fn load(storage: S) -> StoreResult<Self> {
        let tasks = match storage.read(TASKS_KEY)? {
            Some(raw) => decode_tasks(&raw),
            None => Vec::new(),
        };
        info!(
            "event=store_load module=store status=ok count={}",
            tasks.len()
        );
        Ok(Self { tasks, storage })
    }

    /// Current collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Applies one action and persists the resulting snapshot.
    ///
    /// The write happens before the in-memory state is replaced, so a caller
    /// observing `Ok` may rely on the returned state being durable.
    pub fn dispatch(&mut self, action: TaskAction) -> StoreResult<()> {
        let next = reduce(&self.tasks, &action);
        let encoded = serde_json::to_string(&next)?;
        self.storage.write(TASKS_KEY, &encoded)?;
        self.tasks = next;
        Ok(())
    }
}

fn decode_tasks(raw: &str) -> Vec<Task> {
    match serde_json::from_str(raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(
                "event=store_load module=store status=recovered error_code=corrupt_state error={err}"
            );
            Vec::new()
        }
    }
}
