//! Task draft validation and submit gating.
//!
//! # Responsibility
//! - Validate drafts into a field-to-message error map.
//! - Finalize valid drafts into tasks, assigning ids for new entries.
//!
//! # Invariants
//! - A clean field is absent from the error map; an empty map means the
//!   draft may be submitted.
//! - The full draft is revalidated on every field change.
//! - Submission never constructs a task while the error map is non-empty.

use crate::model::task::{IdSource, Task, TaskId, TaskStatus};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

static TITLE_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 ]*$").expect("title charset pattern is valid"));

/// Form fields addressable by validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Title,
    Description,
    Status,
    DueDate,
}

impl FormField {
    /// Field name as the dashboard keys its error map.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
            Self::DueDate => "dueDate",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Field-to-message mapping; empty means the draft is valid.
pub type ValidationErrors = BTreeMap<FormField, String>;

/// Candidate task being edited in the form. No id is required until an edit
/// draft carries one forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Present when editing an existing task; `None` for new drafts.
    pub id: Option<TaskId>,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Pending,
            due_date: String::new(),
        }
    }
}

impl TaskDraft {
    /// Prefills a draft from an existing task, carrying its id forward.
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            due_date: task.due_date.clone(),
        }
    }
}

/// Runs every validation rule against the full draft.
///
/// - title: required after trimming; `[A-Za-z0-9 ]` only.
/// - due date: required after trimming.
/// - description and status carry no rules.
pub fn validate(draft: &TaskDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.insert(FormField::Title, "Title is required".to_string());
    } else if !TITLE_CHARSET.is_match(title) {
        errors.insert(
            FormField::Title,
            "Title can only contain letters, numbers, and spaces".to_string(),
        );
    }

    if draft.due_date.trim().is_empty() {
        errors.insert(FormField::DueDate, "Due date is required".to_string());
    }

    errors
}

/// Submit-gated form state over a [`TaskDraft`].
///
/// Field setters revalidate the whole draft so the error map always reflects
/// the current values, not only the touched field.
pub struct TaskForm {
    initial: TaskDraft,
    draft: TaskDraft,
    errors: ValidationErrors,
}

impl TaskForm {
    /// Starts a blank creation form.
    pub fn new() -> Self {
        Self::with_draft(TaskDraft::default())
    }

    /// Starts an edit form prefilled from an existing task.
    pub fn for_task(task: &Task) -> Self {
        Self::with_draft(TaskDraft::from_task(task))
    }

    fn with_draft(draft: TaskDraft) -> Self {
        Self {
            initial: draft.clone(),
            draft,
            errors: ValidationErrors::new(),
        }
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Current error map; empty while the draft is valid or untouched.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
        self.revalidate();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
        self.revalidate();
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.draft.status = status;
        self.revalidate();
    }

    pub fn set_due_date(&mut self, value: impl Into<String>) {
        self.draft.due_date = value.into();
        self.revalidate();
    }

    /// Validates and, when clean, finalizes the draft into a task.
    ///
    /// New drafts receive a fresh id from `ids`; edit drafts keep the id
    /// they were opened with. Field values are carried exactly as entered.
    /// The blocking error map is returned otherwise.
    pub fn submit(&mut self, ids: &IdSource) -> Result<Task, ValidationErrors> {
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }

        Ok(Task {
            id: self.draft.id.unwrap_or_else(|| ids.next()),
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            status: self.draft.status,
            due_date: self.draft.due_date.clone(),
        })
    }

    /// Restores the initial draft and clears all errors.
    pub fn reset(&mut self) {
        self.draft = self.initial.clone();
        self.errors.clear();
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.draft);
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}
