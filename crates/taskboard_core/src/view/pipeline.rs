//! Derived-view pipeline over the task collection.
//!
//! # Responsibility
//! - Compute the ordered, filtered, searched list of tasks to display.
//! - Keep derivation a pure function of the store snapshot and UI inputs.
//!
//! # Invariants
//! - The source collection is never reordered or mutated.
//! - Equal due dates keep their original relative order in both sort
//!   directions.

use crate::model::task::{Task, TaskStatus};

/// Coarse display context mapped from the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The dashboard landing view; respects the user-chosen status filter.
    #[default]
    Default,
    /// Same eligibility as `Default`; the distinction is presentational.
    All,
    /// Forces the effective status filter to `Completed`.
    Completed,
}

impl ViewMode {
    /// Maps a navigable path onto its view mode.
    ///
    /// The routing collaborator only produces the three known paths; anything
    /// else is reported as `None` rather than guessed at.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Default),
            "/all" => Some(Self::All),
            "/completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// User-selected status narrowing, active outside the completed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    /// Parses the filter strings offered by the dashboard dropdown.
    pub fn parse(value: &str) -> Option<Self> {
        if value == "All" {
            return Some(Self::All);
        }
        TaskStatus::parse(value).map(Self::Only)
    }
}

/// Due-date sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Complete set of inputs the derivation depends on.
///
/// Holds no state of its own; recompute whenever any field changes.
#[derive(Debug, Clone, Default)]
pub struct ViewQuery {
    pub view_mode: ViewMode,
    pub status_filter: StatusFilter,
    pub sort_order: SortOrder,
    /// Empty text matches everything. Matching is case-sensitive.
    pub search_text: String,
}

/// Computes the visible task list for the given inputs.
///
/// Selection, ordering and search run in this fixed order:
/// 1. The completed view forces `status == Completed`; otherwise a non-`All`
///    filter narrows by status.
/// 2. Stable sort by due date compared as calendar points in time, not as
///    strings. Dates that fail to parse order before every valid date when
///    ascending.
/// 3. Case-sensitive substring search over title and description.
pub fn derive_view<'a>(tasks: &'a [Task], query: &ViewQuery) -> Vec<&'a Task> {
    let mut selected: Vec<&Task> = match (query.view_mode, query.status_filter) {
        (ViewMode::Completed, _) => tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Completed)
            .collect(),
        (_, StatusFilter::Only(status)) => {
            tasks.iter().filter(|task| task.status == status).collect()
        }
        (_, StatusFilter::All) => tasks.iter().collect(),
    };

    selected.sort_by(|a, b| {
        let ordering = a.due().cmp(&b.due());
        match query.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    selected.retain(|task| matches_search(task, &query.search_text));
    selected
}

/// Tally of tasks per status, as shown in the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Counts tasks per status over the full collection, ignoring any filter.
pub fn status_counts(tasks: &[Task]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for task in tasks {
        match task.status {
            TaskStatus::Pending => counts.pending += 1,
            TaskStatus::InProgress => counts.in_progress += 1,
            TaskStatus::Completed => counts.completed += 1,
        }
    }
    counts
}

fn matches_search(task: &Task, search_text: &str) -> bool {
    search_text.is_empty()
        || task.title.contains(search_text)
        || task.description.contains(search_text)
}
