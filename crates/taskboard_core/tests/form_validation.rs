use taskboard_core::{validate, FormField, IdSource, Task, TaskDraft, TaskForm, TaskStatus};

fn draft(title: &str, due_date: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        due_date: due_date.to_string(),
        ..TaskDraft::default()
    }
}

#[test]
fn whitespace_title_is_required() {
    let errors = validate(&draft("  ", "2024-01-01"));

    assert_eq!(
        errors.get(&FormField::Title).map(String::as_str),
        Some("Title is required")
    );
    assert!(!errors.contains_key(&FormField::DueDate));
    assert_eq!(errors.len(), 1);
}

#[test]
fn illegal_character_and_missing_due_date_are_both_reported() {
    let errors = validate(&draft("Task #1", ""));

    assert_eq!(
        errors.get(&FormField::Title).map(String::as_str),
        Some("Title can only contain letters, numbers, and spaces")
    );
    assert_eq!(
        errors.get(&FormField::DueDate).map(String::as_str),
        Some("Due date is required")
    );
    assert_eq!(errors.len(), 2);
}

#[test]
fn clean_draft_produces_an_empty_error_map() {
    assert!(validate(&draft("Water plants 2", "2024-01-01")).is_empty());
}

#[test]
fn description_and_status_carry_no_rules() {
    let mut candidate = draft("Valid title", "2024-01-01");
    candidate.description = "anything: #!@ goes &here".to_string();
    candidate.status = TaskStatus::Completed;

    assert!(validate(&candidate).is_empty());
}

#[test]
fn setters_revalidate_the_whole_draft() {
    let mut form = TaskForm::new();

    form.set_title("Valid title");
    assert!(form.errors().contains_key(&FormField::DueDate));
    assert!(!form.errors().contains_key(&FormField::Title));

    form.set_due_date("2024-06-01");
    assert!(form.is_valid());
}

#[test]
fn submit_is_blocked_while_errors_remain() {
    let mut form = TaskForm::new();
    let ids = IdSource::new();

    let errors = form.submit(&ids).unwrap_err();

    assert!(errors.contains_key(&FormField::Title));
    assert!(errors.contains_key(&FormField::DueDate));
    assert!(!form.is_valid());
}

#[test]
fn submit_assigns_a_fresh_id_to_new_drafts() {
    let ids = IdSource::new();

    let mut first_form = TaskForm::new();
    first_form.set_title("Buy milk");
    first_form.set_due_date("2024-01-05");
    let first = first_form.submit(&ids).unwrap();

    let mut second_form = TaskForm::new();
    second_form.set_title("Pay rent");
    second_form.set_due_date("2024-01-01");
    let second = second_form.submit(&ids).unwrap();

    assert!(second.id > first.id);
}

#[test]
fn submit_keeps_the_id_of_the_task_being_edited() {
    let existing = Task {
        id: 7,
        title: "Buy milk".to_string(),
        description: String::new(),
        status: TaskStatus::Pending,
        due_date: "2024-01-05".to_string(),
    };
    let ids = IdSource::new();

    let mut form = TaskForm::for_task(&existing);
    form.set_status(TaskStatus::Completed);
    let updated = form.submit(&ids).unwrap();

    assert_eq!(updated.id, 7);
    assert_eq!(updated.status, TaskStatus::Completed);
    assert_eq!(updated.title, "Buy milk");
}

#[test]
fn field_values_are_carried_exactly_as_entered() {
    let ids = IdSource::new();
    let mut form = TaskForm::new();
    form.set_title(" Buy milk ");
    form.set_due_date("2024-01-05");

    let submitted = form.submit(&ids).unwrap();
    assert_eq!(submitted.title, " Buy milk ");
}

#[test]
fn reset_restores_the_initial_draft() {
    let mut form = TaskForm::new();
    form.set_title("Part one");
    form.set_due_date("2024-03-01");

    form.reset();

    assert_eq!(form.draft(), &TaskDraft::default());
    assert!(form.errors().is_empty());
}

#[test]
fn error_map_keys_match_the_dashboard_field_names() {
    assert_eq!(FormField::Title.name(), "title");
    assert_eq!(FormField::Description.name(), "description");
    assert_eq!(FormField::Status.name(), "status");
    assert_eq!(FormField::DueDate.name(), "dueDate");
}
