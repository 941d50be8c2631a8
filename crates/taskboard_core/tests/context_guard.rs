use taskboard_core::{MemoryStateStore, Task, TaskAction, TaskContext, TaskStatus, TaskStore};

fn loaded_store() -> TaskStore<MemoryStateStore> {
    TaskStore::load(MemoryStateStore::new()).unwrap()
}

fn sample_task() -> Task {
    Task {
        id: 1,
        title: "wired".to_string(),
        description: String::new(),
        status: TaskStatus::Pending,
        due_date: "2024-01-01".to_string(),
    }
}

#[test]
fn context_hands_out_store_after_init() {
    let mut context = TaskContext::new();
    context.init(loaded_store());

    assert!(context.is_initialized());
    assert!(context.store().tasks().is_empty());

    context
        .store_mut()
        .dispatch(TaskAction::Add(sample_task()))
        .unwrap();
    assert_eq!(context.store().tasks().len(), 1);
}

#[test]
fn teardown_returns_the_store_and_clears_the_context() {
    let mut context = TaskContext::new();
    context.init(loaded_store());

    let store = context.teardown();

    assert!(store.tasks().is_empty());
    assert!(!context.is_initialized());
}

#[test]
#[should_panic(expected = "before TaskContext::init")]
fn store_access_before_init_panics() {
    let context: TaskContext<MemoryStateStore> = TaskContext::new();
    let _ = context.store();
}

#[test]
#[should_panic(expected = "before TaskContext::init")]
fn dispatch_access_before_init_panics() {
    let mut context: TaskContext<MemoryStateStore> = TaskContext::new();
    let _ = context.store_mut();
}

#[test]
#[should_panic(expected = "TaskContext::init called twice")]
fn double_init_panics() {
    let mut context = TaskContext::new();
    context.init(loaded_store());
    context.init(loaded_store());
}

#[test]
#[should_panic(expected = "teardown called before init")]
fn teardown_before_init_panics() {
    let mut context: TaskContext<MemoryStateStore> = TaskContext::new();
    let _ = context.teardown();
}
