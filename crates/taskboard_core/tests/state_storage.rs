use rusqlite::Connection;
use taskboard_core::db::migrations::{apply_migrations, latest_version};
use taskboard_core::db::{open_db, open_db_in_memory, DbError};
use taskboard_core::{
    MemoryStateStore, SqliteStateStore, StateStore, StorageError, Task, TaskAction, TaskStatus,
    TaskStore, TASKS_KEY,
};

fn task(id: i64, title: &str, due_date: &str, status: TaskStatus) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: String::new(),
        status,
        due_date: due_date.to_string(),
    }
}

#[test]
fn sqlite_store_round_trips_values() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteStateStore::try_new(&conn).unwrap();

    assert_eq!(store.read("tasks").unwrap(), None);

    store.write("tasks", "[]").unwrap();
    assert_eq!(store.read("tasks").unwrap().as_deref(), Some("[]"));

    store.write("tasks", r#"[{"id":1}]"#).unwrap();
    assert_eq!(
        store.read("tasks").unwrap().as_deref(),
        Some(r#"[{"id":1}]"#)
    );
}

#[test]
fn sqlite_store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteStateStore::try_new(&conn) {
        Err(StorageError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn sqlite_store_rejects_connection_without_state_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteStateStore::try_new(&conn),
        Err(StorageError::MissingStateTable)
    ));
}

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStateStore::new();

    assert_eq!(store.read("tasks").unwrap(), None);
    store.write("tasks", "[]").unwrap();
    store.write("tasks", "[1]").unwrap();
    assert_eq!(store.read("tasks").unwrap().as_deref(), Some("[1]"));
}

#[test]
fn task_store_writes_through_to_sqlite() {
    let conn = open_db_in_memory().unwrap();
    {
        let storage = SqliteStateStore::try_new(&conn).unwrap();
        let mut store = TaskStore::load(storage).unwrap();
        store
            .dispatch(TaskAction::Add(task(
                5,
                "durable",
                "2024-05-01",
                TaskStatus::Pending,
            )))
            .unwrap();
    }

    let raw = SqliteStateStore::try_new(&conn)
        .unwrap()
        .read(TASKS_KEY)
        .unwrap()
        .unwrap();
    assert!(raw.contains(r#""id":5"#));

    let reloaded = TaskStore::load(SqliteStateStore::try_new(&conn).unwrap()).unwrap();
    assert_eq!(reloaded.tasks().len(), 1);
    assert_eq!(reloaded.tasks()[0].title, "durable");
}

#[test]
fn file_backed_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("taskboard.db");

    {
        let conn = open_db(&db_path).unwrap();
        let storage = SqliteStateStore::try_new(&conn).unwrap();
        let mut store = TaskStore::load(storage).unwrap();
        store
            .dispatch(TaskAction::Add(task(
                1,
                "persisted",
                "2024-05-01",
                TaskStatus::Pending,
            )))
            .unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let store = TaskStore::load(SqliteStateStore::try_new(&conn).unwrap()).unwrap();
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].title, "persisted");
}

#[test]
fn migrations_are_idempotent_and_versioned() {
    let mut conn = Connection::open_in_memory().unwrap();

    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    let version = conn
        .query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))
        .unwrap();
    assert!(latest_version() > 0);
    assert_eq!(version, latest_version());
}

#[test]
fn newer_schema_versions_are_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
        .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(err, DbError::UnsupportedSchemaVersion { .. }));
}
