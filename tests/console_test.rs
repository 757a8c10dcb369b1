//! End-to-end scenarios through the console orchestrator.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use dbctl::{Console, DbctlError};

#[ctor::ctor]
fn init() {
    dbctl::util::testing::init_test_setup();
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("rhn.conf");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn given_postgresql_backend_when_clear_db_then_operation_runs() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "db_backend = postgresql\ndb_name = susemanager\n");

    let console = Console::new(Some(path)).expect("construct console");

    assert_eq!(console.gate().name(), "postgresql");
    assert_eq!(
        console.gate().commands().get("do_clear_db"),
        Some(&"Clear the database")
    );
    console.execute("clear-db").expect("clear-db must dispatch");
}

#[test]
fn given_undeclared_command_when_execute_then_unknown_command_names_it() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "db_backend = postgresql\ndb_name = susemanager\n");

    let console = Console::new(Some(path)).unwrap();
    let err = console.execute("usage").unwrap_err();

    assert!(matches!(
        err,
        DbctlError::UnknownCommand { ref command } if command == "usage"
    ));
}

#[test]
fn given_missing_config_file_when_construct_then_error_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nowhere.conf");

    let err = Console::new(Some(path.clone())).unwrap_err();

    assert!(matches!(err, DbctlError::ConfigNotFound { .. }));
    assert!(err.to_string().contains(path.to_str().unwrap()));
}

#[test]
fn given_no_backend_key_when_construct_then_resolution_fails_for_unknown() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "db_name = susemanager\n");

    let err = Console::new(Some(path.clone())).unwrap_err();

    assert!(matches!(
        err,
        DbctlError::BackendResolution { ref identifier, .. } if identifier == "unknown"
    ));
    assert!(err.to_string().contains(path.to_str().unwrap()));
}

#[test]
fn given_backend_form_command_when_execute_then_accepted_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "db_backend = oracle\ndb_name = susemanager\n");

    let console = Console::new(Some(path)).unwrap();

    console.execute("do_db_status").expect("backend form dispatches too");
}

#[test]
fn given_gate_operation_failure_when_execute_then_error_propagates() {
    // clear-db requires db_name, which this config omits
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "db_backend = postgresql\n");

    let console = Console::new(Some(path)).unwrap();
    let err = console.execute("clear-db").unwrap_err();

    assert!(matches!(err, DbctlError::Gate(_)));
    assert!(err.to_string().contains("db_name"));
}
