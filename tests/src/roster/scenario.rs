#![cfg(test)]
use roster_common::student::RecordUpdate;
use roster_core::{FileRepository, Session, SessionError, StoreError};
use tempfile::TempDir;

use crate::fixtures::{record, sample_roster};

/// Add, update and delete one student, restarting between each step so every
/// change has to survive a reload from disk.
#[test]
fn add_update_delete_across_restarts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.txt");
    let alice = record("S1A", "Alice", 20, "CS", 8.5).unwrap();

    {
        let (mut session, report) = Session::open(FileRepository::new(&path)).unwrap();
        assert_eq!(report.loaded, 0);

        session.add(alice.clone()).unwrap();
        assert_eq!(session.store().list(), [alice.clone()]);
    }

    {
        let (mut session, report) = Session::open(FileRepository::new(&path)).unwrap();
        assert_eq!(report.loaded, 1);

        let updated = session
            .update("S1A", &RecordUpdate::default().with_age(21))
            .unwrap();
        assert_eq!(updated, record("S1A", "Alice", 21, "CS", 8.5).unwrap());
    }

    {
        let (mut session, _) = Session::open(FileRepository::new(&path)).unwrap();
        assert_eq!(
            session.store().find("S1A"),
            Some(&record("S1A", "Alice", 21, "CS", 8.5).unwrap())
        );

        session.delete("S1A").unwrap();
        assert!(session.store().list().is_empty());
        session.close().unwrap();
    }

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1001\n");
}

#[test]
fn duplicate_and_missing_ids_leave_the_file_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.txt");
    let (mut session, _) = Session::open(FileRepository::new(&path)).unwrap();
    for r in sample_roster().unwrap() {
        session.add(r).unwrap();
    }
    let before = std::fs::read_to_string(&path).unwrap();

    let err = session
        .add(record("B2", "Someone Else", 40, "Art", 3.0).unwrap())
        .unwrap_err();
    assert!(matches!(err, SessionError::Store(StoreError::Duplicate(_))));

    let err = session.delete("Z9").unwrap_err();
    assert!(matches!(err, SessionError::Store(StoreError::NotFound(_))));
    assert_eq!(session.store().len(), 3);

    let err = session
        .update("S1A", &RecordUpdate::default().with_gpa(10.0))
        .unwrap_err();
    assert!(matches!(err, SessionError::Store(StoreError::Invalid(_))));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn unwritable_file_keeps_changes_in_memory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gone").join("students.txt");
    let (mut session, _) = Session::open(FileRepository::new(&path)).unwrap();

    let err = session
        .add(record("S1A", "Alice", 20, "CS", 8.5).unwrap())
        .unwrap_err();

    assert!(matches!(err, SessionError::Unsaved(_)));
    assert!(session.store().contains("S1A"));
    assert!(session.close().is_err());
    assert!(!path.exists());
}
