#![cfg(test)]
use std::fs;

use proptest::prelude::*;
use roster_common::student::StudentRecord;
use roster_core::persistence::PersistenceError;
use roster_core::{FileRepository, RecordRepository, Session};
use tempfile::TempDir;

use crate::fixtures::sample_roster;

#[test]
fn reads_files_written_by_earlier_versions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.txt");
    fs::write(
        &path,
        "1003\nS1A\nAlice\n20\nCS\n8.5\nB2\nBob Smith\n22\nData Science\n7.25\nC3c\nCarol\n19\nPhysics\n9\n",
    )
    .unwrap();

    let loaded = FileRepository::new(&path).load().unwrap();

    assert_eq!(loaded.counter, 1003);
    assert_eq!(loaded.records, sample_roster().unwrap());
    assert_eq!(loaded.discarded_lines, 0);
}

#[test]
fn truncated_tail_is_reported_then_dropped_on_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.txt");
    fs::write(&path, "1001\nS1A\nAlice\n20\nCS\n8.5\nB2\nBob\n22\n").unwrap();

    let (session, report) = Session::open(FileRepository::new(&path)).unwrap();
    assert_eq!(report.loaded, 1);
    assert_eq!(report.discarded_lines, 3);

    session.close().unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1001\nS1A\nAlice\n20\nCS\n8.5\n"
    );
}

#[test]
fn malformed_file_is_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.txt");
    let original = "1001\nS1A\nAlice\ntwenty\nCS\n8.5\n";
    fs::write(&path, original).unwrap();

    let err = Session::open(FileRepository::new(&path)).err().unwrap();

    assert!(matches!(
        err.downcast_ref::<PersistenceError>(),
        Some(PersistenceError::Malformed { line: 4, .. })
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

fn arb_roster() -> impl Strategy<Value = Vec<StudentRecord>> {
    prop::collection::vec(
        (
            "[A-Z]{1,3}[0-9]{1,3}",
            "[A-Za-z .'-]{0,24}",
            1u32..=100,
            "[A-Za-z &]{0,24}",
            0.0f64..10.0,
        ),
        0..12,
    )
    .prop_map(|rows| {
        let mut out: Vec<StudentRecord> = Vec::new();
        for (id, name, age, course, gpa) in rows {
            let record = StudentRecord::new(id.parse().unwrap(), name, age, course, gpa).unwrap();
            if !out.iter().any(|r| r.id() == record.id()) {
                out.push(record);
            }
        }
        out
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn file_round_trip_preserves_order(records in arb_roster()) {
        let dir = TempDir::new().unwrap();
        let repo = FileRepository::new(dir.path().join("students.txt"));

        repo.save(1001, &records).unwrap();
        let loaded = repo.load().unwrap();

        prop_assert_eq!(loaded.records, records);
    }
}
