use std::collections::HashSet;
use std::fmt::Write;

use roster_common::student::{StudentId, StudentRecord};

use crate::persistence::PersistenceError;

/// Value written as the first line when no file existed before.
pub const DEFAULT_COUNTER: i64 = 1001;

pub const LINES_PER_RECORD: usize = 5;

/// Result of decoding a roster file.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    /// Legacy counter from the first line. Not used to generate identifiers.
    pub counter: i64,
    pub records: Vec<StudentRecord>,
    /// Lines of a trailing group too short to form a record.
    pub discarded_lines: usize,
}

impl Loaded {
    pub fn empty() -> Self {
        Self {
            counter: DEFAULT_COUNTER,
            records: Vec::new(),
            discarded_lines: 0,
        }
    }
}

pub fn encode(counter: i64, records: &[StudentRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{counter}");
    for record in records {
        let _ = writeln!(out, "{}", record.id());
        let _ = writeln!(out, "{}", record.name());
        let _ = writeln!(out, "{}", record.age());
        let _ = writeln!(out, "{}", record.course());
        let _ = writeln!(out, "{}", record.gpa());
    }
    out
}

/// Parses the counter line followed by five-line record groups.
///
/// Empty input decodes to an empty roster. A short trailing group is not an
/// error: its line count is reported in [`Loaded::discarded_lines`] so the
/// caller can warn about it. Trailing blank lines are ignored, however many
/// there are.
pub fn decode(text: &str) -> Result<Loaded, PersistenceError> {
    if text.trim().is_empty() {
        return Ok(Loaded::empty());
    }
    let lines: Vec<&str> = text.lines().collect();

    let Some((counter_line, body)) = lines.split_first() else {
        return Ok(Loaded::empty());
    };

    let counter = counter_line
        .trim()
        .parse::<i64>()
        .map_err(|e| malformed(1, format!("invalid counter '{counter_line}': {e}")))?;

    let end = body
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);
    let body = &body[..end];

    let mut records = Vec::with_capacity(body.len() / LINES_PER_RECORD);
    let mut seen: HashSet<StudentId> = HashSet::new();

    let mut groups = body.chunks_exact(LINES_PER_RECORD);
    for (idx, group) in groups.by_ref().enumerate() {
        // +2: 1-based, and the counter occupies line 1.
        let first_line = idx * LINES_PER_RECORD + 2;
        let record = decode_record(group, first_line)?;

        if !seen.insert(record.id().clone()) {
            return Err(malformed(
                first_line,
                format!("duplicate student ID '{}'", record.id()),
            ));
        }
        records.push(record);
    }

    let discarded_lines = groups.remainder().len();

    Ok(Loaded {
        counter,
        records,
        discarded_lines,
    })
}

fn decode_record(group: &[&str], first_line: usize) -> Result<StudentRecord, PersistenceError> {
    let [id, name, age, course, gpa] = group else {
        return Err(malformed(first_line, "incomplete record".to_string()));
    };

    let id: StudentId = id
        .trim()
        .parse()
        .map_err(|e| malformed(first_line, format!("{e}")))?;

    let age = age
        .trim()
        .parse::<u32>()
        .map_err(|e| malformed(first_line + 2, format!("invalid age '{age}': {e}")))?;

    let gpa = gpa
        .trim()
        .parse::<f64>()
        .map_err(|e| malformed(first_line + 4, format!("invalid GPA '{gpa}': {e}")))?;

    StudentRecord::from_stored(id, *name, age, *course, gpa)
        .map_err(|e| malformed(first_line, e.to_string()))
}

fn malformed(line: usize, reason: String) -> PersistenceError {
    PersistenceError::Malformed { line, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(id: &str, name: &str, age: u32, course: &str, gpa: f64) -> StudentRecord {
        StudentRecord::new(id.parse().unwrap(), name, age, course, gpa).unwrap()
    }

    #[test]
    fn encodes_counter_then_five_lines_per_record() {
        let text = encode(
            1001,
            &[
                record("S1A", "Alice", 20, "CS", 8.5),
                record("B2", "Bob Smith", 22, "Data Science", 7.0),
            ],
        );

        assert_eq!(
            text,
            "1001\nS1A\nAlice\n20\nCS\n8.5\nB2\nBob Smith\n22\nData Science\n7\n"
        );
    }

    #[test]
    fn empty_input_is_empty_roster() {
        assert_eq!(decode("").unwrap(), Loaded::empty());
        assert_eq!(decode("\n\n").unwrap(), Loaded::empty());
    }

    #[test]
    fn counter_only() {
        let loaded = decode("1042\n").unwrap();
        assert_eq!(loaded.counter, 1042);
        assert!(loaded.records.is_empty());
        assert_eq!(loaded.discarded_lines, 0);
    }

    #[test]
    fn reads_legacy_float_output() {
        let loaded = decode("1001\nA1\nAnn\n30\nBio\n8.33333\n").unwrap();
        assert_eq!(loaded.records, vec![record("A1", "Ann", 30, "Bio", 8.33333)]);
    }

    #[test]
    fn tolerates_crlf_and_empty_text_fields() {
        let loaded = decode("1001\r\nA1\r\n\r\n30\r\n\r\n0\r\n").unwrap();
        assert_eq!(loaded.records, vec![record("A1", "", 30, "", 0.0)]);
    }

    #[test]
    fn short_trailing_group_is_reported() {
        let loaded = decode("1001\nA1\nAnn\n30\nBio\n8.5\nB2\nBob\n").unwrap();

        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.discarded_lines, 2);
    }

    #[test]
    fn trailing_blank_lines_are_not_discarded_data() {
        let loaded = decode("1001\nA1\nAnn\n30\nBio\n8.5\n\n\n").unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.discarded_lines, 0);

        let loaded = decode("1001\nA1\nAnn\n30\nBio\n8.5\n\n\n\n\n\n\n\n").unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.discarded_lines, 0);

        let loaded = decode("1001\nA1\nAnn\n30\nBio\n8.5\nB2\nBob\n\n\n\n\n\n").unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.discarded_lines, 2);
    }

    #[test]
    fn legacy_gpa_of_ten_is_read() {
        let loaded = decode("1001\nA1\nAnn\n30\nBio\n8.5\nB2\nBob\n22\nMaths\n10\n").unwrap();

        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.records[1].gpa(), 10.0);

        let err = decode("1001\nB2\nBob\n22\nMaths\n10.5\n").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 2, .. }));
    }

    #[test]
    fn malformed_fields_point_at_their_line() {
        let err = decode("1001\nA1\nAnn\nthirty\nBio\n8.5\n").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 4, .. }));

        let err = decode("1001\nA1\nAnn\n30\nBio\nhigh\n").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 6, .. }));

        let err = decode("one thousand\n").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 1, .. }));

        let err = decode("1001\nA1\nAnn\n30\nBio\n8.5\n12345\nBob\n20\nArt\n5\n").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 7, .. }));
    }

    #[test]
    fn out_of_range_values_are_malformed() {
        let err = decode("1001\nA1\nAnn\n300\nBio\n8.5\n").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 2, .. }));
    }

    #[test]
    fn duplicate_identifiers_are_malformed() {
        let err = decode("1001\nA1\nAnn\n30\nBio\n8.5\nA1\nAnn\n30\nBio\n8.5\n").unwrap_err();
        assert!(matches!(err, PersistenceError::Malformed { line: 7, .. }));
    }

    fn arb_record() -> impl Strategy<Value = StudentRecord> {
        (
            "[A-Za-z]{1,4}[0-9]{1,4}",
            "[A-Za-z ]{0,20}",
            1u32..=100,
            "[A-Za-z ]{0,20}",
            0.0f64..10.0,
        )
            .prop_map(|(id, name, age, course, gpa)| {
                StudentRecord::new(id.parse().unwrap(), name, age, course, gpa).unwrap()
            })
    }

    proptest! {
        #[test]
        fn save_load_preserves_sequence(
            records in prop::collection::vec(arb_record(), 0..16),
            counter in any::<i64>(),
        ) {
            let mut unique = Vec::new();
            let mut seen = HashSet::new();
            for r in records {
                if seen.insert(r.id().clone()) {
                    unique.push(r);
                }
            }

            let loaded = decode(&encode(counter, &unique)).unwrap();
            prop_assert_eq!(loaded.counter, counter);
            prop_assert_eq!(loaded.records, unique);
            prop_assert_eq!(loaded.discarded_lines, 0);
        }
    }
}
