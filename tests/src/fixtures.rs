use roster_common::student::StudentRecord;

pub fn record(id: &str, name: &str, age: u32, course: &str, gpa: f64) -> anyhow::Result<StudentRecord> {
    Ok(StudentRecord::new(id.parse()?, name, age, course, gpa)?)
}

/// Three well-formed records in a fixed order.
pub fn sample_roster() -> anyhow::Result<Vec<StudentRecord>> {
    Ok(vec![
        record("S1A", "Alice", 20, "CS", 8.5)?,
        record("B2", "Bob Smith", 22, "Data Science", 7.25)?,
        record("C3c", "Carol", 19, "Physics", 9.0)?,
    ])
}
