//! Field rules for student records.
//!
//! Every function here is pure. Callers decide whether a failure means
//! re-prompting or aborting.

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 100;
pub const MIN_GPA: f64 = 0.0;
/// Exclusive upper bound for new values, on add and on every update path.
/// Values read back from disk may sit exactly on it.
pub const GPA_CEILING: f64 = 10.0;

/// Letters and digits only, with at least one of each.
///
/// Only ASCII letters and digits count as alphanumeric.
pub fn validate_identifier(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }

    let mut has_alpha = false;
    let mut has_digit = false;
    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            return false;
        }
        has_alpha |= c.is_ascii_alphabetic();
        has_digit |= c.is_ascii_digit();
    }
    has_alpha && has_digit
}

pub fn validate_age(age: u32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}

/// `0.0 <= gpa < 10.0`. NaN fails both comparisons and is rejected.
pub fn validate_gpa(gpa: f64) -> bool {
    gpa >= MIN_GPA && gpa < GPA_CEILING
}

/// `0.0 <= gpa <= 10.0`, for values already on disk.
pub fn validate_stored_gpa(gpa: f64) -> bool {
    (MIN_GPA..=GPA_CEILING).contains(&gpa)
}

/// Free-text fields are stored one per line, so they must not span lines.
pub fn validate_text(s: &str) -> bool {
    !s.contains(['\n', '\r'])
}
