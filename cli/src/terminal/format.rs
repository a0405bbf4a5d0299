use colored::*;
use roster_common::student::StudentRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::terminal::{colors, print};

const ID_WIDTH: usize = 12;
const NAME_WIDTH: usize = 25;
const AGE_WIDTH: usize = 6;
const COURSE_WIDTH: usize = 22;
const GPA_WIDTH: usize = 6;

pub fn table_header() -> String {
    format!(
        "{}{}{}{}{:>GPA_WIDTH$}",
        pad("ID", ID_WIDTH),
        pad("Name", NAME_WIDTH),
        pad("Age", AGE_WIDTH),
        pad("Course", COURSE_WIDTH),
        "GPA",
    )
}

pub fn table_row(record: &StudentRecord) -> String {
    format!(
        "{}{}{}{}{:>GPA_WIDTH$.2}",
        pad(record.id().as_str(), ID_WIDTH),
        pad(record.name(), NAME_WIDTH),
        pad(&record.age().to_string(), AGE_WIDTH),
        pad(record.course(), COURSE_WIDTH),
        record.gpa(),
    )
}

/// Left-aligns `s` in a column of `width` terminal cells.
///
/// Values that would touch the next column are cut and end in `…`.
fn pad(s: &str, width: usize) -> String {
    let limit = width.saturating_sub(1);
    if UnicodeWidthStr::width(s) <= limit {
        let fill = width - UnicodeWidthStr::width(s);
        return format!("{s}{}", " ".repeat(fill));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > limit {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    format!("{out}{}", " ".repeat(width.saturating_sub(used)))
}

pub fn gpa_color(gpa: f64) -> Color {
    match gpa {
        g if g >= 8.0 => colors::GPA_HIGH,
        g if g >= 5.0 => colors::GPA_MID,
        _ => colors::GPA_LOW,
    }
}

pub fn record_to_details(record: &StudentRecord) -> Vec<(String, ColoredString)> {
    vec![
        ("ID".to_string(), record.id().as_str().color(colors::STUDENT_ID)),
        ("Age".to_string(), record.age().to_string().normal()),
        ("Course".to_string(), record.course().normal()),
        (
            "GPA".to_string(),
            format!("{:.2}", record.gpa()).color(gpa_color(record.gpa())),
        ),
    ]
}

pub fn print_record(idx: usize, record: &StudentRecord) {
    let name = if record.name().is_empty() {
        "(no name)"
    } else {
        record.name()
    };
    print::tree_head(idx, name);
    print::as_tree_one_level(record_to_details(record));
}

pub fn print_table(records: &[StudentRecord]) {
    print::print(&format!("{}", table_header().color(colors::PRIMARY).bold()));
    print::thin_separator();
    for record in records {
        print::print(&table_row(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, age: u32, course: &str, gpa: f64) -> StudentRecord {
        StudentRecord::new(id.parse().unwrap(), name, age, course, gpa).unwrap()
    }

    #[test]
    fn header_and_rows_share_columns() {
        let header = table_header();
        let row = table_row(&record("S1A", "Alice", 20, "CS", 8.5));

        assert_eq!(
            header,
            "ID          Name                     Age   Course                   GPA"
        );
        assert_eq!(
            row,
            "S1A         Alice                    20    CS                      8.50"
        );
        assert_eq!(
            UnicodeWidthStr::width(header.as_str()),
            UnicodeWidthStr::width(row.as_str())
        );
    }

    #[test]
    fn long_values_are_cut_to_their_column() {
        let long_name = "Maximilian Alexander Fitzgerald";
        let padded = pad(long_name, NAME_WIDTH);

        assert_eq!(UnicodeWidthStr::width(padded.as_str()), NAME_WIDTH);
        assert!(padded.starts_with("Maximilian"));
        assert!(padded.trim_end().ends_with('…'));
    }

    #[test]
    fn wide_characters_are_measured_by_cells() {
        let padded = pad("李小龍", ID_WIDTH);
        assert_eq!(UnicodeWidthStr::width(padded.as_str()), ID_WIDTH);
    }

    #[test]
    fn gpa_bands() {
        assert_eq!(gpa_color(9.5), colors::GPA_HIGH);
        assert_eq!(gpa_color(6.0), colors::GPA_MID);
        assert_eq!(gpa_color(2.0), colors::GPA_LOW);
    }
}
