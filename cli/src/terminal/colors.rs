use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const STUDENT_ID: Color = Color::BrightYellow;
pub const GPA_HIGH: Color = Color::Green;
pub const GPA_MID: Color = Color::Yellow;
pub const GPA_LOW: Color = Color::Red;
