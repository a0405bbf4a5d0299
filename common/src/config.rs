use std::path::PathBuf;

/// File name used when no `--file` is given.
pub const DEFAULT_DATA_FILE: &str = "students.txt";

#[derive(Debug, Clone)]
pub struct Config {
    /// Flat file the roster is loaded from at startup and written to after
    /// every change.
    pub data_file: PathBuf,
    /// Quiet level. `1` hides banners and headers, `2` also hides totals.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            quiet: 0,
            no_banner: false,
        }
    }
}
