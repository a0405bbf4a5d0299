use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use roster_common::student::StudentRecord;
use tracing::debug;

use crate::persistence::format::{self, Loaded};
use crate::persistence::{PersistenceError, RecordRepository};

/// Roster stored in a flat text file.
///
/// The file is opened, read or written in full, and closed inside each call.
/// Nothing is held open between calls and no lock is taken.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordRepository for FileRepository {
    fn load(&self) -> Result<Loaded, PersistenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet, starting empty", self.path.display());
                return Ok(Loaded::empty());
            }
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let loaded = format::decode(&text)?;
        debug!(
            "decoded {} records from {}",
            loaded.records.len(),
            self.path.display()
        );
        Ok(loaded)
    }

    /// Truncates and rewrites the whole file.
    fn save(&self, counter: i64, records: &[StudentRecord]) -> Result<(), PersistenceError> {
        let text = format::encode(counter, records);
        fs::write(&self.path, text).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
