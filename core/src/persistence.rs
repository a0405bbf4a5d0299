//! # Persistence Layer
//!
//! Converts the roster to and from its flat text file.
//!
//! ## File layout
//! ```text
//! 1001        <- legacy counter, carried through unchanged
//! S1A         <- identifier
//! Alice       <- name
//! 20          <- age
//! CS          <- course
//! 8.5         <- gpa
//! ...         <- five lines per further record
//! ```
//!
//! * [`format`]: Pure `encode`/`decode` between text and records.
//! * [`file::FileRepository`]: Reads and rewrites a file on disk.
//! * [`memory::MemoryRepository`]: Keeps the encoded text in memory, for tests
//!   and dry runs.

use std::io;
use std::path::PathBuf;

use roster_common::student::StudentRecord;
use thiserror::Error;

pub mod file;
pub mod format;
pub mod memory;

pub use file::FileRepository;
pub use format::Loaded;
pub use memory::MemoryRepository;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not save data to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A complete line or record group that cannot be understood.
    /// `line` is 1-based.
    #[error("malformed data on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Somewhere the whole roster can be loaded from and written back to.
///
/// Both operations work on the full set of records; there are no partial
/// writes.
pub trait RecordRepository {
    /// Reads every record. A missing backing file is an empty roster, not an error.
    fn load(&self) -> Result<Loaded, PersistenceError>;

    /// Replaces the stored roster with `records`, in order.
    fn save(&self, counter: i64, records: &[StudentRecord]) -> Result<(), PersistenceError>;

    /// Human readable location, used in log lines.
    fn location(&self) -> String;
}

impl<R: RecordRepository + ?Sized> RecordRepository for &R {
    fn load(&self) -> Result<Loaded, PersistenceError> {
        (**self).load()
    }

    fn save(&self, counter: i64, records: &[StudentRecord]) -> Result<(), PersistenceError> {
        (**self).save(counter, records)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
