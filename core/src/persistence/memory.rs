use std::cell::{Cell, RefCell};

use roster_common::student::StudentRecord;

use crate::persistence::format::{self, Loaded};
use crate::persistence::{PersistenceError, RecordRepository};

/// Keeps the encoded roster in memory.
///
/// The text goes through the same codec as [`super::FileRepository`], so what
/// a test reads back is exactly what would have landed on disk.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    contents: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
    saves: Cell<usize>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from raw file text, as if it had been read from disk.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(text.into())),
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    /// Makes every following `save` fail, like a read-only file would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl RecordRepository for MemoryRepository {
    fn load(&self) -> Result<Loaded, PersistenceError> {
        match self.contents.borrow().as_deref() {
            Some(text) => format::decode(text),
            None => Ok(Loaded::empty()),
        }
    }

    fn save(&self, counter: i64, records: &[StudentRecord]) -> Result<(), PersistenceError> {
        if self.fail_writes.get() {
            return Err(PersistenceError::Write {
                path: self.location().into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.contents.borrow_mut() = Some(format::encode(counter, records));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
