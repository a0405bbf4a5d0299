//! A record store bound to the repository it came from.
//!
//! The session owns the roster for the lifetime of the shell. Every mutation
//! is written back immediately, and the roster is written once more when the
//! session is closed or dropped.

use anyhow::Context;
use roster_common::student::{RecordUpdate, StudentRecord};
use thiserror::Error;
use tracing::{debug, error};

use crate::persistence::{PersistenceError, RecordRepository};
use crate::store::{RecordStore, StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    /// The store refused the change. Nothing was modified.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The change was applied in memory but could not be written out.
    #[error("change kept in memory only: {0}")]
    Unsaved(#[source] PersistenceError),
}

/// What was found when the session was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenReport {
    pub loaded: usize,
    /// Lines of a truncated trailing record that were left out.
    pub discarded_lines: usize,
}

pub struct Session<R: RecordRepository> {
    store: RecordStore,
    repo: R,
    counter: i64,
    closed: bool,
}

impl<R: RecordRepository> Session<R> {
    /// Loads the roster from `repo`.
    pub fn open(repo: R) -> anyhow::Result<(Self, OpenReport)> {
        let location = repo.location();
        let loaded = repo
            .load()
            .with_context(|| format!("failed to load roster from {location}"))?;

        let report = OpenReport {
            loaded: loaded.records.len(),
            discarded_lines: loaded.discarded_lines,
        };
        let store = RecordStore::from_records(loaded.records)
            .with_context(|| format!("roster in {location} is inconsistent"))?;

        debug!("opened session on {location} with {} records", report.loaded);
        let session = Self {
            store,
            repo,
            counter: loaded.counter,
            closed: false,
        };
        Ok((session, report))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// The legacy first-line counter, written back unchanged.
    pub fn counter(&self) -> i64 {
        self.counter
    }

    pub fn add(&mut self, record: StudentRecord) -> Result<(), SessionError> {
        let id = record.id().clone();
        self.store.add(record)?;
        debug!("added {id}");
        self.persist()
    }

    pub fn update(&mut self, id: &str, update: &RecordUpdate) -> Result<StudentRecord, SessionError> {
        let updated = self.store.update(id, update)?.clone();
        debug!("updated {id}");
        self.persist()?;
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str) -> Result<StudentRecord, SessionError> {
        let removed = self.store.delete(id)?;
        debug!("deleted {id}");
        self.persist()?;
        Ok(removed)
    }

    /// Writes the whole roster to the repository.
    pub fn flush(&self) -> Result<(), PersistenceError> {
        self.repo.save(self.counter, self.store.list())
    }

    /// Flushes and ends the session without the implicit flush on drop.
    pub fn close(mut self) -> Result<(), PersistenceError> {
        self.closed = true;
        self.flush()
    }

    fn persist(&self) -> Result<(), SessionError> {
        self.flush().map_err(SessionError::Unsaved)
    }
}

impl<R: RecordRepository> Drop for Session<R> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.flush() {
            error!("{e}");
        }
    }
}
