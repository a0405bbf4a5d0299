//! The in-memory roster.
//!
//! Records are kept in insertion order, which is also the display order.
//! Lookups are linear scans; identifiers are unique so the first match is the
//! only match.

use roster_common::error::ValidationError;
use roster_common::student::{RecordUpdate, StudentId, StudentRecord};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("a student with ID '{0}' already exists")]
    Duplicate(StudentId),

    #[error("student with ID '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an existing sequence, keeping its order.
    ///
    /// Fails on the first identifier that appears twice.
    pub fn from_records(records: Vec<StudentRecord>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    /// Appends `record`, refusing identifiers already in the store.
    pub fn add(&mut self, record: StudentRecord) -> Result<(), StoreError> {
        if self.contains(record.id().as_str()) {
            return Err(StoreError::Duplicate(record.id().clone()));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    pub fn find(&self, id: &str) -> Option<&StudentRecord> {
        self.position(id).map(|idx| &self.records[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Applies `update` to the record with `id` in place.
    ///
    /// On error the store is unchanged.
    pub fn update(&mut self, id: &str, update: &RecordUpdate) -> Result<&StudentRecord, StoreError> {
        let idx = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let record = &mut self.records[idx];
        record.apply(update)?;
        Ok(record)
    }

    /// Removes and returns the record with `id`. Later records shift down by one.
    pub fn delete(&mut self, id: &str) -> Result<StudentRecord, StoreError> {
        let idx = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.records.remove(idx))
    }

    pub fn list(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
