//! # Roster Core
//!
//! The record store and everything needed to keep it on disk.
//!
//! * **[`store`]**: The ordered in-memory collection and its operations.
//! * **[`persistence`]**: The flat file format and the repositories reading and writing it.
//! * **[`session`]**: A store bound to a repository, saved after each change and on drop.
//!
//! Nothing in this crate prompts or prints tables; that is the CLI's job.

pub mod persistence;
pub mod session;
pub mod store;

pub use persistence::{FileRepository, MemoryRepository, PersistenceError, RecordRepository};
pub use session::{OpenReport, Session, SessionError};
pub use store::{RecordStore, StoreError};
