//! # Student Model
//!
//! * [`StudentId`]: Validated identifier, the unique key of the roster.
//! * [`StudentRecord`]: One row of the roster.
//! * [`RecordUpdate`]: A partial or full replacement of a record's mutable fields.
//! * [`validate`]: The pure field rules everything else is built on.

pub mod id;
pub mod record;
pub mod validate;

pub use id::StudentId;
pub use record::{RecordUpdate, StudentRecord};
