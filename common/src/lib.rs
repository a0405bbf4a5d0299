//! # Roster Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`student`]**: The record model, the validated identifier and the field rules.
//! * **[`config`]**: Runtime settings assembled by the CLI.
//! * **[`error`]**: Validation failures raised while building or mutating records.
//!
//! The logging macros ([`success!`], [`info!`], [`warn!`], [`error!`]) are thin
//! wrappers over `tracing` so every crate reports through the same subscriber.

pub mod config;
pub mod error;
pub mod macros;
pub mod student;

#[doc(hidden)]
pub use tracing;
