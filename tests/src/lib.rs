//! Cross-crate scenarios for the roster workspace.
//!
//! The tests drive `roster-core` through its public API against real files in
//! temporary directories. [`fixtures`] holds the records they share.

pub mod fixtures;

#[cfg(test)]
mod roster;
