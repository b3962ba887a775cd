//! Core data models for FinTrack
//!
//! This module contains the data structures that represent the ledger:
//! entries, their identifiers and their amounts.

pub mod amount;
pub mod entry;
pub mod ids;

pub use amount::{Amount, MAX_AMOUNT};
pub use entry::{Entry, EntryFilter, EntryKind};
pub use ids::EntryId;
