//! Reports module for FinTrack
//!
//! Derived views computed from the entry collection.

pub mod summary;

pub use summary::Summary;
