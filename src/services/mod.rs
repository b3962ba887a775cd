//! Service layer for FinTrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and keeping memory and storage consistent.

pub mod ledger;

pub use ledger::Ledger;
