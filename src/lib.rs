//! FinTrack - local income and expense ledger
//!
//! This library provides the core of the FinTrack ledger: an ordered
//! collection of income and expense entries, validated before every change,
//! written through to a local key-value store, and summarized into running
//! totals.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: error kinds
//! - `models`: entries, ids and amounts
//! - `validation`: acceptance rules for entry input
//! - `storage`: key-value stores and the entry persistence adapter
//! - `services`: the entry repository (`Ledger`)
//! - `reports`: the aggregate snapshot (`Summary`)
//! - `display`, `cli`: the terminal front-end consuming the core
//! - `logging`: tracing setup
//!
//! # Example
//!
//! ```
//! use fintrack::models::{EntryFilter, EntryKind};
//! use fintrack::services::Ledger;
//! use fintrack::storage::MemoryStore;
//!
//! let mut ledger = Ledger::open(MemoryStore::new());
//! ledger.add_raw(EntryKind::Income, "Salary", "50000")?;
//! ledger.add_raw(EntryKind::Expense, "Rent", "20000")?;
//!
//! assert_eq!(ledger.list(EntryFilter::Expense).len(), 1);
//! assert_eq!(ledger.summary().net, 30000.0);
//! # Ok::<(), fintrack::FintrackError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{FintrackError, FintrackResult};
