//! CLI command handlers
//!
//! The terminal front-end for the ledger: command definitions, the
//! confirmation gate for destructive actions, and user-facing notices.

pub mod confirm;
pub mod entry;
pub mod notify;

pub use confirm::{ConfirmGate, ConfirmOutcome, ConfirmState};
pub use entry::{handle_entry_command, EntryCommands};
pub use notify::{Notice, NoticeLevel};
