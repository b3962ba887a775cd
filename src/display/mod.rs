//! Display formatting for terminal output
//!
//! Currency, timestamps, entry tables and the balance overview. Everything
//! here is applied after aggregation and never feeds back into the ledger.

pub mod entry;
pub mod format;
pub mod summary;

pub use entry::{format_entry_details, format_entry_list, format_entry_table};
pub use format::{format_currency, format_signed, format_timestamp};
pub use summary::{format_share_bar, format_summary};
