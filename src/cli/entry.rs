//! Entry CLI commands
//!
//! Bridges clap argument parsing with the ledger. Every mutation is followed
//! by a notice and a fresh balance overview.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use clap::Subcommand;

use super::confirm::{ConfirmGate, ConfirmOutcome};
use super::notify::Notice;
use crate::config::Settings;
use crate::display::{format_entry_details, format_entry_list, format_summary};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{EntryFilter, EntryKind};
use crate::services::Ledger;
use crate::storage::KeyValueStore;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Add a new income or expense entry
    Add {
        /// Entry kind (income or expense)
        kind: EntryKind,
        /// What the money was for
        #[arg(allow_hyphen_values = true)]
        description: String,
        /// Amount (e.g. "1250.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// List entries, newest first
    #[command(alias = "ls")]
    List {
        /// Restrict to a kind (all, income, expense)
        #[arg(short, long, default_value = "all")]
        filter: EntryFilter,
    },
    /// Show entry details
    Show {
        /// Entry ID (full or short form)
        id: String,
    },
    /// Edit an entry; omitted fields keep their current value
    Edit {
        /// Entry ID (full or short form)
        id: String,
        /// New kind
        #[arg(short, long)]
        kind: Option<EntryKind>,
        /// New description
        #[arg(short, long, allow_hyphen_values = true)]
        description: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry ID (full or short form)
        id: String,
    },
    /// Delete every entry
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the balance overview
    Summary,
}

/// Handle an entry command
///
/// `input` supplies the answer to the clear confirmation prompt.
pub fn handle_entry_command<S, R>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    cmd: EntryCommands,
    input: &mut R,
) -> FintrackResult<()>
where
    S: KeyValueStore,
    R: BufRead,
{
    match cmd {
        EntryCommands::Add {
            kind,
            description,
            amount,
        } => {
            let entry = ledger.add_raw(kind, &description, &amount)?;

            println!("{}", Notice::added(entry.kind));
            print!("{}", format_entry_details(&entry, settings));
            println!();
            print!("{}", format_summary(&ledger.summary(), settings));
        }

        EntryCommands::List { filter } => {
            let entries = ledger.list(filter);
            print!("{}", format_entry_list(&entries, filter, settings));
        }

        EntryCommands::Show { id } => {
            let id = ledger.resolve(&id)?;
            let entry = ledger
                .find_by_id(id)
                .ok_or_else(|| FintrackError::entry_not_found(id.to_string()))?;
            print!("{}", format_entry_details(entry, settings));
        }

        EntryCommands::Edit {
            id,
            kind,
            description,
            amount,
        } => {
            let id = ledger.resolve(&id)?;
            let current = ledger
                .find_by_id(id)
                .cloned()
                .ok_or_else(|| FintrackError::entry_not_found(id.to_string()))?;

            if kind.is_none() && description.is_none() && amount.is_none() {
                println!("{}", Notice::info("Nothing to change"));
                return Ok(());
            }

            let kind = kind.unwrap_or(current.kind);
            let description = description.unwrap_or(current.description);
            let amount = amount.unwrap_or_else(|| current.amount.value().to_string());

            let updated = ledger.update_raw(id, kind, &description, &amount)?;

            println!("{}", Notice::updated());
            print!("{}", format_entry_details(&updated, settings));
            println!();
            print!("{}", format_summary(&ledger.summary(), settings));
        }

        EntryCommands::Delete { id } => {
            let id = ledger.resolve(&id)?;
            let removed = ledger.remove(id)?;

            println!("{} ({})", Notice::deleted(), removed);
            println!();
            print!("{}", format_summary(&ledger.summary(), settings));
        }

        EntryCommands::Clear { yes } => {
            handle_clear(ledger, settings, yes, input)?;
        }

        EntryCommands::Summary => {
            print!("{}", format_summary(&ledger.summary(), settings));
        }
    }

    Ok(())
}

fn handle_clear<S, R>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    yes: bool,
    input: &mut R,
) -> FintrackResult<()>
where
    S: KeyValueStore,
    R: BufRead,
{
    if ledger.is_empty() {
        return Err(FintrackError::EmptyCollection);
    }

    if yes {
        return clear_all(ledger, settings);
    }

    let mut gate = ConfirmGate::new(Duration::from_secs(settings.clear_confirm_secs));
    gate.press(Instant::now());

    print!(
        "{} Delete all {} transactions? Type 'y' within {}s to confirm: ",
        Notice::warning("Careful!"),
        ledger.len(),
        gate.window().as_secs()
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        gate.cancel();
        println!("{}", Notice::info("Clear cancelled"));
        return Ok(());
    }

    match gate.press(Instant::now()) {
        ConfirmOutcome::Confirmed => clear_all(ledger, settings)?,
        ConfirmOutcome::Armed => {
            println!(
                "{}",
                Notice::info("Confirmation window expired; nothing was cleared")
            );
        }
    }

    Ok(())
}

fn clear_all<S: KeyValueStore>(ledger: &mut Ledger<S>, settings: &Settings) -> FintrackResult<()> {
    let count = ledger.clear()?;
    println!("{}", Notice::cleared(count));
    println!();
    print!("{}", format_summary(&ledger.summary(), settings));
    Ok(())
}
