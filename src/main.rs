use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{handle_entry_command, EntryCommands, Notice};
use fintrack::config::{paths::DATA_DIR_ENV, FintrackPaths, Settings};
use fintrack::services::Ledger;
use fintrack::storage::{open_file_store, ENTRIES_KEY};
use fintrack::FintrackError;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Local income and expense ledger",
    long_about = "FinTrack records income and expense entries, keeps them in a \
                  local store, and shows your running totals and net balance."
)]
struct Cli {
    /// Directory holding settings and data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Entry(EntryCommands),

    /// Show current configuration and paths, or change a setting
    Config {
        /// Currency symbol shown before amounts
        #[arg(long)]
        currency_symbol: Option<String>,
        /// strftime pattern for entry timestamps
        #[arg(long)]
        date_format: Option<String>,
        /// Seconds allowed to confirm a clear
        #[arg(long)]
        clear_confirm_secs: Option<u64>,
    },
}

fn main() -> ExitCode {
    fintrack::logging::init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<FintrackError>() {
            Some(ledger_err) => {
                eprintln!("{}", Notice::from_error(ledger_err));
                if ledger_err.is_informational() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
            None => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FintrackPaths::with_base_dir(dir),
        None => FintrackPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Entry(cmd)) => {
            let store = open_file_store(&paths)?;
            let mut ledger = Ledger::open(store);
            let stdin = std::io::stdin();
            handle_entry_command(&mut ledger, &settings, cmd, &mut stdin.lock())?;
        }
        Some(Commands::Config {
            currency_symbol,
            date_format,
            clear_confirm_secs,
        }) => {
            let changed = currency_symbol.is_some()
                || date_format.is_some()
                || clear_confirm_secs.is_some();
            if let Some(symbol) = currency_symbol {
                settings.currency_symbol = symbol;
            }
            if let Some(pattern) = date_format {
                settings.date_format = pattern;
            }
            if let Some(secs) = clear_confirm_secs {
                settings.clear_confirm_secs = secs;
            }
            if changed {
                settings.save(&paths)?;
                println!("{}", Notice::success("Settings saved"));
                println!();
            }

            println!("FinTrack Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!(
                "Entries file:    {}",
                paths.data_dir().join(format!("{}.json", ENTRIES_KEY)).display()
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Clear confirm window: {}s", settings.clear_confirm_secs);
        }
        None => {
            println!("FinTrack - income and expense ledger");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack add income \"Salary\" 50000' to record your first entry.");
        }
    }

    Ok(())
}
