#![forbid(unsafe_code)]

use error_iter::ErrorIter as _;
use is_terminal::IsTerminal as _;
use onlyargs::CliError;
use onlyargs_derive::OnlyArgs;
use std::path::PathBuf;
use std::{env, process::ExitCode};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;
use vaultpay::imports::preferences::{load_default_preferences, load_preferences};
use vaultpay::imports::transactions::read_transactions;
use vaultpay::model::constants::DEFAULT_EXPORT_FILENAME;
use vaultpay::model::{fixtures, FilterDraft, SortKey, Stats, Transaction, TxStatus, TxType};
use vaultpay::nav::{ModalController, NavigationProvider, DEFAULT_PATH};
use vaultpay::query::TransactionQuery;

#[derive(Debug, OnlyArgs)]
#[footer = "Without --input-transactions the built-in demo history is used."]
#[footer = ""]
#[footer = "Additional environment variables:"]
#[footer = "  - RUST_LOG configures log filtering, e.g. `RUST_LOG=debug`"]
#[footer = "  - TERM_COLOR accepts \"always\" to override automatic terminal sensing"]
struct Args {
    /// Read transactions CSV from a file.
    ///   Header: id,type,asset,amount,usd_value,status,date,hash
    #[long]
    input_transactions: Vec<PathBuf>,

    /// Case-insensitive search over asset, type and status.
    #[default("")]
    search: String,

    /// Only show these assets, e.g. BTC.
    #[long]
    assets: Vec<String>,

    /// Only show these statuses {success, pending, failed}.
    #[long]
    statuses: Vec<String>,

    /// Only show these types {sent, received}.
    #[long]
    types: Vec<String>,

    /// Earliest transaction date, inclusive, as YYYY-MM-DD.
    #[long]
    date_from: Option<String>,

    /// Latest transaction date, inclusive, as YYYY-MM-DD.
    #[long]
    date_to: Option<String>,

    /// Minimum USD value, inclusive.
    #[long]
    amount_min: Option<String>,

    /// Maximum USD value, inclusive.
    #[long]
    amount_max: Option<String>,

    /// Sort order {date-desc (default), date-asc, amount-desc, amount-asc, asset}.
    #[long]
    sort: Option<String>,

    /// Report the modal state for this route path.
    ///   Default is "/dashboard".
    #[long]
    path: Option<String>,

    /// Write the CSV export to this file or directory.
    ///   A directory receives "transactions.csv".
    #[short('o')]
    output: Option<PathBuf>,

    /// Read preferences from this RON file instead of the config directory.
    #[long]
    preferences: Option<PathBuf>,

    /// Print the view as JSON instead of a table.
    #[long]
    json: bool,

    /// Enable verbose output.
    /// Prints import and export counts.
    verbose: bool,
}

#[derive(Debug, Error)]
enum Error {
    #[error("Failed to import {0:?}")]
    Import(PathBuf, #[source] vaultpay::errors::ImportError),

    #[error("Unable to load the demo transaction history")]
    Fixture(#[source] vaultpay::errors::ImportError),

    #[error("Unable to load preferences from {0:?}")]
    Preferences(PathBuf, #[source] vaultpay::errors::PreferencesError),

    #[error("Invalid --statuses argument")]
    Status(#[from] vaultpay::errors::TxStatusError),

    #[error("Invalid --types argument")]
    Type(#[from] vaultpay::errors::TxTypeError),

    #[error("Invalid --sort argument")]
    Sort(#[from] vaultpay::errors::SortKeyError),

    #[error("Invalid --path argument")]
    Route(#[from] vaultpay::errors::RouteError),

    #[error("Unable to write export to {0:?}")]
    Export(PathBuf, #[source] std::io::Error),

    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),

    #[error("CLI argument error")]
    Args(#[from] CliError),
}

fn main() -> ExitCode {
    // Uses the `RUST_LOG` environment var for configuration. E.g. `RUST_LOG=debug cargo run`
    //
    // See: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/struct.EnvFilter.html#directives
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let term_color = env::var("TERM_COLOR")
        .map(|color| color == "always")
        .unwrap_or_else(|_| std::io::stdout().is_terminal());
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(term_color))
        .with(env_filter)
        .init();

    match run(onlyargs::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            for source in err.sources().skip(1) {
                eprintln!("  Caused by: {source}");
            }

            ExitCode::FAILURE
        }
    }
}

fn run(args: Result<Args, CliError>) -> Result<(), Error> {
    let args = args?;

    // An explicit preferences file must load; the default location is best-effort.
    let preferences = match &args.preferences {
        Some(path) => {
            load_preferences(path).map_err(|err| Error::Preferences(path.clone(), err))?
        }
        None => load_default_preferences(),
    };
    debug!("Preferences: {preferences:?}");

    let mut stats = Stats::default();
    let transactions = load_transactions(&mut stats, &args.input_transactions)?;

    let draft = FilterDraft {
        assets: args.assets.iter().cloned().collect(),
        status: args
            .statuses
            .iter()
            .map(|s| s.parse::<TxStatus>())
            .collect::<Result<_, _>>()?,
        types: args
            .types
            .iter()
            .map(|s| s.parse::<TxType>())
            .collect::<Result<_, _>>()?,
        date_from: args.date_from.clone().unwrap_or_default(),
        date_to: args.date_to.clone().unwrap_or_default(),
        amount_min: args.amount_min.clone().unwrap_or_default(),
        amount_max: args.amount_max.clone().unwrap_or_default(),
    };
    let query = TransactionQuery {
        search: args.search.clone(),
        filters: draft.to_filter_state(),
        sort: args
            .sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()?
            .unwrap_or_default(),
    };

    let view = query.view(&transactions);
    if args.json {
        println!("{}", serde_json::to_string_pretty(view.as_slice())?);
    } else {
        let heading = format!("Transactions ({})", query.sort.label());
        println!("{heading}");
        println!("{}", "=".repeat(heading.len()));
        for tx in view.iter() {
            println!(
                "{date}  {tx_type:<8}  {asset:<5}  {amount:>12}  {usd_value:>12} {currency}  {status:<7}  {hash}",
                date = tx.date.format("%F %R"),
                tx_type = tx.tx_type,
                asset = tx.asset,
                amount = tx.amount.normalize(),
                usd_value = tx.usd_value.round_dp(2),
                currency = preferences.currency,
                status = tx.status,
                hash = tx.short_hash(),
            );
        }
        println!();
        println!("{}", view.summary());

        let chips = query.chips();
        if !chips.is_empty() {
            let chips: Vec<_> = chips.iter().map(ToString::to_string).collect();
            println!("Active filters: {}", chips.join(", "));
        }
    }

    let path = args.path.as_deref().unwrap_or(DEFAULT_PATH);
    let mut nav = NavigationProvider::new(path)?;
    let modal = ModalController::attach(&mut nav);
    let state = modal.state();
    if state.is_open {
        info!("Route {}: {:?} modal open", nav.route(), state.modal_type);
    } else {
        info!("Route {}: modal closed", nav.route());
    }

    if let Some(output) = &args.output {
        let path = if output.is_dir() {
            output.join(DEFAULT_EXPORT_FILENAME)
        } else {
            output.clone()
        };

        let export = view.export();
        std::fs::write(&path, export.to_string())
            .map_err(|err| Error::Export(path.clone(), err))?;
        stats.add_exported(export.len());
        info!("Exported {} transactions to {path:?}", export.len());
    }

    if args.verbose {
        stats.pretty_print();
    }

    Ok(())
}

fn load_transactions(stats: &mut Stats, paths: &[PathBuf]) -> Result<Vec<Transaction>, Error> {
    if paths.is_empty() {
        return fixtures::demo_transactions().map_err(Error::Fixture);
    }

    let mut transactions = Vec::new();
    for path in paths {
        debug!("Reading transactions from {path:?}");
        let imported =
            read_transactions(stats, path).map_err(|err| Error::Import(path.clone(), err))?;
        transactions.extend(imported);
    }

    Ok(transactions)
}
