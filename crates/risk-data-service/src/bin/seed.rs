//! Risk Data Seed - operator tool for the risk store
//!
//! Initializes the database, generates bulk traffic, and inspects what is
//! stored. Results are printed to stdout as JSON; logs go to stderr.

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use risk_data_store::{InitOutcome, SqliteStore, Store, DB_PATH_ENV, VIEWER_FEED_LIMIT};

/// Events written by `simulate` when no count is given.
const DEFAULT_SIMULATE_COUNT: usize = 2000;

#[derive(Parser, Debug)]
#[command(name = "risk-data-seed")]
#[command(about = "Seed and inspect the risk data store", long_about = None)]
struct Args {
    /// Path to the SQLite database
    #[arg(long, env = DB_PATH_ENV, default_value = risk_data_store::DEFAULT_DB_PATH)]
    db_path: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create and seed the schema if needed
    Init,
    /// Generate synthetic transactions and risk results
    Simulate {
        /// Number of events to write
        #[arg(short, long, default_value_t = DEFAULT_SIMULATE_COUNT)]
        count: usize,
    },
    /// Print row counts of every table
    Counts,
    /// Print the most recent risk results
    Recent {
        /// Maximum entries to print
        #[arg(short, long, default_value_t = VIEWER_FEED_LIMIT)]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,risk_data=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    tracing::debug!(db_path = %args.db_path, "Opening SQLite store");
    let store = SqliteStore::open_lazy(&args.db_path, 1);

    let output = match args.command {
        Command::Init => {
            let outcome = store.ensure_initialized().await?;
            let (outcome, seeded_events) = match outcome {
                InitOutcome::Created { seeded_events } => ("created", seeded_events),
                InitOutcome::Reseeded { seeded_events } => ("reseeded", seeded_events),
                InitOutcome::AlreadyInitialized => ("already_initialized", 0),
            };
            json!({ "outcome": outcome, "seeded_events": seeded_events })
        }
        Command::Simulate { count } => {
            store.ensure_initialized().await?;
            let written = store.generate(count).await?;
            json!({ "requested": count, "written": written })
        }
        Command::Counts => serde_json::to_value(store.counts().await?)?,
        Command::Recent { limit } => serde_json::to_value(store.fetch_recent_feed(limit).await?)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    store.close().await;

    Ok(())
}
