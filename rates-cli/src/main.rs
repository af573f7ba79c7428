//! Rates CLI
//!
//! Command-line interface for the exchange-rate pipeline: load a date range
//! from the Fixer API into the local store, then display the historical or
//! averaged views.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rates_fetch::FixerClient;
use rates_repo::build_repo;
use rates_service::{RateLoader, average, historical, render_average};
use rates_types::{CurrencyCode, DateRange, DayOutcome};

#[derive(Parser)]
#[command(name = "rates")]
#[command(author, version, about = "Historical exchange-rate pipeline", long_about = None)]
struct Cli {
    /// Database URL for the local rate store
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://rates_hist.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and persist daily rates for a date range
    Load {
        /// First date of the range (YYYY-MM-DD)
        #[arg(long)]
        begin: NaiveDate,
        /// Last date of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// Base currency the quotes are expressed against
        #[arg(long, default_value = "EUR")]
        base: CurrencyCode,
    },
    /// Display the pivoted historical rate table
    History {
        /// First date of the range (YYYY-MM-DD)
        #[arg(long)]
        begin: NaiveDate,
        /// Last date of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// Base currency the quotes are expressed against
        #[arg(long, default_value = "EUR")]
        base: CurrencyCode,
    },
    /// Display the averaged rate for one currency
    Average {
        /// First date of the range (YYYY-MM-DD)
        #[arg(long)]
        begin: NaiveDate,
        /// Last date of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// Quote currency to average
        #[arg(long)]
        currency: CurrencyCode,
        /// Base currency the quotes are expressed against
        #[arg(long, default_value = "EUR")]
        base: CurrencyCode,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rates_service=debug,rates_repo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error running pipeline: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // One pool per invocation, dropped on every exit path.
    let repo = build_repo(&cli.database_url).await?;

    match cli.command {
        Commands::Load { begin, end, base } => {
            let range = DateRange::new(begin, end)?;
            // Missing credentials are fatal before the first request.
            let source = FixerClient::from_env()?;
            let loader = RateLoader::new(repo, source);

            let report = loader.load_range(range, &base).await?;

            println!("Data loaded successfully");
            println!(
                "{} day(s) loaded ({} row(s) written), {} day(s) without data",
                report.loaded_days(),
                report.rows_written(),
                report.unavailable_days()
            );
            for (day, outcome) in &report.days {
                if *outcome == DayOutcome::Unavailable {
                    println!("  no data for {day}");
                }
            }
        }

        Commands::History { begin, end, base } => {
            let range = DateRange::new(begin, end)?;
            let table = historical(&repo, range, &base).await?;
            println!("Historical Rates");
            print!("{table}");
        }

        Commands::Average {
            begin,
            end,
            currency,
            base,
        } => {
            let range = DateRange::new(begin, end)?;
            let avg = average(&repo, range, &base, &currency).await?;
            println!("Average Rates");
            print!("{}", render_average(avg.as_ref()));
        }
    }

    Ok(())
}
