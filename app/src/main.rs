//! Ticket gate command line
//!
//! Evaluates a JSON purchase request against the configured rules, using
//! the logging stand-ins for payment and seat booking.
//!
//! # Usage
//!
//! ```bash
//! echo '{"account_id": 6, "tickets": [{"ticket_type": "ADULT", "quantity": 2}]}' \
//!     | cargo run --bin ticket-gate -- purchase
//!
//! cargo run --bin ticket-gate -- prices
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use ticket_gate::{build_service, Config, LoggingPaymentGateway, LoggingSeatBooking};
use ticket_gate_core::{PurchaseError, PurchaseRequest, TicketType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ticket-gate")]
#[command(about = "Validate and authorize ticket purchases")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a purchase request
    Purchase {
        /// JSON request file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        file: PathBuf,
    },
    /// Print the active price table and limits
    Prices,
}

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    ticket_gate_core::metrics::register_purchase_metrics();
    tracing::debug!(
        max_tickets = config.limits.max_tickets_per_purchase,
        policy = %config.reservation_policy,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Purchase { file } => purchase(&config, &file),
        Commands::Prices => {
            for ticket_type in TicketType::ALL {
                println!("{ticket_type:<8} {}", config.prices.price_of(ticket_type));
            }
            println!("max tickets per purchase: {}", config.limits.max_tickets_per_purchase);
            println!("reservation policy: {}", config.reservation_policy);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn purchase(config: &Config, file: &Path) -> anyhow::Result<ExitCode> {
    let raw = if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read request from {}", file.display()))?
    };
    let request: PurchaseRequest =
        serde_json::from_str(&raw).context("Purchase request is not valid JSON")?;

    let service = build_service(config, LoggingPaymentGateway::shared(), LoggingSeatBooking::shared());

    match service.purchase_tickets(&request) {
        Ok(receipt) => {
            println!("{}", serde_json::to_string_pretty(&receipt)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(PurchaseError::Invalid(reason)) => {
            eprintln!("{}: {reason}", reason.code());
            Ok(ExitCode::from(2))
        }
        Err(error) => Err(error).context("Purchase failed"),
    }
}
