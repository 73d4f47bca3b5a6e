mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use roomcal_core::config::{RoomcalConfig, expand_tilde};
use roomcal_core::{BookingFile, Locale};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roomcal")]
#[command(about = "Browse room bookings in a month calendar")]
struct Cli {
    /// Read bookings from this file instead of the configured one
    #[arg(long, global = true)]
    bookings: Option<PathBuf>,

    /// Language for month and weekday names (en, nb)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one month
    Show {
        /// Year to show (defaults to the current year)
        #[arg(long, allow_negative_numbers = true)]
        year: Option<i32>,

        /// Month to show, 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<i32>,

        /// Only show bookings for this resource
        #[arg(short, long)]
        resource: Option<String>,

        /// Print the month as JSON
        #[arg(long)]
        json: bool,
    },
    /// Step through months interactively
    Browse {
        /// Only show bookings for this resource
        #[arg(short, long)]
        resource: Option<String>,
    },
    /// Show config and bookings file locations
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = RoomcalConfig::load()?;

    let locale = cli.locale.unwrap_or(config.locale);
    let source = match &cli.bookings {
        Some(path) => BookingFile::new(expand_tilde(path)),
        None => config.booking_source()?,
    };
    tracing::debug!(bookings = %source.path().display(), %locale, "resolved options");

    match cli.command {
        Commands::Show {
            year,
            month,
            resource,
            json,
        } => {
            let resource = resource.or_else(|| config.default_resource.clone());
            commands::show::run(&source, year, month, resource, locale, json)
        }
        Commands::Browse { resource } => {
            let resource = resource.or_else(|| config.default_resource.clone());
            commands::browse::run(&source, resource, locale)
        }
        Commands::Config => commands::config::run(&config, &source, locale),
    }
}
