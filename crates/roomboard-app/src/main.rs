//! roomboard CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use clap::Parser;

use roomboard_api::{AvailabilityProvider, HttpAvailabilityClient};
use roomboard_core::{BookingFormatter, TracingConfig, init_tracing};

use roomboard_app::cli::{Cli, Command, ConfigAction};
use roomboard_app::commands;
use roomboard_app::config::AppConfig;
use roomboard_app::error::{AppError, AppResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = if cli.debug {
        TracingConfig::debug()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path).map_err(AppError::Config)?
    } else {
        AppConfig::load().unwrap_or_default()
    };

    let base_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.server.base_url.clone());
    let timeout = Duration::from_secs(config.server.timeout);
    let formatter = BookingFormatter::new(config.display.format_options());
    let viewed = cli.date.map_or_else(Local::now, viewed_from);

    match cli.command {
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Path => commands::config::path(),
        },
        Some(Command::Message { ref id }) => {
            let client = HttpAvailabilityClient::new(&base_url, timeout)?;
            commands::message::run(&client, id).await
        }
        Some(Command::Watch) => {
            let provider: Arc<dyn AvailabilityProvider> =
                Arc::new(HttpAvailabilityClient::new(&base_url, timeout)?);
            commands::watch::run(provider, formatter, viewed).await
        }
        None => {
            let provider: Arc<dyn AvailabilityProvider> =
                Arc::new(HttpAvailabilityClient::new(&base_url, timeout)?);
            commands::board::run(provider, formatter, viewed, cli.output_format()).await
        }
    }
}

/// Anchors an explicit date at noon so day-stepping is immune to DST
/// boundaries.
fn viewed_from(date: NaiveDate) -> DateTime<Local> {
    Local
        .from_local_datetime(&date.and_hms_opt(12, 0, 0).expect("valid time"))
        .single()
        .expect("unambiguous local time")
}
