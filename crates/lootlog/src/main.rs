use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use dispatch::{ConfiguredCommand, ConfiguredDispatch, StandaloneCommand, StandaloneDispatch};
use lootlog_data::error::Error as RatesError;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "LOOTLOG_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// Directives come from `LOOTLOG_LOG`, then `RUST_LOG`; the default level is
/// `warn`, raised to `debug` by `--verbose` and lowered to `error` by `--quiet`.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    let filter = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!cli.no_color && std::env::var_os("NO_COLOR").is_none())
        .init();
}

async fn run(cli: &Cli) -> commands::Result<()> {
    // Standalone commands (check, category, config, completions, help) must
    // work even when the config file is broken.
    if let Some(dispatch) = StandaloneDispatch::try_from_cli(cli) {
        let ctx = CommandContext::from_cli(cli, load_config().ok().as_ref());
        return dispatch.execute(&ctx);
    }

    let config = load_config()?;
    let ctx = CommandContext::from_cli(cli, Some(&config));

    match ConfiguredDispatch::from_cli(cli) {
        Some(dispatch) => dispatch.execute(&ctx, &config).await,
        None => Err(CommandError::Config(format!(
            "unhandled command: {:?}",
            cli.command
        ))),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Store(_) => "STORE_ERROR",
        CommandError::Filter(_) => "FILTER_ERROR",
        CommandError::InvalidFilter { .. } => "INVALID_FILTER",
        CommandError::NoFilter { .. } => "NO_FILTER",
        CommandError::Rates(_) => "RATES_ERROR",
        CommandError::NoRates { .. } => "NO_RATES",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Filter(_) | CommandError::InvalidFilter { .. } => ExitCode::from(1),
        CommandError::Rates(RatesError::Api(api)) => {
            ExitCode::from(u8::try_from(api.exit_code()).unwrap_or(2))
        }
        CommandError::Rates(RatesError::Http(_)) => ExitCode::from(3),
        CommandError::Rates(RatesError::Json(_)) => ExitCode::from(2),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
        CommandError::Config(_)
        | CommandError::Store(_)
        | CommandError::NoFilter { .. }
        | CommandError::NoRates { .. } => ExitCode::from(5),
    }
}
