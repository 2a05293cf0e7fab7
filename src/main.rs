//! Seedspace - provision a Docker Space on the Hugging Face Hub.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use seedspace::cli::output;
use seedspace::cli::{execute, Cli};
use seedspace::error::{ConfigError, Error, HubError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SEEDSPACE_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("seedspace=debug")
        } else {
            EnvFilter::new("seedspace=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(&cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::EmptyToken) => Some("pass --token or set HF_TOKEN"),
            Error::Config(ConfigError::MissingIdentity) | Error::Hub(HubError::Unauthorized) => {
                Some("check the token is valid and has write access")
            }
            Error::Hub(HubError::AlreadyExists(_)) => Some("run again to pick another name"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
