//! Keyward - fail-closed release-signing credential resolver.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keyward::cli::output;
use keyward::cli::{execute, Cli};
use keyward::core::constants;
use keyward::error::Error;
use keyward::Rejection;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keyward=debug")
        } else {
            EnvFilter::new("keyward=warn")
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

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Rejected(rejection @ Rejection::KeystoreNotFound) => Some(format!(
                "set {} to an existing keystore file",
                rejection.variables().join(" or ")
            )),
            Error::Rejected(rejection @ Rejection::MissingFields(_)) => {
                Some(format!("set {}", rejection.variables().join(", ")))
            }
            Error::CommandNotFound(_) => Some("check that the program is on PATH".to_string()),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
