//! Resolve command.
//!
//! The build orchestrator's entry point: exit 0 means the build may go on
//! (signed or debug-signed), exit 1 means it must stop.

use serde::Serialize;

use crate::cli::output;
use crate::core::constants;
use crate::core::domain::{EnvSnapshot, Outcome};
use crate::core::resolver;
use crate::error::{Error, Result};

/// Machine-readable outcome. Never carries credential values.
#[derive(Debug, Serialize)]
pub struct Report {
    pub status: &'static str,
    pub reason: Option<String>,
    pub ci: bool,
}

impl Report {
    pub fn new(outcome: &Outcome, ci: bool) -> Self {
        Self {
            status: outcome.status(),
            reason: outcome.rejection().map(ToString::to_string),
            ci,
        }
    }
}

/// Resolve the signing identity and print the outcome.
pub fn execute(env: &EnvSnapshot, json: bool) -> Result<()> {
    let ci = env.is_present(constants::CI);
    let outcome = resolver::resolve(env);

    if json {
        println!("{}", serde_json::to_string_pretty(&Report::new(&outcome, ci))?);
    } else {
        print_outcome(env, &outcome);
    }

    match outcome {
        Outcome::Rejected(reason) => Err(Error::Rejected(reason)),
        Outcome::Resolved(_) | Outcome::Unsigned => Ok(()),
    }
}

/// Human outcome. Names the variables read, never their values.
fn print_outcome(env: &EnvSnapshot, outcome: &Outcome) {
    match outcome {
        Outcome::Resolved(_) => {
            output::success("release identity resolved");
            if let Some((source, _)) = env.lookup(constants::KEYSTORE_PATH) {
                output::kv("keystore", format!("from {}", source));
            }
        }
        Outcome::Unsigned => {
            output::warn("no release keystore, build will be debug-signed");
        }
        // Reported by main on stderr.
        Outcome::Rejected(_) => {}
    }
}
