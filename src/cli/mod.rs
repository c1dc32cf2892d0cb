//! Command-line interface.

pub mod completions;
pub mod output;
pub mod resolve;
pub mod run;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::domain::EnvSnapshot;
use crate::error::Result;

/// Keyward - fail-closed release-signing credential resolver.
#[derive(Parser)]
#[command(
    name = "keyward",
    about = "Fail-closed release-signing credential resolver",
    version,
    after_help = "Reads ANDROID_KEYSTORE_PATH, ANDROID_STORE_PASSWORD, ANDROID_KEY_ALIAS and \
                  ANDROID_KEY_PASSWORD (each falling back to the name without ANDROID_), and CI."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load variables from a dotenv file on top of the process environment
    #[arg(long = "env-file", value_name = "PATH", global = true)]
    pub env_files: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve the release signing identity and report the outcome
    Resolve {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which signing variables are set, without their values
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a build command only if release signing is not rejected
    Run {
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    match cli.command {
        Resolve { json } => {
            let (env, _) = snapshot(&cli.env_files)?;
            resolve::execute(&env, json)
        }
        Status { json } => {
            let (env, _) = snapshot(&cli.env_files)?;
            status::execute(&env, json)
        }
        Run { command } => {
            let (env, loaded) = snapshot(&cli.env_files)?;
            run::execute(&env, &loaded, &command)
        }
        Completions { shell } => completions::execute(shell),
    }
}

/// Capture the process environment and layer env files over it.
///
/// Returns the merged snapshot and the file-loaded part on its own.
fn snapshot(env_files: &[PathBuf]) -> Result<(EnvSnapshot, EnvSnapshot)> {
    let mut loaded = EnvSnapshot::default();
    for path in env_files {
        loaded = loaded.overlay(&EnvSnapshot::load(path)?);
    }

    let env = EnvSnapshot::capture().overlay(&loaded);
    Ok((env, loaded))
}
