//! Run command.
//!
//! Resolves once, then either refuses to start the build or runs it with
//! `KEYWARD_SIGNING` telling it which signing mode applies.

use std::process::Command;

use tracing::debug;

use crate::core::constants;
use crate::core::domain::EnvSnapshot;
use crate::core::resolver;
use crate::error::{Error, Result};

/// Run a command gated on the signing outcome.
pub fn execute(env: &EnvSnapshot, loaded: &EnvSnapshot, command: &[String]) -> Result<()> {
    let exit_code = run_gated(env, loaded, command)?;
    std::process::exit(exit_code);
}

/// Run `command` unless signing is rejected.
///
/// `loaded` holds variables read from env files; they are passed to the
/// child since it would not otherwise inherit them.
pub fn run_gated(env: &EnvSnapshot, loaded: &EnvSnapshot, command: &[String]) -> Result<i32> {
    let (program, args) = command.split_first().ok_or(Error::NoCommand)?;

    let mode = match resolver::resolve(env).into_identity()? {
        Some(_) => "release",
        None => "debug",
    };

    let program_path =
        which::which(program).map_err(|_| Error::CommandNotFound(program.to_string()))?;
    debug!(program = %program_path.display(), mode, "starting build command");

    let status = Command::new(program_path)
        .args(args)
        .envs(loaded.iter())
        .env(constants::SIGNING_MODE_ENV, mode)
        .status()?;

    // Killed by a signal: no code available.
    Ok(status.code().unwrap_or(1))
}
