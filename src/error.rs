//! Error types.
//!
//! A missing keystore on a developer machine is not an error; it is the
//! `Unsigned` outcome. Errors here are the conditions that stop a command.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::domain::Rejection;

/// Errors surfaced by keyward commands.
#[derive(Error, Debug)]
pub enum Error {
    /// The resolver refused to produce an identity.
    #[error("release signing rejected: {0}")]
    Rejected(#[from] Rejection),

    /// An env file given on the command line could not be read.
    #[error("failed to read env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no command specified")]
    NoCommand,

    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
