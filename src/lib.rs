//! Keyward - fail-closed release-signing credential resolver.
//!
//! Decides, once per release build, which keystore identity signs the
//! artifact. The decision is read from an environment snapshot and is one of
//! three outcomes: a resolved identity, an unsigned (debug) build, or a
//! rejection that must stop the pipeline.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── resolve       # Print the outcome, fail on rejection
//! │   ├── status        # Report which variables are set
//! │   ├── run           # Gate a build command on the outcome
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── constants     # Variable names (the CI wire contract)
//!     ├── domain/       # Snapshot, identity and outcome types
//!     └── resolver      # The decision itself
//! ```
//!
//! # Example
//!
//! ```no_run
//! use keyward::{resolve, EnvSnapshot, Outcome};
//!
//! let env = EnvSnapshot::capture();
//! match resolve(&env) {
//!     Outcome::Resolved(_identity) => println!("release signing"),
//!     Outcome::Unsigned => println!("debug signing"),
//!     Outcome::Rejected(reason) => eprintln!("release blocked: {}", reason),
//! }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::{
    CredentialField, EnvSnapshot, MissingField, Outcome, Rejection, SigningIdentity,
};
pub use crate::core::resolver::{resolve, resolve_with, FsProbe, KeystoreProbe};
