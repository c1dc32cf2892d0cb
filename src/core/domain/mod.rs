//! Domain types.

mod identity;
mod outcome;
mod snapshot;

pub use identity::{CredentialField, SigningIdentity};
pub use outcome::{MissingField, Outcome, Rejection};
pub use snapshot::EnvSnapshot;
