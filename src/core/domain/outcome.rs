//! Resolution outcome.

use super::identity::{CredentialField, SigningIdentity};
use crate::core::constants;

/// A companion secret that was empty or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField {
    pub field: CredentialField,
    /// The variable name that was read, or the primary name if neither was set.
    pub variable: &'static str,
}

impl MissingField {
    pub fn new(field: CredentialField, variable: &'static str) -> Self {
        Self { field, variable }
    }
}

/// Why a release identity was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// No usable keystore under a CI context.
    KeystoreNotFound,
    /// The keystore exists but companion secrets are empty or absent.
    MissingFields(Vec<MissingField>),
}

impl Rejection {
    /// Variables to set to clear this rejection.
    pub fn variables(&self) -> Vec<&'static str> {
        match self {
            Rejection::KeystoreNotFound => constants::KEYSTORE_PATH.names().to_vec(),
            Rejection::MissingFields(missing) => missing.iter().map(|m| m.variable).collect(),
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::KeystoreNotFound => f.write_str("keystore not found"),
            Rejection::MissingFields(missing) => {
                let labels: Vec<&str> = missing.iter().map(|m| m.field.label()).collect();
                write!(f, "{} missing", labels.join(", "))
            }
        }
    }
}

impl std::error::Error for Rejection {}

/// Result of one resolution.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Sign the release with this identity.
    Resolved(SigningIdentity),
    /// No identity and no CI context; fall back to debug signing.
    Unsigned,
    /// Stop the build.
    Rejected(Rejection),
}

impl Outcome {
    /// Short lowercase status name: `resolved`, `unsigned` or `rejected`.
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Resolved(_) => "resolved",
            Outcome::Unsigned => "unsigned",
            Outcome::Rejected(_) => "rejected",
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Outcome::Resolved(_))
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(self, Outcome::Unsigned)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// The rejection, if this outcome is one.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }

    /// Convert into the identity, treating a rejection as an error.
    ///
    /// `Ok(None)` means unsigned.
    pub fn into_identity(self) -> Result<Option<SigningIdentity>, Rejection> {
        match self {
            Outcome::Resolved(identity) => Ok(Some(identity)),
            Outcome::Unsigned => Ok(None),
            Outcome::Rejected(reason) => Err(reason),
        }
    }
}
