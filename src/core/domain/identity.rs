//! Signing identity type.
//!
//! The four values a signing tool needs. Secret strings are wiped from
//! memory when the identity is dropped.

use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::core::constants::{self, Variable};

/// One of the three secrets that accompany a keystore path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    StorePassword,
    KeyAlias,
    KeyPassword,
}

impl CredentialField {
    /// All companion fields, in the order they are checked and reported.
    pub const ALL: [CredentialField; 3] = [
        CredentialField::StorePassword,
        CredentialField::KeyAlias,
        CredentialField::KeyPassword,
    ];

    /// Environment variable carrying this field.
    pub fn variable(self) -> Variable {
        match self {
            CredentialField::StorePassword => constants::STORE_PASSWORD,
            CredentialField::KeyAlias => constants::KEY_ALIAS,
            CredentialField::KeyPassword => constants::KEY_PASSWORD,
        }
    }

    /// Human label used in rejection reasons.
    pub fn label(self) -> &'static str {
        match self {
            CredentialField::StorePassword => "store password",
            CredentialField::KeyAlias => "key alias",
            CredentialField::KeyPassword => "key password",
        }
    }
}

impl std::fmt::Display for CredentialField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A fully populated release-signing identity.
///
/// Deliberately not `Clone`: it is handed to the signing step and dropped.
#[derive(PartialEq, Eq)]
pub struct SigningIdentity {
    keystore: PathBuf,
    store_password: Zeroizing<String>,
    key_alias: Zeroizing<String>,
    key_password: Zeroizing<String>,
}

impl SigningIdentity {
    pub fn new(
        keystore: impl Into<PathBuf>,
        store_password: impl Into<String>,
        key_alias: impl Into<String>,
        key_password: impl Into<String>,
    ) -> Self {
        Self {
            keystore: keystore.into(),
            store_password: Zeroizing::new(store_password.into()),
            key_alias: Zeroizing::new(key_alias.into()),
            key_password: Zeroizing::new(key_password.into()),
        }
    }

    /// Keystore file location, exactly as given in the environment.
    pub fn keystore(&self) -> &Path {
        &self.keystore
    }

    pub fn store_password(&self) -> &str {
        &self.store_password
    }

    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    pub fn key_password(&self) -> &str {
        &self.key_password
    }

    /// Value of one companion field.
    pub fn field(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::StorePassword => self.store_password(),
            CredentialField::KeyAlias => self.key_alias(),
            CredentialField::KeyPassword => self.key_password(),
        }
    }
}

impl std::fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("keystore", &"<redacted>")
            .field("store_password", &"<redacted>")
            .field("key_alias", &"<redacted>")
            .field("key_password", &"<redacted>")
            .finish()
    }
}
