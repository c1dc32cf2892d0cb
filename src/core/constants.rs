//! Constants used throughout keyward.
//!
//! The variable names are the contract with the CI system that provisions
//! the secrets. Renaming one is a breaking change for every pipeline.

/// A credential variable read under its primary name or a short fallback.
///
/// The primary name wins whenever it is present, even with an empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    pub primary: &'static str,
    pub fallback: &'static str,
}

impl Variable {
    /// Both names, primary first.
    pub fn names(self) -> [&'static str; 2] {
        [self.primary, self.fallback]
    }
}

/// Path to the signing keystore file.
pub const KEYSTORE_PATH: Variable = Variable {
    primary: "ANDROID_KEYSTORE_PATH",
    fallback: "KEYSTORE_PATH",
};

/// Password protecting the keystore.
pub const STORE_PASSWORD: Variable = Variable {
    primary: "ANDROID_STORE_PASSWORD",
    fallback: "STORE_PASSWORD",
};

/// Alias of the signing key inside the keystore.
pub const KEY_ALIAS: Variable = Variable {
    primary: "ANDROID_KEY_ALIAS",
    fallback: "KEY_ALIAS",
};

/// Password protecting the signing key.
pub const KEY_PASSWORD: Variable = Variable {
    primary: "ANDROID_KEY_PASSWORD",
    fallback: "KEY_PASSWORD",
};

/// Credential variables in report order.
pub const CREDENTIAL_VARIABLES: [Variable; 4] =
    [KEYSTORE_PATH, STORE_PASSWORD, KEY_ALIAS, KEY_PASSWORD];

/// Presence (not value) marks an automated build.
pub const CI: &str = "CI";

/// Every variable name the resolver reads, in report order.
pub const ALL_VARIABLES: &[&str] = &[
    "ANDROID_KEYSTORE_PATH",
    "KEYSTORE_PATH",
    "ANDROID_STORE_PASSWORD",
    "STORE_PASSWORD",
    "ANDROID_KEY_ALIAS",
    "KEY_ALIAS",
    "ANDROID_KEY_PASSWORD",
    "KEY_PASSWORD",
    CI,
];

/// Log filter override (same syntax as `RUST_LOG`).
pub const LOG_ENV: &str = "KEYWARD_LOG";

/// Exported to child processes by `keyward run`: `release` or `debug`.
pub const SIGNING_MODE_ENV: &str = "KEYWARD_SIGNING";
