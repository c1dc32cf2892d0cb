//! Release-signing credential resolver.
//!
//! Turns an environment snapshot into an [`Outcome`]. The policy is
//! fail-closed under CI: when the `CI` variable is present, the only
//! non-rejected outcome is a fully resolved identity.
//!
//! | keystore file | companions | CI      | outcome                   |
//! |---------------|------------|---------|---------------------------|
//! | exists        | all set    | any     | `Resolved`                |
//! | exists        | some empty | any     | `Rejected(MissingFields)` |
//! | missing/unset | -          | present | `Rejected(KeystoreNotFound)` |
//! | missing/unset | -          | absent  | `Unsigned`                |
//!
//! Each credential is read as `ANDROID_<NAME>` first and `<NAME>` second.
//! Nothing about the identity is logged, the keystore path included; log
//! lines name variables only.

use std::cell::Cell;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::constants;
use crate::core::domain::{
    CredentialField, EnvSnapshot, MissingField, Outcome, Rejection, SigningIdentity,
};

/// Existence check for the keystore file.
pub trait KeystoreProbe {
    /// Whether a keystore file exists at `path`. Any failure to tell is `false`.
    fn exists(&self, path: &Path) -> bool;
}

/// Probes the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl KeystoreProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        match std::fs::metadata(path) {
            Ok(metadata) => metadata.is_file(),
            Err(e) => {
                debug!(error = %e, "keystore probe failed");
                false
            }
        }
    }
}

impl<F> KeystoreProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Wraps a probe and remembers its last answer.
///
/// Lets a caller report what the resolver saw without probing a second time.
#[derive(Debug, Default)]
pub struct ObservedProbe<P> {
    inner: P,
    seen: Cell<Option<bool>>,
}

impl<P: KeystoreProbe> ObservedProbe<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            seen: Cell::new(None),
        }
    }

    /// Last answer, or `None` if the resolver never probed.
    pub fn seen(&self) -> Option<bool> {
        self.seen.get()
    }
}

impl<P: KeystoreProbe> KeystoreProbe for ObservedProbe<P> {
    fn exists(&self, path: &Path) -> bool {
        let exists = self.inner.exists(path);
        self.seen.set(Some(exists));
        exists
    }
}

/// Resolve the signing identity against the real filesystem.
pub fn resolve(env: &EnvSnapshot) -> Outcome {
    resolve_with(env, &FsProbe)
}

/// Resolve the signing identity using `probe` for the existence check.
pub fn resolve_with(env: &EnvSnapshot, probe: &impl KeystoreProbe) -> Outcome {
    let ci = env.is_present(constants::CI);

    let keystore = env
        .lookup(constants::KEYSTORE_PATH)
        .filter(|(_, path)| !path.is_empty() && probe.exists(Path::new(path)));

    if let Some((source, keystore)) = keystore {
        debug!(variable = source, ci, "keystore found");

        let mut missing = Vec::new();
        let mut values = Vec::with_capacity(CredentialField::ALL.len());
        for field in CredentialField::ALL {
            match env.lookup(field.variable()) {
                Some((_, value)) if !value.is_empty() => values.push(value),
                Some((name, _)) => missing.push(MissingField::new(field, name)),
                None => missing.push(MissingField::new(field, field.variable().primary)),
            }
        }

        if !missing.is_empty() {
            let reason = Rejection::MissingFields(missing);
            warn!(reason = %reason, "incomplete signing identity");
            return Outcome::Rejected(reason);
        }

        return Outcome::Resolved(SigningIdentity::new(
            keystore, values[0], values[1], values[2],
        ));
    }

    if ci {
        warn!(
            variable = constants::KEYSTORE_PATH.primary,
            "keystore not found in CI context"
        );
        return Outcome::Rejected(Rejection::KeystoreNotFound);
    }

    debug!("no keystore outside CI, release will be unsigned");
    Outcome::Unsigned
}
