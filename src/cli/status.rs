//! Status command.
//!
//! Shows which signing variables are present so a misconfigured pipeline can
//! be diagnosed without printing a single secret.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cli::output;
use crate::core::constants;
use crate::core::domain::EnvSnapshot;
use crate::core::resolver::{self, FsProbe, KeystoreProbe, ObservedProbe};
use crate::error::Result;

/// Presence of one variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableState {
    Set,
    Empty,
    Unset,
}

impl VariableState {
    pub fn of(env: &EnvSnapshot, key: &str) -> Self {
        match env.get(key) {
            Some("") => VariableState::Empty,
            Some(_) => VariableState::Set,
            None => VariableState::Unset,
        }
    }
}

impl std::fmt::Display for VariableState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            VariableState::Set => "set",
            VariableState::Empty => "empty",
            VariableState::Unset => "unset",
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// State of every name the resolver may read.
    pub variables: BTreeMap<&'static str, VariableState>,
    /// For each credential, keyed by its primary name, the name actually read.
    pub sources: BTreeMap<&'static str, Option<&'static str>>,
    pub keystore_exists: bool,
    pub ci: bool,
    pub outcome: &'static str,
}

impl StatusReport {
    pub fn collect(env: &EnvSnapshot) -> Self {
        Self::collect_with(env, FsProbe)
    }

    /// Build the report with one probe shared between the keystore line and
    /// the outcome, so the two always agree.
    pub fn collect_with(env: &EnvSnapshot, probe: impl KeystoreProbe) -> Self {
        let variables = constants::ALL_VARIABLES
            .iter()
            .map(|&name| (name, VariableState::of(env, name)))
            .collect();

        let sources = constants::CREDENTIAL_VARIABLES
            .iter()
            .map(|variable| (variable.primary, env.lookup(*variable).map(|(name, _)| name)))
            .collect();

        let probe = ObservedProbe::new(probe);
        let outcome = resolver::resolve_with(env, &probe).status();

        Self {
            variables,
            sources,
            keystore_exists: probe.seen().unwrap_or(false),
            ci: env.is_present(constants::CI),
            outcome,
        }
    }
}

/// Show signing status.
pub fn execute(env: &EnvSnapshot, json: bool) -> Result<()> {
    let report = StatusReport::collect(env);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::header("Signing Status");
    for variable in constants::CREDENTIAL_VARIABLES {
        match report.sources[variable.primary] {
            Some(name) => output::kv(name, report.variables[name]),
            None => output::kv(variable.primary, VariableState::Unset),
        }
    }
    output::kv(constants::CI, report.variables[constants::CI]);
    output::kv("keystore file", if report.keystore_exists { "found" } else { "not found" });
    output::kv("context", if report.ci { "ci" } else { "local" });
    output::kv("outcome", report.outcome);

    Ok(())
}
