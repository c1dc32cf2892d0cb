//! Environment snapshot.
//!
//! An immutable copy of environment variables taken at resolution time.
//! Values may be secrets, so nothing here ever prints them.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::core::constants::Variable;
use crate::error::{Error, Result};

/// Immutable mapping from variable name to value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Copy the current process environment.
    ///
    /// Entries whose name or value is not valid UTF-8 are skipped. Each call
    /// takes a fresh copy; snapshots are never cached.
    pub fn capture() -> Self {
        let vars: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        debug!(count = vars.len(), "captured process environment");
        Self { vars }
    }

    /// Build a snapshot from explicit pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a dotenv-style file.
    ///
    /// Skips blank lines and `#` comments, accepts an optional `export `
    /// prefix, and strips single or double quotes around values. Lines
    /// without `=` are ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::EnvFile` if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::EnvFile {
            path: path.to_path_buf(),
            source,
        })?;

        let snapshot = Self::parse(&contents);
        debug!(path = %path.display(), count = snapshot.len(), "loaded env file");
        Ok(snapshot)
    }

    fn parse(contents: &str) -> Self {
        let mut vars = BTreeMap::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                vars.insert(key.to_string(), parse_value(value.trim()));
            }
        }

        Self { vars }
    }

    /// New snapshot with `other`'s entries layered on top of this one.
    pub fn overlay(&self, other: &EnvSnapshot) -> Self {
        let mut vars = self.vars.clone();
        vars.extend(other.vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { vars }
    }

    /// Value of a variable, if present (possibly empty).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value of a variable, treating an empty string as absent.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Look up a credential variable under either of its names.
    ///
    /// Returns the name that was read and its value. The primary name wins
    /// whenever it is present, so an empty primary shadows the fallback.
    pub fn lookup(&self, variable: Variable) -> Option<(&'static str, &str)> {
        variable
            .names()
            .into_iter()
            .find_map(|name| self.get(name).map(|value| (name, value)))
    }

    /// Whether the variable is present at all, even with an empty value.
    pub fn is_present(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Variable names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// All entries. Callers must not log the values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl std::fmt::Debug for EnvSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvSnapshot")
            .field("keys", &self.vars.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn parse_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape_double_quoted(&raw[1..raw.len() - 1]);
    }

    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }

    raw.to_string()
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
