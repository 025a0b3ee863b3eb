// src/models.rs

use serde::Deserialize;

// --- PROFILE MODELS (FOR TOML) ---
// These are what the user writes under a `[profile]` table in appdo.conf.
// Fields are kept as raw TOML values so their type survives until the shape
// check: a value of the wrong shape never fails deserialization, it simply
// contributes nothing.

/// A field value that is either a single string or a list of strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Runnable<'a> {
    /// `source = "a.sh"`
    Single(&'a str),
    /// `source = ["a.sh", "b.sh"]`
    Sequence(&'a [toml::Value]),
}

impl<'a> Runnable<'a> {
    /// Views `value` as a string or a list of strings.
    ///
    /// Returns `None` for any other shape, including a list holding a non-string.
    pub fn from_value(value: &'a toml::Value) -> Option<Self> {
        match value {
            toml::Value::String(s) => Some(Self::Single(s.as_str())),
            toml::Value::Array(items) if items.iter().all(toml::Value::is_str) => {
                Some(Self::Sequence(items.as_slice()))
            }
            _ => None,
        }
    }

    /// The strings in order.
    pub fn to_strings(self) -> Vec<String> {
        match self {
            Self::Single(s) => vec![s.to_string()],
            Self::Sequence(items) => items
                .iter()
                .filter_map(toml::Value::as_str)
                .map(str::to_string)
                .collect(),
        }
    }
}

/// An application profile: one top-level table of the configuration tree.
///
/// Keys other than the ones below are ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Profile {
    /// Directory to change into before anything else runs. Expected: string.
    pub cd: Option<toml::Value>,
    /// File(s) to `source`, in order. Expected: string or list of strings.
    pub source: Option<toml::Value>,
    /// Literal statement(s) run as-is after `cd` and `source`. Expected: string or list of strings.
    pub before: Option<toml::Value>,
    /// Environment assignments inlined in front of the command. Expected: table.
    pub env: Option<toml::Value>,
    /// A phrase prepended to the command, e.g. `nice -n 10`. Expected: string.
    pub prefix: Option<toml::Value>,
}

// --- COMPILED STATEMENTS ---

/// The shell fragments derived from a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementSet {
    /// Full statements executed in sequence before the command (`cd`, `source`, `before`).
    pub beforerun: Vec<String>,
    /// Tokens inlined right before the command on the same statement (`env`, `prefix`).
    pub prerun: Vec<String>,
}

impl StatementSet {
    /// Returns `true` if neither sequence contributes anything.
    pub fn is_empty(&self) -> bool {
        self.beforerun.is_empty() && self.prerun.is_empty()
    }
}
