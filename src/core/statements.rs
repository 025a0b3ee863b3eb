//! # Statement Derivation
//!
//! Translates the fields of a [`Profile`] into shell fragments. Each function
//! returns `None` when its field is unset or has the wrong shape, so callers can
//! treat "absent" and "malformed" alike: neither contributes a statement.

use crate::models::{Profile, Runnable, StatementSet};

/// `cd = "dir"` becomes `cd dir`.
pub fn cd_statement(profile: &Profile) -> Option<Vec<String>> {
    let dir = profile.cd.as_ref()?.as_str()?;
    Some(vec![format!("cd {}", dir)])
}

/// `source` becomes one `source <file>` statement per file, in list order.
pub fn source_statements(profile: &Profile) -> Option<Vec<String>> {
    let files = Runnable::from_value(profile.source.as_ref()?)?;
    Some(
        files
            .to_strings()
            .iter()
            .map(|file| format!("source {}", file))
            .collect(),
    )
}

/// `before` statements are taken verbatim.
pub fn before_statements(profile: &Profile) -> Option<Vec<String>> {
    Runnable::from_value(profile.before.as_ref()?).map(Runnable::to_strings)
}

/// `env` entries become `KEY=VALUE` tokens in the order they appear in the table.
///
/// Scalars other than strings (integers, floats, booleans) are rendered with
/// their TOML representation. Arrays, tables and datetimes have no sensible
/// single-token form and are skipped.
pub fn env_statements(profile: &Profile) -> Option<Vec<String>> {
    let table = profile.env.as_ref()?.as_table()?;
    let assignments = table
        .iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    log::debug!(
                        "Skipping env entry '{}': unsupported value type '{}'.",
                        key,
                        other.type_str()
                    );
                    return None;
                }
            };
            Some(format!("{}={}", key, rendered))
        })
        .collect();
    Some(assignments)
}

/// `prefix = "nice"` becomes `nice ` (the trailing space is part of the fragment).
pub fn prefix_statement(profile: &Profile) -> Option<Vec<String>> {
    let prefix = profile.prefix.as_ref()?.as_str()?;
    Some(vec![format!("{} ", prefix)])
}

/// Derives the full [`StatementSet`] for a profile.
///
/// `beforerun` is `cd`, then `source`, then `before`.
/// `prerun` is `env`, then `prefix`.
pub fn derive_statements(profile: &Profile) -> StatementSet {
    let beforerun = [
        cd_statement(profile),
        source_statements(profile),
        before_statements(profile),
    ]
    .into_iter()
    .flatten()
    .flatten()
    .collect();

    let prerun = [env_statements(profile), prefix_statement(profile)]
        .into_iter()
        .flatten()
        .flatten()
        .collect();

    StatementSet { beforerun, prerun }
}
