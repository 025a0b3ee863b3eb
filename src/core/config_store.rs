//! # Config Store
//!
//! This module provides the `ConfigStore` struct, which loads zero or more TOML
//! configuration files and merges them into a single tree keyed by profile name.
//!
//! ## Merge policy
//!
//! Merging is a shallow overwrite of top-level keys: the last file to define a key
//! wins, and a profile defined in a later file replaces the earlier profile of the
//! same name entirely. Nested tables are never merged.
use crate::{
    core::statements,
    models::{Profile, StatementSet},
};
use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while loading configuration files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An existing file could not be read.
    #[error("Could not read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An existing file is not valid TOML.
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The merged configuration tree for a single invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    tree: toml::Table,
}

impl ConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from an already-parsed tree.
    pub fn from_table(tree: toml::Table) -> Self {
        Self { tree }
    }

    /// Loads and merges every existing file in `paths`, in order.
    ///
    /// Paths that do not exist are skipped. Later paths take precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for the first file that is not valid TOML,
    /// or [`ConfigError::Read`] if an existing file cannot be read.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, ConfigError> {
        let mut store = Self::new();
        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                log::debug!("Config file '{}' not found, skipping.", path.display());
                continue;
            }
            store.merge_file(path)?;
        }
        Ok(store)
    }

    /// Parses a single file and merges it into the store.
    pub fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let table: toml::Table = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!(
            "Merging config file '{}' ({} top-level keys).",
            path.display(),
            table.len()
        );
        self.merge(table);
        Ok(())
    }

    /// Merges a tree into the store by overwriting top-level keys.
    pub fn merge(&mut self, table: toml::Table) {
        for (key, value) in table {
            self.tree.insert(key, value);
        }
    }

    /// Returns the names of all profiles, i.e. top-level keys holding a table.
    pub fn profile_names(&self) -> BTreeSet<String> {
        self.tree
            .iter()
            .filter(|(_, value)| value.is_table())
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Returns the profile named `name`, or `None` if there is no such table.
    pub fn profile(&self, name: &str) -> Option<Profile> {
        let value = self.tree.get(name).filter(|value| value.is_table())?;
        match value.clone().try_into::<Profile>() {
            Ok(profile) => Some(profile),
            Err(e) => {
                // Every profile field is lenient, so this should not happen.
                log::warn!("Ignoring profile '{}': {}", name, e);
                None
            }
        }
    }

    /// Derives the statements for the profile named `name`.
    ///
    /// An unknown profile is not an error: it contributes no statements.
    pub fn statements_for(&self, name: &str) -> StatementSet {
        match self.profile(name) {
            Some(profile) => statements::derive_statements(&profile),
            None => {
                log::debug!("No profile named '{}', running without context.", name);
                StatementSet::default()
            }
        }
    }
}
