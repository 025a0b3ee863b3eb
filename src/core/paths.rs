// src/core/paths.rs

use crate::{
    constants::{SYSTEM_CONFIG_PATH, USER_CONFIG_FILENAME},
    system::home::HomeResolver,
};
use std::path::PathBuf;

/// Returns the config files to load, in order of increasing precedence.
///
/// 1. The system-wide file (`/etc/appdo.conf`).
/// 2. The user's file (`~/.appdo.conf`), with `~` resolved through `resolver`.
///
/// If the home directory cannot be resolved, only the system-wide file is returned.
pub fn default_config_paths(resolver: &dyn HomeResolver) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG_PATH)];
    match resolver.home_dir() {
        Ok(home) => paths.push(home.join(USER_CONFIG_FILENAME)),
        Err(e) => log::warn!("Skipping user config file: {}", e),
    }
    paths
}
