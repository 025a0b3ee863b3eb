// src/system/home.rs

use std::path::PathBuf;
use thiserror::Error;
use uzers::os::unix::UserExt;

/// Errors raised while resolving the invoking user's home directory.
#[derive(Error, Debug)]
pub enum HomeError {
    /// The effective uid has no user name.
    #[error("Could not determine the current user name.")]
    UnknownUser,
    /// The user name is not in the user database.
    #[error("User '{0}' has no entry in the user database.")]
    UserNotFound(String),
}

/// Resolves the home directory whose config file should be read.
pub trait HomeResolver {
    /// Returns the home directory of the current user.
    fn home_dir(&self) -> Result<PathBuf, HomeError>;
}

/// Looks up the current user in the OS user database.
///
/// `$HOME` is not consulted: under `sudo` it may still name another user's home.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserDbHomeResolver;

impl HomeResolver for UserDbHomeResolver {
    fn home_dir(&self) -> Result<PathBuf, HomeError> {
        let name = uzers::get_effective_username().ok_or(HomeError::UnknownUser)?;
        let user = uzers::get_user_by_name(&name)
            .ok_or_else(|| HomeError::UserNotFound(name.to_string_lossy().into_owned()))?;
        Ok(user.home_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_db_resolver_finds_current_user() {
        // Sandboxed runners may execute under a uid with no passwd entry.
        let Some(expected) = uzers::get_user_by_uid(uzers::get_effective_uid()) else {
            return;
        };
        let home = UserDbHomeResolver.home_dir().unwrap();
        assert_eq!(home, expected.home_dir());
    }
}
