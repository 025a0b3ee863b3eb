// src/constants.rs

/// The system-wide configuration file, searched first.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/appdo.conf";

/// The per-user configuration file name, resolved against the user's home directory.
/// Searched after the system-wide file, so it takes precedence.
pub const USER_CONFIG_FILENAME: &str = ".appdo.conf";

/// The profile used when `--app` is not given.
pub const DEFAULT_APP: &str = "default";

/// The shell every compiled command line is handed to.
pub const SHELL_PROGRAM: &str = "bash";

/// The flag that makes [`SHELL_PROGRAM`] read its commands from the next argument.
pub const SHELL_COMMAND_FLAG: &str = "-c";
