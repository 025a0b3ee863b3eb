// src/system/launcher.rs

use std::io::ErrorKind;
use std::os::unix::process::CommandExt;
use std::process::Command;
use thiserror::Error;

/// Errors raised when the final command cannot be started.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The argv was empty.
    #[error("No program specified to launch.")]
    EmptyArgv,
    /// The OS refused to execute the program.
    #[error("Program '{program}' could not be executed: {source}")]
    Exec {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// The exit status a shell would report for this failure.
    ///
    /// `127` when the program was not found, `126` when it was found but could not run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exec { source, .. } if source.kind() == ErrorKind::NotFound => 127,
            Self::EmptyArgv | Self::Exec { .. } => 126,
        }
    }
}

/// Hands a final argv over to the operating system.
pub trait Launcher {
    /// Launches `argv`. Implementations that replace the process only return on failure.
    fn launch(&self, argv: &[String]) -> LaunchError;
}

/// Replaces the current process image with `argv` (searched in `PATH`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecLauncher;

impl Launcher for ExecLauncher {
    fn launch(&self, argv: &[String]) -> LaunchError {
        let Some((program, args)) = argv.split_first() else {
            return LaunchError::EmptyArgv;
        };
        log::debug!("Replacing process with: {:?}", argv);
        // `exec` only returns if the replacement failed.
        let source = Command::new(program).args(args).exec();
        LaunchError::Exec {
            program: program.clone(),
            source,
        }
    }
}
