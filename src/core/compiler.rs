//! # Command Compiler
//!
//! Turns the user's command tokens and a profile's [`StatementSet`] into a single
//! `bash -c` invocation:
//!
//! ```text
//! <beforerun>; <beforerun>; <prerun> <prerun> <command tokens...>
//! ```
//!
//! No quoting or escaping is applied. Fragments are concatenated as written.
use crate::{
    constants::{SHELL_COMMAND_FLAG, SHELL_PROGRAM},
    models::StatementSet,
    system::launcher::{LaunchError, Launcher},
};
use thiserror::Error;

/// Errors raised while building a command line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CompileError {
    /// Nothing to run.
    #[error("No command specified to run.")]
    EmptyCommand,
    /// A single-string command had unbalanced quotes or a dangling escape.
    #[error("Command could not be parsed: {0}")]
    CommandParse(String),
}

/// A command ready to be compiled into a shell invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCompiler {
    command: Vec<String>,
    statements: StatementSet,
}

impl CommandCompiler {
    /// Creates a compiler for `raw_args`.
    ///
    /// A single argument is split with shell word-splitting rules, so `"ls -la"`
    /// and `ls -la` compile identically. Several arguments are taken as already split.
    ///
    /// # Errors
    ///
    /// [`CompileError::EmptyCommand`] if there are no tokens to run, and
    /// [`CompileError::CommandParse`] if a single argument cannot be split.
    pub fn new(raw_args: &[String], statements: StatementSet) -> Result<Self, CompileError> {
        let command = match raw_args {
            [] => return Err(CompileError::EmptyCommand),
            [single] => shlex::split(single)
                .ok_or_else(|| CompileError::CommandParse(single.clone()))?,
            many => many.to_vec(),
        };
        if command.is_empty() {
            return Err(CompileError::EmptyCommand);
        }
        Ok(Self {
            command,
            statements,
        })
    }

    /// The tokens of the user's command, after splitting.
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// `cd x; source y; ` or an empty string.
    pub fn build_beforerun_segment(&self) -> String {
        if self.statements.beforerun.is_empty() {
            return String::new();
        }
        format!("{}; ", self.statements.beforerun.join("; "))
    }

    /// `A=1 B=2 prefix  ` or an empty string.
    pub fn build_prerun_segment(&self) -> String {
        if self.statements.prerun.is_empty() {
            return String::new();
        }
        format!("{} ", self.statements.prerun.join(" "))
    }

    /// The command tokens joined by single spaces.
    pub fn build_final_segment(&self) -> String {
        self.command.join(" ")
    }

    /// Returns the full argv: `["bash", "-c", "<line>"]`.
    pub fn compile(&self) -> Vec<String> {
        let line = format!(
            "{}{}{}",
            self.build_beforerun_segment(),
            self.build_prerun_segment(),
            self.build_final_segment()
        );
        vec![
            SHELL_PROGRAM.to_string(),
            SHELL_COMMAND_FLAG.to_string(),
            line,
        ]
    }

    /// Compiles the command and hands it to `launcher`.
    ///
    /// With a process-replacing launcher this only returns on failure.
    pub fn run(&self, launcher: &dyn Launcher) -> LaunchError {
        let argv = self.compile();
        log::debug!("Compiled command line: {:?}", argv);
        launcher.launch(&argv)
    }
}
