//! # appdo
//!
//! Runs a command inside an application context described by layered TOML
//! profiles. The pipeline is:
//!
//! 1. [`core::config_store::ConfigStore`] merges the config files.
//! 2. [`core::statements`] derives the shell fragments for a profile.
//! 3. [`core::compiler::CommandCompiler`] composes them with the user's command
//!    into `bash -c <line>` and hands it to a [`system::launcher::Launcher`].

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
