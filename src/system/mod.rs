//! # System Interaction Layer
//!
//! The boundary between the compilation pipeline and the operating system.
//!
//! ## Modules
//!
//! - **`home`**: Resolves the invoking user's home directory from the OS user
//!   database, behind the `HomeResolver` trait.
//! - **`launcher`**: Replaces the current process with the compiled command,
//!   behind the `Launcher` trait so the pipeline can be tested without exec.

pub mod home;
pub mod launcher;
