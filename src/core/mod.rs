// src/core/mod.rs

pub mod compiler;
pub mod config_store;
pub mod paths;
pub mod statements;
