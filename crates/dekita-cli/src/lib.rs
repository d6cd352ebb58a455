//! Dekita CLI library.
//!
//! This crate provides the core functionality for the `dekita-assets`
//! binary: config loading, logging setup, and the asset commands.

pub mod commands;
pub mod input;
pub mod logging;
