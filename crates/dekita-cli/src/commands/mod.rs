//! CLI command implementations

pub mod all;
pub mod config;
pub mod feature_graphic;
pub mod generate;
pub mod icon;
pub mod json_output;
pub mod validate;

mod reporting;
