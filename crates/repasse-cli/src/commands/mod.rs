//! Subcommand implementations.

pub mod audit;
pub mod quiz;
pub mod status;
