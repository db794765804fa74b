//! CLI subcommand implementations.

pub mod preview;
pub mod validate;
