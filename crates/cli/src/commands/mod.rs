//! CLI subcommand implementations.

pub mod init;
pub mod seed;
pub mod stats;
