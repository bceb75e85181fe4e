//! Subcommand handlers.  Each `execute` owns one subcommand end to end.

pub mod apply;
pub mod completions;
pub mod config;
pub mod init;
pub mod keys;
