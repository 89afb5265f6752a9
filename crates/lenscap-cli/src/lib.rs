//! lenscap CLI library.
//!
//! Argument types, subcommand handlers, terminal styling and output
//! formatting for the capacity model command-line interface.

pub mod args;
pub mod commands;
pub mod output;
pub mod terminal;
