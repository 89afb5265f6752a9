// Handlers for the CLI subcommands.
//
// main.rs parses arguments and resolves the configuration; each module here
// turns that into output for one subcommand.

pub mod compute;
pub mod recipes;
pub mod surface;
