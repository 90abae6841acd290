pub mod cli;
pub mod config;
pub mod initializers;
pub mod subcommands;
