//! Day planner CLI library.
//!
//! This crate provides the CLI interface for the slate day planner.

mod cli;
pub mod commands;
mod config;

pub use cli::{ActivityAction, Cli, Commands};
pub use config::Config;
