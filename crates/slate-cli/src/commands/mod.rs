//! CLI subcommand implementations.

pub mod activity;
pub mod assign;
pub mod clear;
pub mod fill;
pub mod new;
pub mod set;
pub mod show;
pub mod util;
