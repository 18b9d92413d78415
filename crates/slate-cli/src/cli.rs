//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Day planner.
///
/// Edits a plan file: a day split into uniform time slots, each optionally
/// assigned a named, colored activity.
#[derive(Debug, Parser)]
#[command(name = "slate", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the plan file (overrides the configured location).
    #[arg(short, long, global = true)]
    pub plan: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new plan file.
    New {
        /// Number of slots.
        #[arg(long)]
        slots: Option<usize>,

        /// Schedule start as wall-clock time (e.g. 06:00).
        #[arg(long, value_name = "HH:MM")]
        start_time: Option<String>,

        /// Slot duration in minutes.
        #[arg(long, value_name = "MIN")]
        slot_duration: Option<i64>,

        /// Overwrite an existing plan file.
        #[arg(long)]
        force: bool,
    },

    /// Print the plan.
    Show {
        /// Show the run-length group view instead of per-slot rows.
        #[arg(long)]
        groups: bool,

        /// Show raw per-slot start times in minutes.
        #[arg(long)]
        times: bool,
    },

    /// Assign an activity to a slot range.
    Assign {
        /// Activity name; must be registered unless --color is given.
        activity: String,

        /// First slot index.
        from: usize,

        /// Last slot index (inclusive); defaults to FROM.
        to: Option<usize>,

        /// Register the activity with this color if it is unknown.
        #[arg(long, value_name = "HEX")]
        color: Option<String>,
    },

    /// Clear a slot range.
    Clear {
        /// First slot index.
        from: usize,

        /// Last slot index (inclusive); defaults to FROM.
        to: Option<usize>,
    },

    /// Paint the slot at FROM across the range to TO (either direction).
    Fill {
        /// Anchor slot index; its value is painted.
        from: usize,

        /// Other end of the range (inclusive).
        to: usize,
    },

    /// Manage the activity palette.
    Activity {
        #[command(subcommand)]
        action: ActivityAction,
    },

    /// Change the number of slots (pad or truncate at the tail).
    Resize {
        /// New slot count.
        slots: usize,
    },

    /// Move the schedule's start time.
    SetStartTime {
        /// Wall-clock time, e.g. 06:00.
        #[arg(value_name = "HH:MM")]
        time: String,
    },

    /// Change the per-slot duration.
    SetSlotDuration {
        /// Duration in minutes.
        #[arg(value_name = "MIN")]
        minutes: i64,
    },
}

/// Activity palette operations.
#[derive(Debug, Subcommand)]
pub enum ActivityAction {
    /// Register an activity.
    Add {
        /// Activity name.
        name: String,

        /// Hex color, e.g. "#2d61a3".
        color: String,
    },

    /// Rename an activity (and optionally recolor it) everywhere.
    Rename {
        /// Current name.
        from: String,

        /// New name.
        to: String,

        /// New hex color; keeps the current one if omitted.
        #[arg(long, value_name = "HEX")]
        color: Option<String>,
    },

    /// Unregister an activity and clear its slots.
    Remove {
        /// Activity name.
        name: String,
    },

    /// List registered activities.
    List,
}
