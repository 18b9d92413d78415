//! Shared helpers for command implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Timelike;

use slate_core::{Minutes, Strategy};

/// Parses a wall-clock `HH:MM` string into minutes past midnight.
pub fn parse_wall_clock(value: &str) -> Result<Minutes> {
    let time = chrono::NaiveTime::parse_from_str(value, "%H:%M")
        .with_context(|| format!("invalid time {value:?}, expected HH:MM"))?;
    Ok(Minutes::from(time.hour()) * 60 + Minutes::from(time.minute()))
}

/// Renders minutes past midnight as `HH:MM`.
///
/// Not clamped to one day: a schedule ending past midnight renders as
/// e.g. `25:30`.
pub fn format_minutes(minutes: Minutes) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Loads the plan file, with a friendly error for a missing one.
pub fn load_plan(path: &Path) -> Result<Strategy> {
    if !path.exists() {
        bail!(
            "no plan file at {}; create one with `slate new`",
            path.display()
        );
    }
    slate_store::load(path).with_context(|| format!("failed to load {}", path.display()))
}

/// Saves the plan file, creating its parent directory if needed.
pub fn save_plan(path: &Path, strategy: &Strategy) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    slate_store::save(path, strategy).with_context(|| format!("failed to save {}", path.display()))
}

/// Rejects slot indices past the end of the schedule.
pub fn check_slot_index(strategy: &Strategy, index: usize) -> Result<()> {
    if index >= strategy.number_of_slots() {
        bail!(
            "slot index {index} out of range (plan has {} slots)",
            strategy.number_of_slots()
        );
    }
    Ok(())
}

/// Finds a registered activity by name.
pub fn find_activity_by_name(strategy: &Strategy, name: &str) -> Option<slate_core::Activity> {
    strategy
        .activities()
        .find(|activity| activity.name() == name)
        .cloned()
}
