//! Activity command: manage the plan's activity palette.

use std::io::Write;
use std::path::Path;

use anyhow::{Result, bail};

use slate_core::{Activity, Color};

use super::util::{find_activity_by_name, load_plan, save_plan};

pub fn add<W: Write>(writer: &mut W, path: &Path, name: &str, color: &str) -> Result<()> {
    let mut strategy = load_plan(path)?;
    let activity = Activity::new(name, Color::new(color)?)?;

    if strategy.has_activity(&activity) {
        writeln!(writer, "{name} is already registered")?;
        return Ok(());
    }

    strategy.append_activity(activity);
    save_plan(path, &strategy)?;
    writeln!(writer, "Added {name} ({color})")?;
    Ok(())
}

pub fn rename<W: Write>(
    writer: &mut W,
    path: &Path,
    from: &str,
    to: &str,
    color: Option<&str>,
) -> Result<()> {
    let mut strategy = load_plan(path)?;

    let Some(current) = find_activity_by_name(&strategy, from) else {
        bail!("unknown activity {from:?}");
    };
    let new_color = match color {
        Some(hex) => Color::new(hex)?,
        None => current.color().clone(),
    };
    let replacement = Activity::new(to, new_color)?;
    if strategy.has_activity(&replacement) {
        bail!("an identical activity {to:?} already exists");
    }

    strategy.edit_activity(&current, replacement);
    save_plan(path, &strategy)?;
    writeln!(writer, "Renamed {from} to {to}")?;
    Ok(())
}

pub fn remove<W: Write>(writer: &mut W, path: &Path, name: &str) -> Result<()> {
    let mut strategy = load_plan(path)?;

    let Some(activity) = find_activity_by_name(&strategy, name) else {
        bail!("unknown activity {name:?}");
    };
    let assigned = strategy
        .slots()
        .iter()
        .filter(|slot| slot.as_ref() == Some(&activity))
        .count();

    strategy.remove_activity(&activity);
    save_plan(path, &strategy)?;
    writeln!(writer, "Removed {name} ({assigned} slots cleared)")?;
    Ok(())
}

pub fn list<W: Write>(writer: &mut W, path: &Path) -> Result<()> {
    let strategy = load_plan(path)?;

    if strategy.activities().count() == 0 {
        writeln!(writer, "No activities registered")?;
        return Ok(());
    }
    for (index, activity) in strategy.activities().enumerate() {
        writeln!(writer, "{index:>3}  {activity}")?;
    }
    Ok(())
}
