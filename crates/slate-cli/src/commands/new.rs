//! New command: create a plan file.

use std::io::Write;

use anyhow::{Result, bail};

use slate_core::Strategy;

use super::util::{format_minutes, parse_wall_clock, save_plan};

pub struct NewArgs<'a> {
    pub slots: Option<usize>,
    pub start_time: Option<&'a str>,
    pub slot_duration: Option<i64>,
    pub force: bool,
}

pub fn run<W: Write>(writer: &mut W, path: &std::path::Path, args: &NewArgs<'_>) -> Result<()> {
    if path.exists() && !args.force {
        bail!(
            "plan file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let mut strategy = Strategy::empty();
    if let Some(slots) = args.slots {
        if slots == 0 {
            bail!("a plan needs at least one slot");
        }
        strategy.set_number_of_slots(slots);
    }
    if let Some(start_time) = args.start_time {
        strategy.set_start_time(parse_wall_clock(start_time)?);
    }
    if let Some(slot_duration) = args.slot_duration {
        if slot_duration < 1 {
            bail!("slot duration must be at least 1 minute");
        }
        strategy.set_slot_duration(slot_duration);
    }

    save_plan(path, &strategy)?;
    writeln!(
        writer,
        "Created {}: {} slots x {} min, {} - {}",
        path.display(),
        strategy.number_of_slots(),
        strategy.slot_duration(),
        format_minutes(strategy.start_time()),
        format_minutes(strategy.end_time()),
    )?;
    Ok(())
}
