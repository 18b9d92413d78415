//! Set commands: resize, start time, slot duration.

use std::io::Write;
use std::path::Path;

use anyhow::{Result, bail};

use super::util::{format_minutes, load_plan, parse_wall_clock, save_plan};

pub fn resize<W: Write>(writer: &mut W, path: &Path, slots: usize) -> Result<()> {
    if slots == 0 {
        bail!("a plan needs at least one slot");
    }
    let mut strategy = load_plan(path)?;
    let previous = strategy.number_of_slots();

    strategy.set_number_of_slots(slots);
    save_plan(path, &strategy)?;
    writeln!(writer, "Resized plan from {previous} to {slots} slots")?;
    Ok(())
}

pub fn start_time<W: Write>(writer: &mut W, path: &Path, time: &str) -> Result<()> {
    let minutes = parse_wall_clock(time)?;
    let mut strategy = load_plan(path)?;

    strategy.set_start_time(minutes);
    save_plan(path, &strategy)?;
    writeln!(
        writer,
        "Plan now runs {} - {}",
        format_minutes(strategy.start_time()),
        format_minutes(strategy.end_time())
    )?;
    Ok(())
}

pub fn slot_duration<W: Write>(writer: &mut W, path: &Path, minutes: i64) -> Result<()> {
    if minutes < 1 {
        bail!("slot duration must be at least 1 minute");
    }
    let mut strategy = load_plan(path)?;

    strategy.set_slot_duration(minutes);
    save_plan(path, &strategy)?;
    writeln!(
        writer,
        "Slot duration is now {minutes} min; plan runs {} - {}",
        format_minutes(strategy.start_time()),
        format_minutes(strategy.end_time())
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use slate_core::Strategy;

    fn small_plan(dir: &Path) -> std::path::PathBuf {
        let mut strategy = Strategy::empty();
        strategy.set_number_of_slots(4);
        strategy.set_start_time(0);
        strategy.set_slot_duration(30);
        let path = dir.join("day.plan.json");
        slate_store::save(&path, &strategy).unwrap();
        path
    }

    #[test]
    fn resize_truncates_at_tail() {
        let temp = tempfile::tempdir().unwrap();
        let path = small_plan(temp.path());

        let mut output = Vec::new();
        resize(&mut output, &path, 2).unwrap();

        let strategy = slate_store::load(&path).unwrap();
        assert_eq!(strategy.number_of_slots(), 2);
    }

    #[test]
    fn resize_rejects_zero() {
        let temp = tempfile::tempdir().unwrap();
        let path = small_plan(temp.path());

        let mut output = Vec::new();
        assert!(resize(&mut output, &path, 0).is_err());
    }

    #[test]
    fn start_time_shifts_the_whole_schedule() {
        let temp = tempfile::tempdir().unwrap();
        let path = small_plan(temp.path());

        let mut output = Vec::new();
        start_time(&mut output, &path, "09:00").unwrap();

        let strategy = slate_store::load(&path).unwrap();
        assert_eq!(strategy.start_time(), 540);
        assert_eq!(strategy.start_time_for_slot(1), 570);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "Plan now runs 09:00 - 11:00\n");
    }

    #[test]
    fn slot_duration_validates_and_updates() {
        let temp = tempfile::tempdir().unwrap();
        let path = small_plan(temp.path());

        let mut output = Vec::new();
        assert!(slot_duration(&mut output, &path, 0).is_err());
        slot_duration(&mut output, &path, 15).unwrap();

        let strategy = slate_store::load(&path).unwrap();
        assert_eq!(strategy.slot_duration(), 15);
        assert_eq!(strategy.end_time(), 60);
    }
}
