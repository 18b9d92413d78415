//! Show command: print the plan as slots, groups, or raw start times.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use slate_core::{Activity, Strategy};

use super::util::{format_minutes, load_plan};

pub fn run<W: Write>(writer: &mut W, path: &Path, groups: bool, times: bool) -> Result<()> {
    let strategy = load_plan(path)?;
    write_header(writer, &strategy)?;

    if groups {
        write_groups(writer, &strategy)?;
    } else if times {
        write_times(writer, &strategy)?;
    } else {
        write_slots(writer, &strategy)?;
    }
    Ok(())
}

fn write_header<W: Write>(writer: &mut W, strategy: &Strategy) -> Result<()> {
    if strategy.number_of_slots() == 0 {
        writeln!(writer, "Plan: 0 slots")?;
        return Ok(());
    }
    writeln!(
        writer,
        "Plan: {} slots x {} min, {} - {}",
        strategy.number_of_slots(),
        strategy.slot_duration(),
        format_minutes(strategy.start_time()),
        format_minutes(strategy.end_time()),
    )?;
    Ok(())
}

fn write_slots<W: Write>(writer: &mut W, strategy: &Strategy) -> Result<()> {
    writeln!(writer)?;
    for (index, slot) in strategy.slots().iter().enumerate() {
        let label = slot.as_ref().map_or("-", Activity::name);
        writeln!(
            writer,
            "{}  {label}",
            format_minutes(strategy.start_time_for_slot(index))
        )?;
    }
    Ok(())
}

fn write_groups<W: Write>(writer: &mut W, strategy: &Strategy) -> Result<()> {
    writeln!(writer)?;
    for (index, group) in strategy.calculate_groups().iter().enumerate() {
        let start = strategy.start_time_for_group(index);
        let end = start + group.length as i64 * strategy.slot_duration();
        let label = group
            .activity
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string);
        writeln!(
            writer,
            "{} - {}  {label}  x{}",
            format_minutes(start),
            format_minutes(end),
            group.length
        )?;
    }
    Ok(())
}

fn write_times<W: Write>(writer: &mut W, strategy: &Strategy) -> Result<()> {
    writeln!(writer)?;
    for (index, start) in strategy.start_times().iter().enumerate() {
        writeln!(writer, "{index:>3}  {start}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use slate_core::Color;

    fn sample_plan(dir: &Path) -> std::path::PathBuf {
        let a = Activity::new("Deep work", Color::new("#2d61a3").unwrap()).unwrap();
        let b = Activity::new("Email", Color::new("#c25450").unwrap()).unwrap();
        let strategy = Strategy::from_parts(
            vec![Some(a.clone()), Some(a.clone()), Some(b), None],
            vec![a],
            0,
            30,
        );

        let path = dir.join("day.plan.json");
        slate_store::save(&path, &strategy).unwrap();
        path
    }

    #[test]
    fn show_slots_view() {
        let temp = tempfile::tempdir().unwrap();
        let path = sample_plan(temp.path());

        let mut output = Vec::new();
        run(&mut output, &path, false, false).unwrap();

        assert_snapshot!(String::from_utf8(output).unwrap(), @r"
Plan: 4 slots x 30 min, 00:00 - 02:00

00:00  Deep work
00:30  Deep work
01:00  Email
01:30  -
");
    }

    #[test]
    fn show_groups_view() {
        let temp = tempfile::tempdir().unwrap();
        let path = sample_plan(temp.path());

        let mut output = Vec::new();
        run(&mut output, &path, true, false).unwrap();

        assert_snapshot!(String::from_utf8(output).unwrap(), @r"
Plan: 4 slots x 30 min, 00:00 - 02:00

00:00 - 01:00  Deep work (#2d61a3)  x2
01:00 - 01:30  Email (#c25450)  x1
01:30 - 02:00  -  x1
");
    }

    #[test]
    fn show_times_view() {
        let temp = tempfile::tempdir().unwrap();
        let path = sample_plan(temp.path());

        let mut output = Vec::new();
        run(&mut output, &path, false, true).unwrap();

        assert_snapshot!(String::from_utf8(output).unwrap(), @r"
Plan: 4 slots x 30 min, 00:00 - 02:00

  0  0
  1  30
  2  60
  3  90
");
    }

    #[test]
    fn show_fails_without_a_plan_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.json");

        let mut output = Vec::new();
        assert!(run(&mut output, &path, false, false).is_err());
    }
}
