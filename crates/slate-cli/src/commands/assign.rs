//! Assign command: put an activity into a slot range.

use std::io::Write;
use std::path::Path;

use anyhow::{Result, bail};

use slate_core::{Activity, Color};

use super::util::{check_slot_index, find_activity_by_name, load_plan, save_plan};

pub fn run<W: Write>(
    writer: &mut W,
    path: &Path,
    name: &str,
    from: usize,
    to: Option<usize>,
    color: Option<&str>,
) -> Result<()> {
    let mut strategy = load_plan(path)?;

    let activity = match find_activity_by_name(&strategy, name) {
        Some(activity) => activity,
        None => match color {
            Some(hex) => Activity::new(name, Color::new(hex)?)?,
            None => bail!(
                "unknown activity {name:?}; pass --color to register it, \
                 or add it with `slate activity add`"
            ),
        },
    };

    let to = to.unwrap_or(from);
    let (start, end) = if to < from { (to, from) } else { (from, to) };
    check_slot_index(&strategy, end)?;

    let indices: Vec<usize> = (start..=end).collect();
    strategy.set_slot_at_indices(&indices, Some(activity));
    save_plan(path, &strategy)?;

    if start == end {
        writeln!(writer, "Assigned {name} to slot {start}")?;
    } else {
        writeln!(writer, "Assigned {name} to slots {start}-{end}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use slate_core::Strategy;

    fn empty_plan(dir: &Path) -> std::path::PathBuf {
        let mut strategy = Strategy::empty();
        strategy.set_number_of_slots(4);
        let path = dir.join("day.plan.json");
        slate_store::save(&path, &strategy).unwrap();
        path
    }

    #[test]
    fn assign_registers_and_sets_range() {
        let temp = tempfile::tempdir().unwrap();
        let path = empty_plan(temp.path());

        let mut output = Vec::new();
        run(&mut output, &path, "Deep work", 0, Some(1), Some("#2d61a3")).unwrap();

        let strategy = slate_store::load(&path).unwrap();
        assert_eq!(strategy.slot_at(0).unwrap().name(), "Deep work");
        assert_eq!(strategy.slot_at(1).unwrap().name(), "Deep work");
        assert_eq!(strategy.slot_at(2), None);
        assert_eq!(strategy.activities().count(), 1);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "Assigned Deep work to slots 0-1\n");
    }

    #[test]
    fn assign_reuses_a_registered_activity() {
        let temp = tempfile::tempdir().unwrap();
        let path = empty_plan(temp.path());

        let mut output = Vec::new();
        run(&mut output, &path, "Gym", 0, None, Some("#7cb342")).unwrap();
        // Second assignment finds the activity by name, no color needed.
        run(&mut output, &path, "Gym", 3, None, None).unwrap();

        let strategy = slate_store::load(&path).unwrap();
        assert_eq!(strategy.slot_at(3).unwrap().name(), "Gym");
        assert_eq!(strategy.activities().count(), 1);
    }

    #[test]
    fn assign_unknown_activity_without_color_fails() {
        let temp = tempfile::tempdir().unwrap();
        let path = empty_plan(temp.path());

        let mut output = Vec::new();
        let result = run(&mut output, &path, "Ghost", 0, None, None);
        assert!(result.is_err());
    }

    #[test]
    fn assign_out_of_range_fails_before_mutating() {
        let temp = tempfile::tempdir().unwrap();
        let path = empty_plan(temp.path());

        let mut output = Vec::new();
        let result = run(&mut output, &path, "Gym", 2, Some(9), Some("#7cb342"));
        assert!(result.is_err());

        let strategy = slate_store::load(&path).unwrap();
        assert!(strategy.slots().iter().all(Option::is_none));
    }
}
