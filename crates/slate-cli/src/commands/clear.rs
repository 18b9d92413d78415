//! Clear command: empty a slot range.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use super::util::{check_slot_index, load_plan, save_plan};

pub fn run<W: Write>(writer: &mut W, path: &Path, from: usize, to: Option<usize>) -> Result<()> {
    let mut strategy = load_plan(path)?;

    let to = to.unwrap_or(from);
    let (start, end) = if to < from { (to, from) } else { (from, to) };
    check_slot_index(&strategy, end)?;

    let indices: Vec<usize> = (start..=end).collect();
    strategy.set_slot_at_indices(&indices, None);
    save_plan(path, &strategy)?;

    if start == end {
        writeln!(writer, "Cleared slot {start}")?;
    } else {
        writeln!(writer, "Cleared slots {start}-{end}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use slate_core::{Activity, Color, Strategy};

    #[test]
    fn clear_empties_the_range() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("day.plan.json");

        let a = Activity::new("Gym", Color::new("#7cb342").unwrap()).unwrap();
        let strategy = Strategy::from_parts(
            vec![Some(a.clone()), Some(a.clone()), Some(a.clone())],
            vec![a],
            0,
            30,
        );
        slate_store::save(&path, &strategy).unwrap();

        let mut output = Vec::new();
        run(&mut output, &path, 0, Some(1)).unwrap();

        let strategy = slate_store::load(&path).unwrap();
        assert_eq!(strategy.slot_at(0), None);
        assert_eq!(strategy.slot_at(1), None);
        assert!(strategy.slot_at(2).is_some());
        // Clearing slots does not unregister the activity.
        assert_eq!(strategy.activities().count(), 1);
    }

    #[test]
    fn clear_out_of_range_fails() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("day.plan.json");
        slate_store::save(&path, &Strategy::empty()).unwrap();

        let mut output = Vec::new();
        assert!(run(&mut output, &path, 0, Some(999)).is_err());
    }
}
