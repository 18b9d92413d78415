//! Fill command: paint one slot's value across a range.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use super::util::{check_slot_index, load_plan, save_plan};

pub fn run<W: Write>(writer: &mut W, path: &Path, from: usize, to: usize) -> Result<()> {
    let mut strategy = load_plan(path)?;
    check_slot_index(&strategy, from)?;
    check_slot_index(&strategy, to)?;

    strategy.fill_slots(from, to);
    save_plan(path, &strategy)?;

    let label = strategy
        .slot_at(from)
        .map_or_else(|| "empty".to_string(), |a| a.name().to_string());
    writeln!(writer, "Filled slots {from}-{to} with {label}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use slate_core::{Activity, Color, Strategy};

    #[test]
    fn fill_paints_the_anchor_backwards() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("day.plan.json");

        let a = Activity::new("Gym", Color::new("#7cb342").unwrap()).unwrap();
        let strategy =
            Strategy::from_parts(vec![None, None, Some(a.clone()), None], vec![a], 0, 30);
        slate_store::save(&path, &strategy).unwrap();

        let mut output = Vec::new();
        run(&mut output, &path, 2, 0).unwrap();

        let strategy = slate_store::load(&path).unwrap();
        for index in 0..=2 {
            assert_eq!(strategy.slot_at(index).unwrap().name(), "Gym");
        }
        assert_eq!(strategy.slot_at(3), None);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "Filled slots 2-0 with Gym\n");
    }
}
