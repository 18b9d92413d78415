//! Undo/redo history as full-state snapshots.
//!
//! Snapshots capture slots and registry entries only; start time, slot
//! duration, and slot count are not part of an undoable edit. History is
//! linear: any committed edit discards the redo stack.

use crate::activity::{Activity, ActivityId};

/// A full copy of the mutable schedule state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HistoryEntry {
    pub(crate) slots: Vec<Option<ActivityId>>,
    pub(crate) activities: Vec<(ActivityId, Activity)>,
}

/// The two snapshot stacks.
#[derive(Debug, Clone, Default)]
pub(crate) struct History {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl History {
    /// Records the pre-mutation state of a new edit.
    ///
    /// Unconditionally clears the redo stack: after a fresh edit there is
    /// nothing to re-apply.
    pub(crate) fn commit(&mut self, pre_state: HistoryEntry) {
        self.undo_stack.push(pre_state);
        self.redo_stack.clear();
    }

    /// Pops the most recent undo snapshot, filing `current` for redo.
    ///
    /// Returns `None` (and leaves `current` unfiled) when there is nothing
    /// to undo.
    pub(crate) fn undo(&mut self, current: HistoryEntry) -> Option<HistoryEntry> {
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(entry)
    }

    /// Pops the most recent redo snapshot, filing `current` for undo.
    pub(crate) fn redo(&mut self, current: HistoryEntry) -> Option<HistoryEntry> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(entry)
    }

    pub(crate) fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub(crate) fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slots: Vec<Option<ActivityId>>) -> HistoryEntry {
        HistoryEntry {
            slots,
            activities: Vec::new(),
        }
    }

    #[test]
    fn undo_on_empty_history_is_none() {
        let mut history = History::default();
        assert!(history.undo(entry(vec![None])).is_none());
        // The current state must not leak onto the redo stack.
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_files_current_state_for_redo() {
        let mut history = History::default();
        let id = ActivityId::generate();
        history.commit(entry(vec![None]));

        let restored = history.undo(entry(vec![Some(id)])).unwrap();
        assert_eq!(restored.slots, vec![None]);
        assert!(history.can_redo());

        let redone = history.redo(entry(vec![None])).unwrap();
        assert_eq!(redone.slots, vec![Some(id)]);
        assert!(history.can_undo());
    }

    #[test]
    fn commit_clears_redo() {
        let mut history = History::default();
        history.commit(entry(vec![None]));
        history.undo(entry(vec![None, None])).unwrap();
        assert!(history.can_redo());

        history.commit(entry(vec![None]));
        assert!(!history.can_redo());
    }
}
