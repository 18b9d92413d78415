//! The strategy facade — the single mutation/query surface of the schedule.
//!
//! A [`Strategy`] owns the slot store, the activity registry, the schedule's
//! time parameters, and the undo/redo history. External consumers (UI,
//! persistence) go through this type exclusively; every mutating call that
//! counts as a logical edit snapshots the pre-mutation state first.

use std::fmt::Write as _;

use crate::activity::Activity;
use crate::group::{self, ActivityGroup};
use crate::history::{History, HistoryEntry};
use crate::registry::ActivityRegistry;
use crate::slots::SlotStore;
use crate::types::Minutes;

/// Slot count for a freshly created schedule: 6:00 to 22:00 in
/// quarter-hour steps.
pub const DEFAULT_NUMBER_OF_SLOTS: usize = 64;

/// Default slot duration in minutes.
pub const DEFAULT_SLOT_DURATION: Minutes = 15;

/// Default schedule start: 6:00, as minutes past midnight.
pub const DEFAULT_START_TIME: Minutes = 360;

/// A day schedule: fixed-length slots, an activity registry, time
/// parameters, and linear undo/redo history.
#[derive(Debug, Clone)]
pub struct Strategy {
    slots: SlotStore,
    registry: ActivityRegistry,
    start_time: Minutes,
    slot_duration: Minutes,
    history: History,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::empty()
    }
}

impl Strategy {
    /// Creates an empty schedule with the default shape: all slots
    /// unassigned, no activities, no history.
    pub fn empty() -> Self {
        Self {
            slots: SlotStore::with_len(DEFAULT_NUMBER_OF_SLOTS),
            registry: ActivityRegistry::new(),
            start_time: DEFAULT_START_TIME,
            slot_duration: DEFAULT_SLOT_DURATION,
            history: History::default(),
        }
    }

    /// Restores a schedule from persisted parts.
    ///
    /// Slot values are matched against `activities` structurally; a slot
    /// activity missing from the list is registered on the fly so the
    /// no-dangling-reference rule holds from the first query. History
    /// starts empty.
    pub fn from_parts(
        slots: Vec<Option<Activity>>,
        activities: Vec<Activity>,
        start_time: Minutes,
        slot_duration: Minutes,
    ) -> Self {
        let mut registry = ActivityRegistry::new();
        for activity in activities {
            registry.append(activity);
        }
        let slot_ids = slots
            .into_iter()
            .map(|slot| slot.map(|activity| registry.append(activity)))
            .collect();

        Self {
            slots: SlotStore::from_slots(slot_ids),
            registry,
            start_time,
            slot_duration,
            history: History::default(),
        }
    }

    // ========== Queries ==========

    /// Number of slots in the schedule.
    pub fn number_of_slots(&self) -> usize {
        self.slots.len()
    }

    /// The slot at `index`; `None` for an empty slot or an out-of-range
    /// index.
    pub fn slot_at(&self, index: usize) -> Option<Activity> {
        let id = self.slots.get(index)?;
        self.registry.get(id).cloned()
    }

    /// The full slot sequence, resolved to activity values.
    pub fn slots(&self) -> Vec<Option<Activity>> {
        self.slots
            .as_slice()
            .iter()
            .map(|slot| slot.and_then(|id| self.registry.get(id).cloned()))
            .collect()
    }

    /// Registered activities in insertion order.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.registry.iter()
    }

    /// Position of a structurally-equal activity in the registry.
    pub fn index_of_activity(&self, activity: &Activity) -> Option<usize> {
        self.registry.index_of(activity)
    }

    /// Structural-equality membership test against the registry.
    pub fn has_activity(&self, activity: &Activity) -> bool {
        self.registry.contains(activity)
    }

    /// Run-length view of the slot sequence.
    ///
    /// Equal-activity runs collapse into one group; every empty slot is its
    /// own length-1 group. Group lengths always sum to
    /// [`number_of_slots`](Self::number_of_slots).
    pub fn calculate_groups(&self) -> Vec<ActivityGroup> {
        group::runs(self.slots.as_slice())
            .into_iter()
            .map(|(id, length)| ActivityGroup {
                activity: id.and_then(|id| self.registry.get(id).cloned()),
                length,
            })
            .collect()
    }

    // ========== Time arithmetic ==========

    /// The schedule's global start, minutes past midnight.
    pub const fn start_time(&self) -> Minutes {
        self.start_time
    }

    /// The duration of one slot, in minutes.
    pub const fn slot_duration(&self) -> Minutes {
        self.slot_duration
    }

    /// Wall-clock start of the slot at `index`.
    ///
    /// Pure arithmetic with no bounds check: indices past the end
    /// extrapolate beyond the schedule.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "slot counts are far below i64::MAX"
    )]
    pub const fn start_time_for_slot(&self, index: usize) -> Minutes {
        index as Minutes * self.slot_duration + self.start_time
    }

    /// Per-slot start times for the whole schedule.
    pub fn start_times(&self) -> Vec<Minutes> {
        (0..self.number_of_slots())
            .map(|index| self.start_time_for_slot(index))
            .collect()
    }

    /// Wall-clock start of the group at `group_index`, or `0` when the
    /// index resolves to no group.
    pub fn start_time_for_group(&self, group_index: usize) -> Minutes {
        self.start_slot_index_for_group(group_index)
            .map_or(0, |slot_index| self.start_time_for_slot(slot_index))
    }

    /// First slot index covered by the group at `group_index`.
    pub fn start_slot_index_for_group(&self, group_index: usize) -> Option<usize> {
        group::start_slot_index_for_group(&self.calculate_groups(), group_index)
    }

    /// Index of the group covering `slot_index`.
    pub fn group_index_for_slot(&self, slot_index: usize) -> Option<usize> {
        group::group_index_for_slot(&self.calculate_groups(), slot_index)
    }

    /// The slot whose `[start, start + duration)` window contains `time`,
    /// or `None` when `time` falls outside the schedule.
    pub fn find_slot_index_for_time(&self, time: Minutes) -> Option<usize> {
        (0..self.number_of_slots()).find(|&index| {
            let start = self.start_time_for_slot(index);
            time >= start && time < start + self.slot_duration
        })
    }

    /// Wall-clock end of the schedule.
    ///
    /// # Panics
    ///
    /// Panics on a zero-length schedule; there is no meaningful end time
    /// and callers are expected to keep schedules non-empty.
    pub fn end_time(&self) -> Minutes {
        assert!(
            !self.slots.is_empty(),
            "end_time is undefined for a zero-length schedule"
        );
        self.start_time_for_slot(self.number_of_slots() - 1) + self.slot_duration
    }

    // ========== History ==========

    /// Whether an undo snapshot is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo snapshot is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the most recent undo snapshot. No-op when history is empty.
    pub fn undo(&mut self) {
        let current = self.snapshot();
        if let Some(entry) = self.history.undo(current) {
            self.restore(entry);
            tracing::debug!("undid last edit");
        }
    }

    /// Re-applies the most recently undone edit. No-op when nothing was
    /// undone since the last edit.
    pub fn redo(&mut self) {
        let current = self.snapshot();
        if let Some(entry) = self.history.redo(current) {
            self.restore(entry);
            tracing::debug!("redid last undone edit");
        }
    }

    fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            slots: self.slots.as_slice().to_vec(),
            activities: self.registry.entries().to_vec(),
        }
    }

    fn commit_to_history(&mut self) {
        let entry = self.snapshot();
        self.history.commit(entry);
    }

    fn restore(&mut self, entry: HistoryEntry) {
        self.slots = SlotStore::from_slots(entry.slots);
        self.registry = ActivityRegistry::from_entries(entry.activities);
    }

    // ========== Activity mutations ==========

    /// Registers `activity` unless a structurally-equal one exists.
    ///
    /// The one mutation that is deliberately not undoable: adding a label
    /// to the palette does not change any slot.
    pub fn append_activity(&mut self, activity: Activity) {
        self.registry.append(activity);
    }

    /// Unregisters `activity` and clears every slot assigned to it.
    /// No-op when the activity is unknown.
    pub fn remove_activity(&mut self, activity: &Activity) {
        let Some(id) = self.registry.id_of(activity) else {
            return;
        };
        self.commit_to_history();
        self.registry.remove(id);
        let cleared = self.slots.clear_activity(id);
        tracing::debug!(activity = %activity, slots_cleared = cleared.len(), "removed activity");
    }

    /// Replaces `from` with `to` everywhere: registry entry and every slot.
    ///
    /// Rejected silently when `to` already exists (including `from == to`)
    /// or when `from` is unknown.
    pub fn edit_activity(&mut self, from: &Activity, to: Activity) {
        if self.registry.contains(&to) {
            return;
        }
        let Some(id) = self.registry.id_of(from) else {
            return;
        };
        self.commit_to_history();
        self.registry.replace(id, to);
    }

    /// Replaces the registry entry at `index` with `to`, propagating to
    /// slots. Same rejection rules as [`edit_activity`](Self::edit_activity).
    pub fn edit_activity_at_index(&mut self, index: usize, to: Activity) {
        if self.registry.contains(&to) {
            return;
        }
        let Some(id) = self.registry.id_at(index) else {
            return;
        };
        self.commit_to_history();
        self.registry.replace(id, to);
    }

    // ========== Slot mutations ==========

    /// Assigns `value` to the slot at `index` as one undoable edit.
    pub fn set_slot_at_index(&mut self, index: usize, value: Option<Activity>) {
        self.set_slot_at_indices(&[index], value);
    }

    /// Assigns `value` to every listed slot as one undoable edit.
    ///
    /// The snapshot is taken once up front; out-of-range indices are
    /// skipped individually. An unregistered activity value is registered
    /// as part of the edit, so undoing it also unregisters.
    pub fn set_slot_at_indices(&mut self, indices: &[usize], value: Option<Activity>) {
        self.commit_to_history();
        let id = value.map(|activity| self.registry.append(activity));
        for &index in indices {
            self.slots.set(index, id);
        }
    }

    /// Copies the slot at `from` over the slot at `to`, bypassing history.
    /// No-op when either index is out of range.
    pub fn copy_slot(&mut self, from: usize, to: usize) {
        self.slots.copy(from, to);
    }

    /// Paints the slot at `from` across the inclusive range between `from`
    /// and `to` (in either direction), bypassing history. No-op when either
    /// index is out of range.
    pub fn fill_slots(&mut self, from: usize, to: usize) {
        self.slots.fill(from, to);
    }

    /// Resizes the schedule, padding with empty slots or truncating from
    /// the tail. A structural change, not an edit: history is untouched.
    pub fn set_number_of_slots(&mut self, number_of_slots: usize) {
        self.slots.resize(number_of_slots);
    }

    /// Moves the schedule's global start. Not an undoable edit.
    pub const fn set_start_time(&mut self, start_time: Minutes) {
        self.start_time = start_time;
    }

    /// Changes the per-slot duration. Not an undoable edit.
    pub const fn set_slot_duration(&mut self, slot_duration: Minutes) {
        self.slot_duration = slot_duration;
    }

    // ========== Debug dumps ==========

    /// Human-readable slot table. Debugging aid, not a stable format.
    pub fn debug_slots(&self) -> String {
        let mut out = String::from("--- slots ----------------\n");
        for (index, slot) in self.slots().iter().enumerate() {
            let label = slot.as_ref().map_or("-", Activity::name);
            let _ = writeln!(out, "{index:>3}  {label}");
        }
        out
    }

    /// Human-readable group table. Debugging aid, not a stable format.
    pub fn debug_groups(&self) -> String {
        let mut out = String::from("--- groups ---------------\n");
        for (index, group) in self.calculate_groups().iter().enumerate() {
            let label = group
                .activity
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string);
            let _ = writeln!(out, "{index:>3}  x{:<3} {label}", group.length);
        }
        out
    }
}
