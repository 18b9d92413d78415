//! The slot store — a fixed-length sequence of optional activity references.

use crate::activity::ActivityId;

/// Ordered, fixed-length sequence of slots.
///
/// Each slot optionally references a registered activity by id; `None` is an
/// unassigned slot. Resizing only appends empty slots or truncates from the
/// tail, so existing assignments never shift position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotStore {
    slots: Vec<Option<ActivityId>>,
}

impl SlotStore {
    /// Creates a store of `len` empty slots.
    pub fn with_len(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Wraps an existing slot sequence (used by loaders and undo restore).
    pub(crate) const fn from_slots(slots: Vec<Option<ActivityId>>) -> Self {
        Self { slots }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` for a zero-length schedule.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` when `index` addresses a slot.
    pub fn has_index(&self, index: usize) -> bool {
        index < self.slots.len()
    }

    /// The slot at `index`; `None` for both an empty slot and an
    /// out-of-range index, mirroring the conflation callers rely on.
    pub fn get(&self, index: usize) -> Option<ActivityId> {
        self.slots.get(index).copied().flatten()
    }

    /// Writes `value` at `index`. Out-of-range writes are skipped with a
    /// warning rather than panicking; returns whether the write landed.
    pub fn set(&mut self, index: usize, value: Option<ActivityId>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => {
                tracing::warn!(index, len = self.slots.len(), "skipping out-of-range slot write");
                false
            }
        }
    }

    /// Grows with empty slots or truncates from the tail to exactly `len`.
    pub fn resize(&mut self, len: usize) {
        self.slots.resize(len, None);
    }

    /// Copies the slot at `from` over the slot at `to`.
    ///
    /// A no-op if either index is out of range.
    pub fn copy(&mut self, from: usize, to: usize) {
        if !self.has_index(from) || !self.has_index(to) {
            return;
        }
        self.slots[to] = self.slots[from];
    }

    /// Replicates the slot at `from` across the inclusive range between
    /// `from` and `to`, in either direction.
    ///
    /// The anchor is always the original `from` slot, so dragging backwards
    /// paints the anchor's value, not a cascade of neighbours. A no-op if
    /// either index is out of range.
    pub fn fill(&mut self, from: usize, to: usize) {
        if !self.has_index(from) || !self.has_index(to) {
            return;
        }
        let anchor = from;
        let (start, end) = if to < from { (to, from) } else { (from, to) };
        for index in start..=end {
            self.copy(anchor, index);
        }
    }

    /// Clears every slot referencing `id`. Returns the indices cleared.
    pub fn clear_activity(&mut self, id: ActivityId) -> Vec<usize> {
        let mut cleared = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if *slot == Some(id) {
                *slot = None;
                cleared.push(index);
            }
        }
        cleared
    }

    /// The raw slot sequence.
    pub fn as_slice(&self) -> &[Option<ActivityId>] {
        &self.slots
    }
}
