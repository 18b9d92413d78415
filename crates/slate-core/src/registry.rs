//! The activity registry — an insertion-ordered, deduplicated set.
//!
//! The registry owns the id → activity mapping. Structural equality rules
//! (no two equal entries, lookups by value) are enforced here; the facade
//! layers history snapshots and slot bookkeeping on top.

use crate::activity::{Activity, ActivityId};

/// Insertion-ordered set of unique activities keyed by stable id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityRegistry {
    entries: Vec<(ActivityId, Activity)>,
}

impl ActivityRegistry {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rebuilds a registry from snapshot entries, preserving ids and order.
    pub(crate) const fn from_entries(entries: Vec<(ActivityId, Activity)>) -> Self {
        Self { entries }
    }

    /// Number of registered activities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no activities are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Structural-equality membership test.
    pub fn contains(&self, activity: &Activity) -> bool {
        self.entries.iter().any(|(_, a)| a == activity)
    }

    /// Position of a structurally-equal entry, if any.
    pub fn index_of(&self, activity: &Activity) -> Option<usize> {
        self.entries.iter().position(|(_, a)| a == activity)
    }

    /// Id of a structurally-equal entry, if any.
    pub fn id_of(&self, activity: &Activity) -> Option<ActivityId> {
        self.entries
            .iter()
            .find(|(_, a)| a == activity)
            .map(|(id, _)| *id)
    }

    /// Id of the entry at `index`, if in range.
    pub fn id_at(&self, index: usize) -> Option<ActivityId> {
        self.entries.get(index).map(|(id, _)| *id)
    }

    /// Resolves an id to its activity value.
    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, a)| a)
    }

    /// Iterates activities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter().map(|(_, a)| a)
    }

    /// Snapshot of the entries, ids included.
    pub(crate) fn entries(&self) -> &[(ActivityId, Activity)] {
        &self.entries
    }

    /// Adds `activity` unless a structurally-equal entry exists.
    ///
    /// Returns the id of the entry now representing `activity` — the fresh
    /// id on insertion, the existing one on a duplicate no-op.
    pub fn append(&mut self, activity: Activity) -> ActivityId {
        if let Some(id) = self.id_of(&activity) {
            return id;
        }
        let id = ActivityId::generate();
        self.entries.push((id, activity));
        id
    }

    /// Replaces the value under `id`, keeping the id and position.
    ///
    /// Returns `false` if `id` is not registered. Duplicate checks are the
    /// caller's responsibility.
    pub fn replace(&mut self, id: ActivityId, to: Activity) -> bool {
        match self.entries.iter_mut().find(|(entry_id, _)| *entry_id == id) {
            Some((_, slot)) => {
                *slot = to;
                true
            }
            None => false,
        }
    }

    /// Removes the entry under `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: ActivityId) -> Option<Activity> {
        let index = self
            .entries
            .iter()
            .position(|(entry_id, _)| *entry_id == id)?;
        Some(self.entries.remove(index).1)
    }
}
