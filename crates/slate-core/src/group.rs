//! Run-length grouping of the slot sequence.
//!
//! # Grouping rule
//!
//! Contiguous slots holding the same activity collapse into a single group,
//! but empty slots never merge: every `None` slot is its own length-1 group.
//! The asymmetry is deliberate — an unassigned stretch is a row of
//! individually-editable gaps, while an assigned stretch is one session.

use serde::Serialize;

use crate::activity::Activity;

/// A maximal run of contiguous equal slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityGroup {
    /// The shared activity, or `None` for a single empty slot.
    pub activity: Option<Activity>,
    /// Number of slots covered; always at least 1.
    pub length: usize,
}

/// Run-length encodes a slot sequence under the grouping rule above.
///
/// The sum of emitted run lengths always equals `slots.len()`.
pub(crate) fn runs<T: Copy + PartialEq>(slots: &[Option<T>]) -> Vec<(Option<T>, usize)> {
    let mut result = Vec::new();
    let mut pending: Option<(T, usize)> = None;

    for slot in slots {
        match slot {
            None => {
                if let Some((value, length)) = pending.take() {
                    result.push((Some(value), length));
                }
                result.push((None, 1));
            }
            Some(value) => match pending {
                Some((pending_value, ref mut length)) if pending_value == *value => {
                    *length += 1;
                }
                _ => {
                    if let Some((prev_value, length)) = pending.take() {
                        result.push((Some(prev_value), length));
                    }
                    pending = Some((*value, 1));
                }
            },
        }
    }

    if let Some((value, length)) = pending {
        result.push((Some(value), length));
    }

    result
}

/// First slot index covered by the group at `group_index`.
pub fn start_slot_index_for_group(groups: &[ActivityGroup], group_index: usize) -> Option<usize> {
    if group_index >= groups.len() {
        return None;
    }
    Some(groups[..group_index].iter().map(|g| g.length).sum())
}

/// Index of the group covering `slot_index`.
pub fn group_index_for_slot(groups: &[ActivityGroup], slot_index: usize) -> Option<usize> {
    let mut start = 0;
    for (index, group) in groups.iter().enumerate() {
        let end = start + group.length;
        if (start..end).contains(&slot_index) {
            return Some(index);
        }
        start = end;
    }
    None
}
