//! Plan-file persistence for the slate day planner.
//!
//! Encodes a [`Strategy`] to the interchange document and back, and reads
//! and writes that document as pretty-printed JSON on disk.
//!
//! # Document format
//!
//! ```json
//! {
//!   "slotDuration": 15,
//!   "startTime": 360,
//!   "activities": [{ "name": "Deep work", "color": "#2d61a3" }],
//!   "slots": [0, 0, null]
//! }
//! ```
//!
//! Each `slots` entry is either an index into `activities` or `null` for an
//! unassigned slot. Keys are camelCase for compatibility with documents
//! written by earlier versions of the application. When evolving the format:
//! - Adding fields: old documents must keep loading (use serde defaults)
//! - Removing or renaming fields: breaks old documents (requires migration)

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use slate_core::types::ValidationError;
use slate_core::{Activity, Color, Minutes, Strategy};

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the plan file failed.
    #[error("plan file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document was not valid JSON or did not match the schema.
    #[error("malformed plan document: {0}")]
    Json(#[from] serde_json::Error),

    /// An activity or color in the document failed validation.
    #[error("invalid plan document: {0}")]
    Validation(#[from] ValidationError),

    /// A slot referenced an activity index past the end of the list.
    #[error("slot {slot} references activity {index}, but only {activity_count} are defined")]
    ActivityIndexOutOfRange {
        slot: usize,
        index: usize,
        activity_count: usize,
    },
}

/// One activity entry in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub name: String,
    pub color: String,
}

/// The interchange document.
///
/// A pure DTO: field validation happens on conversion to [`Strategy`], not
/// on deserialization, so a malformed document reports which part is bad.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub slot_duration: Minutes,
    pub start_time: Minutes,
    pub activities: Vec<ActivityRecord>,
    pub slots: Vec<Option<usize>>,
}

impl Document {
    /// Captures a strategy's persistent state.
    pub fn encode(strategy: &Strategy) -> Self {
        let activities: Vec<ActivityRecord> = strategy
            .activities()
            .map(|activity| ActivityRecord {
                name: activity.name().to_string(),
                color: activity.color().as_str().to_string(),
            })
            .collect();

        let slots = strategy
            .slots()
            .iter()
            .map(|slot| {
                slot.as_ref()
                    .and_then(|activity| strategy.index_of_activity(activity))
            })
            .collect();

        Self {
            slot_duration: strategy.slot_duration(),
            start_time: strategy.start_time(),
            activities,
            slots,
        }
    }

    /// Rebuilds a strategy, validating every slot reference.
    pub fn into_strategy(self) -> Result<Strategy, StoreError> {
        let activities = self
            .activities
            .into_iter()
            .map(|record| Ok(Activity::new(record.name, Color::new(record.color)?)?))
            .collect::<Result<Vec<_>, StoreError>>()?;

        let slots = self
            .slots
            .into_iter()
            .enumerate()
            .map(|(slot, entry)| match entry {
                None => Ok(None),
                Some(index) => activities.get(index).cloned().map(Some).ok_or(
                    StoreError::ActivityIndexOutOfRange {
                        slot,
                        index,
                        activity_count: activities.len(),
                    },
                ),
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(Strategy::from_parts(
            slots,
            activities,
            self.start_time,
            self.slot_duration,
        ))
    }
}

/// Writes `strategy` to `path` as a pretty-printed plan document.
pub fn save(path: &Path, strategy: &Strategy) -> Result<(), StoreError> {
    let document = Document::encode(strategy);
    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(path, json)?;
    tracing::debug!(path = %path.display(), slots = document.slots.len(), "saved plan");
    Ok(())
}

/// Loads a strategy from the plan document at `path`.
pub fn load(path: &Path) -> Result<Strategy, StoreError> {
    let json = std::fs::read_to_string(path)?;
    let document: Document = serde_json::from_str(&json)?;
    tracing::debug!(path = %path.display(), slots = document.slots.len(), "loaded plan");
    document.into_strategy()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str, hex: &str) -> Activity {
        Activity::new(name, Color::new(hex).unwrap()).unwrap()
    }

    fn sample_strategy() -> Strategy {
        let a = activity("Deep work", "#2d61a3");
        let b = activity("Email", "#c25450");
        Strategy::from_parts(
            vec![Some(a.clone()), Some(a.clone()), Some(b), None],
            vec![a],
            0,
            30,
        )
    }

    #[test]
    fn document_keys_are_camel_case() {
        let a = activity("Deep work", "#2d61a3");
        let strategy = Strategy::from_parts(vec![Some(a.clone()), None], vec![a], 360, 15);

        let json = serde_json::to_string_pretty(&Document::encode(&strategy)).unwrap();
        insta::assert_snapshot!(json, @r##"
{
  "slotDuration": 15,
  "startTime": 360,
  "activities": [
    {
      "name": "Deep work",
      "color": "#2d61a3"
    }
  ],
  "slots": [
    0,
    null
  ]
}
"##);
    }

    #[test]
    fn encode_then_decode_preserves_observable_state() {
        let strategy = sample_strategy();
        let restored = Document::encode(&strategy).into_strategy().unwrap();

        assert_eq!(restored.slots(), strategy.slots());
        assert_eq!(
            restored.activities().collect::<Vec<_>>(),
            strategy.activities().collect::<Vec<_>>()
        );
        assert_eq!(restored.start_time(), strategy.start_time());
        assert_eq!(restored.slot_duration(), strategy.slot_duration());
    }

    #[test]
    fn decode_rejects_dangling_activity_index() {
        let document = Document {
            slot_duration: 15,
            start_time: 360,
            activities: vec![ActivityRecord {
                name: "Deep work".into(),
                color: "#2d61a3".into(),
            }],
            slots: vec![Some(0), Some(3)],
        };

        let err = document.into_strategy().unwrap_err();
        assert!(matches!(
            err,
            StoreError::ActivityIndexOutOfRange {
                slot: 1,
                index: 3,
                activity_count: 1
            }
        ));
    }

    #[test]
    fn decode_rejects_invalid_color() {
        let document = Document {
            slot_duration: 15,
            start_time: 360,
            activities: vec![ActivityRecord {
                name: "Deep work".into(),
                color: "blue".into(),
            }],
            slots: vec![None],
        };

        assert!(matches!(
            document.into_strategy(),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("day.plan.json");

        let strategy = sample_strategy();
        save(&path, &strategy).unwrap();
        let restored = load(&path).unwrap();

        assert_eq!(restored.slots(), strategy.slots());
        assert_eq!(restored.start_time(), strategy.start_time());
    }

    #[test]
    fn load_reports_malformed_json() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("day.plan.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(load(&path), Err(StoreError::Json(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("absent.json");

        assert!(matches!(load(&path), Err(StoreError::Io(_))));
    }
}
