//! Activities — named, colored labels assignable to slots.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{Color, ValidationError};

/// Stable identity for an activity within one schedule.
///
/// Slots reference activities by id rather than by value, so renaming an
/// activity reaches every slot without scanning for structural matches.
/// Ids are assigned once at registration and survive undo/redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(Uuid);

impl ActivityId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An activity label: a non-empty name plus a display color.
///
/// Activities are immutable values. Equality is structural (name and color
/// together), which is what registry deduplication and edit rejection key on.
/// An "edit" replaces the value wholesale under the same [`ActivityId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    name: String,
    color: Color,
}

impl Activity {
    /// Creates an activity after validating the name is non-empty.
    pub fn new(name: impl Into<String>, color: Color) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "activity name",
            });
        }
        Ok(Self { name, color })
    }

    /// Returns the activity's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the activity's display color.
    pub const fn color(&self) -> &Color {
        &self.color
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}
