//! Core domain logic for the slate day planner.
//!
//! This crate contains the fundamental types and logic for:
//! - The slot store: a fixed-length sequence of optional activity slots
//! - The activity registry: insertion-ordered, structurally deduplicated
//! - Group compression: the run-length view the timeline is drawn from
//! - Time arithmetic: slot index ↔ minutes-past-midnight mappings
//! - History: multi-step undo/redo over every logical edit
//!
//! Everything is composed behind [`Strategy`], the single surface that UI
//! and persistence consumers talk to. The crate does no I/O and is
//! single-threaded by design: a schedule is owned by one editing session.

mod activity;
mod group;
mod history;
mod registry;
mod slots;
mod strategy;
pub mod types;

pub use activity::{Activity, ActivityId};
pub use group::{ActivityGroup, group_index_for_slot, start_slot_index_for_group};
pub use registry::ActivityRegistry;
pub use slots::SlotStore;
pub use strategy::{
    DEFAULT_NUMBER_OF_SLOTS, DEFAULT_SLOT_DURATION, DEFAULT_START_TIME, Strategy,
};
pub use types::{Color, Minutes, ValidationError};
