//! # rmap-engine
//!
//! The recommendation and estimation engine behind the `rmap` questionnaire.
//!
//! - [`visibility`]: which options a rank can see, with empty categories and
//!   domains hidden.
//! - [`advisory`]: rule-driven notes that depend on earlier answers.
//! - [`estimate`]: core hours and the level-scaled total.
//! - [`report`]: the filtered tree shown on the results step.
//! - [`RoadmapEngine`]: the questionnaire operations tying them together.
//!
//! Everything here is synchronous and pure over the catalog and the
//! selection state it is given.

pub mod advisory;
mod engine;
pub mod estimate;
pub mod report;
pub mod visibility;

pub use engine::RoadmapEngine;
pub use rmap_core::state::Choice;
