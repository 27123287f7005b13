//! View models and response types handed to presentation layers.
//!
//! These structs define the JSON shape of `rmap` output: the options offered
//! at a step, the final report tree, and the time estimate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::SkillOption;
use crate::enums::{ExpertiseLevel, SelectionPolicy, Step};
use crate::state::SelectionState;

/// An option as presented at a choice step.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OptionView {
    #[serde(flatten)]
    pub option: SkillOption,
    /// Note to display: the default note or an advisory override.
    pub advisory: String,
    /// Whether an advisory rule rewrote the note.
    pub recommended: bool,
}

/// A level offered at the level step.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LevelChoice {
    pub level: ExpertiseLevel,
    pub label: String,
    pub description: String,
}

impl From<ExpertiseLevel> for LevelChoice {
    fn from(level: ExpertiseLevel) -> Self {
        Self {
            level,
            label: level.label().to_string(),
            description: level.description().to_string(),
        }
    }
}

/// Learning-time estimate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Estimate {
    /// Hours after the level multiplier, or the custom budget.
    pub total_hours: f64,
    /// Core competency hours of every counted option.
    pub core_hours: u32,
}

/// An option inside the final report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportEntry {
    #[serde(flatten)]
    pub option: SkillOption,
    pub advisory: String,
    /// The user picked this option at one of the choice steps.
    pub chosen: bool,
    /// Chosen, or part of a mandatory category.
    pub included: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryReport {
    pub key: String,
    pub title: String,
    pub selection: SelectionPolicy,
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DomainReport {
    pub key: String,
    pub title: String,
    pub focus: String,
    pub categories: Vec<CategoryReport>,
}

/// The filtered catalog tree rendered on the results step.
///
/// Domains and categories with nothing visible are omitted entirely.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    pub level: Option<ExpertiseLevel>,
    pub rank: u8,
    pub domains: Vec<DomainReport>,
}

/// Response from `rmap status`, `rmap choose`, and `rmap reset`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StatusResponse {
    pub step: Step,
    pub step_number: u8,
    pub title: String,
    pub state: SelectionState,
}

impl From<&SelectionState> for StatusResponse {
    fn from(state: &SelectionState) -> Self {
        let step = state.current_step();
        Self {
            step,
            step_number: step.number(),
            title: step.title().to_string(),
            state: state.clone(),
        }
    }
}

/// Response from `rmap report`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RoadmapResponse {
    pub estimate: Estimate,
    pub report: Report,
}
