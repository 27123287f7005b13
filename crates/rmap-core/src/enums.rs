//! Expertise levels, skill levels, tags, selection policies, and questionnaire steps.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`Step`] is the questionnaire state machine and provides `next()` /
//! `previous()` to walk its fixed transition table.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ExpertiseLevel
// ---------------------------------------------------------------------------

/// Self-assessed expertise of the person building a roadmap.
///
/// `Custom` sees every skill and replaces the computed duration with the
/// user's own time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpertiseLevel {
    #[serde(alias = "beginner")]
    Basic,
    Intermediate,
    Professional,
    Custom,
}

impl ExpertiseLevel {
    /// Levels in the order they are offered at the level step.
    pub const ALL: [Self; 4] = [
        Self::Basic,
        Self::Intermediate,
        Self::Professional,
        Self::Custom,
    ];

    /// Multiplier applied to core competency hours.
    ///
    /// `Custom` is zero: a custom estimate is the user's own figure, never a
    /// scaled one.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Basic => 8.0,
            Self::Intermediate => 4.0,
            Self::Professional => 1.0,
            Self::Custom => 0.0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Novice",
            Self::Intermediate => "Competent",
            Self::Professional => "Polishing Up",
            Self::Custom => "Custom",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Basic => "Starting from scratch, needs structure.",
            Self::Intermediate => "Knows basics, ready for frameworks.",
            Self::Professional => "Experienced, targeting specific gaps.",
            Self::Custom => "Set your own time budget.",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Professional => "professional",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RequiredLevel
// ---------------------------------------------------------------------------

/// Minimum expertise at which a skill becomes relevant.
///
/// ```text
/// basic < intermediate < professional
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RequiredLevel {
    #[serde(alias = "must_have")]
    Basic,
    Intermediate,
    Professional,
}

impl RequiredLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Must Have",
            Self::Intermediate => "Intermediate",
            Self::Professional => "Professional",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Professional => "professional",
        }
    }
}

impl fmt::Display for RequiredLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SkillTag
// ---------------------------------------------------------------------------

/// Industry positioning badge shown next to an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkillTag {
    IndustryStandard,
    BestForVersatility,
    EnterpriseGrade,
    GreatForIndividuals,
}

impl SkillTag {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IndustryStandard => "Industry Standard",
            Self::BestForVersatility => "Best for Versatility",
            Self::EnterpriseGrade => "Enterprise Grade",
            Self::GreatForIndividuals => "Great for Individuals",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IndustryStandard => "industry_standard",
            Self::BestForVersatility => "best_for_versatility",
            Self::EnterpriseGrade => "enterprise_grade",
            Self::GreatForIndividuals => "great_for_individuals",
        }
    }
}

impl fmt::Display for SkillTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SelectionPolicy
// ---------------------------------------------------------------------------

/// How the options of a category count toward the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Every visible option counts.
    Mandatory,
    /// The user picks exactly one.
    SingleChoice,
    /// The user may pick any subset.
    MultipleChoice,
}

impl SelectionPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::SingleChoice => "single_choice",
            Self::MultipleChoice => "multiple_choice",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// Questionnaire step.
///
/// ```text
/// level → frontend → backend → database → results
/// ```
///
/// The current step is never stored; it is derived from which
/// [`SelectionState`](crate::state::SelectionState) fields are set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Level,
    Frontend,
    Backend,
    Database,
    Results,
}

impl Step {
    pub const ALL: [Self; 5] = [
        Self::Level,
        Self::Frontend,
        Self::Backend,
        Self::Database,
        Self::Results,
    ];

    /// Steps that choose a catalog option.
    pub const CHOICE_STEPS: [Self; 3] = [Self::Frontend, Self::Backend, Self::Database];

    /// One-based position in the questionnaire.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Level => 1,
            Self::Frontend => 2,
            Self::Backend => 3,
            Self::Database => 4,
            Self::Results => 5,
        }
    }

    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Level),
            2 => Some(Self::Frontend),
            3 => Some(Self::Backend),
            4 => Some(Self::Database),
            5 => Some(Self::Results),
            _ => None,
        }
    }

    /// The step reached after answering this one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Level => Some(Self::Frontend),
            Self::Frontend => Some(Self::Backend),
            Self::Backend => Some(Self::Database),
            Self::Database => Some(Self::Results),
            Self::Results => None,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Level => None,
            Self::Frontend => Some(Self::Level),
            Self::Backend => Some(Self::Frontend),
            Self::Database => Some(Self::Backend),
            Self::Results => Some(Self::Database),
        }
    }

    /// Whether this step is answered with a catalog option id.
    #[must_use]
    pub const fn takes_option(self) -> bool {
        matches!(self, Self::Frontend | Self::Backend | Self::Database)
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Level => "Gauge your current skill level",
            Self::Frontend => "Choose your frontend framework",
            Self::Backend => "Choose your primary backend framework",
            Self::Database => "Choose your database",
            Self::Results => "Your personalized full stack roadmap",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Results => "results",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
