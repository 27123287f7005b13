//! Questionnaire selection state.
//!
//! A [`SelectionState`] starts all-null and gains one answer per step, in
//! step order. The current [`Step`] is derived from which fields are set and
//! is never stored alongside them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ExpertiseLevel, Step};
use crate::errors::CoreError;

/// A user-supplied time budget in hours. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "f64", into = "f64")]
pub struct CustomHours(f64);

impl CustomHours {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCustomHours`] for zero, negative, or
    /// non-finite values.
    pub fn new(hours: f64) -> Result<Self, CoreError> {
        if hours.is_finite() && hours > 0.0 {
            Ok(Self(hours))
        } else {
            Err(CoreError::InvalidCustomHours(hours))
        }
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for CustomHours {
    type Error = CoreError;

    fn try_from(hours: f64) -> Result<Self, Self::Error> {
        Self::new(hours)
    }
}

impl From<CustomHours> for f64 {
    fn from(hours: CustomHours) -> Self {
        hours.0
    }
}

/// Answers collected so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SelectionState {
    #[serde(default)]
    pub level: Option<ExpertiseLevel>,
    /// Only meaningful when `level` is [`ExpertiseLevel::Custom`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_hours: Option<CustomHours>,
    #[serde(default)]
    pub frontend: Option<String>,
    #[serde(default)]
    pub backend: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
}

/// An answer to one questionnaire step.
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    Level {
        level: ExpertiseLevel,
        custom_hours: Option<CustomHours>,
    },
    Option(String),
}

impl Choice {
    #[must_use]
    pub const fn level(level: ExpertiseLevel) -> Self {
        Self::Level {
            level,
            custom_hours: None,
        }
    }

    #[must_use]
    pub fn option(id: impl Into<String>) -> Self {
        Self::Option(id.into())
    }
}

impl SelectionState {
    /// The initial, all-null state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// First unanswered step, or [`Step::Results`] once everything is set.
    #[must_use]
    pub const fn current_step(&self) -> Step {
        if self.level.is_none() {
            Step::Level
        } else if self.frontend.is_none() {
            Step::Frontend
        } else if self.backend.is_none() {
            Step::Backend
        } else if self.database.is_none() {
            Step::Database
        } else {
            Step::Results
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.current_step(), Step::Results)
    }

    /// Option id recorded for a choice step.
    #[must_use]
    pub fn option_for(&self, step: Step) -> Option<&str> {
        match step {
            Step::Frontend => self.frontend.as_deref(),
            Step::Backend => self.backend.as_deref(),
            Step::Database => self.database.as_deref(),
            Step::Level | Step::Results => None,
        }
    }

    pub(crate) fn option_slot(&mut self, step: Step) -> Option<&mut Option<String>> {
        match step {
            Step::Frontend => Some(&mut self.frontend),
            Step::Backend => Some(&mut self.backend),
            Step::Database => Some(&mut self.database),
            Step::Level | Step::Results => None,
        }
    }

    /// Every chosen option id, in step order.
    pub fn chosen_ids(&self) -> impl Iterator<Item = &str> {
        Step::CHOICE_STEPS
            .into_iter()
            .filter_map(|step| self.option_for(step))
    }

    #[must_use]
    pub fn has_chosen(&self, option_id: &str) -> bool {
        self.chosen_ids().any(|id| id == option_id)
    }

    /// Record `choice` as the answer to `step`.
    ///
    /// Only checks that the choice kind fits the step and that the step is
    /// the current one; catalog membership is the caller's concern.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidStep`] when `step` is not the current step, and
    /// [`CoreError::ChoiceMismatch`] when a level answers an option step or
    /// the other way round.
    pub fn answer(&self, step: Step, choice: Choice) -> Result<Self, CoreError> {
        let current = self.current_step();
        if step != current || step == Step::Results {
            return Err(CoreError::InvalidStep {
                requested: step,
                current,
            });
        }

        let mut next = self.clone();
        match (step, choice) {
            (Step::Level, Choice::Level {
                level,
                custom_hours,
            }) => {
                next.level = Some(level);
                next.custom_hours = if level == ExpertiseLevel::Custom {
                    custom_hours
                } else {
                    None
                };
            }
            (step, Choice::Option(id)) if step.takes_option() => {
                if let Some(slot) = next.option_slot(step) {
                    *slot = Some(id);
                }
            }
            (step, _) => return Err(CoreError::ChoiceMismatch { step }),
        }
        Ok(next)
    }

    /// Clear `step`'s answer and every later one.
    #[must_use]
    pub fn truncated_before(&self, step: Step) -> Self {
        let mut next = self.clone();
        for later in Step::ALL.into_iter().filter(|later| *later >= step) {
            match later {
                Step::Level => {
                    next.level = None;
                    next.custom_hours = None;
                }
                Step::Results => {}
                other => {
                    if let Some(slot) = next.option_slot(other) {
                        *slot = None;
                    }
                }
            }
        }
        next
    }
}
