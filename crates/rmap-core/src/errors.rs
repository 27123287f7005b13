//! Questionnaire error types.
//!
//! None of these are fatal: every one maps back to a safe state the caller
//! can recover from (re-derive the current step, keep the previous state).
//! Catalog and storage failures live in their own crates.

use thiserror::Error;

use crate::enums::Step;

#[derive(Debug, Error)]
pub enum CoreError {
    /// An answer was given for a step that is not the current one.
    #[error("Invalid step: cannot answer '{requested}' while the current step is '{current}'")]
    InvalidStep { requested: Step, current: Step },

    /// The chosen id is not an option of the step's categories visible at the
    /// user's level.
    #[error("Unknown option id '{id}' for step '{step}'")]
    UnknownOptionId { step: Step, id: String },

    /// A level was given for an option step, or an option id for the level step.
    #[error("Choice does not fit step '{step}'")]
    ChoiceMismatch { step: Step },

    /// Custom hours must be positive and finite.
    #[error("Invalid custom hours: {0} (must be a positive number)")]
    InvalidCustomHours(f64),
}
