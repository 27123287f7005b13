//! Questionnaire operations over a read-only catalog.
//!
//! [`RoadmapEngine`] holds no session data. Every operation takes the
//! caller's [`SelectionState`] and returns a new value, so one engine can
//! serve any number of sessions.

use rmap_core::entities::Catalog;
use rmap_core::enums::{ExpertiseLevel, Step};
use rmap_core::errors::CoreError;
use rmap_core::level::rank;
use rmap_core::responses::{Estimate, LevelChoice, OptionView, Report, RoadmapResponse};
use rmap_core::state::{Choice, SelectionState};

use crate::advisory::{matching_rule, rules_for};
use crate::visibility::visible;

#[derive(Debug, Clone, Copy)]
pub struct RoadmapEngine<'c> {
    catalog: &'c Catalog,
}

impl RoadmapEngine<'static> {
    /// Engine over the built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(rmap_catalog::builtin())
    }
}

impl<'c> RoadmapEngine<'c> {
    #[must_use]
    pub const fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    #[must_use]
    pub fn initial_state(&self) -> SelectionState {
        SelectionState::new()
    }

    /// Discard every answer.
    #[must_use]
    pub fn reset(&self) -> SelectionState {
        tracing::debug!("selection reset");
        self.initial_state()
    }

    #[must_use]
    pub const fn current_step(&self, state: &SelectionState) -> Step {
        state.current_step()
    }

    /// Whether `id` is an option of `step` visible at `user_rank`.
    fn offers(&self, step: Step, id: &str, user_rank: u8) -> bool {
        self.catalog
            .step_options(step)
            .any(|option| option.id == id && option.visible_at(user_rank))
    }

    /// Levels offered at the level step, in display order.
    #[must_use]
    pub fn level_choices(&self) -> Vec<LevelChoice> {
        ExpertiseLevel::ALL.into_iter().map(LevelChoice::from).collect()
    }

    /// Options offered at `step`, filtered by the user's rank and annotated
    /// against the answers so far. Empty for the level and results steps.
    #[must_use]
    pub fn options_for(&self, step: Step, state: &SelectionState) -> Vec<OptionView> {
        if !step.takes_option() {
            return Vec::new();
        }

        let user_rank = rank(state.level);
        visible(self.catalog.step_options(step), user_rank)
            .into_iter()
            .map(|option| {
                let rule = matching_rule(rules_for(&self.catalog.advisories, step), &option.id, state);
                OptionView {
                    option: option.clone(),
                    advisory: rule.map_or_else(|| option.note.clone(), |rule| rule.note.clone()),
                    recommended: rule.is_some(),
                }
            })
            .collect()
    }

    /// Answer `step` and return the next state.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownOptionId`] when the id is not offered at `step`
    /// for the state's level, and the errors of [`SelectionState::answer`] otherwise. The input
    /// state is never modified.
    pub fn advance(
        &self,
        state: &SelectionState,
        step: Step,
        choice: Choice,
    ) -> Result<SelectionState, CoreError> {
        if step == state.current_step()
            && let Choice::Option(id) = &choice
            && !self.offers(step, id, rank(state.level))
        {
            tracing::debug!(%step, id = %id, "rejected unknown option");
            return Err(CoreError::UnknownOptionId {
                step,
                id: id.clone(),
            });
        }

        let next = state.answer(step, choice)?;
        tracing::debug!(%step, next = %next.current_step(), "advanced");
        Ok(next)
    }

    /// Normalise a persisted state.
    ///
    /// Keeps the longest valid prefix of answers: everything after the first
    /// unset field is dropped, an id the catalog does not offer at its step
    /// for the stored level is cleared together with every later answer,
    /// and `custom_hours`
    /// survives only under the custom level.
    #[must_use]
    pub fn restore(&self, state: SelectionState) -> SelectionState {
        let mut restored = state;

        if restored.level != Some(ExpertiseLevel::Custom) && restored.custom_hours.is_some() {
            tracing::warn!("dropping custom hours without the custom level");
            restored.custom_hours = None;
        }

        let user_rank = rank(restored.level);
        for step in Step::ALL {
            let answered = match step {
                Step::Level => restored.level.is_some(),
                Step::Results => continue,
                choice_step => match restored.option_for(choice_step) {
                    None => false,
                    Some(id) if self.offers(choice_step, id, user_rank) => true,
                    Some(id) => {
                        tracing::warn!(step = %choice_step, id = %id, "dropping unknown option from snapshot");
                        false
                    }
                },
            };
            if !answered {
                let truncated = restored.truncated_before(step);
                if truncated != restored {
                    tracing::warn!(%step, "snapshot truncated");
                }
                restored = truncated;
                break;
            }
        }

        tracing::debug!(step = %restored.current_step(), "state restored");
        restored
    }

    #[must_use]
    pub fn build_report(&self, state: &SelectionState) -> Report {
        crate::report::build_report(self.catalog, state)
    }

    #[must_use]
    pub fn estimate(&self, state: &SelectionState) -> Estimate {
        crate::estimate::estimate(self.catalog, state)
    }

    /// Estimate and report together, as shown on the results step.
    #[must_use]
    pub fn roadmap(&self, state: &SelectionState) -> RoadmapResponse {
        RoadmapResponse {
            estimate: self.estimate(state),
            report: self.build_report(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rmap_core::state::CustomHours;

    use super::*;

    fn ids(views: &[OptionView]) -> Vec<&str> {
        views.iter().map(|view| view.option.id.as_str()).collect()
    }

    fn basic() -> SelectionState {
        SelectionState {
            level: Some(ExpertiseLevel::Basic),
            ..SelectionState::new()
        }
    }

    #[test]
    fn level_choices_follow_display_order() {
        let engine = RoadmapEngine::builtin();
        let labels: Vec<String> = engine.level_choices().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, ["Novice", "Competent", "Polishing Up", "Custom"]);
    }

    #[test]
    fn options_for_non_choice_steps_is_empty() {
        let engine = RoadmapEngine::builtin();
        assert!(engine.options_for(Step::Level, &basic()).is_empty());
        assert!(engine.options_for(Step::Results, &basic()).is_empty());
    }

    #[test]
    fn options_for_respects_rank() {
        let engine = RoadmapEngine::builtin();
        assert_eq!(ids(&engine.options_for(Step::Frontend, &basic())), ["react"]);
        assert_eq!(
            ids(&engine.options_for(Step::Frontend, &SelectionState::new())),
            ["react", "nextjs", "angular"]
        );
    }

    #[test]
    fn advance_rejects_unknown_option() {
        let engine = RoadmapEngine::builtin();
        let err = engine
            .advance(&basic(), Step::Frontend, Choice::option("django"))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownOptionId { step: Step::Frontend, ref id } if id == "django"
        ));
    }

    #[test]
    fn advance_rejects_option_above_the_level() {
        let engine = RoadmapEngine::builtin();
        let state = engine
            .advance(&basic(), Step::Frontend, Choice::option("react"))
            .unwrap();
        assert_eq!(state.frontend.as_deref(), Some("react"));

        let err = engine
            .advance(&basic(), Step::Frontend, Choice::option("nextjs"))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownOptionId { step: Step::Frontend, ref id } if id == "nextjs"
        ));
    }

    #[test]
    fn advance_out_of_order_is_invalid_step() {
        let engine = RoadmapEngine::builtin();
        let err = engine
            .advance(&basic(), Step::Backend, Choice::option("nonexistent"))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidStep { .. }));
    }

    #[test]
    fn restore_keeps_valid_state() {
        let engine = RoadmapEngine::builtin();
        let state = SelectionState {
            level: Some(ExpertiseLevel::Intermediate),
            custom_hours: None,
            frontend: Some("react".into()),
            backend: Some("express".into()),
            database: Some("postgres".into()),
        };
        assert_eq!(engine.restore(state.clone()), state);
    }

    #[test]
    fn restore_clears_unknown_id_and_later_answers() {
        let engine = RoadmapEngine::builtin();
        let state = SelectionState {
            level: Some(ExpertiseLevel::Basic),
            custom_hours: None,
            frontend: Some("react".into()),
            backend: Some("cobol".into()),
            database: Some("postgres".into()),
        };
        let restored = engine.restore(state);
        assert_eq!(restored.frontend.as_deref(), Some("react"));
        assert_eq!(restored.backend, None);
        assert_eq!(restored.database, None);
        assert_eq!(restored.current_step(), Step::Backend);
    }

    #[test]
    fn restore_drops_answers_after_a_gap() {
        let engine = RoadmapEngine::builtin();
        let state = SelectionState {
            frontend: Some("react".into()),
            ..SelectionState::new()
        };
        assert_eq!(engine.restore(state), SelectionState::new());
    }

    #[test]
    fn restore_drops_stray_custom_hours() {
        let engine = RoadmapEngine::builtin();
        let state = SelectionState {
            custom_hours: Some(CustomHours::new(40.0).unwrap()),
            ..basic()
        };
        assert_eq!(engine.restore(state), basic());
    }

    #[test]
    fn restore_clears_option_hidden_at_the_level() {
        let engine = RoadmapEngine::builtin();
        let state = SelectionState {
            frontend: Some("react".into()),
            backend: Some("nest".into()),
            database: Some("postgres".into()),
            ..basic()
        };
        let restored = engine.restore(state);
        assert_eq!(restored.frontend.as_deref(), Some("react"));
        assert_eq!(restored.backend, None);
        assert_eq!(restored.database, None);
    }

    #[test]
    fn restore_rejects_option_from_another_step() {
        let engine = RoadmapEngine::builtin();
        let state = SelectionState {
            frontend: Some("postgres".into()),
            ..basic()
        };
        assert_eq!(engine.restore(state), basic());
    }
}
