use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Step;
use crate::state::SelectionState;

/// Condition on earlier answers that activates an advisory rule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContextPredicate {
    /// The chosen frontend is one of these option ids.
    FrontendIn(Vec<String>),
    /// The chosen backend is one of these option ids.
    BackendIn(Vec<String>),
}

impl ContextPredicate {
    #[must_use]
    pub fn matches(&self, state: &SelectionState) -> bool {
        let (chosen, ids) = match self {
            Self::FrontendIn(ids) => (state.frontend.as_deref(), ids),
            Self::BackendIn(ids) => (state.backend.as_deref(), ids),
        };
        chosen.is_some_and(|chosen| ids.iter().any(|id| id == chosen))
    }
}

/// Replaces an option's note when its predicate holds.
///
/// Rules are evaluated in table order and the last matching rule for an
/// option wins.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AdvisoryRule {
    /// Step whose options this rule annotates.
    pub step: Step,
    pub when: ContextPredicate,
    /// Option id the rule rewrites.
    pub target: String,
    pub note: String,
}

impl AdvisoryRule {
    #[must_use]
    pub fn applies_to(&self, option_id: &str, state: &SelectionState) -> bool {
        self.target == option_id && self.when.matches(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nest_rule() -> AdvisoryRule {
        AdvisoryRule {
            step: Step::Backend,
            when: ContextPredicate::FrontendIn(vec!["react".into(), "nextjs".into()]),
            target: "nest".into(),
            note: "RECOMMENDED".into(),
        }
    }

    #[test]
    fn predicate_needs_a_chosen_value() {
        let rule = nest_rule();
        assert!(!rule.when.matches(&SelectionState::new()));
    }

    #[test]
    fn predicate_matches_listed_ids_only() {
        let rule = nest_rule();
        let mut state = SelectionState::new();
        state.frontend = Some("nextjs".into());
        assert!(rule.applies_to("nest", &state));
        assert!(!rule.applies_to("express", &state));

        state.frontend = Some("angular".into());
        assert!(!rule.applies_to("nest", &state));
    }

    #[test]
    fn backend_predicate_reads_backend_field() {
        let predicate = ContextPredicate::BackendIn(vec!["django".into()]);
        let mut state = SelectionState::new();
        state.frontend = Some("django".into());
        assert!(!predicate.matches(&state));
        state.backend = Some("django".into());
        assert!(predicate.matches(&state));
    }

    #[test]
    fn predicate_serializes_as_tagged_table() {
        let json = serde_json::to_value(ContextPredicate::BackendIn(vec!["nest".into()])).unwrap();
        assert_eq!(json, serde_json::json!({ "backend_in": ["nest"] }));
    }
}
