//! Contextual advisory notes.
//!
//! Rules are data (see [`AdvisoryRule`]); this module only evaluates them.
//! Evaluation is a pure function of the rule table, the option, and the
//! selection state. The catalog is never modified.

use rmap_core::entities::{AdvisoryRule, SkillOption};
use rmap_core::enums::Step;
use rmap_core::state::SelectionState;

/// Rules that annotate options offered at `step`.
pub fn rules_for(rules: &[AdvisoryRule], step: Step) -> impl Iterator<Item = &AdvisoryRule> {
    rules.iter().filter(move |rule| rule.step == step)
}

/// Last rule in table order that rewrites `option_id` under `state`.
pub fn matching_rule<'r, I>(rules: I, option_id: &str, state: &SelectionState) -> Option<&'r AdvisoryRule>
where
    I: IntoIterator<Item = &'r AdvisoryRule>,
{
    rules
        .into_iter()
        .filter(|rule| rule.applies_to(option_id, state))
        .last()
}

/// Note to show for `option`: the last matching rule's note, else the default.
pub fn annotate<'a, I>(rules: I, option: &'a SkillOption, state: &SelectionState) -> &'a str
where
    I: IntoIterator<Item = &'a AdvisoryRule>,
{
    matching_rule(rules, &option.id, state).map_or(option.note.as_str(), |rule| rule.note.as_str())
}

#[cfg(test)]
mod tests {
    use rmap_core::entities::ContextPredicate;
    use rmap_core::enums::RequiredLevel;

    use super::*;

    fn option(id: &str) -> SkillOption {
        SkillOption {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            note: format!("default {id}"),
            effort_hours: 10,
            tag: None,
            level: RequiredLevel::Basic,
        }
    }

    fn rule(target: &str, backend: &str, note: &str) -> AdvisoryRule {
        AdvisoryRule {
            step: Step::Database,
            when: ContextPredicate::BackendIn(vec![backend.into()]),
            target: target.into(),
            note: note.into(),
        }
    }

    fn with_backend(backend: &str) -> SelectionState {
        SelectionState {
            backend: Some(backend.into()),
            ..SelectionState::new()
        }
    }

    #[test]
    fn default_note_without_match() {
        let rules = vec![rule("postgres", "django", "use postgres")];
        let postgres = option("postgres");
        assert_eq!(annotate(&rules, &postgres, &with_backend("golang")), "default postgres");
        assert_eq!(annotate(&rules, &postgres, &SelectionState::new()), "default postgres");
    }

    #[test]
    fn matching_rule_overrides_note() {
        let rules = vec![rule("postgres", "django", "use postgres")];
        let postgres = option("postgres");
        assert_eq!(annotate(&rules, &postgres, &with_backend("django")), "use postgres");
        assert_eq!(annotate(&rules, &option("mysql"), &with_backend("django")), "default mysql");
    }

    #[test]
    fn last_matching_rule_wins() {
        let rules = vec![
            rule("postgres", "nest", "first"),
            rule("postgres", "golang", "never"),
            rule("postgres", "nest", "second"),
        ];
        let postgres = option("postgres");
        assert_eq!(annotate(&rules, &postgres, &with_backend("nest")), "second");
        assert_eq!(annotate(&rules, &postgres, &with_backend("golang")), "never");
    }

    #[test]
    fn rules_for_filters_by_step() {
        let mut rules = vec![rule("postgres", "nest", "db")];
        rules.push(AdvisoryRule {
            step: Step::Backend,
            when: ContextPredicate::FrontendIn(vec!["react".into()]),
            target: "nest".into(),
            note: "be".into(),
        });
        assert_eq!(rules_for(&rules, Step::Backend).count(), 1);
        assert_eq!(rules_for(&rules, Step::Database).count(), 1);
        assert_eq!(rules_for(&rules, Step::Frontend).count(), 0);
    }
}
