use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AdvisoryRule;
use crate::enums::{RequiredLevel, SelectionPolicy, SkillTag, Step};

/// A single skill, tool, or concept: the leaf of the catalog tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkillOption {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Default advisory note, shown unless an advisory rule rewrites it.
    pub note: String,
    /// Core competency hours before the level multiplier.
    pub effort_hours: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<SkillTag>,
    pub level: RequiredLevel,
}

impl SkillOption {
    /// Whether a user of the given rank should see this option.
    #[must_use]
    pub const fn visible_at(&self, rank: u8) -> bool {
        self.level.rank() <= rank
    }
}

/// A group of related options with a shared selection policy.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkillCategory {
    pub key: String,
    pub title: String,
    pub selection: SelectionPolicy,
    /// Questionnaire step that presents this category's options, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<Step>,
    pub options: Vec<SkillOption>,
}

impl SkillCategory {
    #[must_use]
    pub fn is_mandatory(&self) -> bool {
        self.selection == SelectionPolicy::Mandatory
    }
}

/// A top-level area of knowledge, e.g. frontend or databases.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Domain {
    pub key: String,
    pub title: String,
    /// One-line focus description.
    pub focus: String,
    pub categories: Vec<SkillCategory>,
}

/// The complete skill tree plus the advisory rule table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Catalog {
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub advisories: Vec<AdvisoryRule>,
}

impl Catalog {
    /// Every option with its owning domain and category, in display order.
    pub fn options(&self) -> impl Iterator<Item = (&Domain, &SkillCategory, &SkillOption)> {
        self.domains.iter().flat_map(|domain| {
            domain.categories.iter().flat_map(move |category| {
                category
                    .options
                    .iter()
                    .map(move |option| (domain, category, option))
            })
        })
    }

    #[must_use]
    pub fn find_option(&self, id: &str) -> Option<&SkillOption> {
        self.options()
            .map(|(_, _, option)| option)
            .find(|option| option.id == id)
    }

    #[must_use]
    pub fn domain(&self, key: &str) -> Option<&Domain> {
        self.domains.iter().find(|domain| domain.key == key)
    }

    /// Categories presented at `step`, in catalog order.
    pub fn step_categories(&self, step: Step) -> impl Iterator<Item = &SkillCategory> {
        self.domains
            .iter()
            .flat_map(|domain| domain.categories.iter())
            .filter(move |category| category.step == Some(step))
    }

    /// Options presented at `step`, in catalog order, before level filtering.
    pub fn step_options(&self, step: Step) -> impl Iterator<Item = &SkillOption> {
        self.step_categories(step)
            .flat_map(|category| category.options.iter())
    }

    /// Whether `id` is one of the options presented at `step`.
    #[must_use]
    pub fn step_has_option(&self, step: Step, id: &str) -> bool {
        self.step_options(step).any(|option| option.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, level: RequiredLevel) -> SkillOption {
        SkillOption {
            id: id.into(),
            name: id.to_uppercase(),
            description: String::new(),
            note: format!("{id} note"),
            effort_hours: 10,
            tag: None,
            level,
        }
    }

    fn sample() -> Catalog {
        Catalog {
            domains: vec![
                Domain {
                    key: "frontend".into(),
                    title: "Frontend".into(),
                    focus: "UI".into(),
                    categories: vec![
                        SkillCategory {
                            key: "core".into(),
                            title: "Core".into(),
                            selection: SelectionPolicy::Mandatory,
                            step: None,
                            options: vec![option("html", RequiredLevel::Basic)],
                        },
                        SkillCategory {
                            key: "frameworks".into(),
                            title: "Frameworks".into(),
                            selection: SelectionPolicy::SingleChoice,
                            step: Some(Step::Frontend),
                            options: vec![
                                option("react", RequiredLevel::Basic),
                                option("angular", RequiredLevel::Intermediate),
                            ],
                        },
                    ],
                },
                Domain {
                    key: "databases".into(),
                    title: "Databases".into(),
                    focus: "Data".into(),
                    categories: vec![
                        SkillCategory {
                            key: "relational".into(),
                            title: "SQL".into(),
                            selection: SelectionPolicy::SingleChoice,
                            step: Some(Step::Database),
                            options: vec![option("postgres", RequiredLevel::Basic)],
                        },
                        SkillCategory {
                            key: "no_sql".into(),
                            title: "NoSQL".into(),
                            selection: SelectionPolicy::SingleChoice,
                            step: Some(Step::Database),
                            options: vec![option("mongodb", RequiredLevel::Intermediate)],
                        },
                    ],
                },
            ],
            advisories: Vec::new(),
        }
    }

    #[test]
    fn options_flatten_in_display_order() {
        let catalog = sample();
        let ids: Vec<&str> = catalog
            .options()
            .map(|(_, _, option)| option.id.as_str())
            .collect();
        assert_eq!(ids, ["html", "react", "angular", "postgres", "mongodb"]);
    }

    #[test]
    fn step_options_span_categories() {
        let catalog = sample();
        let ids: Vec<&str> = catalog
            .step_options(Step::Database)
            .map(|option| option.id.as_str())
            .collect();
        assert_eq!(ids, ["postgres", "mongodb"]);
        assert_eq!(catalog.step_options(Step::Backend).count(), 0);
    }

    #[test]
    fn step_membership_is_scoped() {
        let catalog = sample();
        assert!(catalog.step_has_option(Step::Frontend, "react"));
        assert!(!catalog.step_has_option(Step::Frontend, "postgres"));
        assert!(!catalog.step_has_option(Step::Frontend, "html"));
    }

    #[test]
    fn find_option_and_domain() {
        let catalog = sample();
        assert_eq!(
            catalog.find_option("mongodb").map(|o| o.level),
            Some(RequiredLevel::Intermediate)
        );
        assert!(catalog.find_option("cobol").is_none());
        assert_eq!(catalog.domain("databases").map(|d| d.categories.len()), Some(2));
    }

    #[test]
    fn visibility_compares_ranks() {
        let angular = option("angular", RequiredLevel::Intermediate);
        assert!(!angular.visible_at(1));
        assert!(angular.visible_at(2));
        assert!(angular.visible_at(3));
    }
}
