//! Structural checks run on every catalog before it is handed out.

use std::collections::HashSet;

use rmap_core::entities::Catalog;
use rmap_core::enums::{SelectionPolicy, Step};

use crate::error::CatalogError;

/// Check key uniqueness, effort weights, step wiring, and advisory targets.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found, in catalog order.
pub fn validate(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut domain_keys = HashSet::new();
    let mut option_ids = HashSet::new();

    for domain in &catalog.domains {
        if !domain_keys.insert(domain.key.as_str()) {
            return Err(CatalogError::DuplicateDomain(domain.key.clone()));
        }

        let mut category_keys = HashSet::new();
        for category in &domain.categories {
            if !category_keys.insert(category.key.as_str()) {
                return Err(CatalogError::DuplicateCategory {
                    domain: domain.key.clone(),
                    category: category.key.clone(),
                });
            }

            if let Some(step) = category.step
                && (!step.takes_option() || category.selection == SelectionPolicy::Mandatory)
            {
                return Err(CatalogError::InvalidStepCategory {
                    domain: domain.key.clone(),
                    category: category.key.clone(),
                    step,
                });
            }

            for option in &category.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(CatalogError::DuplicateOption(option.id.clone()));
                }
                if option.effort_hours == 0 {
                    return Err(CatalogError::ZeroEffort(option.id.clone()));
                }
            }
        }
    }

    for step in Step::CHOICE_STEPS {
        if catalog.step_categories(step).next().is_none() {
            return Err(CatalogError::MissingStep(step));
        }
    }

    for rule in &catalog.advisories {
        if !catalog.step_has_option(rule.step, &rule.target) {
            return Err(CatalogError::UnknownRuleTarget {
                step: rule.step,
                target: rule.target.clone(),
            });
        }
    }

    Ok(())
}
