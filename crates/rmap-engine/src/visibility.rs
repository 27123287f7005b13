//! Level-based visibility at option, category, and domain granularity.
//!
//! An option is visible when its required rank is at most the user's rank.
//! Categories with no visible option are hidden, and domains whose
//! categories are all hidden are hidden too, so a rendered heading always
//! has content beneath it.

use rmap_core::entities::{Catalog, Domain, SkillCategory, SkillOption};

/// A category together with its visible options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleCategory<'c> {
    pub category: &'c SkillCategory,
    pub options: Vec<&'c SkillOption>,
}

/// A domain together with its non-empty visible categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleDomain<'c> {
    pub domain: &'c Domain,
    pub categories: Vec<VisibleCategory<'c>>,
}

/// Options visible at `rank`, in their original order.
pub fn visible<'c, I>(options: I, rank: u8) -> Vec<&'c SkillOption>
where
    I: IntoIterator<Item = &'c SkillOption>,
{
    options
        .into_iter()
        .filter(|option| option.visible_at(rank))
        .collect()
}

/// Categories of `domain` with at least one visible option.
#[must_use]
pub fn visible_categories(domain: &Domain, rank: u8) -> Vec<VisibleCategory<'_>> {
    domain
        .categories
        .iter()
        .filter_map(|category| {
            let options = visible(&category.options, rank);
            (!options.is_empty()).then_some(VisibleCategory { category, options })
        })
        .collect()
}

/// Domains of `catalog` with at least one visible category.
#[must_use]
pub fn visible_domains(catalog: &Catalog, rank: u8) -> Vec<VisibleDomain<'_>> {
    catalog
        .domains
        .iter()
        .filter_map(|domain| {
            let categories = visible_categories(domain, rank);
            (!categories.is_empty()).then_some(VisibleDomain { domain, categories })
        })
        .collect()
}
