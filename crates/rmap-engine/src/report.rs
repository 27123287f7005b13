//! The results-step report: the catalog tree filtered to the user's rank.
//!
//! Advisory rules are scoped to the choice step they target, so report
//! entries carry each option's default note.

use rmap_core::entities::{Catalog, SkillCategory, SkillOption};
use rmap_core::level::rank;
use rmap_core::responses::{CategoryReport, DomainReport, Report, ReportEntry};
use rmap_core::state::SelectionState;

use crate::visibility::{VisibleCategory, visible_domains};

fn entry(category: &SkillCategory, option: &SkillOption, state: &SelectionState) -> ReportEntry {
    let chosen = state.has_chosen(&option.id);
    ReportEntry {
        option: option.clone(),
        advisory: option.note.clone(),
        chosen,
        included: chosen || category.is_mandatory(),
    }
}

fn category_report(visible: &VisibleCategory<'_>, state: &SelectionState) -> CategoryReport {
    CategoryReport {
        key: visible.category.key.clone(),
        title: visible.category.title.clone(),
        selection: visible.category.selection,
        entries: visible
            .options
            .iter()
            .map(|option| entry(visible.category, option, state))
            .collect(),
    }
}

/// Build the report for `state`.
///
/// Depends only on the catalog and the state passed in, so a state built
/// step by step and the same state built directly report identically.
#[must_use]
pub fn build_report(catalog: &Catalog, state: &SelectionState) -> Report {
    let user_rank = rank(state.level);
    let domains = visible_domains(catalog, user_rank)
        .iter()
        .map(|visible| DomainReport {
            key: visible.domain.key.clone(),
            title: visible.domain.title.clone(),
            focus: visible.domain.focus.clone(),
            categories: visible
                .categories
                .iter()
                .map(|category| category_report(category, state))
                .collect(),
        })
        .collect();

    Report {
        level: state.level,
        rank: user_rank,
        domains,
    }
}
