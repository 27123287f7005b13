//! Learning-time estimation.
//!
//! Every option the user's rank can see counts toward core hours when its
//! category is mandatory or the user chose it. The level multiplier scales
//! core hours into the total, except for `Custom`, whose total is the
//! user's own budget.

use rmap_core::entities::Catalog;
use rmap_core::enums::ExpertiseLevel;
use rmap_core::level::rank;
use rmap_core::responses::Estimate;
use rmap_core::state::SelectionState;

/// Scale core hours by a level multiplier.
///
/// Halves round away from zero.
#[must_use]
pub fn scale_hours(core_hours: f64, multiplier: f64) -> f64 {
    (core_hours * multiplier).round()
}

/// Core competency hours counted for `state`.
#[must_use]
pub fn core_hours(catalog: &Catalog, state: &SelectionState) -> u32 {
    let user_rank = rank(state.level);
    catalog
        .options()
        .filter(|(_, _, option)| option.visible_at(user_rank))
        .filter(|(_, category, option)| category.is_mandatory() || state.has_chosen(&option.id))
        .map(|(_, _, option)| option.effort_hours)
        .sum()
}

/// Estimate for `state`. Never fails; an unset level yields zeros.
#[must_use]
pub fn estimate(catalog: &Catalog, state: &SelectionState) -> Estimate {
    let Some(level) = state.level else {
        return Estimate::default();
    };

    let core_hours = core_hours(catalog, state);
    let total_hours = match (level, state.custom_hours) {
        (ExpertiseLevel::Custom, Some(hours)) => hours.get(),
        (level, _) => scale_hours(f64::from(core_hours), level.multiplier()),
    };
    Estimate {
        total_hours,
        core_hours,
    }
}
