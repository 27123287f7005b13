//! Ordinal ranks used to compare a user's expertise with a skill's required level.
//!
//! Ranks are `1..=3`. `Custom` ranks as a professional so every skill is
//! visible; an unset level ranks as intermediate.

use crate::enums::{ExpertiseLevel, RequiredLevel};

/// Rank used when no level has been chosen yet.
pub const DEFAULT_RANK: u8 = 2;

/// Highest rank; sees every skill.
pub const MAX_RANK: u8 = 3;

impl ExpertiseLevel {
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Intermediate => 2,
            Self::Professional | Self::Custom => 3,
        }
    }
}

impl RequiredLevel {
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Intermediate => 2,
            Self::Professional => 3,
        }
    }
}

/// Rank of an optional expertise level.
#[must_use]
pub const fn rank(level: Option<ExpertiseLevel>) -> u8 {
    match level {
        Some(level) => level.rank(),
        None => DEFAULT_RANK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ranks() {
        assert_eq!(rank(Some(ExpertiseLevel::Basic)), 1);
        assert_eq!(rank(Some(ExpertiseLevel::Intermediate)), 2);
        assert_eq!(rank(Some(ExpertiseLevel::Professional)), 3);
        assert_eq!(rank(Some(ExpertiseLevel::Custom)), MAX_RANK);
    }

    #[test]
    fn unset_level_ranks_as_intermediate() {
        assert_eq!(rank(None), ExpertiseLevel::Intermediate.rank());
    }

    #[test]
    fn option_ranks_follow_required_level_order() {
        assert_eq!(RequiredLevel::Basic.rank(), 1);
        assert_eq!(RequiredLevel::Intermediate.rank(), 2);
        assert_eq!(RequiredLevel::Professional.rank(), 3);
    }
}
