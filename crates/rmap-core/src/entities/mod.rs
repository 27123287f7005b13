//! Entity structs for the skill catalog.
//!
//! The catalog is a three-level ownership tree: a [`Catalog`] owns its
//! [`Domain`]s, which own their [`SkillCategory`]s, which own their
//! [`SkillOption`]s. Vectors keep the authored display order; keys are unique
//! within their parent. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema`.

mod advisory;
mod skill;

pub use advisory::{AdvisoryRule, ContextPredicate};
pub use skill::{Catalog, Domain, SkillCategory, SkillOption};
