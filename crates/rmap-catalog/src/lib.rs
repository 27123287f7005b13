//! # rmap-catalog
//!
//! The skill catalog rmap estimates against.
//!
//! The built-in catalog is a TOML file embedded at compile time and parsed
//! once on first use. Alternate catalogs can be loaded from disk; every
//! catalog goes through the same [`validate`] pass before it is returned, so
//! downstream code can rely on unique keys and ids, non-zero effort weights,
//! and fully wired choice steps.
//!
//! # Usage
//!
//! ```
//! use rmap_core::enums::Step;
//!
//! let catalog = rmap_catalog::builtin();
//! let frontends: Vec<&str> = catalog
//!     .step_options(Step::Frontend)
//!     .map(|option| option.id.as_str())
//!     .collect();
//! assert_eq!(frontends, ["react", "nextjs", "angular"]);
//! ```

mod error;
mod validate;

pub use error::CatalogError;
pub use validate::validate;

use std::path::Path;
use std::sync::OnceLock;

use rmap_core::entities::Catalog;

/// Source of the built-in catalog.
pub const BUILTIN_TOML: &str = include_str!("../data/roadmap.toml");

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// The built-in catalog, parsed and validated on first call.
///
/// # Panics
///
/// Panics if the embedded catalog fails to parse or validate. The embedded
/// file is covered by this crate's tests, so this only fires on a broken
/// build.
pub fn builtin() -> &'static Catalog {
    BUILTIN.get_or_init(|| parse_str(BUILTIN_TOML).expect("embedded catalog must be valid"))
}

/// Parse and validate a catalog from TOML text.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for malformed TOML and a validation
/// variant for structural problems.
pub fn parse_str(text: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = toml::from_str(text)?;
    validate(&catalog)?;
    tracing::debug!(
        domains = catalog.domains.len(),
        options = catalog.options().count(),
        advisories = catalog.advisories.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Read, parse, and validate a catalog file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_str`].
pub fn load_from_path(path: &Path) -> Result<Catalog, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text)
}

/// Load the catalog at `path`, or the built-in one when no path is given.
///
/// # Errors
///
/// Same as [`load_from_path`].
pub fn load(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => load_from_path(path),
        None => Ok(builtin().clone()),
    }
}

#[cfg(test)]
mod tests {
    use rmap_core::enums::Step;

    use super::*;

    const MINIMAL: &str = r#"
[[domains]]
key = "frontend"
title = "Frontend"
focus = "UI"

[[domains.categories]]
key = "frameworks"
title = "Frameworks"
selection = "single_choice"
step = "frontend"

[[domains.categories.options]]
id = "react"
name = "React"
description = "UI library"
note = "Popular."
effort_hours = 40
level = "must_have"

[[domains.categories]]
key = "backend"
title = "Backends"
selection = "single_choice"
step = "backend"

[[domains.categories.options]]
id = "express"
name = "Express"
description = "Node framework"
note = "Classic."
effort_hours = 30
level = "basic"

[[domains.categories]]
key = "db"
title = "Databases"
selection = "single_choice"
step = "database"

[[domains.categories.options]]
id = "postgres"
name = "PostgreSQL"
description = "SQL"
note = "Reliable."
effort_hours = 25
level = "basic"
"#;

    #[test]
    fn parses_minimal_catalog() {
        let catalog = parse_str(MINIMAL).expect("minimal catalog should parse");
        assert_eq!(catalog.domains.len(), 1);
        assert_eq!(catalog.options().count(), 3);
        assert!(catalog.advisories.is_empty());
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = parse_str("[[domains]\nkey =").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn rejects_duplicate_option_ids() {
        let text = MINIMAL.replace("id = \"express\"", "id = \"react\"");
        let err = parse_str(&text).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateOption(id) if id == "react"));
    }

    #[test]
    fn rejects_duplicate_category_keys() {
        let text = MINIMAL.replace("key = \"db\"", "key = \"backend\"");
        let err = parse_str(&text).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory { .. }));
    }

    #[test]
    fn rejects_zero_effort() {
        let text = MINIMAL.replace("effort_hours = 25", "effort_hours = 0");
        let err = parse_str(&text).unwrap_err();
        assert!(matches!(err, CatalogError::ZeroEffort(id) if id == "postgres"));
    }

    #[test]
    fn rejects_missing_step() {
        let text = MINIMAL.replace("step = \"database\"\n", "");
        let err = parse_str(&text).unwrap_err();
        assert!(matches!(err, CatalogError::MissingStep(Step::Database)));
    }

    #[test]
    fn rejects_mandatory_step_category() {
        let text = MINIMAL.replacen("selection = \"single_choice\"", "selection = \"mandatory\"", 1);
        let err = parse_str(&text).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidStepCategory {
                step: Step::Frontend,
                ..
            }
        ));
    }

    #[test]
    fn rejects_level_step_category() {
        let text = MINIMAL.replace("step = \"frontend\"", "step = \"level\"");
        let err = parse_str(&text).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidStepCategory { .. }));
    }

    #[test]
    fn rejects_rule_targeting_another_step() {
        let text = format!(
            "{MINIMAL}\n[[advisories]]\nstep = \"backend\"\nwhen = {{ frontend_in = [\"react\"] }}\ntarget = \"postgres\"\nnote = \"x\"\n"
        );
        let err = parse_str(&text).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownRuleTarget { step: Step::Backend, target } if target == "postgres"
        ));
    }

    #[test]
    fn accepts_rule_targeting_its_step() {
        let text = format!(
            "{MINIMAL}\n[[advisories]]\nstep = \"backend\"\nwhen = {{ frontend_in = [\"react\"] }}\ntarget = \"express\"\nnote = \"x\"\n"
        );
        let catalog = parse_str(&text).expect("rule should validate");
        assert_eq!(catalog.advisories.len(), 1);
    }

    #[test]
    fn load_without_path_is_builtin() {
        let catalog = load(None).expect("builtin should load");
        assert_eq!(&catalog, builtin());
    }
}
