//! Catalog loading and validation errors.

use std::path::PathBuf;

use rmap_core::enums::Step;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog text is not valid TOML or does not match the catalog shape.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate domain key '{0}'")]
    DuplicateDomain(String),

    #[error("Duplicate category key '{category}' in domain '{domain}'")]
    DuplicateCategory { domain: String, category: String },

    /// Option ids are unique across the whole catalog.
    #[error("Duplicate option id '{0}'")]
    DuplicateOption(String),

    #[error("Option '{0}' has zero effort hours")]
    ZeroEffort(String),

    /// A choice step has no category to offer.
    #[error("No category is attached to step '{0}'")]
    MissingStep(Step),

    /// Only single- or multiple-choice categories can back a choice step,
    /// and only the frontend, backend, and database steps take options.
    #[error("Category '{domain}.{category}' cannot be attached to step '{step}'")]
    InvalidStepCategory {
        domain: String,
        category: String,
        step: Step,
    },

    /// An advisory rule targets an option its step never offers.
    #[error("Advisory rule for step '{step}' targets unknown option '{target}'")]
    UnknownRuleTarget { step: Step, target: String },
}
