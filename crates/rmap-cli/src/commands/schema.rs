use rmap_core::entities::Catalog;
use rmap_core::responses::{Estimate, OptionView, RoadmapResponse};
use rmap_core::state::SelectionState;
use rmap_store::Snapshot;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `rmap schema`.
pub const SCHEMA_TYPES: [&str; 6] = [
    "selection_state",
    "snapshot",
    "report",
    "estimate",
    "catalog",
    "option_view",
];

/// JSON Schema for a public type, by name.
fn schema_json(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let normalized = type_name.trim().to_ascii_lowercase().replace('-', "_");
    let schema = match normalized.as_str() {
        "selection_state" => schema_for!(SelectionState),
        "snapshot" => schema_for!(Snapshot),
        "report" => schema_for!(RoadmapResponse),
        "estimate" => schema_for!(Estimate),
        "catalog" => schema_for!(Catalog),
        "option_view" => schema_for!(OptionView),
        _ => anyhow::bail!(
            "unknown schema type '{type_name}'; expected one of: {}",
            SCHEMA_TYPES.join(", ")
        ),
    };
    Ok(serde_json::to_value(schema)?)
}

/// Handle `rmap schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_json(&args.type_name)?, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in SCHEMA_TYPES {
            let schema = schema_json(name).expect("schema should generate");
            assert!(schema.is_object(), "{name}");
        }
    }

    #[test]
    fn snapshot_schema_requires_state() {
        let schema = schema_json("snapshot").unwrap();
        let required = schema["required"].as_array().expect("required list");
        assert!(required.iter().any(|field| field == "state"));
    }

    #[test]
    fn unknown_type_lists_choices() {
        let err = schema_json("session").unwrap_err();
        assert!(err.to_string().contains("selection_state"));
    }
}
