use rmap_core::enums::Step;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a step given by name (`backend`) or number (`3`).
pub fn parse_step(raw: &str) -> anyhow::Result<Step> {
    match raw.trim().parse::<u8>() {
        Ok(number) => Step::from_number(number)
            .ok_or_else(|| anyhow::anyhow!("invalid step '{raw}': steps are numbered 1 to 5")),
        Err(_) => parse_enum(raw, "step"),
    }
}
