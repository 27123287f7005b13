use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A value that renders as one table row with fixed columns.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

/// Render a serializable response to a string in the requested format.
///
/// Tables show objects as sorted key/value pairs.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render a list of rows; tables use each item's own columns.
pub fn render_rows<T: Serialize + Tabular>(
    items: &[T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table if items.is_empty() => Ok(String::from("(no rows)")),
        OutputFormat::Table => {
            let rows = items.iter().map(Tabular::row).collect::<Vec<_>>();
            Ok(table::render_rows(T::HEADERS, &rows, table_options()))
        }
        OutputFormat::Json | OutputFormat::Raw => render(&items, format),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a list of rows in the requested format.
pub fn output_rows<T: Serialize + Tabular>(items: &[T], format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_rows(items, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_value_table(value: &Value) -> anyhow::Result<String> {
    let rows = match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
            .collect::<Vec<_>>(),
        Value::Array(items) if items.is_empty() => return Ok(String::from("(no rows)")),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| vec![index.to_string(), value_to_cell(item)])
            .collect(),
        scalar => vec![vec![String::from("value"), value_to_cell(scalar)]],
    };
    Ok(table::render_rows(&["key", "value"], &rows, table_options()))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

/// Table cell for a flag.
pub fn yes_no(flag: bool) -> String {
    String::from(if flag { "yes" } else { "no" })
}
