use rmap_core::responses::{Report, ReportEntry};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{Tabular, output, render_rows, yes_no};

/// One report entry with its place in the catalog tree.
#[derive(Serialize)]
struct ReportRow<'r> {
    domain: &'r str,
    category: &'r str,
    #[serde(flatten)]
    entry: &'r ReportEntry,
}

impl Tabular for ReportRow<'_> {
    const HEADERS: &'static [&'static str] =
        &["domain", "category", "id", "name", "hours", "in path", "chosen", "note"];

    fn row(&self) -> Vec<String> {
        vec![
            self.domain.to_string(),
            self.category.to_string(),
            self.entry.option.id.clone(),
            self.entry.option.name.clone(),
            self.entry.option.effort_hours.to_string(),
            yes_no(self.entry.included),
            yes_no(self.entry.chosen),
            self.entry.advisory.clone(),
        ]
    }
}

fn rows(report: &Report) -> Vec<ReportRow<'_>> {
    report
        .domains
        .iter()
        .flat_map(|domain| {
            domain.categories.iter().flat_map(move |category| {
                category.entries.iter().map(move |entry| ReportRow {
                    domain: &domain.title,
                    category: &category.title,
                    entry,
                })
            })
        })
        .collect()
}

/// Handle `rmap report`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let roadmap = ctx.engine().roadmap(&ctx.state);
    if flags.format != OutputFormat::Table {
        return output(&roadmap, flags.format);
    }

    let estimate = roadmap.estimate;
    println!(
        "Estimated time: {} hours ({} core competency hours)\n",
        estimate.total_hours, estimate.core_hours
    );
    println!("{}", render_rows(&rows(&roadmap.report), flags.format)?);
    Ok(())
}
