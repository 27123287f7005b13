use rmap_core::entities::Catalog;
use rmap_core::enums::{RequiredLevel, SelectionPolicy, SkillTag};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Tabular, output_rows};

#[derive(Debug, Serialize)]
struct CatalogRow<'c> {
    domain: &'c str,
    category: &'c str,
    id: &'c str,
    name: &'c str,
    level: RequiredLevel,
    effort_hours: u32,
    selection: SelectionPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<SkillTag>,
}

impl Tabular for CatalogRow<'_> {
    const HEADERS: &'static [&'static str] =
        &["domain", "category", "id", "name", "level", "hours", "selection"];

    fn row(&self) -> Vec<String> {
        vec![
            self.domain.to_string(),
            self.category.to_string(),
            self.id.to_string(),
            self.name.to_string(),
            self.level.to_string(),
            self.effort_hours.to_string(),
            self.selection.to_string(),
        ]
    }
}

fn rows(catalog: &Catalog) -> Vec<CatalogRow<'_>> {
    catalog
        .options()
        .map(|(domain, category, option)| CatalogRow {
            domain: &domain.key,
            category: &category.key,
            id: &option.id,
            name: &option.name,
            level: option.level,
            effort_hours: option.effort_hours,
            selection: category.selection,
            tag: option.tag,
        })
        .collect()
}

/// Handle `rmap catalog`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_rows(&rows(&ctx.catalog), flags.format)
}
