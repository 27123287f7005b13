use rmap_core::enums::Step;
use rmap_core::responses::{LevelChoice, OptionView};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OptionsArgs;
use crate::commands::shared::parse::parse_step;
use crate::context::AppContext;
use crate::output::{Tabular, output_rows};

#[derive(Serialize)]
#[serde(transparent)]
struct LevelRow(LevelChoice);

impl Tabular for LevelRow {
    const HEADERS: &'static [&'static str] = &["level", "label", "description"];

    fn row(&self) -> Vec<String> {
        vec![
            self.0.level.to_string(),
            self.0.label.clone(),
            self.0.description.clone(),
        ]
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct OptionRow(OptionView);

impl Tabular for OptionRow {
    const HEADERS: &'static [&'static str] =
        &["id", "name", "level", "hours", "tag", "status", "note"];

    fn row(&self) -> Vec<String> {
        let view = &self.0;
        vec![
            view.option.id.clone(),
            view.option.name.clone(),
            view.option.level.to_string(),
            view.option.effort_hours.to_string(),
            view.option.tag.map_or_else(|| String::from("-"), |tag| tag.label().to_string()),
            String::from(if view.recommended { "recommended" } else { "-" }),
            view.advisory.clone(),
        ]
    }
}

/// Handle `rmap options`.
pub fn handle(args: &OptionsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let step = match args.step.as_deref() {
        Some(raw) => parse_step(raw)?,
        None => ctx.state.current_step(),
    };

    let engine = ctx.engine();
    if step == Step::Level {
        let rows = engine.level_choices().into_iter().map(LevelRow).collect::<Vec<_>>();
        return output_rows(&rows, flags.format);
    }

    let rows = engine
        .options_for(step, &ctx.state)
        .into_iter()
        .map(OptionRow)
        .collect::<Vec<_>>();
    output_rows(&rows, flags.format)
}
