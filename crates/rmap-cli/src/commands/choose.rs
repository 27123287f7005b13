use anyhow::Context;
use rmap_core::enums::{ExpertiseLevel, Step};
use rmap_core::responses::StatusResponse;
use rmap_core::state::{Choice, CustomHours};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChooseArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Turn the command-line answer into a [`Choice`] for `step`.
fn choice_for(step: Step, args: &ChooseArgs) -> anyhow::Result<Choice> {
    match step {
        Step::Level => {
            let level: ExpertiseLevel = parse_enum(&args.value, "level")?;
            let custom_hours = args.hours.map(CustomHours::new).transpose()?;
            if level == ExpertiseLevel::Custom && custom_hours.is_none() {
                tracing::warn!("custom level without --hours estimates zero hours");
            } else if level != ExpertiseLevel::Custom && custom_hours.is_some() {
                tracing::warn!(%level, "--hours only applies to the custom level; ignored");
            }
            Ok(Choice::Level {
                level,
                custom_hours,
            })
        }
        Step::Results => {
            anyhow::bail!("every step is answered; run 'rmap reset' to start over")
        }
        _ => Ok(Choice::option(args.value.trim())),
    }
}

/// Handle `rmap choose`.
pub fn handle(args: &ChooseArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let step = ctx.state.current_step();
    let choice = choice_for(step, args)?;
    let next = ctx
        .engine()
        .advance(&ctx.state, step, choice)
        .with_context(|| format!("cannot choose '{}' at the {step} step", args.value))?;
    ctx.commit(next);
    output(&StatusResponse::from(&ctx.state), flags.format)
}
