use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rmap estimate`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.engine().estimate(&ctx.state), flags.format)
}
