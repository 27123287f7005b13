use rmap_core::responses::StatusResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rmap reset`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.clear();
    output(&StatusResponse::from(&ctx.state), flags.format)
}
