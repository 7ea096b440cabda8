use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{DiagnosticsView, output};
use crate::progress::with_spinner;

/// Handle `jobscope diagnostics`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session();
    let diagnostics = with_spinner("counting join loss", || session.join_diagnostics())
        .context("failed to compute join diagnostics")?;
    output(&DiagnosticsView::from(diagnostics), flags.format)
}
