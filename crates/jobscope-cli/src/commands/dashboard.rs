use anyhow::Context;
use chrono::Utc;
use jobscope_core::{CoreError, ReportKind};
use jobscope_warehouse::ReportSession;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::commands::report::section_for;
use crate::context::AppContext;
use crate::output::{DashboardResponse, DiagnosticsView, ReportSection, output};
use crate::progress::Progress;

/// Handle `jobscope dashboard`.
pub fn handle(args: &DashboardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = build(args, ctx)?;
    output(&response, flags.format)
}

/// Run the five reports in order within one session.
pub fn build(args: &DashboardArgs, ctx: &AppContext) -> anyhow::Result<DashboardResponse> {
    let session = ctx.session();
    let join_loss = args.join_loss || ctx.config.reports.surface_join_loss;

    let progress = Progress::spinner("running reports");
    let result = collect(&session, args, join_loss, &progress);
    match &result {
        Ok(_) => progress.finish_clear(),
        Err(_) => progress.finish_err("report failed"),
    }
    result
}

fn collect(
    session: &ReportSession<'_>,
    args: &DashboardArgs,
    join_loss: bool,
    progress: &Progress,
) -> anyhow::Result<DashboardResponse> {
    let mut sections = Vec::with_capacity(ReportKind::ALL.len());
    for kind in ReportKind::ALL {
        progress.set_message(kind.title());
        let industry = match kind {
            ReportKind::TopTitles => args.industry.as_deref(),
            ReportKind::TopPaidTitles => args.salary_industry.as_deref(),
            _ => None,
        };
        let section = match section_for(session, kind, industry) {
            Ok(section) => section,
            Err(error) => match error.downcast_ref::<CoreError>() {
                Some(unknown @ CoreError::UnknownIndustry { .. }) => {
                    tracing::warn!(report = %kind, "{unknown}");
                    ReportSection::notice(kind, unknown.to_string())
                }
                None => return Err(error),
            },
        };
        sections.push(section);
    }

    let join_loss = if join_loss {
        progress.set_message("join diagnostics");
        let diagnostics = session
            .join_diagnostics()
            .context("failed to compute join diagnostics")?;
        Some(DiagnosticsView::from(diagnostics))
    } else {
        None
    };

    Ok(DashboardResponse {
        generated_at: Utc::now(),
        sections,
        join_loss,
    })
}
