use anyhow::{Context, bail};
use jobscope_core::ReportKind;
use jobscope_warehouse::ReportSession;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::context::AppContext;
use crate::output::{ReportSection, output};
use crate::progress::with_spinner;

/// Handle `jobscope report`.
pub fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = ReportKind::from(args.kind);
    if args.industry.is_some() && !kind.has_industry_selector() {
        bail!("report '{kind}' has no industry selector");
    }

    let session = ctx.session();
    let section = with_spinner(kind.title(), || {
        section_for(&session, kind, args.industry.as_deref())
    })?;
    output(&section, flags.format)
}

/// Fetch (or reuse) one report and shape it as a section.
///
/// `industry` only applies to the two drill-down reports.
pub fn section_for(
    session: &ReportSession<'_>,
    kind: ReportKind,
    industry: Option<&str>,
) -> anyhow::Result<ReportSection> {
    let failed = || format!("report '{kind}' failed");
    match kind {
        ReportKind::TopTitles => {
            let drilldown = session.title_drilldown().with_context(failed)?;
            ReportSection::drilldown(kind, drilldown.as_ref(), industry)
        }
        ReportKind::TopPaidTitles => {
            let drilldown = session.salary_drilldown().with_context(failed)?;
            ReportSection::drilldown(kind, drilldown.as_ref(), industry)
        }
        ReportKind::CompanySize => {
            ReportSection::from_outcome(kind, session.company_size().with_context(failed)?)
        }
        ReportKind::Industries => {
            ReportSection::from_outcome(kind, session.industries().with_context(failed)?)
        }
        ReportKind::WorkTypes => {
            ReportSection::from_outcome(kind, session.work_types().with_context(failed)?)
        }
    }
}
