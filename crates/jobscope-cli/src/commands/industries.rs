use anyhow::Context;
use jobscope_core::ReportKind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{DrilldownArg, DrilldownArgs};
use crate::context::AppContext;
use crate::output::{IndustriesResponse, output};
use crate::progress::with_spinner;

/// Handle `jobscope industries`.
pub fn handle(args: &DrilldownArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = with_spinner("loading industries", || build(args.report, ctx))?;
    output(&response, flags.format)
}

fn build(report: DrilldownArg, ctx: &AppContext) -> anyhow::Result<IndustriesResponse> {
    let session = ctx.session();
    let kind = ReportKind::from(report);
    let failed = || format!("report '{kind}' failed");

    Ok(match report {
        DrilldownArg::TopTitles => {
            IndustriesResponse::new(kind, session.title_drilldown().with_context(failed)?.as_ref())
        }
        DrilldownArg::TopPaidTitles => IndustriesResponse::new(
            kind,
            session.salary_drilldown().with_context(failed)?.as_ref(),
        ),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::testing::{empty_context, seeded_context};

    #[test]
    fn lists_industries_alphabetically() {
        let ctx = seeded_context();
        let response = build(DrilldownArg::TopTitles, &ctx).unwrap();
        assert_eq!(
            response.industries,
            vec!["Financial Services", "Retail", "Software Development"]
        );
        assert_eq!(response.default.as_deref(), Some("Financial Services"));
    }

    #[test]
    fn salary_report_offers_only_industries_with_salaries() {
        let ctx = seeded_context();
        let response = build(DrilldownArg::TopPaidTitles, &ctx).unwrap();
        assert_eq!(response.industries.len(), 3);
    }

    #[test]
    fn empty_report_has_message_instead_of_values() {
        let ctx = empty_context();
        let response = build(DrilldownArg::TopPaidTitles, &ctx).unwrap();
        assert!(response.industries.is_empty());
        assert_eq!(
            response.message,
            Some(ReportKind::TopPaidTitles.no_data_message())
        );
    }
}
