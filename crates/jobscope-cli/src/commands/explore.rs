//! Interactive industry drill-down.
//!
//! The report is fetched once when the loop starts; every pick re-filters the
//! cached rows.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use jobscope_core::{Charted, IndustryDrilldown, IndustryRanked, ReportKind};
use serde::Serialize;

use crate::cli::root_commands::{DrilldownArg, DrilldownArgs};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::sections::{Tabular, numbered_list};
use crate::output::{ReportSection, write_to};
use crate::progress::with_spinner;

/// Handle `jobscope explore`.
pub fn handle(args: &DrilldownArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.session();
    let kind = ReportKind::from(args.report);
    let failed = || format!("report '{kind}' failed");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    let picks = match args.report {
        DrilldownArg::TopTitles => {
            let drilldown =
                with_spinner(kind.title(), || session.title_drilldown()).with_context(failed)?;
            run_loop(kind, drilldown.as_ref(), &mut input, &mut out, flags.format)?
        }
        DrilldownArg::TopPaidTitles => {
            let drilldown =
                with_spinner(kind.title(), || session.salary_drilldown()).with_context(failed)?;
            run_loop(kind, drilldown.as_ref(), &mut input, &mut out, flags.format)?
        }
    };

    tracing::debug!(
        picks,
        queries = ctx.warehouse.queries_issued(),
        "explore finished"
    );
    Ok(())
}

/// Read picks from `input` until EOF or a quit command; returns the number of
/// industries shown after the initial one.
pub fn run_loop<R, I, O>(
    kind: ReportKind,
    drilldown: Option<&IndustryDrilldown<R>>,
    input: &mut I,
    out: &mut O,
    format: OutputFormat,
) -> anyhow::Result<usize>
where
    R: Serialize + Tabular + Charted + IndustryRanked,
    I: BufRead,
    O: Write,
{
    let Some(drilldown) = drilldown else {
        write_to(out, &ReportSection::no_data(kind), format)?;
        return Ok(0);
    };

    let prompts = format == OutputFormat::Table;
    write_to(out, &ReportSection::drilldown(kind, Some(drilldown), None)?, format)?;
    if prompts {
        writeln!(out, "\n{}", numbered_list(drilldown.industries()))?;
    }

    let mut picks = 0;
    let mut line = String::new();
    loop {
        if prompts {
            write!(out, "industry> ")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            if prompts {
                writeln!(out)?;
            }
            break;
        }

        match parse_pick(line.trim(), drilldown.industries()) {
            Pick::Quit => break,
            Pick::List => {
                if prompts {
                    writeln!(out, "{}", numbered_list(drilldown.industries()))?;
                }
            }
            Pick::Industry(industry) => {
                let section = ReportSection::drilldown(kind, Some(drilldown), Some(industry))?;
                write_to(out, &section, format)?;
                picks += 1;
            }
            Pick::Unknown => {
                tracing::debug!(input = line.trim(), "unrecognized industry pick");
                if prompts {
                    writeln!(out, "unknown industry: {}", line.trim())?;
                }
            }
        }
    }

    Ok(picks)
}

#[derive(Debug, PartialEq, Eq)]
enum Pick<'a> {
    Quit,
    List,
    Industry(&'a str),
    Unknown,
}

/// A 1-based number, an exact name, or a case-insensitive name.
fn parse_pick<'a>(input: &str, industries: &'a [String]) -> Pick<'a> {
    match input {
        "q" | "quit" | "exit" | "\\q" => return Pick::Quit,
        "" | "?" | "list" => return Pick::List,
        _ => {}
    }

    if let Ok(number) = input.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| industries.get(index))
            .map_or(Pick::Unknown, |industry| Pick::Industry(industry));
    }

    industries
        .iter()
        .find(|industry| industry.as_str() == input)
        .or_else(|| {
            industries
                .iter()
                .find(|industry| industry.eq_ignore_ascii_case(input))
        })
        .map_or(Pick::Unknown, |industry| Pick::Industry(industry))
}
