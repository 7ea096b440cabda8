use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod chart;
pub mod sections;
pub mod table;

pub use sections::{
    DashboardResponse, DiagnosticsView, IndustriesResponse, ReportSection, TextView,
};

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(value.to_text(table_options())),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response to stdout in the requested format.
pub fn output<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Write a response to `out` in the requested format.
pub fn write_to<T, W>(out: &mut W, value: &T, format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + TextView,
    W: Write,
{
    let rendered = render(value, format)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}
