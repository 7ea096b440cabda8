use jobscope_core::{
    CompanySizeCount, IndustryCount, ReportKind, TitleCount, TitleSalary, WorkTypeShare,
};
use schemars::{Schema, schema_for};

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `jobscope schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = row_schema(ReportKind::from(args.report));
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(&schema)?,
    };
    println!("{rendered}");
    Ok(())
}

/// JSON Schema of one row of `kind`.
#[must_use]
pub fn row_schema(kind: ReportKind) -> Schema {
    match kind {
        ReportKind::TopTitles => schema_for!(TitleCount),
        ReportKind::TopPaidTitles => schema_for!(TitleSalary),
        ReportKind::CompanySize => schema_for!(CompanySizeCount),
        ReportKind::Industries => schema_for!(IndustryCount),
        ReportKind::WorkTypes => schema_for!(WorkTypeShare),
    }
}
