use anyhow::{Context, Result};
use lattes_core::count_ids;
use serde::Serialize;
use std::path::Path;

use super::CommandContext;
use crate::report::Report;

#[derive(Serialize)]
struct IdCount {
    total: usize,
}

pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let total =
        count_ids(file).with_context(|| format!("failed to count IDs in {}", file.display()))?;
    ctx.emit(build_report(total), &IdCount { total }, &[], None)
}

pub fn build_report(total: usize) -> Report {
    let mut report = Report::new("Currículos Lattes");
    report.line(format!("Total de currículos Lattes cadastrados: {total}"));
    report
}
