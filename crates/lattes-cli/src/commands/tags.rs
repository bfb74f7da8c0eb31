use anyhow::{Context, Result};
use lattes_core::extract::tag_inventory;
use lattes_parser::LattesDocument;
use std::collections::BTreeSet;
use std::path::Path;

use super::CommandContext;
use crate::report::Report;

pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let doc = LattesDocument::from_path(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let tags = tag_inventory(&doc);
    ctx.emit(build_report(doc.label(), &tags), &tags, &[], None)
}

pub fn build_report(label: &str, tags: &BTreeSet<String>) -> Report {
    let mut report = Report::new(format!("Tags do arquivo {label}"));
    for tag in tags {
        report.line(tag.as_str());
    }
    report.line(format!("Total de tags distintas: {}", tags.len()));
    report
}
