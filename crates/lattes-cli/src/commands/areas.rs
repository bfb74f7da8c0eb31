use anyhow::Result;
use lattes_core::extract::{distinct_area_names, sectioned_areas, AreaSection};
use lattes_core::{KnowledgeArea, Processed};
use std::collections::BTreeSet;

use super::CommandContext;
use crate::report::Report;

const ABSENT: &str = "None";

pub fn execute(ctx: &CommandContext, distinct: bool) -> Result<()> {
    let batch = ctx.batch()?;
    if distinct {
        let outcome = batch.run(distinct_area_names);
        ctx.emit(distinct_report(&outcome.items), &outcome.items, &outcome.skipped, None)
    } else {
        let outcome = batch.run(sectioned_areas);
        ctx.emit(sectioned_report(&outcome.items), &outcome.items, &outcome.skipped, None)
    }
}

fn level(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(ABSENT)
}

fn push_area(report: &mut Report, area: &KnowledgeArea) {
    report
        .line(format!("  Grande Área: {}", level(&area.grande_area)))
        .line(format!("  Área: {}", level(&area.area)))
        .line(format!("  Sub-área: {}", level(&area.sub_area)))
        .line(format!("  Especialidade: {}", level(&area.especialidade)))
        .blank();
}

pub fn sectioned_report(items: &[Processed<Vec<AreaSection>>]) -> Report {
    let mut report = Report::new("Áreas de Conhecimento por Formação");
    for item in items {
        report.line(format!("Orientador: {}", item.label)).rule('-');
        for section in &item.value {
            report.line(section.title.as_str());
            for area in &section.areas {
                push_area(&mut report, area);
            }
        }
        report.rule('-');
    }
    report
}

pub fn distinct_report(items: &[Processed<BTreeSet<String>>]) -> Report {
    let mut report = Report::new("Áreas, Sub-áreas e Especialidades Distintas");
    for item in items {
        report.line(format!("Arquivo: {}", item.label));
        for name in &item.value {
            report.line(format!("  - {name}"));
        }
        report.rule('-');
    }
    report
}
