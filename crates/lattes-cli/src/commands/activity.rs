use anyhow::Result;
use lattes_core::extract::{activity_areas, ActivityAreas};
use lattes_core::Processed;
use serde::Serialize;

use super::CommandContext;
use crate::formatting::format_percentage;
use crate::report::Report;

#[derive(Serialize)]
struct ActivityRows<'a> {
    files: &'a [Processed<ActivityAreas>],
    totals: &'a ActivityAreas,
}

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let outcome = ctx.batch()?.run(activity_areas);

    let mut totals = ActivityAreas::default();
    for areas in outcome.values() {
        totals.merge(areas);
    }

    let rows = ActivityRows {
        files: &outcome.items,
        totals: &totals,
    };
    ctx.emit(build_report(&outcome.items, &totals), &rows, &outcome.skipped, None)
}

fn push_levels(report: &mut Report, areas: &ActivityAreas) {
    for (heading, tally) in areas.levels() {
        report.line(format!("{heading}: {} itens", tally.total()));
        for entry in tally.entries() {
            report.line(format!(
                "  - {}: {} vezes ({})",
                entry.value,
                entry.count,
                format_percentage(entry.percentage)
            ));
        }
    }
}

pub fn build_report(items: &[Processed<ActivityAreas>], totals: &ActivityAreas) -> Report {
    let mut report = Report::new("Áreas de Atuação");
    for item in items {
        report.line(format!("Arquivo: {}", item.label));
        push_levels(&mut report, &item.value);
        report.rule('-');
    }
    report.line("Totais de todos os arquivos:");
    push_levels(&mut report, totals);
    report
}
