use anyhow::Result;
use comfy_table::{Cell, Table};
use lattes_core::extract::{committee_counts, CommitteeCounts};
use lattes_core::{BatchReport, Processed};

use super::CommandContext;
use crate::formatting::new_table;
use crate::report::Report;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let outcome = ctx.batch()?.run(committee_counts);
    ctx.emit(
        build_report(&outcome),
        &outcome.items,
        &outcome.skipped,
        Some(build_table(&outcome.items)),
    )
}

pub fn build_report(outcome: &BatchReport<CommitteeCounts>) -> Report {
    let mut report = Report::new("Participação em Bancas");
    for item in &outcome.items {
        let counts = &item.value;
        report
            .line(format!("Arquivo: {}", item.label))
            .line(format!("Graduação: {}", counts.graduacao))
            .line(format!("Mestrado: {}", counts.mestrado))
            .line(format!("Doutorado: {}", counts.doutorado))
            .line(format!("Total de Participações: {}", counts.total()))
            .blank();
    }
    report
        .line(format!("Total de arquivos XML lidos: {}", outcome.files_read()))
        .line(format!("Total de arquivos XML executados: {}", outcome.items.len()));
    report
}

fn build_table(items: &[Processed<CommitteeCounts>]) -> Table {
    let mut table = new_table(&["Arquivo", "Graduação", "Mestrado", "Doutorado", "Total"]);
    for item in items {
        let counts = &item.value;
        table.add_row(vec![
            Cell::new(&item.label),
            Cell::new(counts.graduacao),
            Cell::new(counts.mestrado),
            Cell::new(counts.doutorado),
            Cell::new(counts.total()),
        ]);
    }
    table
}
