use anyhow::Result;
use lattes_core::extract::{congress_years, CongressYears};
use lattes_core::Processed;

use super::CommandContext;
use crate::report::Report;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let outcome = ctx.batch()?.run(congress_years);
    ctx.emit(build_report(&outcome.items), &outcome.items, &outcome.skipped, None)
}

pub fn build_report(items: &[Processed<CongressYears>]) -> Report {
    let mut report = Report::new("Participação em Congressos por Ano");
    report.rule('=');
    for item in items {
        report.line(format!("Arquivo: {}", item.label));
        for entry in item.value.years.entries() {
            report.line(format!(
                "Ano: {}, Quantidade de Eventos: {}",
                entry.value, entry.count
            ));
        }
        report
            .line(format!("Total de Eventos: {}", item.value.total()))
            .rule('-');
    }
    report
}
