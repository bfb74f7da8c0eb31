use anyhow::Result;
use lattes_core::extract::{curriculum_summary, AdvisingLevel, CurriculumSummary, SummaryTotals};
use lattes_core::Processed;
use serde::Serialize;

use super::CommandContext;
use crate::report::Report;

#[derive(Serialize)]
struct SummaryRows<'a> {
    files: &'a [Processed<CurriculumSummary>],
    totals: &'a SummaryTotals,
}

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let outcome = ctx.batch()?.run(curriculum_summary);

    let mut totals = SummaryTotals::default();
    for summary in outcome.values() {
        totals.add(summary);
    }

    let rows = SummaryRows {
        files: &outcome.items,
        totals: &totals,
    };
    ctx.emit(build_report(&outcome.items, &totals), &rows, &outcome.skipped, None)
}

fn item_line(key: &str, count: usize) -> String {
    format!("{key}: {count} itens")
}

pub fn build_report(items: &[Processed<CurriculumSummary>], totals: &SummaryTotals) -> Report {
    let mut report = Report::new("Relatório Agrupado");
    for item in items {
        let summary = &item.value;
        report.blank().line(format!("Arquivo: {}", item.label));

        report.line("Formação do Orientador:");
        for (key, count) in &summary.formation {
            report.line(item_line(key, *count));
        }

        for (heading, counts) in [
            ("Orientações Concluídas:", &summary.concluded),
            ("Orientações em Andamento:", &summary.in_progress),
        ] {
            report.line(heading);
            for level in AdvisingLevel::ALL {
                report.line(item_line(level.key(), counts.get(level)));
            }
        }

        report
            .line("Participações em Bancas:")
            .line(item_line("bancas de graduacao", summary.committees.graduacao))
            .line(item_line("bancas de mestrado", summary.committees.mestrado))
            .line(item_line("bancas de doutorado", summary.committees.doutorado));

        report.line("Produção e Atividades:");
        for (key, count) in &summary.output {
            report.line(item_line(key, *count));
        }
    }

    report.blank().line("Totais de todos os arquivos analisados:");
    for (key, count) in &totals.totals {
        report.line(item_line(key, *count));
    }
    report
        .blank()
        .line(format!("Total de arquivos XML analisados: {}", totals.files));
    report
}
