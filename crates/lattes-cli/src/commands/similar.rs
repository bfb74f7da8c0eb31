use anyhow::{Context, Result};
use comfy_table::{Cell, Color};
use lattes_core::extract::research_profile;
use lattes_core::scoring::rank_candidates;
use lattes_core::ScoreResult;
use lattes_parser::LattesDocument;
use tracing::info;

use super::CommandContext;
use crate::formatting::new_table;
use crate::report::Report;

pub const TITLE: &str = "Resultados da Comparação de Áreas de Conhecimento";

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let sections = &ctx.config.settings.similarity.sections;

    // Nothing to score against without the reference, so this one is fatal.
    let reference_path = ctx.config.reference_path()?;
    let reference = LattesDocument::from_path(reference_path)
        .with_context(|| format!("failed to read reference {}", reference_path.display()))?;
    let reference = research_profile(&reference, sections);
    info!(
        reference = %reference.label(),
        areas = reference.areas().len(),
        "loaded reference profile"
    );

    let batch = ctx.batch()?;
    let outcome = batch.run(|doc| research_profile(doc, sections));
    let ranked = rank_candidates(&reference, outcome.values());

    ctx.emit(
        build_report(&ranked),
        &ranked,
        &outcome.skipped,
        Some(build_table(&ranked)),
    )
}

pub fn build_report(ranked: &[ScoreResult]) -> Report {
    let mut report = Report::new(TITLE);
    report.rule('=');
    for result in ranked {
        report
            .line(format!(
                "Arquivo: {} - Pontuação Total: {}",
                result.file, result.score
            ))
            .rule('-');
    }
    report
}

fn build_table(ranked: &[ScoreResult]) -> comfy_table::Table {
    let mut table = new_table(&["Arquivo", "Pontuação Total"]);
    for (i, result) in ranked.iter().enumerate() {
        let score = Cell::new(result.score);
        let score = if i == 0 { score.fg(Color::Green) } else { score };
        table.add_row(vec![Cell::new(&result.file), score]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let ranked = vec![ScoreResult::new("b.xml", 11), ScoreResult::new("a.xml", 6)];
        let report = build_report(&ranked);
        assert_eq!(
            report.text_lines(),
            vec![
                "Arquivo: b.xml - Pontuação Total: 11",
                "Arquivo: a.xml - Pontuação Total: 6",
            ]
        );
        assert_eq!(report.lines().len(), 5);
    }
}
