//! `score <kind>`: advisor scores over a batch

use anyhow::Result;
use comfy_table::{Cell, Table};
use lattes_config::LattesConfig;
use lattes_core::extract::{
    advising_counts, article_count, article_impacts, coauthors, committee_counts,
    engagement_counts, AdvisingCounts, EngagementCounts,
};
use lattes_core::scoring::{
    engagement_score, production_score, quality_score, quality_tiers, reputation_scores,
    ReputationInput, SeniorityScorer,
};
use lattes_core::{BatchReport, SkippedFile};
use serde::Serialize;
use tracing::info;

use super::CommandContext;
use crate::cli::ScoreKind;
use crate::formatting::{format_score, new_table};
use crate::report::Report;

/// One supporting figure of a score
#[derive(Debug, Clone, Serialize)]
pub struct Detail {
    pub label: String,
    pub value: f64,
}

impl Detail {
    fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    fn count(label: impl Into<String>, value: usize) -> Self {
        Self::new(label, value as f64)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreRow {
    pub file: String,
    pub details: Vec<Detail>,
    pub score: f64,
}

/// Rows plus any batch-level figures printed above them
#[derive(Debug, Default, Serialize)]
pub struct ScoreSheet {
    pub header: Vec<Detail>,
    pub rows: Vec<ScoreRow>,
}

pub fn execute(ctx: &CommandContext, kind: ScoreKind) -> Result<()> {
    let batch = ctx.batch()?;
    let settings = &ctx.config.settings;

    let (sheet, skipped) = match kind {
        ScoreKind::Engagement => {
            let outcome = batch.run(engagement_counts);
            (engagement_sheet(&outcome, settings), outcome.skipped)
        }
        ScoreKind::Quality => {
            let outcome = batch.run(advising_counts);
            (quality_sheet(&outcome, settings), outcome.skipped)
        }
        ScoreKind::Reputation => {
            let outcome = batch.run(|doc| ReputationInput {
                committees: committee_counts(doc).total(),
                coauthors: coauthors(doc).len(),
            });
            (reputation_sheet(&outcome, settings), outcome.skipped)
        }
        ScoreKind::Experience => {
            let outcome = batch.run(|doc| (advising_counts(doc), article_count(doc)));
            (experience_sheet(&outcome, settings), outcome.skipped)
        }
        ScoreKind::Production => {
            let outcome =
                batch.run(|doc| production_score(&article_impacts(doc), &settings.production));
            (production_sheet(&outcome), outcome.skipped)
        }
    };

    info!(kind = ?kind, scored = sheet.rows.len(), "computed scores");
    emit_sheet(ctx, kind, &sheet, &skipped)
}

fn emit_sheet(
    ctx: &CommandContext,
    kind: ScoreKind,
    sheet: &ScoreSheet,
    skipped: &[SkippedFile],
) -> Result<()> {
    let table = build_table(kind, sheet);
    ctx.emit(build_report(kind, sheet), sheet, skipped, Some(table))
}

pub fn engagement_sheet(
    outcome: &BatchReport<EngagementCounts>,
    settings: &LattesConfig,
) -> ScoreSheet {
    let rows = outcome
        .items
        .iter()
        .map(|item| ScoreRow {
            file: item.label.clone(),
            details: vec![
                Detail::count("Pontuação de Ensino (PE)", item.value.teaching),
                Detail::count("Pontuação de Pesquisa (PP)", item.value.research),
                Detail::count("Pontuação de Extensão (PX)", item.value.extension),
            ],
            score: engagement_score(&item.value, &settings.engagement),
        })
        .collect();
    ScoreSheet {
        header: Vec::new(),
        rows,
    }
}

pub fn quality_sheet(
    outcome: &BatchReport<AdvisingCounts>,
    settings: &LattesConfig,
) -> ScoreSheet {
    const TIERS: [&str; 3] = ["Iniciação Científica", "Mestrado", "Doutorado"];

    let rows = outcome
        .items
        .iter()
        .map(|item| {
            let details = TIERS
                .iter()
                .zip(quality_tiers(&item.value))
                .flat_map(|(tier, counts)| {
                    [
                        Detail::count(format!("{tier} concluídas"), counts.concluded),
                        Detail::count(format!("{tier} em andamento"), counts.in_progress),
                    ]
                })
                .collect();
            ScoreRow {
                file: item.label.clone(),
                details,
                score: quality_score(&item.value, &settings.quality),
            }
        })
        .collect();
    ScoreSheet {
        header: Vec::new(),
        rows,
    }
}

pub fn reputation_sheet(
    outcome: &BatchReport<ReputationInput>,
    settings: &LattesConfig,
) -> ScoreSheet {
    let inputs: Vec<ReputationInput> = outcome.values().copied().collect();
    let scores = reputation_scores(&inputs, &settings.reputation);

    let rows = outcome
        .items
        .iter()
        .zip(scores)
        .map(|(item, score)| ScoreRow {
            file: item.label.clone(),
            details: vec![
                Detail::count("Total de participações em bancas", item.value.committees),
                Detail::count("Total de coautores", item.value.coauthors),
            ],
            score,
        })
        .collect();
    ScoreSheet {
        header: Vec::new(),
        rows,
    }
}

pub fn experience_sheet(
    outcome: &BatchReport<(AdvisingCounts, usize)>,
    settings: &LattesConfig,
) -> ScoreSheet {
    let config = &settings.experience;
    let article_counts: Vec<usize> = outcome.values().map(|(_, articles)| *articles).collect();
    let scorer = SeniorityScorer::for_batch(&article_counts, config);

    let rows = outcome
        .items
        .iter()
        .map(|item| {
            let (counts, articles) = &item.value;
            let seniority = scorer.score(&counts.experience(), *articles);
            ScoreRow {
                file: item.label.clone(),
                details: vec![
                    Detail::count("Número de Artigos Publicados", seniority.articles),
                    Detail::count("Experiência em Graduação", seniority.graduacao),
                    Detail::count("Experiência em Mestrado", seniority.mestrado),
                    Detail::count("Experiência em Doutorado", seniority.doutorado),
                    Detail::new("Fator de qualidade", seniority.quality_factor),
                ],
                score: seniority.score,
            }
        })
        .collect();

    ScoreSheet {
        header: vec![Detail::new(
            format!("P_max (Percentil {} das publicações)", config.percentile),
            scorer.p_max(),
        )],
        rows,
    }
}

pub fn production_sheet(outcome: &BatchReport<f64>) -> ScoreSheet {
    let rows = outcome
        .items
        .iter()
        .map(|item| ScoreRow {
            file: item.label.clone(),
            details: Vec::new(),
            score: item.value,
        })
        .collect();
    ScoreSheet {
        header: Vec::new(),
        rows,
    }
}

fn score_label(kind: ScoreKind) -> &'static str {
    match kind {
        ScoreKind::Engagement => "Pontuação de Engajamento",
        ScoreKind::Quality => "Pontuação de Qualidade",
        ScoreKind::Reputation => "Pontuação de Reputação",
        ScoreKind::Experience => "Pontuação da Experiência",
        ScoreKind::Production => "Pontuação da Produção Científica",
    }
}

fn title(kind: ScoreKind) -> &'static str {
    match kind {
        ScoreKind::Engagement => "Pontuação de Engajamento Acadêmico",
        ScoreKind::Quality => "Pontuação da Qualidade por Nível de Orientação",
        ScoreKind::Reputation => "Pontuação de Reputação",
        ScoreKind::Experience => "Pontuação da Experiência em Orientação",
        ScoreKind::Production => "Pontuação da Produção Científica",
    }
}

/// Whole numbers print bare, anything else with two decimals
fn format_detail(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format_score(value)
    }
}

pub fn build_report(kind: ScoreKind, sheet: &ScoreSheet) -> Report {
    let mut report = Report::new(title(kind));
    report.rule('=');
    for detail in &sheet.header {
        report.line(format!("{}: {}", detail.label, format_detail(detail.value)));
    }
    for row in &sheet.rows {
        report.line(format!("Arquivo: {}", row.file));
        for detail in &row.details {
            report.line(format!("  {}: {}", detail.label, format_detail(detail.value)));
        }
        report
            .line(format!("  {}: {}", score_label(kind), format_score(row.score)))
            .rule('-');
    }
    report
}

fn build_table(kind: ScoreKind, sheet: &ScoreSheet) -> Table {
    let mut header = vec!["Arquivo"];
    if let Some(first) = sheet.rows.first() {
        header.extend(first.details.iter().map(|d| d.label.as_str()));
    }
    header.push(score_label(kind));

    let mut table = new_table(&header);
    for row in &sheet.rows {
        let mut cells = vec![Cell::new(&row.file)];
        cells.extend(row.details.iter().map(|d| Cell::new(format_detail(d.value))));
        cells.push(Cell::new(format_score(row.score)));
        table.add_row(cells);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattes_core::Processed;

    fn processed<T>(label: &str, value: T) -> Processed<T> {
        Processed {
            label: label.to_string(),
            stem: label.trim_end_matches(".xml").to_string(),
            value,
        }
    }

    #[test]
    fn test_reputation_is_normalized_over_the_batch() {
        let outcome = BatchReport {
            items: vec![
                processed("a.xml", ReputationInput { committees: 0, coauthors: 4 }),
                processed("b.xml", ReputationInput { committees: 10, coauthors: 0 }),
            ],
            skipped: Vec::new(),
        };
        let sheet = reputation_sheet(&outcome, &LattesConfig::default());
        let scores: Vec<f64> = sheet.rows.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![0.5, 0.5]);
    }

    #[test]
    fn test_production_report() {
        let outcome = BatchReport {
            items: vec![processed("a.xml", 25.0)],
            skipped: Vec::new(),
        };
        let report = build_report(ScoreKind::Production, &production_sheet(&outcome));
        assert_eq!(
            report.text_lines(),
            vec!["Arquivo: a.xml", "  Pontuação da Produção Científica: 25.00"]
        );
    }

    #[test]
    fn test_experience_header_shows_ceiling() {
        let outcome = BatchReport {
            items: vec![
                processed("a.xml", (Default::default(), 0)),
                processed("b.xml", (Default::default(), 10)),
            ],
            skipped: Vec::new(),
        };
        let sheet = experience_sheet(&outcome, &LattesConfig::default());
        let lines = build_report(ScoreKind::Experience, &sheet).text_lines().join("\n");
        assert!(lines.contains("P_max (Percentil 90 das publicações): 9"));
        assert!(lines.contains("  Número de Artigos Publicados: 10"));
    }

    #[test]
    fn test_detail_formatting() {
        assert_eq!(format_detail(3.0), "3");
        assert_eq!(format_detail(1.0 / 9.0), "0.11");
    }
}
