use anyhow::Result;
use comfy_table::{Cell, Table};
use lattes_core::extract::{advising_counts, AdvisingCounts, AdvisingLevel, LevelCounts};
use lattes_core::scoring::advising_experience_score;
use serde::Serialize;

use super::CommandContext;
use crate::formatting::{format_score, new_table};
use crate::report::Report;

#[derive(Debug, Serialize)]
pub struct AdvisingRow {
    pub file: String,
    pub counts: AdvisingCounts,
    pub experience: LevelCounts,
    pub score: f64,
}

fn level_label(level: AdvisingLevel) -> &'static str {
    match level {
        AdvisingLevel::IniciacaoCientifica => "Iniciação Científica",
        AdvisingLevel::Graduacao => "Graduação",
        AdvisingLevel::Mestrado => "Mestrado",
        AdvisingLevel::Doutorado => "Doutorado",
    }
}

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = &ctx.config.settings.experience;
    let outcome = ctx.batch()?.run(advising_counts);

    let rows: Vec<AdvisingRow> = outcome
        .items
        .iter()
        .map(|item| AdvisingRow {
            file: item.label.clone(),
            counts: item.value,
            experience: item.value.experience(),
            score: advising_experience_score(&item.value, config),
        })
        .collect();

    ctx.emit(build_report(&rows), &rows, &outcome.skipped, Some(build_table(&rows)))
}

pub fn build_report(rows: &[AdvisingRow]) -> Report {
    let mut report = Report::new("Orientações");
    for row in rows {
        report.line(format!("Orientador: {}", row.file));
        for (heading, counts) in [
            ("Concluídas:", &row.counts.concluded),
            ("Em andamento:", &row.counts.in_progress),
        ] {
            report.line(heading);
            for level in AdvisingLevel::ALL {
                report.line(format!("  {}: {}", level_label(level), counts.get(level)));
            }
        }
        report.line("Experiência:");
        for level in AdvisingLevel::ALL {
            report.line(format!(
                "  Experiência em {}: {}",
                level_label(level),
                row.experience.get(level)
            ));
        }
        report
            .line(format!("Pontuação de experiência: {}", format_score(row.score)))
            .rule('-');
    }
    report
}

fn build_table(rows: &[AdvisingRow]) -> Table {
    let mut header = vec!["Arquivo"];
    header.extend(AdvisingLevel::ALL.map(level_label));
    header.push("Pontuação");

    let mut table = new_table(&header);
    for row in rows {
        let mut cells = vec![Cell::new(&row.file)];
        cells.extend(
            AdvisingLevel::ALL.map(|level| Cell::new(row.experience.get(level))),
        );
        cells.push(Cell::new(format_score(row.score)));
        table.add_row(cells);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_shows_both_states_and_score() {
        let counts = AdvisingCounts {
            concluded: LevelCounts {
                doutorado: 1,
                ..Default::default()
            },
            in_progress: LevelCounts {
                doutorado: 1,
                ..Default::default()
            },
        };
        let rows = vec![AdvisingRow {
            file: "cv.xml".to_string(),
            counts,
            experience: counts.experience(),
            score: 16.0,
        }];
        let lines = build_report(&rows).text_lines().join("\n");

        assert!(lines.contains("Orientador: cv.xml"));
        assert!(lines.contains("  Experiência em Doutorado: 2"));
        assert!(lines.contains("  Experiência em Mestrado: 0"));
        assert!(lines.contains("Pontuação de experiência: 16.00"));
    }
}
