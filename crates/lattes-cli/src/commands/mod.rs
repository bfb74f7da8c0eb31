// Command implementations. Each module exposes `execute`.

pub mod activity;
pub mod advising;
pub mod areas;
pub mod articles;
pub mod committees;
pub mod count_ids;
pub mod events;
pub mod score;
pub mod similar;
pub mod summary;
pub mod tags;

use anyhow::{Context, Result};
use comfy_table::Table;
use lattes_core::{Batch, SkippedFile};
use serde::Serialize;

use crate::config::CliConfig;
use crate::formatting::OutputFormat;
use crate::report::{pdf, Report};

/// What every command gets: settings and where its report goes
pub struct CommandContext {
    pub config: CliConfig,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct JsonOutput<'a, T: Serialize> {
    rows: &'a T,
    skipped: &'a [SkippedFile],
}

impl CommandContext {
    pub fn new(config: CliConfig, format: OutputFormat) -> Self {
        Self { config, format }
    }

    /// Scan the configured candidate directory
    pub fn batch(&self) -> Result<Batch> {
        let dir = self.config.candidate_dir()?;
        Batch::scan(dir, self.config.recursive())
            .with_context(|| format!("failed to scan {}", dir.display()))
    }

    /// Print in the selected format, then write the PDF when one was asked for
    ///
    /// Commands without a tabular view pass `None` and fall back to plain.
    /// The skipped-file count is console only; the PDF holds the report as
    /// built.
    pub fn emit<T: Serialize>(
        &self,
        report: Report,
        rows: &T,
        skipped: &[SkippedFile],
        table: Option<Table>,
    ) -> Result<()> {
        match (self.format, table) {
            (OutputFormat::Json, _) => {
                let json = serde_json::to_string_pretty(&JsonOutput { rows, skipped })
                    .context("failed to serialize report")?;
                println!("{json}");
            }
            (OutputFormat::Table, Some(table)) => {
                println!("{}", report.title());
                println!("{table}");
                print!("{}", skipped_footer(skipped));
            }
            _ => print!("{}", plain_text(&report, skipped)),
        }

        if let Some(path) = self.config.output_path() {
            pdf::write_pdf(&report, path)?;
        }
        Ok(())
    }
}

fn skipped_footer(skipped: &[SkippedFile]) -> String {
    if skipped.is_empty() {
        String::new()
    } else {
        format!("Arquivos ignorados: {}\n", skipped.len())
    }
}

/// Console rendering: the report followed by the skipped-file count
pub fn plain_text(report: &Report, skipped: &[SkippedFile]) -> String {
    format!("{report}{}", skipped_footer(skipped))
}
