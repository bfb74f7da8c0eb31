use anyhow::Result;
use lattes_core::extract::{article_summary, ArticleSummary};
use lattes_core::Processed;

use super::CommandContext;
use crate::report::Report;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let outcome = ctx.batch()?.run(article_summary);
    ctx.emit(build_report(&outcome.items), &outcome.items, &outcome.skipped, None)
}

pub fn build_report(items: &[Processed<ArticleSummary>]) -> Report {
    let mut report = Report::new("Artigos Publicados");
    for item in items {
        report
            .line(format!("Arquivo XML: {}", item.label))
            .line(format!("Total de artigos publicados: {}", item.value.articles))
            .line("Autores dos Artigos:");
        for entry in item.value.authors.ranked() {
            report.line(format!("  - Autor: {}, Quantidade: {}", entry.value, entry.count));
        }
        report.rule('-');
    }
    report
}
