//! Published journal articles (`ARTIGO-PUBLICADO`)

use std::collections::BTreeSet;

use lattes_parser::{LattesDocument, XmlElement};
use serde::Serialize;
use tracing::trace;

use crate::tally::Tally;

const ARTICLE: &str = "ARTIGO-PUBLICADO";
const AUTHORS: &str = "AUTORES";
const AUTHOR_NAME: &str = "NOME-COMPLETO-DO-AUTOR";
const IMPACT_FACTOR: &str = "FACTOR-DE-IMPACTO";
const PERCENTILE: &str = "PERCENTIL";

/// Placeholder for an author entry without a name
pub const UNKNOWN_AUTHOR: &str = "N/A";

/// Article count and author frequencies of one researcher
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArticleSummary {
    pub articles: usize,
    pub authors: Tally,
}

/// Impact data of one article that carries both values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArticleImpact {
    pub impact_factor: f64,
    pub percentile: f64,
}

pub fn article_count(doc: &LattesDocument) -> usize {
    doc.root().count(ARTICLE)
}

fn author_names(article: &XmlElement) -> impl Iterator<Item = &str> {
    article
        .find_all(AUTHORS)
        .map(|author| author.attr(AUTHOR_NAME).unwrap_or(UNKNOWN_AUTHOR))
}

pub fn article_summary(doc: &LattesDocument) -> ArticleSummary {
    let mut summary = ArticleSummary::default();
    for article in doc.root().find_all(ARTICLE) {
        summary.articles += 1;
        for name in author_names(article) {
            summary.authors.add(name);
        }
    }
    summary
}

/// Distinct author names across every article, the researcher included
pub fn coauthors(doc: &LattesDocument) -> BTreeSet<String> {
    doc.root()
        .find_all(ARTICLE)
        .flat_map(author_names)
        .map(str::to_string)
        .collect()
}

fn numeric_text(article: &XmlElement, tag: &str) -> Option<f64> {
    article
        .find_all(tag)
        .next()
        .and_then(XmlElement::text)
        .and_then(|text| text.trim().replace(',', ".").parse().ok())
}

/// Impact factor and percentile of each article that declares both as
/// numbers; the rest are skipped
pub fn article_impacts(doc: &LattesDocument) -> Vec<ArticleImpact> {
    doc.root()
        .find_all(ARTICLE)
        .filter_map(|article| {
            let impact = numeric_text(article, IMPACT_FACTOR);
            let percentile = numeric_text(article, PERCENTILE);
            match (impact, percentile) {
                (Some(impact_factor), Some(percentile)) => Some(ArticleImpact {
                    impact_factor,
                    percentile,
                }),
                _ => {
                    trace!(file = %doc.label(), "article without impact data skipped");
                    None
                }
            }
        })
        .collect()
}
