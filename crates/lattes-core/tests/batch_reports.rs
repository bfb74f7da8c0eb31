//! End-to-end runs over a directory of exports

use std::fs;
use std::path::Path;

use lattes_core::config::{FormationSection, LattesConfig};
use lattes_core::extract::{advising_counts, article_count, extract_areas, research_profile};
use lattes_core::scoring::{advising_experience_score, rank_candidates, SeniorityScorer};
use lattes_core::{Batch, ResearchProfile, ScoreResult};
use lattes_parser::test_utils::{area, curriculum, formation};
use lattes_parser::LattesDocument;
use tempfile::TempDir;

const EXACT: Option<&str> = Some("Ciências Exatas e da Terra");
const CC: Option<&str> = Some("Ciência da Computação");
const AI: Option<&str> = Some("Inteligência Artificial");

fn write_cv(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), curriculum(body)).unwrap();
}

fn reference() -> ResearchProfile {
    let body = [
        formation("DOUTORADO", &[area(EXACT, CC, AI, Some("Aprendizado de Máquina"))]),
        formation("MESTRADO", &[area(Some("Ciências Biológicas"), Some("Genética"), None, None)]),
    ]
    .concat();
    let doc = LattesDocument::parse_str("ref.xml", &curriculum(&body)).unwrap();
    research_profile(&doc, &FormationSection::ALL)
}

#[test]
fn test_similarity_ranking_over_directory() {
    let dir = TempDir::new().unwrap();
    write_cv(
        dir.path(),
        "ana.xml",
        &formation(
            "GRADUACAO",
            &[
                area(EXACT, CC, AI, Some("Robótica")),
                area(Some("Ciências Humanas"), None, None, None),
                area(Some("Engenharias"), None, None, None),
            ],
        ),
    );
    write_cv(
        dir.path(),
        "bruno.xml",
        &formation("DOUTORADO", &[area(EXACT, CC, AI, Some("Aprendizado de Máquina"))]),
    );
    write_cv(
        dir.path(),
        "carla.xml",
        &formation("MESTRADO", &[area(Some("Ciências Humanas"), None, None, None)]),
    );
    fs::write(dir.path().join("quebrado.xml"), "<CURRICULO-VITAE>").unwrap();

    let config = LattesConfig::default();
    let batch = Batch::scan(dir.path(), false).unwrap();
    let report = batch.run(|doc| research_profile(doc, &config.similarity.sections));
    assert_eq!(report.skipped.len(), 1);

    let reference = reference();
    let ranked = rank_candidates(&reference, report.values());
    assert_eq!(
        ranked,
        vec![ScoreResult::new("bruno.xml", 11), ScoreResult::new("ana.xml", 6)]
    );
}

#[test]
fn test_empty_directory_ranks_nothing() {
    let dir = TempDir::new().unwrap();
    let batch = Batch::scan(dir.path(), false).unwrap();
    let report = batch.run(|doc| research_profile(doc, &FormationSection::ALL));
    assert!(rank_candidates(&reference(), report.values()).is_empty());
}

#[test]
fn test_empty_reference_ranks_nothing() {
    let dir = TempDir::new().unwrap();
    write_cv(dir.path(), "ana.xml", &formation("GRADUACAO", &[area(EXACT, None, None, None)]));
    let batch = Batch::scan(dir.path(), false).unwrap();
    let report = batch.run(|doc| research_profile(doc, &FormationSection::ALL));

    let empty = ResearchProfile::new("ref.xml", Vec::new());
    assert!(rank_candidates(&empty, report.values()).is_empty());
}

#[test]
fn test_sections_restrict_extraction() {
    let body = [
        formation("GRADUACAO", &[area(EXACT, None, None, None)]),
        formation("POS-DOUTORADO", &[area(EXACT, CC, None, None)]),
    ]
    .concat();
    let doc = LattesDocument::parse_str("cv.xml", &curriculum(&body)).unwrap();
    assert_eq!(extract_areas(&doc, &[FormationSection::PosDoutorado]).len(), 1);
    assert_eq!(extract_areas(&doc, &FormationSection::ALL).len(), 2);
}

#[test]
fn test_seniority_over_batch() {
    let dir = TempDir::new().unwrap();
    write_cv(
        dir.path(),
        "produtivo.xml",
        "<ARTIGO-PUBLICADO/><ARTIGO-PUBLICADO/><ORIENTACOES-CONCLUIDAS-PARA-DOUTORADO/>",
    );
    write_cv(dir.path(), "iniciante.xml", "");

    let config = LattesConfig::default();
    let batch = Batch::scan(dir.path(), false).unwrap();
    let report = batch.run(|doc| (article_count(doc), advising_counts(doc)));

    let articles: Vec<usize> = report.values().map(|(n, _)| *n).collect();
    let scorer = SeniorityScorer::for_batch(&articles, &config.experience);

    let scores: Vec<f64> = report
        .values()
        .map(|(n, counts)| scorer.score(&counts.experience(), *n).score)
        .collect();
    // iniciante.xml sorts first: no articles, no advising
    assert_eq!(scores[0], 0.0);
    assert!(scores[1] > 0.0);

    let experience: Vec<f64> = report
        .values()
        .map(|(_, counts)| advising_experience_score(counts, &config.experience))
        .collect();
    assert_eq!(experience, vec![0.0, 16.0]);
}
