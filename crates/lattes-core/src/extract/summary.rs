//! Grouped curriculum summary: formation, advising, committees and
//! production counts of one researcher

use indexmap::IndexMap;
use lattes_parser::LattesDocument;
use serde::Serialize;

use super::advising::{advising_counts, AdvisingLevel, LevelCounts};
use super::committees::{committee_counts, CommitteeCounts};

/// (report key, element counted at any depth)
const FORMATION: [(&str, &str); 5] = [
    ("graduacoes", "GRADUACAO"),
    ("especializacoes", "ESPECIALIZACAO"),
    ("mestrados", "MESTRADO"),
    ("doutorados", "DOUTORADO"),
    ("pos_doutorados", "POS-DOUTORADO"),
];

const OUTPUT: [(&str, &str); 15] = [
    ("areas_de_atuacao", "AREA-DE-ATUACAO"),
    ("premios_titulos", "PREMIO-TITULO"),
    ("artigos_completos_publicados", "ARTIGO-PUBLICADO"),
    ("livros_publicados_ou_organizados", "LIVROS-PUBLICADOS-OU-ORGANIZADOS"),
    ("capitulos_livros_publicados", "CAPITULO-DE-LIVRO-PUBLICADO"),
    ("apresentacoes_trabalho", "APRESENTACAO-DE-TRABALHO"),
    ("participacao_eventos", "PARTICIPACAO-EM-EVENTO"),
    ("organizacao_eventos", "ORGANIZACAO-DE-EVENTO"),
    ("patentes", "PATENTE"),
    ("softwares", "SOFTWARE"),
    ("projetos_tecnicos", "PROJETO-TECNICO"),
    ("trabalhos_tecnicos", "TRABALHO-TECNICO"),
    ("trabalhos_artisticos", "TRABALHO-ARTISTICO"),
    ("linhas_de_pesquisa", "LINHA-DE-PESQUISA"),
    ("idiomas", "IDIOMA"),
];

/// Every count of one curriculum, grouped as printed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurriculumSummary {
    pub formation: IndexMap<String, usize>,
    pub concluded: LevelCounts,
    pub in_progress: LevelCounts,
    pub committees: CommitteeCounts,
    pub output: IndexMap<String, usize>,
}

fn count_tags(doc: &LattesDocument, table: &[(&str, &str)]) -> IndexMap<String, usize> {
    table
        .iter()
        .map(|(key, tag)| (key.to_string(), doc.root().count(tag)))
        .collect()
}

pub fn curriculum_summary(doc: &LattesDocument) -> CurriculumSummary {
    let advising = advising_counts(doc);
    CurriculumSummary {
        formation: count_tags(doc, &FORMATION),
        concluded: advising.concluded,
        in_progress: advising.in_progress,
        committees: committee_counts(doc),
        output: count_tags(doc, &OUTPUT),
    }
}

impl CurriculumSummary {
    /// Every (key, count) pair in print order
    ///
    /// Concluded and in-progress advising share their level keys, so batch
    /// totals add both states together.
    pub fn flatten(&self) -> Vec<(String, usize)> {
        let mut pairs: Vec<(String, usize)> = self
            .formation
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        for counts in [&self.concluded, &self.in_progress] {
            pairs.extend(
                AdvisingLevel::ALL
                    .iter()
                    .map(|level| (level.key().to_string(), counts.get(*level))),
            );
        }
        pairs.extend([
            ("bancas de graduacao".to_string(), self.committees.graduacao),
            ("bancas de mestrado".to_string(), self.committees.mestrado),
            ("bancas de doutorado".to_string(), self.committees.doutorado),
        ]);
        pairs.extend(self.output.iter().map(|(k, v)| (k.clone(), *v)));
        pairs
    }
}

/// Per-key totals over a batch, in first-seen key order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryTotals {
    pub totals: IndexMap<String, usize>,
    pub files: usize,
}

impl SummaryTotals {
    pub fn add(&mut self, summary: &CurriculumSummary) {
        for (key, count) in summary.flatten() {
            *self.totals.entry(key).or_insert(0) += count;
        }
        self.files += 1;
    }
}
