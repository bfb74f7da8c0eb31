//! Teaching, research and extension activity counts

use std::collections::HashSet;

use lattes_parser::LattesDocument;
use serde::Serialize;

const TEACHING: [&str; 2] = ["ATIVIDADES-DE-ENSINO", "ENSINO"];
const DISCIPLINE: &str = "DISCIPLINA";
const RESEARCH: [&str; 2] = [
    "ATIVIDADES-DE-PESQUISA-E-DESENVOLVIMENTO",
    "PESQUISA-E-DESENVOLVIMENTO",
];
const EXTENSION: [[&str; 2]; 3] = [
    [
        "ATIVIDADES-DE-SERVICO-TECNICO-ESPECIALIZADO",
        "SERVICO-TECNICO-ESPECIALIZADO",
    ],
    ["ATIVIDADES-DE-TREINAMENTO-MINISTRADO", "TREINAMENTO-MINISTRADO"],
    ["ATIVIDADES-DE-EXTENSAO-UNIVERSITARIA", "EXTENSAO-UNIVERSITARIA"],
];

/// Raw activity counts behind the engagement score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EngagementCounts {
    /// Distinct discipline names taught
    pub teaching: usize,
    pub research: usize,
    pub extension: usize,
}

pub fn engagement_counts(doc: &LattesDocument) -> EngagementCounts {
    let root = doc.root();

    // Disciplines without text count once, as a single unnamed entry
    let disciplines: HashSet<Option<&str>> = root
        .find_path(&TEACHING)
        .into_iter()
        .flat_map(|ensino| ensino.children_named(DISCIPLINE))
        .map(|discipline| discipline.text())
        .collect();

    EngagementCounts {
        teaching: disciplines.len(),
        research: root.find_path(&RESEARCH).len(),
        extension: EXTENSION.iter().map(|path| root.find_path(path).len()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattes_parser::test_utils::{curriculum, parse_cv};

    #[test]
    fn test_counts_activities() {
        let body = r#"
<ATUACAO-PROFISSIONAL>
  <ATIVIDADES-DE-ENSINO>
    <ENSINO><DISCIPLINA>Cálculo I</DISCIPLINA><DISCIPLINA>Álgebra</DISCIPLINA></ENSINO>
    <ENSINO><DISCIPLINA>Cálculo I</DISCIPLINA></ENSINO>
  </ATIVIDADES-DE-ENSINO>
  <ATIVIDADES-DE-PESQUISA-E-DESENVOLVIMENTO>
    <PESQUISA-E-DESENVOLVIMENTO/><PESQUISA-E-DESENVOLVIMENTO/>
  </ATIVIDADES-DE-PESQUISA-E-DESENVOLVIMENTO>
  <ATIVIDADES-DE-TREINAMENTO-MINISTRADO><TREINAMENTO-MINISTRADO/></ATIVIDADES-DE-TREINAMENTO-MINISTRADO>
  <ATIVIDADES-DE-EXTENSAO-UNIVERSITARIA><EXTENSAO-UNIVERSITARIA/></ATIVIDADES-DE-EXTENSAO-UNIVERSITARIA>
  <SERVICO-TECNICO-ESPECIALIZADO/>
</ATUACAO-PROFISSIONAL>"#;
        let doc = parse_cv("cv.xml", &curriculum(body)).unwrap();
        let counts = engagement_counts(&doc);
        assert_eq!(counts.teaching, 2);
        assert_eq!(counts.research, 2);
        // The bare SERVICO-TECNICO-ESPECIALIZADO lacks its wrapper
        assert_eq!(counts.extension, 2);
    }

    #[test]
    fn test_empty_curriculum() {
        let doc = parse_cv("cv.xml", &curriculum("")).unwrap();
        assert_eq!(engagement_counts(&doc), EngagementCounts::default());
    }
}
