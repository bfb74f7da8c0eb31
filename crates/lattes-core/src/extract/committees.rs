//! Examining-committee (banca) participation

use lattes_parser::LattesDocument;
use serde::Serialize;

const BANCA_GRADUACAO: &str = "DADOS-BASICOS-DA-PARTICIPACAO-EM-BANCA-DE-GRADUACAO";
const BANCA_MESTRADO: &str = "DADOS-BASICOS-DA-PARTICIPACAO-EM-BANCA-DE-MESTRADO";
const BANCA_DOUTORADO: &str = "DADOS-BASICOS-DA-PARTICIPACAO-EM-BANCA-DE-DOUTORADO";

/// Banca participations per degree level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommitteeCounts {
    pub graduacao: usize,
    pub mestrado: usize,
    pub doutorado: usize,
}

impl CommitteeCounts {
    pub fn total(&self) -> usize {
        self.graduacao + self.mestrado + self.doutorado
    }
}

pub fn committee_counts(doc: &LattesDocument) -> CommitteeCounts {
    let root = doc.root();
    CommitteeCounts {
        graduacao: root.count(BANCA_GRADUACAO),
        mestrado: root.count(BANCA_MESTRADO),
        doutorado: root.count(BANCA_DOUTORADO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattes_parser::test_utils::{curriculum, parse_cv};

    #[test]
    fn test_counts_each_level() {
        let body = r#"
<PARTICIPACAO-EM-BANCA-TRABALHOS-CONCLUSAO>
  <PARTICIPACAO-EM-BANCA-DE-MESTRADO><DADOS-BASICOS-DA-PARTICIPACAO-EM-BANCA-DE-MESTRADO/></PARTICIPACAO-EM-BANCA-DE-MESTRADO>
  <PARTICIPACAO-EM-BANCA-DE-MESTRADO><DADOS-BASICOS-DA-PARTICIPACAO-EM-BANCA-DE-MESTRADO/></PARTICIPACAO-EM-BANCA-DE-MESTRADO>
  <PARTICIPACAO-EM-BANCA-DE-DOUTORADO><DADOS-BASICOS-DA-PARTICIPACAO-EM-BANCA-DE-DOUTORADO/></PARTICIPACAO-EM-BANCA-DE-DOUTORADO>
</PARTICIPACAO-EM-BANCA-TRABALHOS-CONCLUSAO>"#;
        let doc = parse_cv("cv.xml", &curriculum(body)).unwrap();
        let counts = committee_counts(&doc);
        assert_eq!(counts.graduacao, 0);
        assert_eq!(counts.mestrado, 2);
        assert_eq!(counts.doutorado, 1);
        assert_eq!(counts.total(), 3);
    }
}
