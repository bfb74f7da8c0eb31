//! Advising (orientação) counts
//!
//! Concluded master's and doctoral advising are counted by their wrapper
//! elements; the other concluded kinds are told apart by the upper-cased
//! `NATUREZA` attribute. In-progress advising must carry the exact natureza
//! Lattes writes for its level.

use lattes_parser::LattesDocument;
use serde::Serialize;

const CONCLUDED_MESTRADO: &str = "ORIENTACOES-CONCLUIDAS-PARA-MESTRADO";
const CONCLUDED_DOUTORADO: &str = "ORIENTACOES-CONCLUIDAS-PARA-DOUTORADO";
const CONCLUDED_OTHER: &str = "DADOS-BASICOS-DE-OUTRAS-ORIENTACOES-CONCLUIDAS";

const NATUREZA: &str = "NATUREZA";
const NATUREZA_IC: &str = "INICIACAO_CIENTIFICA";
const NATUREZA_TCC: &str = "TRABALHO_DE_CONCLUSAO_DE_CURSO_GRADUACAO";

/// (element, required natureza) per in-progress level
const IN_PROGRESS: [(&str, &str); 4] = [
    (
        "DADOS-BASICOS-DA-ORIENTACAO-EM-ANDAMENTO-DE-INICIACAO-CIENTIFICA",
        "Iniciação Científica",
    ),
    (
        "DADOS-BASICOS-DA-ORIENTACAO-EM-ANDAMENTO-DE-GRADUACAO",
        "Graduação",
    ),
    (
        "DADOS-BASICOS-DA-ORIENTACAO-EM-ANDAMENTO-DE-MESTRADO",
        "Dissertação de mestrado",
    ),
    (
        "DADOS-BASICOS-DA-ORIENTACAO-EM-ANDAMENTO-DE-DOUTORADO",
        "Tese de doutorado",
    ),
];

/// Advising level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisingLevel {
    IniciacaoCientifica,
    Graduacao,
    Mestrado,
    Doutorado,
}

impl AdvisingLevel {
    pub const ALL: [AdvisingLevel; 4] = [
        AdvisingLevel::IniciacaoCientifica,
        AdvisingLevel::Graduacao,
        AdvisingLevel::Mestrado,
        AdvisingLevel::Doutorado,
    ];

    /// Report key
    pub fn key(self) -> &'static str {
        match self {
            AdvisingLevel::IniciacaoCientifica => "iniciacao_cientifica",
            AdvisingLevel::Graduacao => "graduacao",
            AdvisingLevel::Mestrado => "mestrado",
            AdvisingLevel::Doutorado => "doutorado",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One count per [`AdvisingLevel`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub iniciacao_cientifica: usize,
    pub graduacao: usize,
    pub mestrado: usize,
    pub doutorado: usize,
}

impl LevelCounts {
    pub fn get(&self, level: AdvisingLevel) -> usize {
        self.as_array()[level.index()]
    }

    pub fn as_array(&self) -> [usize; 4] {
        [
            self.iniciacao_cientifica,
            self.graduacao,
            self.mestrado,
            self.doutorado,
        ]
    }

    fn from_array([iniciacao_cientifica, graduacao, mestrado, doutorado]: [usize; 4]) -> Self {
        Self {
            iniciacao_cientifica,
            graduacao,
            mestrado,
            doutorado,
        }
    }

    pub fn total(&self) -> usize {
        self.as_array().iter().sum()
    }

    /// Level-wise sum
    pub fn plus(&self, other: &LevelCounts) -> LevelCounts {
        let (a, b) = (self.as_array(), other.as_array());
        Self::from_array([a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]])
    }
}

/// Concluded and in-progress advising of one researcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AdvisingCounts {
    pub concluded: LevelCounts,
    pub in_progress: LevelCounts,
}

impl AdvisingCounts {
    /// Concluded plus in progress, per level
    pub fn experience(&self) -> LevelCounts {
        self.concluded.plus(&self.in_progress)
    }
}

/// Concluded advising per level
pub fn concluded_advising(doc: &LattesDocument) -> LevelCounts {
    let root = doc.root();
    let mut counts = LevelCounts {
        mestrado: root.count(CONCLUDED_MESTRADO),
        doutorado: root.count(CONCLUDED_DOUTORADO),
        ..Default::default()
    };

    for other in root.find_all(CONCLUDED_OTHER) {
        let natureza = other.attr(NATUREZA).unwrap_or_default().to_uppercase();
        if natureza == NATUREZA_IC {
            counts.iniciacao_cientifica += 1;
        } else if natureza == NATUREZA_TCC {
            counts.graduacao += 1;
        }
    }
    counts
}

/// In-progress advising per level
pub fn in_progress_advising(doc: &LattesDocument) -> LevelCounts {
    let root = doc.root();
    LevelCounts::from_array(IN_PROGRESS.map(|(tag, natureza)| {
        root.find_all(tag)
            .filter(|e| e.attr(NATUREZA) == Some(natureza))
            .count()
    }))
}

pub fn advising_counts(doc: &LattesDocument) -> AdvisingCounts {
    AdvisingCounts {
        concluded: concluded_advising(doc),
        in_progress: in_progress_advising(doc),
    }
}
