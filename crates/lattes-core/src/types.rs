//! Domain types shared by extractors, scorers and reports

use serde::{Deserialize, Serialize};

/// Attribute names of one knowledge-area declaration, top level first
pub const AREA_ATTRIBUTES: [&str; 4] = [
    "NOME-GRANDE-AREA-DO-CONHECIMENTO",
    "NOME-DA-AREA-DO-CONHECIMENTO",
    "NOME-DA-SUB-AREA-DO-CONHECIMENTO",
    "NOME-DA-ESPECIALIDADE",
];

/// One declared area of knowledge
///
/// The four levels form a hierarchy (grande área, área, sub-área,
/// especialidade) that only the similarity cascade enforces; any combination
/// of present and absent levels is representable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KnowledgeArea {
    pub grande_area: Option<String>,
    pub area: Option<String>,
    pub sub_area: Option<String>,
    pub especialidade: Option<String>,
}

impl KnowledgeArea {
    /// Build from string slices; handy in tests and fixtures
    pub fn new(
        grande_area: Option<&str>,
        area: Option<&str>,
        sub_area: Option<&str>,
        especialidade: Option<&str>,
    ) -> Self {
        Self {
            grande_area: grande_area.map(str::to_string),
            area: area.map(str::to_string),
            sub_area: sub_area.map(str::to_string),
            especialidade: especialidade.map(str::to_string),
        }
    }

    /// Levels in hierarchy order
    pub fn levels(&self) -> [Option<&str>; 4] {
        [
            self.grande_area.as_deref(),
            self.area.as_deref(),
            self.sub_area.as_deref(),
            self.especialidade.as_deref(),
        ]
    }
}

/// Knowledge areas extracted from one document, labeled by file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchProfile {
    label: String,
    areas: Vec<KnowledgeArea>,
}

impl ResearchProfile {
    pub fn new(label: impl Into<String>, areas: Vec<KnowledgeArea>) -> Self {
        Self {
            label: label.into(),
            areas,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn areas(&self) -> &[KnowledgeArea] {
        &self.areas
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Total similarity of one candidate against the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub file: String,
    pub score: u32,
}

impl ScoreResult {
    pub fn new(file: impl Into<String>, score: u32) -> Self {
        Self {
            file: file.into(),
            score,
        }
    }
}
