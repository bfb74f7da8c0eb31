//! Similarity configuration: which formation sections feed the profile

use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic-formation section kinds that can declare knowledge areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormationSection {
    /// Undergraduate degree
    Graduacao,
    /// Master's degree
    Mestrado,
    /// Doctorate
    Doutorado,
    /// Post-doctoral stay
    PosDoutorado,
}

impl FormationSection {
    /// Every kind, in extraction order
    pub const ALL: [FormationSection; 4] = [
        FormationSection::Graduacao,
        FormationSection::Mestrado,
        FormationSection::Doutorado,
        FormationSection::PosDoutorado,
    ];

    /// Element name in Lattes exports
    pub fn tag(self) -> &'static str {
        match self {
            FormationSection::Graduacao => "GRADUACAO",
            FormationSection::Mestrado => "MESTRADO",
            FormationSection::Doutorado => "DOUTORADO",
            FormationSection::PosDoutorado => "POS-DOUTORADO",
        }
    }

    /// Heading used in the sectioned listing
    pub fn title(self) -> &'static str {
        match self {
            FormationSection::Graduacao => "Graduação",
            FormationSection::Mestrado => "Mestrado",
            FormationSection::Doutorado => "Doutorado",
            FormationSection::PosDoutorado => "Pós-Doutorado",
        }
    }
}

impl fmt::Display for FormationSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Similarity scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Sections scanned for knowledge areas, in order
    pub sections: Vec<FormationSection>,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            sections: FormationSection::ALL.to_vec(),
        }
    }
}
