//! Declared areas of professional activity (`AREA-DE-ATUACAO`)

use lattes_parser::LattesDocument;
use serde::Serialize;

use crate::tally::Tally;
use crate::types::AREA_ATTRIBUTES;

const ACTIVITY_PATH: [&str; 2] = ["AREAS-DE-ATUACAO", "AREA-DE-ATUACAO"];

/// Level headings, top level first
pub const ACTIVITY_LEVELS: [&str; 4] = [
    "grandes areas conhecimento",
    "areas conhecimento",
    "sub areas conhecimento",
    "especialidades",
];

/// Frequencies of each classification level
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivityAreas {
    pub grandes_areas: Tally,
    pub areas: Tally,
    pub sub_areas: Tally,
    pub especialidades: Tally,
}

impl ActivityAreas {
    /// Levels paired with their headings
    pub fn levels(&self) -> [(&'static str, &Tally); 4] {
        [
            (ACTIVITY_LEVELS[0], &self.grandes_areas),
            (ACTIVITY_LEVELS[1], &self.areas),
            (ACTIVITY_LEVELS[2], &self.sub_areas),
            (ACTIVITY_LEVELS[3], &self.especialidades),
        ]
    }

    /// Accumulate another document into batch totals
    pub fn merge(&mut self, other: &ActivityAreas) {
        self.grandes_areas.merge(&other.grandes_areas);
        self.areas.merge(&other.areas);
        self.sub_areas.merge(&other.sub_areas);
        self.especialidades.merge(&other.especialidades);
    }
}

/// Tally every non-empty level value of `AREAS-DE-ATUACAO/AREA-DE-ATUACAO`
pub fn activity_areas(doc: &LattesDocument) -> ActivityAreas {
    let mut result = ActivityAreas::default();
    for element in doc.root().find_path(&ACTIVITY_PATH) {
        let tallies = [
            &mut result.grandes_areas,
            &mut result.areas,
            &mut result.sub_areas,
            &mut result.especialidades,
        ];
        for (key, tally) in AREA_ATTRIBUTES.iter().zip(tallies) {
            if let Some(value) = element.attr(key).filter(|v| !v.is_empty()) {
                tally.add(value);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattes_parser::test_utils::{curriculum, parse_cv};

    fn activity(grande: &str, area: &str) -> String {
        format!(
            "<AREA-DE-ATUACAO NOME-GRANDE-AREA-DO-CONHECIMENTO=\"{grande}\" NOME-DA-AREA-DO-CONHECIMENTO=\"{area}\" NOME-DA-SUB-AREA-DO-CONHECIMENTO=\"\"/>"
        )
    }

    #[test]
    fn test_counts_non_empty_levels() {
        let body = format!(
            "<AREAS-DE-ATUACAO>{}{}{}</AREAS-DE-ATUACAO>",
            activity("Exatas", "Matemática"),
            activity("Exatas", "Computação"),
            activity("Humanas", "Educação"),
        );
        let doc = parse_cv("cv.xml", &curriculum(&body)).unwrap();
        let result = activity_areas(&doc);

        assert_eq!(result.grandes_areas.get("Exatas"), 2);
        assert_eq!(result.areas.total(), 3);
        assert!(result.sub_areas.is_empty());
        assert!(result.especialidades.is_empty());
    }

    #[test]
    fn test_ignores_entries_outside_the_wrapper() {
        let body = activity("Exatas", "Matemática");
        let doc = parse_cv("cv.xml", &curriculum(&body)).unwrap();
        assert!(activity_areas(&doc).grandes_areas.is_empty());
    }

    #[test]
    fn test_merge_builds_batch_totals() {
        let body = format!("<AREAS-DE-ATUACAO>{}</AREAS-DE-ATUACAO>", activity("Exatas", "Física"));
        let doc = parse_cv("cv.xml", &curriculum(&body)).unwrap();
        let mut totals = ActivityAreas::default();
        totals.merge(&activity_areas(&doc));
        totals.merge(&activity_areas(&doc));
        assert_eq!(totals.areas.get("Física"), 2);
    }
}
