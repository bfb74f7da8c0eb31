//! Knowledge-area extraction
//!
//! Two views over the same declarations:
//! - [`extract_areas`] feeds the similarity scorer: every
//!   `AREA-DO-CONHECIMENTO-1` at any depth below each formation section
//! - [`sectioned_areas`] feeds the per-section listing, which only accepts
//!   declarations whose direct parent is `AREAS-DO-CONHECIMENTO`

use std::collections::BTreeSet;

use lattes_config::FormationSection;
use lattes_parser::{LattesDocument, XmlElement};
use serde::Serialize;
use tracing::debug;

use crate::types::{KnowledgeArea, ResearchProfile, AREA_ATTRIBUTES};

const AREA_TAG: &str = "AREA-DO-CONHECIMENTO-1";
const AREA_PATH: [&str; 2] = ["AREAS-DO-CONHECIMENTO", AREA_TAG];
const RESEARCH_LINE_TAG: &str = "LINHA-DE-PESQUISA";

/// Read the four level attributes; a missing attribute is `None`
pub fn read_area(element: &XmlElement) -> KnowledgeArea {
    let [grande_area, area, sub_area, especialidade] =
        AREA_ATTRIBUTES.map(|key| element.attr(key).map(str::to_string));
    KnowledgeArea {
        grande_area,
        area,
        sub_area,
        especialidade,
    }
}

/// Knowledge areas of the given formation sections, in section order, then
/// document order. No deduplication.
pub fn extract_areas(doc: &LattesDocument, sections: &[FormationSection]) -> Vec<KnowledgeArea> {
    let root = doc.root();
    let areas: Vec<KnowledgeArea> = sections
        .iter()
        .flat_map(|section| root.find_all(section.tag()))
        .flat_map(|section| section.find_all(AREA_TAG))
        .map(read_area)
        .collect();

    debug!(file = %doc.label(), areas = areas.len(), "extracted knowledge areas");
    areas
}

/// [`extract_areas`] wrapped in a profile labeled by the document
pub fn research_profile(doc: &LattesDocument, sections: &[FormationSection]) -> ResearchProfile {
    ResearchProfile::new(doc.label(), extract_areas(doc, sections))
}

/// One heading of the sectioned listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaSection {
    pub title: String,
    pub areas: Vec<KnowledgeArea>,
}

/// Areas grouped by formation section plus research lines; empty groups are
/// left out
pub fn sectioned_areas(doc: &LattesDocument) -> Vec<AreaSection> {
    let root = doc.root();
    let formation = FormationSection::ALL
        .iter()
        .map(|section| (section.title(), section.tag()));
    let research_lines = std::iter::once(("Linhas de Pesquisa", RESEARCH_LINE_TAG));

    formation
        .chain(research_lines)
        .filter_map(|(title, tag)| {
            let areas: Vec<KnowledgeArea> = root
                .find_all(tag)
                .flat_map(|section| section.find_path(&AREA_PATH))
                .map(read_area)
                .collect();
            (!areas.is_empty()).then(|| AreaSection {
                title: title.to_string(),
                areas,
            })
        })
        .collect()
}

/// Sorted, deduplicated área, sub-área and especialidade names declared
/// anywhere in the document; grande área is not included
pub fn distinct_area_names(doc: &LattesDocument) -> BTreeSet<String> {
    doc.root()
        .find_all(AREA_TAG)
        .flat_map(|area| AREA_ATTRIBUTES[1..].iter().filter_map(move |key| area.attr(key)))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
