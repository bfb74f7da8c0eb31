//! Congress participation per year

use lattes_parser::LattesDocument;
use serde::Serialize;

use crate::tally::Tally;

const CONGRESS: &str = "PARTICIPACAO-EM-CONGRESSO";
const CONGRESS_DATA: &str = "DADOS-BASICOS-DA-PARTICIPACAO-EM-CONGRESSO";
const YEAR: &str = "ANO";

/// Year label used when the record carries none
pub const UNKNOWN_YEAR: &str = "Ano desconhecido";

/// Participations counted by year, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CongressYears {
    pub years: Tally,
}

impl CongressYears {
    pub fn total(&self) -> usize {
        self.years.total()
    }
}

pub fn congress_years(doc: &LattesDocument) -> CongressYears {
    let years = doc
        .root()
        .find_all(CONGRESS)
        .map(|congress| {
            congress
                .child(CONGRESS_DATA)
                .and_then(|data| data.attr(YEAR))
                .unwrap_or(UNKNOWN_YEAR)
        })
        .collect();
    CongressYears { years }
}
