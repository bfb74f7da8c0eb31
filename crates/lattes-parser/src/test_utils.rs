//! Test utilities for building Lattes documents in tests.
//!
//! Enable with the `test-utils` feature.
//!
//! # Usage
//!
//! In `Cargo.toml`:
//! ```toml
//! [dev-dependencies]
//! lattes-parser = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! In tests:
//! ```rust,ignore
//! use lattes_parser::test_utils::{area, curriculum, formation, parse_cv};
//!
//! let body = formation("MESTRADO", &[area(Some("Ciências Exatas"), None, None, None)]);
//! let doc = parse_cv("joao.xml", &curriculum(&body)).unwrap();
//! ```

use crate::document::LattesDocument;
use crate::error::ParseResult;

/// Wrap a body in a `CURRICULO-VITAE` root with an XML declaration
pub fn curriculum(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <CURRICULO-VITAE NUMERO-IDENTIFICADOR=\"0000000000000000\">\n{body}\n</CURRICULO-VITAE>"
    )
}

/// One `AREA-DO-CONHECIMENTO-1` element; `None` omits the attribute
pub fn area(
    grande_area: Option<&str>,
    area: Option<&str>,
    sub_area: Option<&str>,
    especialidade: Option<&str>,
) -> String {
    let mut attrs = String::new();
    for (key, value) in [
        ("NOME-GRANDE-AREA-DO-CONHECIMENTO", grande_area),
        ("NOME-DA-AREA-DO-CONHECIMENTO", area),
        ("NOME-DA-SUB-AREA-DO-CONHECIMENTO", sub_area),
        ("NOME-DA-ESPECIALIDADE", especialidade),
    ] {
        if let Some(value) = value {
            attrs.push_str(&format!(" {key}=\"{}\"", escape(value)));
        }
    }
    format!("<AREA-DO-CONHECIMENTO-1{attrs}/>")
}

/// A formation section (`GRADUACAO`, `MESTRADO`, ...) declaring the given areas
/// under `AREAS-DO-CONHECIMENTO`, as Lattes exports do
pub fn formation(tag: &str, areas: &[String]) -> String {
    format!(
        "<{tag} SEQUENCIA-FORMACAO=\"1\"><AREAS-DO-CONHECIMENTO>{}</AREAS-DO-CONHECIMENTO></{tag}>",
        areas.concat()
    )
}

/// Parse a document under the given label
pub fn parse_cv(label: &str, xml: &str) -> ParseResult<LattesDocument> {
    LattesDocument::parse_str(label, xml)
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
