//! Element-name inventory

use std::collections::BTreeSet;

use lattes_parser::LattesDocument;

/// Sorted set of every element name in the document, root included
pub fn tag_inventory(doc: &LattesDocument) -> BTreeSet<String> {
    doc.root()
        .tag_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}
