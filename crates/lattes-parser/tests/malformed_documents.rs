//! Loading real files from disk: encodings, malformed input, missing files

use std::fs;

use tempfile::TempDir;

use lattes_parser::test_utils::{area, curriculum, formation};
use lattes_parser::{LattesDocument, ParseError};

fn write(dir: &std::path::Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_loads_document_from_disk() {
    let dir = TempDir::new().unwrap();
    let body = formation("GRADUACAO", &[area(Some("Ciências Exatas e da Terra"), None, None, None)]);
    let path = write(dir.path(), "ana.xml", curriculum(&body).as_bytes());

    let doc = LattesDocument::from_path(&path).unwrap();
    assert_eq!(doc.label(), "ana.xml");
    assert_eq!(doc.stem(), "ana");
    assert_eq!(doc.path(), Some(path.as_path()));
    assert_eq!(doc.root().count("AREA-DO-CONHECIMENTO-1"), 1);
}

#[test]
fn test_latin1_export_decodes_accents() {
    let dir = TempDir::new().unwrap();
    let mut xml = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\" standalone=\"no\"?>\
<CURRICULO-VITAE><AREAS-DE-ATUACAO><AREA-DE-ATUACAO NOME-GRANDE-AREA-DO-CONHECIMENTO=\"Ci"
        .to_vec();
    xml.push(0xEA);
    xml.extend_from_slice(b"ncias Humanas\"/></AREAS-DE-ATUACAO></CURRICULO-VITAE>");
    let path = write(dir.path(), "latin1.xml", &xml);

    let doc = LattesDocument::from_path(&path).unwrap();
    let area = doc.root().find_all("AREA-DE-ATUACAO").next().unwrap();
    assert_eq!(
        area.attr("NOME-GRANDE-AREA-DO-CONHECIMENTO"),
        Some("Ciências Humanas")
    );
}

#[test]
fn test_truncated_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "cut.xml", b"<CURRICULO-VITAE><DADOS-GERAIS>");

    let err = LattesDocument::from_path(&path).unwrap_err();
    assert!(!err.is_io());
    assert!(matches!(err, ParseError::UnclosedElement { .. }));
}

#[test]
fn test_plain_text_is_rejected() {
    let err = LattesDocument::parse_str("notes.xml", "not xml at all").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));

    let err = LattesDocument::parse_str("blank.xml", "\n  \n").unwrap_err();
    assert!(matches!(err, ParseError::EmptyDocument { .. }));
}

#[test]
fn test_trailing_garbage_is_rejected() {
    let err = LattesDocument::parse_str("a.xml", "<CURRICULO-VITAE/>lixo depois da raiz").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
}

#[test]
fn test_leading_garbage_is_rejected() {
    let err = LattesDocument::parse_str("a.xml", "lixo<CURRICULO-VITAE/>").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
}

#[test]
fn test_undefined_entity_is_rejected() {
    let err = LattesDocument::parse_str("a.xml", "<A><B>x &foo; y</B></A>").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
}

#[test]
fn test_corrupt_file_on_disk_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut xml = curriculum("<IDIOMAS><IDIOMA/></IDIOMAS>").into_bytes();
    xml.extend_from_slice(b"\n--- fim corrompido ---");
    let path = write(dir.path(), "sujo.xml", &xml);

    let err = LattesDocument::from_path(&path).unwrap_err();
    assert!(!err.is_io());
    assert!(matches!(err, ParseError::Syntax { .. }));
}

#[test]
fn test_comments_and_doctype_are_ignored() {
    let xml = "<?xml version=\"1.0\"?><!DOCTYPE CURRICULO-VITAE><!-- exportado --><CURRICULO-VITAE><IDIOMAS><IDIOMA/></IDIOMAS></CURRICULO-VITAE>";
    let doc = LattesDocument::parse_str("cv.xml", xml).unwrap();
    assert_eq!(doc.root().count("IDIOMA"), 1);
}
