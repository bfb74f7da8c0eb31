//! PDF rendering of a [`Report`]
//!
//! US Letter pages, Helvetica through the WinAnsi encoding. The title is
//! drawn at the top of every page; body lines follow at a fixed step and a
//! new page starts once the cursor falls below the bottom margin.

use anyhow::{Context, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::Path;
use tracing::info;

use super::Report;

pub const PAGE_WIDTH: i64 = 612;
pub const PAGE_HEIGHT: i64 = 792;
pub const LEFT_MARGIN: i64 = 30;
pub const BOTTOM_MARGIN: i64 = 60;
pub const TITLE_Y: i64 = PAGE_HEIGHT - 60;
pub const TITLE_GAP: i64 = 30;
pub const LINE_STEP: i64 = 20;
pub const TITLE_SIZE: i64 = 12;
pub const BODY_SIZE: i64 = 10;

const FONT_NAME: &[u8] = b"F1";

/// One body line and its baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLine<'a> {
    pub y: i64,
    pub text: &'a str,
}

/// Assign each line a page and a baseline
///
/// There is always at least one page, so an empty report still shows its
/// title.
pub fn paginate<'a>(lines: &[&'a str]) -> Vec<Vec<PlacedLine<'a>>> {
    let first_line_y = TITLE_Y - TITLE_GAP;
    let mut pages = vec![Vec::new()];
    let mut y = first_line_y;

    for &text in lines {
        if y < BOTTOM_MARGIN {
            pages.push(Vec::new());
            y = first_line_y;
        }
        if let Some(page) = pages.last_mut() {
            page.push(PlacedLine { y, text });
        }
        y -= LINE_STEP;
    }
    pages
}

/// WinAnsi bytes of `text`; characters outside Latin-1 become `?`
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => b'?',
        })
        .collect()
}

fn text_operations(size: i64, y: i64, text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(FONT_NAME.to_vec()), Object::Integer(size)],
        ),
        Operation::new(
            "Td",
            vec![Object::Integer(LEFT_MARGIN), Object::Integer(y)],
        ),
        Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]),
        Operation::new("ET", vec![]),
    ]
}

/// Build the PDF document for `report`
pub fn render(report: &Report) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let lines = report.text_lines();
    let mut kids = Vec::new();
    for page in paginate(&lines) {
        let mut operations = text_operations(TITLE_SIZE, TITLE_Y, report.title());
        for placed in page {
            operations.extend(text_operations(BODY_SIZE, placed.y, placed.text));
        }
        let content = Content { operations };
        let bytes = content.encode().context("failed to encode page content")?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, bytes));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_count),
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH),
            Object::Integer(PAGE_HEIGHT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    Ok(doc)
}

/// Render `report` and save it to `path`
pub fn write_pdf(report: &Report, path: &Path) -> Result<()> {
    let mut doc = render(report)?;
    doc.save(path)
        .with_context(|| format!("failed to write PDF to {}", path.display()))?;
    info!(path = %path.display(), "wrote PDF report");
    Ok(())
}
