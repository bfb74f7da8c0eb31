//! Tree builder over the `quick-xml` event stream

use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::trace;

use crate::element::XmlElement;
use crate::error::{ParseError, ParseResult};

/// Build the element tree of a complete document.
///
/// Fails on anything that is not well-formed: reader errors, mismatched end
/// tags, elements left open at EOF, text outside the root, a second root
/// or no root at all.
pub(crate) fn build_tree(label: &str, bytes: &[u8]) -> ParseResult<XmlElement> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let position = reader.buffer_position() as u64;

        match reader.read_event_into(&mut buf) {
            Err(e) => return Err(ParseError::syntax(label, position, e)),
            Ok(Event::Start(ref start)) => {
                let element = open_element(label, position, reader.decoder(), start)?;
                if stack.is_empty() {
                    ensure_single_root(label, &root, &element)?;
                }
                stack.push(element);
            }
            Ok(Event::Empty(ref start)) => {
                let element = open_element(label, position, reader.decoder(), start)?;
                match stack.last_mut() {
                    Some(parent) => parent.push_child(element),
                    None => {
                        ensure_single_root(label, &root, &element)?;
                        root = Some(element);
                    }
                }
            }
            Ok(Event::End(_)) => {
                let Some(element) = stack.pop() else {
                    return Err(ParseError::syntax(label, position, "end tag without start tag"));
                };
                match stack.last_mut() {
                    Some(parent) => parent.push_child(element),
                    None => root = Some(element),
                }
            }
            Ok(Event::Text(ref text)) => {
                let content = text
                    .unescape()
                    .map_err(|e| ParseError::syntax(label, position, e))?;
                push_text(label, position, &mut stack, &content)?;
            }
            Ok(Event::CData(ref data)) => {
                let content = reader
                    .decoder()
                    .decode(&**data)
                    .map_err(|e| ParseError::syntax(label, position, e))?;
                push_text(label, position, &mut stack, &content)?;
            }
            Ok(Event::Eof) => break,
            // Declarations, comments, processing instructions, doctypes
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(ParseError::UnclosedElement {
            label: label.to_string(),
            element: open.name().to_string(),
        });
    }

    root.ok_or_else(|| ParseError::EmptyDocument {
        label: label.to_string(),
    })
}

/// Text belongs to the open element; outside the root only whitespace is allowed
fn push_text(
    label: &str,
    position: u64,
    stack: &mut [XmlElement],
    content: &str,
) -> ParseResult<()> {
    match stack.last_mut() {
        Some(current) => current.push_text(content),
        None if content.trim().is_empty() => {}
        None => {
            return Err(ParseError::syntax(
                label,
                position,
                "text outside the root element",
            ))
        }
    }
    Ok(())
}

fn ensure_single_root(
    label: &str,
    root: &Option<XmlElement>,
    element: &XmlElement,
) -> ParseResult<()> {
    if root.is_some() {
        return Err(ParseError::MultipleRoots {
            label: label.to_string(),
            element: element.name().to_string(),
        });
    }
    Ok(())
}

fn open_element(
    label: &str,
    position: u64,
    decoder: Decoder,
    start: &BytesStart<'_>,
) -> ParseResult<XmlElement> {
    let qname = start.name();
    let name = decoder
        .decode(qname.as_ref())
        .map_err(|e| ParseError::syntax(label, position, e))?;
    let mut element = XmlElement::new(name.as_ref());

    for attr in start.attributes() {
        let attr = attr.map_err(|e| ParseError::syntax(label, position, e))?;
        let key = decoder
            .decode(attr.key.as_ref())
            .map_err(|e| ParseError::syntax(label, position, e))?
            .into_owned();
        let value = attr
            .decode_and_unescape_value(decoder)
            .map_err(|e| ParseError::syntax(label, position, e))?
            .into_owned();
        element.push_attr(key, value);
    }

    trace!(element = %element.name(), "opened element");
    Ok(element)
}
