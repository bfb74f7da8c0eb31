//! In-memory element tree
//!
//! The queries mirror the subset of ElementTree paths the Lattes reports use:
//! - `find_all("TAG")` is `.//TAG` (descendants at any depth, document order)
//! - `find_path(&["A", "B"])` is `.//A/B` (`B` children of any `A` descendant)
//! - `child("TAG")` is `find("TAG")` (first direct child)

use std::collections::BTreeSet;

/// One XML element with its attributes, direct text and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an element with no attributes, text or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Builder: add an attribute
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Builder: set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: append a child
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn push_attr(&mut self, key: String, value: String) {
        self.attributes.push((key, value));
    }

    /// Text after the first child is that child's tail and is not kept
    pub(crate) fn push_text(&mut self, text: &str) {
        if text.is_empty() || !self.children.is_empty() {
            return;
        }
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    pub(crate) fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Element (tag) name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by name; `None` when the attribute is absent
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Trimmed text before the first child element, if any
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Direct children
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Direct children with the given name
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Every descendant in document (pre-)order, excluding `self`
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(self)
    }

    /// Descendants with the given name, at any depth
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.descendants().filter(move |e| e.name == name)
    }

    /// Number of descendants with the given name
    pub fn count(&self, name: &str) -> usize {
        self.find_all(name).count()
    }

    /// `.//first/second/...`: the first segment matches at any depth, the
    /// remaining ones must be direct children of the previous match.
    pub fn find_path(&self, path: &[&str]) -> Vec<&XmlElement> {
        let Some((first, rest)) = path.split_first() else {
            return Vec::new();
        };

        let mut current: Vec<&XmlElement> =
            self.descendants().filter(|e| e.name == *first).collect();
        for segment in rest {
            current = current
                .into_iter()
                .flat_map(|e| e.children.iter().filter(move |c| c.name == *segment))
                .collect();
        }
        current
    }

    /// Sorted set of every element name in this subtree, `self` included
    pub fn tag_names(&self) -> BTreeSet<&str> {
        std::iter::once(self)
            .chain(self.descendants())
            .map(|e| e.name.as_str())
            .collect()
    }
}

/// Pre-order iterator over an element's descendants
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Descendants<'a> {
    fn new(root: &'a XmlElement) -> Self {
        Self {
            stack: root.children.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}
