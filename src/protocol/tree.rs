//! XML tree provider
//!
//! The response parser never scans raw XML text. It walks any tree that
//! implements [`XmlNode`]; [`parse_document`] produces one backed by
//! `roxmltree`.

use roxmltree::{Document, Node};

use crate::error::Result;

/// A navigable, read-only element tree
pub trait XmlNode: Sized + Clone {
    /// Tag name; empty for the document root
    fn name(&self) -> &str;

    /// Child elements in document order
    fn elements(&self) -> Vec<Self>;

    /// First direct text child, untouched
    fn text(&self) -> Option<&str>;

    /// Raw document prefix for diagnostics
    fn snippet(&self, max_chars: usize) -> String {
        let mut snippet = format!("<{}>", self.name());
        snippet.truncate(max_chars);
        snippet
    }

    fn has_elements(&self) -> bool {
        !self.elements().is_empty()
    }

    /// Whitespace-only text counts as formatting, not content
    fn has_text(&self) -> bool {
        self.text().is_some_and(|t| !t.trim().is_empty())
    }

    /// All descendants reached by a `/`-separated path of tag names
    fn select(&self, path: &str) -> Vec<Self> {
        let mut current = vec![self.clone()];
        for step in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .iter()
                .flat_map(|node| {
                    node.elements()
                        .into_iter()
                        .filter(move |child| child.name() == step)
                })
                .collect();
        }
        current
    }

    fn exists(&self, path: &str) -> bool {
        !self.select(path).is_empty()
    }
}

impl<'a, 'input: 'a> XmlNode for Node<'a, 'input> {
    fn name(&self) -> &str {
        self.tag_name().name()
    }

    fn elements(&self) -> Vec<Self> {
        self.children().filter(|n| n.is_element()).collect()
    }

    fn text(&self) -> Option<&str> {
        self.children().find(|n| n.is_text()).and_then(|n| n.text())
    }

    fn snippet(&self, max_chars: usize) -> String {
        self.document().input_text().chars().take(max_chars).collect()
    }
}

/// Parse raw response text into a tree
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    Ok(Document::parse(text)?)
}
