//! Markup serialization for documents and subtrees.

use std::fmt::Write;

use crate::document::{Document, NodeData, NodeId};

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text content is written without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

impl Document {
    /// Serialize the whole document (children of the synthetic root).
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(4096);
        for &child in self.children(self.root()) {
            serialize_node(self, child, &mut out);
        }
        out
    }

    /// Serialize a single node and its subtree.
    #[must_use]
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        serialize_node(self, id, &mut out);
        out
    }
}

/// Serialize a single node recursively.
fn serialize_node(doc: &Document, id: NodeId, out: &mut String) {
    let Some(data) = doc.data(id) else {
        return;
    };

    let element = match data {
        NodeData::Text(text) => {
            let raw = doc
                .parent(id)
                .and_then(|parent| doc.tag(parent))
                .is_some_and(|tag| RAW_TEXT_ELEMENTS.contains(&tag));
            if raw {
                out.push_str(text);
            } else {
                out.push_str(&escape_text(text));
            }
            return;
        }
        NodeData::Element(element) => element,
    };

    out.push('<');
    out.push_str(element.tag());
    for (key, value) in element.attributes() {
        if value.is_empty() {
            // Boolean attributes such as `hidden` render bare
            let _ = write!(out, " {key}");
        } else {
            let _ = write!(out, r#" {}="{}""#, key, escape_attr(value));
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag()) {
        return;
    }

    for &child in doc.children(id) {
        serialize_node(doc, child, out);
    }
    let _ = write!(out, "</{}>", element.tag());
}

/// Escape text for element content.
fn escape_text(text: &str) -> String {
    escape(text, false)
}

/// Escape text for attribute values.
fn escape_attr(text: &str) -> String {
    escape(text, true)
}

fn escape(text: &str, escape_quotes: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if escape_quotes => result.push_str("&quot;"),
            _ => result.push(ch),
        }
    }
    result
}
