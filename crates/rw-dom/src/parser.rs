//! HTML parsing into a [`Document`].
//!
//! Tokenizing and tree construction are delegated to html5ever through
//! `scraper`, so markup is read the way a browser reads it: bare `&`,
//! raw-text `<script>`/`<style>` content, implied end tags (`<li>`, `<p>`),
//! stray end tags and unclosed void elements all recover as they would in a
//! page. The resulting tree is copied into the arena.

use scraper::{Html, Node};

use crate::document::Document;

/// Parse an HTML fragment into a new [`Document`].
///
/// The fragment is parsed in `<body>` context. Tag and attribute names are
/// lowercased, character references are decoded. Comments, processing
/// instructions and doctype declarations are dropped. Parsing never fails:
/// malformed markup is recovered and the recovery is logged at debug level.
///
/// # Example
///
/// ```
/// use rw_dom::parse_html;
///
/// let doc = parse_html(r#"<div role="tablist"><button hidden>A</button></div>"#);
/// assert_eq!(doc.to_html(), r#"<div role="tablist"><button hidden>A</button></div>"#);
/// ```
#[must_use]
pub fn parse_html(html: &str) -> Document {
    let parsed = Html::parse_fragment(html);
    if !parsed.errors.is_empty() {
        tracing::debug!(
            errors = parsed.errors.len(),
            first = %parsed.errors[0],
            "Recovered from malformed markup"
        );
    }

    let mut doc = Document::new();

    // Fragment content lives under a synthetic <html> element
    let container = parsed.root_element();
    let mut pending: Vec<_> = container
        .children()
        .rev()
        .map(|child| (child, doc.root()))
        .collect();

    while let Some((node, parent)) = pending.pop() {
        let id = match node.value() {
            Node::Element(element) => {
                let id = doc.create_element(element.name());
                for (name, value) in element.attrs() {
                    doc.set_attribute(id, name, value);
                }
                pending.extend(node.children().rev().map(|child| (child, id)));
                id
            }
            Node::Text(text) => doc.create_text(text),
            _ => continue,
        };
        doc.append_child(parent, id);
    }

    doc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let doc = parse_html(r#"<div class="a"><p>Hello <b>world</b>!</p></div>"#);
        let div = doc.children(doc.root())[0];
        assert_eq!(doc.tag(div), Some("div"));
        assert_eq!(doc.attribute(div, "class"), Some("a"));

        let p = doc.children(div)[0];
        assert_eq!(doc.children(p).len(), 3);
        assert_eq!(doc.text_content(p), "Hello world!");
    }

    #[test]
    fn test_parse_boolean_and_unquoted_attributes() {
        let doc = parse_html("<div role=tabpanel hidden>x</div>");
        let div = doc.children(doc.root())[0];
        assert_eq!(doc.attribute(div, "role"), Some("tabpanel"));
        assert_eq!(doc.attribute(div, "hidden"), Some(""));
    }

    #[test]
    fn test_parse_void_elements_without_close() {
        let doc = parse_html("<p>Before<br>After</p><hr>");
        let root_children = doc.children(doc.root());
        assert_eq!(root_children.len(), 2);

        let p = root_children[0];
        assert_eq!(doc.children(p).len(), 3);
        assert_eq!(doc.text_content(p), "BeforeAfter");
        assert_eq!(doc.tag(root_children[1]), Some("hr"));
    }

    #[test]
    fn test_parse_lowercases_names() {
        let doc = parse_html(r#"<DIV Role="tablist"></DIV>"#);
        let div = doc.children(doc.root())[0];
        assert_eq!(doc.tag(div), Some("div"));
        assert_eq!(doc.attribute(div, "role"), Some("tablist"));
    }

    #[test]
    fn test_parse_decodes_character_references() {
        let doc = parse_html("<p>a &lt; b&nbsp;&#169;&#x41;</p>");
        let p = doc.children(doc.root())[0];
        assert_eq!(doc.children(p).len(), 1);
        assert_eq!(doc.text_content(p), "a < b\u{00a0}\u{00a9}A");
    }

    #[test]
    fn test_bare_ampersand_is_text() {
        let doc = parse_html("<p>Tom & Jerry</p>");
        let p = doc.children(doc.root())[0];
        assert_eq!(doc.text_content(p), "Tom & Jerry");
        assert_eq!(doc.to_html(), "<p>Tom &amp; Jerry</p>");
    }

    #[test]
    fn test_script_content_is_raw_text() {
        let html = "<script>if (a < b && c) {}</script><p>x</p>";
        let doc = parse_html(html);

        let root_children = doc.children(doc.root());
        assert_eq!(root_children.len(), 2);
        assert_eq!(doc.text_content(root_children[0]), "if (a < b && c) {}");
        assert_eq!(doc.tag(root_children[1]), Some("p"));
        assert_eq!(doc.to_html(), html);
    }

    #[test]
    fn test_implied_end_tags() {
        let doc = parse_html("<ul><li>a<li>b</ul><p>one<p>two");
        assert_eq!(
            doc.to_html(),
            "<ul><li>a</li><li>b</li></ul><p>one</p><p>two</p>"
        );
    }

    #[test]
    fn test_stray_end_tag_ignored() {
        let doc = parse_html("<div>a</span>b</div>");
        let div = doc.children(doc.root())[0];
        assert_eq!(doc.text_content(div), "ab");
    }

    #[test]
    fn test_comments_and_doctype_dropped() {
        let doc = parse_html("<!DOCTYPE html><!-- note --><main></main>");
        assert_eq!(doc.children(doc.root()).len(), 1);
    }

    #[test]
    fn test_custom_elements_keep_structure() {
        let doc = parse_html(
            r#"<tabbed-content initial-tab="1"><div role="tablist"></div></tabbed-content>"#,
        );
        let root = doc.children(doc.root())[0];
        assert_eq!(doc.tag(root), Some("tabbed-content"));
        assert_eq!(doc.attribute(root, "initial-tab"), Some("1"));
        assert_eq!(doc.children(root).len(), 1);
    }
}
