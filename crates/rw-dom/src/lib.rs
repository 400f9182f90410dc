//! In-memory element tree for hosting RW interactive widgets.
//!
//! Rendered pages carry widgets (tabbed content, for now) whose behavior is
//! defined in terms of element attributes, classes and input focus. This
//! crate provides the small document model those widgets operate on:
//!
//! - [`parse_html`]: browser-grade HTML parsing (html5ever) into a [`Document`]
//! - [`Document`]: arena of nodes with attribute, class and focus operations
//! - [`Selector`]: compound selectors for `query_selector` lookups
//! - [`Document::to_html`]: serialization back to markup
//!
//! # Example
//!
//! ```
//! use rw_dom::{Selector, parse_html};
//!
//! let mut doc = parse_html(r#"<div role="tablist"><button role="tab">A</button></div>"#);
//! let tab = doc
//!     .query_selector(doc.root(), &Selector::parse(r#"[role="tab"]"#).unwrap())
//!     .unwrap();
//!
//! doc.set_attribute(tab, "aria-selected", "true");
//! doc.focus(tab);
//!
//! assert_eq!(doc.focused(), Some(tab));
//! assert!(doc.to_html().contains(r#"aria-selected="true""#));
//! ```

mod document;
mod error;
mod parser;
mod selector;
mod serializer;

pub use document::{Document, Element, NodeData, NodeId};
pub use error::SelectorError;
pub use parser::parse_html;
pub use selector::Selector;
