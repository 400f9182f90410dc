//! Relocation of tab blocks into the tab list and panels container.
//!
//! Some pages render each tab as a self-contained block holding both the
//! tab button and its panel:
//!
//! ```html
//! <tabbed-content>
//!   <div role="tablist"></div>
//!   <div class="tabbed-content__panels"></div>
//!   <div class="tabbed-content__tab-block" data-tab-index="1">
//!     <button role="tab" data-tab-button>Linux</button>
//!     <div role="tabpanel" data-tab-panel>...</div>
//!   </div>
//!   <div class="tabbed-content__tab-block" data-tab-index="0">...</div>
//! </tabbed-content>
//! ```
//!
//! Normalization moves each half into its container in declared order and
//! removes the emptied blocks, producing the paired layout the state
//! machine expects.

use rw_dom::{Document, NodeId};

use crate::config::Markup;
use crate::init::parse_int_prefix;

/// Move block halves into `tablist` and `panels_container`, then drop the blocks.
///
/// Blocks are ordered by their declared index attribute, ascending and stable
/// for ties. Blocks whose index does not parse keep their source order after
/// all numbered blocks. A block missing either half contributes nothing and
/// is removed with the rest.
///
/// Returns the number of relocated pairs. Running it again on normalized
/// markup finds no blocks and returns `0`.
pub fn normalize_tab_blocks(
    doc: &mut Document,
    root: NodeId,
    tablist: NodeId,
    panels_container: NodeId,
    markup: &Markup,
) -> usize {
    let mut blocks = doc.query_selector_all(root, &markup.tab_block);
    if blocks.is_empty() {
        return 0;
    }

    blocks.sort_by_key(|&block| {
        match doc
            .attribute(block, &markup.block_index_attribute)
            .and_then(parse_int_prefix)
        {
            Some(index) => (0, index),
            None => (1, 0),
        }
    });

    let mut moved = 0;
    for &block in &blocks {
        let button = doc.query_selector(block, &markup.block_button);
        let panel = doc.query_selector(block, &markup.block_panel);

        if let (Some(button), Some(panel)) = (button, panel) {
            doc.append_child(tablist, button);
            doc.append_child(panels_container, panel);
            moved += 1;
        } else {
            tracing::debug!(?block, "Tab block without button or panel, dropping");
        }
    }

    for block in blocks {
        doc.remove(block);
    }

    tracing::debug!(blocks = moved, "Normalized tab blocks");
    moved
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rw_dom::parse_html;

    use super::*;

    fn setup(blocks: &str) -> (Document, NodeId, NodeId, NodeId) {
        let html = format!(
            r#"<tabbed-content><div role="tablist"></div><div class="tabbed-content__panels"></div>{blocks}</tabbed-content>"#
        );
        let doc = parse_html(&html);
        let root = doc.children(doc.root())[0];
        let tablist = doc.children(root)[0];
        let panels = doc.children(root)[1];
        (doc, root, tablist, panels)
    }

    fn block(index: &str, label: &str) -> String {
        format!(
            r#"<div class="tabbed-content__tab-block" data-tab-index="{index}"><button role="tab" data-tab-button>{label}</button><div role="tabpanel" data-tab-panel>{label} body</div></div>"#
        )
    }

    fn labels(doc: &Document, container: NodeId) -> Vec<String> {
        doc.children(container)
            .iter()
            .map(|&id| doc.text_content(id))
            .collect()
    }

    #[test]
    fn test_orders_by_declared_index() {
        let (mut doc, root, tablist, panels) =
            setup(&format!("{}{}", block("1", "Linux"), block("0", "macOS")));

        let moved = normalize_tab_blocks(&mut doc, root, tablist, panels, &Markup::default());

        assert_eq!(moved, 2);
        assert_eq!(labels(&doc, tablist), vec!["macOS", "Linux"]);
        assert_eq!(labels(&doc, panels), vec!["macOS body", "Linux body"]);
        assert_eq!(doc.children(root), &[tablist, panels]);
    }

    #[test]
    fn test_numeric_not_lexical_order() {
        let (mut doc, root, tablist, panels) = setup(&format!(
            "{}{}{}",
            block("10", "ten"),
            block("2", "two"),
            block("-1", "minus")
        ));

        normalize_tab_blocks(&mut doc, root, tablist, panels, &Markup::default());

        assert_eq!(labels(&doc, tablist), vec!["minus", "two", "ten"]);
    }

    #[test]
    fn test_ties_keep_source_order() {
        let (mut doc, root, tablist, panels) = setup(&format!(
            "{}{}{}",
            block("1", "b"),
            block("0", "a"),
            block("1", "c")
        ));

        normalize_tab_blocks(&mut doc, root, tablist, panels, &Markup::default());

        assert_eq!(labels(&doc, tablist), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unparsable_index_sorts_last() {
        let (mut doc, root, tablist, panels) = setup(&format!(
            "{}{}{}",
            block("x", "unnumbered"),
            block("3", "three"),
            block("", "blank")
        ));

        normalize_tab_blocks(&mut doc, root, tablist, panels, &Markup::default());

        assert_eq!(labels(&doc, tablist), vec!["three", "unnumbered", "blank"]);
    }

    #[test]
    fn test_incomplete_block_is_dropped() {
        let incomplete = r#"<div class="tabbed-content__tab-block" data-tab-index="0"><button role="tab" data-tab-button>orphan</button></div>"#;
        let (mut doc, root, tablist, panels) =
            setup(&format!("{incomplete}{}", block("1", "whole")));

        let moved = normalize_tab_blocks(&mut doc, root, tablist, panels, &Markup::default());

        assert_eq!(moved, 1);
        assert_eq!(labels(&doc, tablist), vec!["whole"]);
        assert!(!doc.to_html().contains("orphan"));
    }

    #[test]
    fn test_second_run_is_noop() {
        let (mut doc, root, tablist, panels) =
            setup(&format!("{}{}", block("1", "Linux"), block("0", "macOS")));
        normalize_tab_blocks(&mut doc, root, tablist, panels, &Markup::default());
        let once = doc.to_html();

        let moved = normalize_tab_blocks(&mut doc, root, tablist, panels, &Markup::default());

        assert_eq!(moved, 0);
        assert_eq!(doc.to_html(), once);
    }
}
