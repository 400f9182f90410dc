//! Widget initialization from host markup.
//!
//! Locates the tab list, optionally normalizes tab blocks, pairs tabs with
//! panels and applies the declared initial index. Incomplete markup never
//! raises an error: the widget is simply left without a [`TabGroup`].

use rw_dom::{Document, NodeId};

use crate::config::{Markup, Strategy};
use crate::group::TabGroup;
use crate::navigation::Orientation;
use crate::normalize::normalize_tab_blocks;

/// Build the tab group for the widget rooted at `root`.
///
/// Returns `None` when required structure is missing, leaving the widget
/// inert. Otherwise the declared initial index has been handed to
/// [`TabGroup::set_active_tab`]; an out-of-range declaration leaves the
/// group with no active tab.
pub fn initialize(doc: &mut Document, root: NodeId, markup: &Markup) -> Option<TabGroup> {
    let Some(tablist) = doc.query_selector(root, &markup.tablist) else {
        tracing::debug!(?root, "No tab list, widget stays inert");
        return None;
    };

    prepare(doc, root, tablist, markup)?;

    let tabs = doc.query_selector_all(root, &markup.tab);
    let panels = doc.query_selector_all(root, &markup.panel);
    let orientation = Orientation::from_aria(doc.attribute(tablist, "aria-orientation"));

    let Some(mut group) = TabGroup::pair(&tabs, &panels, orientation, markup.classes.clone())
    else {
        tracing::debug!(
            ?root,
            tabs = tabs.len(),
            panels = panels.len(),
            "No tab/panel pairs, widget stays inert"
        );
        return None;
    };

    match initial_index(doc.attribute(root, &markup.initial_tab_attribute)) {
        Some(index) => {
            group.set_active_tab(doc, index);
        }
        // Markup is left as rendered, so every panel stays visible
        None => tracing::debug!(?root, "Unusable initial tab index, no tab activated"),
    }

    Some(group)
}

/// Run the configured markup strategy before pairing.
///
/// Returns `None` when the strategy requires structure that is missing.
fn prepare(doc: &mut Document, root: NodeId, tablist: NodeId, markup: &Markup) -> Option<()> {
    match markup.strategy {
        Strategy::Paired => Some(()),
        Strategy::Normalize => {
            let Some(panels_container) = doc.query_selector(root, &markup.panels_container)
            else {
                tracing::debug!(?root, "No panels container, widget stays inert");
                return None;
            };
            if doc.query_selector(root, &markup.tab_block).is_none() {
                tracing::debug!(?root, "No tab blocks, widget stays inert");
                return None;
            }
            normalize_tab_blocks(doc, root, tablist, panels_container, markup);
            Some(())
        }
        Strategy::Auto => {
            if let Some(panels_container) = doc.query_selector(root, &markup.panels_container)
                && doc.query_selector(root, &markup.tab_block).is_some()
            {
                normalize_tab_blocks(doc, root, tablist, panels_container, markup);
            }
            Some(())
        }
    }
}

/// Resolve the declared initial index.
///
/// A missing or empty attribute means `0`. Other values are read like a
/// leading integer (`"2"`, `" 2px"`); negative or unparsable values yield
/// `None`, which callers treat as out of range.
#[must_use]
pub fn initial_index(value: Option<&str>) -> Option<usize> {
    match value {
        None | Some("") => Some(0),
        Some(value) => parse_int_prefix(value).and_then(|n| usize::try_from(n).ok()),
    }
}

/// Parse the leading integer of `value`, skipping leading whitespace.
///
/// Accepts an optional sign followed by digits and ignores anything after
/// the digits. Returns `None` when no digits are present or on overflow.
pub(crate) fn parse_int_prefix(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
