//! Active-tab state machine.
//!
//! A [`TabGroup`] owns the single piece of mutable widget state, the active
//! index, and projects it onto the tab and panel elements it was built
//! from. Every transition rewrites the full set of owned attributes, so the
//! markup always reflects exactly one active pair (or none before the first
//! successful transition).

use std::collections::HashMap;

use rw_dom::{Document, NodeId};

use crate::event::KeyboardEvent;
use crate::navigation::{Navigation, Orientation, navigate};

/// Class toggled on the active tab by default.
pub const TAB_ACTIVE_CLASS: &str = "tabbed-content__tab--active";

/// Class toggled on the active panel by default.
pub const PANEL_ACTIVE_CLASS: &str = "tabbed-content__panel--active";

/// A tab control and the panel it reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabEntry {
    /// Focusable control carrying the selection state.
    pub tab: NodeId,
    /// Content region shown while the tab is active.
    pub panel: NodeId,
}

/// Classes used to mark the active tab and panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveClasses {
    /// Class for the active tab control.
    pub tab: String,
    /// Class for the visible panel.
    pub panel: String,
}

impl Default for ActiveClasses {
    fn default() -> Self {
        Self {
            tab: TAB_ACTIVE_CLASS.to_owned(),
            panel: PANEL_ACTIVE_CLASS.to_owned(),
        }
    }
}

/// Ordered tab/panel pairs with one active index.
#[derive(Debug, Clone)]
pub struct TabGroup {
    entries: Vec<TabEntry>,
    /// Fixed position of every tab control, captured at construction.
    bindings: HashMap<NodeId, usize>,
    orientation: Orientation,
    classes: ActiveClasses,
    active: Option<usize>,
}

impl TabGroup {
    /// Build a group from ordered entries.
    ///
    /// Returns `None` for an empty sequence: a group without tabs would be
    /// inert, so no group is built at all.
    #[must_use]
    pub fn new(
        entries: Vec<TabEntry>,
        orientation: Orientation,
        classes: ActiveClasses,
    ) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        let bindings = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.tab, index))
            .collect();
        Some(Self {
            entries,
            bindings,
            orientation,
            classes,
            active: None,
        })
    }

    /// Pair tabs with panels by position.
    ///
    /// Elements without a counterpart at the same position are excluded.
    #[must_use]
    pub fn pair(
        tabs: &[NodeId],
        panels: &[NodeId],
        orientation: Orientation,
        classes: ActiveClasses,
    ) -> Option<Self> {
        if tabs.len() != panels.len() {
            tracing::debug!(
                tabs = tabs.len(),
                panels = panels.len(),
                "Excluding unpaired tab elements"
            );
        }
        let entries = tabs
            .iter()
            .zip(panels)
            .map(|(&tab, &panel)| TabEntry { tab, panel })
            .collect();
        Self::new(entries, orientation, classes)
    }

    /// Number of tab/panel pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: empty groups are never constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in tab order.
    #[must_use]
    pub fn entries(&self) -> &[TabEntry] {
        &self.entries
    }

    /// Orientation of the tab list.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Active index, `None` until a transition succeeds.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Position of a tab control within the group.
    #[must_use]
    pub fn index_of(&self, tab: NodeId) -> Option<usize> {
        self.bindings.get(&tab).copied()
    }

    /// Make the pair at `index` active.
    ///
    /// Out-of-range indices are ignored and return `false`. A successful
    /// call rewrites every tab and panel and moves focus to the active tab,
    /// including when `index` is already active.
    pub fn set_active_tab(&mut self, doc: &mut Document, index: usize) -> bool {
        if index >= self.entries.len() {
            tracing::debug!(index, tabs = self.entries.len(), "Ignoring out-of-range tab index");
            return false;
        }

        for (i, entry) in self.entries.iter().enumerate() {
            let is_active = i == index;

            doc.set_attribute(entry.tab, "aria-selected", if is_active { "true" } else { "false" });
            doc.set_attribute(entry.tab, "tabindex", if is_active { "0" } else { "-1" });
            doc.toggle_class(entry.tab, &self.classes.tab, is_active);
            if is_active {
                doc.focus(entry.tab);
            }

            doc.toggle_class(entry.panel, &self.classes.panel, is_active);
            if is_active {
                doc.remove_attribute(entry.panel, "hidden");
            } else {
                doc.set_attribute(entry.panel, "hidden", "");
            }
        }

        tracing::trace!(from = ?self.active, to = index, "Activated tab");
        self.active = Some(index);
        true
    }

    /// Handle a key press on the tab at `current`.
    pub fn handle_key(&mut self, doc: &mut Document, event: &mut KeyboardEvent, current: usize) {
        let navigation = navigate(event.key(), current, self.orientation, self.entries.len());
        tracing::trace!(key = %event.key(), current, ?navigation, "Tab key press");

        if navigation.prevents_default() {
            event.prevent_default();
        }
        let target = navigation.target(current);
        let transition = match navigation {
            Navigation::Ignore => false,
            Navigation::Reactivate => true,
            // Landing on the pressed tab itself (Home on the first tab) is not a transition
            Navigation::MoveTo(_) => target != current,
        };
        if transition {
            self.set_active_tab(doc, target);
        }
    }
}
