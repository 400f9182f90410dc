//! The `tabbed-content` component.

use std::any::Any;
use std::rc::Rc;

use rw_dom::{Document, NodeId};

use crate::config::Markup;
use crate::event::UiEvent;
use crate::group::TabGroup;
use crate::init::initialize;
use crate::registry::{Component, ComponentRegistry};

/// One mounted tabbed-content widget.
///
/// Holds the [`TabGroup`] built at mount time, or nothing if the markup was
/// incomplete. An inert widget ignores every event.
#[derive(Debug)]
pub struct TabbedContent {
    root: NodeId,
    group: Option<TabGroup>,
}

impl TabbedContent {
    /// Initialize the widget for the element at `root`.
    pub fn mount(doc: &mut Document, root: NodeId, markup: &Markup) -> Self {
        Self {
            root,
            group: initialize(doc, root, markup),
        }
    }

    /// Root element of the widget.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Tab group, `None` when the widget is inert.
    #[must_use]
    pub fn group(&self) -> Option<&TabGroup> {
        self.group.as_ref()
    }

    /// Whether initialization aborted.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.group.is_none()
    }

    /// Active index, `None` when inert or nothing is active.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.group.as_ref()?.active_index()
    }

    /// Activate the tab at `index`; see [`TabGroup::set_active_tab`].
    pub fn set_active_tab(&mut self, doc: &mut Document, index: usize) -> bool {
        self.group
            .as_mut()
            .is_some_and(|group| group.set_active_tab(doc, index))
    }

    /// Position of the tab control at or above `target`.
    fn bound_index(&self, doc: &Document, target: NodeId) -> Option<usize> {
        let group = self.group.as_ref()?;
        doc.ancestors_inclusive(target)
            .take_while(|&id| id != self.root)
            .find_map(|id| group.index_of(id))
    }
}

impl Component for TabbedContent {
    fn handle_event(&mut self, doc: &mut Document, target: NodeId, event: &mut UiEvent) {
        let Some(index) = self.bound_index(doc, target) else {
            return;
        };
        let Some(group) = self.group.as_mut() else {
            return;
        };
        match event {
            UiEvent::Click => {
                group.set_active_tab(doc, index);
            }
            UiEvent::KeyDown(key_event) => group.handle_key(doc, key_event, index),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Register the tabbed-content component under `tag`.
///
/// Returns `false` if `tag` was already defined; the existing definition is kept.
pub fn define_tabbed_content(registry: &mut ComponentRegistry, tag: &str, markup: Rc<Markup>) -> bool {
    registry.define(tag, move |doc, root| -> Box<dyn Component> {
        Box::new(TabbedContent::mount(doc, root, &markup))
    })
}
