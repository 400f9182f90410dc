//! Component registry keyed by element tag.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use rw_dom::{Document, NodeId};

use crate::event::UiEvent;

/// Interactive behavior attached to one element occurrence.
pub trait Component {
    /// Handle an event dispatched at `target` inside this component's root.
    fn handle_event(&mut self, doc: &mut Document, target: NodeId, event: &mut UiEvent);

    /// Downcasting hook for inspecting concrete component state.
    fn as_any(&self) -> &dyn Any;
}

/// Constructor invoked once per matching element.
pub type Factory = Box<dyn Fn(&mut Document, NodeId) -> Box<dyn Component>>;

/// Tag-to-factory registry.
///
/// Definitions are write-once: a second definition for the same tag is
/// ignored, so independent setup code may register the same component
/// without coordinating.
#[derive(Default)]
pub struct ComponentRegistry {
    definitions: HashMap<String, Factory>,
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.definitions.keys().collect();
        tags.sort();
        f.debug_struct("ComponentRegistry")
            .field("tags", &tags)
            .finish()
    }
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` for `tag` unless the tag is already defined.
    ///
    /// Returns `true` if this call added the definition.
    pub fn define<F>(&mut self, tag: &str, factory: F) -> bool
    where
        F: Fn(&mut Document, NodeId) -> Box<dyn Component> + 'static,
    {
        let tag = tag.to_ascii_lowercase();
        if self.definitions.contains_key(&tag) {
            tracing::debug!(%tag, "Component already defined, keeping existing definition");
            return false;
        }
        self.definitions.insert(tag, Box::new(factory));
        true
    }

    /// Factory registered for `tag`, if any.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&Factory> {
        self.definitions.get(&tag.to_ascii_lowercase())
    }

    /// Instantiate the component for an element, if its tag is defined.
    pub(crate) fn construct(&self, doc: &mut Document, element: NodeId) -> Option<Box<dyn Component>> {
        let tag = doc.tag(element)?;
        let factory = self.definitions.get(tag)?;
        Some(factory(doc, element))
    }
}
