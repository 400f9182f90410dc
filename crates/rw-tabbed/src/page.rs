//! Page host: owns a document and the components upgraded in it.

use rw_dom::{Document, NodeId};

use crate::event::{KeyboardEvent, UiEvent};
use crate::navigation::Key;
use crate::registry::{Component, ComponentRegistry};

/// Component attached to its root element.
struct Instance {
    root: NodeId,
    component: Box<dyn Component>,
}

/// Document plus the component instances living in it.
///
/// Events are routed the way a browser routes them to custom elements: to
/// the nearest upgraded ancestor of the target. Each instance only ever sees
/// events from its own subtree, so several widgets on one page stay
/// independent.
pub struct Page {
    document: Document,
    registry: ComponentRegistry,
    instances: Vec<Instance>,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("registry", &self.registry)
            .field("instances", &self.roots())
            .finish_non_exhaustive()
    }
}

impl Page {
    /// Host `document` with the components defined in `registry`.
    ///
    /// Nothing is upgraded until [`Page::upgrade`] is called.
    #[must_use]
    pub fn new(document: Document, registry: ComponentRegistry) -> Self {
        Self {
            document,
            registry,
            instances: Vec::new(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn registry_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.registry
    }

    /// Instantiate components for defined elements not yet upgraded.
    ///
    /// Elements are visited in document order. Returns the number of new
    /// instances; calling it again without new definitions or markup
    /// returns `0`.
    pub fn upgrade(&mut self) -> usize {
        let candidates: Vec<NodeId> = self
            .document
            .descendants(self.document.root())
            .into_iter()
            .filter(|&id| {
                self.document
                    .tag(id)
                    .is_some_and(|tag| self.registry.get(tag).is_some())
            })
            .filter(|id| !self.instances.iter().any(|instance| instance.root == *id))
            .collect();

        let mut created = 0;
        for root in candidates {
            // Earlier constructors may have restructured the tree
            if !self.document.is_connected(root) {
                continue;
            }
            if let Some(component) = self.registry.construct(&mut self.document, root) {
                tracing::debug!(?root, tag = ?self.document.tag(root), "Upgraded element");
                self.instances.push(Instance { root, component });
                created += 1;
            }
        }
        created
    }

    /// Root elements of upgraded components, in upgrade order.
    #[must_use]
    pub fn roots(&self) -> Vec<NodeId> {
        self.instances.iter().map(|instance| instance.root).collect()
    }

    /// Concrete component upgraded at `root`, if it has type `T`.
    #[must_use]
    pub fn component<T: 'static>(&self, root: NodeId) -> Option<&T> {
        self.instances
            .iter()
            .find(|instance| instance.root == root)
            .and_then(|instance| instance.component.as_any().downcast_ref::<T>())
    }

    /// Deliver `event` to the component owning `target`.
    ///
    /// Returns `false` when no upgraded element contains the target.
    pub fn dispatch(&mut self, target: NodeId, event: &mut UiEvent) -> bool {
        let owner = self.document.ancestors_inclusive(target).find_map(|id| {
            self.instances
                .iter()
                .position(|instance| instance.root == id)
        });
        let Some(owner) = owner else {
            tracing::trace!(?target, "Event outside any component");
            return false;
        };
        self.instances[owner]
            .component
            .handle_event(&mut self.document, target, event);
        true
    }

    /// Click `target`.
    pub fn click(&mut self, target: NodeId) -> bool {
        self.dispatch(target, &mut UiEvent::Click)
    }

    /// Press `key` on the focused element.
    ///
    /// Returns the delivered event so callers can check whether its default
    /// action was prevented, or `None` when nothing has focus.
    pub fn press_key(&mut self, key: Key) -> Option<KeyboardEvent> {
        let target = self.document.focused()?;
        let mut event = UiEvent::key_down(key);
        self.dispatch(target, &mut event);
        match event {
            UiEvent::KeyDown(key_event) => Some(key_event),
            UiEvent::Click => None,
        }
    }
}
