//! Arena-backed element tree.
//!
//! A [`Document`] owns every node it ever created. Nodes are addressed by
//! [`NodeId`] and linked through parent/children lists, so moving a subtree
//! is a matter of relinking ids. Detached nodes stay in the arena, which
//! keeps ids held by widgets valid after the markup is reorganized.

use crate::selector::Selector;

/// Handle to a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the document arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Element with a tag and ordered attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
}

impl Element {
    /// Create an element with the given tag (stored lowercase).
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    /// Lowercase tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Attribute value, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, keeping its position if it already exists.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some((_, existing)) = self
            .attrs
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            value.clone_into(existing);
        } else {
            self.attrs
                .push((name.to_ascii_lowercase(), value.to_owned()));
        }
    }

    /// Remove an attribute. Returns `true` if it was present.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attrs.len();
        self.attrs.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.attrs.len() != before
    }

    /// Whether the whitespace-separated `class` attribute contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// Add or remove a class depending on `force`.
    ///
    /// An emptied class list removes the `class` attribute.
    pub fn toggle_class(&mut self, class: &str, force: bool) {
        let mut classes: Vec<&str> = self
            .attribute("class")
            .map(|list| list.split_whitespace().collect())
            .unwrap_or_default();
        let present = classes.contains(&class);

        if force == present {
            return;
        }
        if force {
            classes.push(class);
        } else {
            classes.retain(|c| *c != class);
        }

        let joined = classes.join(" ");
        if joined.is_empty() {
            self.remove_attribute("class");
        } else {
            self.set_attribute("class", &joined);
        }
    }
}

/// Payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Element node.
    Element(Element),
    /// Text node (unescaped).
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory document tree with focus tracking.
///
/// The root is a synthetic element that is never serialized; parsed markup
/// becomes its children.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    focused: Option<NodeId>,
    focus_log: Vec<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Tag name of the synthetic root element.
    pub const ROOT_TAG: &'static str = "#document";

    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                data: NodeData::Element(Element::new(Self::ROOT_TAG)),
                parent: None,
                children: Vec::new(),
            }],
            root: NodeId(0),
            focused: None,
            focus_log: Vec::new(),
        }
    }

    /// Synthetic root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(Element::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_owned()))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Node payload, or `None` for an id from another document.
    #[must_use]
    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0).map(|node| &node.data)
    }

    /// Element payload, or `None` for text nodes and foreign ids.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.data(id)? {
            NodeData::Element(element) => Some(element),
            NodeData::Text(_) => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(id.0)?.data {
            NodeData::Element(element) => Some(element),
            NodeData::Text(_) => None,
        }
    }

    /// Tag name of an element node.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(Element::tag)
    }

    /// Parent of a node, `None` for the root and detached nodes.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    /// Children of a node in order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map_or(&[], |node| node.children.as_slice())
    }

    /// The node itself followed by its ancestors up to the top of its tree.
    pub fn ancestors_inclusive(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.nodes.get(id.0).map(|_| id), |&current| {
            self.parent(current)
        })
    }

    /// Whether `node` is `ancestor` or one of its descendants.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors_inclusive(node).any(|id| id == ancestor)
    }

    /// Whether the node is attached to the document root.
    #[must_use]
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(self.root, id)
    }

    /// Descendants of `scope` in document order, excluding `scope`.
    #[must_use]
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            result.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        result
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    ///
    /// Appending a node into its own subtree is ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return;
        }
        if self.contains(child, parent) {
            tracing::debug!(?parent, ?child, "Ignoring append that would create a cycle");
            return;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Detach a node (and its subtree) from its parent.
    ///
    /// Removing the focused element or an ancestor of it clears focus.
    pub fn remove(&mut self, id: NodeId) {
        if self
            .focused
            .is_some_and(|focused| self.contains(id, focused))
        {
            self.focused = None;
        }
        self.detach(id);
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        self.nodes[parent.0].children.retain(|&c| c != id);
        self.nodes[id.0].parent = None;
    }

    /// Attribute value of an element.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attribute(name)
    }

    /// Whether an element carries the attribute.
    #[must_use]
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Set an attribute on an element. Text nodes are ignored.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element.set_attribute(name, value);
        }
    }

    /// Remove an attribute from an element.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(element) = self.element_mut(id) {
            element.remove_attribute(name);
        }
    }

    /// Whether an element has the class.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    /// Add (`force = true`) or remove a class on an element.
    pub fn toggle_class(&mut self, id: NodeId, class: &str, force: bool) {
        if let Some(element) = self.element_mut(id) {
            element.toggle_class(class, force);
        }
    }

    /// Concatenated text of a subtree.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        if let Some(NodeData::Text(t)) = self.data(id) {
            text.push_str(t);
        }
        for node in self.descendants(id) {
            if let Some(NodeData::Text(t)) = self.data(node) {
                text.push_str(t);
            }
        }
        text
    }

    /// First descendant element of `scope` matching the selector.
    #[must_use]
    pub fn query_selector(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&id| self.element(id).is_some_and(|e| selector.matches(e)))
    }

    /// All descendant elements of `scope` matching the selector, in document order.
    #[must_use]
    pub fn query_selector_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(|e| selector.matches(e)))
            .collect()
    }

    /// Move input focus to an element.
    ///
    /// Every call is recorded in the focus log, including repeated focus of
    /// the already-focused element.
    pub fn focus(&mut self, id: NodeId) {
        if self.element(id).is_none() {
            return;
        }
        self.focused = Some(id);
        self.focus_log.push(id);
    }

    /// Currently focused element.
    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Every element focused so far, oldest first.
    #[must_use]
    pub fn focus_log(&self) -> &[NodeId] {
        &self.focus_log
    }
}
