//! Minimal element-tree facade over the server-rendered page.
//!
//! The binding layer never owns widget rendering; it only reads structured
//! data the server encoded into markup (ids, classes, attributes, text) and
//! mutates form state in place. This module models exactly that surface: an
//! arena-backed tree with id/class/attribute queries and input mutation.
//!
//! Nodes are addressed by [`NodeId`] handles issued by the owning
//! [`Document`]. Handles from one document must not be used with another.

use indexmap::IndexMap;

/// Handle to an element inside a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: IndexMap<String, String>,
    text: String,
    value: String,
    checked: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed element tree with the query surface the adapters need.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<ElementData>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty page skeleton (`html` with `head` and `body`).
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
        };
        doc.root = doc.push_node("html");
        doc.head = doc.push_node("head");
        doc.body = doc.push_node("body");
        doc.attach(doc.root, doc.head);
        doc.attach(doc.root, doc.body);
        doc
    }

    fn push_node(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ElementData {
            tag: tag.to_owned(),
            ..ElementData::default()
        });
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    #[must_use]
    pub fn head(&self) -> NodeId {
        self.head
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Creates a detached element; it joins queries once appended to the tree.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push_node(tag)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.attach(parent, child);
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let mut current = node;
        while let Some(parent) = self.nodes[current.0].parent {
            current = parent;
        }
        current == self.root
    }

    // --- element state ---

    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    #[must_use]
    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].id.as_deref()
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        self.nodes[node.0].id = Some(id.to_owned());
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        let classes = &mut self.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attrs
            .insert(name.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].text
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.0].text = text.to_owned();
    }

    /// Current value of a form control (empty string when never set).
    #[must_use]
    pub fn value(&self, node: NodeId) -> &str {
        &self.nodes[node.0].value
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.nodes[node.0].value = value.to_owned();
    }

    #[must_use]
    pub fn checked(&self, node: NodeId) -> bool {
        self.nodes[node.0].checked
    }

    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        self.nodes[node.0].checked = checked;
    }

    pub fn toggle_checked(&mut self, node: NodeId) -> bool {
        let flag = !self.nodes[node.0].checked;
        self.nodes[node.0].checked = flag;
        flag
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    // --- queries ---

    fn attached_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|id| self.is_attached(*id))
    }

    /// First attached element carrying the given id attribute.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.attached_ids()
            .find(|node| self.nodes[node.0].id.as_deref() == Some(id))
    }

    /// All attached elements carrying the given class, in document order.
    #[must_use]
    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.attached_ids()
            .filter(|node| self.has_class(*node, class))
            .collect()
    }

    /// All attached elements whose attribute `name` equals `value`.
    #[must_use]
    pub fn elements_with_attr(&self, name: &str, value: &str) -> Vec<NodeId> {
        self.attached_ids()
            .filter(|node| self.attr(*node, name) == Some(value))
            .collect()
    }

    /// First direct child with the given tag.
    #[must_use]
    pub fn first_child_by_tag(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        self.nodes[node.0]
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].tag == tag)
    }

    /// First direct child carrying the given class.
    #[must_use]
    pub fn first_child_by_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.nodes[node.0]
            .children
            .iter()
            .copied()
            .find(|child| self.has_class(*child, class))
    }

    /// Descendants of `node` in preorder, excluding `node` itself.
    #[must_use]
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[node.0].children.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.nodes[current.0].children.iter().rev().copied());
        }
        out
    }

    /// Content of `<meta name="..." content="...">` in the page head.
    #[must_use]
    pub fn meta_content(&self, name: &str) -> Option<&str> {
        self.descendants(self.head)
            .into_iter()
            .filter(|node| self.tag(*node) == "meta")
            .find(|node| self.attr(*node, "name") == Some(name))
            .and_then(|node| self.attr(node, "content"))
    }

    // --- mutation helpers used by the adapters ---

    /// Appends a hidden input to `parent` and returns its handle.
    pub fn append_hidden_input(&mut self, parent: NodeId, name: &str, value: &str) -> NodeId {
        let input = self.create_element("input");
        self.set_attr(input, "type", "hidden");
        self.set_attr(input, "name", name);
        self.set_value(input, value);
        self.append_child(parent, input);
        input
    }

    /// Appends a `div` with the given text to the page body.
    pub fn append_div_to_body(&mut self, text: &str) -> NodeId {
        let body = self.body;
        let div = self.create_element("div");
        self.set_text(div, text);
        self.append_child(body, div);
        div
    }

    /// Direct child input of `parent` with the given id, created on demand.
    ///
    /// Guarantees the one-input-per-key form invariant: repeated calls with
    /// the same id always return the same node.
    pub fn ensure_child_input(&mut self, parent: NodeId, id: &str) -> NodeId {
        let existing = self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].id.as_deref() == Some(id));
        if let Some(input) = existing {
            return input;
        }

        let input = self.create_element("input");
        self.set_attr(input, "type", "hidden");
        self.set_id(input, id);
        self.append_child(parent, input);
        input
    }
}
