//! Parsed document tree.
//!
//! Nodes are stored in an arena owned by [`Document`] and addressed by
//! [`NodeId`]. Children are owned through the arena; the parent link is a
//! plain index, so the tree has no reference cycles and drops as one unit.
//! The Document node always sits at [`NodeId::ROOT`].

use crate::intern::InternedName;

/// Index of a node inside its [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The Document node
    pub const ROOT: Self = Self(0);
}

/// What a node is, and the data only that kind carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    /// `name` is everything between `<` and `>`, attribute text included
    Element { name: InternedName },
    /// Raw character run, never whitespace-only
    Text { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Element name, `None` for Document and Text nodes
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { name } => Some(name.as_str()),
            NodeKind::Document | NodeKind::Text { .. } => None,
        }
    }

    /// Text value, `None` for Document and Element nodes
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { value } => Some(value),
            NodeKind::Document | NodeKind::Element { .. } => None,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_document(&self) -> bool {
        matches!(self.kind, NodeKind::Document)
    }

    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text { .. })
    }
}

/// Owner of every node produced by one parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document)],
        }
    }

    /// Allocate a detached node. It joins the tree through [`Self::append_child`].
    pub(crate) fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(child);
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes, the Document node included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing was parsed under the root
    pub fn is_empty(&self) -> bool {
        self.children(NodeId::ROOT).is_empty()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or_default()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// First Element child of the root
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .copied()
            .find(|&id| self.get(id).is_some_and(Node::is_element))
    }

    /// Pre-order walk over the whole tree, yielding each node with its depth
    /// (0 for the Document node).
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: vec![(NodeId::ROOT, 0)],
        }
    }

    /// Parent, grandparent, ... up to and including the Document node
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            current: self.parent(id),
        }
    }

    /// Concatenated Text values under `id`, in document order
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.get(current) else {
                continue;
            };
            if let Some(value) = node.value() {
                out.push_str(value);
            }
            stack.extend(node.children().iter().rev().copied());
        }
        out
    }
}

pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, depth) = self.stack.pop()?;
            let Some(node) = self.doc.get(id) else {
                continue;
            };
            self.stack
                .extend(node.children().iter().rev().map(|&child| (child, depth + 1)));
            return Some((id, depth, node));
        }
    }
}

pub struct Ancestors<'a> {
    doc: &'a Document,
    current: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.doc.parent(id);
        Some(id)
    }
}
