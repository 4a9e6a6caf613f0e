//! Syntax tree
//!
//! Nodes live in an insert-only arena owned by [`Ast`]; handles are
//! [`NodeId`]s, so parent back-references never own anything and are inert
//! once the arena is gone. A node is constructed with an *intended* parent
//! and becomes part of the tree only when [`Ast::confirm`] runs, which keeps
//! half-built nodes invisible to traversal and makes attachment a single
//! auditable step.

mod dump;
mod resolve;

use std::fmt;

use thiserror::Error;

/// Handle to a node in an [`Ast`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural errors raised while attaching nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The intended parent holds neither a block nor an argument list.
    #[error("node {node} cannot attach to {parent}: parent holds neither a block nor an argument list")]
    InvalidParent { node: NodeId, parent: NodeId },
    /// The target of an argument attachment has no argument list.
    #[error("node {parent} does not accept arguments")]
    NoArgumentList { parent: NodeId },
}

/// Node variants
///
/// Capabilities (a name, a block of children, an argument list) are a
/// property of the variant and are queried through [`NodeKind::name`],
/// [`NodeKind::block_children`], and [`NodeKind::arg_children`]. The child
/// lists are maintained by [`Ast::confirm`] and [`Ast::alloc_argument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Ordered statement block
    Block { body: Vec<NodeId> },
    /// Named declaration without children
    Binding { name: String },
    /// Named definition with an argument list and a body
    Function {
        name: String,
        params: Vec<NodeId>,
        body: Vec<NodeId>,
    },
    /// Call-like node with an ordered argument list
    Call { args: Vec<NodeId> },
    /// Reference to a symbol declared elsewhere
    Usage { name: String },
    /// Integer literal
    Number { text: String },
}

impl NodeKind {
    /// An empty block
    pub fn block() -> Self {
        NodeKind::Block { body: Vec::new() }
    }

    /// A named declaration
    pub fn binding(name: impl Into<String>) -> Self {
        NodeKind::Binding { name: name.into() }
    }

    /// A named definition with empty parameter and body lists
    pub fn function(name: impl Into<String>) -> Self {
        NodeKind::Function {
            name: name.into(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// A call with an empty argument list
    pub fn call() -> Self {
        NodeKind::Call { args: Vec::new() }
    }

    /// A reference to `name`
    pub fn usage(name: impl Into<String>) -> Self {
        NodeKind::Usage { name: name.into() }
    }

    /// An integer literal with the given lexeme
    pub fn number(text: impl Into<String>) -> Self {
        NodeKind::Number { text: text.into() }
    }

    /// Name of the entity, for variants carrying the named capability.
    ///
    /// A [`NodeKind::Usage`] holds an identifier but is deliberately not
    /// named: a reference must never resolve to itself.
    pub fn name(&self) -> Option<&str> {
        match self {
            NodeKind::Binding { name } | NodeKind::Function { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Ordered block of child statements, when the variant holds one
    pub fn block_children(&self) -> Option<&[NodeId]> {
        match self {
            NodeKind::Block { body } | NodeKind::Function { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Ordered argument list, when the variant holds one
    pub fn arg_children(&self) -> Option<&[NodeId]> {
        match self {
            NodeKind::Function { params, .. } => Some(params),
            NodeKind::Call { args } => Some(args),
            _ => None,
        }
    }
}

/// A syntax-tree node
///
/// `line_no` and `indentation_level` stay unset until the parser assigns
/// them.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    pending_parent: Option<NodeId>,
    line_no: Option<u32>,
    indentation_level: Option<u32>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Confirmed parent; `None` for roots and unconfirmed nodes
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn line_no(&self) -> Option<u32> {
        self.line_no
    }

    pub fn indentation_level(&self) -> Option<u32> {
        self.indentation_level
    }
}

/// Arena owning every node of one tree
///
/// Dropping the arena drops the whole tree; there is no individual detach.
#[derive(Debug, Default)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Construct a node with an intended parent (`None` for a root).
    ///
    /// The node is not part of the tree until [`Ast::confirm`] runs. The
    /// parent must already be allocated, so parent indices are always
    /// smaller than child indices and the ancestor walk cannot cycle.
    pub fn alloc(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            parent: None,
            pending_parent: parent,
            line_no: None,
            indentation_level: None,
        });
        id
    }

    /// Construct a node directly into `parent`'s argument list.
    ///
    /// Definition-like nodes route confirmed children into their block, so
    /// parameter lists are filled through this explicit step instead. The
    /// returned node is already attached and needs no confirmation.
    pub fn alloc_argument(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId, TreeError> {
        let id = NodeId(self.nodes.len() as u32);
        match &mut self.nodes[parent.index()].kind {
            NodeKind::Function { params, .. } => params.push(id),
            NodeKind::Call { args } => args.push(id),
            _ => return Err(TreeError::NoArgumentList { parent }),
        }
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            pending_parent: Some(parent),
            line_no: None,
            indentation_level: None,
        });
        Ok(id)
    }

    /// Shared access to a node
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Record the source line a node came from
    pub fn set_line_no(&mut self, id: NodeId, line_no: u32) {
        self.nodes[id.index()].line_no = Some(line_no);
    }

    /// Record the indentation depth a node was parsed at
    pub fn set_indentation_level(&mut self, id: NodeId, level: u32) {
        self.nodes[id.index()].indentation_level = Some(level);
    }

    /// Promote the intended parent to the real parent link and append the
    /// node to the parent's child structure.
    ///
    /// Idempotent: a node whose parent link is already set is left alone.
    /// Roots confirm without attaching anywhere. A parent that holds a
    /// block gets the node appended there; otherwise its argument list is
    /// used; a parent with neither shape is a structural error, and the
    /// node is left unattached so sibling state stays intact.
    pub fn confirm(&mut self, id: NodeId) -> Result<(), TreeError> {
        if self.nodes[id.index()].parent.is_some() {
            return Ok(());
        }
        let Some(parent) = self.nodes[id.index()].pending_parent else {
            return Ok(());
        };
        match &mut self.nodes[parent.index()].kind {
            NodeKind::Block { body } | NodeKind::Function { body, .. } => body.push(id),
            NodeKind::Call { args } => args.push(id),
            _ => return Err(TreeError::InvalidParent { node: id, parent }),
        }
        self.nodes[id.index()].parent = Some(parent);
        Ok(())
    }
}
