//! Symbol resolution
//!
//! Lexical enclosing-scope search over confirmed nodes. Only an ancestor's
//! immediate children and arguments are scanned, never their subtrees, so a
//! lookup costs O(depth x branching) rather than O(tree).

use tracing::trace;

use super::{Ast, NodeId, NodeKind};

impl Ast {
    /// Nearest enclosing named entity called `name`, visible from `from`.
    ///
    /// The node itself is checked first, so a definition can resolve its own
    /// name for recursive self-reference. After that its block children are
    /// scanned in order, then its argument children, and on a miss the whole
    /// check is retried at the confirmed parent. The first match in child
    /// order wins; later same-named siblings are shadowed.
    pub fn find_symbol(&self, from: NodeId, name: &str) -> Option<NodeId> {
        let mut current = from;
        loop {
            let node = self.node(current);
            if node.kind().name() == Some(name) {
                trace!("resolved `{}` to {} (self)", name, current);
                return Some(current);
            }
            if let Some(found) = node
                .kind()
                .block_children()
                .and_then(|ids| self.first_named(ids, name))
            {
                trace!("resolved `{}` to {} in block of {}", name, found, current);
                return Some(found);
            }
            if let Some(found) = node
                .kind()
                .arg_children()
                .and_then(|ids| self.first_named(ids, name))
            {
                trace!("resolved `{}` to {} in arguments of {}", name, found, current);
                return Some(found);
            }
            match node.parent() {
                Some(parent) => {
                    trace!("`{}` not visible at {}, widening to {}", name, current, parent);
                    current = parent;
                }
                None => {
                    trace!("`{}` not found from {}", name, from);
                    return None;
                }
            }
        }
    }

    /// First child in `ids` whose name matches
    fn first_named(&self, ids: &[NodeId], name: &str) -> Option<NodeId> {
        ids.iter()
            .copied()
            .find(|&id| self.node(id).kind().name() == Some(name))
    }

    /// Declaration a usage node refers to.
    ///
    /// Resolution starts at the usage's confirmed parent, never at the usage
    /// itself. `None` for non-usage nodes, unconfirmed usages, and undefined
    /// identifiers.
    pub fn declaration_of(&self, usage: NodeId) -> Option<NodeId> {
        let node = self.node(usage);
        match node.kind() {
            NodeKind::Usage { name } => self.find_symbol(node.parent()?, name),
            _ => None,
        }
    }
}
