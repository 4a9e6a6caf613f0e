//! Tree rendering
//!
//! Read-only rendering of confirmed subtrees, one node per line, through an
//! [`IndentPrinter`]. Meant for debugging and for drivers that want a quick
//! structural view of a parse.

use std::fmt::{self, Write};

use crate::util::indent::IndentPrinter;

use super::{Ast, NodeId, NodeKind};

impl Ast {
    /// Render the subtree rooted at `root`, arguments before block children.
    pub fn dump<W: Write>(&self, root: NodeId, out: &mut IndentPrinter<'_, W>) -> fmt::Result {
        let node = self.node(root);
        match node.kind() {
            NodeKind::Block { .. } => out.println("block:")?,
            NodeKind::Binding { name } => out.println(format_args!("binding {}", name))?,
            NodeKind::Function { name, .. } => out.println(format_args!("function {}:", name))?,
            NodeKind::Call { .. } => out.println("call:")?,
            NodeKind::Usage { name } => out.println(format_args!("usage {}", name))?,
            NodeKind::Number { text } => out.println(format_args!("number {}", text))?,
        }
        out.indent();
        if let Some(args) = node.kind().arg_children() {
            for &child in args {
                self.dump(child, out)?;
            }
        }
        if let Some(body) = node.kind().block_children() {
            for &child in body {
                self.dump(child, out)?;
            }
        }
        out.dedent();
        Ok(())
    }

    /// Render into a fresh string
    pub fn render(&self, root: NodeId) -> String {
        let mut buf = String::new();
        let mut printer = IndentPrinter::new(&mut buf);
        // writing into a String cannot fail
        let _ = self.dump(root, &mut printer);
        buf
    }
}
