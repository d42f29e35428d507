//! Reconstructs tree nesting from flat, interval-tagged tokens.
//!
//! No parse structure survives matching except the token intervals
//! themselves; containment between intervals is all the builder consults.
//! Nodes live in an index-addressed arena with child/sibling links stored as
//! indices, so the finished tree is read-only, cycle-free, and freed as a
//! unit.

use alloc::{string::String, vec::Vec};
use core::fmt::Write as _;

use crate::{
    input::InputBuffer,
    token::{Rule, Token},
};

/// Index of a node in a [`SyntaxTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node<R> {
    token: Token<R>,
    first_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

/// Nested syntax tree built once from a trimmed token sequence.
#[derive(Debug)]
pub struct SyntaxTree<R: Rule> {
    nodes: Vec<Node<R>>,
    root: Option<NodeId>,
}

impl<R: Rule> SyntaxTree<R> {
    /// Builds the tree from tokens in emission order.
    ///
    /// Zero-width tokens carry no structure and are skipped. For each
    /// incoming token, every pending node whose interval is contained in the
    /// incoming `[begin, end)` is popped and threaded as the new node's child
    /// chain, preserving emission order among siblings. Emission order must
    /// be post-order (a rule's token after its sub-rules') and recorded
    /// intervals must be nested or disjoint, never partially overlapping —
    /// both are grammar obligations, not checked here.
    #[must_use]
    pub fn build(tokens: &[Token<R>]) -> Self {
        let mut nodes: Vec<Node<R>> = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();
        for &token in tokens {
            if token.begin == token.end {
                continue;
            }
            let mut first_child = None;
            while let Some(&top) = stack.last() {
                let pending = nodes[top.0].token;
                if pending.begin >= token.begin && pending.end <= token.end {
                    stack.pop();
                    nodes[top.0].next_sibling = first_child;
                    first_child = Some(top);
                } else {
                    debug_assert!(
                        pending.end <= token.begin || pending.begin >= token.end,
                        "partially overlapping token intervals"
                    );
                    break;
                }
            }
            let id = NodeId(nodes.len());
            nodes.push(Node {
                token,
                first_child,
                next_sibling: None,
            });
            stack.push(id);
        }
        // Whatever is still pending becomes the top-level sibling chain,
        // earliest-emitted first.
        for pair in stack.windows(2) {
            nodes[pair[0].0].next_sibling = Some(pair[1]);
        }
        let root = stack.first().copied();
        Self { nodes, root }
    }

    /// Head of the top-level sibling chain; `None` for an empty tree.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when no non-empty token was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The token at `id`.
    #[must_use]
    pub fn token(&self, id: NodeId) -> Token<R> {
        self.nodes[id.0].token
    }

    /// First child of `id`, if any.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].first_child
    }

    /// Next sibling of `id`, if any.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next_sibling
    }

    /// Children of `id`, left to right.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_, R> {
        Children {
            tree: self,
            next: self.first_child(id),
        }
    }

    /// Renders the tree, one depth-indented line per node:
    /// `<rule name> <quoted slice>`. `pretty` wraps rule names in ANSI blue.
    #[must_use]
    pub fn render(&self, input: &InputBuffer, pretty: bool) -> String {
        let mut out = String::new();
        self.render_chain(&mut out, input, pretty, self.root, 0);
        out
    }

    fn render_chain(
        &self,
        out: &mut String,
        input: &InputBuffer,
        pretty: bool,
        head: Option<NodeId>,
        depth: usize,
    ) {
        let mut next = head;
        while let Some(id) = next {
            let node = &self.nodes[id.0];
            let name = node.token.rule.name();
            let slice = input.slice(node.token.begin, node.token.end);
            for _ in 0..depth {
                out.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = if pretty {
                writeln!(out, "\x1B[34m{name}\x1B[m {slice:?}")
            } else {
                writeln!(out, "{name} {slice:?}")
            };
            self.render_chain(out, input, pretty, node.first_child, depth + 1);
            next = node.next_sibling;
        }
    }
}

/// Iterator over a node's children, left to right.
#[derive(Debug)]
pub struct Children<'t, R: Rule> {
    tree: &'t SyntaxTree<R>,
    next: Option<NodeId>,
}

impl<R: Rule> Iterator for Children<'_, R> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.next_sibling(id);
        Some(id)
    }
}
