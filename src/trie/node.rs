//! Trie node type

use crate::model::Signal;
use std::fmt;

/// A node in the Morse trie
///
/// Each node exclusively owns its two optional subtrees: the dot child
/// (left) and the dash child (right). A node with no symbol is a pure
/// branching point that no inserted code terminates at.
///
/// Codes may be arbitrarily long, so every whole-subtree operation here
/// (height, count, clone, equality, drop) walks a heap stack instead of
/// recursing.
#[derive(Default)]
pub struct Node {
    symbol: Option<char>,
    dot: Option<Box<Node>>,
    dash: Option<Box<Node>>,
}

impl Node {
    /// Create a symbol-less node with no children
    pub fn sentinel() -> Self {
        Node::default()
    }

    /// The character this node decodes to, if any code ends here
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    pub fn dot(&self) -> Option<&Node> {
        self.dot.as_deref()
    }

    pub fn dash(&self) -> Option<&Node> {
        self.dash.as_deref()
    }

    /// Get the child reached by following `signal`
    pub fn child(&self, signal: Signal) -> Option<&Node> {
        match signal {
            Signal::Dot => self.dot(),
            Signal::Dash => self.dash(),
        }
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.dot.is_none() && self.dash.is_none()
    }

    /// Number of nodes on the longest downward path, counting this one
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Number of nodes in this subtree
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Present children, dot first
    pub fn children(&self) -> impl Iterator<Item = &Node> + '_ {
        self.dot().into_iter().chain(self.dash())
    }

    // === Mutation, reserved for the owning trie ===

    /// Get the child for `signal`, creating a sentinel if it is missing
    pub(crate) fn child_or_insert(&mut self, signal: Signal) -> &mut Node {
        let slot = match signal {
            Signal::Dot => &mut self.dot,
            Signal::Dash => &mut self.dash,
        };
        slot.get_or_insert_with(|| Box::new(Node::sentinel()))
    }

    /// Replace the symbol, returning the previous one
    pub(crate) fn set_symbol(&mut self, symbol: char) -> Option<char> {
        self.symbol.replace(symbol)
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        // Post-order: both children are built before their parent.
        let mut pending = vec![(self, false)];
        let mut built: Vec<Node> = Vec::new();
        while let Some((node, expanded)) = pending.pop() {
            if expanded {
                let dash = node.dash.as_ref().and_then(|_| built.pop()).map(Box::new);
                let dot = node.dot.as_ref().and_then(|_| built.pop()).map(Box::new);
                built.push(Node {
                    symbol: node.symbol,
                    dot,
                    dash,
                });
            } else {
                pending.push((node, true));
                pending.extend(node.dash().map(|child| (child, false)));
                pending.extend(node.dot().map(|child| (child, false)));
            }
        }
        built.pop().unwrap_or_default()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.symbol != b.symbol {
                return false;
            }
            for (x, y) in [(a.dot(), b.dot()), (a.dash(), b.dash())] {
                match (x, y) {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("symbol", &self.symbol)
            .field("dot", &self.dot.is_some())
            .field("dash", &self.dash.is_some())
            .finish()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach descendants so each box drops with no children left.
        let mut stack: Vec<Box<Node>> = self
            .dot
            .take()
            .into_iter()
            .chain(self.dash.take())
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.dot.take());
            stack.extend(node.dash.take());
        }
    }
}
