//! Node placement

use super::{
    TreeLayout, VizEdge, VizLabel, VizMeta, VizNode, CANVAS_WIDTH, CAPTION_MARGIN,
    LEVEL_SPACING, NODE_RADIUS, ROOT_Y,
};
use crate::model::{Code, Signal};
use crate::trie::{MorseTrie, Node};

impl TreeLayout {
    /// Lay out `trie` on the default canvas width
    pub fn compute(trie: &MorseTrie) -> Self {
        Self::with_width(trie, CANVAS_WIDTH)
    }

    /// Lay out `trie` on a canvas `width` units wide
    ///
    /// The canvas height is derived from the trie: one level spacing per
    /// level plus the caption margin.
    pub fn with_width(trie: &MorseTrie, width: f64) -> Self {
        let mut layout = TreeLayout {
            nodes: Vec::new(),
            edges: Vec::new(),
            labels: Vec::new(),
            meta: VizMeta {
                height: trie.height(),
                node_count: 0,
                symbol_count: 0,
                canvas_width: width,
                canvas_height: CAPTION_MARGIN + trie.levels() as f64 * LEVEL_SPACING,
                node_radius: NODE_RADIUS,
            },
        };

        layout.place(trie.root(), width / 2.0, ROOT_Y, width / 4.0);
        layout.meta.node_count = layout.nodes.len();
        layout.meta.symbol_count = layout.nodes.iter().filter(|n| n.symbol.is_some()).count();
        layout
    }

    /// Add the decoded message and each character's path under the tree
    pub fn with_caption(mut self, trie: &MorseTrie, decoded: &str) -> Self {
        let paths = trie
            .paths(decoded)
            .into_iter()
            .map(|(c, code)| format!("{} ({})", c, code))
            .collect::<Vec<_>>()
            .join("  ");
        let bottom = self.meta.canvas_height;

        self.labels.push(VizLabel {
            text: format!("Decoded message: {}", decoded),
            position: [40.0, bottom - 60.0],
        });
        self.labels.push(VizLabel {
            text: format!("Node paths: {}", paths),
            position: [40.0, bottom - 30.0],
        });
        self
    }

    pub fn node(&self, path: &str) -> Option<&VizNode> {
        self.nodes.iter().find(|n| n.path == path)
    }

    fn place(&mut self, root: &Node, x: f64, y: f64, offset: f64) {
        // Pre-order with an explicit stack; the dash child is pushed first so
        // the dot subtree is emitted before it.
        let mut stack: Vec<(&Node, Code, Option<String>, f64, f64, f64)> =
            vec![(root, Code::default(), None, x, y, offset)];

        while let Some((node, path, parent, x, y, offset)) = stack.pop() {
            let path_str = path.to_string();
            if let Some((from, signal)) = parent.zip(path.signals().last().copied()) {
                self.edges.push(VizEdge {
                    from,
                    to: path_str.clone(),
                    signal,
                });
            }
            self.nodes.push(VizNode {
                path: path_str.clone(),
                symbol: node.symbol(),
                depth: path.len(),
                position: [x, y],
            });

            for (signal, child_x) in [(Signal::Dash, x + offset), (Signal::Dot, x - offset)] {
                if let Some(child) = node.child(signal) {
                    let mut child_path = path.clone();
                    child_path.push(signal);
                    stack.push((
                        child,
                        child_path,
                        Some(path_str.clone()),
                        child_x,
                        y + LEVEL_SPACING,
                        offset / 2.0,
                    ));
                }
            }
        }
    }
}
