//! Visualization support for Morse tries
//!
//! Nothing here draws. This module lays the trie out on a fixed-width
//! canvas (each level 80 units lower, horizontal spread halving per level)
//! and exports the result as plain data for a renderer, either as JSON or
//! as Graphviz dot.

mod dot;
mod layout;

use crate::model::Signal;
use serde::{Deserialize, Serialize};

/// Default canvas width in layout units
pub const CANVAS_WIDTH: f64 = 1200.0;

/// Vertical distance between levels
pub const LEVEL_SPACING: f64 = 80.0;

/// Y coordinate of the root
pub const ROOT_Y: f64 = 40.0;

/// Radius of a node circle
pub const NODE_RADIUS: f64 = 15.0;

/// Space below the deepest level reserved for captions
pub const CAPTION_MARGIN: f64 = 200.0;

/// A trie node with its canvas coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizNode {
    /// Code path from the root, empty for the root itself
    pub path: String,
    /// Decoded character, absent for blank nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<char>,
    /// Depth below the root
    pub depth: usize,
    /// Centre of the node circle [x, y]
    pub position: [f64; 2],
}

/// A parent → child link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizEdge {
    pub from: String,
    pub to: String,
    pub signal: Signal,
}

/// A line of text drawn under the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizLabel {
    pub text: String,
    pub position: [f64; 2],
}

/// Metadata about the layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizMeta {
    /// Trie height in edges
    pub height: usize,
    /// Number of nodes, blank ones included
    pub node_count: usize,
    /// Number of nodes carrying a character
    pub symbol_count: usize,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub node_radius: f64,
}

/// Export format for a laid-out trie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    /// Nodes in pre-order, dot subtree before dash subtree
    pub nodes: Vec<VizNode>,
    pub edges: Vec<VizEdge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<VizLabel>,
    pub meta: VizMeta,
}
