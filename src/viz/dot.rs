use super::{TreeLayout, VizNode};

impl std::fmt::Display for TreeLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dot())
    }
}

impl TreeLayout {
    /// Converts the layout to the [graphviz](https://graphviz.org/docs/layouts/dot/)
    /// dot language format.
    ///
    /// Positions are pinned so `neato -n` reproduces the computed layout;
    /// plain `dot` ignores them and lays the tree out itself.
    pub fn to_dot(&self) -> String {
        format!(
            "digraph morse {{\n\
                \tnode [shape = circle, fixedsize = true, width = 0.4];\n\
            \n\
                {}\n\
            \n\
                {}\n\
            }}",
            self.nodes
                .iter()
                .map(|n| format!("\t{}", node_dot(n, self.meta.canvas_height)))
                .collect::<Vec<String>>()
                .join("\n"),
            self.edges
                .iter()
                .map(|e| {
                    format!(
                        "\t{} -> {} [label = \"{}\"];",
                        node_id(&e.from),
                        node_id(&e.to),
                        e.signal
                    )
                })
                .collect::<Vec<String>>()
                .join("\n")
        )
    }
}

fn node_id(path: &str) -> String {
    if path.is_empty() {
        "\"root\"".to_string()
    } else {
        format!("\"{}\"", path)
    }
}

fn node_dot(node: &VizNode, canvas_height: f64) -> String {
    let label = match node.symbol {
        Some('"') => "\\\"".to_string(),
        Some('\\') => "\\\\".to_string(),
        Some(c) => c.to_string(),
        None => String::new(),
    };
    // graphviz puts the origin bottom-left
    let [x, y] = node.position;
    format!(
        "{} [label = \"{}\", pos = \"{},{}!\"];",
        node_id(&node.path),
        label,
        x,
        canvas_height - y
    )
}
