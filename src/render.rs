//! Graphviz rendering of the graph, with an optional highlighted path.

use std::fmt::Write;

use crate::{Network, Path};

const HIGHLIGHT: &str = "color=red, penwidth=2";

/// Renders the graph as an undirected Graphviz DOT document.
///
/// Every place becomes a node (in listing order) and every route an edge labeled with its
/// distance. The routes travelled by the highlighted path are drawn in red.
pub fn render_dot<G: Network>(graph: &G, highlighted: Option<&Path>) -> String {
    let mut dot = String::from("graph {\n");
    dot.push_str("    node [shape=circle, style=filled, fillcolor=lightblue, fontsize=10];\n");

    // writing into a String cannot fail
    for place in graph.places() {
        let _ = writeln!(dot, "    {};", quote(place.as_str()));
    }

    for (a, b, distance) in graph.routes() {
        let on_path = highlighted.is_some_and(|path| path.contains_route(a.as_str(), b.as_str()));
        let style = if on_path {
            format!(", {HIGHLIGHT}")
        } else {
            String::new()
        };

        let _ = writeln!(
            dot,
            "    {} -- {} [label=\"{}\"{style}];",
            quote(a.as_str()),
            quote(b.as_str()),
            distance.km()
        );
    }

    dot.push_str("}\n");
    dot
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
