//! Builds the six-vertex sample graph, prints its adjacency and the paths to `F1`.

use anyhow::{Context, Result};
use walkgraph::{depth_pass, Endpoints, Graph, PathBuilder, VertexId};

fn build_sample<'a>() -> Result<(Graph<&'a str, i32>, VertexId)> {
    let mut graph = Graph::with_capacity(6, 6);
    let a1 = graph.add_vertex("A1");
    let b1 = graph.add_vertex("B1");
    let c1 = graph.add_vertex("C1");
    let b2 = graph.add_vertex("B2");
    let e1 = graph.add_vertex("E1");
    let f1 = graph.add_vertex("F1");

    graph.add_edge(a1, 10, b1)?;
    graph.add_edge(b1, 20, c1)?;
    graph.add_edge(a1, 15, b2)?;
    graph.add_ordered_edge(c1, 30, e1)?;
    graph.add_ordered_edge(e1, 25, f1)?;
    graph.add_edge(b2, 40, f1)?;

    Ok((graph, a1))
}

fn print_adjacency(graph: &Graph<&str, i32>) {
    println!("Adjacency:");
    for (id, vertex) in graph.vertices() {
        let links: Vec<String> = vertex
            .edges()
            .iter()
            .filter_map(|&e| {
                let edge = graph.edge(e)?;
                let other = edge.traverse_from(e, id).ok()?;
                let arrow = match edge.endpoints() {
                    Endpoints::Undirected { .. } => "--",
                    Endpoints::Directed { .. } => "->",
                };
                Some(format!("{arrow}{} ({})", graph.properties(other), edge.properties()))
            })
            .collect();
        println!("  {:<3} {}", vertex.properties(), links.join(", "));
    }
}

fn main() -> Result<()> {
    let target = std::env::args().nth(1).unwrap_or_else(|| "F1".to_owned());

    let (graph, root) = build_sample().context("building sample graph")?;
    print_adjacency(&graph);

    let mut builder = PathBuilder::new(target.as_str());
    depth_pass(&graph, root, &mut builder).context("searching for paths")?;

    println!("\nPaths from {} to {target}:", graph.properties(root));
    if builder.paths().is_empty() {
        println!("  (none)");
    }
    for path in builder.paths() {
        let names: Vec<&str> = graph.path_properties(path).into_iter().copied().collect();
        println!("  {}", names.join(" -> "));
    }

    Ok(())
}
