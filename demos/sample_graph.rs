//! Custom visitors over a small road map.

use walkgraph::{depth_pass, EdgeId, Graph, OneTimeVisitor, PathBuilder, VertexId, Visitor};

/// Sums edge weights along the active branch and remembers the deepest one.
#[derive(Default)]
struct DeepestBranch {
    inner: OneTimeVisitor,
    weight: u32,
    best: Vec<VertexId>,
    best_weight: u32,
}

impl<V> Visitor<V, u32> for DeepestBranch {
    fn visit_vertex(&mut self, graph: &Graph<V, u32>, vertex: VertexId) -> bool {
        let accepted = self.inner.visit_vertex(graph, vertex);
        if accepted && self.inner.visited().len() > self.best.len() {
            self.best = self.inner.visited().to_vec();
            self.best_weight = self.weight;
        }
        accepted
    }

    fn visit_edge(&mut self, graph: &Graph<V, u32>, edge: EdgeId) -> bool {
        self.weight += graph.edge_properties(edge);
        self.inner.visit_edge(graph, edge)
    }

    fn leave_vertex(&mut self, graph: &Graph<V, u32>, vertex: VertexId) {
        self.inner.leave_vertex(graph, vertex);
    }

    fn leave_edge(&mut self, graph: &Graph<V, u32>, edge: EdgeId) {
        self.weight -= graph.edge_properties(edge);
        self.inner.leave_edge(graph, edge);
    }
}

fn main() -> Result<(), walkgraph::GraphError> {
    println!("walkgraph custom visitor example");
    println!("================================");

    let mut map: Graph<String, u32> = Graph::new();
    let towns: Vec<VertexId> = ["Harbor", "Mill", "Ford", "Keep", "Quarry"]
        .iter()
        .map(|name| map.add_vertex((*name).to_owned()))
        .collect();

    map.add_edge(towns[0], 4, towns[1])?;
    map.add_edge(towns[1], 3, towns[2])?;
    map.add_ordered_edge(towns[2], 7, towns[3])?;
    map.add_edge(towns[0], 9, towns[4])?;
    map.add_edge(towns[4], 2, towns[3])?;

    let mut deepest = DeepestBranch::default();
    depth_pass(&map, towns[0], &mut deepest)?;
    let names: Vec<&String> = map.path_properties(&deepest.best);
    println!("Deepest branch: {names:?} (total {})", deepest.best_weight);

    // Case-insensitive search, first path only.
    let mut builder = PathBuilder::new("keep".to_owned())
        .with_matcher(|candidate: &String, target: &String| candidate.eq_ignore_ascii_case(target))
        .with_path_count(1);
    depth_pass(&map, towns[0], &mut builder)?;
    for path in builder.paths() {
        println!("First route to Keep: {:?}", map.path_properties(path));
    }

    Ok(())
}
