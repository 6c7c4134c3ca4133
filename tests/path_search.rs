//! End-to-end path searches over the sample graph.

use walkgraph::{
    depth_pass, find_paths, EdgeId, Graph, GraphError, OneTimeVisitor, PathBuilder, VertexId, Visitor,
};

struct Sample {
    graph: Graph<&'static str, i32>,
    a1: VertexId,
    b1: VertexId,
    c1: VertexId,
    b2: VertexId,
    e1: VertexId,
    f1: VertexId,
}

fn sample() -> Sample {
    let mut graph = Graph::new();
    let a1 = graph.add_vertex("A1");
    let b1 = graph.add_vertex("B1");
    let c1 = graph.add_vertex("C1");
    let b2 = graph.add_vertex("B2");
    let e1 = graph.add_vertex("E1");
    let f1 = graph.add_vertex("F1");

    graph.add_edge(a1, 10, b1).unwrap();
    graph.add_edge(b1, 20, c1).unwrap();
    graph.add_edge(a1, 15, b2).unwrap();
    graph.add_ordered_edge(c1, 30, e1).unwrap();
    graph.add_ordered_edge(e1, 25, f1).unwrap();
    graph.add_edge(b2, 40, f1).unwrap();

    Sample { graph, a1, b1, c1, b2, e1, f1 }
}

/// Counts how often each vertex is entered.
struct EntryCounter {
    inner: OneTimeVisitor,
    entries: Vec<usize>,
}

impl EntryCounter {
    fn new(vertex_count: usize) -> Self {
        Self {
            inner: OneTimeVisitor::new(),
            entries: vec![0; vertex_count],
        }
    }
}

impl<V, E> Visitor<V, E> for EntryCounter {
    fn visit_vertex(&mut self, graph: &Graph<V, E>, vertex: VertexId) -> bool {
        let accepted = self.inner.visit_vertex(graph, vertex);
        if accepted {
            self.entries[vertex.index()] += 1;
        }
        accepted
    }

    fn visit_edge(&mut self, graph: &Graph<V, E>, edge: EdgeId) -> bool {
        self.inner.visit_edge(graph, edge)
    }

    fn leave_vertex(&mut self, graph: &Graph<V, E>, vertex: VertexId) {
        self.inner.leave_vertex(graph, vertex);
    }

    fn leave_edge(&mut self, graph: &Graph<V, E>, edge: EdgeId) {
        self.inner.leave_edge(graph, edge);
    }
}

#[test]
fn finds_both_routes_to_f1() {
    let s = sample();
    let mut builder = PathBuilder::new("F1");
    depth_pass(&s.graph, s.a1, &mut builder).unwrap();

    assert_eq!(
        builder.paths(),
        &[vec![s.a1, s.b1, s.c1, s.e1, s.f1], vec![s.a1, s.b2, s.f1]]
    );
    let names: Vec<Vec<&&str>> = builder
        .paths()
        .iter()
        .map(|p| s.graph.path_properties(p))
        .collect();
    assert_eq!(names[1], vec![&"A1", &"B2", &"F1"]);
    assert!(builder.active_path().is_empty());
}

#[test]
fn single_path_budget_keeps_the_first_discovery() {
    let s = sample();
    let mut builder = PathBuilder::new("F1").with_path_count(1);
    depth_pass(&s.graph, s.a1, &mut builder).unwrap();

    assert_eq!(builder.paths(), &[vec![s.a1, s.b1, s.c1, s.e1, s.f1]]);
    assert!(builder.active_path().is_empty());
}

#[test]
fn stopping_early_yields_the_same_paths() {
    let s = sample();
    for limit in [0, 1, 2, 5] {
        let mut keep_going = PathBuilder::new("F1").with_path_count(limit);
        depth_pass(&s.graph, s.a1, &mut keep_going).unwrap();

        let mut stop = PathBuilder::new("F1").with_path_count(limit).stop_when_full(true);
        depth_pass(&s.graph, s.a1, &mut stop).unwrap();

        assert_eq!(keep_going.paths(), stop.paths(), "limit {limit}");
        assert!(stop.active_path().is_empty());
    }
}

#[test]
fn ordered_edges_are_not_walked_backwards() {
    let s = sample();

    // E1 is only entered through its creator C1, never straight from F1.
    let paths = find_paths(&s.graph, s.f1, "E1", usize::MAX).unwrap();
    assert_eq!(paths, vec![vec![s.f1, s.b2, s.a1, s.b1, s.c1, s.e1]]);

    // Walking back from E1 must take the long way round.
    let paths = find_paths(&s.graph, s.e1, "C1", usize::MAX).unwrap();
    assert_eq!(paths, vec![vec![s.e1, s.f1, s.b2, s.a1, s.b1, s.c1]]);

    // C1 reaches E1 along its own ordered edge.
    let paths = find_paths(&s.graph, s.c1, "E1", usize::MAX).unwrap();
    assert_eq!(paths, vec![vec![s.c1, s.e1]]);

    // Undirected edges work from either end.
    assert_eq!(find_paths(&s.graph, s.b1, "A1", 1).unwrap(), vec![vec![s.b1, s.a1]]);
    assert_eq!(find_paths(&s.graph, s.a1, "B1", 1).unwrap(), vec![vec![s.a1, s.b1]]);
}

#[test]
fn missing_target_still_reaches_everything() {
    let s = sample();
    let mut builder = PathBuilder::new("Z9");
    depth_pass(&s.graph, s.a1, &mut builder).unwrap();
    assert!(builder.paths().is_empty());
    assert!(builder.active_path().is_empty());

    let mut counter = EntryCounter::new(s.graph.vertex_count());
    depth_pass(&s.graph, s.a1, &mut counter).unwrap();
    assert!(counter.entries.iter().all(|&n| n >= 1));
    assert!(counter.inner.visited().is_empty());
}

#[test]
fn tree_vertices_are_entered_exactly_once() {
    let mut graph = Graph::new();
    let root = graph.add_vertex(0);
    let mut frontier = vec![root];
    let mut next_label = 1;
    for _ in 0..3 {
        let mut children = Vec::new();
        for &parent in &frontier {
            for _ in 0..2 {
                let child = graph.add_vertex(next_label);
                next_label += 1;
                graph.add_edge(parent, (), child).unwrap();
                children.push(child);
            }
        }
        frontier = children;
    }

    let mut builder = PathBuilder::new(-1);
    depth_pass(&graph, root, &mut builder).unwrap();
    assert!(builder.paths().is_empty());

    let mut counter = EntryCounter::new(graph.vertex_count());
    depth_pass(&graph, root, &mut counter).unwrap();
    assert_eq!(counter.entries, vec![1; 15]);
}

#[test]
fn traversal_from_unknown_vertex_fails() {
    let s = sample();
    let empty: Graph<&str, i32> = Graph::new();
    let mut visitor = OneTimeVisitor::new();

    assert_eq!(
        depth_pass(&empty, s.a1, &mut visitor),
        Err(GraphError::VertexNotFound(s.a1))
    );
}
