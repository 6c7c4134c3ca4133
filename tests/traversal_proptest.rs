use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use proptest::prelude::*;
use std::collections::BTreeSet;
use walkgraph::{depth_pass, find_paths, EdgeId, Graph, OneTimeVisitor, PathBuilder, VertexId, Visitor};

#[derive(Debug, Clone)]
struct Shape {
    labels: Vec<u8>,
    edges: Vec<(usize, usize, bool)>,
    start: usize,
}

fn graph_shape() -> impl Strategy<Value = Shape> {
    (1usize..8).prop_flat_map(|n| {
        (
            proptest::collection::vec(0u8..3, n),
            proptest::collection::vec((0..n, 0..n, any::<bool>()), 0..14),
            0..n,
        )
            .prop_map(|(labels, edges, start)| Shape { labels, edges, start })
    })
}

fn build(shape: &Shape) -> (Graph<u8, usize>, Vec<VertexId>) {
    let mut g = Graph::new();
    let ids: Vec<VertexId> = shape.labels.iter().map(|&l| g.add_vertex(l)).collect();
    for (i, &(u, v, directed)) in shape.edges.iter().enumerate() {
        if directed {
            g.add_ordered_edge(ids[u], i, ids[v]).unwrap();
        } else {
            g.add_edge(ids[u], i, ids[v]).unwrap();
        }
    }
    (g, ids)
}

fn reachable_reference(shape: &Shape) -> BTreeSet<usize> {
    let mut g = DiGraph::<(), ()>::new();
    let nodes: Vec<NodeIndex> = shape.labels.iter().map(|_| g.add_node(())).collect();
    for &(u, v, directed) in &shape.edges {
        g.add_edge(nodes[u], nodes[v], ());
        if !directed {
            g.add_edge(nodes[v], nodes[u], ());
        }
    }
    let mut dfs = Dfs::new(&g, nodes[shape.start]);
    let mut out = BTreeSet::new();
    while let Some(nx) = dfs.next(&g) {
        out.insert(nx.index());
    }
    out
}

/// Checks the active path at every entry and records what was entered.
#[derive(Default)]
struct Auditor {
    inner: OneTimeVisitor,
    entered: BTreeSet<usize>,
    duplicate_seen: bool,
    max_depth: usize,
}

impl<V, E> Visitor<V, E> for Auditor {
    fn visit_vertex(&mut self, graph: &Graph<V, E>, vertex: VertexId) -> bool {
        let path = self.inner.visited();
        let unique: BTreeSet<_> = path.iter().collect();
        self.duplicate_seen |= unique.len() != path.len();

        let accepted = self.inner.visit_vertex(graph, vertex);
        if accepted {
            self.entered.insert(vertex.index());
            self.max_depth = self.max_depth.max(self.inner.visited().len());
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

proptest! {
    #[test]
    fn one_time_visitor_matches_reference_reachability(shape in graph_shape()) {
        let (g, ids) = build(&shape);
        let mut auditor = Auditor::default();
        depth_pass(&g, ids[shape.start], &mut auditor).unwrap();

        prop_assert!(!auditor.duplicate_seen);
        prop_assert!(auditor.inner.visited().is_empty());
        prop_assert!(auditor.max_depth <= g.vertex_count());
        prop_assert_eq!(auditor.entered, reachable_reference(&shape));
    }

    #[test]
    fn recorded_paths_are_simple_and_connected(shape in graph_shape(), target in 0u8..3) {
        let (g, ids) = build(&shape);
        let start = ids[shape.start];
        let mut builder = PathBuilder::new(target);
        depth_pass(&g, start, &mut builder).unwrap();

        prop_assert!(builder.active_path().is_empty());
        for path in builder.paths() {
            prop_assert_eq!(path.first().copied(), Some(start));
            prop_assert_eq!(*g.properties(*path.last().unwrap()), target);

            let unique: BTreeSet<_> = path.iter().collect();
            prop_assert_eq!(unique.len(), path.len());

            for pair in path.windows(2) {
                prop_assert!(g.neighbors(pair[0]).any(|n| n == pair[1]));
            }
            // Only the last vertex may carry the target label.
            for &v in &path[..path.len() - 1] {
                prop_assert_ne!(*g.properties(v), target);
            }
        }
    }

    #[test]
    fn budget_is_a_prefix_of_the_unlimited_search(shape in graph_shape(), target in 0u8..3, limit in 0usize..4) {
        let (g, ids) = build(&shape);
        let start = ids[shape.start];

        let mut all = PathBuilder::new(target);
        depth_pass(&g, start, &mut all).unwrap();

        let mut capped = PathBuilder::new(target).with_path_count(limit);
        depth_pass(&g, start, &mut capped).unwrap();

        // A matching root is recorded before any budget check.
        let expected = all.paths().len().min(limit.max(usize::from(*g.properties(start) == target)));
        prop_assert_eq!(capped.paths(), &all.paths()[..expected]);
        prop_assert_eq!(find_paths(&g, start, target, limit).unwrap(), capped.paths().to_vec());
    }
}
