//! Directed graphs.

use super::{BaseGraph, Directed, Graph, Label};
use crate::error::Result;

/// A directed graph: `(a, b)` and `(b, a)` are distinct arcs that may coexist.
pub type DirectedGraph<T> = BaseGraph<T, Directed>;

impl<T: Label> DirectedGraph<T> {
    /// Builds a directed graph holding both arcs `(a, b)` and `(b, a)` for every
    /// edge `{a, b}` of `graph`, each with the edge's cost.
    ///
    /// All forward arcs come first, followed by the reverse arcs.
    ///
    /// # Errors
    ///
    /// [`Error::VertexNotFound`](crate::Error::VertexNotFound) if an edge of
    /// `graph` references a vertex it does not list.
    pub fn from_undirected(graph: &Graph<T>) -> Result<Self> {
        let forward = graph.get_edges().iter().cloned();
        let backward = graph.get_edges().iter().cloned().map(|e| e.reversed());

        Self::new(graph.get_vertices().iter().cloned(), forward.chain(backward))
    }

    /// Whether both `(from, to)` and `(to, from)` are present.
    pub fn is_arc_undirected(&self, from: &T, to: &T) -> bool {
        self.has_edge(from, to) && self.has_opposite_edge(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    #[test]
    fn from_undirected_doubles_edges() {
        let graph = Graph::new(["a", "b", "c"], [("b", "a", 2.0), ("b", "c", 3.0)]).unwrap();
        let directed = DirectedGraph::from_undirected(&graph).unwrap();

        assert!(directed.is_directed());
        assert_eq!(
            directed.get_edges(),
            &[
                Edge::with_cost("a", "b", 2.0),
                Edge::with_cost("b", "c", 3.0),
                Edge::with_cost("b", "a", 2.0),
                Edge::with_cost("c", "b", 3.0),
            ]
        );
        assert!(directed.is_arc_undirected(&"c", &"b"));
    }

    #[test]
    fn from_undirected_keeps_single_self_loop() {
        let graph = Graph::new([1], [(1, 1)]).unwrap();
        let directed = DirectedGraph::from_undirected(&graph).unwrap();
        assert_eq!(directed.edge_count(), 1);
        assert!(directed.is_arc_undirected(&1, &1));
    }

    #[test]
    fn arc_symmetry() {
        let mut graph = DirectedGraph::new([1, 2, 3], [(1, 2), (2, 3), (3, 2)]).unwrap();
        assert!(!graph.is_arc_undirected(&1, &2));
        assert!(graph.is_arc_undirected(&2, &3));
        assert!(graph.is_arc_undirected(&3, &2));

        graph.add_edge((2, 1)).unwrap();
        assert!(graph.is_arc_undirected(&1, &2));
    }
}
