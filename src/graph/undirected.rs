//! Undirected graphs.

use itertools::Itertools;

use super::{BaseGraph, Label, Undirected};
use crate::error::Result;

/// An undirected graph: `{a, b}` and `{b, a}` denote the same edge.
pub type Graph<T> = BaseGraph<T, Undirected>;

impl<T: Label> Graph<T> {
    /// The complementary graph: same vertices, and an edge of cost 1 between every
    /// pair of distinct vertices that are not adjacent here.
    ///
    /// # Errors
    ///
    /// Only fails if the vertex list and adjacency list disagree.
    pub fn complementary_graph(&self) -> Result<Graph<T>> {
        let missing = self
            .get_vertices()
            .iter()
            .tuple_combinations()
            .filter(|(a, b)| !self.has_edge(a, b))
            .map(|(a, b)| (a.clone(), b.clone()));

        Graph::new(self.get_vertices().iter().cloned(), missing)
    }

    /// Whether every vertex is adjacent to every other vertex.
    pub fn is_complete(&self) -> bool {
        let others = self.vertex_count().saturating_sub(1);
        self.get_vertices().iter().all(|v| {
            self.get_adjacent_vertices(v)
                .is_ok_and(|adjacent| adjacent.iter().filter(|&u| u != v).count() >= others)
        })
    }
}
