use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::graph::{BaseGraph, Cost, Direction, Label};

/// Positional view of a graph for the cost-based algorithms.
///
/// Vertex `i` is the `i`th vertex in insertion order; `arcs[i]` lists every step
/// out of it as `(target index, cost)` in adjacency-list order.
pub(crate) struct IndexedGraph<'g, T> {
    labels: &'g [T],
    index: HashMap<&'g T, usize>,
    pub arcs: Vec<Vec<(usize, Cost)>>,
}

impl<'g, T: Label> IndexedGraph<'g, T> {
    pub fn new<D: Direction>(graph: &'g BaseGraph<T, D>) -> Result<Self> {
        let labels = graph.get_vertices();
        let index: HashMap<&T, usize> = labels.iter().enumerate().map(|(i, v)| (v, i)).collect();
        let costs = graph.cost_lookup();

        let arcs = labels
            .iter()
            .map(|u| {
                graph
                    .get_adjacent_vertices(u)?
                    .iter()
                    .map(|v| {
                        let cost = costs
                            .get(&(u, v))
                            .copied()
                            .ok_or_else(|| Error::edge_not_found(u, v))?;
                        let j = index.get(v).copied().ok_or_else(|| Error::vertex_not_found(v))?;
                        Ok((j, cost))
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { labels, index, arcs })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn position(&self, v: &T) -> Result<usize> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| Error::vertex_not_found(v))
    }

    pub fn label(&self, i: usize) -> &'g T {
        &self.labels[i]
    }

    /// Every `(from, to, cost)` step, grouped by source in vertex order.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize, Cost)> + '_ {
        self.arcs
            .iter()
            .enumerate()
            .flat_map(|(u, out)| out.iter().map(move |&(v, w)| (u, v, w)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, Graph};

    #[test]
    fn undirected_steps_go_both_ways() {
        let graph = Graph::new(["a", "b", "c"], [("b", "a", 2.0), ("b", "c", 3.0)]).unwrap();
        let indexed = IndexedGraph::new(&graph).unwrap();

        assert_eq!(indexed.len(), 3);
        assert_eq!(indexed.arcs, vec![vec![(1, 2.0)], vec![(0, 2.0), (2, 3.0)], vec![(1, 3.0)]]);
        assert_eq!(indexed.steps().count(), 4);
        assert_eq!(indexed.label(2), &"c");
    }

    #[test]
    fn directed_steps_follow_arcs() {
        let graph = DirectedGraph::new([1, 2], [(2, 1, 5.0)]).unwrap();
        let indexed = IndexedGraph::new(&graph).unwrap();

        assert_eq!(indexed.steps().collect::<Vec<_>>(), vec![(1, 0, 5.0)]);
        assert_eq!(indexed.position(&2).unwrap(), 1);
        assert!(indexed.position(&3).is_err());
    }
}
