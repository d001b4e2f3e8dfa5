//! Edges (undirected graphs) and arcs (directed graphs).

use serde::{Deserialize, Serialize};

use super::{Cost, DEFAULT_COST};

fn default_cost() -> Cost {
    DEFAULT_COST
}

/// A connection between two vertex labels.
///
/// Identity for lookups and removal is the `(from, to)` pair after the graph has
/// canonicalised it; the cost is never compared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub from: T,
    pub to: T,
    #[serde(default = "default_cost")]
    pub cost: Cost,
}

impl<T> Edge<T> {
    /// Creates an edge with the default cost of 1.
    pub fn new(from: T, to: T) -> Self {
        Self::with_cost(from, to, DEFAULT_COST)
    }

    pub fn with_cost(from: T, to: T, cost: Cost) -> Self {
        Self { from, to, cost }
    }

    pub fn is_self_loop(&self) -> bool
    where
        T: PartialEq,
    {
        self.from == self.to
    }

    /// The same connection pointing the other way, with the same cost.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            cost: self.cost,
        }
    }
}

/// Edge shapes accepted at the input boundary.
///
/// Snapshots may spell an edge as a record `{"from": a, "to": b, "cost": c}`
/// (cost optional) or as a positional tuple `[a, b]` / `[a, b, c]`. Everything
/// is normalised to [`Edge`] before it reaches a graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeLike<T> {
    Record(Edge<T>),
    Weighted(T, T, Cost),
    Pair(T, T),
}

impl<T> From<EdgeLike<T>> for Edge<T> {
    fn from(edge: EdgeLike<T>) -> Self {
        match edge {
            EdgeLike::Record(edge) => edge,
            EdgeLike::Weighted(from, to, cost) => Edge::with_cost(from, to, cost),
            EdgeLike::Pair(from, to) => Edge::new(from, to),
        }
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from((from, to): (T, T)) -> Self {
        Edge::new(from, to)
    }
}

impl<T> From<(T, T, Cost)> for Edge<T> {
    fn from((from, to, cost): (T, T, Cost)) -> Self {
        Edge::with_cost(from, to, cost)
    }
}
