//! A graph that only grows through edge insertion.

use super::{Edge, Graph, Label};
use crate::error::{Error, Result};

/// An undirected graph whose vertices are created by the edges touching them.
///
/// Unconnected vertices cannot be added; [`Tree::add_edge`] creates whatever
/// endpoints are missing. Cycles are not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<T: Label> {
    graph: Graph<T>,
}

impl<T: Label> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Label> Tree<T> {
    pub fn new() -> Self {
        Self {
            graph: Graph::default(),
        }
    }

    /// Always fails: a vertex has to arrive with an edge.
    pub fn add_vertex(&mut self, v: T) -> Result<()> {
        Err(Error::InvalidOperation(format!(
            "cannot add unconnected vertex {v:?} to a tree, add an edge instead"
        )))
    }

    /// Adds an edge, creating its endpoints first if needed.
    pub fn add_edge(&mut self, edge: impl Into<Edge<T>>) -> Result<bool> {
        let edge = edge.into();
        self.graph.add_vertex(edge.from.clone());
        self.graph.add_vertex(edge.to.clone());
        self.graph.add_edge(edge)
    }

    pub fn as_graph(&self) -> &Graph<T> {
        &self.graph
    }

    pub fn into_graph(self) -> Graph<T> {
        self.graph
    }
}
