//! The shared graph container behind [`Graph`](super::Graph) and
//! [`DirectedGraph`](super::DirectedGraph).

use std::collections::HashMap;
use std::marker::PhantomData;

use log::trace;

use super::{Cost, Direction, Edge, Label};
use crate::error::{Error, Result};

/// A graph over labels `T` using an adjacency list.
///
/// * `vertices` keeps insertion order and backs positional access.
/// * `edges` keeps insertion order, stores every edge in canonical form and is
///   the authority for costs.
/// * `adjacency_list` maps each vertex to the labels one hop away and is the
///   authority for existence queries and traversal.
///
/// For undirected graphs every non-loop edge `{a, b}` appears in both `a`'s and
/// `b`'s adjacency; self-loops appear once.
#[derive(Clone, Debug)]
pub struct BaseGraph<T, D> {
    vertices: Vec<T>,
    edges: Vec<Edge<T>>,
    adjacency_list: HashMap<T, Vec<T>>,
    direction: PhantomData<D>,
}

// `PhantomData<D>` carries no state, so only the storage is compared.
impl<T: Label, D> PartialEq for BaseGraph<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
            && self.edges == other.edges
            && self.adjacency_list == other.adjacency_list
    }
}

impl<T: Label, D: Direction> Default for BaseGraph<T, D> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            adjacency_list: HashMap::new(),
            direction: PhantomData,
        }
    }
}

impl<T: Label, D: Direction> BaseGraph<T, D> {
    /// Builds a graph by adding `vertices` and then `edges` in order.
    ///
    /// Duplicate vertices and edges are skipped. Edges may be anything convertible
    /// into an [`Edge`], e.g. `(a, b)`, `(a, b, cost)` or an [`EdgeLike`](super::EdgeLike).
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if an edge references a label missing from
    /// `vertices`.
    pub fn new<V, E, I>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = T>,
        E: IntoIterator<Item = I>,
        I: Into<Edge<T>>,
    {
        let mut graph = Self::with_vertices(vertices);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Builds an edgeless graph.
    pub fn with_vertices(vertices: impl IntoIterator<Item = T>) -> Self {
        let mut graph = Self::default();
        for v in vertices {
            graph.add_vertex(v);
        }
        graph
    }

    /// Canonical `(from, to)` form used for storage and lookups.
    pub fn to_edge<'a>(&self, from: &'a T, to: &'a T) -> (&'a T, &'a T) {
        D::canonical(from, to)
    }

    pub fn has_vertex(&self, v: &T) -> bool {
        self.adjacency_list.contains_key(v)
    }

    /// Whether the graph contains the edge (or arc) between `from` and `to`.
    ///
    /// Always `false` if either endpoint is absent.
    pub fn has_edge(&self, from: &T, to: &T) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        let (from, to) = self.to_edge(from, to);
        self.adjacency_list
            .get(from)
            .is_some_and(|adjacent| adjacent.contains(to))
    }

    /// Whether the connection pointing the other way exists.
    pub fn has_opposite_edge(&self, from: &T, to: &T) -> bool {
        self.has_edge(to, from)
    }

    /// Adds a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, v: T) -> bool {
        if self.has_vertex(&v) {
            return false;
        }

        trace!("add vertex {v:?}");
        self.adjacency_list.insert(v.clone(), Vec::new());
        self.vertices.push(v);
        true
    }

    /// Removes a vertex together with every edge incident to it.
    ///
    /// Returns `false` if the vertex was not present.
    pub fn remove_vertex(&mut self, v: &T) -> bool {
        if self.adjacency_list.remove(v).is_none() {
            return false;
        }

        trace!("remove vertex {v:?}");
        self.vertices.retain(|u| u != v);
        self.edges.retain(|e| &e.from != v && &e.to != v);
        for adjacent in self.adjacency_list.values_mut() {
            adjacent.retain(|u| u != v);
        }
        true
    }

    /// Adds an edge, storing it in canonical form.
    ///
    /// Returns `Ok(false)` if the edge already exists; the existing cost is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if an endpoint is missing. The graph is
    /// left unchanged.
    pub fn add_edge(&mut self, edge: impl Into<Edge<T>>) -> Result<bool> {
        let edge = edge.into();
        for endpoint in [&edge.from, &edge.to] {
            if !self.has_vertex(endpoint) {
                return Err(Error::vertex_not_found(endpoint));
            }
        }

        if self.has_edge(&edge.from, &edge.to) {
            return Ok(false);
        }

        let (from, to) = self.to_edge(&edge.from, &edge.to);
        let (from, to) = (from.clone(), to.clone());
        trace!("add edge {from:?} -> {to:?} ({})", edge.cost);

        if let Some(adjacent) = self.adjacency_list.get_mut(&from) {
            adjacent.push(to.clone());
        }
        if !D::DIRECTED && from != to {
            if let Some(adjacent) = self.adjacency_list.get_mut(&to) {
                adjacent.push(from.clone());
            }
        }

        self.edges.push(Edge::with_cost(from, to, edge.cost));
        Ok(true)
    }

    /// Position of the canonical edge in [`Self::get_edges`].
    pub fn edge_index(&self, from: &T, to: &T) -> Option<usize> {
        if !self.has_edge(from, to) {
            return None;
        }

        let (from, to) = self.to_edge(from, to);
        self.edges
            .iter()
            .position(|e| &e.from == from && &e.to == to)
    }

    /// Removes an edge. Returns `false` if it was not present.
    ///
    /// For undirected graphs both adjacency entries are removed.
    pub fn remove_edge(&mut self, from: &T, to: &T) -> bool {
        let Some(idx) = self.edge_index(from, to) else {
            return false;
        };

        let edge = self.edges.remove(idx);
        trace!("remove edge {:?} -> {:?}", edge.from, edge.to);

        remove_first(&mut self.adjacency_list, &edge.from, &edge.to);
        if !D::DIRECTED && !edge.is_self_loop() {
            remove_first(&mut self.adjacency_list, &edge.to, &edge.from);
        }
        true
    }

    /// Changes the cost of an existing edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if there is no such edge.
    pub fn set_cost(&mut self, from: &T, to: &T, cost: Cost) -> Result<()> {
        let idx = self
            .edge_index(from, to)
            .ok_or_else(|| Error::edge_not_found(from, to))?;
        self.edges[idx].cost = cost;
        Ok(())
    }

    /// Removes all edges while keeping the vertices.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
        for adjacent in self.adjacency_list.values_mut() {
            adjacent.clear();
        }
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.vertices.clear();
        self.adjacency_list.clear();
    }

    pub fn get_vertices(&self) -> &[T] {
        &self.vertices
    }

    /// The `i`th vertex by order of insertion.
    pub fn get_vertex(&self, i: usize) -> Result<&T> {
        self.vertices.get(i).ok_or(Error::IndexOutOfRange {
            kind: "vertex",
            index: i,
            len: self.vertices.len(),
        })
    }

    pub fn get_edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    /// The `i`th edge by order of insertion.
    pub fn get_edge(&self, i: usize) -> Result<&Edge<T>> {
        self.edges.get(i).ok_or(Error::IndexOutOfRange {
            kind: "edge",
            index: i,
            len: self.edges.len(),
        })
    }

    pub fn get_adjacency_list(&self) -> &HashMap<T, Vec<T>> {
        &self.adjacency_list
    }

    /// Labels one hop away from `v`, in insertion order.
    pub fn get_adjacent_vertices(&self, v: &T) -> Result<&[T]> {
        self.adjacency_list
            .get(v)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::vertex_not_found(v))
    }

    /// Number of vertices adjacent to `v` (out-degree for directed graphs).
    pub fn get_vertex_degree(&self, v: &T) -> Result<usize> {
        self.get_adjacent_vertices(v).map(<[T]>::len)
    }

    /// Cost of the edge between `from` and `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if there is no such edge.
    pub fn get_cost(&self, from: &T, to: &T) -> Result<Cost> {
        let idx = self
            .edge_index(from, to)
            .ok_or_else(|| Error::edge_not_found(from, to))?;
        Ok(self.edges[idx].cost)
    }

    pub fn has_negative_costs(&self) -> bool {
        self.edges.iter().any(|e| e.cost < 0.0)
    }

    /// Cost of every traversable `(from, to)` step.
    ///
    /// Undirected edges are entered under both orientations.
    pub fn cost_lookup(&self) -> HashMap<(&T, &T), Cost> {
        let mut costs = HashMap::with_capacity(self.edges.len() * 2);
        for edge in &self.edges {
            costs.insert((&edge.from, &edge.to), edge.cost);
            if !D::DIRECTED {
                costs.insert((&edge.to, &edge.from), edge.cost);
            }
        }
        costs
    }

    /// Looks up `v` and returns the graph's own copy of the label.
    pub(crate) fn resolve(&self, v: &T) -> Result<&T> {
        self.adjacency_list
            .get_key_value(v)
            .map(|(label, _)| label)
            .ok_or_else(|| Error::vertex_not_found(v))
    }

    pub fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn remove_first<T: Label>(adjacency_list: &mut HashMap<T, Vec<T>>, from: &T, to: &T) {
    if let Some(adjacent) = adjacency_list.get_mut(from) {
        if let Some(pos) = adjacent.iter().position(|u| u == to) {
            adjacent.remove(pos);
        }
    }
}
