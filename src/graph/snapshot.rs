//! Structural snapshots: the serialisable form of a graph.
//!
//! A snapshot is `{ "vertices": [...], "edges": [...], "directed": bool }`, with an
//! optional `"adjacency_list"` of `[vertex, [neighbours...]]` pairs on export.
//! On import, edges may be records or positional tuples and the adjacency list is
//! ignored; it is always rebuilt from the edges.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{BaseGraph, DirectedGraph, Direction, Edge, EdgeLike, Graph, Label};
use crate::error::{Error, Result};
use crate::utils::json::load_json;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot<T> {
    pub vertices: Vec<T>,
    pub edges: Vec<Edge<T>>,
    pub directed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjacency_list: Option<Vec<(T, Vec<T>)>>,
}

/// Snapshot as read from untrusted input, before presence checks.
#[derive(Deserialize)]
struct RawSnapshot<T> {
    vertices: Option<Vec<T>>,
    edges: Option<Vec<EdgeLike<T>>>,
    directed: Option<bool>,
}

impl<T> RawSnapshot<T> {
    fn validate(self) -> Result<GraphSnapshot<T>> {
        let missing = |field: &str| Error::MalformedInput(format!("missing `{field}` field"));

        Ok(GraphSnapshot {
            vertices: self.vertices.ok_or_else(|| missing("vertices"))?,
            edges: self
                .edges
                .ok_or_else(|| missing("edges"))?
                .into_iter()
                .map(Edge::from)
                .collect(),
            directed: self.directed.ok_or_else(|| missing("directed"))?,
            adjacency_list: None,
        })
    }
}

impl<T: Label, D: Direction> BaseGraph<T, D> {
    pub fn to_snapshot(&self) -> GraphSnapshot<T> {
        GraphSnapshot {
            vertices: self.get_vertices().to_vec(),
            edges: self.get_edges().to_vec(),
            directed: self.is_directed(),
            adjacency_list: None,
        }
    }

    /// Like [`Self::to_snapshot`], also listing each vertex's neighbours in vertex
    /// order.
    pub fn to_snapshot_with_adjacency(&self) -> GraphSnapshot<T> {
        let adjacency = self
            .get_vertices()
            .iter()
            .map(|v| {
                let adjacent = self.get_adjacency_list().get(v).cloned().unwrap_or_default();
                (v.clone(), adjacent)
            })
            .collect();

        GraphSnapshot {
            adjacency_list: Some(adjacency),
            ..self.to_snapshot()
        }
    }

    /// Rebuilds a graph from a snapshot of the same kind.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedInput`] if the snapshot's `directed` flag does not match
    /// this graph kind; [`Error::VertexNotFound`] if an edge references a vertex
    /// the snapshot does not list.
    pub fn from_snapshot(snapshot: GraphSnapshot<T>) -> Result<Self> {
        if snapshot.directed != D::DIRECTED {
            return Err(Error::MalformedInput(format!(
                "expected {} graph, snapshot is {}",
                kind(D::DIRECTED),
                kind(snapshot.directed)
            )));
        }

        Self::new(snapshot.vertices, snapshot.edges)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        let raw: RawSnapshot<T> = serde_json::from_value(value)?;
        Self::from_snapshot(raw.validate()?)
    }

    pub fn from_json(json: &str) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        let raw: RawSnapshot<T> = serde_json::from_str(json)?;
        Self::from_snapshot(raw.validate()?)
    }

    pub fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string(&self.to_snapshot())?)
    }

    pub fn to_json_pretty(&self) -> Result<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }
}

fn kind(directed: bool) -> &'static str {
    if directed { "directed" } else { "undirected" }
}

/// A graph whose kind is only known at runtime, e.g. after reading a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyGraph<T: Label> {
    Undirected(Graph<T>),
    Directed(DirectedGraph<T>),
}

impl<T: Label> AnyGraph<T> {
    /// Builds whichever graph kind the snapshot's `directed` flag names.
    pub fn from_snapshot(snapshot: GraphSnapshot<T>) -> Result<Self> {
        if snapshot.directed {
            DirectedGraph::from_snapshot(snapshot).map(AnyGraph::Directed)
        } else {
            Graph::from_snapshot(snapshot).map(AnyGraph::Undirected)
        }
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        let raw: RawSnapshot<T> = serde_json::from_value(value)?;
        Self::from_snapshot(raw.validate()?)
    }

    pub fn from_json(json: &str) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        let raw: RawSnapshot<T> = serde_json::from_str(json)?;
        Self::from_snapshot(raw.validate()?)
    }

    /// Reads a snapshot file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        Self::from_json_value(load_json(path)?)
    }

    pub fn to_snapshot(&self) -> GraphSnapshot<T> {
        match self {
            AnyGraph::Undirected(graph) => graph.to_snapshot(),
            AnyGraph::Directed(graph) => graph.to_snapshot(),
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, AnyGraph::Directed(_))
    }
}

impl<T: Label> From<Graph<T>> for AnyGraph<T> {
    fn from(graph: Graph<T>) -> Self {
        AnyGraph::Undirected(graph)
    }
}

impl<T: Label> From<DirectedGraph<T>> for AnyGraph<T> {
    fn from(graph: DirectedGraph<T>) -> Self {
        AnyGraph::Directed(graph)
    }
}
