use thiserror::Error;

/// Errors produced by graph construction, mutation, queries and algorithms.
///
/// Labels are rendered with their `Debug` representation so the error type stays
/// independent of the label type.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested vertex is not part of the graph.
    #[error("vertex {0} not found")]
    VertexNotFound(String),

    /// No edge (or arc) connects the two vertices.
    #[error("no such edge: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    /// Positional access past the end of the vertex or edge list.
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// The call is structurally disallowed for this kind of graph.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// The selected algorithm cannot run on this input.
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Dijkstra was asked to run on a graph with a negative cost.
    #[error("negative edge {from} -> {to} (cost {cost}), use Bellman-Ford instead")]
    NegativeEdge { from: String, to: String, cost: f64 },

    /// Bellman-Ford found a cycle of negative total cost reachable from the start.
    #[error("negative cycle reachable from {0}")]
    NegativeCycle(String),

    /// A snapshot is missing a field or does not match the requested graph kind.
    #[error("malformed snapshot: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn vertex_not_found(vertex: &impl std::fmt::Debug) -> Self {
        Error::VertexNotFound(format!("{vertex:?}"))
    }

    pub(crate) fn edge_not_found(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        Error::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    /// Whether this error belongs to the "not found" family.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::VertexNotFound(_) | Error::EdgeNotFound { .. } | Error::IndexOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_debug_labels() {
        let err = Error::edge_not_found(&"a", &"b");
        assert_eq!(err.to_string(), "no such edge: \"a\" -> \"b\"");
        assert!(err.is_not_found());

        let err = Error::vertex_not_found(&7);
        assert_eq!(err.to_string(), "vertex 7 not found");
    }

    #[test]
    fn negative_edge_suggests_bellman_ford() {
        let err = Error::NegativeEdge {
            from: "1".into(),
            to: "2".into(),
            cost: -1.0,
        };
        assert!(err.to_string().contains("Bellman-Ford"));
        assert!(!err.is_not_found());
    }
}
