//! Traversal and shortest-path algorithms over [`BaseGraph`](crate::graph::BaseGraph).
//!
//! Algorithms only read the graph they are given.

mod indexed;
pub mod shortest_path;
pub mod traversal;

pub use self::shortest_path::{
    Precedence, PrecedenceMap, ShortestPath, ShortestPathMethod, bellman_ford, dijkstra, path_to,
    paths_from, shortest_path, shortest_paths,
};
pub use self::traversal::{
    NeighbourOrder, TraversalConfig, TraversalMethod, breadth_first_search, connected_component,
    connected_components, depth_first_search, depth_first_search_recursive,
};
