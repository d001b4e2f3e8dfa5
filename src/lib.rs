//! Graph data structures with traversal and shortest-path algorithms.
//!
//! ```
//! use graph_theory::algorithms::{shortest_path, ShortestPathMethod};
//! use graph_theory::graph::Graph;
//!
//! let graph = Graph::new(
//!     ['A', 'B', 'C', 'D'],
//!     [('A', 'B', 1.0), ('B', 'C', 2.0), ('A', 'C', 4.0), ('C', 'D', 1.0)],
//! )?;
//! let route = shortest_path(&graph, &'A', &'D', ShortestPathMethod::Auto)?;
//! assert_eq!(route.cost, 4.0);
//! assert_eq!(route.path, Some(vec!['A', 'B', 'C', 'D']));
//! # Ok::<(), graph_theory::Error>(())
//! ```

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod random;
pub mod utils;

pub use error::{Error, Result};
