//! Graph data model: labels, edges and the undirected/directed graph family.
//!
//! Both graph kinds share one container, [`BaseGraph`], parameterised by a
//! zero-sized [`Direction`] marker. The marker decides how an `(from, to)` pair
//! is canonicalised and whether adjacency is maintained symmetrically, so the
//! behaviour differences are resolved at compile time.

use std::fmt::Debug;
use std::hash::Hash;

pub mod base;
pub mod directed;
pub mod edge;
pub mod matrix;
pub mod snapshot;
pub mod tree;
pub mod undirected;

pub use self::base::BaseGraph;
pub use self::directed::DirectedGraph;
pub use self::edge::{Edge, EdgeLike};
pub use self::snapshot::{AnyGraph, GraphSnapshot};
pub use self::tree::Tree;
pub use self::undirected::Graph;

/// Cost attached to an edge. Unreached vertices carry [`f64::INFINITY`].
pub type Cost = f64;

/// Cost given to edges created without an explicit one.
pub const DEFAULT_COST: Cost = 1.0;

trait_set::trait_set! {
    /// Requirements on vertex labels.
    ///
    /// `Ord` gives undirected graphs a canonical endpoint order and traversals a
    /// natural neighbour order.
    pub trait Label = Clone + Eq + Hash + Ord + Debug;
}

/// Compile-time selection between undirected and directed behaviour.
pub trait Direction: Copy + Default + Debug + PartialEq + 'static {
    const DIRECTED: bool;

    /// Maps `(from, to)` to the form used for storage and lookups.
    fn canonical<'a, T: Ord>(from: &'a T, to: &'a T) -> (&'a T, &'a T);
}

/// Marker for graphs where `{a, b}` and `{b, a}` are the same edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Undirected;

/// Marker for graphs whose arcs `(a, b)` and `(b, a)` are distinct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Directed;

impl Direction for Undirected {
    const DIRECTED: bool = false;

    fn canonical<'a, T: Ord>(from: &'a T, to: &'a T) -> (&'a T, &'a T) {
        if from <= to { (from, to) } else { (to, from) }
    }
}

impl Direction for Directed {
    const DIRECTED: bool = true;

    fn canonical<'a, T: Ord>(from: &'a T, to: &'a T) -> (&'a T, &'a T) {
        (from, to)
    }
}
