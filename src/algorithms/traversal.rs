//! Breadth-first and depth-first traversals.
//!
//! Every traversal starts from one vertex and returns the vertices it reaches in
//! the order they were processed. Neighbours are visited in adjacency-list order
//! unless a [`NeighbourOrder`] says otherwise; the graph itself is never
//! reordered.

use std::cmp::Ordering;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::graph::{BaseGraph, Direction, Label};

/// Order in which the neighbours of a vertex are visited.
pub enum NeighbourOrder<'a, T> {
    /// Adjacency-list (insertion) order.
    Insertion,
    /// Ascending by the labels' `Ord`.
    Natural,
    /// Ascending by a caller-supplied comparator.
    By(&'a dyn Fn(&T, &T) -> Ordering),
}

impl<T> Default for NeighbourOrder<'_, T> {
    fn default() -> Self {
        NeighbourOrder::Insertion
    }
}

impl<T> Clone for NeighbourOrder<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NeighbourOrder<'_, T> {}

impl<T> fmt::Debug for NeighbourOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeighbourOrder::Insertion => f.write_str("Insertion"),
            NeighbourOrder::Natural => f.write_str("Natural"),
            NeighbourOrder::By(_) => f.write_str("By(..)"),
        }
    }
}

/// Traversal used by [`connected_component`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraversalMethod {
    Bfs,
    DfsIterative,
    #[default]
    DfsRecursive,
}

impl FromStr for TraversalMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(TraversalMethod::Bfs),
            "dfs-iterative" | "dfs_iterative" => Ok(TraversalMethod::DfsIterative),
            "dfs" | "dfs-recursive" | "dfs_recursive" => Ok(TraversalMethod::DfsRecursive),
            other => Err(Error::UnsupportedMethod(format!("traversal `{other}`"))),
        }
    }
}

#[derive(Debug)]
pub struct TraversalConfig<'a, T> {
    /// Defaults to [`TraversalMethod::DfsRecursive`].
    pub method: TraversalMethod,
    /// Defaults to [`NeighbourOrder::Insertion`].
    pub order: NeighbourOrder<'a, T>,
}

impl<T> Default for TraversalConfig<'_, T> {
    fn default() -> Self {
        Self {
            method: TraversalMethod::default(),
            order: NeighbourOrder::default(),
        }
    }
}

impl<T> Clone for TraversalConfig<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TraversalConfig<'_, T> {}

fn ordered_neighbours<'g, T: Label, D: Direction>(
    graph: &'g BaseGraph<T, D>,
    v: &T,
    order: &NeighbourOrder<'_, T>,
) -> Result<Vec<&'g T>> {
    let mut adjacent: Vec<&T> = graph.get_adjacent_vertices(v)?.iter().collect();
    match order {
        NeighbourOrder::Insertion => {}
        NeighbourOrder::Natural => adjacent.sort(),
        NeighbourOrder::By(cmp) => adjacent.sort_by(|a, b| cmp(*a, *b)),
    }
    Ok(adjacent)
}

/// Breadth-first search from `start`.
///
/// Vertices are marked when enqueued, so each one is processed at most once.
///
/// # Errors
///
/// [`Error::VertexNotFound`] if `start` is not in the graph.
pub fn breadth_first_search<T: Label, D: Direction>(
    graph: &BaseGraph<T, D>,
    start: &T,
    order: &NeighbourOrder<'_, T>,
) -> Result<Vec<T>> {
    let start = graph.resolve(start)?;
    let mut visited = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut found = Vec::new();

    while let Some(j) = queue.pop_front() {
        for k in ordered_neighbours(graph, j, order)? {
            if visited.insert(k) {
                queue.push_back(k);
            }
        }
        found.push(j.clone());
    }

    debug!("bfs from {start:?} reached {} vertices", found.len());
    Ok(found)
}

/// Depth-first search from `start` using an explicit stack.
///
/// All neighbours of a processed vertex are pushed, visited or not, and a vertex
/// is processed the first time it is popped. The last neighbour pushed is explored
/// first, so the order generally differs from [`depth_first_search_recursive`].
///
/// # Errors
///
/// [`Error::VertexNotFound`] if `start` is not in the graph.
pub fn depth_first_search<T: Label, D: Direction>(
    graph: &BaseGraph<T, D>,
    start: &T,
    order: &NeighbourOrder<'_, T>,
) -> Result<Vec<T>> {
    let start = graph.resolve(start)?;
    let mut visited = HashSet::new();
    let mut stack = vec![start];
    let mut found = Vec::new();

    while let Some(v) = stack.pop() {
        if !visited.insert(v) {
            continue;
        }
        found.push(v.clone());
        stack.extend(ordered_neighbours(graph, v, order)?);
    }

    debug!("iterative dfs from {start:?} reached {} vertices", found.len());
    Ok(found)
}

/// Depth-first search from `start`, recursing into each unvisited neighbour in
/// order.
///
/// Recursion depth grows with the longest simple path explored; prefer
/// [`depth_first_search`] for very large graphs.
///
/// # Errors
///
/// [`Error::VertexNotFound`] if `start` is not in the graph.
pub fn depth_first_search_recursive<T: Label, D: Direction>(
    graph: &BaseGraph<T, D>,
    start: &T,
    order: &NeighbourOrder<'_, T>,
) -> Result<Vec<T>> {
    fn visit<'g, T: Label, D: Direction>(
        graph: &'g BaseGraph<T, D>,
        v: &'g T,
        order: &NeighbourOrder<'_, T>,
        visited: &mut HashSet<&'g T>,
        found: &mut Vec<T>,
    ) -> Result<()> {
        visited.insert(v);
        found.push(v.clone());
        for n in ordered_neighbours(graph, v, order)? {
            if !visited.contains(n) {
                visit(graph, n, order, visited, found)?;
            }
        }
        Ok(())
    }

    let start = graph.resolve(start)?;
    let mut visited = HashSet::new();
    let mut found = Vec::new();
    visit(graph, start, order, &mut visited, &mut found)?;

    debug!("recursive dfs from {start:?} reached {} vertices", found.len());
    Ok(found)
}

/// Vertices reachable from `start`, in the order the configured traversal finds
/// them.
pub fn connected_component<T: Label, D: Direction>(
    graph: &BaseGraph<T, D>,
    start: &T,
    config: &TraversalConfig<'_, T>,
) -> Result<Vec<T>> {
    match config.method {
        TraversalMethod::Bfs => breadth_first_search(graph, start, &config.order),
        TraversalMethod::DfsIterative => depth_first_search(graph, start, &config.order),
        TraversalMethod::DfsRecursive => depth_first_search_recursive(graph, start, &config.order),
    }
}

/// Splits the graph into the sets found by repeatedly traversing from the first
/// vertex (in insertion order) not yet covered.
///
/// For undirected graphs these are the connected components. For directed graphs
/// a later set may point into an earlier one but never the other way round.
pub fn connected_components<T: Label, D: Direction>(
    graph: &BaseGraph<T, D>,
    config: &TraversalConfig<'_, T>,
) -> Result<Vec<Vec<T>>> {
    let mut covered = HashSet::new();
    let mut components = Vec::new();

    for v in graph.get_vertices() {
        if covered.contains(v) {
            continue;
        }

        let component: Vec<T> = connected_component(graph, v, config)?
            .into_iter()
            .filter(|u| !covered.contains(u))
            .collect();
        covered.extend(component.iter().cloned());
        components.push(component);
    }

    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, Graph};

    //     1
    //    / \
    //   2   3
    //  / \   \
    // 4   5   6
    fn binary_tree() -> Graph<u32> {
        Graph::new(1..=6, [(1, 2), (1, 3), (2, 4), (2, 5), (3, 6)]).unwrap()
    }

    #[test]
    fn bfs_visits_by_level() {
        let order = breadth_first_search(&binary_tree(), &1, &NeighbourOrder::Insertion).unwrap();
        assert_eq!(order, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn recursive_dfs_goes_deep_first() {
        let order =
            depth_first_search_recursive(&binary_tree(), &1, &NeighbourOrder::Insertion).unwrap();
        assert_eq!(order, vec![1, 2, 4, 5, 3, 6]);
    }

    #[test]
    fn iterative_dfs_explores_last_pushed_first() {
        let order = depth_first_search(&binary_tree(), &1, &NeighbourOrder::Insertion).unwrap();
        assert_eq!(order, vec![1, 3, 6, 2, 5, 4]);
    }

    #[test]
    fn neighbour_order_controls_traversal() {
        let graph = Graph::new(["s", "c", "a", "b"], [("s", "c"), ("s", "a"), ("s", "b")]).unwrap();

        let order = breadth_first_search(&graph, &"s", &NeighbourOrder::Insertion).unwrap();
        assert_eq!(order, vec!["s", "c", "a", "b"]);

        let order = breadth_first_search(&graph, &"s", &NeighbourOrder::Natural).unwrap();
        assert_eq!(order, vec!["s", "a", "b", "c"]);

        let reverse = |a: &&str, b: &&str| b.cmp(a);
        let order = depth_first_search_recursive(&graph, &"s", &NeighbourOrder::By(&reverse)).unwrap();
        assert_eq!(order, vec!["s", "c", "b", "a"]);

        // Sorting for the traversal must not reorder the graph.
        assert_eq!(graph.get_adjacent_vertices(&"s").unwrap(), &["c", "a", "b"]);
    }

    #[test]
    fn self_loop_on_start_is_visited_once() {
        let graph = Graph::new([1, 2], [(1, 1), (1, 2)]).unwrap();
        let order = breadth_first_search(&graph, &1, &NeighbourOrder::Insertion).unwrap();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn traversals_stay_in_component() {
        let graph = Graph::new([1, 2, 3, 4], [(1, 2), (3, 4)]).unwrap();
        for method in [TraversalMethod::Bfs, TraversalMethod::DfsIterative, TraversalMethod::DfsRecursive] {
            let config = TraversalConfig { method, ..Default::default() };
            assert_eq!(connected_component(&graph, &3, &config).unwrap(), vec![3, 4]);
        }
    }

    #[test]
    fn directed_traversal_follows_arcs() {
        let graph = DirectedGraph::new([1, 2, 3], [(2, 1), (2, 3)]).unwrap();
        let config = TraversalConfig::default();
        assert_eq!(connected_component(&graph, &1, &config).unwrap(), vec![1]);
        assert_eq!(connected_component(&graph, &2, &config).unwrap(), vec![2, 1, 3]);
    }

    #[test]
    fn absent_start_is_not_found() {
        let graph = binary_tree();
        for method in [TraversalMethod::Bfs, TraversalMethod::DfsIterative, TraversalMethod::DfsRecursive] {
            let config = TraversalConfig { method, ..Default::default() };
            let err = connected_component(&graph, &42, &config).unwrap_err();
            assert!(matches!(err, Error::VertexNotFound(ref v) if v == "42"));
        }
    }

    #[test]
    fn components_partition_vertices() {
        let graph = Graph::new([5, 1, 2, 3, 4], [(1, 2), (3, 4), (4, 5)]).unwrap();
        let components = connected_components(&graph, &TraversalConfig::default()).unwrap();
        assert_eq!(components, vec![vec![5, 4, 3], vec![1, 2]]);
    }

    #[test]
    fn directed_components_do_not_repeat_vertices() {
        let graph = DirectedGraph::new([1, 2, 3], [(2, 1), (3, 2)]).unwrap();
        let components = connected_components(&graph, &TraversalConfig::default()).unwrap();
        assert_eq!(components, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn method_names_parse() {
        assert_eq!("BFS".parse::<TraversalMethod>().unwrap(), TraversalMethod::Bfs);
        assert_eq!("dfs-iterative".parse::<TraversalMethod>().unwrap(), TraversalMethod::DfsIterative);
        assert_eq!("dfs".parse::<TraversalMethod>().unwrap(), TraversalMethod::DfsRecursive);
        assert!(matches!(
            "astar".parse::<TraversalMethod>(),
            Err(Error::UnsupportedMethod(_))
        ));
    }
}
