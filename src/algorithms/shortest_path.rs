//! Single-source shortest paths.
//!
//! Both algorithms produce a [`PrecedenceMap`]: for every vertex, its predecessor
//! on a cheapest path from the start and the total cost of that path. Concrete
//! paths are rebuilt from the map with [`path_to`] or [`paths_from`].

use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;
use std::str::FromStr;

use log::debug;
use priority_queue::PriorityQueue;

use super::indexed::IndexedGraph;
use crate::error::{Error, Result};
use crate::graph::{BaseGraph, Cost, Direction, Label};

/// Predecessor and cumulative cost of one vertex in a shortest-path run.
///
/// Unreached vertices have no predecessor and an infinite cost; the start vertex
/// has no predecessor and cost 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Precedence<T> {
    pub predecessor: Option<T>,
    pub cost: Cost,
}

pub type PrecedenceMap<T> = HashMap<T, Precedence<T>>;

/// A cheapest path and its cost. `path` is `None` when the target is unreachable.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath<T> {
    pub cost: Cost,
    pub path: Option<Vec<T>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShortestPathMethod {
    Dijkstra,
    BellmanFord,
    /// Bellman-Ford if the graph has a negative cost, Dijkstra otherwise.
    #[default]
    Auto,
}

impl FromStr for ShortestPathMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(ShortestPathMethod::Dijkstra),
            "bellman-ford" | "bellman_ford" => Ok(ShortestPathMethod::BellmanFord),
            "auto" => Ok(ShortestPathMethod::Auto),
            other => Err(Error::UnsupportedMethod(format!("shortest path `{other}`"))),
        }
    }
}

/// Total order over costs for the priority queue.
#[derive(Clone, Copy, Debug)]
struct Distance(Cost);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Highest priority goes to the lowest cost, then to the earliest vertex.
type Priority = (Reverse<Distance>, Reverse<usize>);

fn priority(cost: Cost, vertex: usize) -> Priority {
    (Reverse(Distance(cost)), Reverse(vertex))
}

fn into_precedence<T: Label>(
    indexed: &IndexedGraph<'_, T>,
    cost: Vec<Cost>,
    predecessor: Vec<Option<usize>>,
) -> PrecedenceMap<T> {
    cost.into_iter()
        .zip(predecessor)
        .enumerate()
        .map(|(i, (cost, pred))| {
            let precedence = Precedence {
                predecessor: pred.map(|p| indexed.label(p).clone()),
                cost,
            };
            (indexed.label(i).clone(), precedence)
        })
        .collect()
}

/// Dijkstra's algorithm from `start`.
///
/// The unsettled vertex with the lowest cost is settled next, ties going to the
/// vertex inserted first. A vertex without outgoing edges is settled like any
/// other. With `end` given, the run stops as soon as `end` is settled, so only
/// the entries on its path are final.
///
/// # Errors
///
/// * [`Error::NegativeEdge`] if any edge has a negative cost.
/// * [`Error::VertexNotFound`] if `start` or `end` is not in the graph.
pub fn dijkstra<T: Label, D: Direction>(
    graph: &BaseGraph<T, D>,
    start: &T,
    end: Option<&T>,
) -> Result<PrecedenceMap<T>> {
    if let Some(edge) = graph.get_edges().iter().find(|e| e.cost < 0.0) {
        return Err(Error::NegativeEdge {
            from: format!("{:?}", edge.from),
            to: format!("{:?}", edge.to),
            cost: edge.cost,
        });
    }

    let indexed = IndexedGraph::new(graph)?;
    let source = indexed.position(start)?;
    let target = end.map(|v| indexed.position(v)).transpose()?;

    let n = indexed.len();
    let mut cost = vec![Cost::INFINITY; n];
    let mut predecessor = vec![None; n];
    cost[source] = 0.0;

    let mut queue: PriorityQueue<usize, Priority> =
        (0..n).map(|i| (i, priority(cost[i], i))).collect();
    let mut settled = 0;

    while let Some((u, (Reverse(Distance(d)), _))) = queue.pop() {
        if d.is_infinite() {
            break;
        }
        settled += 1;
        if target == Some(u) {
            break;
        }

        for &(v, w) in &indexed.arcs[u] {
            let candidate = d + w;
            if candidate < cost[v] {
                cost[v] = candidate;
                predecessor[v] = Some(u);
                queue.change_priority(&v, priority(candidate, v));
            }
        }
    }

    debug!("dijkstra from {start:?}: settled {settled} of {n} vertices");
    Ok(into_precedence(&indexed, cost, predecessor))
}

/// Bellman-Ford from `start`; accepts negative costs.
///
/// Undirected edges can be walked both ways, so an undirected edge with a
/// negative cost is itself a negative cycle.
///
/// # Errors
///
/// * [`Error::NegativeCycle`] if a negative cycle is reachable from `start`.
/// * [`Error::VertexNotFound`] if `start` is not in the graph.
pub fn bellman_ford<T: Label, D: Direction>(
    graph: &BaseGraph<T, D>,
    start: &T,
) -> Result<PrecedenceMap<T>> {
    let indexed = IndexedGraph::new(graph)?;
    let source = indexed.position(start)?;

    let n = indexed.len();
    let mut cost = vec![Cost::INFINITY; n];
    let mut predecessor = vec![None; n];
    cost[source] = 0.0;

    let mut rounds = 0;
    for _ in 1..n {
        rounds += 1;
        let mut relaxed = false;
        for (u, v, w) in indexed.steps() {
            if cost[u].is_finite() && cost[u] + w < cost[v] {
                cost[v] = cost[u] + w;
                predecessor[v] = Some(u);
                relaxed = true;
            }
        }
        if !relaxed {
            break;
        }
    }

    if indexed
        .steps()
        .any(|(u, v, w)| cost[u].is_finite() && cost[u] + w < cost[v])
    {
        return Err(Error::NegativeCycle(format!("{start:?}")));
    }

    debug!("bellman-ford from {start:?}: {rounds} relaxation rounds over {n} vertices");
    Ok(into_precedence(&indexed, cost, predecessor))
}

/// Runs the selected shortest-path algorithm from `start`.
///
/// `end` lets Dijkstra stop early; Bellman-Ford always computes every vertex.
pub fn shortest_paths<T: Label, D: Direction>(
    graph: &BaseGraph<T, D>,
    start: &T,
    method: ShortestPathMethod,
    end: Option<&T>,
) -> Result<PrecedenceMap<T>> {
    let method = match method {
        ShortestPathMethod::Auto if graph.has_negative_costs() => ShortestPathMethod::BellmanFord,
        ShortestPathMethod::Auto => ShortestPathMethod::Dijkstra,
        explicit => explicit,
    };
    debug!("shortest paths from {start:?} using {method:?}");

    match method {
        ShortestPathMethod::BellmanFord => {
            if let Some(end) = end {
                graph.resolve(end)?;
            }
            bellman_ford(graph, start)
        }
        _ => dijkstra(graph, start, end),
    }
}

/// Rebuilds the path from the start of `precedence` to `target`.
///
/// Returns `None` if `target` was not reached (or is unknown), and `[start]` when
/// `target` is the start itself.
pub fn path_to<T: Label>(precedence: &PrecedenceMap<T>, target: &T) -> Option<Vec<T>> {
    let mut entry = precedence.get(target)?;
    if entry.cost == Cost::INFINITY {
        return None;
    }

    let mut path = vec![target.clone()];
    while let Some(pred) = &entry.predecessor {
        if path.len() > precedence.len() {
            return None;
        }
        path.push(pred.clone());
        entry = precedence.get(pred)?;
    }

    path.reverse();
    Some(path)
}

/// Cost and path for every vertex in `precedence`.
pub fn paths_from<T: Label>(precedence: &PrecedenceMap<T>) -> HashMap<T, ShortestPath<T>> {
    precedence
        .iter()
        .map(|(v, entry)| {
            let path = ShortestPath {
                cost: entry.cost,
                path: path_to(precedence, v),
            };
            (v.clone(), path)
        })
        .collect()
}

/// Cheapest path from `start` to `target`, stopping the search once `target` is
/// settled where the method allows it.
pub fn shortest_path<T: Label, D: Direction>(
    graph: &BaseGraph<T, D>,
    start: &T,
    target: &T,
    method: ShortestPathMethod,
) -> Result<ShortestPath<T>> {
    let precedence = shortest_paths(graph, start, method, Some(target))?;
    let cost = precedence
        .get(target)
        .map(|entry| entry.cost)
        .ok_or_else(|| Error::vertex_not_found(target))?;

    Ok(ShortestPath {
        cost,
        path: path_to(&precedence, target),
    })
}
