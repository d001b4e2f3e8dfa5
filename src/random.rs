//! Random graph generation (G(n, p) with integral costs).

use log::debug;
use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::{BaseGraph, Cost, Direction};

#[derive(Clone, Debug)]
pub struct RandomGraphConfig {
    /// Vertices are labelled `0..vertices`.
    pub vertices: usize,
    /// Chance of each possible edge (or arc) being present.
    pub edge_probability: f64,
    /// Costs are drawn uniformly from `1..=max_cost`.
    pub max_cost: u32,
    pub self_loops: bool,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            vertices: 10,
            edge_probability: 0.3,
            max_cost: 1,
            self_loops: false,
        }
    }
}

/// Generates a random graph, deciding independently for every vertex pair
/// (ordered pairs when directed) whether it is connected.
///
/// # Errors
///
/// [`Error::InvalidOperation`] if the edge probability is not within `[0, 1]`.
pub fn generate_random_graph<D: Direction>(
    config: &RandomGraphConfig,
    rng: &mut impl Rng,
) -> Result<BaseGraph<usize, D>> {
    let p = config.edge_probability;
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidOperation(format!(
            "edge probability {p} outside [0, 1]"
        )));
    }

    let n = config.vertices;
    let mut graph = BaseGraph::with_vertices(0..n);

    for from in 0..n {
        for to in 0..n {
            if from == to && !config.self_loops {
                continue;
            }
            if !D::DIRECTED && to < from {
                continue;
            }
            if rng.gen_bool(p) {
                let cost = rng.gen_range(1..=config.max_cost.max(1));
                graph.add_edge((from, to, Cost::from(cost)))?;
            }
        }
    }

    debug!(
        "generated random graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::graph::{Directed, DirectedGraph, Graph, Undirected};

    #[test]
    fn same_seed_same_graph() {
        let config = RandomGraphConfig {
            vertices: 20,
            max_cost: 9,
            ..Default::default()
        };
        let a: Graph<usize> = generate_random_graph(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        let b: Graph<usize> = generate_random_graph(&config, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(a, b);
        assert!(a.get_edges().iter().all(|e| (1.0..=9.0).contains(&e.cost)));
    }

    #[test]
    fn certain_edges_make_complete_graphs() {
        let config = RandomGraphConfig {
            vertices: 6,
            edge_probability: 1.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);

        let graph = generate_random_graph::<Undirected>(&config, &mut rng).unwrap();
        assert!(graph.is_complete());
        assert_eq!(graph.edge_count(), 15);

        let directed: DirectedGraph<usize> = generate_random_graph::<Directed>(&config, &mut rng).unwrap();
        assert_eq!(directed.edge_count(), 30);
    }

    #[test]
    fn impossible_edges_and_bad_probabilities() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = RandomGraphConfig {
            edge_probability: 0.0,
            self_loops: true,
            ..Default::default()
        };
        let graph: Graph<usize> = generate_random_graph(&config, &mut rng).unwrap();
        assert_eq!(graph.vertex_count(), 10);
        assert_eq!(graph.edge_count(), 0);

        let config = RandomGraphConfig {
            edge_probability: 1.5,
            ..Default::default()
        };
        let err = generate_random_graph::<Undirected>(&config, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidOperation(_)));
    }
}
