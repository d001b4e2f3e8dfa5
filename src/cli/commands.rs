use std::path::Path;

use anyhow::{Context, bail};
use colored::Colorize;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use graph_theory::algorithms::{
    NeighbourOrder, ShortestPathMethod, TraversalConfig, TraversalMethod, connected_component,
    connected_components, paths_from, shortest_paths,
};
use graph_theory::graph::{AnyGraph, BaseGraph, Directed, Direction, Graph, Undirected};
use graph_theory::random::{RandomGraphConfig, generate_random_graph};
use graph_theory::utils::json::save_json;

use super::CliLabel;
use super::label::resolve_label;
use super::output::{
    PathRow, VertexRow, field, format_cost, format_labels, format_path, heading, print_table,
};

fn load(path: &Path) -> anyhow::Result<AnyGraph<CliLabel>> {
    let graph = AnyGraph::load(path)
        .with_context(|| format!("failed to load graph from {}", path.display()))?;
    info!("loaded {} graph from {}", kind(graph.is_directed()), path.display());
    Ok(graph)
}

fn kind(directed: bool) -> &'static str {
    if directed { "directed" } else { "undirected" }
}

fn write_snapshot<D: Direction>(
    graph: &BaseGraph<CliLabel, D>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            save_json(&graph.to_snapshot(), path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(
                "wrote {} vertices and {} edges to {}",
                graph.vertex_count(),
                graph.edge_count(),
                path.display()
            );
        }
        None => println!("{}", graph.to_json_pretty()?),
    }
    Ok(())
}

pub fn info(path: &Path) -> anyhow::Result<()> {
    match load(path)? {
        AnyGraph::Undirected(graph) => {
            describe(&graph);
            field("complete", graph.is_complete());
            let config = TraversalConfig {
                method: TraversalMethod::Bfs,
                ..Default::default()
            };
            field("components", connected_components(&graph, &config)?.len());
            print_vertices(&graph)
        }
        AnyGraph::Directed(graph) => {
            describe(&graph);
            print_vertices(&graph)
        }
    }
}

fn describe<D: Direction>(graph: &BaseGraph<CliLabel, D>) {
    heading(&format!("{} graph", kind(D::DIRECTED)));
    field("vertices", graph.vertex_count());
    field("edges", graph.edge_count());
    field("negative costs", graph.has_negative_costs());
}

fn print_vertices<D: Direction>(graph: &BaseGraph<CliLabel, D>) -> anyhow::Result<()> {
    let rows = graph
        .get_vertices()
        .iter()
        .map(|v| {
            Ok(VertexRow {
                vertex: v.clone(),
                degree: graph.get_vertex_degree(v)?,
                adjacent: format_labels(graph.get_adjacent_vertices(v)?, ", "),
            })
        })
        .collect::<graph_theory::Result<Vec<_>>>()?;

    print_table(&rows);
    Ok(())
}

pub fn traverse(
    path: &Path,
    start: &str,
    method: TraversalMethod,
    sorted: bool,
) -> anyhow::Result<()> {
    let config = TraversalConfig {
        method,
        order: if sorted {
            NeighbourOrder::Natural
        } else {
            NeighbourOrder::Insertion
        },
    };

    match load(path)? {
        AnyGraph::Undirected(graph) => traverse_graph(&graph, start, &config),
        AnyGraph::Directed(graph) => traverse_graph(&graph, start, &config),
    }
}

fn traverse_graph<D: Direction>(
    graph: &BaseGraph<CliLabel, D>,
    start: &str,
    config: &TraversalConfig<'_, CliLabel>,
) -> anyhow::Result<()> {
    let start = resolve_label(graph.get_vertices(), start);
    let order = connected_component(graph, &start, config)?;

    heading(&format!(
        "{:?} from {start} reached {} of {} vertices",
        config.method,
        order.len(),
        graph.vertex_count()
    ));
    println!("{}", format_labels(&order, " -> "));
    Ok(())
}

pub fn shortest_path(
    path: &Path,
    start: &str,
    target: Option<&str>,
    method: ShortestPathMethod,
) -> anyhow::Result<()> {
    match load(path)? {
        AnyGraph::Undirected(graph) => shortest_path_graph(&graph, start, target, method),
        AnyGraph::Directed(graph) => shortest_path_graph(&graph, start, target, method),
    }
}

fn shortest_path_graph<D: Direction>(
    graph: &BaseGraph<CliLabel, D>,
    start: &str,
    target: Option<&str>,
    method: ShortestPathMethod,
) -> anyhow::Result<()> {
    let start = resolve_label(graph.get_vertices(), start);

    if let Some(target) = target {
        let target = resolve_label(graph.get_vertices(), target);
        let route = graph_theory::algorithms::shortest_path(graph, &start, &target, method)?;

        heading(&format!("{start} -> {target}"));
        field("cost", format_cost(&route.cost));
        field("path", format_path(route.path.as_deref()));
        return Ok(());
    }

    let rows = path_rows(graph, &start, method)?;
    heading(&format!("shortest paths from {start}"));
    print_table(&rows);
    Ok(())
}

/// One row per vertex, in vertex order.
fn path_rows<D: Direction>(
    graph: &BaseGraph<CliLabel, D>,
    start: &CliLabel,
    method: ShortestPathMethod,
) -> graph_theory::Result<Vec<PathRow>> {
    let precedence = shortest_paths(graph, start, method, None)?;
    let mut paths = paths_from(&precedence);

    Ok(graph
        .get_vertices()
        .iter()
        .filter_map(|v| paths.remove(v).map(|route| (v, route)))
        .map(|(v, route)| PathRow {
            vertex: v.clone(),
            cost: route.cost,
            path: format_path(route.path.as_deref()),
        })
        .collect())
}

pub fn generate(
    config: &RandomGraphConfig,
    directed: bool,
    seed: Option<u64>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if directed {
        let graph = generate_random_graph::<Directed>(config, &mut rng)?;
        write_snapshot(&relabel(&graph)?, output)
    } else {
        let graph = generate_random_graph::<Undirected>(config, &mut rng)?;
        write_snapshot(&relabel(&graph)?, output)
    }
}

fn relabel<D: Direction>(graph: &BaseGraph<usize, D>) -> anyhow::Result<BaseGraph<CliLabel, D>> {
    let edges = graph
        .get_edges()
        .iter()
        .map(|e| (CliLabel::from(e.from), CliLabel::from(e.to), e.cost));
    let vertices = graph.get_vertices().iter().map(|&v| CliLabel::from(v));
    Ok(BaseGraph::new(vertices, edges)?)
}

pub fn matrix(path: &Path, adjacency: bool) -> anyhow::Result<()> {
    let (vertices, costs, adjacent) = match load(path)? {
        AnyGraph::Undirected(graph) => {
            (graph.get_vertices().to_vec(), graph.cost_matrix(), graph.adjacency_matrix())
        }
        AnyGraph::Directed(graph) => {
            (graph.get_vertices().to_vec(), graph.cost_matrix(), graph.adjacency_matrix())
        }
    };

    heading(&format!("rows and columns: {}", format_labels(&vertices, ", ")));
    if adjacency {
        print!("{adjacent}");
    } else {
        print!("{costs}");
    }
    Ok(())
}

pub fn complement(path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let graph: Graph<CliLabel> = match load(path)? {
        AnyGraph::Undirected(graph) => graph,
        AnyGraph::Directed(_) => bail!(
            "{} holds a directed graph; complements are only defined for undirected graphs",
            path.display()
        ),
    };

    let complement = graph.complementary_graph()?;
    eprintln!(
        "{} {} edges -> {} edges",
        "complement:".green().bold(),
        graph.edge_count(),
        complement.edge_count()
    );
    write_snapshot(&complement, output)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use graph_theory::graph::DirectedGraph;
    use graph_theory::utils::json::load_json;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("graph-theory-cli-{name}-{}.json", std::process::id()))
    }

    fn text(s: &str) -> CliLabel {
        CliLabel::Text(s.to_string())
    }

    fn letters(labels: &[&str], edges: &[(&str, &str, f64)]) -> Graph<CliLabel> {
        Graph::new(
            labels.iter().map(|l| text(l)),
            edges.iter().map(|&(a, b, c)| (text(a), text(b), c)),
        )
        .unwrap()
    }

    #[test]
    fn complement_rejects_directed_snapshot() {
        let path = temp_path("complement-directed");
        let graph = DirectedGraph::new([text("a"), text("b")], [(text("a"), text("b"))]).unwrap();
        save_json(&graph.to_snapshot(), &path).unwrap();

        let err = complement(&path, None).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(err.to_string().contains("directed graph"));
    }

    #[test]
    fn complement_writes_missing_edges() {
        let input = temp_path("complement-in");
        let output = temp_path("complement-out");
        let graph = letters(&["a", "b", "c"], &[("a", "b", 5.0)]);
        save_json(&graph.to_snapshot(), &input).unwrap();

        complement(&input, Some(&output)).unwrap();
        let written = AnyGraph::<CliLabel>::load(&output).unwrap();
        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();

        assert_eq!(
            written,
            AnyGraph::Undirected(letters(&["a", "b", "c"], &[("a", "c", 1.0), ("b", "c", 1.0)]))
        );
    }

    #[test]
    fn relabel_keeps_vertices_edges_and_costs() {
        let graph = DirectedGraph::new([0usize, 1, 2], [(2, 0, 4.0), (0, 1, 1.5)]).unwrap();
        let relabelled = relabel(&graph).unwrap();

        assert_eq!(
            relabelled.get_vertices(),
            &[CliLabel::Int(0), CliLabel::Int(1), CliLabel::Int(2)]
        );
        assert_eq!(relabelled.get_cost(&CliLabel::Int(2), &CliLabel::Int(0)).unwrap(), 4.0);
        assert_eq!(relabelled.get_cost(&CliLabel::Int(0), &CliLabel::Int(1)).unwrap(), 1.5);
        assert_eq!(relabelled.edge_count(), 2);
        assert!(relabelled.is_directed());
    }

    #[test]
    fn seeded_generate_writes_loadable_snapshot() {
        let first = temp_path("generate-a");
        let second = temp_path("generate-b");
        let config = RandomGraphConfig {
            vertices: 8,
            edge_probability: 0.5,
            max_cost: 5,
            self_loops: false,
        };

        generate(&config, true, Some(42), Some(&first)).unwrap();
        generate(&config, true, Some(42), Some(&second)).unwrap();
        let a = AnyGraph::<CliLabel>::load(&first).unwrap();
        let b: serde_json::Value = load_json(&second).unwrap();
        std::fs::remove_file(&first).unwrap();
        std::fs::remove_file(&second).unwrap();

        assert!(a.is_directed());
        assert_eq!(a.to_snapshot().vertices.len(), 8);
        assert_eq!(a, AnyGraph::from_json_value(b).unwrap());
    }

    #[test]
    fn generate_without_output_prints_to_stdout() {
        let config = RandomGraphConfig {
            vertices: 3,
            ..Default::default()
        };
        assert!(generate(&config, false, Some(1), None).is_ok());

        let config = RandomGraphConfig {
            edge_probability: 2.0,
            ..Default::default()
        };
        assert!(generate(&config, false, Some(1), None).is_err());
    }

    #[test]
    fn path_rows_follow_vertex_order() {
        let graph = letters(
            &["C", "A", "B", "E"],
            &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 4.0)],
        );
        let rows = path_rows(&graph, &text("A"), ShortestPathMethod::Auto).unwrap();

        let vertices: Vec<_> = rows.iter().map(|r| r.vertex.clone()).collect();
        assert_eq!(vertices, vec![text("C"), text("A"), text("B"), text("E")]);
        assert_eq!(rows[0].cost, 3.0);
        assert_eq!(rows[0].path, "A -> B -> C");
        assert_eq!(rows[1].path, "A");
        assert!(rows[3].cost.is_infinite());
        assert_eq!(rows[3].path, "-");
    }

    #[test]
    fn command_line_labels_match_printed_form() {
        let path = temp_path("labels");
        let graph = letters(&["1", "2", "3"], &[("1", "2", 1.0), ("2", "3", 1.0)]);
        save_json(&graph.to_snapshot(), &path).unwrap();

        let found = shortest_path(&path, "1", Some("3"), ShortestPathMethod::Dijkstra);
        let traversed = traverse(&path, "2", TraversalMethod::Bfs, true);
        let missing = shortest_path(&path, "Z", None, ShortestPathMethod::Auto);
        std::fs::remove_file(&path).unwrap();

        assert!(found.is_ok());
        assert!(traversed.is_ok());
        assert_eq!(missing.unwrap_err().to_string(), "vertex Z not found");
    }
}
