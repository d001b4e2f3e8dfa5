use colored::Colorize;
use itertools::Itertools;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use graph_theory::graph::Cost;

use super::CliLabel;

#[derive(Clone, Debug, Tabled)]
pub struct VertexRow {
    #[tabled(rename = "Vertex")]
    pub vertex: CliLabel,
    #[tabled(rename = "Degree")]
    pub degree: usize,
    #[tabled(rename = "Adjacent")]
    pub adjacent: String,
}

#[derive(Clone, Debug, Tabled)]
pub struct PathRow {
    #[tabled(rename = "Vertex")]
    pub vertex: CliLabel,
    #[tabled(rename = "Cost", display_with = "format_cost")]
    pub cost: Cost,
    #[tabled(rename = "Path")]
    pub path: String,
}

pub fn format_cost(cost: &Cost) -> String {
    if cost.is_infinite() {
        "unreachable".to_string()
    } else {
        cost.to_string()
    }
}

pub fn format_labels(labels: &[CliLabel], separator: &str) -> String {
    labels.iter().join(separator)
}

pub fn format_path(path: Option<&[CliLabel]>) -> String {
    path.map(|p| format_labels(p, " -> ")).unwrap_or_else(|| "-".to_string())
}

pub fn heading(text: &str) {
    println!("{}", text.bold());
}

pub fn field(name: &str, value: impl std::fmt::Display) {
    println!("  {:<18}{}", format!("{name}:").cyan(), value);
}

/// Prints `rows` as a rounded table, or nothing when there are none.
pub fn print_table<R: Tabled>(rows: &[R]) {
    if rows.is_empty() {
        return;
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_and_paths_render_for_humans() {
        assert_eq!(format_cost(&4.0), "4");
        assert_eq!(format_cost(&2.5), "2.5");
        assert_eq!(format_cost(&Cost::INFINITY), "unreachable");

        let path = [CliLabel::Text("A".into()), CliLabel::Int(2)];
        assert_eq!(format_path(Some(&path)), "A -> 2");
        assert_eq!(format_path(None), "-");
    }

    #[test]
    fn tables_use_renamed_headers() {
        let rows = [PathRow {
            vertex: CliLabel::Int(1),
            cost: 3.0,
            path: "0 -> 1".to_string(),
        }];
        let rendered = Table::new(&rows).with(Style::rounded()).to_string();

        assert!(rendered.contains("Vertex"));
        assert!(rendered.contains("Cost"));
        assert!(rendered.contains("0 -> 1"));
    }
}
