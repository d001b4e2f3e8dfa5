use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Vertex label read from a snapshot file or the command line.
///
/// Snapshots may label vertices with integers or strings; both are accepted and
/// integers sort before strings.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CliLabel {
    Int(i64),
    Text(String),
}

impl fmt::Display for CliLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliLabel::Int(n) => write!(f, "{n}"),
            CliLabel::Text(s) => f.write_str(s),
        }
    }
}

// Library errors render labels with `Debug`; users should see the label itself.
impl fmt::Debug for CliLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for CliLabel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse()
            .map(CliLabel::Int)
            .unwrap_or_else(|_| CliLabel::Text(s.to_string())))
    }
}

impl From<usize> for CliLabel {
    fn from(n: usize) -> Self {
        i64::try_from(n)
            .map(CliLabel::Int)
            .unwrap_or_else(|_| CliLabel::Text(n.to_string()))
    }
}

/// Picks the vertex whose printed form is `raw`, so `"7"` finds a vertex stored as
/// the string `"7"` as well as the integer `7`.
pub fn resolve_label<'a>(vertices: impl IntoIterator<Item = &'a CliLabel>, raw: &str) -> CliLabel {
    vertices
        .into_iter()
        .find(|v| v.to_string() == raw)
        .cloned()
        .unwrap_or_else(|| match raw.parse() {
            Ok(label) => label,
            Err(never) => match never {},
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_before_text() {
        assert_eq!("42".parse::<CliLabel>().unwrap(), CliLabel::Int(42));
        assert_eq!("-3".parse::<CliLabel>().unwrap(), CliLabel::Int(-3));
        assert_eq!("A".parse::<CliLabel>().unwrap(), CliLabel::Text("A".into()));
    }

    #[test]
    fn deserializes_mixed_snapshot_labels() {
        let labels: Vec<CliLabel> = serde_json::from_str(r#"[1, "b", 3]"#).unwrap();
        assert_eq!(
            labels,
            vec![CliLabel::Int(1), CliLabel::Text("b".into()), CliLabel::Int(3)]
        );
        assert_eq!(serde_json::to_string(&labels).unwrap(), r#"[1,"b",3]"#);
    }

    #[test]
    fn integers_sort_before_text() {
        let mut labels = vec![CliLabel::Text("a".into()), CliLabel::Int(10), CliLabel::Int(2)];
        labels.sort();
        assert_eq!(
            labels,
            vec![CliLabel::Int(2), CliLabel::Int(10), CliLabel::Text("a".into())]
        );
    }

    #[test]
    fn debug_shows_the_bare_label() {
        assert_eq!(format!("{:?}", CliLabel::Text("Z".into())), "Z");
        assert_eq!(format!("{:?}", CliLabel::Int(-4)), "-4");
    }

    #[test]
    fn resolves_against_existing_vertices() {
        let vertices = [CliLabel::Text("7".into()), CliLabel::Int(8)];

        assert_eq!(resolve_label(&vertices, "7"), CliLabel::Text("7".into()));
        assert_eq!(resolve_label(&vertices, "8"), CliLabel::Int(8));
        assert_eq!(resolve_label(&vertices, "x"), CliLabel::Text("x".into()));
    }
}
