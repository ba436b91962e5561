use routing_layout::{Cell, Edge, FlowDirection, Node, RoutingLayout};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or storing a routing diagram
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse routing diagram")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize routing diagram")]
    Serialize(#[from] ron::Error),

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Display payload of a routing node, carried through the layout as is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workstation {
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// A production routing as stored by the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    #[serde(default)]
    pub direction: FlowDirection,
    pub nodes: Vec<Node<Workstation>>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Diagram {
    pub fn from_ron(text: &str) -> Result<Self, DocumentError> {
        Ok(ron::de::from_str(text)?)
    }

    pub fn to_ron(&self) -> Result<String, DocumentError> {
        let config = ron::ser::PrettyConfig::new().struct_names(false);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", text.len(), path.display());
        Self::from_ron(&text)
    }

    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let text = self.to_ron()?;
        std::fs::write(path, text).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace every node position with the computed layout
    pub fn arrange(self, layout: &RoutingLayout) -> Self {
        let nodes = layout.arrange(self.nodes, &self.edges);
        Self {
            direction: layout.direction,
            nodes,
            edges: self.edges,
        }
    }

    /// Level and lane of every node, in document order
    pub fn grid(&self, layout: &RoutingLayout) -> Vec<(&str, Cell)> {
        layout
            .compute_node_grid(&self.nodes, &self.edges)
            .cells
            .into_iter()
            .map(|(index, cell)| (self.nodes[index].id.as_str(), cell))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routing_layout::{Point, Vec2};
    use test_log::test;

    const BRACKET: &str = include_str!("../demos/bracket.ron");

    fn position_of(diagram: &Diagram, id: &str) -> Point {
        diagram
            .nodes
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.position)
            .unwrap()
    }

    #[test]
    fn parse_demo() {
        let diagram = Diagram::from_ron(BRACKET).unwrap();

        assert_eq!(diagram.direction, FlowDirection::Horizontal);
        assert_eq!(diagram.nodes.len(), 7);
        assert_eq!(diagram.edges.len(), 6);
        assert_eq!(diagram.nodes[2].data.color, None);
        assert_eq!(diagram.nodes[0].position, Point::default());
    }

    #[test]
    fn arrange_demo() {
        let diagram = Diagram::from_ron(BRACKET).unwrap();
        let arranged = diagram.clone().arrange(&RoutingLayout::default());

        assert_eq!(position_of(&arranged, "saw"), Point::new(50.0, 50.0));
        assert_eq!(position_of(&arranged, "laser"), Point::new(50.0, 200.0));
        assert_eq!(position_of(&arranged, "press"), Point::new(350.0, 200.0));
        assert_eq!(position_of(&arranged, "weld"), Point::new(650.0, 200.0));
        assert_eq!(position_of(&arranged, "qc"), Point::new(1250.0, 200.0));
        // Not wired, placed after the last level on a lane of its own
        assert_eq!(position_of(&arranged, "label"), Point::new(1550.0, 350.0));

        // Payload, edges and order are untouched
        assert_eq!(arranged.edges, diagram.edges);
        for (before, after) in diagram.nodes.iter().zip(&arranged.nodes) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.data, after.data);
        }
    }

    #[test]
    fn grid_of_demo() {
        let diagram = Diagram::from_ron(BRACKET).unwrap();
        let grid = diagram.grid(&RoutingLayout::default());

        assert_eq!(grid[3], ("weld", Cell { level: 2, lane: 1 }));
        assert_eq!(grid[6], ("label", Cell { level: 5, lane: 2 }));
    }

    #[test]
    fn unknown_direction_reads_as_horizontal() {
        let diagram = Diagram::from_ron(
            r#"(direction: "sideways", nodes: [(id: "a", data: (name: "A"))])"#,
        )
        .unwrap();

        assert_eq!(diagram.direction, FlowDirection::Horizontal);
        assert!(diagram.edges.is_empty());
        assert_eq!(diagram.nodes[0].data.kind, "");
    }

    #[test]
    fn arranged_document_records_direction() {
        let diagram = Diagram::from_ron(BRACKET).unwrap();
        let layout = RoutingLayout {
            cell: Vec2::new(200.0, 100.0),
            margin: 10.0,
            direction: FlowDirection::Vertical,
        };
        let arranged = diagram.arrange(&layout);

        assert_eq!(arranged.direction, FlowDirection::Vertical);
        assert_eq!(position_of(&arranged, "press"), Point::new(210.0, 110.0));
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bracket.ron");
        let arranged = Diagram::from_ron(BRACKET)
            .unwrap()
            .arrange(&RoutingLayout::default());

        arranged.save(&path).unwrap();
        let loaded = Diagram::load(&path).unwrap();

        assert_eq!(loaded, arranged);
    }

    #[test]
    fn missing_file() {
        let err = Diagram::load(Path::new("/nonexistent/routing.ron")).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }

    #[test]
    fn malformed_document() {
        let err = Diagram::from_ron("(nodes: [(id: 3)])").unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }
}
