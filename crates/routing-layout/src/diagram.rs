use crate::Point;
use serde::{Deserialize, Serialize};

/// A workstation on the routing diagram
///
/// `data` is never inspected by the layout, it is handed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<P> {
    pub id: String,
    pub data: P,
    /// Ignored on input, overwritten by the layout
    #[serde(default)]
    pub position: Point,
}

impl<P> Node<P> {
    pub fn new(id: impl Into<String>, data: P) -> Self {
        Self {
            id: id.into(),
            data,
            position: Point::default(),
        }
    }
}

/// A directed connection between two workstations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}
