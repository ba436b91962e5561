use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis along which the routing sequence reads
///
/// Deserializes from any string: `"vertical"` selects [`FlowDirection::Vertical`],
/// every other value falls back to [`FlowDirection::Horizontal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FlowDirection {
    /// Levels advance along x, lanes along y
    #[default]
    Horizontal,
    /// Lanes advance along x, levels along y
    Vertical,
}

impl FlowDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            FlowDirection::Horizontal => "horizontal",
            FlowDirection::Vertical => "vertical",
        }
    }
}

impl From<&str> for FlowDirection {
    fn from(value: &str) -> Self {
        match value {
            "vertical" => FlowDirection::Vertical,
            _ => FlowDirection::Horizontal,
        }
    }
}

impl From<String> for FlowDirection {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<FlowDirection> for String {
    fn from(value: FlowDirection) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
