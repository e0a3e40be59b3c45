use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::graph::Position;

/// The plain, serializable form of an edited graph, as produced by
/// [`crate::graph::GraphEditor::serialize`].
///
/// No validation is applied on the way in or out: empty parameters stay
/// empty and the receiving service decides what to reject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<SnapshotEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub id: String,
    pub label: String,
    pub function: String,
    #[serde(default)]
    pub parameters: AHashMap<String, serde_json::Value>,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl FlowSnapshot {
    /// Parses a snapshot from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a snapshot from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;
        Ok(snapshot)
    }

    /// Writes the snapshot as pretty-printed JSON.
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
