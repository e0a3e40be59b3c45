use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// An absolute canvas coordinate. Advisory only: positions drive layout,
/// never execution order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the position offset by a pointer delta.
    pub fn offset_by(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A single vertex in the editable workflow graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique within a graph, allocated monotonically by the editor.
    pub id: String,
    /// Free-text display label (e.g. "ファイル入力").
    pub label: String,
    /// Function tag selecting the node's behavior (e.g. "inputFile").
    pub function: String,
    /// Open-ended parameter map specific to the function tag.
    pub parameters: AHashMap<String, serde_json::Value>,
    pub position: Position,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        function: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            function: function.into(),
            parameters: AHashMap::new(),
            position,
        }
    }
}

/// A directed connection between two node ids.
///
/// Duplicate edges between the same pair and self-loops are permitted;
/// the editor preserves whatever the user draws.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Optional visual tag carried through to the canvas (e.g. "smoothstep").
    pub kind: Option<String>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: Option<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("e{}-{}", source, target),
            source,
            target,
            kind,
        }
    }

    /// True if this edge starts or ends at the given node.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}
