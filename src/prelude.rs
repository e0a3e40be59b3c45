//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! renketsu crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use renketsu::prelude::*;
//!
//! let mut editor = GraphEditor::builder().with_start_node().build();
//! let node_id = editor.add_node("summarize");
//! let snapshot = editor.serialize();
//! println!("{} nodes, {} edges", snapshot.nodes.len(), snapshot.edges.len());
//! # let _ = node_id;
//! ```

// Graph editor state model
pub use crate::graph::{
    DragSession, Edge, GraphEditor, GraphEditorBuilder, Node, NodeChange, NodePalette, NodeType,
    NodeTypeRegistry, Position,
};

// Flow serialization model
pub use crate::flow::{
    ApiFlowRequest, ApiFlowRequestBuilder, EdgeTarget, FlowEdgeEntry, FlowEntry, FlowNodeEntry,
    FlowSnapshot, IntoSnapshot, SnapshotEdge, SnapshotNode,
};

// Remote endpoint client
pub use crate::client::{Endpoints, FlowClient};

// Error types
pub use crate::error::{ClientError, SnapshotConversionError};
