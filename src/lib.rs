//! # Renketsu - Graph Editing and Flow Submission Engine
//!
//! **Renketsu** is the shared state model behind a node-based "no-code"
//! workflow builder. It holds an in-memory directed graph of nodes and
//! edges, applies user-initiated mutations (add, delete, move, connect,
//! property edits), and produces a serializable snapshot that a thin HTTP
//! client submits to an external execution service.
//!
//! ## Core Workflow
//!
//! The engine is UI-framework-agnostic. A canvas forwards its discrete
//! input events to one [`graph::GraphEditor`]; every mutation yields a new
//! consistent graph state the canvas re-renders from. The primary workflow
//! is:
//!
//! 1.  **Build the editor**: Use [`graph::GraphEditor::builder`] to seed
//!     the start/end sentinels and, if needed, register custom node types.
//! 2.  **Apply mutations**: Call the editor's operations from your input
//!     handlers. Interaction flows with their own lifecycle (the node
//!     creation dropdown, drag-repositioning) go through
//!     [`graph::NodePalette`] and [`graph::DragSession`].
//! 3.  **Serialize**: On explicit user action, `serialize()` the graph
//!     into a [`flow::FlowSnapshot`].
//! 4.  **Submit**: Wrap the snapshot in a [`flow::ApiFlowRequest`] and
//!     send it with [`client::FlowClient`]; display the returned result or
//!     the error string inline.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use renketsu::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // A graph seeded with start and end sentinels.
//!     let mut editor = GraphEditor::builder()
//!         .with_start_node()
//!         .with_terminal_node()
//!         .build();
//!
//!     // New nodes splice into the chain in front of the terminal.
//!     let file_node = editor.add_node("inputFile");
//!     editor.select(&file_node);
//!     editor.update_selected(NodeChange::Parameter(
//!         "path".to_string(),
//!         serde_json::json!("/data/report.pdf"),
//!     ));
//!
//!     // Serialize and submit the assembled flow.
//!     let snapshot = editor.serialize();
//!     let request = ApiFlowRequest::builder(snapshot).build();
//!
//!     let client = FlowClient::new();
//!     match client.create_api(&request) {
//!         Ok(result) => println!("実行結果: {}", result),
//!         Err(e) => eprintln!("エラー: {}", e),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod flow;
pub mod graph;
pub mod prelude;
