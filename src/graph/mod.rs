//! The graph editor state model: nodes, edges, the mutation surface, and
//! the interaction state machines layered on top of it.

pub mod editor;
pub mod interaction;
pub mod node;
pub mod registry;

pub use editor::{DEFAULT_EDGE_KIND, GraphEditor, GraphEditorBuilder, NodeChange};
pub use interaction::{DragSession, NodePalette};
pub use node::{Edge, Node, Position};
pub use registry::{NodeType, NodeTypeRegistry};
