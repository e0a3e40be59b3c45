use itertools::Itertools;

use crate::flow::{FlowSnapshot, SnapshotEdge, SnapshotNode};
use crate::graph::node::{Edge, Node, Position};
use crate::graph::registry::{END_TAG, NodeTypeRegistry, START_TAG};

/// Visual tag applied to every edge the editor creates.
pub const DEFAULT_EDGE_KIND: &str = "smoothstep";

/// A single property edit applied to the currently selected node.
#[derive(Debug, Clone)]
pub enum NodeChange {
    /// Replace the display label.
    Label(String),
    /// Replace the function tag. Ignored for protected sentinels.
    Function(String),
    /// Merge one key/value pair into the parameter map.
    Parameter(String, serde_json::Value),
}

pub struct GraphEditorBuilder {
    registry: NodeTypeRegistry,
    with_start: bool,
    with_terminal: bool,
    terminal_tag: String,
}

impl GraphEditorBuilder {
    pub fn new() -> Self {
        Self {
            registry: NodeTypeRegistry::with_defaults(),
            with_start: false,
            with_terminal: false,
            terminal_tag: END_TAG.to_string(),
        }
    }

    /// Replaces the default node type registry.
    pub fn with_registry(mut self, registry: NodeTypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Registers an additional node type on top of the current registry.
    pub fn with_node_type(mut self, node_type: crate::graph::registry::NodeType) -> Self {
        self.registry.register(node_type);
        self
    }

    /// Seeds the graph with a protected start sentinel.
    pub fn with_start_node(mut self) -> Self {
        self.with_start = true;
        self
    }

    /// Seeds the graph with a fixed terminal sentinel. New nodes are spliced
    /// into the chain immediately before it.
    pub fn with_terminal_node(mut self) -> Self {
        self.with_terminal = true;
        self
    }

    /// Overrides which function tag marks the terminal sentinel.
    pub fn with_terminal_tag(mut self, tag: impl Into<String>) -> Self {
        self.terminal_tag = tag.into();
        self
    }

    pub fn build(self) -> GraphEditor {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        if self.with_start {
            let label = self.registry.label_for(START_TAG);
            nodes.push(Node::new("1", label, START_TAG, Position::new(250.0, 5.0)));
        }
        if self.with_terminal {
            let id = (nodes.len() + 1).to_string();
            let label = self.registry.label_for(&self.terminal_tag);
            let position = nodes
                .last()
                .map(|n| n.position.offset_by(0.0, 100.0))
                .unwrap_or_else(|| Position::new(250.0, 5.0));
            let node = Node::new(id.clone(), label, self.terminal_tag.clone(), position);
            if let Some(last) = nodes.last() {
                edges.push(Edge::new(
                    last.id.clone(),
                    id,
                    Some(DEFAULT_EDGE_KIND.to_string()),
                ));
            }
            nodes.push(node);
        }
        let next_id = nodes.len() + 1;
        GraphEditor {
            initial_nodes: nodes.clone(),
            initial_edges: edges.clone(),
            nodes,
            edges,
            registry: self.registry,
            terminal_tag: self.terminal_tag,
            selected: None,
            next_id,
        }
    }
}

impl Default for GraphEditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory state of one workflow canvas: an ordered node sequence, the
/// edge set over it, and the current selection.
///
/// All mutations are synchronous and infallible: invalid requests (unknown
/// ids, protected sentinels, edits without a selection) are silently
/// ignored, matching the editor UX rather than surfacing errors.
pub struct GraphEditor {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    registry: NodeTypeRegistry,
    terminal_tag: String,
    selected: Option<String>,
    /// Monotonic id source, seeded from the initial node count. Never
    /// re-derived from the live count, so deletions cannot cause id reuse.
    next_id: usize,
    initial_nodes: Vec<Node>,
    initial_edges: Vec<Edge>,
}

impl GraphEditor {
    pub fn builder() -> GraphEditorBuilder {
        GraphEditorBuilder::new()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn registry(&self) -> &NodeTypeRegistry {
        &self.registry
    }

    fn alloc_id(&mut self) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        id
    }

    /// The terminal sentinel, when the graph carries one.
    fn terminal_index(&self) -> Option<usize> {
        self.nodes.iter().rposition(|n| n.function == self.terminal_tag)
    }

    /// Appends a new node of the given type and chains it into the flow.
    ///
    /// With a fixed terminal sentinel present, the node is inserted
    /// immediately before it: edges running directly into the terminal are
    /// replaced by `previous-last -> new` and `new -> terminal`. Without a
    /// terminal, the node is appended and edged from the previous last
    /// node. Always succeeds; returns the allocated id.
    pub fn add_node(&mut self, tag: &str) -> String {
        let anchor = match self.terminal_index() {
            Some(idx) => idx.checked_sub(1),
            None => self.nodes.len().checked_sub(1),
        };
        let position = anchor
            .map(|idx| self.nodes[idx].position.offset_by(0.0, 100.0))
            .unwrap_or_else(|| Position::new(250.0, 5.0));
        self.add_node_at(tag, position)
    }

    /// Like [`add_node`](Self::add_node) with an explicit position.
    pub fn add_node_at(&mut self, tag: &str, position: Position) -> String {
        let label = self.registry.label_for(tag);
        self.add_labeled_node(tag, label, position)
    }

    /// Adds a node with a caller-chosen label (palette labels are free
    /// text and need not match the registry).
    pub fn add_labeled_node(
        &mut self,
        tag: &str,
        label: impl Into<String>,
        position: Position,
    ) -> String {
        let id = self.alloc_id();
        let node = Node::new(id.clone(), label, tag, position);

        match self.terminal_index() {
            Some(terminal_idx) => {
                let terminal_id = self.nodes[terminal_idx].id.clone();
                let prev_last = terminal_idx
                    .checked_sub(1)
                    .map(|i| self.nodes[i].id.clone());
                self.edges.retain(|e| e.target != terminal_id);
                self.nodes.insert(terminal_idx, node);
                if let Some(prev) = prev_last {
                    self.connect(&prev, &id);
                }
                self.connect(&id, &terminal_id);
            }
            None => {
                let prev_last = self.nodes.last().map(|n| n.id.clone());
                self.nodes.push(node);
                if let Some(prev) = prev_last {
                    self.connect(&prev, &id);
                }
            }
        }
        id
    }

    /// Removes a node and every edge touching it. Protected sentinels and
    /// unknown ids are silently ignored. When the node sat in a linear
    /// chain (exactly one predecessor and one successor), the neighbors are
    /// reconnected to preserve chain continuity. A selection pointing at
    /// the deleted node is cleared.
    pub fn delete_node(&mut self, node_id: &str) {
        let Some(idx) = self.nodes.iter().position(|n| n.id == node_id) else {
            return;
        };
        if self.registry.is_protected(&self.nodes[idx].function) {
            return;
        }

        // Self-loops never count toward chain continuity.
        let predecessor = self
            .edges
            .iter()
            .filter(|e| e.target == node_id && e.source != node_id)
            .map(|e| e.source.clone())
            .exactly_one()
            .ok();
        let successor = self
            .edges
            .iter()
            .filter(|e| e.source == node_id && e.target != node_id)
            .map(|e| e.target.clone())
            .exactly_one()
            .ok();

        self.nodes.remove(idx);
        self.edges.retain(|e| !e.touches(node_id));

        if let (Some(pred), Some(succ)) = (predecessor, successor) {
            self.connect(&pred, &succ);
        }
        if self.selected.as_deref() == Some(node_id) {
            self.selected = None;
        }
    }

    /// Removes the newest node together with its touching edges, without
    /// re-splicing the chain. The seeded sentinels stay in place.
    pub fn remove_last_node(&mut self) {
        let Some(last) = self
            .nodes
            .iter()
            .rev()
            .find(|n| !self.registry.is_protected(&n.function))
            .map(|n| n.id.clone())
        else {
            return;
        };
        self.nodes.retain(|n| n.id != last);
        self.edges.retain(|e| !e.touches(&last));
        if self.selected.as_deref() == Some(last.as_str()) {
            self.selected = None;
        }
    }

    /// Appends a terminal sentinel after the current last node, edged from
    /// it. Later `add_node` calls will splice in front of it.
    pub fn append_end_node(&mut self) -> String {
        let id = self.alloc_id();
        let label = self.registry.label_for(&self.terminal_tag);
        let position = self
            .nodes
            .last()
            .map(|n| n.position.offset_by(0.0, 100.0))
            .unwrap_or_else(|| Position::new(250.0, 5.0));
        let prev_last = self.nodes.last().map(|n| n.id.clone());
        self.nodes
            .push(Node::new(id.clone(), label, self.terminal_tag.clone(), position));
        if let Some(prev) = prev_last {
            self.connect(&prev, &id);
        }
        id
    }

    /// Replaces a node's position absolutely. Called on every drag tick, so
    /// it must not accumulate error: the stored coordinate is overwritten,
    /// never incremented. Unknown ids are ignored. No edge is affected.
    pub fn move_node(&mut self, node_id: &str, position: Position) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == node_id) {
            node.position = position;
        }
    }

    /// Appends an edge. No uniqueness is enforced and self-loops are not
    /// rejected; the canvas renders whatever the user drew.
    pub fn connect(&mut self, source: &str, target: &str) {
        self.edges
            .push(Edge::new(source, target, Some(DEFAULT_EDGE_KIND.to_string())));
    }

    /// Selects a node for the property panel. Unknown ids clear nothing
    /// and select nothing.
    pub fn select(&mut self, node_id: &str) {
        if self.nodes.iter().any(|n| n.id == node_id) {
            self.selected = Some(node_id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.as_deref().and_then(|id| self.node(id))
    }

    /// Applies a property edit to the currently selected node. A no-op when
    /// nothing is selected. Function-tag changes on protected sentinels are
    /// ignored so they cannot lose their protection.
    pub fn update_selected(&mut self, change: NodeChange) {
        let Some(selected) = self.selected.clone() else {
            return;
        };
        let protected = self
            .node(&selected)
            .is_some_and(|n| self.registry.is_protected(&n.function));
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == selected) else {
            return;
        };
        match change {
            NodeChange::Label(label) => node.label = label,
            NodeChange::Function(tag) => {
                if !protected {
                    node.function = tag;
                }
            }
            NodeChange::Parameter(key, value) => {
                node.parameters.insert(key, value);
            }
        }
    }

    /// Discards the whole graph and restores the seeded initial elements.
    pub fn reset(&mut self) {
        self.nodes = self.initial_nodes.clone();
        self.edges = self.initial_edges.clone();
        self.selected = None;
        self.next_id = self.nodes.len() + 1;
    }

    /// Produces the plain data snapshot submitted to the execution
    /// endpoint. No validation happens here: missing parameters travel as
    /// absent keys and the remote service is responsible for rejecting
    /// them.
    pub fn serialize(&self) -> FlowSnapshot {
        FlowSnapshot {
            nodes: self
                .nodes
                .iter()
                .map(|n| SnapshotNode {
                    id: n.id.clone(),
                    label: n.label.clone(),
                    function: n.function.clone(),
                    parameters: n.parameters.clone(),
                    position: n.position,
                })
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|e| SnapshotEdge {
                    id: e.id.clone(),
                    source: e.source.clone(),
                    target: e.target.clone(),
                    kind: e.kind.clone(),
                })
                .collect(),
        }
    }
}
