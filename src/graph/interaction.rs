use crate::graph::editor::GraphEditor;
use crate::graph::node::Position;
use crate::graph::registry::INPUT_FILE_TAG;

/// The popup/dropdown node-creation flow, made explicit instead of being
/// scattered across boolean toggles:
///
/// `idle -> awaiting selection (dropdown open) -> labels chosen -> committed`
///
/// Labels accumulate while the dropdown is open; committing turns each one
/// into a node chained after the previous and returns the palette to idle.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PaletteState {
    Idle,
    AwaitingSelection { labels: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct NodePalette {
    state: PaletteState,
}

impl NodePalette {
    pub fn new() -> Self {
        Self {
            state: PaletteState::Idle,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PaletteState::AwaitingSelection { .. })
    }

    /// Labels accumulated so far, in selection order.
    pub fn chosen_labels(&self) -> &[String] {
        match &self.state {
            PaletteState::Idle => &[],
            PaletteState::AwaitingSelection { labels } => labels,
        }
    }

    /// Opens the dropdown. Reopening while already open keeps the
    /// accumulated labels.
    pub fn open(&mut self) {
        if let PaletteState::Idle = self.state {
            self.state = PaletteState::AwaitingSelection { labels: Vec::new() };
        }
    }

    /// Records one label choice. Ignored while the dropdown is closed, and
    /// choosing the same label twice is ignored.
    pub fn choose(&mut self, label: &str) {
        if let PaletteState::AwaitingSelection { labels } = &mut self.state {
            if !labels.iter().any(|l| l == label) {
                labels.push(label.to_string());
            }
        }
    }

    /// Closes the dropdown and discards any accumulated labels.
    pub fn cancel(&mut self) {
        self.state = PaletteState::Idle;
    }

    /// Commits the accumulated labels: each becomes one node chained after
    /// the previous, the dropdown closes and the accumulation is cleared.
    /// Returns the ids of the created nodes, in order.
    ///
    /// Labels known to the editor's registry map to their function tag;
    /// free-text labels fall back to the file input tag, keeping the label
    /// the user typed.
    pub fn commit(&mut self, editor: &mut GraphEditor) -> Vec<String> {
        let labels = match std::mem::replace(&mut self.state, PaletteState::Idle) {
            PaletteState::Idle => return Vec::new(),
            PaletteState::AwaitingSelection { labels } => labels,
        };

        labels
            .into_iter()
            .map(|label| {
                let tag = editor
                    .registry()
                    .tag_for_label(&label)
                    .unwrap_or(INPUT_FILE_TAG)
                    .to_string();
                let position = editor
                    .nodes()
                    .last()
                    .map(|n| n.position.offset_by(0.0, 100.0))
                    .unwrap_or_else(|| Position::new(50.0, 50.0));
                editor.add_labeled_node(&tag, label, position)
            })
            .collect()
    }
}

impl Default for NodePalette {
    fn default() -> Self {
        Self::new()
    }
}

/// One drag gesture over a single node.
///
/// The node's position at drag start is captured once; every pointer tick
/// derives the new absolute position as `start + total delta` and writes it
/// through [`GraphEditor::move_node`]. Compounding per-tick deltas would
/// drift, so ticks are never applied relative to the stored position.
#[derive(Debug, Clone)]
pub struct DragSession {
    node_id: String,
    origin: Position,
}

impl DragSession {
    /// Captures the dragged node's id and starting position. Returns `None`
    /// for unknown ids.
    pub fn begin(editor: &GraphEditor, node_id: &str) -> Option<Self> {
        let node = editor.node(node_id)?;
        Some(Self {
            node_id: node.id.clone(),
            origin: node.position,
        })
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// The absolute position for a pointer offset since drag start.
    pub fn position_for(&self, dx: f64, dy: f64) -> Position {
        self.origin.offset_by(dx, dy)
    }

    /// Applies one drag tick. Safe to call at pointer-move frequency;
    /// repeating the same delta is idempotent.
    pub fn drag_to(&self, editor: &mut GraphEditor, dx: f64, dy: f64) {
        editor.move_node(&self.node_id, self.position_for(dx, dy));
    }
}
