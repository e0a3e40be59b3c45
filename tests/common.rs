//! Common test utilities for building editors and snapshots.
use renketsu::prelude::*;

/// An editor seeded with start and end sentinels, pre-connected.
#[allow(dead_code)]
pub fn editor_with_sentinels() -> GraphEditor {
    GraphEditor::builder()
        .with_start_node()
        .with_terminal_node()
        .build()
}

/// An editor seeded with only the start sentinel.
#[allow(dead_code)]
pub fn editor_with_start() -> GraphEditor {
    GraphEditor::builder().with_start_node().build()
}

/// A small configured flow: start -> file input -> summarize, with a path
/// parameter on the file node.
#[allow(dead_code)]
pub fn sample_snapshot() -> FlowSnapshot {
    let mut editor = editor_with_start();
    let file_node = editor.add_node("inputFile");
    editor.add_node("summarize");
    editor.select(&file_node);
    editor.update_selected(NodeChange::Parameter(
        "path".to_string(),
        serde_json::json!("/tmp/input.pdf"),
    ));
    editor.clear_selection();
    editor.serialize()
}

/// Asserts that the edges of a snapshot form exactly one path visiting the
/// node sequence in append order.
#[allow(dead_code)]
pub fn assert_single_path(snapshot: &FlowSnapshot) {
    assert_eq!(
        snapshot.edges.len(),
        snapshot.nodes.len().saturating_sub(1),
        "a linear chain of {} nodes needs {} edges, found {}",
        snapshot.nodes.len(),
        snapshot.nodes.len().saturating_sub(1),
        snapshot.edges.len()
    );
    for pair in snapshot.nodes.windows(2) {
        assert!(
            snapshot
                .edges
                .iter()
                .any(|e| e.source == pair[0].id && e.target == pair[1].id),
            "missing edge {} -> {}",
            pair[0].id,
            pair[1].id
        );
    }
}
