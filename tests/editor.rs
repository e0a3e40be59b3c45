//! Tests for the graph editor mutation surface.
mod common;
use common::*;
use renketsu::prelude::*;

#[test]
fn add_node_keeps_single_path_into_terminal() {
    let mut editor = editor_with_sentinels();
    editor.add_node("inputFile");
    editor.add_node("if");
    editor.add_node("summarize");

    let snapshot = editor.serialize();
    assert_eq!(snapshot.nodes.len(), 5);
    assert_single_path(&snapshot);

    // The terminal sentinel stays last in the sequence.
    assert_eq!(snapshot.nodes.last().unwrap().function, "end");
    // No dangling endpoints anywhere.
    for edge in &snapshot.edges {
        assert!(snapshot.nodes.iter().any(|n| n.id == edge.source));
        assert!(snapshot.nodes.iter().any(|n| n.id == edge.target));
    }
}

#[test]
fn add_node_replaces_edge_running_into_terminal() {
    let mut editor = editor_with_sentinels();
    let first = editor.add_node("inputFile");
    let second = editor.add_node("summarize");

    let edges = editor.edges();
    // The old first -> end edge must be gone.
    assert!(
        !edges
            .iter()
            .any(|e| e.source == first && editor.node(&e.target).unwrap().function == "end")
    );
    assert!(edges.iter().any(|e| e.source == first && e.target == second));
}

#[test]
fn delete_middle_of_chain_reconnects_neighbors() {
    let mut editor = editor_with_start();
    let a = editor.add_node("inputFile");
    let b = editor.add_node("if");
    let c = editor.add_node("summarize");

    editor.delete_node(&b);

    let snapshot = editor.serialize();
    assert!(snapshot.nodes.iter().all(|n| n.id != b));
    assert!(
        snapshot
            .edges
            .iter()
            .all(|e| e.source != b && e.target != b),
        "no remaining edge may reference the deleted node"
    );
    assert!(
        snapshot
            .edges
            .iter()
            .any(|e| e.source == a && e.target == c),
        "chain continuity requires the new a -> c edge"
    );
    assert_single_path(&snapshot);
}

#[test]
fn delete_protected_sentinel_is_a_noop() {
    let mut editor = editor_with_sentinels();
    editor.add_node("inputFile");
    let before = editor.serialize();

    let start_id = before.nodes.first().unwrap().id.clone();
    let end_id = before.nodes.last().unwrap().id.clone();
    editor.delete_node(&start_id);
    editor.delete_node(&end_id);

    let after = editor.serialize();
    assert_eq!(after.nodes.len(), before.nodes.len());
    assert_eq!(after.edges.len(), before.edges.len());
}

#[test]
fn delete_clears_selection_of_deleted_node() {
    let mut editor = editor_with_start();
    let a = editor.add_node("inputFile");
    editor.select(&a);
    assert!(editor.selected_node().is_some());

    editor.delete_node(&a);
    assert!(editor.selected_node().is_none());
}

#[test]
fn delete_with_fan_out_does_not_resplice() {
    let mut editor = editor_with_start();
    let a = editor.add_node("inputFile");
    let b = editor.add_node("if");
    let c = editor.add_node("summarize");
    // b now has two successors; deleting it must not invent a bypass edge.
    editor.connect(&b, &a);

    let edges_before = editor.edges().len();
    editor.delete_node(&b);

    let snapshot = editor.serialize();
    assert!(snapshot.edges.iter().all(|e| e.source != b && e.target != b));
    // Three edges touched b (a->b, b->c, b->a); all removed, none added.
    assert_eq!(snapshot.edges.len(), edges_before - 3);
    let _ = c;
}

#[test]
fn move_node_is_absolute_and_idempotent() {
    let mut editor = editor_with_start();
    let a = editor.add_node("inputFile");
    let target = Position::new(320.0, 480.0);

    editor.move_node(&a, target);
    let once = editor.node(&a).unwrap().position;
    editor.move_node(&a, target);
    let twice = editor.node(&a).unwrap().position;

    assert_eq!(once, target);
    assert_eq!(twice, target);
}

#[test]
fn move_node_leaves_other_nodes_untouched() {
    let mut editor = editor_with_start();
    let a = editor.add_node("inputFile");
    let b = editor.add_node("summarize");
    let b_before = editor.node(&b).unwrap().position;

    editor.move_node(&a, Position::new(-10.0, 999.0));

    assert_eq!(editor.node(&b).unwrap().position, b_before);
    assert_eq!(editor.edges().len(), 2);
}

#[test]
fn connect_permits_duplicates_and_self_loops() {
    let mut editor = editor_with_start();
    let a = editor.add_node("inputFile");
    let b = editor.add_node("if");

    editor.connect(&a, &b);
    editor.connect(&a, &b);
    editor.connect(&a, &a);

    let parallel = editor
        .edges()
        .iter()
        .filter(|e| e.source == a && e.target == b)
        .count();
    // One from chaining plus two explicit ones.
    assert_eq!(parallel, 3);
    assert!(editor.edges().iter().any(|e| e.source == a && e.target == a));
}

#[test]
fn update_selected_without_selection_is_a_noop() {
    let mut editor = editor_with_start();
    let a = editor.add_node("inputFile");
    let before = editor.node(&a).unwrap().label.clone();

    editor.update_selected(NodeChange::Label("新しい名前".to_string()));

    assert_eq!(editor.node(&a).unwrap().label, before);
}

#[test]
fn update_selected_merges_parameters() {
    let mut editor = editor_with_start();
    let a = editor.add_node("inputFile");
    editor.select(&a);
    editor.update_selected(NodeChange::Parameter(
        "path".to_string(),
        serde_json::json!("/tmp/a.pdf"),
    ));
    editor.update_selected(NodeChange::Parameter(
        "encoding".to_string(),
        serde_json::json!("utf-8"),
    ));
    editor.update_selected(NodeChange::Parameter(
        "path".to_string(),
        serde_json::json!("/tmp/b.pdf"),
    ));

    let params = &editor.node(&a).unwrap().parameters;
    assert_eq!(params.len(), 2);
    assert_eq!(params["path"], serde_json::json!("/tmp/b.pdf"));
    assert_eq!(params["encoding"], serde_json::json!("utf-8"));
}

#[test]
fn sentinel_keeps_function_tag_under_edit() {
    let mut editor = editor_with_start();
    let start_id = editor.nodes().first().unwrap().id.clone();
    editor.select(&start_id);
    editor.update_selected(NodeChange::Function("inputFile".to_string()));
    editor.update_selected(NodeChange::Label("入口".to_string()));

    let start = editor.node(&start_id).unwrap();
    assert_eq!(start.function, "start");
    assert_eq!(start.label, "入口");
}

#[test]
fn ids_stay_unique_after_delete() {
    let mut editor = editor_with_start();
    let a = editor.add_node("inputFile");
    editor.delete_node(&a);
    let b = editor.add_node("summarize");

    assert_ne!(a, b, "deleting must not recycle ids");
    let snapshot = editor.serialize();
    let mut ids: Vec<_> = snapshot.nodes.iter().map(|n| n.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), snapshot.nodes.len());
}

#[test]
fn remove_last_node_pops_newest_and_its_edges() {
    let mut editor = editor_with_start();
    let a = editor.add_node("inputFile");
    let b = editor.add_node("summarize");

    editor.remove_last_node();

    let snapshot = editor.serialize();
    assert!(snapshot.nodes.iter().all(|n| n.id != b));
    assert!(snapshot.edges.iter().all(|e| e.source != b && e.target != b));
    assert!(snapshot.nodes.iter().any(|n| n.id == a));
}

#[test]
fn remove_last_node_never_removes_sentinels() {
    let mut editor = editor_with_start();
    editor.remove_last_node();
    assert_eq!(editor.nodes().len(), 1);
}

#[test]
fn append_end_node_chains_from_last() {
    let mut editor = editor_with_start();
    let a = editor.add_node("inputFile");
    let end = editor.append_end_node();

    assert_eq!(editor.node(&end).unwrap().function, "end");
    assert!(editor.edges().iter().any(|e| e.source == a && e.target == end));

    // Later adds splice in front of the appended terminal.
    let b = editor.add_node("summarize");
    assert_single_path(&editor.serialize());
    assert!(editor.edges().iter().any(|e| e.source == b && e.target == end));
}

#[test]
fn reset_restores_initial_elements() {
    let mut editor = editor_with_sentinels();
    editor.add_node("inputFile");
    editor.add_node("if");

    editor.reset();

    let snapshot = editor.serialize();
    assert_eq!(snapshot.nodes.len(), 2);
    assert_eq!(snapshot.edges.len(), 1);
    assert!(editor.selected_node().is_none());
}

#[test]
fn serialize_cardinality_matches_graph() {
    let mut editor = editor_with_sentinels();
    editor.add_node("inputFile");
    editor.add_node("if");
    editor.connect("1", "1");

    let snapshot = editor.serialize();
    assert_eq!(snapshot.nodes.len(), editor.nodes().len());
    assert_eq!(snapshot.edges.len(), editor.edges().len());
}

#[test]
fn file_input_scenario_from_start_graph() {
    // Starting graph [start]; adding a ファイル入力 node yields
    // [start, fileInputNode] with edge start -> fileInputNode.
    let mut editor = editor_with_start();
    let mut palette = NodePalette::new();
    palette.open();
    palette.choose("ファイル入力");
    let created = palette.commit(&mut editor);

    assert_eq!(created.len(), 1);
    let snapshot = editor.serialize();
    assert_eq!(snapshot.nodes.len(), 2);
    assert_eq!(snapshot.nodes[0].function, "start");
    assert_eq!(snapshot.nodes[1].function, "inputFile");
    assert_eq!(snapshot.nodes[1].label, "ファイル入力");
    assert_eq!(snapshot.edges.len(), 1);
    assert_eq!(snapshot.edges[0].source, snapshot.nodes[0].id);
    assert_eq!(snapshot.edges[0].target, created[0]);
}
