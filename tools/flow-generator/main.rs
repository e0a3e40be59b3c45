use clap::Parser;
use rand::seq::IndexedRandom;
use rand::Rng;
use renketsu::prelude::*;

/// A CLI tool to generate random flow snapshots for exercising the editor
/// and the submission client
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The number of nodes to chain between the start and end sentinels
    #[arg(short, long, default_value_t = 5)]
    nodes: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!("Generating a linear flow with {} inner node(s)...", cli.nodes);

    let mut editor = GraphEditor::builder()
        .with_start_node()
        .with_terminal_node()
        .build();

    let tags = ["inputFile", "if", "summarize"];
    for _ in 0..cli.nodes {
        let tag = tags.choose(&mut rng).copied().unwrap_or("inputFile");
        let id = editor.add_node(tag);

        // Jitter the position so the generated canvas is not a straight line.
        let jitter_x: f64 = rng.random_range(-80.0..80.0);
        if let Some(position) = editor.node(&id).map(|n| n.position) {
            editor.move_node(&id, Position::new(position.x + jitter_x, position.y));
        }

        editor.select(&id);
        match tag {
            "inputFile" => editor.update_selected(NodeChange::Parameter(
                "path".to_string(),
                serde_json::json!(format!("/data/input_{}.pdf", id)),
            )),
            "if" => editor.update_selected(NodeChange::Parameter(
                "condition".to_string(),
                serde_json::json!("length > 1000"),
            )),
            "summarize" => editor.update_selected(NodeChange::Parameter(
                "model".to_string(),
                serde_json::json!("gpt-4o-mini"),
            )),
            _ => {}
        }
        editor.clear_selection();
    }

    let snapshot = editor.serialize();
    snapshot.save(&cli.output)?;

    println!(
        "Successfully generated and saved a flow with {} node(s) and {} edge(s) to '{}'",
        snapshot.nodes.len(),
        snapshot.edges.len(),
        cli.output
    );

    Ok(())
}
