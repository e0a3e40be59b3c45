use clap::Parser;
use renketsu::prelude::*;
use std::io::{self, Write};

/// A graph editing and flow submission CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a flow snapshot JSON file
    flow_path: Option<String>,

    /// Submit the assembled request to the flow-creation endpoint
    #[arg(short, long)]
    submit: bool,

    /// Override the flow-creation endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// API endpoint name written into the assembled request
    #[arg(long, default_value = "summarizeFile")]
    api_name: String,

    /// Run in interactive 'human' mode
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.human {
        run_interactive(&cli);
    } else {
        run_non_interactive(cli);
    }
}

/// Loads a snapshot from disk, prints a summary and optionally submits it.
fn run_non_interactive(cli: Cli) {
    let flow_path = cli
        .flow_path
        .unwrap_or_else(|| exit_with_error("Flow snapshot path is required in non-interactive mode."));

    let snapshot = FlowSnapshot::from_file(&flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to load flow from '{}': {}", flow_path, e))
    });

    print_snapshot(&snapshot);

    let request = ApiFlowRequest::builder(snapshot)
        .with_endpoint(&cli.api_name)
        .build();

    if cli.submit {
        submit(&request, cli.endpoint.as_deref());
    } else {
        let json = serde_json::to_string_pretty(&request)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode request: {}", e)));
        println!("\nAssembled request (not submitted, pass --submit to send):");
        println!("{}", json);
    }
}

/// Drives one editor session from stdin prompts.
fn run_interactive(cli: &Cli) {
    println!("--- Renketsu Interactive Mode ---");
    println!("Commands: add, delete, last, end, edit, show, save, submit, reset, quit");

    let mut editor = GraphEditor::builder()
        .with_start_node()
        .with_terminal_node()
        .build();
    let mut palette = NodePalette::new();

    loop {
        let command = prompt_for_input("Command", Some("show"));
        match command.as_str() {
            "add" => {
                palette.open();
                println!("Enter labels one per line; empty line commits.");
                loop {
                    let label = prompt_for_input("Label", None);
                    if label.is_empty() {
                        break;
                    }
                    palette.choose(&label);
                }
                let created = palette.commit(&mut editor);
                println!("Created {} node(s): {}", created.len(), created.join(", "));
            }
            "delete" => {
                let id = prompt_for_input("Node id", None);
                editor.delete_node(&id);
            }
            "last" => editor.remove_last_node(),
            "end" => {
                let id = editor.append_end_node();
                println!("Appended terminal node {}", id);
            }
            "edit" => edit_node(&mut editor),
            "show" => print_snapshot(&editor.serialize()),
            "save" => {
                let path = prompt_for_input("Output path", Some("flow.json"));
                match editor.serialize().save(&path) {
                    Ok(()) => println!("Saved flow to '{}'", path),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            "submit" => {
                let request = ApiFlowRequest::builder(editor.serialize())
                    .with_endpoint(&cli.api_name)
                    .build();
                submit(&request, cli.endpoint.as_deref());
            }
            "reset" => {
                editor.reset();
                println!("Graph reset to initial elements.");
            }
            "quit" | "q" => break,
            other => println!("Unknown command '{}'.", other),
        }
    }
}

/// Prompts for the property edits of one node: label, then the primary
/// parameter its node type is configured with.
fn edit_node(editor: &mut GraphEditor) {
    let id = prompt_for_input("Node id", None);
    editor.select(&id);
    let Some(node) = editor.selected_node() else {
        println!("No node with id '{}'.", id);
        return;
    };

    let hint = editor
        .registry()
        .get(&node.function)
        .and_then(|t| t.parameter_hint.clone());

    let label = prompt_for_input("Label (empty keeps current)", Some(&node.label));
    if !label.is_empty() {
        editor.update_selected(NodeChange::Label(label));
    }

    if let Some(key) = hint {
        let value = prompt_for_input(&format!("Parameter '{}'", key), None);
        if !value.is_empty() {
            editor.update_selected(NodeChange::Parameter(key, serde_json::json!(value)));
        }
    }
    editor.clear_selection();
}

fn submit(request: &ApiFlowRequest, endpoint_override: Option<&str>) {
    let mut endpoints = Endpoints::default();
    if let Some(url) = endpoint_override {
        endpoints.create_api = url.to_string();
    }
    println!("APIエンドポイント: {}", endpoints.create_api);

    let client = FlowClient::with_endpoints(endpoints);
    // Failures become a display string, matching the inline error panel.
    match client.create_api(request) {
        Ok(result) => println!("実行結果: {}", result),
        Err(e) => eprintln!("エラー: {}", e),
    }
}

fn print_snapshot(snapshot: &FlowSnapshot) {
    println!(
        "\nFlow: {} node(s), {} edge(s)",
        snapshot.nodes.len(),
        snapshot.edges.len()
    );
    for node in &snapshot.nodes {
        println!(
            "  [{}] {} ({}) at ({}, {})",
            node.id, node.label, node.function, node.position.x, node.position.y
        );
    }
    for edge in &snapshot.edges {
        println!("  {} -> {}", edge.source, edge.target);
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
