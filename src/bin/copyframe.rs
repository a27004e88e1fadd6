//! Command-line interface for copyframe
//! This binary turns a plain-text copy file into a wireframe plan and prints it
//! in the requested output format.
//!
//! Usage:
//!   copyframe plan <path> [--format <format>] [--markers <markers.json>]
//!   copyframe list-formats

use clap::{Arg, Command};
use copyframe::copyframe::formats::FormatRegistry;
use copyframe::WireframePipeline;

fn main() {
    let matches = Command::new("copyframe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for sectioning marketing copy into wireframe layouts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("plan")
                .about("Section a copy file and print the wireframe")
                .arg(
                    Arg::new("path")
                        .help("Path to the copy file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'simple', 'json', 'yaml')")
                        .default_value("simple"),
                )
                .arg(
                    Arg::new("markers")
                        .long("markers")
                        .short('m')
                        .help("Optional JSON file of pre-extracted structural markers"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("plan", plan_matches)) => {
            let path = plan_matches.get_one::<String>("path").unwrap();
            let format = plan_matches.get_one::<String>("format").unwrap();
            let markers = plan_matches.get_one::<String>("markers");
            handle_plan_command(path, format, markers.map(String::as_str));
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the plan command
fn handle_plan_command(path: &str, format: &str, markers_path: Option<&str>) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let pipeline = WireframePipeline::new();
    let sections = match markers_path {
        Some(markers_path) => {
            let markers_json = std::fs::read_to_string(markers_path).unwrap_or_else(|e| {
                eprintln!("Error reading markers file: {}", e);
                std::process::exit(1);
            });
            pipeline
                .run_markers_json(&source, &markers_json)
                .unwrap_or_else(|e| {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                })
        }
        None => pipeline.run_text(&source),
    };

    let registry = FormatRegistry::with_defaults();
    let output = registry.serialize(&sections, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {name}");
            if !formatter.description().is_empty() {
                println!("    {}", formatter.description());
            }
        }
    }
}
