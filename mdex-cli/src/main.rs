// Command-line interface for mdex
//
// The library is a pure in-memory transformation; this binary is the caller that owns file
// access. It reads a document, runs it through the front matter splitter and the Markdown
// round trip, and writes the result.
//
// Usage:
//  mdex <input> [--output <file>]            - Round-trip a document (default)
//  mdex roundtrip <input> [--output <file>]  - Same as above (explicit)
//  mdex header <input> [--json]              - Print the front matter
//  mdex inspect <input> [<view>]             - Print the body AST ("events" or "tree")
//
// Configuration is read from ./mdex.toml when present, or from --config <path> (accepted
// before or after the input file).
// Set RUST_LOG (e.g. RUST_LOG=mdex=trace) for diagnostics on stderr.

mod inspect;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use comrak::Arena;
use mdex::{parse_document, serialize, Document, ParseOptions};
use mdex_config::{Loader, MdexConfig};
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["roundtrip", "header", "inspect", "help"];

fn build_cli() -> Command {
    Command::new("mdex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Round-trip Markdown documents with front matter")
        .long_about(
            "mdex parses a Markdown document with optional YAML front matter and writes it\n\
            back out in a normalized form.\n\n\
            Examples:\n  \
            mdex post.md                      # Round-trip to stdout\n  \
            mdex post.md -o normalized.md     # Round-trip to a file\n  \
            mdex header post.md --json        # Front matter as JSON\n  \
            mdex inspect post.md tree         # Body AST",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdex.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("roundtrip")
                .about("Parse and re-serialize a document (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("header")
                .about("Print the front matter of a document")
                .long_about(
                    "Print the front matter of a document verbatim, or with --json as its\n\
                    attributes. Exits with status 1 when the document has no front matter.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the attributes as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the body AST of a document")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .help("View to print. Defaults to 'events'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            inspect::AVAILABLE_VIEWS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    // `mdex [--config <path>] <file>` is shorthand for `mdex roundtrip <file>`
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            let names_subcommand = args[1..]
                .iter()
                .any(|arg| SUBCOMMANDS.contains(&arg.as_str()));
            let has_positional = args[1..].iter().any(|arg| !arg.starts_with('-'));
            if names_subcommand || !has_positional {
                e.exit();
            }

            let mut injected = vec![args[0].clone(), "roundtrip".to_string()];
            injected.extend_from_slice(&args[1..]);
            match cli.try_get_matches_from(&injected) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let options = ParseOptions::from(&config);

    match matches.subcommand() {
        Some(("roundtrip", sub_matches)) => {
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_roundtrip_command(input_arg(sub_matches), output, &options);
        }
        Some(("header", sub_matches)) => {
            handle_header_command(input_arg(sub_matches), sub_matches.get_flag("json"), &options);
        }
        Some(("inspect", sub_matches)) => {
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or("events");
            handle_inspect_command(input_arg(sub_matches), view, &options);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn input_arg(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or_else(|| {
            eprintln!("Error: an input file is required");
            std::process::exit(1);
        })
}

/// Handle the roundtrip command
fn handle_roundtrip_command(input: &str, output: Option<&str>, options: &ParseOptions) {
    let source = read_input(input);
    let arena = Arena::new();
    let doc = parse_or_exit(&arena, &source, options);
    let text = serialize(&doc);

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

/// Handle the header command
fn handle_header_command(input: &str, json: bool, options: &ParseOptions) {
    let source = read_input(input);
    let arena = Arena::new();
    let doc = parse_or_exit(&arena, &source, options);

    let Some(header) = doc.header.as_deref() else {
        eprintln!("No front matter in '{input}'");
        std::process::exit(1);
    };

    if !json {
        println!("{header}");
        return;
    }

    let attributes: serde_yaml::Value = doc.attributes().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let rendered = serde_json::to_string_pretty(&attributes).unwrap_or_else(|e| {
        eprintln!("Error: front matter cannot be expressed as JSON: {e}");
        std::process::exit(1);
    });
    println!("{rendered}");
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, view: &str, options: &ParseOptions) {
    let source = read_input(input);
    let arena = Arena::new();
    let doc = parse_or_exit(&arena, &source, options);

    let output = inspect::execute_view(doc.body, view).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    print!("{output}");
}

fn read_input(path: &str) -> String {
    debug!(path, "reading input");
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn parse_or_exit<'a>(
    arena: &'a Arena<comrak::nodes::AstNode<'a>>,
    source: &str,
    options: &ParseOptions,
) -> Document<'a> {
    parse_document(arena, source, options).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(explicit_path: Option<&str>) -> MdexConfig {
    let loader = Loader::new().with_optional_file("mdex.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
