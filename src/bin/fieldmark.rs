//! Command-line interface for fieldmark
//! This binary is used to convert fieldmark files between representations and
//! to check them for parse diagnostics.
//!
//! Usage:
//!   fieldmark convert `<path>` [--format `<format>`]  - Re-emit a document as markup, JSON or YAML
//!   fieldmark check `<path>`                        - Report parse diagnostics, non-zero exit if any

use clap::{Arg, Command};

use fieldmark::fieldmark::ast::{Document, FieldValue};
use fieldmark::fieldmark::generating::generate_markup;
use fieldmark::fieldmark::loading::DocumentLoader;

fn main() {
    let matches = Command::new("fieldmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and converting fieldmark files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Parse a document and re-emit it in another representation")
                .arg(
                    Arg::new("path")
                        .help("Path to the fieldmark file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('markup', 'json', 'yaml')")
                        .default_value("markup"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse a document and report all collected diagnostics")
                .arg(
                    Arg::new("path")
                        .help("Path to the fieldmark file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("convert", convert_matches)) => {
            let path = convert_matches.get_one::<String>("path").unwrap();
            let format = convert_matches.get_one::<String>("format").unwrap();
            handle_convert_command(path, format);
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            handle_check_command(path);
        }
        _ => unreachable!(),
    }
}

fn load_document(path: &str) -> Document {
    match DocumentLoader::from_path(path) {
        Ok(loader) => loader.parse(),
        Err(e) => {
            eprintln!("Error reading file: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(path: &str, format: &str) {
    let doc = load_document(path);

    let output = match format {
        "markup" => Ok(generate_markup(&doc)),
        "json" => doc.to_json().map_err(|e| e.to_string()),
        "yaml" => doc.to_yaml().map_err(|e| e.to_string()),
        other => {
            eprintln!("Unknown format: {other} (expected 'markup', 'json' or 'yaml')");
            std::process::exit(1);
        }
    };

    match output {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let doc = load_document(path);

    let mut count = 0usize;
    for error in &doc.parse_errors {
        println!("document: {error}");
        count += 1;
    }
    for field in &doc.fields {
        for error in &field.parse_errors {
            println!("field '{}': {error}", field.name);
            count += 1;
        }
        for value in &field.values {
            count += report_value_errors(&field.name, value);
        }
    }

    if count == 0 {
        println!("OK: {} field(s), no diagnostics", doc.fields.len());
    } else {
        eprintln!("{count} diagnostic(s) found");
        std::process::exit(1);
    }
}

/// Print value-level diagnostics, recursing through nested sub-items.
fn report_value_errors(field_name: &str, value: &FieldValue) -> usize {
    let mut count = 0usize;
    if let Some(error) = &value.parse_error {
        println!("field '{field_name}': value '{}': {error}", value.value);
        count += 1;
    }
    for (_, sub) in &value.sub_items {
        count += report_value_errors(field_name, sub);
    }
    for sub in &value.list_sub_items {
        count += report_value_errors(field_name, sub);
    }
    count
}
