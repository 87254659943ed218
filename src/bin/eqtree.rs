//! eqtree command line interface
//!
//! Usage:
//!   eqtree <INPUT> [-o OUTPUT] [--format json|yaml] [--compact] [--stdout] [--on-error skip|abort]
//!
//! Reads a .txt file with one equation per line and writes the parsed
//! document next to it (input.txt becomes input.json) unless an output path
//! or --stdout is given. Skipped lines are reported on stderr; the summary
//! line goes to stdout and is suppressed under --stdout so the document
//! stays pipeable.

use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgAction, Command};

use eqtree::eqtree::processing::{
    default_output_path, process_file, serialize_document, write_output, ErrorPolicy,
    OutputFormat,
};

fn main() {
    let matches = Command::new("eqtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse equation text files into canonical expression-tree documents")
        .arg(
            Arg::new("input")
                .help("Input .txt file, one equation per line")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output path (default: the input path with the format's extension)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format: json or yaml")
                .default_value("json"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Emit compact single-line JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the document to stdout instead of writing a file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("on-error")
                .long("on-error")
                .help("What to do with unparseable lines: skip or abort")
                .default_value("skip"),
        )
        .get_matches();

    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            eprintln!("Error: no input file given");
            process::exit(1);
        });

    let format = parse_format(
        matches.get_one::<String>("format").map(String::as_str),
        matches.get_flag("compact"),
    );
    let policy = matches
        .get_one::<String>("on-error")
        .map(String::as_str)
        .map(|policy| {
            ErrorPolicy::from_string(policy).unwrap_or_else(|error| {
                eprintln!("Error: {}", error);
                process::exit(1);
            })
        })
        .unwrap_or_default();

    let report = process_file(&input, policy).unwrap_or_else(|error| {
        eprintln!("Error: {}", error);
        process::exit(1);
    });

    for skipped in &report.skipped {
        eprintln!(
            "Warning: skipped line {}: {}: {}",
            skipped.number, skipped.error, skipped.line
        );
    }

    if matches.get_flag("stdout") {
        let serialized = serialize_document(&report.document, format).unwrap_or_else(|error| {
            eprintln!("Error: {}", error);
            process::exit(1);
        });
        println!("{}", serialized);
        return;
    }

    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(&input, format));

    let written = write_output(&report.document, &output, format).unwrap_or_else(|error| {
        eprintln!("Error: {}", error);
        process::exit(1);
    });

    println!("Parsed {} equations -> {}", report.document.count, written.display());
}

fn parse_format(format: Option<&str>, compact: bool) -> OutputFormat {
    let format = format.map(OutputFormat::from_string).unwrap_or(Ok(OutputFormat::Json));
    match (format, compact) {
        (Ok(OutputFormat::Json), true) => OutputFormat::JsonCompact,
        (Ok(format), false) => format,
        (Ok(_), true) => {
            eprintln!("Error: --compact only applies to the json format");
            process::exit(1);
        }
        (Err(error), _) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}
