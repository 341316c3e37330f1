//! Command-line interface for bnd-manifest
//! This binary inspects and checks bnd files and jar manifests.
//!
//! Usage:
//!   bndmf inspect `<path>` [--format `<format>`]  - Print the tokens or the parsed tree
//!   bndmf check `<path>`                        - Report diagnostics as path:line:column: message
//!   bndmf list-formats                          - List all available processing formats

use bnd_config::{BndConfig, Loader};
use bnd_manifest::manifest::ast::SourceLocation;
use bnd_manifest::manifest::parsing::{HeaderParserRepository, ManifestParser, StandardHeaderParser};
use bnd_manifest::manifest::processor::{process_file, read_source, ProcessingSpec};
use clap::{Arg, ArgMatches, Command};
use std::sync::Arc;

fn main() {
    let matches = Command::new("bndmf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and checking bnd files and MANIFEST.MF files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the token stream or document tree of a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the bnd or manifest file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'ast-tag', 'token-simple')"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report parse diagnostics; exits with status 1 if there are any")
                .arg(
                    Arg::new("path")
                        .help("Path to the bnd or manifest file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let config = load_config(&matches);
    bnd_config::logging::initialize(&config.logging);

    match matches.subcommand() {
        Some(("inspect", inspect_matches)) => {
            let path = required(inspect_matches, "path");
            let format = inspect_matches
                .get_one::<String>("format")
                .cloned()
                .unwrap_or_else(|| config.inspect.default_format.clone());
            handle_inspect_command(&config, path, &format);
        }
        Some(("check", check_matches)) => {
            let path = required(check_matches, "path");
            handle_check_command(&config, path);
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    // clap enforces required arguments before we get here
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_config(matches: &ArgMatches) -> BndConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| fail(e))
}

fn build_repository(config: &BndConfig) -> HeaderParserRepository {
    let mut repository = if config.headers.include_builtin {
        HeaderParserRepository::with_defaults()
    } else {
        HeaderParserRepository::new(Arc::new(StandardHeaderParser))
    };
    repository.register_clause_headers(&config.headers.clause_headers);
    repository
}

/// Handle the inspect command
fn handle_inspect_command(config: &BndConfig, path: &str, format: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| fail(e));
    let repository = build_repository(config);

    let output = process_file(path, &spec, &repository).unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

/// Handle the check command
fn handle_check_command(config: &BndConfig, path: &str) {
    let source = read_source(path).unwrap_or_else(|e| fail(e));

    let parser = ManifestParser::new(Arc::new(build_repository(config)));
    let doc = parser.parse(&source);
    let location = SourceLocation::new(&source);

    let diagnostics = doc.diagnostics();
    for diagnostic in &diagnostics {
        let span = location.range_to_span(&diagnostic.range);
        println!(
            "{}:{}:{}: {}",
            path,
            span.start.line + 1,
            span.start.column + 1,
            diagnostic.message()
        );
    }

    if !diagnostics.is_empty() {
        std::process::exit(1);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for spec in ProcessingSpec::available_specs() {
        println!("  {}", spec);
    }
}
