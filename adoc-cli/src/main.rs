//! Command-line interface for adoc
//! This binary translates AsciiDoc source trees (as dumped to JSON by an AsciiDoc processor)
//! into render event streams and prints them.
//!
//! Usage:
//!   adoc-events `<path>` [--wiki] [--syntax `<id>`] [--format text|json] [--strict] [--config `<file>`]
//!   adoc-events -                       - Read the source tree from stdin
//!   adoc-events --list-syntaxes         - List the supported syntaxes
//!
//! Logging goes to stderr and is controlled through `RUST_LOG` (default: `warn`).

mod output;

use adoc_babel::{JsonSourceParser, PlainFragmentParser, Syntax, Translator};
use adoc_config::{AdocConfig, Loader};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("adoc-events")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints the render events of an AsciiDoc source tree")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the JSON source tree, or '-' for stdin")
                .required_unless_present("list-syntaxes")
                .index(1),
        )
        .arg(
            Arg::new("wiki")
                .long("wiki")
                .short('w')
                .help("Resolve untyped links to wiki documents instead of URLs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("syntax")
                .long("syntax")
                .short('s')
                .help("Syntax label reported in the document metadata (does not change the translation)")
                .value_parser(Syntax::ALL.map(|syntax| syntax.id())),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: text)")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on html errors in inline content instead of recovering")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-syntaxes")
                .long("list-syntaxes")
                .help("List the supported syntaxes")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging();

    if matches.get_flag("list-syntaxes") {
        handle_list_syntaxes_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing syntaxes");
    handle_translate_command(path, &config);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Layers the config file and the command line flags over the defaults
fn load_config(matches: &ArgMatches) -> Result<AdocConfig, String> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let mut overrides: Vec<(&str, String)> = Vec::new();
    if let Some(syntax) = matches.get_one::<String>("syntax") {
        overrides.push(("translate.syntax", syntax.clone()));
    }
    if let Some(format) = matches.get_one::<String>("format") {
        overrides.push(("output.format", format.clone()));
    }

    for (key, value) in overrides {
        loader = loader.set_override(key, value).map_err(|e| e.to_string())?;
    }
    if matches.get_flag("wiki") {
        loader = loader
            .set_override("translate.wiki_mode", true)
            .map_err(|e| e.to_string())?;
    }
    if matches.get_flag("strict") {
        loader = loader
            .set_override("fragment.strict", true)
            .map_err(|e| e.to_string())?;
    }

    loader.build().map_err(|e| e.to_string())
}

/// Handle the translate command
fn handle_translate_command(path: &str, config: &AdocConfig) {
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    tracing::debug!(
        path,
        syntax = %config.translate.syntax,
        format = config.output.format.as_str(),
        "translating source tree"
    );

    let html = config.fragment.html_parser();
    let events = Translator::new(&html, &PlainFragmentParser)
        .with_syntax(config.translate.syntax)
        .with_max_depth(config.translate.max_depth)
        .parse(&source, &JsonSourceParser, config.translate.wiki_mode)
        .unwrap_or_else(|e| {
            eprintln!("Translation error: {}", e);
            std::process::exit(1);
        });

    let rendered = output::render_events(&events, config.output.format).unwrap_or_else(|e| {
        eprintln!("Output error: {}", e);
        std::process::exit(1);
    });
    print!("{}", rendered);
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Handle the list-syntaxes command
fn handle_list_syntaxes_command() {
    println!("Supported syntaxes:\n");
    for syntax in Syntax::ALL {
        println!("  {} - {}", syntax.id(), syntax.name());
    }
}
