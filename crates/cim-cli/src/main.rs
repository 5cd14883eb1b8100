//! CIM CLI - a focused tool for reading CIM/XML documents and inspecting
//! the profile registry's built-in primitive table.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CIM RDF toolkit command-line interface.
#[derive(Parser)]
#[command(name = "cim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format (default for TTY)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Read a CIM/XML document and report the triples it produced.
    Parse {
        /// Path to the CIM/XML document
        path: PathBuf,

        /// Reject the document on a malformed literal lexical form
        #[arg(long)]
        strict: bool,

        /// Reject untyped literals instead of falling back to xsd:string
        #[arg(long)]
        no_fallback: bool,

        /// Dump every triple in this graph (or the default graph, if
        /// omitted) to stdout as `subject predicate object .` lines
        #[arg(long)]
        dump_graph: Option<String>,

        /// Directory of CIM profile ontology files to resolve the
        /// document's declared `Model.profile` version IRIs against,
        /// reporting which profile keywords it conforms to
        #[arg(long)]
        profiles: Option<PathBuf>,
    },

    /// Inspect the profile registry.
    #[command(subcommand)]
    Profiles(ProfilesCommands),
}

/// Profile registry inspection commands.
#[derive(Subcommand)]
enum ProfilesCommands {
    /// List the built-in primitive-to-datatype-IRI mappings consulted
    /// when no profile resolves a property's datatype.
    Builtins,

    /// Scan a directory of CIM profile ontology files (`.rdf`/`.owl`/`.xml`),
    /// register each as a content profile, and report the registry's total
    /// property-table size and any duplicate-registration rejections.
    Load {
        /// Directory containing ontology documents
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
    } else if !cli.quiet {
        tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
    }

    let result = match cli.command {
        Commands::Parse { path, strict, no_fallback, dump_graph, profiles } => commands::parse::run(
            &path,
            strict,
            no_fallback,
            dump_graph.as_deref(),
            profiles.as_deref(),
            cli.format,
            cli.quiet,
        ),
        Commands::Profiles(cmd) => commands::profiles::run(cmd, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
