//! CIM/XML parsing command.

use std::path::Path;

use anyhow::Result;
use cim_common::{Node, Triple};
use cim_core::Graph;
use cim_xml::{CimXmlReader, DatasetSink, ParserConfig, ValidationMode};
use serde::Serialize;

use crate::output::{self, Format};
use crate::OutputFormat;

/// One named graph's triple count, for the summary table/JSON output.
#[derive(Serialize)]
struct NamedGraphCount {
    name: String,
    triples: usize,
}

/// A parsed document's triple counts, by graph.
#[derive(Serialize)]
struct ParseSummary {
    model_kind: &'static str,
    default_graph_triples: usize,
    named_graphs: Vec<NamedGraphCount>,
    total_triples: usize,
    profile_keywords: Vec<String>,
}

/// Runs the `parse` command: reads a CIM/XML document at `path`, reports
/// its triple counts, and optionally dumps one graph's triples.
///
/// When `profiles_dir` is given, it is scanned the same way `profiles load`
/// scans a directory, and the document's `Model.profile` version IRIs (from
/// its full-model or difference-model header) are resolved against the
/// loaded registry to report which profile keywords the document declares
/// conformance to.
pub fn run(
    path: &Path,
    strict: bool,
    no_fallback: bool,
    dump_graph: Option<&str>,
    profiles_dir: Option<&Path>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let xml = std::fs::read_to_string(path)?;

    let config = ParserConfig {
        validation: if strict { ValidationMode::Strict } else { ValidationMode::Lenient },
        unknown_primitive_fallback: !no_fallback,
    };
    let reader = CimXmlReader::new().with_config(config);
    let mut sink = DatasetSink::new();
    reader.read(&xml, &mut sink)?;
    let dataset = sink.into_dataset();

    let named_graphs: Vec<NamedGraphCount> = dataset
        .graph_names()
        .map(|name| NamedGraphCount {
            name: name.to_string(),
            triples: dataset.graph(name).map(Graph::size).unwrap_or(0),
        })
        .collect();

    let profile_keywords = match profiles_dir {
        Some(dir) => {
            let (registry, _rejections) = super::profiles::load_registry(dir)?;
            dataset
                .model_header()
                .map(|header| &header.profiles)
                .into_iter()
                .flatten()
                .filter_map(|version_iri| registry.by_version_iri(version_iri).ok())
                .map(|profile| profile.keyword().to_string())
                .collect()
        }
        None => Vec::new(),
    };

    let summary = ParseSummary {
        model_kind: if dataset.is_difference_model() { "difference" } else { "full" },
        default_graph_triples: dataset.default_graph().size(),
        total_triples: dataset.total_size(),
        named_graphs,
        profile_keywords,
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
        Format::Table => {
            let mut items = vec![
                ("Model kind", summary.model_kind.to_string()),
                ("Default graph", summary.default_graph_triples.to_string()),
                ("Total triples", summary.total_triples.to_string()),
            ];
            for graph in &summary.named_graphs {
                items.push((graph.name.as_str(), graph.triples.to_string()));
            }
            if !summary.profile_keywords.is_empty() {
                items.push(("Profiles", summary.profile_keywords.join(", ")));
            }
            output::print_key_value_table(&items, fmt, quiet);
        }
    }

    if let Some(graph_name) = dump_graph {
        let graph = dataset
            .graph(graph_name)
            .ok_or_else(|| anyhow::anyhow!("no such graph: {graph_name}"))?;
        dump_triples(graph);
    }

    Ok(())
}

fn dump_triples(graph: &dyn Graph) {
    let all = Triple::new(Node::Any, Node::Any, Node::Any);
    for triple in graph.find(&all) {
        println!("{triple} .");
    }
}
