//! Profile registry inspection commands.

use std::path::Path;

use anyhow::Result;
use cim_profiles::{builtin_primitives, load_profile, ProfileKind, ProfileRegistry};
use serde::Serialize;

use crate::output::{self, Format};
use crate::{OutputFormat, ProfilesCommands};

#[derive(Serialize)]
struct PrimitiveMapping {
    primitive: String,
    datatype_iri: String,
}

#[derive(Serialize)]
struct LoadRejection {
    file: String,
    reason: String,
}

#[derive(Serialize)]
struct LoadSummary {
    registered: usize,
    property_count: usize,
    rejections: Vec<LoadRejection>,
}

/// Runs a `profiles` subcommand.
pub fn run(command: ProfilesCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        ProfilesCommands::Builtins => run_builtins(format, quiet),
        ProfilesCommands::Load { dir } => run_load(&dir, format, quiet),
    }
}

/// Scans `dir` for ontology documents (`.rdf`, `.owl`, `.xml`) and registers
/// each as a content profile keyed by its file stem. A file that fails to
/// read, parse, or register is skipped and reported in the returned
/// rejection list rather than aborting the whole scan.
pub(crate) fn load_registry(dir: &Path) -> Result<(ProfileRegistry, Vec<LoadRejection>)> {
    let registry = ProfileRegistry::new();
    let mut rejections = Vec::new();

    let mut entries: Vec<_> = std::fs::read_dir(dir)?.filter_map(std::result::Result::ok).collect();
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        let is_ontology_file = matches!(
            path.extension().and_then(std::ffi::OsStr::to_str),
            Some("rdf" | "owl" | "xml")
        );
        if !path.is_file() || !is_ontology_file {
            continue;
        }

        let file_name = path.file_name().and_then(std::ffi::OsStr::to_str).unwrap_or_default().to_string();
        let keyword = path.file_stem().and_then(std::ffi::OsStr::to_str).unwrap_or(&file_name).to_string();

        let outcome = std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|xml| cim_xml::read_ontology(&xml).map_err(anyhow::Error::from))
            .and_then(|graph| {
                let profile = load_profile(graph.as_ref(), ProfileKind::Content, keyword.clone());
                registry.register(profile).map_err(anyhow::Error::from)
            });

        if let Err(e) = outcome {
            rejections.push(LoadRejection { file: file_name, reason: e.to_string() });
        }
    }

    Ok((registry, rejections))
}

/// Scans `dir` for ontology documents, registers each as a content profile,
/// and reports how many registered plus the registry's merged
/// property-table size.
fn run_load(dir: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let (registry, rejections) = load_registry(dir)?;

    let property_count: usize = registry
        .snapshot()
        .profiles()
        .iter()
        .map(|profile| profile.property_count())
        .sum();

    let summary = LoadSummary { registered: registry.len(), property_count, rejections };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
        Format::Table => {
            let items = vec![
                ("Profiles registered", summary.registered.to_string()),
                ("Merged property table size", summary.property_count.to_string()),
                ("Rejections", summary.rejections.len().to_string()),
            ];
            output::print_key_value_table(&items, fmt, quiet);
            if !quiet {
                for rejection in &summary.rejections {
                    output::error(&format!("{}: {}", rejection.file, rejection.reason));
                }
            }
        }
    }

    Ok(())
}

fn run_builtins(format: OutputFormat, quiet: bool) -> Result<()> {
    let mut mappings: Vec<PrimitiveMapping> = builtin_primitives()
        .into_iter()
        .map(|(primitive, datatype_iri)| PrimitiveMapping {
            primitive: primitive.to_string(),
            datatype_iri: datatype_iri.to_string(),
        })
        .collect();
    mappings.sort_by(|a, b| a.primitive.cmp(&b.primitive));

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&mappings)?);
            }
        }
        Format::Table => {
            if !quiet {
                let mut table = output::create_table();
                output::add_header(&mut table, &["Primitive", "Datatype IRI"]);
                for mapping in &mappings {
                    table.add_row(vec![mapping.primitive.clone(), mapping.datatype_iri.clone()]);
                }
                println!("{table}");
            }
        }
    }

    Ok(())
}
