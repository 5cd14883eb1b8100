//! Datasets: a default graph plus a set of named graphs, with the
//! well-known graph names a CIM/XML difference model uses.

use crate::graph::{DeltaGraph, FastTriadicStore, Graph};
use cim_common::{FxHashMap, Node, Result, Triple};

/// Graph name for the full-model body: every asserted triple not nested in
/// a difference model.
pub const FULL_MODEL_GRAPH: &str = "urn:FullModel";
/// Graph name for a difference model's outer container.
pub const DIFFERENCE_MODEL_GRAPH: &str = "urn:DifferenceModel";
/// Graph name for the additions nested inside a difference model.
pub const FORWARD_DIFFERENCES_GRAPH: &str = "urn:ForwardDifferences";
/// Graph name for the removals nested inside a difference model.
pub const REVERSE_DIFFERENCES_GRAPH: &str = "urn:ReverseDifferences";
/// Graph name for the preconditions nested inside a difference model:
/// triples that must already hold in the base model for the difference to
/// apply validly.
pub const PRECONDITIONS_GRAPH: &str = "urn:Preconditions";

/// Metadata read from a `FullModel` or `DifferenceModel` header subject:
/// the `rdf:about` IRI and whichever header properties the document
/// declared (profile version IRIs, description, dependent models, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelHeader {
    /// The header subject's `rdf:about` IRI.
    pub about: String,
    /// `Model.profile` values: the version IRIs this model claims
    /// conformance to.
    pub profiles: Vec<String>,
    /// `Model.description`, if present.
    pub description: Option<String>,
    /// `Model.DependentOn` targets, if any.
    pub depends_on: Vec<String>,
}

impl ModelHeader {
    /// A header with no declared metadata beyond its subject IRI.
    #[must_use]
    pub fn new(about: impl Into<String>) -> Self {
        Self {
            about: about.into(),
            ..Self::default()
        }
    }
}

/// A collection of named graphs, plus an unnamed default graph.
///
/// A CIM/XML document with no difference model populates only the default
/// graph. A document with a `DifferenceModel` root populates the named
/// graphs at [`FORWARD_DIFFERENCES_GRAPH`], [`REVERSE_DIFFERENCES_GRAPH`],
/// and optionally [`PRECONDITIONS_GRAPH`], leaving the default graph for
/// whichever base model the difference targets (often populated
/// separately, since the difference model document does not itself carry
/// the full base content).
pub struct Dataset {
    default_graph: Box<dyn Graph>,
    named_graphs: FxHashMap<String, Box<dyn Graph>>,
    headers: FxHashMap<String, ModelHeader>,
}

impl Dataset {
    /// An empty dataset backed by [`FastTriadicStore`]s.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_graph: Box::new(FastTriadicStore::new()),
            named_graphs: FxHashMap::default(),
            headers: FxHashMap::default(),
        }
    }

    /// The default (unnamed) graph.
    #[must_use]
    pub fn default_graph(&self) -> &dyn Graph {
        self.default_graph.as_ref()
    }

    /// A mutable handle to the default graph.
    pub fn default_graph_mut(&mut self) -> &mut dyn Graph {
        self.default_graph.as_mut()
    }

    /// The named graph `name`, if it has been created.
    #[must_use]
    pub fn graph(&self, name: &str) -> Option<&dyn Graph> {
        self.named_graphs.get(name).map(AsRef::as_ref)
    }

    /// A mutable handle to the named graph `name`, creating it (backed by a
    /// fresh [`FastTriadicStore`]) if it does not yet exist.
    pub fn graph_mut_or_create(&mut self, name: impl Into<String>) -> &mut dyn Graph {
        self.named_graphs
            .entry(name.into())
            .or_insert_with(|| Box::new(FastTriadicStore::new()))
            .as_mut()
    }

    /// Replaces the named graph `name` with a caller-supplied
    /// implementation (e.g. a [`crate::graph::RoaringStore`]).
    pub fn set_graph(&mut self, name: impl Into<String>, graph: Box<dyn Graph>) {
        self.named_graphs.insert(name.into(), graph);
    }

    /// Whether named graph `name` has been created.
    #[must_use]
    pub fn contains_graph(&self, name: &str) -> bool {
        self.named_graphs.contains_key(name)
    }

    /// The names of every named graph currently present.
    pub fn named_graphs(&self) -> impl Iterator<Item = &str> {
        self.named_graphs.keys().map(String::as_str)
    }

    /// Alias for [`Dataset::named_graphs`], kept for callers that prefer the
    /// plural-noun name.
    pub fn graph_names(&self) -> impl Iterator<Item = &str> {
        self.named_graphs()
    }

    /// Adds a named graph, as [`Dataset::set_graph`].
    pub fn add_graph(&mut self, name: impl Into<String>, graph: Box<dyn Graph>) {
        self.set_graph(name, graph);
    }

    /// The full-model body graph ([`FULL_MODEL_GRAPH`]), if populated,
    /// falling back to the default graph (a document with no difference
    /// model writes its body there directly).
    #[must_use]
    pub fn body(&self) -> &dyn Graph {
        self.graph(FULL_MODEL_GRAPH).unwrap_or_else(|| self.default_graph())
    }

    /// The full-model header, if this dataset recorded one.
    #[must_use]
    pub fn model_header(&self) -> Option<&ModelHeader> {
        self.header(FULL_MODEL_GRAPH).or_else(|| self.header(DIFFERENCE_MODEL_GRAPH))
    }

    /// The additions graph nested in a difference model.
    #[must_use]
    pub fn forward_differences(&self) -> Option<&dyn Graph> {
        self.graph(FORWARD_DIFFERENCES_GRAPH)
    }

    /// The removals graph nested in a difference model.
    #[must_use]
    pub fn reverse_differences(&self) -> Option<&dyn Graph> {
        self.graph(REVERSE_DIFFERENCES_GRAPH)
    }

    /// The preconditions graph nested in a difference model, if the
    /// document declared one.
    #[must_use]
    pub fn preconditions(&self) -> Option<&dyn Graph> {
        self.graph(PRECONDITIONS_GRAPH)
    }

    /// Whether this dataset populated [`FULL_MODEL_GRAPH`] (or, in the
    /// common single-graph case, only the default graph with no difference
    /// model present).
    #[must_use]
    pub fn is_full_model(&self) -> bool {
        !self.is_difference_model()
    }

    /// Whether this dataset populated [`DIFFERENCE_MODEL_GRAPH`] or any of
    /// its nested difference graphs.
    #[must_use]
    pub fn is_difference_model(&self) -> bool {
        self.contains_graph(DIFFERENCE_MODEL_GRAPH)
            || self.contains_graph(FORWARD_DIFFERENCES_GRAPH)
            || self.contains_graph(REVERSE_DIFFERENCES_GRAPH)
    }

    /// Records header metadata for graph `name`.
    pub fn set_header(&mut self, name: impl Into<String>, header: ModelHeader) {
        self.headers.insert(name.into(), header);
    }

    /// The header metadata recorded for graph `name`, if any.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&ModelHeader> {
        self.headers.get(name)
    }

    /// Builds the effective difference model: every triple in
    /// [`FULL_MODEL_GRAPH`] (or the default graph, if no graph is named
    /// that), with [`FORWARD_DIFFERENCES_GRAPH`] and
    /// [`REVERSE_DIFFERENCES_GRAPH`] applied as a [`DeltaGraph`] overlay,
    /// i.e. `apply(base) = (base ∪ forward) \ reverse`.
    ///
    /// The overlay query is run through [`DeltaGraph::find`] and the result
    /// materialized into a fresh store, rather than handed back as a lazy
    /// view, since callers (the CLI, tests) generally want the synthesized
    /// full model as an ordinary addressable graph.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying store's `add`/`remove`.
    pub fn materialize_difference(&self) -> Result<FastTriadicStore> {
        let all = Triple::new(Node::Any, Node::Any, Node::Any);
        let base = self.graph(FULL_MODEL_GRAPH).unwrap_or_else(|| self.default_graph());

        let mut delta = DeltaGraph::new();
        if let Some(forward) = self.graph(FORWARD_DIFFERENCES_GRAPH) {
            for triple in forward.find(&all) {
                delta.add(triple)?;
            }
        }
        if let Some(reverse) = self.graph(REVERSE_DIFFERENCES_GRAPH) {
            for triple in reverse.find(&all) {
                delta.remove(triple)?;
            }
        }

        let mut result = FastTriadicStore::new();
        for triple in delta.find(base, &all) {
            result.add(triple)?;
        }
        Ok(result)
    }

    /// The total number of triples across the default graph and every
    /// named graph.
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.default_graph.size() + self.named_graphs.values().map(|g| g.size()).sum::<usize>()
    }

    /// Triggers [`Graph::finalize`] across every graph in this dataset in
    /// parallel, once ingestion is complete. Stores that maintain their
    /// indices incrementally (the default) see no effect; a
    /// [`crate::graph::RoaringStore`] uses the pass to compact its bitmaps.
    pub fn finalize_all(&mut self) {
        use rayon::prelude::*;

        let mut graphs: Vec<&mut Box<dyn Graph>> = self.named_graphs.values_mut().collect();
        graphs.push(&mut self.default_graph);
        graphs.par_iter_mut().for_each(|graph| graph.finalize());
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cim_common::Node;

    fn triple(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(Node::iri(s), Node::iri(p), Node::iri(o))
    }

    #[test]
    fn unnamed_graphs_start_empty_and_grow() {
        let mut dataset = Dataset::new();
        dataset
            .default_graph_mut()
            .add(triple("http://ex/s", "http://ex/p", "http://ex/o"))
            .unwrap();
        assert_eq!(dataset.default_graph().size(), 1);
    }

    #[test]
    fn materializing_a_difference_applies_forward_then_reverse() {
        let mut dataset = Dataset::new();
        dataset
            .graph_mut_or_create(FULL_MODEL_GRAPH)
            .add(triple("http://ex/s1", "http://ex/p", "http://ex/o"))
            .unwrap();
        dataset
            .graph_mut_or_create(FULL_MODEL_GRAPH)
            .add(triple("http://ex/s2", "http://ex/p", "http://ex/o"))
            .unwrap();
        dataset
            .graph_mut_or_create(FORWARD_DIFFERENCES_GRAPH)
            .add(triple("http://ex/s3", "http://ex/p", "http://ex/o"))
            .unwrap();
        dataset
            .graph_mut_or_create(REVERSE_DIFFERENCES_GRAPH)
            .add(triple("http://ex/s1", "http://ex/p", "http://ex/o"))
            .unwrap();

        let merged = dataset.materialize_difference().unwrap();
        assert_eq!(merged.size(), 2);
        let all = Triple::new(Node::Any, Node::Any, Node::Any);
        let subjects: Vec<_> = merged.find(&all).map(|t| t.subject).collect();
        assert!(subjects.contains(&Node::iri("http://ex/s2")));
        assert!(subjects.contains(&Node::iri("http://ex/s3")));
        assert!(!subjects.contains(&Node::iri("http://ex/s1")));
    }

    #[test]
    fn header_metadata_round_trips() {
        let mut dataset = Dataset::new();
        dataset.set_header(FULL_MODEL_GRAPH, ModelHeader::new("urn:uuid:abc"));
        assert_eq!(dataset.header(FULL_MODEL_GRAPH).unwrap().about, "urn:uuid:abc");
        assert!(dataset.header(DIFFERENCE_MODEL_GRAPH).is_none());
    }

    #[test]
    fn a_dataset_with_no_named_graphs_is_a_full_model_and_bodies_from_the_default_graph() {
        let mut dataset = Dataset::new();
        dataset
            .default_graph_mut()
            .add(triple("http://ex/s", "http://ex/p", "http://ex/o"))
            .unwrap();
        assert!(dataset.is_full_model());
        assert!(!dataset.is_difference_model());
        assert_eq!(dataset.body().size(), 1);
    }

    #[test]
    fn a_dataset_with_forward_differences_is_a_difference_model() {
        let mut dataset = Dataset::new();
        dataset
            .graph_mut_or_create(FORWARD_DIFFERENCES_GRAPH)
            .add(triple("http://ex/s", "http://ex/p", "http://ex/o"))
            .unwrap();
        assert!(dataset.is_difference_model());
        assert!(!dataset.is_full_model());
        assert_eq!(dataset.forward_differences().unwrap().size(), 1);
        assert!(dataset.reverse_differences().is_none());
        assert!(dataset.preconditions().is_none());
    }

    #[test]
    fn contains_graph_reflects_creation() {
        let mut dataset = Dataset::new();
        assert!(!dataset.contains_graph(FULL_MODEL_GRAPH));
        dataset.graph_mut_or_create(FULL_MODEL_GRAPH);
        assert!(dataset.contains_graph(FULL_MODEL_GRAPH));
    }

    #[test]
    fn finalize_all_reaches_every_graph_without_losing_triples() {
        use crate::graph::RoaringStore;

        let mut dataset = Dataset::new();
        dataset.default_graph_mut().add(triple("http://ex/s1", "http://ex/p", "http://ex/o")).unwrap();
        dataset.add_graph(FULL_MODEL_GRAPH, Box::new(RoaringStore::new()));
        dataset.graph_mut_or_create(FULL_MODEL_GRAPH).add(triple("http://ex/s2", "http://ex/p", "http://ex/o")).unwrap();

        dataset.finalize_all();

        assert_eq!(dataset.default_graph().size(), 1);
        assert_eq!(dataset.graph(FULL_MODEL_GRAPH).unwrap().size(), 1);
    }
}
