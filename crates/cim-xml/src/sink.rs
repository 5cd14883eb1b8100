//! [`StreamSink`]: the callback interface a [`crate::reader::CimXmlReader`]
//! drives as it walks a document, decoupling triple production from
//! whatever the caller does with each triple (build a [`Dataset`], forward
//! to another store, count, log).

use cim_common::{Result, Triple};
use cim_core::{dataset, Dataset};

/// Receives the events a [`crate::reader::CimXmlReader`] emits while
/// walking a CIM/XML document, in document order.
///
/// Every method has a default no-op implementation except [`triple`][Self::triple],
/// so a sink interested only in triples can implement just that one.
pub trait StreamSink {
    /// Called once, before any other method, when the root `rdf:RDF`
    /// element is seen.
    fn start(&mut self) {}

    /// Called for every namespace declaration on the root element.
    fn prefix(&mut self, _prefix: &str, _namespace_uri: &str) {}

    /// Called if the document declares an `xml:base`.
    fn base(&mut self, _iri: &str) {}

    /// Called once the `<?iec61970-552 version="x.y"?>` processing
    /// instruction has been read, if present.
    fn set_version(&mut self, _major: u32, _minor: u32) {}

    /// Called when the reader moves between graph contexts: the default
    /// graph (`None`) and the well-known named graphs in
    /// [`cim_core::dataset`] (`FullModel`, `DifferenceModel`,
    /// `ForwardDifferences`, `ReverseDifferences`, `Preconditions`).
    fn switch_context(&mut self, _graph_name: Option<&str>) {}

    /// Called once per triple read, in the graph context most recently
    /// established by [`switch_context`][Self::switch_context].
    ///
    /// # Errors
    ///
    /// A sink may reject a triple (e.g. a validating sink checking a
    /// datatype); the reader propagates the error and aborts.
    fn triple(&mut self, triple: Triple) -> Result<()>;

    /// Called once, after every event in the document has been processed.
    ///
    /// # Errors
    ///
    /// A sink may fail finalization (e.g. a validating sink checking
    /// cross-triple invariants it could not check incrementally).
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A [`StreamSink`] that builds a [`Dataset`], placing every triple in
/// whichever graph context is active when it arrives.
#[derive(Default)]
pub struct DatasetSink {
    dataset: Dataset,
    current_graph: Option<String>,
}

impl DatasetSink {
    /// An empty sink, building an empty [`Dataset`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the sink, returning the [`Dataset`] it built.
    #[must_use]
    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }
}

impl StreamSink for DatasetSink {
    fn switch_context(&mut self, graph_name: Option<&str>) {
        self.current_graph = graph_name.map(ToString::to_string);
    }

    fn triple(&mut self, triple: Triple) -> Result<()> {
        match &self.current_graph {
            Some(name) => {
                self.dataset.graph_mut_or_create(name.clone()).add(triple)?;
            }
            None => {
                self.dataset.default_graph_mut().add(triple)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.dataset.finalize_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cim_common::Node;
    use cim_core::Graph;

    #[test]
    fn routes_triples_to_the_active_graph_context() {
        let mut sink = DatasetSink::new();
        sink.switch_context(Some(dataset::FULL_MODEL_GRAPH));
        sink.triple(Triple::new(Node::iri("http://ex/s"), Node::iri("http://ex/p"), Node::iri("http://ex/o")))
            .unwrap();
        sink.switch_context(None);
        sink.triple(Triple::new(Node::iri("http://ex/s2"), Node::iri("http://ex/p"), Node::iri("http://ex/o")))
            .unwrap();

        let dataset = sink.into_dataset();
        assert_eq!(dataset.graph(dataset::FULL_MODEL_GRAPH).unwrap().size(), 1);
        assert_eq!(dataset.default_graph().size(), 1);
    }
}
