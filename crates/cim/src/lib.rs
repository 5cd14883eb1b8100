//! # cim
//!
//! An in-memory RDF toolkit built around two triple-store implementations
//! and a streaming reader for CIM/XML (the RDF/XML dialect CIM grid-model
//! tooling emits).
//!
//! If you're new here, start with [`Dataset`] and [`CimXmlReader`]:
//! reading a document builds a [`Dataset`] whose graphs you query through
//! the [`Graph`] trait.
//!
//! ## Triple stores
//!
//! | Store | Notes |
//! | ----- | ----- |
//! | [`FastTriadicStore`] | Three hash-bucketed indices, array-to-hashed promotion per bucket |
//! | [`RoaringStore`] | Roaring-bitmap indices, parallel [`Graph::stream`] via rayon |
//!
//! [`DeltaGraph`] overlays forward/reverse triple sets onto a base graph
//! without mutating it, and [`Dataset::materialize_difference`] eagerly
//! applies a CIM difference model onto its `FullModel` graph.
//!
//! ## Quick start
//!
//! ```rust
//! use cim::{CimXmlReader, DatasetSink, StreamSink};
//!
//! let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
//!                        xmlns:cim="http://iec.ch/TC57/CIM100#">
//!   <cim:Terminal rdf:about="#_t1">
//!     <cim:IdentifiedObject.name>Terminal 1</cim:IdentifiedObject.name>
//!   </cim:Terminal>
//! </rdf:RDF>"#;
//!
//! let reader = CimXmlReader::new();
//! let mut sink = DatasetSink::new();
//! reader.read(xml, &mut sink)?;
//! let dataset = sink.into_dataset();
//! # Ok::<(), cim_common::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// Re-export the RDF term and pattern vocabulary.
pub use cim_common::{
    classify, BlankNode, Error, Literal, Node, Pattern, Result, TextDirection, Triple, TriplePattern,
    Version,
};

// Re-export the well-known datatype IRIs.
pub use cim_common::{
    RDF_DIR_LANG_STRING, RDF_LANG_STRING, UUID_DATATYPE_IRI, VERSION_DATATYPE_IRI, XSD_ANY_URI,
    XSD_BOOLEAN, XSD_DATE, XSD_DATE_TIME, XSD_DECIMAL, XSD_DURATION, XSD_FLOAT, XSD_INTEGER, XSD_STRING,
    XSD_TIME,
};

// Re-export the stores, datasets, and store configuration.
pub use cim_core::dataset::{
    ModelHeader, DIFFERENCE_MODEL_GRAPH, FORWARD_DIFFERENCES_GRAPH, FULL_MODEL_GRAPH,
    PRECONDITIONS_GRAPH, REVERSE_DIFFERENCES_GRAPH,
};
pub use cim_core::{Dataset, DeltaGraph, FastTriadicStore, Graph, RoaringStore, StoreConfig, TripleIter};

// Re-export the profile registry.
pub use cim_profiles::{
    builtin_primitives, resolve_primitive, Profile, ProfileKind, ProfileRegistry, PropertyDescriptor,
    PropertyRange, RegistrySnapshot,
};

// Re-export the CIM/XML reader.
pub use cim_xml::{
    cim_version_for_namespace, CimVersion, CimXmlReader, DatasetSink, ParserConfig, StreamSink,
    ValidationMode, MD_NS, RDF_NS,
};
