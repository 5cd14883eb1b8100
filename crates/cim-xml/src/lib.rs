//! # cim-xml
//!
//! A streaming reader for CIM/XML: RDF/XML as emitted by CIM tooling, with
//! its `FullModel`/`DifferenceModel` header conventions and its several
//! spellings of object identity (`rdf:about="#_<uuid>"`, bare UUIDs,
//! `urn:uuid:` forms) normalized on the way in.
//!
//! The reader never builds a DOM. It walks `quick_xml` pull events and
//! drives a [`sink::StreamSink`], so a caller can build a
//! [`cim_core::Dataset`] (via [`sink::DatasetSink`]), forward triples
//! directly into another store, or just count them.
//!
//! - [`reader`]: the [`reader::CimXmlReader`] state machine.
//! - [`sink`]: the [`sink::StreamSink`] callback interface and its default
//!   [`sink::DatasetSink`] implementation.
//! - [`namespaces`]: CIM schema version detection from namespace URIs.
//! - [`uuid`]: object-identity normalization.
//! - [`config`]: parser tuning and validation knobs.
//! - [`ontology_reader`]: a lenient RDF/XML reader for the separate dialect
//!   CIM profile ontology documents use, consumed by `cim-profiles`'
//!   ontology-based property extraction.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod namespaces;
pub mod ontology_reader;
pub mod reader;
pub mod sink;
pub mod uuid;

pub use config::{ParserConfig, ValidationMode};
pub use namespaces::{cim_version_for_namespace, CimVersion, MD_NS, RDF_NS};
pub use ontology_reader::read_ontology;
pub use reader::CimXmlReader;
pub use sink::{DatasetSink, StreamSink};
