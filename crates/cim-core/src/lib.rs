//! # cim-core
//!
//! Triple stores, delta graphs, and datasets for the CIM RDF toolkit.
//!
//! ## Modules
//!
//! - [`graph`] - the [`graph::Graph`] trait and its store implementations
//! - [`dataset`] - named graphs and the well-known CIM difference-model
//!   graph names
//! - [`config`] - tuning knobs for the stores

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod dataset;
pub mod graph;

pub use config::StoreConfig;
pub use dataset::Dataset;
pub use graph::{DeltaGraph, FastTriadicStore, Graph, RoaringStore, TripleIter};
