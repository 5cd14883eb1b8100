//! Core RDF value types for the CIM RDF toolkit.
//!
//! This module contains every value type shared by the stores, the profile
//! registry, and the CIM/XML reader:
//!
//! - [`Node`] / [`BlankNode`] / [`Literal`] - the RDF term model
//! - [`Triple`] / [`TriplePattern`] - the (subject, predicate, object) model
//! - [`Pattern`] - the eight-way match classification
//! - [`Version`] - the `Version` CIM primitive datatype (semver 2.0.0)

mod datatypes;
mod literal;
mod node;
mod pattern;
mod triple;
mod version;

pub use datatypes::{
    UUID_DATATYPE_IRI, XSD_ANY_URI, XSD_BASE64_BINARY, XSD_BOOLEAN, XSD_BYTE, XSD_DATE,
    XSD_DATE_TIME, XSD_DATE_TIME_STAMP, XSD_DAY, XSD_DAY_TIME_DURATION, XSD_DECIMAL, XSD_DOUBLE,
    XSD_DURATION, XSD_FLOAT, XSD_HEX_BINARY, XSD_INT, XSD_INTEGER, XSD_LONG, XSD_MONTH,
    XSD_MONTH_DAY, XSD_NEGATIVE_INTEGER, XSD_NON_NEGATIVE_INTEGER, XSD_NON_POSITIVE_INTEGER,
    XSD_POSITIVE_INTEGER, XSD_TIME, XSD_UNSIGNED_BYTE, XSD_UNSIGNED_INT, XSD_UNSIGNED_LONG,
    XSD_UNSIGNED_SHORT, XSD_YEAR, XSD_YEAR_MONTH, XSD_YEAR_MONTH_DURATION,
};
pub use literal::{Literal, TextDirection, RDF_DIR_LANG_STRING, RDF_LANG_STRING, XSD_STRING};
pub use node::{BlankNode, Node};
pub use pattern::{classify, Pattern};
pub use triple::{Triple, TriplePattern};
pub use version::{Version, VERSION_DATATYPE_IRI};
