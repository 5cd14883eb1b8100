//! # cim-common
//!
//! Foundation layer for the CIM RDF toolkit: RDF term types, pattern
//! matching, and shared utilities.
//!
//! This crate provides the fundamental building blocks used by every other
//! crate in the toolkit. It has no internal dependencies and should be kept
//! minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core RDF value types (`Node`, `Triple`, `Literal`, `Pattern`)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{
    classify, BlankNode, Literal, Node, Pattern, Triple, TriplePattern, Version,
    RDF_DIR_LANG_STRING, RDF_LANG_STRING, UUID_DATATYPE_IRI, VERSION_DATATYPE_IRI, XSD_ANY_URI,
    XSD_BASE64_BINARY, XSD_BOOLEAN, XSD_BYTE, XSD_DATE, XSD_DATE_TIME, XSD_DATE_TIME_STAMP,
    XSD_DAY, XSD_DAY_TIME_DURATION, XSD_DECIMAL, XSD_DOUBLE, XSD_DURATION, XSD_FLOAT,
    XSD_HEX_BINARY, XSD_INT, XSD_INTEGER, XSD_LONG, XSD_MONTH, XSD_MONTH_DAY,
    XSD_NEGATIVE_INTEGER, XSD_NON_NEGATIVE_INTEGER, XSD_NON_POSITIVE_INTEGER,
    XSD_POSITIVE_INTEGER, XSD_STRING, XSD_TIME, XSD_UNSIGNED_BYTE, XSD_UNSIGNED_INT,
    XSD_UNSIGNED_LONG, XSD_UNSIGNED_SHORT, XSD_YEAR, XSD_YEAR_MONTH, XSD_YEAR_MONTH_DURATION,
};
pub use utils::error::{Error, Result};
pub use utils::hash::{FxHashMap, FxHashSet};
