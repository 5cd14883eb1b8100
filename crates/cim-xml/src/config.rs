//! Parser tuning and validation knobs.

/// How strictly [`crate::reader::CimXmlReader`] treats a datatype mismatch
/// between a literal's declared profile datatype and its lexical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Accept the literal as written; datatype mismatches are not
    /// detected.
    Lenient,
    /// Reject a literal whose lexical form does not parse under its
    /// resolved datatype with [`cim_common::Error::IllegalDatatype`].
    Strict,
}

/// Tuning knobs for [`crate::reader::CimXmlReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// How strictly to validate literal lexical forms against their
    /// resolved datatype.
    pub validation: ValidationMode,
    /// When a property's datatype cannot be resolved from the profile
    /// registry or an explicit `rdf:datatype`, whether to fall back to a
    /// plain `xsd:string` literal (`true`) or reject the document with
    /// [`cim_common::Error::IllegalDatatype`] (`false`).
    pub unknown_primitive_fallback: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::Lenient,
            unknown_primitive_fallback: true,
        }
    }
}
