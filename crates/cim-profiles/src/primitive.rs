//! The built-in table of CIM primitive names to datatype IRIs, used to
//! resolve a property's literal datatype when the profile registry has no
//! more specific entry for it.

use cim_common::{
    FxHashMap, RDF_LANG_STRING, UUID_DATATYPE_IRI, VERSION_DATATYPE_IRI, XSD_ANY_URI,
    XSD_BASE64_BINARY, XSD_BOOLEAN, XSD_BYTE, XSD_DATE, XSD_DATE_TIME, XSD_DATE_TIME_STAMP,
    XSD_DAY, XSD_DAY_TIME_DURATION, XSD_DECIMAL, XSD_DOUBLE, XSD_DURATION, XSD_FLOAT,
    XSD_HEX_BINARY, XSD_INT, XSD_INTEGER, XSD_LONG, XSD_MONTH, XSD_MONTH_DAY,
    XSD_NEGATIVE_INTEGER, XSD_NON_NEGATIVE_INTEGER, XSD_NON_POSITIVE_INTEGER,
    XSD_POSITIVE_INTEGER, XSD_STRING, XSD_TIME, XSD_UNSIGNED_BYTE, XSD_UNSIGNED_INT,
    XSD_UNSIGNED_LONG, XSD_UNSIGNED_SHORT, XSD_YEAR, XSD_YEAR_MONTH, XSD_YEAR_MONTH_DURATION,
};

/// Built-in CIM primitive datatype names mapped to their XSD or
/// toolkit-specific datatype IRIs.
///
/// This is the fixed primitive-name table every CIM profile's datatype
/// properties ultimately resolve through, consulted only when a profile's
/// property table has no entry for the property being read. `UUID` and
/// `Version` have no XSD counterpart and resolve to toolkit-local IRIs;
/// `LangString` resolves to `rdf:langString` rather than an XSD IRI, since
/// it is RDF's own language-tagged string type, not XSD's.
#[must_use]
pub fn builtin_primitives() -> FxHashMap<&'static str, &'static str> {
    [
        ("Base64Binary", XSD_BASE64_BINARY),
        ("Boolean", XSD_BOOLEAN),
        ("Byte", XSD_BYTE),
        ("Date", XSD_DATE),
        ("DateTime", XSD_DATE_TIME),
        ("DateTimeStamp", XSD_DATE_TIME_STAMP),
        ("Day", XSD_DAY),
        ("DayTimeDuration", XSD_DAY_TIME_DURATION),
        ("Decimal", XSD_DECIMAL),
        ("Double", XSD_DOUBLE),
        ("Duration", XSD_DURATION),
        ("Float", XSD_FLOAT),
        ("HexBinary", XSD_HEX_BINARY),
        ("Int", XSD_INT),
        ("Integer", XSD_INTEGER),
        ("LangString", RDF_LANG_STRING),
        ("Long", XSD_LONG),
        ("Month", XSD_MONTH),
        ("MonthDay", XSD_MONTH_DAY),
        ("NegativeInteger", XSD_NEGATIVE_INTEGER),
        ("NonNegativeInteger", XSD_NON_NEGATIVE_INTEGER),
        ("NonPositiveInteger", XSD_NON_POSITIVE_INTEGER),
        ("PositiveInteger", XSD_POSITIVE_INTEGER),
        ("String", XSD_STRING),
        ("Time", XSD_TIME),
        ("UnsignedByte", XSD_UNSIGNED_BYTE),
        ("UnsignedInt", XSD_UNSIGNED_INT),
        ("UnsignedLong", XSD_UNSIGNED_LONG),
        ("UnsignedShort", XSD_UNSIGNED_SHORT),
        ("URI", XSD_ANY_URI),
        ("IRI", XSD_ANY_URI),
        ("UUID", UUID_DATATYPE_IRI),
        ("Version", VERSION_DATATYPE_IRI),
        ("Year", XSD_YEAR),
        ("YearMonth", XSD_YEAR_MONTH),
        ("YearMonthDuration", XSD_YEAR_MONTH_DURATION),
    ]
    .into_iter()
    .collect()
}

/// Looks up the datatype IRI for a built-in CIM primitive name.
#[must_use]
pub fn resolve_primitive(name: &str) -> Option<&'static str> {
    builtin_primitives().get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_primitives() {
        assert_eq!(resolve_primitive("Boolean"), Some(XSD_BOOLEAN));
        assert_eq!(resolve_primitive("UUID"), Some(UUID_DATATYPE_IRI));
    }

    #[test]
    fn unknown_primitive_resolves_to_none() {
        assert_eq!(resolve_primitive("NotAPrimitive"), None);
    }

    #[test]
    fn resolves_integer_subtype_and_temporal_primitives() {
        assert_eq!(resolve_primitive("PositiveInteger"), Some(XSD_POSITIVE_INTEGER));
        assert_eq!(resolve_primitive("UnsignedShort"), Some(XSD_UNSIGNED_SHORT));
        assert_eq!(resolve_primitive("YearMonthDuration"), Some(XSD_YEAR_MONTH_DURATION));
        assert_eq!(resolve_primitive("LangString"), Some(RDF_LANG_STRING));
    }
}
