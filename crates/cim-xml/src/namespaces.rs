//! The CIM namespace table: which `cim:` namespace URI a document declares
//! identifies which CIM UML version (and therefore which header element
//! names and datatype conventions) it was generated against.

/// RDF's own namespace.
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// The CIM model-header (`md:`) namespace, constant across CIM versions.
pub const MD_NS: &str = "http://iec.ch/TC57/61970-552/ModelDescription/1#";

/// A known CIM UML version, identified by its `cim:` namespace URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CimVersion {
    /// CIM16 (IEC 61970-301 Ed.2 generation).
    Cim16,
    /// CIM17.
    Cim17,
    /// CIM18, the current IEC 61970-301 Ed.3 generation.
    Cim18,
}

impl CimVersion {
    /// The canonical `cim:` namespace URI for this version.
    #[must_use]
    pub fn namespace_uri(self) -> &'static str {
        match self {
            CimVersion::Cim16 => "http://iec.ch/TC57/2013/CIM-schema-cim16#",
            CimVersion::Cim17 => "http://iec.ch/TC57/CIM100#",
            CimVersion::Cim18 => "https://cim.ucaiug.io/ns#",
        }
    }
}

/// Identifies which [`CimVersion`] declared `namespace_uri` as its `cim:`
/// namespace, if any of the known versions did.
#[must_use]
pub fn cim_version_for_namespace(namespace_uri: &str) -> Option<CimVersion> {
    [CimVersion::Cim16, CimVersion::Cim17, CimVersion::Cim18]
        .into_iter()
        .find(|version| version.namespace_uri() == namespace_uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_cim_namespaces() {
        assert_eq!(
            cim_version_for_namespace("http://iec.ch/TC57/CIM100#"),
            Some(CimVersion::Cim17)
        );
        assert_eq!(
            cim_version_for_namespace("https://cim.ucaiug.io/ns#"),
            Some(CimVersion::Cim18)
        );
        assert_eq!(cim_version_for_namespace("http://example.org/not-cim#"), None);
    }
}
