//! A single CIM profile: an ontology, its registration keyword, the
//! version IRIs it accepts, and the property table used to resolve
//! datatypes while reading CIM/XML.

use cim_common::FxHashMap;

/// Whether a profile describes a document header model (`FullModel`,
/// `DifferenceModel`) or substantive domain content (`Equipment`,
/// `SteadyStateHypothesis`, ...).
///
/// Header profiles are registered once per toolkit and apply to every
/// document; content profiles are registered per domain model and are
/// looked up by the `versionIRI` a document's header declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    /// A `FullModel`/`DifferenceModel` header profile.
    Header,
    /// A domain content profile.
    Content,
}

/// How a property's range resolves: to a literal datatype, or to another
/// class (making the property a reference/association end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyRange {
    /// The property's value is a literal of this datatype IRI.
    Datatype(String),
    /// The property's value is an instance of this class IRI.
    Reference(String),
}

/// One entry in a profile's property table: the class that declares the
/// property, and how its value resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// The class IRI that declares this property.
    pub owning_class: String,
    /// How the property's value resolves.
    pub range: PropertyRange,
}

/// An ontology, its keyword, the version IRIs it accepts, and its property
/// table.
#[derive(Debug, Clone)]
pub struct Profile {
    kind: ProfileKind,
    ontology: String,
    keyword: String,
    version_iris: Vec<String>,
    properties: FxHashMap<String, PropertyDescriptor>,
}

impl Profile {
    /// Builds a profile with no properties yet registered; use
    /// [`Profile::with_property`] to add its table entries.
    #[must_use]
    pub fn new(
        kind: ProfileKind,
        ontology: impl Into<String>,
        keyword: impl Into<String>,
        version_iris: Vec<String>,
    ) -> Self {
        Self {
            kind,
            ontology: ontology.into(),
            keyword: keyword.into(),
            version_iris,
            properties: FxHashMap::default(),
        }
    }

    /// Registers one property table entry, returning `self` for chaining.
    #[must_use]
    pub fn with_property(mut self, property_iri: impl Into<String>, descriptor: PropertyDescriptor) -> Self {
        self.properties.insert(property_iri.into(), descriptor);
        self
    }

    /// Whether this is a header or content profile.
    #[must_use]
    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    /// The ontology namespace IRI.
    #[must_use]
    pub fn ontology(&self) -> &str {
        &self.ontology
    }

    /// The profile's registration keyword, e.g. `"EQ"` or `"SSH"`.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The `versionIRI` values this profile is registered under.
    #[must_use]
    pub fn version_iris(&self) -> &[String] {
        &self.version_iris
    }

    /// Resolves `property_iri` to its table entry, if this profile
    /// declares it.
    #[must_use]
    pub fn property(&self, property_iri: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(property_iri)
    }

    /// The number of property table entries.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Every property table entry, keyed by property IRI.
    pub fn properties(&self) -> impl Iterator<Item = (&String, &PropertyDescriptor)> {
        self.properties.iter()
    }
}
