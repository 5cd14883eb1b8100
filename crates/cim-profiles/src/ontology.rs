//! Builds a [`Profile`]'s property table from an already-parsed OWL/RDFS
//! ontology graph.
//!
//! A CIM profile is published as an OWL ontology: classes are
//! `owl:Class` individuals, and each property is either an
//! `owl:DatatypeProperty` (its range is a literal datatype, whether a plain
//! XSD IRI or a CIM primitive type class) or an `owl:ObjectProperty` (its
//! range is another class, making it an association end). This module reads
//! that triple shape directly rather than parsing OWL/XML itself — callers
//! hand it a graph already built by an RDF/XML reader for the ontology
//! dialect (`cim-xml`'s `ontology_reader` module reads the dialect CIM
//! profile documents actually use; a CIM/XML data-instance reader expects a
//! different one and should not be used here).
//!
//! Dispatch on each property follows the CIM UML stereotypes carried in the
//! `cims:` (rdf-schema-extensions) namespace: a range class stereotyped
//! `Primitive` is a direct literal; one stereotyped `CIMDatatype` wraps its
//! actual primitive in a child property labeled `value`, which this module
//! recurses into; everything else is an association, accepted unless its
//! `cims:AssociationUsed` literal says `"No"`.
//!
//! [`Profile`]: crate::profile::Profile

use crate::primitive::resolve_primitive;
use crate::profile::{Profile, ProfileKind, PropertyDescriptor, PropertyRange};
use cim_common::{Node, Triple, XSD_STRING};
use cim_core::Graph;

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
const OWL_VERSION_IRI: &str = "http://www.w3.org/2002/07/owl#versionIRI";

/// The IEC CIM RDFS schema extension namespace (`cims:`) that carries the
/// UML stereotype (`cims:stereotype`) and association-usage
/// (`cims:AssociationUsed`) annotations layered on top of plain OWL/RDFS.
const CIMS_STEREOTYPE: &str = "http://iec.ch/TC57/1999/rdf-schema-extensions-19990926#stereotype";
const CIMS_ASSOCIATION_USED: &str =
    "http://iec.ch/TC57/1999/rdf-schema-extensions-19990926#AssociationUsed";
const STEREOTYPE_PRIMITIVE: &str = "Primitive";
const STEREOTYPE_CIM_DATATYPE: &str = "CIMDatatype";
const VALUE_LABEL: &str = "value";

fn objects_of(graph: &dyn Graph, subject: &Node, predicate: &str) -> Vec<Node> {
    let pattern = Triple::new(subject.clone(), Node::iri(predicate), Node::Any);
    graph.find(&pattern).map(|t| t.object).collect()
}

fn subjects_with_type(graph: &dyn Graph, class_iri: &str) -> Vec<Node> {
    let pattern = Triple::new(Node::Any, Node::iri(RDF_TYPE), Node::iri(class_iri));
    graph.find(&pattern).map(|t| t.subject).collect()
}

/// The first literal object of `subject -> predicate`, as its lexical form.
fn literal_of(graph: &dyn Graph, subject: &Node, predicate: &str) -> Option<String> {
    objects_of(graph, subject, predicate)
        .into_iter()
        .find_map(|object| object.as_literal().map(|literal| literal.lexical_form().to_string()))
}

/// The local name after the last `#` or `/`, used to match a range class
/// IRI against the built-in CIM primitive table (`cim:Float`,
/// `cim:Integer`, ...) when the range is not itself an XSD datatype IRI.
fn local_name(iri: &str) -> &str {
    iri.rsplit(['#', '/']).next().unwrap_or(iri)
}

/// Finds `datatype_class`'s `value`-labeled `owl:DatatypeProperty` (the
/// CIM-UML convention for a `CIMDatatype` wrapper, e.g. `ActivePower.value:
/// Float`) and resolves that child's own range, recursing through
/// [`resolve_range_datatype`].
fn resolve_cim_datatype_value(graph: &dyn Graph, datatype_class: &Node) -> Option<String> {
    for value_property in subjects_with_type(graph, OWL_DATATYPE_PROPERTY) {
        let Some(domain) = objects_of(graph, &value_property, RDFS_DOMAIN).into_iter().next() else {
            continue;
        };
        if domain != *datatype_class {
            continue;
        }
        if literal_of(graph, &value_property, RDFS_LABEL).as_deref() != Some(VALUE_LABEL) {
            continue;
        }
        let Some(range) = objects_of(graph, &value_property, RDFS_RANGE).into_iter().next() else {
            continue;
        };
        return resolve_range_datatype(graph, &range);
    }
    None
}

/// Resolves a `owl:DatatypeProperty`'s range node to a datatype IRI.
///
/// An XSD datatype IRI is used verbatim. Otherwise the range class's CIM
/// stereotype decides: `CIMDatatype` recurses into its `value` child via
/// [`resolve_cim_datatype_value`]; an explicit `Primitive` stereotype looks
/// the class's local name up in the built-in primitive table, warning and
/// falling back to `xsd:string` if the name is not recognized; a range with
/// no stereotype at all is still matched against the primitive table by
/// local name (most ontologies in practice annotate the primitive classes
/// but not every property that uses them), falling back to the range IRI
/// itself if nothing matches.
fn resolve_range_datatype(graph: &dyn Graph, range: &Node) -> Option<String> {
    let range_iri = range.as_iri()?;
    if range_iri.starts_with("http://www.w3.org/2001/XMLSchema#") {
        return Some(range_iri.to_string());
    }

    match literal_of(graph, range, CIMS_STEREOTYPE).as_deref() {
        Some(STEREOTYPE_CIM_DATATYPE) => {
            resolve_cim_datatype_value(graph, range).or_else(|| Some(range_iri.to_string()))
        }
        Some(STEREOTYPE_PRIMITIVE) => Some(match resolve_primitive(local_name(range_iri)) {
            Some(datatype) => datatype.to_string(),
            None => {
                tracing::warn!(
                    primitive = %local_name(range_iri),
                    "unrecognized CIM Primitive stereotype name, falling back to xsd:string"
                );
                XSD_STRING.to_string()
            }
        }),
        _ => resolve_primitive(local_name(range_iri))
            .map(ToString::to_string)
            .or_else(|| Some(range_iri.to_string())),
    }
}

/// Builds a [`Profile`] by reading `graph` for its `owl:Ontology` subject
/// (for `versionIRI` declarations) and every `owl:DatatypeProperty`/
/// `owl:ObjectProperty` with a declared `rdfs:domain`.
///
/// Properties with no `rdfs:domain`, or a `rdfs:range` this function cannot
/// resolve to either a datatype or a class IRI, are skipped rather than
/// rejected, as is an `owl:ObjectProperty` whose `cims:AssociationUsed`
/// literal is explicitly `"No"` (an unused inverse association end); a
/// profile built this way may simply have a smaller property table than
/// the ontology's full class model.
#[must_use]
pub fn load_profile(graph: &dyn Graph, kind: ProfileKind, keyword: impl Into<String>) -> Profile {
    let ontology_subjects = subjects_with_type(graph, OWL_ONTOLOGY);
    let ontology_node = ontology_subjects.into_iter().next();
    let ontology = ontology_node.as_ref().and_then(Node::as_iri).unwrap_or_default().to_string();

    let version_iris: Vec<String> = ontology_node
        .as_ref()
        .map(|node| objects_of(graph, node, OWL_VERSION_IRI))
        .unwrap_or_default()
        .iter()
        .filter_map(Node::as_iri)
        .map(ToString::to_string)
        .collect();

    let mut profile = Profile::new(kind, ontology, keyword, version_iris);

    for (type_iri, is_datatype_property) in
        [(OWL_DATATYPE_PROPERTY, true), (OWL_OBJECT_PROPERTY, false)]
    {
        for property in subjects_with_type(graph, type_iri) {
            let Some(property_iri) = property.as_iri() else { continue };
            let Some(domain) = objects_of(graph, &property, RDFS_DOMAIN).into_iter().next() else {
                continue;
            };
            let Some(domain_iri) = domain.as_iri() else { continue };
            let Some(range) = objects_of(graph, &property, RDFS_RANGE).into_iter().next() else {
                continue;
            };

            let descriptor_range = if is_datatype_property {
                let Some(datatype_iri) = resolve_range_datatype(graph, &range) else { continue };
                PropertyRange::Datatype(datatype_iri)
            } else {
                if literal_of(graph, &property, CIMS_ASSOCIATION_USED).as_deref() == Some("No") {
                    continue;
                }
                let Some(range_iri) = range.as_iri() else { continue };
                PropertyRange::Reference(range_iri.to_string())
            };

            profile = profile.with_property(
                property_iri,
                PropertyDescriptor { owning_class: domain_iri.to_string(), range: descriptor_range },
            );
        }
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use cim_core::FastTriadicStore;

    fn add(graph: &mut dyn Graph, s: &str, p: &str, o: Node) {
        graph.add(Triple::new(Node::iri(s), Node::iri(p), o)).unwrap();
    }

    #[test]
    fn extracts_datatype_and_object_properties_with_domain_and_range() {
        let mut graph = FastTriadicStore::new();
        add(&mut graph, "http://ex/Equipment-EU/3.0", RDF_TYPE, Node::iri(OWL_ONTOLOGY));
        add(
            &mut graph,
            "http://ex/Equipment-EU/3.0",
            OWL_VERSION_IRI,
            Node::iri("http://iec.ch/TC57/ns/CIM/Equipment-EU/3.0"),
        );

        add(&mut graph, "http://ex/IdentifiedObject.name", RDF_TYPE, Node::iri(OWL_DATATYPE_PROPERTY));
        add(&mut graph, "http://ex/IdentifiedObject.name", RDFS_DOMAIN, Node::iri("http://ex/IdentifiedObject"));
        add(
            &mut graph,
            "http://ex/IdentifiedObject.name",
            RDFS_RANGE,
            Node::iri("http://www.w3.org/2001/XMLSchema#string"),
        );

        add(&mut graph, "http://ex/Terminal.ConductingEquipment", RDF_TYPE, Node::iri(OWL_OBJECT_PROPERTY));
        add(&mut graph, "http://ex/Terminal.ConductingEquipment", RDFS_DOMAIN, Node::iri("http://ex/Terminal"));
        add(
            &mut graph,
            "http://ex/Terminal.ConductingEquipment",
            RDFS_RANGE,
            Node::iri("http://ex/ConductingEquipment"),
        );

        let profile = load_profile(&graph, ProfileKind::Content, "EQ");
        assert_eq!(profile.version_iris(), &["http://iec.ch/TC57/ns/CIM/Equipment-EU/3.0".to_string()]);
        assert_eq!(profile.property_count(), 2);

        let name_property = profile.property("http://ex/IdentifiedObject.name").unwrap();
        assert_eq!(name_property.owning_class, "http://ex/IdentifiedObject");
        assert_eq!(name_property.range, PropertyRange::Datatype(cim_common::XSD_STRING.to_string()));

        let reference_property = profile.property("http://ex/Terminal.ConductingEquipment").unwrap();
        assert_eq!(reference_property.range, PropertyRange::Reference("http://ex/ConductingEquipment".to_string()));
    }

    #[test]
    fn resolves_cim_primitive_ranges_by_local_name() {
        let mut graph = FastTriadicStore::new();
        add(&mut graph, "http://ex/Terminal.sequenceNumber", RDF_TYPE, Node::iri(OWL_DATATYPE_PROPERTY));
        add(&mut graph, "http://ex/Terminal.sequenceNumber", RDFS_DOMAIN, Node::iri("http://ex/Terminal"));
        add(&mut graph, "http://ex/Terminal.sequenceNumber", RDFS_RANGE, Node::iri("http://ex/cim#Integer"));

        let profile = load_profile(&graph, ProfileKind::Content, "EQ");
        let descriptor = profile.property("http://ex/Terminal.sequenceNumber").unwrap();
        assert_eq!(descriptor.range, PropertyRange::Datatype(cim_common::XSD_INTEGER.to_string()));
    }

    #[test]
    fn properties_with_no_domain_are_skipped() {
        let mut graph = FastTriadicStore::new();
        add(&mut graph, "http://ex/Orphan.prop", RDF_TYPE, Node::iri(OWL_DATATYPE_PROPERTY));
        add(&mut graph, "http://ex/Orphan.prop", RDFS_RANGE, Node::iri("http://www.w3.org/2001/XMLSchema#string"));

        let profile = load_profile(&graph, ProfileKind::Content, "EQ");
        assert_eq!(profile.property_count(), 0);
    }

    #[test]
    fn cim_datatype_stereotype_recurses_into_its_value_child() {
        let mut graph = FastTriadicStore::new();
        // Terminal.activePower: ActivePower, a CIMDatatype wrapping Float.
        add(&mut graph, "http://ex/Terminal.activePower", RDF_TYPE, Node::iri(OWL_DATATYPE_PROPERTY));
        add(&mut graph, "http://ex/Terminal.activePower", RDFS_DOMAIN, Node::iri("http://ex/Terminal"));
        add(&mut graph, "http://ex/Terminal.activePower", RDFS_RANGE, Node::iri("http://ex/ActivePower"));
        add(
            &mut graph,
            "http://ex/ActivePower",
            CIMS_STEREOTYPE,
            Node::Literal(cim_common::Literal::plain(STEREOTYPE_CIM_DATATYPE)),
        );

        add(&mut graph, "http://ex/ActivePower.value", RDF_TYPE, Node::iri(OWL_DATATYPE_PROPERTY));
        add(&mut graph, "http://ex/ActivePower.value", RDFS_DOMAIN, Node::iri("http://ex/ActivePower"));
        add(&mut graph, "http://ex/ActivePower.value", RDFS_RANGE, Node::iri("http://ex/Float"));
        add(
            &mut graph,
            "http://ex/ActivePower.value",
            RDFS_LABEL,
            Node::Literal(cim_common::Literal::plain(VALUE_LABEL)),
        );
        add(
            &mut graph,
            "http://ex/Float",
            CIMS_STEREOTYPE,
            Node::Literal(cim_common::Literal::plain(STEREOTYPE_PRIMITIVE)),
        );

        let profile = load_profile(&graph, ProfileKind::Content, "EQ");
        let descriptor = profile.property("http://ex/Terminal.activePower").unwrap();
        assert_eq!(descriptor.range, PropertyRange::Datatype(cim_common::XSD_FLOAT.to_string()));
    }

    #[test]
    fn association_used_no_drops_the_property() {
        let mut graph = FastTriadicStore::new();
        add(&mut graph, "http://ex/Terminal.inverseEnd", RDF_TYPE, Node::iri(OWL_OBJECT_PROPERTY));
        add(&mut graph, "http://ex/Terminal.inverseEnd", RDFS_DOMAIN, Node::iri("http://ex/Terminal"));
        add(&mut graph, "http://ex/Terminal.inverseEnd", RDFS_RANGE, Node::iri("http://ex/ConductingEquipment"));
        add(
            &mut graph,
            "http://ex/Terminal.inverseEnd",
            CIMS_ASSOCIATION_USED,
            Node::Literal(cim_common::Literal::plain("No")),
        );

        let profile = load_profile(&graph, ProfileKind::Content, "EQ");
        assert_eq!(profile.property_count(), 0);
    }
}
