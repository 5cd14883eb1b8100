//! [`CimXmlReader`]: a pull-based CIM/XML state machine that drives a
//! [`StreamSink`] without materializing the whole document in memory.

use crate::config::{ParserConfig, ValidationMode};
use crate::namespaces::cim_version_for_namespace;
use crate::uuid::normalize_identity;
use cim_common::{
    Error, FxHashMap, Literal, Node, Result, Triple, XSD_BOOLEAN, XSD_DATE_TIME, XSD_DECIMAL, XSD_FLOAT,
    XSD_INTEGER,
};
use cim_core::dataset;
use cim_profiles::{ProfileRegistry, PropertyRange};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader as XmlReader;
use tracing::{trace, warn};

use crate::sink::StreamSink;

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Maps namespace prefixes (as declared by `xmlns:prefix="uri"` on the
/// document root) to their namespace URIs, and resolves a raw
/// `prefix:local` element or attribute name against that map.
#[derive(Debug, Default, Clone)]
struct NamespaceMap {
    by_prefix: FxHashMap<String, String>,
}

impl NamespaceMap {
    fn declare(&mut self, prefix: &str, uri: &str) {
        self.by_prefix.insert(prefix.to_string(), uri.to_string());
    }

    /// Splits `qualified_name` (e.g. `cim:IdentifiedObject.name`) into its
    /// resolved namespace URI and local name.
    fn resolve(&self, qualified_name: &str) -> (String, String) {
        match qualified_name.split_once(':') {
            Some((prefix, local)) => {
                let uri = self.by_prefix.get(prefix).cloned().unwrap_or_default();
                (uri, local.to_string())
            }
            None => (self.by_prefix.get("").cloned().unwrap_or_default(), qualified_name.to_string()),
        }
    }
}

fn qualified_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn attr_value(e: &BytesStart, qualified_name: &str) -> Option<String> {
    e.attributes().flatten().find_map(|attr| {
        if attr.key.as_ref() == qualified_name.as_bytes() {
            Some(String::from_utf8_lossy(&attr.value).into_owned())
        } else {
            None
        }
    })
}

/// The graph context a reader is currently emitting triples into, mirroring
/// the well-known named graphs in [`cim_core::dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Outside any `FullModel`/`DifferenceModel` header: the default
    /// graph.
    Body,
    /// Inside a `FullModel` header element.
    FullModel,
    /// Inside a `DifferenceModel` header element, outside any of its
    /// forward/reverse/precondition containers.
    DifferenceModel,
    /// Inside a `DifferenceModel`'s precondition container.
    Preconditions,
    /// Inside a `DifferenceModel`'s forward (additions) container.
    Forward,
    /// Inside a `DifferenceModel`'s reverse (removals) container.
    Reverse,
}

impl Phase {
    fn graph_name(self) -> Option<&'static str> {
        match self {
            Phase::Body => None,
            Phase::FullModel => Some(dataset::FULL_MODEL_GRAPH),
            Phase::DifferenceModel => Some(dataset::DIFFERENCE_MODEL_GRAPH),
            Phase::Preconditions => Some(dataset::PRECONDITIONS_GRAPH),
            Phase::Forward => Some(dataset::FORWARD_DIFFERENCES_GRAPH),
            Phase::Reverse => Some(dataset::REVERSE_DIFFERENCES_GRAPH),
        }
    }
}

/// A streaming reader for CIM/XML (RDF/XML with CIM's header and
/// difference-model conventions layered on top).
///
/// The reader never buffers the whole document as a DOM: it walks
/// `quick_xml` events directly and calls [`StreamSink`] once per triple,
/// so a caller can build a [`cim_core::Dataset`], forward triples straight
/// into a store, or simply count them, all at constant memory relative to
/// document size (aside from the handful of ancestor subjects a nested
/// resource element requires).
pub struct CimXmlReader<'p> {
    profiles: Option<&'p ProfileRegistry>,
    config: ParserConfig,
}

impl<'p> CimXmlReader<'p> {
    /// A reader with no profile registry: every literal falls back to
    /// `rdf:datatype`, `xml:lang`, or plain `xsd:string`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            profiles: None,
            config: ParserConfig::default(),
        }
    }

    /// A reader that resolves literal datatypes against `profiles` first,
    /// falling back to a property's explicit `rdf:datatype` when no
    /// registered profile declares it.
    #[must_use]
    pub fn with_profiles(profiles: &'p ProfileRegistry) -> Self {
        Self {
            profiles: Some(profiles),
            config: ParserConfig::default(),
        }
    }

    /// Overrides the default [`ParserConfig`].
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Reads `xml` to completion, driving `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if the document is not well-formed
    /// XML, is missing the `rdf:RDF` root, or a section is left
    /// unterminated. Propagates any error the sink itself returns.
    #[tracing::instrument(skip(self, xml, sink), fields(bytes = xml.len()))]
    pub fn read(&self, xml: &str, sink: &mut impl StreamSink) -> Result<()> {
        let mut reader = XmlReader::from_str(xml);
        reader.config_mut().trim_text(true);
        let mut namespaces = NamespaceMap::default();
        let mut seen_root = false;

        loop {
            match reader.read_event().map_err(|e| Error::MalformedInput(e.to_string()))? {
                Event::Decl(_) => {}
                Event::PI(pi) => {
                    let content = String::from_utf8_lossy(pi.as_ref()).into_owned();
                    if let Some((major, minor)) = parse_version_pi(&content) {
                        sink.set_version(major, minor);
                    }
                }
                Event::Start(e) if !seen_root => {
                    seen_root = true;
                    if qualified_name(&e) != "rdf:RDF" {
                        tracing::error!(root = %qualified_name(&e), "document root is not rdf:RDF");
                        return Err(Error::MalformedInput(format!(
                            "expected rdf:RDF as the root element, found {}",
                            qualified_name(&e)
                        )));
                    }

                    let mut saw_cim_namespace = false;
                    let mut base: Option<String> = None;
                    for attr in e.attributes().flatten() {
                        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                        let value = String::from_utf8_lossy(&attr.value).into_owned();
                        if let Some(prefix) = key.strip_prefix("xmlns:") {
                            namespaces.declare(prefix, &value);
                            sink.prefix(prefix, &value);
                            if cim_version_for_namespace(&value).is_some() {
                                saw_cim_namespace = true;
                            }
                        } else if key == "xmlns" {
                            namespaces.declare("", &value);
                        } else if key == "xml:base" {
                            sink.base(&value);
                            base = Some(value);
                        }
                    }
                    if !saw_cim_namespace {
                        tracing::error!("no recognized cim: namespace declared on the rdf:RDF root");
                        return Err(Error::MalformedInput(
                            "no recognized cim: namespace declared on the rdf:RDF root".to_string(),
                        ));
                    }

                    sink.start();
                    self.read_body(&mut reader, &namespaces, sink, base.as_deref())?;
                }
                Event::Eof => {
                    if !seen_root {
                        tracing::error!("document has no root element");
                        return Err(Error::MalformedInput("document has no root element".to_string()));
                    }
                    break;
                }
                _ => {}
            }
        }

        trace!("document fully parsed, finalizing sink");
        sink.finish()
    }

    /// Reads the children of the `rdf:RDF` root until its matching end
    /// tag, dispatching each child as a header element or a plain resource.
    fn read_body(
        &self,
        reader: &mut XmlReader<&[u8]>,
        namespaces: &NamespaceMap,
        sink: &mut impl StreamSink,
        base: Option<&str>,
    ) -> Result<()> {
        let mut seen_header = false;
        loop {
            match reader.read_event().map_err(|e| Error::MalformedInput(e.to_string()))? {
                Event::Start(e) => {
                    let (ns, local) = namespaces.resolve(&qualified_name(&e));
                    match local.as_str() {
                        "FullModel" => {
                            if seen_header {
                                tracing::error!("duplicate model header (a second FullModel/DifferenceModel element)");
                                return Err(Error::MalformedInput(
                                    "duplicate model header: only one FullModel or DifferenceModel element is allowed per document".to_string(),
                                ));
                            }
                            seen_header = true;
                            tracing::debug!(graph = dataset::FULL_MODEL_GRAPH, "entering FullModel section");
                            sink.switch_context(Some(dataset::FULL_MODEL_GRAPH));
                            self.read_resource(reader, namespaces, sink, &e, &ns, &local, Phase::FullModel, base)?;
                            sink.switch_context(None);
                        }
                        "DifferenceModel" => {
                            if seen_header {
                                tracing::error!("duplicate model header (a second FullModel/DifferenceModel element)");
                                return Err(Error::MalformedInput(
                                    "duplicate model header: only one FullModel or DifferenceModel element is allowed per document".to_string(),
                                ));
                            }
                            seen_header = true;
                            tracing::debug!(graph = dataset::DIFFERENCE_MODEL_GRAPH, "entering DifferenceModel section");
                            sink.switch_context(Some(dataset::DIFFERENCE_MODEL_GRAPH));
                            self.read_difference_model(reader, namespaces, sink, &e, &ns, &local, base)?;
                            sink.switch_context(None);
                        }
                        _ => {
                            self.read_resource(reader, namespaces, sink, &e, &ns, &local, Phase::Body, base)?;
                        }
                    }
                }
                Event::End(_) => return Ok(()),
                Event::Eof => {
                    tracing::error!("unterminated rdf:RDF element");
                    return Err(Error::MalformedInput("unterminated rdf:RDF element".to_string()))
                }
                _ => {}
            }
        }
    }

    /// Reads a `DifferenceModel` header's own properties plus its
    /// `forward`/`reverse`/`preconditions` containers.
    fn read_difference_model(
        &self,
        reader: &mut XmlReader<&[u8]>,
        namespaces: &NamespaceMap,
        sink: &mut impl StreamSink,
        start: &BytesStart,
        ns: &str,
        local: &str,
        base: Option<&str>,
    ) -> Result<()> {
        let subject = resource_subject(start, base);
        emit_type_triple(sink, &subject, ns, local)?;

        loop {
            match reader.read_event().map_err(|e| Error::MalformedInput(e.to_string()))? {
                Event::Start(e) => {
                    let (_, property_local) = namespaces.resolve(&qualified_name(&e));
                    let lower = property_local.to_ascii_lowercase();
                    let phase = if lower.contains("forward") {
                        Some(Phase::Forward)
                    } else if lower.contains("reverse") {
                        Some(Phase::Reverse)
                    } else if lower.contains("precondition") {
                        Some(Phase::Preconditions)
                    } else {
                        None
                    };

                    match phase {
                        Some(phase) => {
                            tracing::debug!(graph = ?phase.graph_name(), "entering difference-model subsection");
                            sink.switch_context(phase.graph_name());
                            self.read_statements(reader, namespaces, sink, base)?;
                            sink.switch_context(Some(dataset::DIFFERENCE_MODEL_GRAPH));
                        }
                        None => {
                            self.read_property(reader, namespaces, sink, &e, &subject, base)?;
                        }
                    }
                }
                Event::End(_) => return Ok(()),
                Event::Eof => {
                    return Err(Error::MalformedInput("unterminated DifferenceModel element".to_string()))
                }
                _ => {}
            }
        }
    }

    /// Reads a `parseType="Statements"`-style container: zero or more
    /// nested resource elements, contributed directly to the active graph
    /// context rather than as a property value.
    fn read_statements(
        &self,
        reader: &mut XmlReader<&[u8]>,
        namespaces: &NamespaceMap,
        sink: &mut impl StreamSink,
        base: Option<&str>,
    ) -> Result<()> {
        loop {
            match reader.read_event().map_err(|e| Error::MalformedInput(e.to_string()))? {
                Event::Start(e) => {
                    let (ns, local) = namespaces.resolve(&qualified_name(&e));
                    self.read_resource(reader, namespaces, sink, &e, &ns, &local, Phase::Body, base)?;
                }
                Event::End(_) => return Ok(()),
                Event::Eof => {
                    return Err(Error::MalformedInput("unterminated statements container".to_string()))
                }
                _ => {}
            }
        }
    }

    /// Reads a resource element: emits its `rdf:type` triple, then its
    /// property children, until the matching end tag.
    fn read_resource(
        &self,
        reader: &mut XmlReader<&[u8]>,
        namespaces: &NamespaceMap,
        sink: &mut impl StreamSink,
        start: &BytesStart,
        ns: &str,
        local: &str,
        _phase: Phase,
        base: Option<&str>,
    ) -> Result<Node> {
        let subject = resource_subject(start, base);
        emit_type_triple(sink, &subject, ns, local)?;

        loop {
            match reader.read_event().map_err(|e| Error::MalformedInput(e.to_string()))? {
                Event::Start(e) => {
                    self.read_property(reader, namespaces, sink, &e, &subject, base)?;
                }
                Event::End(_) => return Ok(subject),
                Event::Eof => return Err(Error::MalformedInput("unterminated resource element".to_string())),
                _ => {}
            }
        }
    }

    /// Reads one property element, emitting `(subject, predicate, object)`.
    ///
    /// The object is, in order of precedence: the IRI in `rdf:resource`;
    /// a nested resource element's subject (striped RDF/XML); or a literal
    /// built from the element's text content, whose datatype resolves, in
    /// order, via the profile registry (by property IRI), an explicit
    /// `rdf:datatype`, `xml:lang`, and finally a plain `xsd:string`
    /// fallback.
    fn read_property(
        &self,
        reader: &mut XmlReader<&[u8]>,
        namespaces: &NamespaceMap,
        sink: &mut impl StreamSink,
        start: &BytesStart,
        subject: &Node,
        base: Option<&str>,
    ) -> Result<()> {
        let (ns, local) = namespaces.resolve(&qualified_name(start));
        let predicate_iri = format!("{ns}{local}");

        if let Some(parse_type) = attr_value(start, "rdf:parseType") {
            match parse_type.as_str() {
                "Statements" => {
                    self.read_statements(reader, namespaces, sink, base)?;
                    return Ok(());
                }
                "Resource" | "Literal" | "Collection" => {}
                other => {
                    return Err(Error::MalformedInput(format!(
                        "unsupported rdf:parseType \"{other}\" on property {predicate_iri}"
                    )))
                }
            }
        }

        if let Some(resource) = attr_value(start, "rdf:resource") {
            consume_to_end(reader)?;
            let object = Node::iri(resolve_reference(&resource, base));
            sink.triple(Triple::new(subject.clone(), Node::iri(predicate_iri), object))?;
            return Ok(());
        }

        let lang = attr_value(start, "xml:lang");
        let explicit_datatype = attr_value(start, "rdf:datatype");

        let mut text = String::new();
        loop {
            match reader.read_event().map_err(|e| Error::MalformedInput(e.to_string()))? {
                Event::Text(t) => {
                    text.push_str(&t.unescape().map_err(|e| Error::MalformedInput(e.to_string()))?);
                }
                Event::Start(nested) => {
                    let (nested_ns, nested_local) = namespaces.resolve(&qualified_name(&nested));
                    let nested_subject = self.read_resource(
                        reader,
                        namespaces,
                        sink,
                        &nested,
                        &nested_ns,
                        &nested_local,
                        Phase::Body,
                        base,
                    )?;
                    sink.triple(Triple::new(
                        subject.clone(),
                        Node::iri(predicate_iri.clone()),
                        nested_subject,
                    ))?;
                    consume_to_end(reader)?;
                    return Ok(());
                }
                Event::End(_) => break,
                Event::Eof => return Err(Error::MalformedInput("unterminated property element".to_string())),
                _ => {}
            }
        }

        let datatype = self.resolve_datatype(explicit_datatype.clone(), &predicate_iri);
        if datatype.is_none() && lang.is_none() {
            if self.config.unknown_primitive_fallback {
                warn!(predicate = %predicate_iri, "no datatype resolved for property, falling back to xsd:string");
            } else {
                return Err(Error::IllegalDatatype(format!(
                    "no datatype could be resolved for property {predicate_iri}"
                )));
            }
        }

        if self.config.validation == ValidationMode::Strict {
            if let Some(datatype_iri) = &datatype {
                validate_lexical_form(&text, datatype_iri)?;
            }
        }

        let literal = if lang.is_some() {
            Literal::new(text, datatype, lang, None)?
        } else {
            Literal::new(text, datatype, None::<String>, None)?
        };
        sink.triple(Triple::new(subject.clone(), Node::iri(predicate_iri), Node::Literal(literal)))
    }

    /// Resolves `predicate_iri`'s literal datatype: the profile registry
    /// takes precedence over an explicit `rdf:datatype`, on the theory that
    /// a registered profile's property table reflects the ontology's own
    /// declared type more reliably than whatever a particular instance
    /// document happened to write.
    fn resolve_datatype(&self, explicit: Option<String>, predicate_iri: &str) -> Option<String> {
        if let Some(registry_datatype) = self.profiles.and_then(|profiles| registry_datatype_for(profiles, predicate_iri)) {
            return Some(registry_datatype);
        }
        explicit
    }
}

impl Default for CimXmlReader<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives a resource element's subject node, in precedence order:
/// `rdf:about` (resolved against `base`), `rdf:ID` (an NCName composed into
/// a `base#id` fragment per rule 4(b)), `rdf:nodeID` (a blank node, never
/// base-relative), or else a synthesized blank node for an anonymous
/// resource element.
fn resource_subject(start: &BytesStart, base: Option<&str>) -> Node {
    if let Some(about) = attr_value(start, "rdf:about") {
        return Node::iri(resolve_reference(&about, base));
    }
    if let Some(id) = attr_value(start, "rdf:ID") {
        return Node::iri(resolve_reference(&format!("#{id}"), base));
    }
    if let Some(node_id) = attr_value(start, "rdf:nodeID") {
        return Node::blank(node_id);
    }
    Node::blank(format!("genid-{:p}", std::ptr::from_ref(start)))
}

/// Resolves a raw `rdf:about`/`rdf:resource`/`rdf:ID`-derived reference
/// against `base`, then normalizes it via [`normalize_identity`]. A
/// reference that already looks absolute (a URI scheme or a `urn:` form)
/// is left as-is; everything else — most commonly a bare `#fragment` — is
/// appended to `base` when one is in scope.
fn resolve_reference(raw: &str, base: Option<&str>) -> String {
    let is_absolute = raw.contains("://") || raw.starts_with("urn:");
    let resolved = if is_absolute {
        raw.to_string()
    } else if let Some(base) = base {
        format!("{}{raw}", base.strip_suffix('#').unwrap_or(base))
    } else {
        raw.to_string()
    };
    normalize_identity(&resolved)
}

fn emit_type_triple(sink: &mut impl StreamSink, subject: &Node, ns: &str, local: &str) -> Result<()> {
    sink.triple(Triple::new(
        subject.clone(),
        Node::iri(RDF_TYPE),
        Node::iri(format!("{ns}{local}")),
    ))
}

/// Looks up `predicate_iri` across every profile currently registered,
/// returning its literal datatype IRI if some profile declares it as a
/// datatype-valued property. A predicate declared as a reference
/// (association) property resolves to `None` here; the caller already
/// tried `rdf:resource`/a nested resource element for that case.
fn registry_datatype_for(profiles: &ProfileRegistry, predicate_iri: &str) -> Option<String> {
    let snapshot = profiles.snapshot();
    snapshot.profiles().iter().find_map(|profile| match &profile.property(predicate_iri)?.range {
        PropertyRange::Datatype(iri) => Some(iri.clone()),
        PropertyRange::Reference(_) => None,
    })
}

/// A lightweight lexical-form check used only under
/// [`ValidationMode::Strict`]; it recognizes the handful of XSD primitives
/// CIM/XML actually emits and leaves everything else (including `xsd:string`
/// and any CIM-specific enumeration datatype) unchecked.
fn validate_lexical_form(text: &str, datatype_iri: &str) -> Result<()> {
    let ok = match datatype_iri {
        XSD_INTEGER => text.parse::<i64>().is_ok(),
        XSD_FLOAT | XSD_DECIMAL => text.parse::<f64>().is_ok(),
        XSD_BOOLEAN => matches!(text, "true" | "false" | "1" | "0"),
        XSD_DATE_TIME => text.len() >= "YYYY-MM-DDThh:mm:ss".len() && text.contains('T'),
        _ => true,
    };
    if ok {
        Ok(())
    } else {
        Err(Error::IllegalDatatype(format!("{text:?} is not a valid {datatype_iri} lexical form")))
    }
}

fn consume_to_end(reader: &mut XmlReader<&[u8]>) -> Result<()> {
    loop {
        match reader.read_event().map_err(|e| Error::MalformedInput(e.to_string()))? {
            Event::End(_) | Event::Eof => return Ok(()),
            _ => {}
        }
    }
}

/// Parses a `<?iec61970-552 version="x.y"?>` processing instruction's
/// content (the bytes between `<?` and `?>`, excluding the `<?iec61970-552
/// `/`?>` delimiters themselves) into a `(major, minor)` pair.
fn parse_version_pi(content: &str) -> Option<(u32, u32)> {
    if !content.trim_start().starts_with("iec61970-552") {
        return None;
    }
    let version_attr = content.split("version=").nth(1)?;
    let quote = version_attr.chars().next()?;
    let rest = &version_attr[quote.len_utf8()..];
    let end = rest.find(quote)?;
    let version = &rest[..end];
    let (major, minor) = version.split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::DatasetSink;
    use cim_core::Graph;

    fn read(xml: &str) -> cim_core::Dataset {
        let reader = CimXmlReader::new();
        let mut sink = DatasetSink::new();
        reader.read(xml, &mut sink).unwrap();
        sink.into_dataset()
    }

    #[test]
    fn parses_version_processing_instruction() {
        assert_eq!(parse_version_pi("iec61970-552 version=\"2.0\""), Some((2, 0)));
        assert_eq!(parse_version_pi("xml-stylesheet href=\"x.xsl\""), None);
    }

    #[test]
    fn reads_a_simple_resource_with_literal_and_reference_properties() {
        let xml = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:cim="http://iec.ch/TC57/CIM100#">
  <cim:Terminal rdf:about="#_t1">
    <cim:IdentifiedObject.name>Terminal 1</cim:IdentifiedObject.name>
    <cim:Terminal.ConductingEquipment rdf:resource="#_eq1"/>
  </cim:Terminal>
</rdf:RDF>"#;
        let dataset = read(xml);
        assert_eq!(dataset.default_graph().size(), 3);

        let all = Triple::new(Node::Any, Node::Any, Node::Any);
        let subjects: Vec<_> = dataset.default_graph().find(&all).map(|t| t.subject).collect();
        assert!(subjects.iter().all(|s| *s == Node::iri("urn:uuid:t1") || matches!(s, Node::Iri(_))));
    }

    #[test]
    fn routes_full_model_header_into_its_named_graph() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:md="http://iec.ch/TC57/61970-552/ModelDescription/1#" xmlns:cim="http://iec.ch/TC57/CIM100#">
  <md:FullModel rdf:about="urn:uuid:f47ac10b-58cc-4372-a567-0e02b2c3d479">
    <md:Model.description>A test model</md:Model.description>
  </md:FullModel>
</rdf:RDF>"#;
        let dataset = read(xml);
        assert_eq!(dataset.graph(dataset::FULL_MODEL_GRAPH).unwrap().size(), 2);
        assert_eq!(dataset.default_graph().size(), 0);
    }

    #[test]
    fn difference_model_routes_forward_and_reverse_statements() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:dm="http://iec.ch/TC57/61970-552/DifferenceModel/1#" xmlns:cim="http://iec.ch/TC57/CIM100#">
  <dm:DifferenceModel rdf:about="urn:uuid:f47ac10b-58cc-4372-a567-0e02b2c3d479">
    <dm:forward rdf:parseType="Statements">
      <cim:Terminal rdf:about="#_t1">
        <cim:IdentifiedObject.name>New Terminal</cim:IdentifiedObject.name>
      </cim:Terminal>
    </dm:forward>
    <dm:reverse rdf:parseType="Statements">
      <cim:Terminal rdf:about="#_t2">
        <cim:IdentifiedObject.name>Old Terminal</cim:IdentifiedObject.name>
      </cim:Terminal>
    </dm:reverse>
  </dm:DifferenceModel>
</rdf:RDF>"#;
        let dataset = read(xml);
        assert_eq!(dataset.graph(dataset::FORWARD_DIFFERENCES_GRAPH).unwrap().size(), 2);
        assert_eq!(dataset.graph(dataset::REVERSE_DIFFERENCES_GRAPH).unwrap().size(), 2);
        assert_eq!(dataset.graph(dataset::DIFFERENCE_MODEL_GRAPH).unwrap().size(), 1);
    }

    #[test]
    fn strict_validation_rejects_a_malformed_integer_literal() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:cim="http://iec.ch/TC57/CIM100#">
  <cim:Terminal rdf:about="#_t1">
    <cim:Terminal.sequenceNumber rdf:datatype="http://www.w3.org/2001/XMLSchema#integer">not-a-number</cim:Terminal.sequenceNumber>
  </cim:Terminal>
</rdf:RDF>"#;
        let reader = CimXmlReader::new().with_config(ParserConfig {
            validation: ValidationMode::Strict,
            ..ParserConfig::default()
        });
        let mut sink = DatasetSink::new();
        let err = reader.read(xml, &mut sink).unwrap_err();
        assert!(matches!(err, Error::IllegalDatatype(_)));
    }

    #[test]
    fn rejects_an_unsupported_parse_type() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:cim="http://iec.ch/TC57/CIM100#">
  <cim:Terminal rdf:about="#_t1">
    <cim:Terminal.names rdf:parseType="Collection2">oops</cim:Terminal.names>
  </cim:Terminal>
</rdf:RDF>"#;
        let mut sink = DatasetSink::new();
        let err = CimXmlReader::new().read(xml, &mut sink).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn rejects_a_document_with_no_recognized_cim_namespace() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:ex="http://example.org/ns#">
  <ex:Thing rdf:about="#_t1"/>
</rdf:RDF>"#;
        let mut sink = DatasetSink::new();
        let err = CimXmlReader::new().read(xml, &mut sink).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn rejects_a_root_element_that_is_not_rdf_rdf() {
        let xml = r#"<cim:RDF xmlns:cim="http://iec.ch/TC57/CIM100#"></cim:RDF>"#;
        let mut sink = DatasetSink::new();
        let err = CimXmlReader::new().read(xml, &mut sink).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn registry_datatype_takes_precedence_over_an_explicit_rdf_datatype() {
        use cim_profiles::{Profile, ProfileKind, PropertyDescriptor};

        let registry = ProfileRegistry::new();
        let profile = Profile::new(ProfileKind::Content, "http://iec.ch/TC57/CIM100", "EQ", vec!["http://ex/v1".to_string()])
            .with_property(
                "http://iec.ch/TC57/CIM100#Terminal.sequenceNumber",
                PropertyDescriptor {
                    owning_class: "http://iec.ch/TC57/CIM100#Terminal".to_string(),
                    range: PropertyRange::Datatype(XSD_INTEGER.to_string()),
                },
            );
        registry.register(profile).unwrap();

        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:cim="http://iec.ch/TC57/CIM100#">
  <cim:Terminal rdf:about="#_t1">
    <cim:Terminal.sequenceNumber rdf:datatype="http://www.w3.org/2001/XMLSchema#string">7</cim:Terminal.sequenceNumber>
  </cim:Terminal>
</rdf:RDF>"#;
        let reader = CimXmlReader::with_profiles(&registry);
        let mut sink = DatasetSink::new();
        reader.read(xml, &mut sink).unwrap();
        let dataset = sink.into_dataset();

        let all = Triple::new(Node::Any, Node::iri("http://iec.ch/TC57/CIM100#Terminal.sequenceNumber"), Node::Any);
        let object = dataset.default_graph().find(&all).next().unwrap().object;
        match object {
            Node::Literal(literal) => assert_eq!(literal.datatype(), XSD_INTEGER),
            other => panic!("expected a literal, got {other:?}"),
        }
    }

    #[test]
    fn rdf_id_resolves_against_xml_base() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:cim="http://iec.ch/TC57/CIM100#" xml:base="http://example.org/models/1">
  <cim:Terminal rdf:ID="t1">
    <cim:IdentifiedObject.name>Terminal 1</cim:IdentifiedObject.name>
  </cim:Terminal>
</rdf:RDF>"#;
        let dataset = read(xml);
        let all = Triple::new(Node::iri("http://example.org/models/1#t1"), Node::Any, Node::Any);
        assert_eq!(dataset.default_graph().find(&all).count(), 2);
    }

    #[test]
    fn rdf_about_fragment_resolves_against_xml_base() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:cim="http://iec.ch/TC57/CIM100#" xml:base="http://example.org/models/1#">
  <cim:Terminal rdf:about="#_t1">
    <cim:Terminal.ConductingEquipment rdf:resource="#_eq1"/>
  </cim:Terminal>
</rdf:RDF>"#;
        let dataset = read(xml);
        let all = Triple::new(Node::iri("http://example.org/models/1#_t1"), Node::Any, Node::Any);
        assert_eq!(dataset.default_graph().find(&all).count(), 2);
        let reference = Triple::new(
            Node::Any,
            Node::iri("http://iec.ch/TC57/CIM100#Terminal.ConductingEquipment"),
            Node::iri("http://example.org/models/1#_eq1"),
        );
        assert_eq!(dataset.default_graph().find(&reference).count(), 1);
    }

    #[test]
    fn disabling_unknown_primitive_fallback_rejects_untyped_literals() {
        let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:cim="http://iec.ch/TC57/CIM100#">
  <cim:Terminal rdf:about="#_t1">
    <cim:IdentifiedObject.name>Terminal 1</cim:IdentifiedObject.name>
  </cim:Terminal>
</rdf:RDF>"#;
        let reader = CimXmlReader::new().with_config(ParserConfig {
            unknown_primitive_fallback: false,
            ..ParserConfig::default()
        });
        let mut sink = DatasetSink::new();
        let err = reader.read(xml, &mut sink).unwrap_err();
        assert!(matches!(err, Error::IllegalDatatype(_)));
    }
}
