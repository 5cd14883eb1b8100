//! A lenient, generic RDF/XML reader for CIM profile ontology documents.
//!
//! Ontology documents (OWL class/property declarations with `rdfs:domain`/
//! `rdfs:range`) are RDF/XML, but they are a different dialect from a CIM/XML
//! data instance: they carry no `iec61970-552` version processing
//! instruction and do not necessarily declare one of the three canonical
//! `cim:` namespaces [`crate::reader::CimXmlReader`] requires. This reader
//! walks the same `rdf:RDF` / resource-description shape with
//! [`quick_xml`], but without the CIM-specific header phases, version PI,
//! or namespace checks — it produces flat triples into a single [`Graph`].
//!
//! Only the property shapes ontology documents actually use are supported:
//! `rdf:resource` references and plain literal text content. A nested
//! resource description (striped blank node) is read recursively, as in
//! [`crate::reader`].

use cim_common::{Error, FxHashMap, Literal, Node, Result, Triple};
use cim_core::{FastTriadicStore, Graph};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader as XmlReader;

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

#[derive(Default)]
struct NamespaceMap {
    by_prefix: FxHashMap<String, String>,
}

impl NamespaceMap {
    fn declare(&mut self, prefix: &str, uri: &str) {
        self.by_prefix.insert(prefix.to_string(), uri.to_string());
    }

    fn resolve(&self, qualified_name: &str) -> (String, String) {
        match qualified_name.split_once(':') {
            Some((prefix, local)) => {
                let uri = self.by_prefix.get(prefix).cloned().unwrap_or_default();
                (uri, local.to_string())
            }
            None => (self.by_prefix.get("").cloned().unwrap_or_default(), qualified_name.to_string()),
        }
    }

    /// Resolves an `rdf:about`/`rdf:ID`/`rdf:resource` value against the
    /// default namespace: a `#Fragment` value is document-relative and, in
    /// the ontology documents this reader targets, the default `xmlns`
    /// (when declared) is the document's own namespace, so `#Fragment`
    /// becomes `{default_ns}Fragment`. A value that is already an absolute
    /// IRI, or a document with no default namespace, is returned unchanged.
    fn resolve_identity(&self, raw: &str) -> String {
        match raw.strip_prefix('#') {
            Some(fragment) => match self.by_prefix.get("") {
                Some(default_ns) => format!("{default_ns}{fragment}"),
                None => raw.to_string(),
            },
            None => raw.to_string(),
        }
    }
}

fn qualified_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn attr_value(e: &BytesStart, qualified_name: &str) -> Option<String> {
    e.attributes().flatten().find_map(|attr| {
        if String::from_utf8_lossy(attr.key.as_ref()) == qualified_name {
            Some(String::from_utf8_lossy(&attr.value).into_owned())
        } else {
            None
        }
    })
}

/// Reads `xml` as a generic RDF/XML ontology document, returning the flat
/// triple graph it describes.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if `xml` is not well-formed XML or its
/// root element is not `rdf:RDF`.
pub fn read_ontology(xml: &str) -> Result<Box<dyn Graph>> {
    let mut reader = XmlReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut graph: Box<dyn Graph> = Box::new(FastTriadicStore::new());
    let mut namespaces = NamespaceMap::default();
    let mut seen_root = false;

    loop {
        match reader.read_event().map_err(|e| Error::MalformedInput(e.to_string()))? {
            Event::Start(e) if !seen_root => {
                seen_root = true;
                if qualified_name(&e) != "rdf:RDF" {
                    return Err(Error::MalformedInput(format!(
                        "expected rdf:RDF as the root element, found {}",
                        qualified_name(&e)
                    )));
                }
                for attr in e.attributes().flatten() {
                    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                    let value = String::from_utf8_lossy(&attr.value).into_owned();
                    if let Some(prefix) = key.strip_prefix("xmlns:") {
                        namespaces.declare(prefix, &value);
                    } else if key == "xmlns" {
                        namespaces.declare("", &value);
                    }
                }
                read_resources(&mut reader, &namespaces, graph.as_mut())?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(graph)
}

fn read_resources(reader: &mut XmlReader<&[u8]>, namespaces: &NamespaceMap, graph: &mut dyn Graph) -> Result<()> {
    loop {
        match reader.read_event().map_err(|e| Error::MalformedInput(e.to_string()))? {
            Event::Start(e) => {
                let (ns, local) = namespaces.resolve(&qualified_name(&e));
                read_resource(reader, namespaces, graph, &e, &ns, &local)?;
            }
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(Error::MalformedInput("unterminated rdf:RDF".to_string())),
            _ => {}
        }
    }
}

fn read_resource(
    reader: &mut XmlReader<&[u8]>,
    namespaces: &NamespaceMap,
    graph: &mut dyn Graph,
    start: &BytesStart,
    class_ns: &str,
    class_local: &str,
) -> Result<Node> {
    let subject = if let Some(about) = attr_value(start, "rdf:about") {
        Node::iri(namespaces.resolve_identity(&about))
    } else if let Some(id) = attr_value(start, "rdf:ID") {
        Node::iri(namespaces.resolve_identity(&format!("#{id}")))
    } else {
        Node::blank(format!("genid-{:p}", std::ptr::from_ref(start)))
    };

    graph.add(Triple::new(subject.clone(), Node::iri(RDF_TYPE), Node::iri(format!("{class_ns}{class_local}"))))?;

    loop {
        match reader.read_event().map_err(|e| Error::MalformedInput(e.to_string()))? {
            Event::Start(property_start) => {
                read_property(reader, namespaces, graph, &property_start, &subject)?;
            }
            Event::End(_) => return Ok(subject),
            Event::Eof => return Err(Error::MalformedInput("unterminated resource description".to_string())),
            _ => {}
        }
    }
}

fn read_property(
    reader: &mut XmlReader<&[u8]>,
    namespaces: &NamespaceMap,
    graph: &mut dyn Graph,
    start: &BytesStart,
    subject: &Node,
) -> Result<()> {
    let (ns, local) = namespaces.resolve(&qualified_name(start));
    let predicate_iri = format!("{ns}{local}");

    if let Some(resource) = attr_value(start, "rdf:resource") {
        consume_to_end(reader)?;
        let object = Node::iri(namespaces.resolve_identity(&resource));
        graph.add(Triple::new(subject.clone(), Node::iri(predicate_iri), object))?;
        return Ok(());
    }

    let mut text = String::new();
    loop {
        match reader.read_event().map_err(|e| Error::MalformedInput(e.to_string()))? {
            Event::Text(t) => {
                text.push_str(&t.unescape().map_err(|e| Error::MalformedInput(e.to_string()))?);
            }
            Event::Start(nested) => {
                let (nested_ns, nested_local) = namespaces.resolve(&qualified_name(&nested));
                let nested_subject = read_resource(reader, namespaces, graph, &nested, &nested_ns, &nested_local)?;
                graph.add(Triple::new(subject.clone(), Node::iri(predicate_iri.clone()), nested_subject))?;
                consume_to_end(reader)?;
                return Ok(());
            }
            Event::End(_) => break,
            Event::Eof => return Err(Error::MalformedInput("unterminated property element".to_string())),
            _ => {}
        }
    }

    if text.is_empty() {
        return Ok(());
    }
    let literal = Literal::new(text, None::<String>, None::<String>, None)?;
    graph.add(Triple::new(subject.clone(), Node::iri(predicate_iri), Node::Literal(literal)))?;
    Ok(())
}

fn consume_to_end(reader: &mut XmlReader<&[u8]>) -> Result<()> {
    let mut depth = 0;
    loop {
        match reader.read_event().map_err(|e| Error::MalformedInput(e.to_string()))? {
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return Ok(()),
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(Error::MalformedInput("unterminated element".to_string())),
            _ => {}
        }
    }
}


    #[test]
    fn rejects_a_root_element_that_is_not_rdf_rdf() {
        let err = read_ontology("<owl:Ontology xmlns:owl=\"http://www.w3.org/2002/07/owl#\"/>").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }
}
