//! RDF nodes: the union of IRIs, blank nodes, literals, variables, quoted
//! triples, and the match wildcard.

use super::literal::Literal;
use super::triple::Triple;
use std::fmt;
use std::sync::Arc;

/// An RDF blank node. Labels are opaque identifiers scoped to the document
/// or store that produced them; they are never IRIs and carry no meaning
/// outside that scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlankNode(Arc<str>);

impl BlankNode {
    /// Wraps a label as a blank node.
    #[must_use]
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self(label.into())
    }

    /// The opaque label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A tagged RDF term, plus the `Any` wildcard used in match patterns.
///
/// Two nodes are equal iff their tag and attributes are; this is the
/// default derived behavior below, since every variant's payload already
/// implements content equality (`Arc<str>` compares by value, not by
/// pointer).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// An IRI, compared codepoint-exact (no scheme normalization here).
    Iri(Arc<str>),
    /// A blank node.
    Blank(BlankNode),
    /// A literal.
    Literal(Literal),
    /// A named variable, used only in match patterns and CIM/XML templates.
    Variable(Arc<str>),
    /// An RDF 1.2 quoted triple used as a term.
    TripleTerm(Box<Triple>),
    /// The wildcard: matches any node in a [`super::Pattern`].
    Any,
}

impl Node {
    /// Builds an IRI node.
    #[must_use]
    pub fn iri(iri: impl Into<Arc<str>>) -> Self {
        Node::Iri(iri.into())
    }

    /// Builds a blank node.
    #[must_use]
    pub fn blank(label: impl Into<Arc<str>>) -> Self {
        Node::Blank(BlankNode::new(label))
    }

    /// Builds a variable node.
    #[must_use]
    pub fn variable(name: impl Into<Arc<str>>) -> Self {
        Node::Variable(name.into())
    }

    /// Builds a quoted-triple term.
    #[must_use]
    pub fn triple_term(triple: Triple) -> Self {
        Node::TripleTerm(Box::new(triple))
    }

    /// Whether this node is the `Any` wildcard.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Node::Any)
    }

    /// Whether this node is an IRI.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri(_))
    }

    /// Whether this node is a blank node.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    /// Whether this node is a literal.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// Extracts the IRI string, if this is an IRI node.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Extracts the literal, if this is a literal node.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Tests whether `self` (a concrete node, never containing `Any`)
    /// satisfies `pattern` (which may be `Any` or a concrete node).
    ///
    /// An `Any` pattern matches every node. Otherwise nodes match by value,
    /// except that a plain string literal (`xsd:string`, no language tag)
    /// matches another plain string literal with the same lexical form
    /// regardless of which constructor produced it — both already carry
    /// the canonical `xsd:string` datatype, so this falls out of ordinary
    /// equality and needs no special case here.
    #[must_use]
    pub fn matches(&self, pattern: &Node) -> bool {
        match pattern {
            Node::Any => true,
            other => self == other,
        }
    }

    /// A stable content hash, independent of `std::hash::Hash`'s hasher
    /// selection, used to build [`Triple::stable_hash`]. Two equal nodes
    /// always produce the same value, regardless of the path used to
    /// construct them.
    #[must_use]
    pub fn stable_hash(&self) -> u64 {
        fn fnv1a(bytes: &[u8]) -> u64 {
            const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
            const PRIME: u64 = 0x0000_0100_0000_01B3;
            bytes.iter().fold(OFFSET, |h, b| (h ^ u64::from(*b)).wrapping_mul(PRIME))
        }

        match self {
            Node::Iri(iri) => fnv1a(iri.as_bytes()) ^ 0x1,
            Node::Blank(b) => fnv1a(b.label().as_bytes()) ^ 0x2,
            Node::Literal(lit) => {
                let mut h = fnv1a(lit.lexical_form().as_bytes()) ^ 0x3;
                h = h.wrapping_mul(31).wrapping_add(fnv1a(lit.datatype().as_bytes()));
                if let Some(lang) = lit.language() {
                    h = h.wrapping_mul(31).wrapping_add(fnv1a(lang.as_bytes()));
                }
                h
            }
            Node::Variable(name) => fnv1a(name.as_bytes()) ^ 0x4,
            Node::TripleTerm(t) => t.stable_hash() ^ 0x5,
            Node::Any => 0x0,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::Blank(b) => write!(f, "{b}"),
            Node::Literal(lit) => {
                write!(f, "\"{}\"", lit.lexical_form())?;
                if let Some(lang) = lit.language() {
                    write!(f, "@{lang}")
                } else if !lit.is_plain_string() {
                    write!(f, "^^<{}>", lit.datatype())
                } else {
                    Ok(())
                }
            }
            Node::Variable(name) => write!(f, "?{name}"),
            Node::TripleTerm(t) => write!(f, "<<{t}>>"),
            Node::Any => write!(f, "*"),
        }
    }
}
