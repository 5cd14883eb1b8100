//! RDF literal terms.

use crate::utils::error::{Error, Result};
use std::sync::Arc;

/// `xsd:string` - the implicit datatype of a literal with no declared
/// datatype and no language tag.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// `rdf:langString` - the datatype of a language-tagged literal with no
/// text direction.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// `rdf:dirLangString` - the datatype of a language-tagged literal that
/// also carries a base text direction.
pub const RDF_DIR_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#dirLangString";

/// Base text direction of a directional language-tagged literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

/// An RDF literal: a lexical form plus a datatype IRI and, for
/// language-tagged literals, a language tag and optional base direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    lex: Arc<str>,
    datatype_iri: Arc<str>,
    lang: Option<Arc<str>>,
    text_dir: Option<TextDirection>,
}

impl Literal {
    /// Builds a literal from its raw constituents, applying the language/
    /// datatype coercion invariants:
    ///
    /// - a language tag without an explicit language-string datatype
    ///   coerces the datatype to `rdf:langString` (or `rdf:dirLangString` if
    ///   `text_dir` is set);
    /// - a text direction requires a non-empty language tag;
    /// - a literal with no datatype and no language tag is `xsd:string`.
    pub fn new(
        lex: impl Into<Arc<str>>,
        datatype_iri: Option<impl Into<Arc<str>>>,
        lang: Option<impl Into<Arc<str>>>,
        text_dir: Option<TextDirection>,
    ) -> Result<Self> {
        let lang = lang.map(Into::into);

        if text_dir.is_some() && lang.as_deref().is_none_or(str::is_empty) {
            return Err(Error::IllegalArgument(
                "a literal with a text direction must carry a non-empty language tag".to_string(),
            ));
        }

        let datatype_iri = match (&lang, text_dir) {
            (Some(_), Some(TextDirection::Ltr | TextDirection::Rtl)) => {
                Arc::<str>::from(RDF_DIR_LANG_STRING)
            }
            (Some(_), None) => Arc::<str>::from(RDF_LANG_STRING),
            (None, _) => datatype_iri
                .map(Into::into)
                .unwrap_or_else(|| Arc::<str>::from(XSD_STRING)),
        };

        Ok(Self {
            lex: lex.into(),
            datatype_iri,
            lang,
            text_dir,
        })
    }

    /// A plain `xsd:string` literal.
    #[must_use]
    pub fn plain(lex: impl Into<Arc<str>>) -> Self {
        Self {
            lex: lex.into(),
            datatype_iri: Arc::<str>::from(XSD_STRING),
            lang: None,
            text_dir: None,
        }
    }

    /// A typed literal with an explicit datatype IRI.
    #[must_use]
    pub fn typed(lex: impl Into<Arc<str>>, datatype_iri: impl Into<Arc<str>>) -> Self {
        Self {
            lex: lex.into(),
            datatype_iri: datatype_iri.into(),
            lang: None,
            text_dir: None,
        }
    }

    /// A language-tagged literal. Coerces to `rdf:dirLangString` if
    /// `text_dir` is given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalArgument`] if `text_dir` is set but `lang` is
    /// empty.
    pub fn language_tagged(
        lex: impl Into<Arc<str>>,
        lang: impl Into<Arc<str>>,
        text_dir: Option<TextDirection>,
    ) -> Result<Self> {
        Self::new(lex, None::<Arc<str>>, Some(lang), text_dir)
    }

    /// The lexical form.
    #[must_use]
    pub fn lexical_form(&self) -> &str {
        &self.lex
    }

    /// The datatype IRI.
    #[must_use]
    pub fn datatype(&self) -> &str {
        &self.datatype_iri
    }

    /// The language tag, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// The base text direction, if any.
    #[must_use]
    pub fn text_direction(&self) -> Option<TextDirection> {
        self.text_dir
    }

    /// Whether this literal's datatype is `xsd:string` (including a plain
    /// literal with no declared datatype).
    #[must_use]
    pub fn is_plain_string(&self) -> bool {
        &*self.datatype_iri == XSD_STRING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_literal_is_xsd_string() {
        let l = Literal::new("hello", None::<Arc<str>>, None::<Arc<str>>, None).unwrap();
        assert_eq!(l.datatype(), XSD_STRING);
        assert!(l.is_plain_string());
    }

    #[test]
    fn lang_without_datatype_coerces_to_lang_string() {
        let l = Literal::new("bonjour", None::<Arc<str>>, Some("fr"), None).unwrap();
        assert_eq!(l.datatype(), RDF_LANG_STRING);
        assert_eq!(l.language(), Some("fr"));
    }

    #[test]
    fn lang_with_direction_coerces_to_dir_lang_string() {
        let l = Literal::new("bonjour", None::<Arc<str>>, Some("fr"), Some(TextDirection::Ltr))
            .unwrap();
        assert_eq!(l.datatype(), RDF_DIR_LANG_STRING);
    }

    #[test]
    fn direction_without_language_is_rejected() {
        let err = Literal::new("x", None::<Arc<str>>, None::<Arc<str>>, Some(TextDirection::Rtl))
            .unwrap_err();
        assert!(matches!(err, Error::IllegalArgument(_)));
    }

    #[test]
    fn empty_lexical_form_allowed() {
        let l = Literal::plain("");
        assert_eq!(l.lexical_form(), "");
    }
}
