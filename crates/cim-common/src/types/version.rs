//! The `Version` CIM primitive: a non-XSD datatype carrying a semver 2.0.0
//! value, with precedence comparison per the semver spec.

use crate::utils::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;

/// The datatype IRI emitted for `Version`-typed literals.
pub const VERSION_DATATYPE_IRI: &str = "https://semver.org/spec/v2.0.0.html";

/// A single dot-separated identifier in a pre-release or build metadata
/// string: either purely numeric, or alphanumeric.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl Identifier {
    fn parse(s: &str) -> Self {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = s.parse::<u64>() {
                return Identifier::Numeric(n);
            }
        }
        Identifier::AlphaNumeric(s.to_string())
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            // Numeric identifiers always have lower precedence than
            // alphanumeric identifiers.
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A parsed semantic version, per the `Version` CIM primitive. Build
/// metadata is stored for round-tripping the lexical form but ignored for
/// precedence, per the semver spec.
#[derive(Debug, Clone, Eq)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<Identifier>,
    build: String,
    lexical_form: String,
}

impl Version {
    /// Parses a canonical semver 2.0.0 string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalDatatype`] if the string is not a valid
    /// semver 2.0.0 version.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::IllegalDatatype(format!("not a valid semver version: {s}"));

        let (core_and_pre, build) = match s.split_once('+') {
            Some((a, b)) => (a, b.to_string()),
            None => (s, String::new()),
        };
        let (core, pre_release_str) = match core_and_pre.split_once('-') {
            Some((a, b)) => (a, Some(b)),
            None => (core_and_pre, None),
        };

        let mut parts = core.splitn(3, '.');
        let major = parts.next().ok_or_else(invalid)?;
        let minor = parts.next().ok_or_else(invalid)?;
        let patch = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        let parse_num = |s: &str| -> Result<u64> { s.parse::<u64>().map_err(|_| invalid()) };

        let pre_release = pre_release_str
            .map(|p| p.split('.').map(Identifier::parse).collect())
            .unwrap_or_default();

        Ok(Self {
            major: parse_num(major)?,
            minor: parse_num(minor)?,
            patch: parse_num(patch)?,
            pre_release,
            build,
            lexical_form: s.to_string(),
        })
    }

    /// The original lexical form this version was parsed from.
    #[must_use]
    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    /// Whether this version has a pre-release component.
    #[must_use]
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| match (self.is_pre_release(), other.is_pre_release()) {
                // Absence of pre-release has higher precedence than presence.
                (false, false) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (true, true) => self.pre_release.cmp(&other.pre_release),
            })
        // Build metadata is ignored for precedence.
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexical_form)
    }
}
