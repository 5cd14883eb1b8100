//! Normalization of CIM/XML's several `rdf:ID`/`rdf:about` UUID spellings
//! into one canonical `urn:uuid:` form.
//!
//! CIM/XML tooling has historically emitted object identity as a bare
//! UUID, as `#_<uuid>`, or as `#<uuid>` — all meaning the same RFC 4122
//! identifier. Normalizing them means two documents that assign the same
//! object the same UUID produce the same subject IRI regardless of which
//! spelling either one used.

use uuid::Uuid;

/// Normalizes a raw `rdf:about`/`rdf:ID` value to `urn:uuid:<uuid>` if its
/// content (after stripping a leading `#` and/or `_`) parses as an RFC
/// 4122 UUID; otherwise returns it unchanged.
#[must_use]
pub fn normalize_identity(raw: &str) -> String {
    let candidate = raw.strip_prefix('#').unwrap_or(raw);
    let candidate = candidate.strip_prefix('_').unwrap_or(candidate);
    let candidate = candidate.strip_prefix("urn:uuid:").unwrap_or(candidate);

    match Uuid::parse_str(candidate) {
        Ok(uuid) => format!("urn:uuid:{uuid}"),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_hash_underscore_prefixed_uuid() {
        let normalized = normalize_identity("#_f47ac10b-58cc-4372-a567-0e02b2c3d479");
        assert_eq!(normalized, "urn:uuid:f47ac10b-58cc-4372-a567-0e02b2c3d479");
    }

    #[test]
    fn normalizes_bare_uuid() {
        let normalized = normalize_identity("F47AC10B-58CC-4372-A567-0E02B2C3D479");
        assert_eq!(normalized, "urn:uuid:f47ac10b-58cc-4372-a567-0e02b2c3d479");
    }

    #[test]
    fn leaves_non_uuid_identity_untouched() {
        assert_eq!(normalize_identity("#SomeNamedResource"), "#SomeNamedResource");
    }

    #[test]
    fn idempotent_on_already_normalized_urn() {
        let once = normalize_identity("#_f47ac10b-58cc-4372-a567-0e02b2c3d479");
        let twice = normalize_identity(&once);
        assert_eq!(once, twice);
    }
}
