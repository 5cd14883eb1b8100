//! [`ProfileRegistry`]: a concurrently-readable, serially-writable table
//! of registered [`Profile`]s.

use crate::primitive::builtin_primitives;
use crate::profile::{Profile, ProfileKind, PropertyDescriptor};
use cim_common::{Error, FxHashMap, Result};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

struct RegistryState {
    by_keyword: FxHashMap<String, Arc<Profile>>,
    by_version_iri: FxHashMap<String, String>,
    custom_primitives: FxHashMap<String, String>,
}

impl RegistryState {
    fn new() -> Self {
        Self {
            by_keyword: FxHashMap::default(),
            by_version_iri: FxHashMap::default(),
            custom_primitives: FxHashMap::default(),
        }
    }
}

/// A registry of [`Profile`]s, keyed by keyword and by the version IRIs
/// each profile claims.
///
/// Reads (keyword/version-IRI lookups, snapshot iteration) take a shared
/// lock and may proceed concurrently; registration takes an exclusive lock
/// and is serialized. A monotonic revision counter lets a caller iterating
/// a point-in-time snapshot detect a registration that happened underneath
/// it, the same way the registry would detect a structural change to a
/// collection mutated mid-iteration.
pub struct ProfileRegistry {
    state: RwLock<RegistryState>,
    revision: AtomicU64,
}

impl ProfileRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::new()),
            revision: AtomicU64::new(0),
        }
    }

    /// Registers `profile`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalArgument`] if `profile` is a content profile
    /// declaring no version IRIs (a header profile needs none — it applies
    /// to every document).
    ///
    /// Returns [`Error::DuplicateRegistration`] if the profile's keyword,
    /// or any of its declared version IRIs, is already claimed by a
    /// different registered profile.
    #[tracing::instrument(skip(self, profile), fields(keyword = profile.keyword(), kind = ?profile.kind()))]
    pub fn register(&self, profile: Profile) -> Result<()> {
        if profile.version_iris().is_empty() && profile.kind() != ProfileKind::Header {
            tracing::error!("content profile declares no version IRIs");
            return Err(Error::IllegalArgument(format!(
                "content profile \"{}\" declares no version IRIs",
                profile.keyword()
            )));
        }

        let mut state = self.state.write();

        if state.by_keyword.contains_key(profile.keyword()) {
            tracing::error!("profile keyword already registered");
            return Err(Error::DuplicateRegistration(format!(
                "profile keyword already registered: {}",
                profile.keyword()
            )));
        }
        for version_iri in profile.version_iris() {
            if state.by_version_iri.contains_key(version_iri) {
                tracing::error!(%version_iri, "versionIRI already claimed by another profile");
                return Err(Error::DuplicateRegistration(format!(
                    "versionIRI already claimed by another profile: {version_iri}"
                )));
            }
        }

        for version_iri in profile.version_iris() {
            state
                .by_version_iri
                .insert(version_iri.clone(), profile.keyword().to_string());
        }
        state.by_keyword.insert(profile.keyword().to_string(), Arc::new(profile));
        self.revision.fetch_add(1, Ordering::AcqRel);
        tracing::trace!("profile registered");
        Ok(())
    }

    /// Looks up a profile by its registration keyword.
    #[must_use]
    pub fn by_keyword(&self, keyword: &str) -> Option<Arc<Profile>> {
        self.state.read().by_keyword.get(keyword).cloned()
    }

    /// Looks up a profile by one of its declared `versionIRI` values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProfile`] if no registered profile declares
    /// `version_iri`.
    pub fn by_version_iri(&self, version_iri: &str) -> Result<Arc<Profile>> {
        let state = self.state.read();
        let keyword = state
            .by_version_iri
            .get(version_iri)
            .ok_or_else(|| Error::UnknownProfile(version_iri.to_string()))?;
        Ok(state.by_keyword[keyword].clone())
    }

    /// The number of registered profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().by_keyword.len()
    }

    /// Whether no profiles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A point-in-time snapshot of every registered profile.
    #[must_use]
    pub fn snapshot(&self) -> RegistrySnapshot {
        let state = self.state.read();
        RegistrySnapshot {
            profiles: state.by_keyword.values().cloned().collect(),
            revision: self.revision.load(Ordering::Acquire),
        }
    }

    /// Verifies that `snapshot` is still current, i.e. no profile has been
    /// registered since it was taken.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConcurrentModification`] if a registration
    /// happened after `snapshot` was taken.
    pub fn verify_snapshot(&self, snapshot: &RegistrySnapshot) -> Result<()> {
        if self.revision.load(Ordering::Acquire) == snapshot.revision {
            Ok(())
        } else {
            Err(Error::ConcurrentModification)
        }
    }

    /// Every registered profile, in no particular order.
    #[must_use]
    pub fn registered_profiles(&self) -> Vec<Arc<Profile>> {
        self.state.read().by_keyword.values().cloned().collect()
    }

    /// Whether some registered profile's version-IRI set is exactly
    /// `version_iris` (order-insensitive).
    #[must_use]
    pub fn contains(&self, version_iris: &[String]) -> bool {
        let state = self.state.read();
        state.by_keyword.values().any(|profile| {
            profile.version_iris().len() == version_iris.len()
                && version_iris.iter().all(|iri| profile.version_iris().contains(iri))
        })
    }

    /// Whether a registered [`ProfileKind::Header`] profile declares
    /// `version_iri`.
    #[must_use]
    pub fn contains_header_profile(&self, version_iri: &str) -> bool {
        let state = self.state.read();
        state.by_keyword.values().any(|profile| {
            profile.kind() == ProfileKind::Header && profile.version_iris().iter().any(|iri| iri == version_iri)
        })
    }

    /// The union property table of every registered content profile whose
    /// version-IRI set intersects `version_iris`.
    ///
    /// Entries are not cached across calls (the registry is a thin,
    /// infrequently-queried index, not a hot read path); a caller reading
    /// many properties from the same version-IRI set should call this once
    /// and reuse the returned map.
    #[must_use]
    pub fn properties_for(&self, version_iris: &[String]) -> FxHashMap<String, PropertyDescriptor> {
        let state = self.state.read();
        let mut table = FxHashMap::default();
        for profile in state.by_keyword.values() {
            if profile.kind() != ProfileKind::Content {
                continue;
            }
            if !profile.version_iris().iter().any(|iri| version_iris.contains(iri)) {
                continue;
            }
            for (property_iri, descriptor) in profile.properties() {
                table.insert(property_iri.clone(), descriptor.clone());
            }
        }
        table
    }

    /// The property table of the registered [`ProfileKind::Header`]
    /// profile declaring `version_iri`, if any.
    #[must_use]
    pub fn header_properties_for(&self, version_iri: &str) -> FxHashMap<String, PropertyDescriptor> {
        let state = self.state.read();
        state
            .by_keyword
            .values()
            .find(|profile| {
                profile.kind() == ProfileKind::Header && profile.version_iris().iter().any(|iri| iri == version_iri)
            })
            .map(|profile| profile.properties().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default()
    }

    /// The built-in primitive-name-to-datatype-IRI table, overridden by any
    /// names registered with [`ProfileRegistry::register_primitive_type`].
    #[must_use]
    pub fn primitive_to_datatype(&self) -> FxHashMap<String, String> {
        let mut table: FxHashMap<String, String> = builtin_primitives()
            .into_iter()
            .map(|(name, iri)| (name.to_string(), iri.to_string()))
            .collect();
        table.extend(self.state.read().custom_primitives.clone());
        table
    }

    /// Registers a custom primitive name, overriding the built-in table for
    /// that name if it already exists there.
    pub fn register_primitive_type(&self, name: impl Into<String>, datatype_iri: impl Into<String>) {
        let mut state = self.state.write();
        state.custom_primitives.insert(name.into(), datatype_iri.into());
        self.revision.fetch_add(1, Ordering::AcqRel);
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of a [`ProfileRegistry`]'s contents, taken by
/// [`ProfileRegistry::snapshot`].
#[derive(Debug, Clone)]
pub struct RegistrySnapshot {
    profiles: Vec<Arc<Profile>>,
    revision: u64,
}

impl RegistrySnapshot {
    /// The profiles present when this snapshot was taken.
    #[must_use]
    pub fn profiles(&self) -> &[Arc<Profile>] {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileKind;

    fn profile(keyword: &str, version_iri: &str) -> Profile {
        Profile::new(
            ProfileKind::Content,
            "http://iec.ch/TC57/CIM100",
            keyword,
            vec![version_iri.to_string()],
        )
    }

    #[test]
    fn registers_and_looks_up_by_keyword_and_version_iri() {
        let registry = ProfileRegistry::new();
        registry.register(profile("EQ", "http://iec.ch/TC57/ns/CIM/Equipment-EU/3.0")).unwrap();

        assert!(registry.by_keyword("EQ").is_some());
        assert!(registry
            .by_version_iri("http://iec.ch/TC57/ns/CIM/Equipment-EU/3.0")
            .is_ok());
    }

    #[test]
    fn rejects_duplicate_keyword() {
        let registry = ProfileRegistry::new();
        registry.register(profile("EQ", "http://ex/v1")).unwrap();
        let err = registry.register(profile("EQ", "http://ex/v2")).unwrap_err();
        assert!(matches!(err, Error::DuplicateRegistration(_)));
    }

    #[test]
    fn rejects_duplicate_version_iri_under_a_different_keyword() {
        let registry = ProfileRegistry::new();
        registry.register(profile("EQ", "http://ex/v1")).unwrap();
        let err = registry.register(profile("SSH", "http://ex/v1")).unwrap_err();
        assert!(matches!(err, Error::DuplicateRegistration(_)));
    }

    #[test]
    fn unknown_version_iri_is_reported() {
        let registry = ProfileRegistry::new();
        assert!(matches!(
            registry.by_version_iri("http://ex/missing"),
            Err(Error::UnknownProfile(_))
        ));
    }

    #[test]
    fn snapshot_detects_concurrent_registration() {
        let registry = ProfileRegistry::new();
        registry.register(profile("EQ", "http://ex/v1")).unwrap();
        let snapshot = registry.snapshot();
        registry.register(profile("SSH", "http://ex/v2")).unwrap();
        assert!(matches!(
            registry.verify_snapshot(&snapshot),
            Err(Error::ConcurrentModification)
        ));
    }

    #[test]
    fn rejects_a_content_profile_with_no_version_iris() {
        let registry = ProfileRegistry::new();
        let profile = Profile::new(ProfileKind::Content, "http://ex/ontology", "EQ", vec![]);
        let err = registry.register(profile).unwrap_err();
        assert!(matches!(err, Error::IllegalArgument(_)));
    }

    #[test]
    fn accepts_a_header_profile_with_no_version_iris() {
        let registry = ProfileRegistry::new();
        let profile = Profile::new(ProfileKind::Header, "http://ex/ontology", "FullModel", vec![]);
        assert!(registry.register(profile).is_ok());
    }

    #[test]
    fn contains_matches_by_exact_version_iri_set() {
        let registry = ProfileRegistry::new();
        registry.register(profile("EQ", "http://ex/v1")).unwrap();
        assert!(registry.contains(&["http://ex/v1".to_string()]));
        assert!(!registry.contains(&["http://ex/v1".to_string(), "http://ex/v2".to_string()]));
    }

    #[test]
    fn properties_for_unions_matching_content_profiles() {
        use crate::profile::{PropertyDescriptor, PropertyRange};

        let registry = ProfileRegistry::new();
        let eq = profile("EQ", "http://ex/v1").with_property(
            "http://ex/IdentifiedObject.name",
            PropertyDescriptor {
                owning_class: "http://ex/IdentifiedObject".to_string(),
                range: PropertyRange::Datatype(cim_common::XSD_STRING.to_string()),
            },
        );
        registry.register(eq).unwrap();

        let table = registry.properties_for(&["http://ex/v1".to_string()]);
        assert_eq!(table.len(), 1);
        assert!(table.contains_key("http://ex/IdentifiedObject.name"));
        assert!(registry.properties_for(&["http://ex/unrelated".to_string()]).is_empty());
    }

    #[test]
    fn contains_header_profile_checks_kind_and_version_iri() {
        let registry = ProfileRegistry::new();
        let header = Profile::new(
            ProfileKind::Header,
            "http://iec.ch/TC57/61970-552/ModelDescription/1#",
            "FullModel",
            vec!["http://iec.ch/TC57/CIM100#".to_string()],
        );
        registry.register(header).unwrap();

        assert!(registry.contains_header_profile("http://iec.ch/TC57/CIM100#"));
        assert!(!registry.contains_header_profile("http://iec.ch/TC57/CIM100-other#"));
    }

    #[test]
    fn custom_primitive_registration_overrides_the_builtin_table() {
        let registry = ProfileRegistry::new();
        registry.register_primitive_type("Integer", "http://example.org/custom-int");
        let table = registry.primitive_to_datatype();
        assert_eq!(table.get("Integer").map(String::as_str), Some("http://example.org/custom-int"));
        assert_eq!(table.get("Boolean").map(String::as_str), Some(cim_common::XSD_BOOLEAN));
    }
}
