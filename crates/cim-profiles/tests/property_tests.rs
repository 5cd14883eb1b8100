//! Property-based tests for [`ProfileRegistry`] registration discipline:
//! distinct keywords with distinct version IRIs always succeed, and a
//! keyword or version IRI is never claimed twice.

use cim_profiles::{Profile, ProfileKind, ProfileRegistry};
use proptest::prelude::*;

fn keyword_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{2,5}"
}

proptest! {
    #[test]
    fn distinct_keywords_always_register(keywords in prop::collection::hash_set(keyword_strategy(), 1..20)) {
        let registry = ProfileRegistry::new();
        for (i, keyword) in keywords.iter().enumerate() {
            let profile = Profile::new(
                ProfileKind::Content,
                "http://iec.ch/TC57/CIM100",
                keyword.clone(),
                vec![format!("http://ex/version/{i}")],
            );
            prop_assert!(registry.register(profile).is_ok());
        }
        prop_assert_eq!(registry.len(), keywords.len());
    }

    #[test]
    fn re_registering_the_same_keyword_always_fails(keyword in keyword_strategy()) {
        let registry = ProfileRegistry::new();
        let first = Profile::new(ProfileKind::Content, "http://iec.ch/TC57/CIM100", keyword.clone(), vec!["http://ex/v1".to_string()]);
        let second = Profile::new(ProfileKind::Content, "http://iec.ch/TC57/CIM100", keyword, vec!["http://ex/v2".to_string()]);
        registry.register(first).unwrap();
        prop_assert!(registry.register(second).is_err());
    }
}
