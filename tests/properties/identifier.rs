//! Property tests for identifier derivation.

use proptest::prelude::*;

use embed_media::identifier::{find_collision, is_c_identifier, sanitize, validate};

/// File names built only from characters the tool accepts
fn well_formed_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9_. -]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `sanitize` never panics and only rewrites the replaced characters.
    #[test]
    fn property_sanitize_replaces_only_separators(name in "(?s).{0,64}") {
        let id = sanitize(&name);

        prop_assert_eq!(id.chars().count(), name.chars().count());
        prop_assert!(!id.contains(['.', '-', ' ']));
        for (before, after) in name.chars().zip(id.chars()) {
            if matches!(before, '.' | '-' | ' ') {
                prop_assert_eq!(after, '_');
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    /// PROPERTY: well-formed names always yield a valid prefixed symbol.
    #[test]
    fn property_well_formed_names_validate(name in well_formed_name()) {
        let id = sanitize(&name);

        prop_assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        let symbol = format!("media_{id}");
        prop_assert!(is_c_identifier(&symbol));
        prop_assert!(validate(&name, &id, "media_").is_ok());
    }

    /// PROPERTY: names with a character outside the accepted set never validate.
    #[test]
    fn property_foreign_characters_rejected(
        stem in well_formed_name(),
        bad in "[^A-Za-z0-9_. -]",
    ) {
        let name = format!("{stem}{bad}");
        let id = sanitize(&name);

        prop_assert!(validate(&name, &id, "media_").is_err());
    }

    /// PROPERTY: a collision is reported exactly when two identifiers coincide.
    #[test]
    fn property_collision_iff_duplicate_identifier(
        names in proptest::collection::btree_set(well_formed_name(), 1..12),
    ) {
        let pairs: Vec<(String, String)> =
            names.iter().map(|n| (n.clone(), sanitize(n))).collect();
        let distinct: std::collections::HashSet<&str> =
            pairs.iter().map(|(_, id)| id.as_str()).collect();

        let collision = find_collision(pairs.iter().map(|(n, id)| (n.as_str(), id.as_str())));

        prop_assert_eq!(collision.is_some(), distinct.len() < pairs.len());
        if let Some((id, first, second)) = collision {
            prop_assert_ne!(&first, &second);
            prop_assert_eq!(sanitize(&first), id.clone());
            prop_assert_eq!(sanitize(&second), id);
        }
    }
}
