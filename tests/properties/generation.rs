//! Property tests for code generation and lookup semantics.

use std::collections::BTreeMap;

use proptest::prelude::*;

use embed_media::{generate, Asset, AssetSet, EmbedConfig};

use crate::common::GeneratedSource;

/// Distinct, valid file names mapped to arbitrary contents
fn media_set() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    proptest::collection::btree_map(
        "[a-z][a-z0-9_]{0,10}\\.(png|ogg|wav|bin)",
        proptest::collection::vec(any::<u8>(), 0..80),
        1..8,
    )
}

fn assets_from(files: &[(String, Vec<u8>)]) -> AssetSet {
    AssetSet::new(
        files
            .iter()
            .map(|(name, bytes)| Asset::new(name.clone(), bytes.clone(), name))
            .collect(),
    )
}

fn config() -> EmbedConfig {
    EmbedConfig::default().with_output_dir("build")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: output does not depend on the order files were discovered in.
    #[test]
    fn property_generation_order_independent(
        shuffled in media_set()
            .prop_map(|m| m.into_iter().collect::<Vec<_>>())
            .prop_flat_map(|files| (Just(files.clone()), Just(files).prop_shuffle())),
    ) {
        let (sorted, permuted) = shuffled;
        let config = config();

        let a = generate(&assets_from(&sorted), &config).unwrap();
        let b = generate(&assets_from(&permuted), &config).unwrap();

        prop_assert_eq!(a.source.content(), b.source.content());
        prop_assert_eq!(a.header.content(), b.header.content());
    }

    /// PROPERTY: every embedded file is found with exactly its bytes.
    #[test]
    fn property_generated_lookup_round_trips(files in media_set()) {
        let list: Vec<_> = files.clone().into_iter().collect();
        let artifacts = generate(&assets_from(&list), &config()).unwrap();

        let decoded = GeneratedSource::parse(artifacts.source.content());

        prop_assert_eq!(decoded.loop_count, files.len());
        for (name, bytes) in &files {
            let found = decoded.lookup(&format!("media/{name}"));
            prop_assert_eq!(found.as_ref(), Some(bytes));
        }
    }

    /// PROPERTY: paths that were not embedded miss without touching the outputs.
    #[test]
    fn property_generated_lookup_misses_unknown_paths(
        files in media_set(),
        probe in "(?s).{0,32}",
    ) {
        let list: Vec<_> = files.clone().into_iter().collect();
        let artifacts = generate(&assets_from(&list), &config()).unwrap();
        let decoded = GeneratedSource::parse(artifacts.source.content());
        let known = probe
            .strip_prefix("media/")
            .is_some_and(|name| files.contains_key(name));
        prop_assume!(!known);

        let mut data = vec![0xaa];
        let mut size = 7;
        prop_assert!(!decoded.find_embedded_media(&probe, &mut data, &mut size));
        prop_assert_eq!(data, vec![0xaa]);
        prop_assert_eq!(size, 7);
    }

    /// PROPERTY: any prefix the config accepts survives string-literal escaping.
    #[test]
    fn property_logical_prefix_survives_escaping(
        prefix in "(?s)[ -~\\t\\n\\r\\x01-\\x1f]{0,16}",
        bytes in proptest::collection::vec(any::<u8>(), 0..20),
    ) {
        let assets = AssetSet::new(vec![Asset::new("clip.wav", bytes.clone(), "clip.wav")]);
        let mut config = config();
        config.logical_prefix = prefix.clone();
        prop_assert!(config.validate(std::path::Path::new("embed.toml")).is_ok());

        let artifacts = generate(&assets, &config).unwrap();
        let decoded = GeneratedSource::parse(artifacts.source.content());

        let path = format!("{prefix}clip.wav");
        prop_assert_eq!(decoded.paths(), vec![path.as_str()]);
        prop_assert_eq!(decoded.lookup(&path), Some(bytes));
    }

    /// PROPERTY: the in-memory lookup table agrees with the generated source.
    #[test]
    fn property_lookup_table_matches_generated_source(files in media_set()) {
        let list: Vec<_> = files.into_iter().collect();
        let assets = assets_from(&list);
        let artifacts = generate(&assets, &config()).unwrap();
        let decoded = GeneratedSource::parse(artifacts.source.content());
        let table = assets.lookup_table("media/", "media_");

        for entry in table.entries() {
            let found = decoded.lookup(&entry.path);
            prop_assert_eq!(
                found.as_deref(),
                table.find(&entry.path)
            );
        }
    }
}
