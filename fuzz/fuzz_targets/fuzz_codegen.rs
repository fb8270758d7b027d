#![no_main]

use libfuzzer_sys::fuzz_target;

use embed_media::{generate, Asset, AssetSet, EmbedConfig};

fuzz_target!(|data: &[u8]| {
    // First line is a file name, the rest its contents
    let split = data.iter().position(|&b| b == b'\n').unwrap_or(data.len());
    let Ok(name) = std::str::from_utf8(&data[..split]) else {
        return;
    };
    let bytes = data.get(split + 1..).unwrap_or_default().to_vec();

    let assets = AssetSet::new(vec![Asset::new(name, bytes.clone(), name)]);
    let config = EmbedConfig::default();
    if let Ok(artifacts) = generate(&assets, &config) {
        let table = assets.lookup_table(&config.logical_prefix, &config.symbol_prefix);
        assert_eq!(table.find(&format!("media/{name}")), Some(bytes.as_slice()));
        assert!(artifacts.source.content().contains(&config.lookup_function));
    }
});
