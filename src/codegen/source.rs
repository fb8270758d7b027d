//! Definition artifact
//!
//! Layout, in order: one byte array per asset, the entry struct, the entry
//! table, then the lookup function.

use crate::config::EmbedConfig;
use crate::models::{AssetSet, LookupEntry};

use super::escaping::{c_string_literal, hex_byte};
use super::header::lookup_signature;

const ENTRY_STRUCT: &str = "EmbeddedMediaEntry";
const TABLE_NAME: &str = "g_embeddedMedia";

/// Render the full definition artifact for `assets`
pub fn render_source(assets: &AssetSet, config: &EmbedConfig) -> String {
    let table = assets.lookup_table(&config.logical_prefix, &config.symbol_prefix);
    let mut out = String::new();

    out.push_str(&format!("#include \"{}\"\n", config.header_name));
    out.push_str("#include <cstring>\n\n");

    for entry in table.entries() {
        render_byte_array(&mut out, entry, config.bytes_per_line);
    }

    out.push_str(&format!("struct {} {{\n", ENTRY_STRUCT));
    out.push_str("    const char* path;\n");
    out.push_str("    const unsigned char* data;\n");
    out.push_str("    size_t size;\n");
    out.push_str("};\n\n");

    out.push_str(&format!(
        "static const {} {}[] = {{\n",
        ENTRY_STRUCT, TABLE_NAME
    ));
    for entry in table.entries() {
        out.push_str(&format!(
            "    {{ {}, {}, {} }},\n",
            c_string_literal(&entry.path),
            entry.symbol,
            size_expr(entry)
        ));
    }
    out.push_str("};\n\n");

    out.push_str(&lookup_signature(&config.lookup_function));
    out.push_str(" {\n");
    out.push_str(&format!(
        "    for (size_t i = 0; i < {}; i++) {{\n",
        table.len()
    ));
    out.push_str(&format!(
        "        if (strcmp(path, {}[i].path) == 0) {{\n",
        TABLE_NAME
    ));
    out.push_str(&format!("            *data = {}[i].data;\n", TABLE_NAME));
    out.push_str(&format!("            *size = {}[i].size;\n", TABLE_NAME));
    out.push_str("            return true;\n");
    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push_str("    return false;\n");
    out.push_str("}\n");

    out
}

/// Emit `static const unsigned char <symbol>[] = { ... };`
///
/// A zero-length array is ill-formed C++, so empty assets get a single
/// placeholder byte and report size 0 through [`size_expr`].
fn render_byte_array(out: &mut String, entry: &LookupEntry<'_>, bytes_per_line: usize) {
    out.push_str(&format!(
        "static const unsigned char {}[] = {{\n",
        entry.symbol
    ));
    let placeholder = [0u8];
    let data = if entry.data().is_empty() {
        &placeholder[..]
    } else {
        entry.data()
    };
    for chunk in data.chunks(bytes_per_line) {
        let line: Vec<String> = chunk.iter().copied().map(hex_byte).collect();
        out.push_str("    ");
        out.push_str(&line.join(", "));
        out.push_str(",\n");
    }
    out.push_str("};\n\n");
}

fn size_expr(entry: &LookupEntry<'_>) -> String {
    if entry.size == 0 {
        "0".to_string()
    } else {
        format!("sizeof({})", entry.symbol)
    }
}
