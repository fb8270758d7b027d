//! Declaration artifact

use crate::config::EmbedConfig;

/// C++ signature of the lookup function, without the trailing `;` or body
pub fn lookup_signature(function: &str) -> String {
    format!(
        "bool {}(const char* path, const unsigned char** data, size_t* size)",
        function
    )
}

/// Render the header: include guard, `<cstddef>` for `size_t`, and the
/// lookup declaration. Contains no definitions.
pub fn render_header(config: &EmbedConfig) -> String {
    let mut out = String::new();
    out.push_str("#pragma once\n");
    out.push_str("#include <cstddef>\n\n");
    out.push_str(&lookup_signature(&config.lookup_function));
    out.push_str(";\n");
    out
}
