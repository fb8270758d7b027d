//! Escaping for generated C/C++ source
//!
//! Logical paths end up inside string literals. File names are already
//! restricted by identifier validation, but the configured prefix is not.

/// Escape a string for use inside a C string literal (without the quotes)
///
/// Escapes: backslash, double quote, question mark (trigraphs), common
/// control characters; other control bytes become three-digit octal
/// escapes so following digits cannot extend them.
pub fn escape_c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '?' => out.push_str("\\?"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Quote and escape a string as a C string literal
pub fn c_string_literal(s: &str) -> String {
    format!("\"{}\"", escape_c_string(s))
}

/// Format one byte as a lowercase `0x`-prefixed hex literal
pub fn hex_byte(b: u8) -> String {
    format!("0x{:02x}", b)
}
