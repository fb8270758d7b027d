//! Symbol names for generated byte arrays
//!
//! A file name becomes an identifier by replacing `.`, `-` and space with
//! `_`. Nothing else is rewritten, so names that still contain characters a
//! C compiler rejects are reported instead of silently mangled.

use std::collections::HashMap;

use crate::error::{EmbedError, EmbedResult};

/// Characters replaced with `_` when deriving an identifier
const REPLACED_CHARS: [char; 3] = ['.', '-', ' '];

/// Derive an identifier from a bare file name
///
/// `"a.b-c d.png"` becomes `"a_b_c_d_png"`.
pub fn sanitize(filename: &str) -> String {
    filename.replace(REPLACED_CHARS, "_")
}

/// True if `s` is a valid C identifier
pub fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check that `identifier` forms a valid symbol once `symbol_prefix` is
/// prepended
///
/// An empty prefix is allowed, in which case the identifier itself must not
/// start with a digit.
pub fn validate(filename: &str, identifier: &str, symbol_prefix: &str) -> EmbedResult<()> {
    let symbol = format!("{symbol_prefix}{identifier}");
    if identifier.is_empty() || !is_c_identifier(&symbol) {
        return Err(EmbedError::InvalidIdentifier {
            filename: filename.to_string(),
            identifier: identifier.to_string(),
        });
    }
    Ok(())
}

/// Find the first pair of file names that share an identifier
///
/// Returns `(identifier, first, second)` in input order.
pub fn find_collision<'a, I>(pairs: I) -> Option<(String, String, String)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (filename, identifier) in pairs {
        if let Some(first) = seen.insert(identifier, filename) {
            return Some((identifier.to_string(), first.to_string(), filename.to_string()));
        }
    }
    None
}

/// Fail with `IdentifierCollision` if any two file names share an identifier
pub fn ensure_unique<'a, I>(pairs: I) -> EmbedResult<()>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    match find_collision(pairs) {
        Some((identifier, first, second)) => Err(EmbedError::IdentifierCollision {
            identifier,
            first,
            second,
        }),
        None => Ok(()),
    }
}
