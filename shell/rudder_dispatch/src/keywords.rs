//! Reserved command-name guard.
//!
//! Operation names in the catalog are ordinary Rust identifiers, so a
//! registered operation can never be literally named `return` or `match`.
//! The convention is to register such operations with a leading
//! underscore (`_return`); a requested command name that collides with a
//! keyword is reprefixed the same way before lookup.

use std::borrow::Cow;

/// Reserved words, sorted for binary search. Read-only process-wide
/// state, so a plain constant suffices.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

/// Reprefix a lowercased command name that collides with a keyword.
pub(crate) fn escape_reserved(lower: &str) -> Cow<'_, str> {
    if KEYWORDS.binary_search(&lower).is_ok() {
        Cow::Owned(format!("_{lower}"))
    } else {
        Cow::Borrowed(lower)
    }
}
