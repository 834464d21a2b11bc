//! Comma separated token lists, as used by `Connection` and `Transfer-Encoding`.

use crate::protocol::Fields;

/// Iterates the tokens of a single field value.
///
/// Surrounding optional whitespace is trimmed and empty list elements are
/// skipped, so `" close ,, Upgrade"` yields `close` and `Upgrade`.
pub fn tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(|token| token.trim_matches([' ', '\t'])).filter(|token| !token.is_empty())
}

/// Returns true if any occurrence of the named field lists `token`.
///
/// Tokens are compared ASCII case-insensitively.
pub fn contains_token(fields: &Fields, name: &str, token: &str) -> bool {
    fields.get_all(name).flat_map(tokens).any(|t| t.eq_ignore_ascii_case(token))
}

/// Returns the last token across every occurrence of the named field.
///
/// Multiple occurrences of a list field are equivalent to a single field whose
/// value is their comma-joined concatenation.
pub fn last_token<'a>(fields: &'a Fields, name: &str) -> Option<&'a str> {
    fields.get_all(name).flat_map(tokens).last()
}
