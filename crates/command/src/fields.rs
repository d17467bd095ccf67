//! Field splitting over frame content.

/// Lazily splits `content` into at most two fields on the first `separator`.
///
/// The second field, when present, is everything after the first separator,
/// further separators included. Empty content yields a single empty field.
pub fn fields(content: &[u8], separator: u8) -> impl Iterator<Item = &[u8]> + '_ {
    content.splitn(2, move |&b| b == separator)
}

/// Selector character of an axis field: its first byte.
pub fn axis_of(field: &[u8]) -> Option<char> {
    field.first().map(|&b| char::from(b))
}
