//! Char-offset helpers. Every offset in this crate counts `char`s; these
//! map them onto byte positions without panicking on out-of-range input.

/// Number of chars in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte position of every char boundary in `s`, including `s.len()` at the end.
///
/// `boundaries(s)[k]` is the byte offset of char `k`, so a char range
/// `[a, b)` is the byte range `boundaries[a]..boundaries[b]`.
pub fn boundaries(s: &str) -> Vec<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect()
}

/// The chars `[start, end)` of `s`, clamped to the string and to `start <= end`.
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let bounds = boundaries(s);
    let n = bounds.len() - 1;
    let start = start.min(n);
    let end = end.clamp(start, n);
    &s[bounds[start]..bounds[end]]
}
