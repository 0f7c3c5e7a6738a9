use super::TokenKind;

/// Reads the escape sequence starting at the `\` at byte `start` of `src`.
///
/// Returns the kind of the sequence and the byte offset just past it. The
/// returned offset is always greater than `start`.
pub(super) fn read_escape(src: &str, start: usize) -> (TokenKind, usize) {
    let rest = &src[start + 1..];
    let Some(c) = rest.chars().next() else {
        return (TokenKind::Error, start + 1);
    };
    // `c` is ASCII in every guarded arm, so `rest[1..]` is on a boundary.
    match c {
        'p' | 'P' if rest[1..].starts_with('{') => {
            terminated(src, start + 3, '}', TokenKind::UnicodeProperty)
        }
        'u' if rest[1..].starts_with('{') => terminated(src, start + 3, '}', TokenKind::Escape),
        'u' if leading_hex_digits(&rest[1..], 4) => (TokenKind::Escape, start + 6),
        'x' if leading_hex_digits(&rest[1..], 2) => (TokenKind::Escape, start + 4),
        'k' if rest[1..].starts_with('<') => terminated(src, start + 3, '>', TokenKind::Escape),
        _ => (TokenKind::Escape, start + 1 + c.len_utf8()),
    }
}

/// Consumes through the first `close` at or after `from`, or reports an
/// error covering the rest of `src`.
fn terminated(src: &str, from: usize, close: char, kind: TokenKind) -> (TokenKind, usize) {
    match src[from..].find(close) {
        Some(offset) => (kind, from + offset + 1),
        None => (TokenKind::Error, src.len()),
    }
}

fn leading_hex_digits(s: &str, count: usize) -> bool {
    s.as_bytes()
        .get(..count)
        .is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit))
}
