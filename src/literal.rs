//! Splitting of `/pattern/flags` regex literals.

/// A regex source split into its pattern body and flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegexLiteral<'a> {
    /// A pattern without delimiters, or a malformed literal.
    Bare(&'a str),
    /// A `/pattern/flags` literal.
    Delimited { pattern: &'a str, flags: &'a str },
}

impl<'a> RegexLiteral<'a> {
    /// Splits `source` at its delimiters.
    ///
    /// A source is delimited when it starts with `/` and contains a later `/`
    /// that is not escaped by an odd number of backslashes. The last such
    /// `/` closes the pattern and everything after it is flags.
    #[must_use]
    pub fn parse(source: &'a str) -> Self {
        if source.starts_with('/')
            && let Some(end) = last_unescaped_slash(source)
        {
            RegexLiteral::Delimited {
                pattern: &source[1..end],
                flags: &source[end + 1..],
            }
        } else {
            RegexLiteral::Bare(source)
        }
    }

    /// Returns the pattern body.
    #[must_use]
    pub const fn pattern(&self) -> &'a str {
        match self {
            RegexLiteral::Bare(pattern) | RegexLiteral::Delimited { pattern, .. } => pattern,
        }
    }

    /// Returns the flags, which are always empty for a bare pattern.
    #[must_use]
    pub const fn flags(&self) -> &'a str {
        match self {
            RegexLiteral::Bare(_) => "",
            RegexLiteral::Delimited { flags, .. } => flags,
        }
    }
}

// `/` and `\` are ASCII so scanning bytes never lands inside a multi-byte
// character.
fn last_unescaped_slash(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| bytes[i] == b'/' && !is_escaped(bytes, i))
}

fn is_escaped(bytes: &[u8], i: usize) -> bool {
    let backslashes = bytes[..i]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    backslashes % 2 == 1
}
