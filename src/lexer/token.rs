/// The syntactic category of a pattern token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The `/` around a regex literal.
    Delimiter,
    /// A recognised, not yet seen flag after the closing delimiter.
    Flag,
    /// An unknown, repeated or non-letter flag character.
    InvalidFlag,
    /// `\d`, `\n`, `\x41`, `\u{1F600}`, `\k<name>` etc.
    Escape,
    /// `\p{...}` or `\P{...}`
    UnicodeProperty,
    /// `[`
    ClassOpen,
    /// `]` closing a class.
    ClassClose,
    /// `^` directly after `[`.
    ClassNegate,
    /// A member of a character class.
    ClassChar,
    /// `-` inside a character class.
    RangeDash,
    /// `(`
    GroupOpen,
    /// `)` closing an open group.
    GroupClose,
    /// Group prefixes like `?:`, `?<=` or the `?<` and `>` around a name.
    GroupKind,
    /// The name of a named capture group.
    GroupName,
    /// `*`, `+`, `?` or `{n,m}`
    Quantifier,
    /// The `?` or `+` directly following a quantifier.
    QuantifierModifier,
    /// `^` or `$`
    Anchor,
    /// `|`
    Alternation,
    /// `.`
    Dot,
    /// Any other character.
    Literal,
    /// Malformed syntax: a stray `)` or `]`, an unterminated escape or group
    /// name.
    Error,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 21] = [
        TokenKind::Delimiter,
        TokenKind::Flag,
        TokenKind::InvalidFlag,
        TokenKind::Escape,
        TokenKind::UnicodeProperty,
        TokenKind::ClassOpen,
        TokenKind::ClassClose,
        TokenKind::ClassNegate,
        TokenKind::ClassChar,
        TokenKind::RangeDash,
        TokenKind::GroupOpen,
        TokenKind::GroupClose,
        TokenKind::GroupKind,
        TokenKind::GroupName,
        TokenKind::Quantifier,
        TokenKind::QuantifierModifier,
        TokenKind::Anchor,
        TokenKind::Alternation,
        TokenKind::Dot,
        TokenKind::Literal,
        TokenKind::Error,
    ];

    /// Returns the stable camel-case name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Delimiter => "delimiter",
            TokenKind::Flag => "flag",
            TokenKind::InvalidFlag => "invalidFlag",
            TokenKind::Escape => "escape",
            TokenKind::UnicodeProperty => "unicodeProperty",
            TokenKind::ClassOpen => "classOpen",
            TokenKind::ClassClose => "classClose",
            TokenKind::ClassNegate => "classNegate",
            TokenKind::ClassChar => "classChar",
            TokenKind::RangeDash => "rangeDash",
            TokenKind::GroupOpen => "groupOpen",
            TokenKind::GroupClose => "groupClose",
            TokenKind::GroupKind => "groupKind",
            TokenKind::GroupName => "groupName",
            TokenKind::Quantifier => "quantifier",
            TokenKind::QuantifierModifier => "quantifierModifier",
            TokenKind::Anchor => "anchor",
            TokenKind::Alternation => "alternation",
            TokenKind::Dot => "dot",
            TokenKind::Literal => "literal",
            TokenKind::Error => "error",
        }
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of the pattern source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The category of the slice.
    pub kind: TokenKind,
    /// The source text covered by the token. Never empty.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    #[inline]
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}
