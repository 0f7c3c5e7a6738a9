use crate::literal::RegexLiteral;
use std::collections::VecDeque;

mod escape;
pub mod flags;
pub mod token;

pub use self::{
    flags::{FlagSet, lex_flags},
    token::{Token, TokenKind},
};
use self::escape::read_escape;

/// Tokenizes a regex source, either a `/pattern/flags` literal or a bare
/// pattern.
///
/// The token texts, concatenated in order, always reproduce `source`.
/// Malformed syntax is reported as [`TokenKind::Error`] tokens rather than
/// failing.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let tokens: Vec<_> = match RegexLiteral::parse(source) {
        RegexLiteral::Bare(pattern) => Lexer::new(pattern).collect(),
        RegexLiteral::Delimited { pattern, flags } => {
            std::iter::once(Token::new(TokenKind::Delimiter, "/"))
                .chain(Lexer::new(pattern))
                .chain(std::iter::once(Token::new(TokenKind::Delimiter, "/")))
                .chain(lex_flags(flags))
                .collect()
        }
    };
    tracing::trace!(len = source.len(), tokens = tokens.len(), "tokenized regex");
    tokens
}

/// Returns the length of the `{n}`, `{n,}` or `{n,m}` quantifier at the start
/// of `s`, if there is one.
fn brace_quantifier_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let digits_from = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    if bytes.first() != Some(&b'{') {
        return None;
    }
    let min = digits_from(1);
    if min == 0 {
        return None;
    }
    let mut end = 1 + min;
    if bytes.get(end) == Some(&b',') {
        end += 1;
        end += digits_from(end);
    }
    (bytes.get(end) == Some(&b'}')).then_some(end + 1)
}

/// A scanner over the body of a regex pattern.
///
/// Some constructs (group prefixes, quantifiers with modifiers) produce more
/// than one token per scanning step; those are buffered and handed out one
/// at a time by the [`Iterator`] implementation.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    in_class: bool,
    class_count: usize,
    group_depth: usize,
    pending: VecDeque<Token<'a>>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            in_class: false,
            class_count: 0,
            group_depth: 0,
            pending: VecDeque::new(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Queues the text from the current position up to `end` as a token of
    /// the given kind.
    fn emit(&mut self, kind: TokenKind, end: usize) {
        debug_assert!(end > self.pos, "tokens must not be empty");
        self.pending
            .push_back(Token::new(kind, &self.input[self.pos..end]));
        self.pos = end;
    }

    fn emit_char(&mut self, kind: TokenKind, c: char) {
        self.emit(kind, self.pos + c.len_utf8());
    }

    fn emit_escape(&mut self) {
        let (kind, end) = read_escape(self.input, self.pos);
        self.emit(kind, end);
    }

    /// Scans one construct, queueing at least one token unless the input is
    /// exhausted.
    fn scan(&mut self) {
        let Some(c) = self.peek() else {
            return;
        };
        if self.in_class {
            self.scan_class(c);
        } else {
            self.scan_default(c);
        }
    }

    fn scan_default(&mut self, c: char) {
        match c {
            '\\' => self.emit_escape(),
            '[' => {
                self.in_class = true;
                self.class_count = 0;
                self.emit_char(TokenKind::ClassOpen, c);
            }
            ']' => self.emit_char(TokenKind::Error, c),
            '(' => {
                self.group_depth += 1;
                self.emit_char(TokenKind::GroupOpen, c);
                if self.peek() == Some('?') {
                    self.scan_group_prefix();
                }
            }
            ')' => {
                if self.group_depth > 0 {
                    self.group_depth -= 1;
                    self.emit_char(TokenKind::GroupClose, c);
                } else {
                    self.emit_char(TokenKind::Error, c);
                }
            }
            '{' => match brace_quantifier_len(self.rest()) {
                Some(len) => {
                    self.emit(TokenKind::Quantifier, self.pos + len);
                    self.scan_quantifier_modifier();
                }
                None => self.emit_char(TokenKind::Literal, c),
            },
            '*' | '+' | '?' => {
                self.emit_char(TokenKind::Quantifier, c);
                self.scan_quantifier_modifier();
            }
            '^' | '$' => self.emit_char(TokenKind::Anchor, c),
            '|' => self.emit_char(TokenKind::Alternation, c),
            '.' => self.emit_char(TokenKind::Dot, c),
            _ => self.emit_char(TokenKind::Literal, c),
        }
    }

    fn scan_class(&mut self, c: char) {
        match c {
            '\\' => self.emit_escape(),
            '^' if self.class_count == 0 => self.emit_char(TokenKind::ClassNegate, c),
            ']' if self.class_count == 0 => self.emit_char(TokenKind::ClassChar, c),
            ']' => {
                self.in_class = false;
                self.emit_char(TokenKind::ClassClose, c);
                return;
            }
            '-' => self.emit_char(TokenKind::RangeDash, c),
            _ => self.emit_char(TokenKind::ClassChar, c),
        }
        self.class_count += 1;
    }

    fn scan_quantifier_modifier(&mut self) {
        if let Some(c @ ('?' | '+')) = self.peek() {
            self.emit_char(TokenKind::QuantifierModifier, c);
        }
    }

    /// Scans the `?...` prefix directly after a `(`.
    fn scan_group_prefix(&mut self) {
        let rest = self.rest();
        if rest.starts_with("?<=") || rest.starts_with("?<!") {
            self.emit(TokenKind::GroupKind, self.pos + 3);
        } else if ["?:", "?=", "?!", "?>"]
            .into_iter()
            .any(|prefix| rest.starts_with(prefix))
        {
            self.emit(TokenKind::GroupKind, self.pos + 2);
        } else if rest.starts_with("?<") {
            match rest[2..].find('>') {
                Some(name_len) => {
                    self.emit(TokenKind::GroupKind, self.pos + 2);
                    if name_len > 0 {
                        self.emit(TokenKind::GroupName, self.pos + name_len);
                    }
                    self.emit(TokenKind::GroupKind, self.pos + 1);
                }
                None => self.emit(TokenKind::Error, self.input.len()),
            }
        } else {
            self.emit(TokenKind::GroupKind, self.pos + 1);
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            self.scan();
        }
        self.pending.pop_front()
    }
}
