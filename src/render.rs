//! HTML rendering of tokens and highlight runs.

use super::{
    highlight::HighlightRun,
    lexer::{Token, TokenKind},
};
use std::{borrow::Cow, fmt::Write as _};

/// The class of the `<mark>` element wrapping a highlighted run.
pub const MARK_CLASS: &str = "rounded-[2px] bg-yellow-600/75";

/// Escapes `&`, `<` and `>`.
#[must_use]
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Returns the style class used to display tokens of the given kind.
#[must_use]
pub const fn style_class(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Delimiter => "text-slate-500",
        TokenKind::Flag => "text-fuchsia-400",
        TokenKind::InvalidFlag => "text-red-400 underline decoration-red-500/60",
        TokenKind::Escape => "text-sky-400",
        TokenKind::UnicodeProperty => "text-indigo-400",
        TokenKind::ClassOpen
        | TokenKind::ClassClose
        | TokenKind::ClassNegate
        | TokenKind::RangeDash => "text-emerald-400",
        TokenKind::GroupOpen | TokenKind::GroupClose => "text-purple-400",
        TokenKind::GroupKind => "text-purple-300",
        TokenKind::GroupName => "text-purple-200",
        TokenKind::Quantifier => "text-amber-400",
        TokenKind::QuantifierModifier => "text-amber-300",
        TokenKind::Anchor => "text-rose-400",
        TokenKind::Alternation => "text-orange-400",
        TokenKind::Dot => "text-cyan-400",
        TokenKind::ClassChar | TokenKind::Literal => "text-slate-200",
        TokenKind::Error => "text-red-500 underline decoration-red-500/60",
    }
}

/// Renders the runs as markup, wrapping highlighted runs in `<mark>`.
///
/// Each run is escaped on its own, so the `<mark>` boundaries fall exactly on
/// the run boundaries.
#[must_use]
pub fn runs_to_html(runs: &[HighlightRun<'_>]) -> String {
    let mut html = String::new();
    for run in runs {
        let text = escape_html(run.text);
        if run.highlighted {
            let _ = write!(html, r#"<mark class="{MARK_CLASS}">{text}</mark>"#);
        } else {
            html.push_str(&text);
        }
    }
    if html.is_empty() {
        html.push_str("<span></span>");
    }
    html
}

/// Renders the tokens as a `<span>` of styled spans.
#[must_use]
pub fn tokens_to_html(tokens: &[Token<'_>]) -> String {
    let mut html = String::from("<span>");
    for token in tokens {
        let _ = write!(
            html,
            r#"<span class="{}">{}</span>"#,
            style_class(token.kind),
            escape_html(token.text)
        );
    }
    html.push_str("</span>");
    html
}
