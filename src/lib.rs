//! A single-line regular expression syntax highlighter and live match
//! visualizer.
//!
//! [`tokenize`] classifies every character of a (possibly malformed) regex
//! literal into a [`Token`], and [`build_runs`] partitions a subject string
//! into plain and highlighted [`HighlightRun`]s from a set of matches.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc, clippy::too_many_lines)]

pub mod engine;
pub mod highlight;
pub mod lexer;
pub mod literal;
#[cfg(feature = "html")]
pub mod render;

pub use self::{
    engine::{Evaluation, Match, Matcher, Options, evaluate},
    highlight::{HighlightRun, MatchSpan, build_runs},
    lexer::{Lexer, Token, TokenKind, lex_flags, tokenize},
    literal::RegexLiteral,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A flag outside the recognised set, or one given more than once.
    #[error("invalid flag '{flag}' at {pos}")]
    InvalidFlag { pos: usize, flag: char },

    /// The regex engine rejected the pattern.
    #[error("invalid regular expression: {0}")]
    Compile(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
