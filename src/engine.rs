//! Compiling regex literals and collecting their matches.

use super::{
    Error, Result,
    highlight::{HighlightRun, MatchSpan, build_runs},
    lexer::FlagSet,
    literal::RegexLiteral,
};
use regex::{Captures, Regex, RegexBuilder};

mod options;

pub use self::options::Options;


/// A compiled regex literal.
#[derive(Clone, Debug)]
pub struct Matcher {
    regex: Regex,
    match_limit: usize,
}

impl Matcher {
    /// Compiles `source` with the default [`Options`].
    pub fn new(source: &str) -> Result<Self> {
        Self::with_options(source, &Options::default())
    }

    /// Compiles `source`, a `/pattern/flags` literal or a bare pattern.
    ///
    /// The `i`, `m`, `s`, `u` and `v` flags configure the regex; `d`, `g` and
    /// `y` are accepted and have no effect, as every match is collected
    /// anyway.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFlag`] for an unrecognised or repeated flag and
    /// [`Error::Compile`] if the pattern is rejected by the regex engine.
    pub fn with_options(source: &str, options: &Options) -> Result<Self> {
        let literal = RegexLiteral::parse(source);
        let pattern = match literal.pattern() {
            "" => {
                tracing::debug!(fallback = %options.fallback, "empty pattern, using fallback");
                options.fallback.as_str()
            }
            pattern => pattern,
        };

        let mut builder = RegexBuilder::new(pattern);
        builder.multi_line(options.multi_line);
        if let Some(limit) = options.size_limit {
            builder.size_limit(limit);
        }

        let flags = literal.flags();
        let flags_start = source.len() - flags.len();
        let mut seen = FlagSet::new();
        for (i, flag) in flags.char_indices() {
            if !seen.insert(flag) {
                return Err(Error::InvalidFlag {
                    pos: flags_start + i,
                    flag,
                });
            }
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'u' | 'v' => {
                    builder.unicode(true);
                }
                _ => {}
            }
        }

        let regex = builder.build().inspect_err(|err| {
            tracing::debug!(pattern, %err, "failed to compile pattern");
        })?;

        Ok(Self {
            regex,
            match_limit: options.match_limit.unwrap_or(usize::MAX),
        })
    }

    /// Returns the pattern the matcher was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns every successive non-overlapping match in `subject`.
    #[must_use]
    pub fn find_all<'t>(&self, subject: &'t str) -> Vec<Match<'t>> {
        self.regex
            .captures_iter(subject)
            .take(self.match_limit)
            .map(|captures| Match::from_captures(&captures))
            .collect()
    }
}

/// A single match with its capture groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<'t> {
    span: MatchSpan<'t>,
    groups: Vec<Option<MatchSpan<'t>>>,
}

impl<'t> Match<'t> {
    fn from_captures(captures: &Captures<'t>) -> Self {
        let mut groups = captures.iter().map(|group| group.map(MatchSpan::from));
        let span = groups
            .next()
            .flatten()
            .unwrap_or_else(|| MatchSpan::new(0, ""));
        Self {
            span,
            groups: groups.collect(),
        }
    }

    /// The full match.
    #[must_use]
    pub const fn span(&self) -> MatchSpan<'t> {
        self.span
    }

    /// The matched text.
    #[must_use]
    pub const fn as_str(&self) -> &'t str {
        self.span.text
    }

    /// The capture groups, in order. A group that did not take part in the
    /// match is `None`.
    #[must_use]
    pub fn groups(&self) -> &[Option<MatchSpan<'t>>] {
        &self.groups
    }
}

/// The outcome of running a regex source against a subject.
#[derive(Debug, Default)]
pub struct Evaluation<'t> {
    pub matches: Vec<Match<'t>>,
    /// Why the source could not be compiled, if it could not.
    pub error: Option<Error>,
}

impl<'t> Evaluation<'t> {
    /// Returns the full-match spans.
    #[must_use]
    pub fn spans(&self) -> Vec<MatchSpan<'t>> {
        self.matches.iter().map(Match::span).collect()
    }

    /// Splits `subject` into highlight runs for the collected matches.
    ///
    /// `subject` must be the string the evaluation was run against.
    #[must_use]
    pub fn runs<'s>(&self, subject: &'s str) -> Vec<HighlightRun<'s>> {
        build_runs(subject, &self.spans())
    }
}

/// Compiles `source` and collects its matches in `subject`.
///
/// This never fails: a source that does not compile yields no matches and
/// carries the error, so that a half-typed pattern can still be displayed.
#[must_use]
pub fn evaluate<'t>(source: &str, subject: &'t str, options: &Options) -> Evaluation<'t> {
    match Matcher::with_options(source, options) {
        Ok(matcher) => Evaluation {
            matches: matcher.find_all(subject),
            error: None,
        },
        Err(error) => Evaluation {
            matches: Vec::new(),
            error: Some(error),
        },
    }
}
