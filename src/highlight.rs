//! Partitioning of a subject string into plain and highlighted runs.

/// A match reported by a regex engine: the byte offset where it starts in the
/// subject and the matched text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSpan<'t> {
    pub start: usize,
    pub text: &'t str,
}

impl<'t> MatchSpan<'t> {
    #[must_use]
    pub const fn new(start: usize, text: &'t str) -> Self {
        Self { start, text }
    }

    /// The byte offset just past the match.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Returns `true` for a zero-width match.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<'t> From<regex::Match<'t>> for MatchSpan<'t> {
    fn from(m: regex::Match<'t>) -> Self {
        Self::new(m.start(), m.as_str())
    }
}

/// A contiguous slice of the subject, either highlighted or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightRun<'s> {
    pub text: &'s str,
    pub highlighted: bool,
}

impl<'s> HighlightRun<'s> {
    #[must_use]
    pub const fn plain(text: &'s str) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }

    #[must_use]
    pub const fn highlighted(text: &'s str) -> Self {
        Self {
            text,
            highlighted: true,
        }
    }
}

/// Splits `subject` into runs, highlighting the given matches.
///
/// Zero-width matches and matches that do not lie on character boundaries
/// inside `subject` are ignored. The rest are taken in order of their start
/// offset; a match starting inside an already highlighted run is dropped
/// entirely, even if it would extend past it. The runs, concatenated, always
/// reproduce `subject`.
#[must_use]
pub fn build_runs<'s>(subject: &'s str, matches: &[MatchSpan<'_>]) -> Vec<HighlightRun<'s>> {
    let mut spans: Vec<_> = matches
        .iter()
        .filter(|m| {
            !m.is_empty()
                && m.start
                    .checked_add(m.text.len())
                    .is_some_and(|end| subject.get(m.start..end).is_some())
        })
        .collect();
    spans.sort_by_key(|m| m.start);

    let mut runs = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;
    for span in spans {
        if span.start < cursor {
            continue;
        }
        if span.start > cursor {
            runs.push(HighlightRun::plain(&subject[cursor..span.start]));
        }
        runs.push(HighlightRun::highlighted(&subject[span.start..span.end()]));
        cursor = span.end();
    }
    if cursor < subject.len() {
        runs.push(HighlightRun::plain(&subject[cursor..]));
    }

    tracing::trace!(
        matches = matches.len(),
        runs = runs.len(),
        "built highlight runs"
    );
    runs
}
