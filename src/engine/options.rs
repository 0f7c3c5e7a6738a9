/// Settings for compiling and running a [`Matcher`](super::Matcher).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Whether `^` and `$` match at line boundaries. On by default, so the
    /// subject is searched line by line like a multi-line text area.
    pub multi_line: bool,
    /// The pattern used when the pattern body is empty. The default `^$`
    /// only matches empty lines, which never produce a highlight.
    pub fallback: String,
    /// An upper bound on the compiled program size, in bytes.
    pub size_limit: Option<usize>,
    /// The maximum number of matches collected from one subject.
    pub match_limit: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            multi_line: true,
            fallback: "^$".to_string(),
            size_limit: None,
            match_limit: None,
        }
    }
}
