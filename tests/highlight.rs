use pretty_assertions::assert_eq;
use rxlight::{HighlightRun, MatchSpan, build_runs};

fn plain(text: &str) -> HighlightRun<'_> {
    HighlightRun::plain(text)
}

fn marked(text: &str) -> HighlightRun<'_> {
    HighlightRun::highlighted(text)
}

#[test]
fn test_no_matches() {
    assert_eq!(build_runs("abc", &[]), vec![plain("abc")]);
    assert!(build_runs("", &[]).is_empty());
}

#[test]
fn test_single_match() {
    assert_eq!(
        build_runs("hello world", &[MatchSpan::new(6, "world")]),
        vec![plain("hello "), marked("world")]
    );
    assert_eq!(
        build_runs("hello world", &[MatchSpan::new(0, "hello")]),
        vec![marked("hello"), plain(" world")]
    );
    assert_eq!(build_runs("abc", &[MatchSpan::new(0, "abc")]), vec![marked("abc")]);
}

#[test]
fn test_adjacent_matches() {
    assert_eq!(
        build_runs("abab", &[MatchSpan::new(0, "ab"), MatchSpan::new(2, "ab")]),
        vec![marked("ab"), marked("ab")]
    );
}

#[test]
fn test_matches_are_sorted() {
    assert_eq!(
        build_runs("a1b2c", &[MatchSpan::new(3, "2"), MatchSpan::new(1, "1")]),
        vec![plain("a"), marked("1"), plain("b"), marked("2"), plain("c")]
    );
}

#[test]
fn test_overlap_skips_later_match() {
    assert_eq!(
        build_runs("aaa", &[MatchSpan::new(0, "aa"), MatchSpan::new(1, "aa")]),
        vec![marked("aa"), plain("a")]
    );
}

#[test]
fn test_overlap_is_not_trimmed_to_longer_match() {
    // The longer match at the same start comes second and is dropped rather
    // than merged, even though it would cover more text.
    assert_eq!(
        build_runs("abcd", &[MatchSpan::new(0, "a"), MatchSpan::new(0, "abcd")]),
        vec![marked("a"), plain("bcd")]
    );
    assert_eq!(
        build_runs("abcd", &[MatchSpan::new(1, "b"), MatchSpan::new(0, "abcd")]),
        vec![marked("abcd")]
    );
}

#[test]
fn test_zero_width_matches_are_dropped() {
    assert_eq!(build_runs("abc", &[MatchSpan::new(1, "")]), vec![plain("abc")]);
    assert_eq!(
        build_runs("abc", &[MatchSpan::new(0, ""), MatchSpan::new(0, "a")]),
        vec![marked("a"), plain("bc")]
    );
}

#[test]
fn test_invalid_offsets_are_dropped() {
    assert_eq!(build_runs("abc", &[MatchSpan::new(2, "cd")]), vec![plain("abc")]);
    assert_eq!(
        build_runs("abc", &[MatchSpan::new(usize::MAX, "a")]),
        vec![plain("abc")]
    );
    // Offset 1 is inside the two-byte 'é'.
    assert_eq!(build_runs("éa", &[MatchSpan::new(1, "a")]), vec![plain("éa")]);
}

#[test]
fn test_runs_use_subject_text() {
    let runs = build_runs("xyz", &[MatchSpan::new(1, "Y")]);
    assert_eq!(runs, vec![plain("x"), marked("y"), plain("z")]);
}

#[test]
fn test_runs_reconstruct_subject() {
    let subject = "one two three";
    let matches = [
        MatchSpan::new(4, "two"),
        MatchSpan::new(5, "wo t"),
        MatchSpan::new(8, ""),
        MatchSpan::new(8, "three"),
    ];
    let runs = build_runs(subject, &matches);
    let rebuilt: String = runs.iter().map(|run| run.text).collect();
    assert_eq!(rebuilt, subject);
    assert!(runs.iter().all(|run| !run.text.is_empty()));
}
