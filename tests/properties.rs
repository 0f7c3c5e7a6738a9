//! Property tests for the tokenizer and highlighter.
//!
//! Arbitrary sources are biased towards regex metacharacters so that the
//! scanner's branches are hit far more often than with uniform strings.

use proptest::prelude::*;
use rxlight::{MatchSpan, build_runs, tokenize};

fn regex_source() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            3 => proptest::sample::select(vec![
                "/", "\\", "[", "]", "(", ")", "{", "}", "?", "*", "+", "^", "$", "|",
                ".", "-", ",", "<", ">", "=", "!", ":", "p", "u", "x", "k", "0", "9",
                "a", "g", "i", "é",
            ])
            .prop_map(str::to_string),
            1 => any::<char>().prop_map(String::from),
        ],
        0..48,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn tokens_reconstruct_source(source in regex_source()) {
        let tokens = tokenize(&source);
        let rebuilt: String = tokens.iter().map(|token| token.text).collect();
        prop_assert_eq!(rebuilt, source.clone());
        prop_assert!(tokens.iter().all(|token| !token.text.is_empty()));
        prop_assert!(tokens.len() <= source.chars().count());
    }

    #[test]
    fn tokens_reconstruct_arbitrary_text(source in any::<String>()) {
        let rebuilt: String = tokenize(&source).iter().map(|token| token.text).collect();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn runs_reconstruct_subject(
        subject in "[a-cé ]{0,24}",
        raw in proptest::collection::vec((0usize..32, 0usize..8), 0..8),
    ) {
        let matches: Vec<_> = raw
            .iter()
            .filter_map(|&(start, len)| {
                let end = start.checked_add(len)?;
                subject.get(start..end).map(|text| MatchSpan::new(start, text))
            })
            .collect();
        let runs = build_runs(&subject, &matches);

        let rebuilt: String = runs.iter().map(|run| run.text).collect();
        prop_assert_eq!(rebuilt, subject.clone());
        prop_assert!(runs.iter().all(|run| !run.text.is_empty()));
        prop_assert!(
            runs.windows(2).all(|pair| pair[0].highlighted || pair[1].highlighted),
            "adjacent plain runs must be merged"
        );
    }
}
