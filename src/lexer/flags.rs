use super::{Token, TokenKind};

/// Flags recognised after the closing delimiter.
pub const VALID_FLAGS: &str = "dgimsuyv";

/// The set of flags seen so far in a flags string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlagSet(u8);

impl FlagSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    fn bit(flag: char) -> Option<u8> {
        VALID_FLAGS.find(flag).map(|index| 1 << index)
    }

    /// Adds `flag` to the set. Returns `false` if the flag is not recognised
    /// or is already present.
    pub fn insert(&mut self, flag: char) -> bool {
        match Self::bit(flag) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if the set contains `flag`.
    #[must_use]
    pub fn contains(&self, flag: char) -> bool {
        Self::bit(flag).is_some_and(|bit| self.0 & bit != 0)
    }
}

/// Classifies every character of a flags string as a [`TokenKind::Flag`] or a
/// [`TokenKind::InvalidFlag`].
pub fn lex_flags(flags: &str) -> impl Iterator<Item = Token<'_>> {
    let mut seen = FlagSet::new();
    flags.char_indices().map(move |(i, c)| {
        let kind = if seen.insert(c) {
            TokenKind::Flag
        } else {
            TokenKind::InvalidFlag
        };
        Token::new(kind, &flags[i..i + c.len_utf8()])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_set() {
        let mut set = FlagSet::new();
        assert!(set.insert('g'));
        assert!(set.contains('g'));
        assert!(!set.insert('g'));
        assert!(!set.insert('x'));
        assert!(!set.insert('G'));
        assert!(!set.insert('1'));
        assert!(!set.contains('i'));
        for flag in "dimsuyv".chars() {
            assert!(set.insert(flag));
        }
    }

    #[test]
    fn test_non_ascii_flag() {
        let kinds: Vec<_> = lex_flags("gé").map(|t| (t.kind, t.text)).collect();
        assert_eq!(
            kinds,
            vec![(TokenKind::Flag, "g"), (TokenKind::InvalidFlag, "é")]
        );
    }
}
