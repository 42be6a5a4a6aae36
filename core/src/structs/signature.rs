use core::fmt;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{BagError, LetterBag};

pub const SIGNATURE_LEN: usize = 14;

/// Canonical key of a letter multiset.
///
/// Byte 0 holds the number of letters. Bytes 1 to 13 hold the counts of the
/// letter pairs `(a, b)`, `(c, d)`, ... `(y, z)`: the first letter of a pair in
/// the high nibble, the second in the low nibble. A count never exceeds
/// [`super::MAX_LEN`], so it always fits a nibble, and two letter sequences are
/// anagrams exactly when their signatures are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Signature(pub [u8; SIGNATURE_LEN]);

impl Signature {
    /// Callers guarantee `letters` holds at most `MAX_LEN` bytes of `a..=z`.
    pub(crate) fn from_letters(letters: &[u8]) -> Self {
        let mut counts = [0u8; 26];
        for &l in letters {
            counts[(l - b'a') as usize] += 1;
        }

        let mut packed = [0u8; SIGNATURE_LEN];
        packed[0] = letters.len() as u8;
        for (i, pair) in counts.chunks_exact(2).enumerate() {
            packed[1 + i] = (pair[0] << 4) | pair[1];
        }

        Self(packed)
    }

    pub fn len(&self) -> usize {
        self.0[0] as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0[0] == 0
    }

    /// Occurrences of `letter`, zero for anything outside `a..=z`.
    pub fn count(&self, letter: char) -> u8 {
        if !letter.is_ascii_lowercase() {
            return 0;
        }
        let i = (letter as u8 - b'a') as usize;
        let byte = self.0[1 + i / 2];
        if i % 2 == 0 {
            byte >> 4
        } else {
            byte & 0x0f
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().map(|b| format!("{b:02x}")).join(""))
    }
}

/// Signature of an arbitrary word, validating it on the way.
pub fn encode(word: &str) -> Result<Signature, BagError> {
    LetterBag::new(word).map(|bag| bag.signature())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn packs_counts_by_letter_pairs() {
        assert_eq!(
            encode("chat").unwrap(),
            Signature([4, 0x10, 0x10, 0, 0x01, 0, 0, 0, 0, 0, 0x01, 0, 0, 0])
        );
        assert_eq!(
            encode("chats").unwrap(),
            Signature([5, 0x10, 0x10, 0, 0x01, 0, 0, 0, 0, 0, 0x11, 0, 0, 0])
        );
        assert_eq!(encode("").unwrap(), Signature([0; SIGNATURE_LEN]));
    }

    #[test]
    fn counts_add_up_to_length() {
        let signature = encode("anticonst").unwrap();
        let total: usize = ('a'..='z').map(|c| signature.count(c) as usize).sum();
        assert_eq!(total, signature.len());
        assert_eq!(signature.count('n'), 2);
        assert_eq!(signature.count('t'), 2);
        assert_eq!(signature.count('z'), 0);
        assert_eq!(signature.count('A'), 0);
    }

    #[test]
    fn holds_ten_of_one_letter() {
        let signature = encode("zzzzzzzzzz").unwrap();
        assert_eq!(signature.count('z'), 10);
        assert_eq!(signature.count('y'), 0);
        assert_eq!(signature.0[13], 0x0a);
    }

    #[rstest]
    #[case("chien", "niche")]
    #[case("lime", "mile")]
    #[case("marie", "aimer")]
    #[case("crane", "nacre")]
    #[case("ecran", "rance")]
    fn anagrams_share_signature(#[case] w1: &str, #[case] w2: &str) {
        assert_eq!(encode(w1).unwrap(), encode(w2).unwrap());
    }

    #[rstest]
    #[case("chat", "chas")]
    #[case("chat", "chats")]
    #[case("abc", "abd")]
    #[case("aab", "abb")]
    #[case("ab", "cd")]
    fn different_multisets_differ(#[case] w1: &str, #[case] w2: &str) {
        assert_ne!(encode(w1).unwrap(), encode(w2).unwrap());
    }

    #[test]
    fn permutation_invariant() {
        let word = "tirageabcd";
        let expected = encode(word).unwrap();
        let mut letters = word.chars().collect::<Vec<_>>();
        for i in 0..letters.len() {
            letters.rotate_left(1);
            letters.swap(0, i);
            let shuffled = letters.iter().collect::<String>();
            assert_eq!(encode(&shuffled).unwrap(), expected, "{shuffled}");
        }
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(matches!(
            encode("été"),
            Err(BagError::InvalidCharacter { character: 'é', position: 0, .. })
        ));
        assert!(matches!(
            encode("abcdefghijk"),
            Err(BagError::OversizedWord { .. })
        ));
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(
            encode("chat").unwrap().to_string(),
            "0410100001000000000001000000"
        );
    }
}
