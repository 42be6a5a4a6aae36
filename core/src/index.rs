use fxhash::FxHashMap;
use log::{info, trace};

use crate::structs::{BagError, LetterBag, Signature};

/// Dictionary words grouped by anagram class.
///
/// Built once and only read afterwards, so it can be shared between solver
/// threads behind a plain `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordIndex {
    buckets: FxHashMap<Signature, Vec<String>>,
    word_count: usize,
}

impl WordIndex {
    /// Files every word under its signature, keeping first-seen order inside a
    /// bucket. Duplicates are kept as given. Empty words are skipped.
    pub fn build<I, S>(words: I) -> Result<Self, BagError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buckets: FxHashMap<Signature, Vec<String>> = FxHashMap::default();
        let mut word_count = 0;

        for word in words {
            let word = word.into();
            if word.is_empty() {
                trace!("Skipping empty word");
                continue;
            }
            let signature = LetterBag::new(&word)?.signature();
            buckets.entry(signature).or_default().push(word);
            word_count += 1;
        }

        info!(
            "Indexed {word_count} words in {} anagram classes",
            buckets.len()
        );

        Ok(Self {
            buckets,
            word_count,
        })
    }

    pub fn lookup(&self, signature: &Signature) -> Option<&[String]> {
        self.buckets.get(signature).map(Vec::as_slice)
    }

    /// Number of anagram classes.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn buckets(&self) -> impl Iterator<Item = (&Signature, &[String])> {
        self.buckets.iter().map(|(s, words)| (s, words.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::encode;
    use rstest::rstest;

    const WORDS: [&str; 7] = ["chat", "chats", "chien", "niche", "lime", "mile", "as"];

    #[rstest]
    #[case("chat")]
    #[case("chats")]
    #[case("chien")]
    #[case("niche")]
    #[case("as")]
    fn lookup_finds_indexed_word(#[case] word: &str) {
        let index = WordIndex::build(WORDS).unwrap();
        let bucket = index.lookup(&encode(word).unwrap()).unwrap();
        assert!(bucket.iter().any(|w| w == word));
    }

    #[test]
    fn anagrams_share_bucket_in_input_order() {
        let index = WordIndex::build(WORDS).unwrap();
        assert_eq!(
            index.lookup(&encode("emil").unwrap()).unwrap(),
            &["lime".to_string(), "mile".to_string()]
        );
        assert_eq!(
            index.lookup(&encode("chine").unwrap()).unwrap(),
            &["chien".to_string(), "niche".to_string()]
        );
        assert_eq!(index.len(), 5);
        assert_eq!(index.word_count(), 7);
    }

    #[test]
    fn missing_class() {
        let index = WordIndex::build(WORDS).unwrap();
        assert_eq!(index.lookup(&encode("chien").unwrap()).map(|b| b.len()), Some(2));
        assert!(index.lookup(&encode("hat").unwrap()).is_none());
        assert!(index.lookup(&encode("").unwrap()).is_none());
    }

    #[test]
    fn keeps_duplicates() {
        let index = WordIndex::build(vec!["sel", "les", "sel"]).unwrap();
        assert_eq!(
            index.lookup(&encode("els").unwrap()).unwrap(),
            &["sel".to_string(), "les".to_string(), "sel".to_string()]
        );
        assert_eq!(index.word_count(), 3);
    }

    #[test]
    fn skips_empty_words() {
        let index = WordIndex::build(vec!["", "a", ""]).unwrap();
        assert_eq!(index.word_count(), 1);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn rejects_bad_words() {
        assert!(matches!(
            WordIndex::build(vec!["chat", "anticonstitutionnel"]),
            Err(BagError::OversizedWord { .. })
        ));
        assert!(matches!(
            WordIndex::build(vec!["chat", "éclair"]),
            Err(BagError::InvalidCharacter { character: 'é', .. })
        ));
    }

    #[test]
    fn every_word_matches_its_key() {
        let index = WordIndex::build(WORDS).unwrap();
        for (signature, words) in index.buckets() {
            assert!(!words.is_empty());
            for word in words {
                assert_eq!(&encode(word).unwrap(), signature);
            }
        }
        assert!(WordIndex::default().is_empty());
    }
}
