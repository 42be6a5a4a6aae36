use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Longest words reachable from a bag, all of the same `length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub length: usize,
    pub words: Vec<String>,
}

impl SearchResult {
    pub fn new(length: usize, words: Vec<String>) -> Self {
        Self { length, words }
    }

    pub fn hit(length: usize, bucket: &[String]) -> Self {
        Self::new(length, bucket.to_vec())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Keeps the longer of the two; on a tie, appends the words of `other`
    /// that are not already present, in `other`'s order.
    pub fn merge(mut self, other: SearchResult) -> SearchResult {
        match other.length.cmp(&self.length) {
            Ordering::Greater => other,
            Ordering::Less => self,
            Ordering::Equal => {
                for word in other.words {
                    if !self.words.contains(&word) {
                        self.words.push(word);
                    }
                }
                self
            }
        }
    }
}

/// Folds one branch's outcome into the best found so far.
pub fn fold_best(best: Option<SearchResult>, found: Option<SearchResult>) -> Option<SearchResult> {
    match (best, found) {
        (Some(best), Some(found)) => Some(best.merge(found)),
        (best, None) => best,
        (None, found) => found,
    }
}
