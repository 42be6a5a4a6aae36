use std::time::Instant;

use fxhash::FxHashMap;
use log::debug;
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    index::WordIndex,
    structs::{result::fold_best, LetterBag, SearchResult, Signature},
};

/// How the deletion tree below a bag is walked.
///
/// All strategies agree on the best length and on the set of words.
/// `Exhaustive` and `Pruned` also agree on the order of tied words.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Every deletion path, stopping only at dictionary hits.
    Exhaustive,
    /// Skips bags shorter than the best length already found elsewhere.
    Pruned,
    /// Caches each sub-multiset's outcome for the duration of one solve.
    Memoized,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Exhaustive
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Bags whose signature was looked up.
    pub visited: usize,
}

struct Search<'a> {
    index: &'a WordIndex,
    strategy: Strategy,
    memo: FxHashMap<Signature, Option<SearchResult>>,
    visited: usize,
}

impl<'a> Search<'a> {
    fn new(index: &'a WordIndex, strategy: Strategy) -> Self {
        Self {
            index,
            strategy,
            memo: FxHashMap::default(),
            visited: 0,
        }
    }

    /// `floor` is the best length found outside this subtree; only `Pruned`
    /// looks at it.
    fn explore(&mut self, bag: LetterBag, floor: usize) -> Option<SearchResult> {
        if self.strategy == Strategy::Pruned && bag.len() < floor {
            return None;
        }

        let signature = bag.signature();
        if self.strategy == Strategy::Memoized {
            if let Some(cached) = self.memo.get(&signature) {
                return cached.clone();
            }
        }

        let found = match self.hit(&bag, &signature) {
            Some(hit) => Some(hit),
            None => {
                let mut best: Option<SearchResult> = None;
                for child in bag.children() {
                    let floor = floor.max(best.as_ref().map_or(0, |b| b.length));
                    best = fold_best(best, self.explore(child, floor));
                }
                best
            }
        };

        if self.strategy == Strategy::Memoized {
            self.memo.insert(signature, found.clone());
        }
        found
    }

    /// A dictionary hit ends the descent: shorter words below it are never
    /// looked at.
    fn hit(&mut self, bag: &LetterBag, signature: &Signature) -> Option<SearchResult> {
        self.visited += 1;
        if bag.is_empty() {
            return None;
        }
        self.index
            .lookup(signature)
            .map(|words| SearchResult::hit(bag.len(), words))
    }
}

/// Longest words that can be spelled with letters of `bag`, or `None` when no
/// non-empty sub-bag is in the dictionary.
pub fn solve(index: &WordIndex, bag: &LetterBag) -> Option<SearchResult> {
    solve_with(index, bag, Strategy::default())
}

pub fn solve_with(index: &WordIndex, bag: &LetterBag, strategy: Strategy) -> Option<SearchResult> {
    solve_with_stats(index, bag, strategy).0
}

pub fn solve_with_stats(
    index: &WordIndex,
    bag: &LetterBag,
    strategy: Strategy,
) -> (Option<SearchResult>, SearchStats) {
    let start = Instant::now();

    let (found, visited) = match strategy {
        Strategy::Pruned => {
            let mut search = Search::new(index, strategy);
            let found = search.explore(*bag, 0);
            (found, search.visited)
        }
        Strategy::Exhaustive | Strategy::Memoized => fan_out(index, *bag, strategy),
    };

    debug!(
        "Solved {bag} with {strategy}: {} after {visited} bags in {}ms",
        match &found {
            Some(found) => format!("{} letters, {:?}", found.length, found.words),
            None => "no match".to_string(),
        },
        start.elapsed().as_millis()
    );

    (found, SearchStats { visited })
}

/// Solves the root's children independently and folds them in position
/// order, so the outcome does not depend on which branch finishes first.
fn fan_out(index: &WordIndex, bag: LetterBag, strategy: Strategy) -> (Option<SearchResult>, usize) {
    let mut root = Search::new(index, strategy);
    let signature = bag.signature();
    if let Some(hit) = root.hit(&bag, &signature) {
        return (Some(hit), root.visited);
    }

    let children = bag.children().collect::<Vec<_>>();

    #[cfg(feature = "parallel")]
    let children_iter = children.into_par_iter();

    #[cfg(not(feature = "parallel"))]
    let children_iter = children.into_iter();

    let explored = children_iter
        .map(|child| {
            let mut search = Search::new(index, strategy);
            let found = search.explore(child, 0);
            (found, search.visited)
        })
        .collect::<Vec<_>>();

    explored
        .into_iter()
        .fold((None, root.visited), |(best, visited), (found, n)| {
            (fold_best(best, found), visited + n)
        })
}
