use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

use crate::structs::{BagError, LetterBag};

/// Tiles drawn per round.
pub const BAG_SIZE: usize = 10;
pub const DEFAULT_VOWELS: usize = 4;

const FRENCH_VOWELS: [(char, usize); 6] = [
    ('a', 48),
    ('e', 92),
    ('i', 43),
    ('o', 33),
    ('u', 29),
    ('y', 3),
];

const FRENCH_CONSONANTS: [(char, usize); 19] = [
    ('b', 7),
    ('c', 19),
    ('d', 21),
    ('f', 7),
    ('h', 7),
    ('j', 2),
    ('k', 2),
    ('l', 28),
    ('m', 15),
    ('n', 36),
    ('p', 14),
    ('q', 4),
    ('r', 35),
    ('s', 37),
    ('t', 34),
    ('v', 7),
    ('w', 1),
    ('x', 3),
    ('z', 1),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LetterKind {
    Vowel,
    Consonant,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("Cannot draw {vowels} vowels into a bag of {size} letters")]
    TooManyVowels { vowels: usize, size: usize },
    #[error("Requested {requested} tiles from the {kind} pool, which only holds {available}")]
    PoolExhausted {
        kind: LetterKind,
        requested: usize,
        available: usize,
    },
    #[error(transparent)]
    Bag(#[from] BagError),
}

/// Relative frequency of each letter, as a number of tiles in a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    pub vowels: Vec<(char, usize)>,
    pub consonants: Vec<(char, usize)>,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::french()
    }
}

impl FrequencyTable {
    pub fn french() -> Self {
        Self {
            vowels: FRENCH_VOWELS.to_vec(),
            consonants: FRENCH_CONSONANTS.to_vec(),
        }
    }

    pub fn weights(&self, kind: LetterKind) -> &[(char, usize)] {
        match kind {
            LetterKind::Vowel => &self.vowels,
            LetterKind::Consonant => &self.consonants,
        }
    }

    /// Every tile of the pool, one entry per slot.
    pub fn pool(&self, kind: LetterKind) -> Vec<char> {
        self.weights(kind)
            .iter()
            .flat_map(|&(letter, count)| std::iter::repeat(letter).take(count))
            .collect()
    }

    pub fn kind_of(&self, letter: char) -> Option<LetterKind> {
        LetterKind::iter().find(|&kind| self.weights(kind).iter().any(|&(l, _)| l == letter))
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R, vowels: usize) -> Result<LetterBag, DrawError> {
        self.draw_sized(rng, vowels, BAG_SIZE)
    }

    /// Picks distinct slots from each pool, so a letter never shows up more
    /// often than it has tiles, then shuffles vowels and consonants together.
    pub fn draw_sized<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        vowels: usize,
        size: usize,
    ) -> Result<LetterBag, DrawError> {
        if vowels > size {
            return Err(DrawError::TooManyVowels { vowels, size });
        }

        let mut letters = self.pick(rng, LetterKind::Vowel, vowels)?;
        letters.extend(self.pick(rng, LetterKind::Consonant, size - vowels)?);
        letters.shuffle(rng);

        Ok(LetterBag::new(&letters.into_iter().collect::<String>())?)
    }

    fn pick<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        kind: LetterKind,
        n: usize,
    ) -> Result<Vec<char>, DrawError> {
        let pool = self.pool(kind);
        if n > pool.len() {
            return Err(DrawError::PoolExhausted {
                kind,
                requested: n,
                available: pool.len(),
            });
        }
        Ok(pool.choose_multiple(rng, n).copied().collect())
    }
}
