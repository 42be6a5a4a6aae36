#[cfg(feature = "terminal")]
use colored::Colorize;
use core::fmt;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;
use thiserror::Error;

use super::Signature;

/// Longest letter sequence the signature layout can hold.
pub const MAX_LEN: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    #[error("Invalid character '{character}' at position {position} in \"{word}\", expected a-z")]
    InvalidCharacter {
        word: String,
        character: char,
        position: usize,
    },
    #[error("Expected at most {max_len} letters. Found word \"{word}\" of length {}", word.chars().count())]
    OversizedWord { word: String, max_len: usize },
}

/// A drawn set of tiles, kept in draw order.
///
/// Unused slots past `len` are always zero so that derived equality and
/// hashing only see the letters themselves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct LetterBag {
    letters: [u8; MAX_LEN],
    len: u8,
}

impl LetterBag {
    pub fn new(word: &str) -> Result<Self, BagError> {
        let mut letters = [0; MAX_LEN];
        let mut len = 0;

        for (position, character) in word.chars().enumerate() {
            if !character.is_ascii_lowercase() {
                return Err(BagError::InvalidCharacter {
                    word: word.to_string(),
                    character,
                    position,
                });
            }
            if position >= MAX_LEN {
                return Err(BagError::OversizedWord {
                    word: word.to_string(),
                    max_len: MAX_LEN,
                });
            }
            letters[position] = character as u8;
            len += 1;
        }

        Ok(Self { letters, len })
    }

    pub fn empty() -> Self {
        Self {
            letters: [0; MAX_LEN],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// ASCII bytes of the letters, all in `b'a'..=b'z'`.
    pub fn letters(&self) -> &[u8] {
        &self.letters[..self.len()]
    }

    pub fn signature(&self) -> Signature {
        Signature::from_letters(self.letters())
    }

    /// The bag with the letter at `position` taken out.
    pub fn without(&self, position: usize) -> Self {
        assert!(position < self.len(), "no letter at position {position}");
        let mut child = *self;
        child.letters.copy_within(position + 1..self.len(), position);
        child.len -= 1;
        child.letters[child.len()] = 0;
        child
    }

    /// Every single-letter removal, by ascending position.
    pub fn children(&self) -> impl Iterator<Item = LetterBag> + '_ {
        (0..self.len()).map(move |i| self.without(i))
    }

    #[cfg(feature = "terminal")]
    pub fn tiles(&self) -> String {
        self.letters()
            .iter()
            .map(|&l| {
                let tile = format!(" {} ", (l as char).to_ascii_uppercase());
                tile.as_str().black().on_yellow().to_string()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for LetterBag {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &l in self.letters() {
            write!(f, "{}", l as char)?;
        }
        Ok(())
    }
}

impl FromStr for LetterBag {
    type Err = BagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for LetterBag {
    type Error = BagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
