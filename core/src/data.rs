use crate::index::WordIndex;
use crate::structs::{BagError, LetterBag};
use log::{info, trace};
use std::io::{self, BufRead};
use std::{fs::File, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Unable to read word list")]
    Io(#[from] io::Error),
    #[error("Invalid word on line {line}")]
    Word {
        line: usize,
        #[source]
        source: BagError,
    },
    #[error(transparent)]
    Bag(#[from] BagError),
}

/// Loads a word list with one normalized word per line.
pub fn load_words<P>(filename: P) -> Result<WordIndex, DataError>
where
    P: AsRef<Path>,
{
    let path = filename.as_ref();
    let file = File::open(path)?;
    let index = read_words(io::BufReader::new(file))?;
    info!("Loaded {} words from {}", index.word_count(), path.display());
    Ok(index)
}

pub fn read_words<R: BufRead>(reader: R) -> Result<WordIndex, DataError> {
    let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
    let words = parse_words(lines.iter().map(String::as_str))?;
    Ok(WordIndex::build(words)?)
}

/// Trims every line and drops blank ones. Any other line must already be a
/// valid word.
pub fn parse_words<'a, I>(lines: I) -> Result<Vec<String>, DataError>
where
    I: Iterator<Item = &'a str>,
{
    let mut words = Vec::new();
    for (i, line) in lines.enumerate() {
        let word = line.trim();
        if word.is_empty() {
            trace!("Skipping blank line {}", i + 1);
            continue;
        }
        LetterBag::new(word).map_err(|source| DataError::Word { line: i + 1, source })?;
        words.push(word.to_string());
    }
    Ok(words)
}
