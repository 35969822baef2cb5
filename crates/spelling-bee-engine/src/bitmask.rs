//! Matching on the letter set of a word instead of the word itself
//!
//! Every word is encoded as a [`LetterSet`], which forgets about the order and the count
//! of the letters. Anagrams and words with repeated letters end up with the same set
//! and need to be checked only once.
//!
//! Whether a set is a valid solution is decided for all 26 letters at once.
//! For a single letter bit, with `W` for "in the word", `C` for "is the center",
//! and `O` for "is one of the others", the word becomes invalid for:
//!
//! | W | C | O | invalid |
//! |---|---|---|---------|
//! | 0 | 0 | 0 | 0       |
//! | 0 | 0 | 1 | 0       |
//! | 0 | 1 | 0 | 1       |
//! | 0 | 1 | 1 | -       |
//! | 1 | 0 | 0 | 1       |
//! | 1 | 0 | 1 | 0       |
//! | 1 | 1 | 0 | 0       |
//! | 1 | 1 | 1 | -       |
//!
//! A letter cannot be the center and one of the others, so those rows are free to be 0.
//! This leaves `!O & ((!W & C) | (W & !C))`, and the word is valid iff no bit is set.

use crate::{encode_word, BuildError, LetterSet, Matcher, Query};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Words that share the same set of letters
type Bucket = SmallVec<[String; 2]>;

/// Groups words by their letter set and checks each set with bitwise operations
#[derive(Clone, Debug, Default)]
pub struct BitmaskMatcher {
    sets: Vec<LetterSet>,
    buckets: Vec<Bucket>,
    index: HashMap<LetterSet, usize>,
}

impl BitmaskMatcher {
    /// Add a single word to the bucket of its letter set
    ///
    /// # Errors
    ///
    /// [`BuildError::InvalidWord`] if the word contains characters outside of [a-z]
    pub fn insert(&mut self, word: impl Into<String> + AsRef<str>) -> Result<(), BuildError> {
        let set = encode_word(word.as_ref())?;
        let idx = match self.index.get(&set) {
            Some(&idx) => idx,
            None => {
                self.sets.push(set);
                self.buckets.push(Bucket::new());
                let _ = self.index.insert(set, self.sets.len() - 1);
                self.sets.len() - 1
            }
        };
        self.buckets[idx].push(word.into());
        Ok(())
    }

    /// Return the number of distinct letter sets
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true iff no words were added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// The letters that prevent a word with the letter set `word` from being a solution
#[must_use]
pub const fn invalid_letters(word: LetterSet, center: LetterSet, others: LetterSet) -> LetterSet {
    others
        .negate()
        .intersect(word.negate().intersect(center).add_all(word.intersect(center.negate())))
}

impl Matcher for BitmaskMatcher {
    fn build<I>(words: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<String> + AsRef<str>,
    {
        let mut matcher = Self {
            index: HashMap::with_capacity(1024),
            ..Self::default()
        };
        for word in words {
            matcher.insert(word)?;
        }

        tracing::debug!(sets = matcher.sets.len(), "built bitmask matcher");
        Ok(matcher)
    }

    fn solve(&self, query: &Query) -> Vec<String> {
        let center = LetterSet::from(query.center());
        let others = query.others();

        self.sets
            .iter()
            .zip(&self.buckets)
            .filter(|(&set, _)| invalid_letters(set, center, others).is_empty())
            .flat_map(|(_, words)| words.iter().cloned())
            .collect()
    }
}
