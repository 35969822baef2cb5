//! Searching an FST with an automaton that only accepts solutions of a puzzle

use crate::{encode_word, BuildError, Letter, LetterSet, Matcher, Query};
use fst::{Automaton, IntoStreamer, Set, Streamer};

/// An automaton that matches the solutions of a single [`Query`]
///
/// # Examples
///
/// ```rust
/// use fst::{IntoStreamer, Set};
/// use spelling_bee_engine::{automaton::Bee, Query};
///
/// let set = Set::from_iter(["rob", "robe", "rot", "tot"]).unwrap();
/// let bee = Bee::new(&Query::new("t", "orabyz").unwrap());
///
/// let matches = set.search(bee).into_stream().into_strs().unwrap();
/// assert_eq!(matches, ["rot", "tot"]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Bee {
    center: Letter,
    letters: LetterSet,
}

impl Bee {
    /// Create a new automaton for the query
    #[must_use]
    pub const fn new(query: &Query) -> Self {
        Self {
            center: query.center(),
            letters: query.letters(),
        }
    }
}

/// The state to use during automaton matching
///
/// `None` once a letter outside of the puzzle was seen, otherwise whether
/// the center letter was part of the input so far.
pub type BeeState = Option<bool>;

impl Automaton for Bee {
    type State = BeeState;

    fn start(&self) -> Self::State {
        Some(false)
    }

    fn is_match(&self, state: &Self::State) -> bool {
        *state == Some(true)
    }

    fn accept(&self, state: &Self::State, byte: u8) -> Self::State {
        // we are already a non-match
        let has_center = (*state)?;

        // byte is invalid, i.e. not [a-z]
        let letter = Letter::try_new(byte)?;

        // letter is not part of the puzzle
        if !self.letters.contains(letter) {
            return None;
        }

        Some(has_center || letter == self.center)
    }

    fn can_match(&self, state: &Self::State) -> bool {
        state.is_some()
    }
}

/// Searches a sorted FST of all words with the [`Bee`] automaton
#[derive(Clone, Debug)]
pub struct FstMatcher {
    set: Set<Vec<u8>>,
}

impl FstMatcher {
    /// Return the number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns true iff no words were added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl Matcher for FstMatcher {
    fn build<I>(words: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<String> + AsRef<str>,
    {
        let mut words = words
            .into_iter()
            .map(|word| encode_word(word.as_ref()).map(|_| word.into()))
            .collect::<Result<Vec<String>, _>>()?;
        words.sort_unstable();
        words.dedup();

        let set = Set::from_iter(words)?;

        tracing::debug!(words = set.len(), "built fst");
        Ok(Self { set })
    }

    fn solve(&self, query: &Query) -> Vec<String> {
        let mut stream = self.set.search(Bee::new(query)).into_stream();

        let mut found = Vec::new();
        while let Some(word) = stream.next() {
            // all words were checked to be [a-z] during build
            found.push(word.iter().copied().map(char::from).collect());
        }
        found
    }
}
