//! Prepare a raw word list into the words that can be the solution of any puzzle

use crate::LetterSet;

/// Words shorter than this are never accepted
pub const MIN_WORD_LEN: usize = 4;

/// Words longer than this are never accepted
pub const MAX_WORD_LEN: usize = 19;

/// A puzzle has one center letter and six others
pub const MAX_DISTINCT_LETTERS: u32 = 7;

/// Test if a word could ever be a solution of a puzzle
///
/// The word must be lowercase already.
#[must_use]
pub fn is_playable(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
        && LetterSet::encode(word).map_or(false, |set| set.len() <= MAX_DISTINCT_LETTERS)
}

/// Clean a word list by removing all words that cannot be a solution and all blocked words
///
/// Words are lowercased before they are checked. Any word with a character outside
/// of [a-z], with less than four or more than 19 letters, or with more than seven
/// distinct letters is removed. The result is sorted and free of duplicates.
pub fn clean_word_list<I, F>(words: I, mut block_list: F) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: FnMut(&str) -> bool,
{
    let mut cleaned = Vec::with_capacity(1024);

    for word in words {
        let word = word.as_ref().trim().to_lowercase();
        if is_playable(&word) && !block_list(&word) {
            cleaned.push(word);
        }
    }

    cleaned.sort_unstable();
    cleaned.dedup();
    cleaned
}
