//! The reference matcher, scans the whole word list for every query

use crate::{encode_word, BuildError, Letter, Matcher, Query};

/// Checks every word of the word list against the query
///
/// Slow, but obviously correct. All other matchers are tested against this one.
#[derive(Clone, Debug, Default)]
pub struct NaiveScanner {
    words: Vec<String>,
}

impl Matcher for NaiveScanner {
    fn build<I>(words: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<String> + AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| encode_word(word.as_ref()).map(|_| word.into()))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(words = words.len(), "built naive scanner");
        Ok(Self { words })
    }

    fn solve(&self, query: &Query) -> Vec<String> {
        let center = u8::from(query.center());
        let letters = query.letters();

        self.words
            .iter()
            .filter(|word| word.as_bytes().contains(&center))
            .filter(|word| {
                word.bytes()
                    .all(|b| Letter::try_new(b).map_or(false, |l| letters.contains(l)))
            })
            .cloned()
            .collect()
    }
}
