/*!
Building blocks to create a Spelling Bee solver.

A Spelling Bee puzzle has a center letter and six other letters.
Every word that contains the center letter and no letters besides those seven is a solution.

This crate provides several [`Matcher`]s that find all solutions in a word list.
They all return the same words, but differ in how they prepare the word list:

- [`NaiveScanner`] checks every word for every query
- [`BitmaskMatcher`] checks every distinct letter set with a handful of bit operations
- [`PrefixTreeMatcher`] walks a flat map of prefixes, only following puzzle letters
- [`RadixTreeMatcher`] walks a nested letter tree, only following puzzle letters
- [`FstMatcher`] searches an FST with the [`automaton::Bee`] automaton

A matcher is built once per word list and can answer any number of queries.

# Example

```rust
use spelling_bee_engine::{Matcher, Query, RadixTreeMatcher};

let tree = RadixTreeMatcher::build(["rot", "rob", "rat", "art", "tar", "too"]).unwrap();

let query = Query::new("b", "oratyz").unwrap();
assert_eq!(tree.solve(&query), ["rob"]);

let query = Query::new("t", "orabyz").unwrap();
let mut solutions = tree.solve(&query);
solutions.sort();
assert_eq!(solutions, ["art", "rat", "rot", "tar", "too"]);
```

Picking the matcher at runtime goes through [`Engine`]:

```rust
use spelling_bee_engine::{Engine, Query, Strategy};

let engine = Engine::build("bitmask".parse::<Strategy>().unwrap(), ["tart", "trot", "zebra"]).unwrap();
let mut solutions = engine.solve(&Query::new("t", "orabyz").unwrap());
solutions.sort();
assert_eq!(solutions, ["tart", "trot"]);
```
*/

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use std::{fmt, str::FromStr};

pub mod automaton;
pub mod bitmask;
pub mod naive;
pub mod prefix;
pub mod prepare;
pub mod present;
pub mod query;
pub mod radix;
pub mod types;

pub use automaton::FstMatcher;
pub use bitmask::BitmaskMatcher;
pub use naive::NaiveScanner;
pub use prefix::PrefixTreeMatcher;
pub use query::{parse_center, validate, InvalidQuery, Query};
pub use radix::RadixTreeMatcher;
pub use types::{Letter, LetterSet, UnknownLetter};

/// Prepares a word list once and finds the solutions for any number of queries
pub trait Matcher: Sized {
    /// Build the search structure for a word list
    ///
    /// # Errors
    ///
    /// [`BuildError::InvalidWord`] if any word contains characters outside of [a-z]
    fn build<I>(words: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<String> + AsRef<str>;

    /// Find all words that contain the center letter and only letters of the query
    ///
    /// The order of the solutions depends on the matcher.
    fn solve(&self, query: &Query) -> Vec<String>;
}

/// The word list could not be prepared for searching
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A word contains a character that is not a letter in [a-z]
    #[error("The word '{word}' cannot be used")]
    InvalidWord {
        /// The offending word
        word: String,
        /// The character that is not a letter
        #[source]
        source: UnknownLetter,
    },
    /// The FST could not be built
    #[error("The word list could not be turned into an FST")]
    Fst(#[from] fst::Error),
}

pub(crate) fn encode_word(word: &str) -> Result<LetterSet, BuildError> {
    LetterSet::encode(word).map_err(|source| BuildError::InvalidWord {
        word: word.to_owned(),
        source,
    })
}

/// How much of a tree was visited to answer a query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Number of nodes that were entered, including the root
    pub visited: usize,
    /// Length of the longest prefix that was entered
    pub max_depth: usize,
}

impl TraversalStats {
    pub(crate) fn enter(&mut self, depth: usize) {
        self.visited += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// The available matchers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`NaiveScanner`]
    Naive,
    /// [`BitmaskMatcher`]
    Bitmask,
    /// [`PrefixTreeMatcher`]
    PrefixTree,
    /// [`RadixTreeMatcher`]
    RadixTree,
    /// [`FstMatcher`]
    Fst,
}

impl Strategy {
    /// All strategies, the reference implementation first
    pub const ALL: [Self; 5] = [
        Self::Naive,
        Self::Bitmask,
        Self::PrefixTree,
        Self::RadixTree,
        Self::Fst,
    ];

    /// The name used to parse and display this strategy
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Bitmask => "bitmask",
            Self::PrefixTree => "prefix-tree",
            Self::RadixTree => "radix-tree",
            Self::Fst => "fst",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The name does not belong to any [`Strategy`]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown strategy '{0}', expected one of naive, bitmask, prefix-tree, radix-tree, fst")]
pub struct UnknownStrategy(String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}

/// A matcher of a [`Strategy`] that is chosen at runtime
#[derive(Debug)]
pub enum Engine {
    /// [`NaiveScanner`]
    Naive(NaiveScanner),
    /// [`BitmaskMatcher`]
    Bitmask(BitmaskMatcher),
    /// [`PrefixTreeMatcher`]
    PrefixTree(PrefixTreeMatcher),
    /// [`RadixTreeMatcher`]
    RadixTree(RadixTreeMatcher),
    /// [`FstMatcher`]
    Fst(FstMatcher),
}

impl Engine {
    /// Build the matcher of the given strategy
    ///
    /// # Errors
    ///
    /// [`BuildError`] if the matcher could not be built
    pub fn build<I>(strategy: Strategy, words: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<String> + AsRef<str>,
    {
        Ok(match strategy {
            Strategy::Naive => Self::Naive(NaiveScanner::build(words)?),
            Strategy::Bitmask => Self::Bitmask(BitmaskMatcher::build(words)?),
            Strategy::PrefixTree => Self::PrefixTree(PrefixTreeMatcher::build(words)?),
            Strategy::RadixTree => Self::RadixTree(RadixTreeMatcher::build(words)?),
            Strategy::Fst => Self::Fst(FstMatcher::build(words)?),
        })
    }

    /// The strategy of this matcher
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        match self {
            Self::Naive(_) => Strategy::Naive,
            Self::Bitmask(_) => Strategy::Bitmask,
            Self::PrefixTree(_) => Strategy::PrefixTree,
            Self::RadixTree(_) => Strategy::RadixTree,
            Self::Fst(_) => Strategy::Fst,
        }
    }

    /// Find all solutions for the query
    #[must_use]
    pub fn solve(&self, query: &Query) -> Vec<String> {
        match self {
            Self::Naive(m) => m.solve(query),
            Self::Bitmask(m) => m.solve(query),
            Self::PrefixTree(m) => m.solve(query),
            Self::RadixTree(m) => m.solve(query),
            Self::Fst(m) => m.solve(query),
        }
    }

    /// Find all solutions for the query, with the traversal statistics of the tree matchers
    ///
    /// The other matchers do not traverse a tree and report no statistics.
    #[must_use]
    pub fn solve_with_stats(&self, query: &Query) -> (Vec<String>, Option<TraversalStats>) {
        match self {
            Self::PrefixTree(m) => {
                let (found, stats) = m.solve_with_stats(query);
                (found, Some(stats))
            }
            Self::RadixTree(m) => {
                let (found, stats) = m.solve_with_stats(query);
                (found, Some(stats))
            }
            _ => (self.solve(query), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const WORDS: [&str; 6] = ["rot", "rob", "rat", "art", "tar", "too"];

    fn solve_all(words: &[String], query: &Query) -> Vec<(Strategy, BTreeSet<String>)> {
        Strategy::ALL
            .into_iter()
            .map(|strategy| {
                let engine = Engine::build(strategy, words.iter().map(String::as_str)).unwrap();
                assert_eq!(engine.strategy(), strategy);
                (strategy, engine.solve(query).into_iter().collect())
            })
            .collect()
    }

    fn assert_same_as_naive(words: &[String], query: &Query) -> BTreeSet<String> {
        let mut results = solve_all(words, query).into_iter();
        let (_, expected) = results.next().unwrap();

        for (strategy, solutions) in results {
            assert_eq!(solutions, expected, "{strategy} differs from naive for {query}");
        }

        for word in words {
            assert_eq!(
                expected.contains(word),
                query.matches(word),
                "{word} for {query}"
            );
        }

        expected
    }

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| String::from(w)).collect()
    }

    #[test]
    fn test_all_but_one_word_match() {
        let query = Query::new("t", "orabyz").unwrap();
        let found = assert_same_as_naive(&words(&WORDS), &query);

        // "rob" is the only word without a 't'
        let expected = words(&["rot", "rat", "art", "tar", "too"])
            .into_iter()
            .collect::<BTreeSet<_>>();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_only_center_word_matches() {
        let query = Query::new("b", "oratyz").unwrap();
        let found = assert_same_as_naive(&words(&WORDS), &query);

        assert_eq!(found, BTreeSet::from([String::from("rob")]));
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let query = Query::new("q", "uickly").unwrap();
        let found = assert_same_as_naive(&words(&WORDS), &query);
        assert!(found.is_empty());

        let found = assert_same_as_naive(&[], &query);
        assert!(found.is_empty());
    }

    #[test]
    fn test_word_equal_to_prefix_of_another() {
        let query = Query::new("o", "ctpnme").unwrap();
        let list = words(&[
            "compete", "competent", "competence", "come", "comet", "tempo", "temp", "poem", "moon",
            "noon", "net", "cope", "copen", "coopt",
        ]);
        let found = assert_same_as_naive(&list, &query);

        assert!(found.contains("competent"));
        assert!(found.contains("competence"));
        assert!(found.contains("compete"));
        assert!(found.contains("come"));
        assert!(!found.contains("temp"));
        assert!(!found.contains("net"));
    }

    #[test]
    fn test_independent_of_input_order() {
        let query = Query::new("t", "orabyz").unwrap();
        let mut list = words(&["tarot", "zebra", "tort", "abbot", "otto", "robot", "tattoo"]);
        let forward = assert_same_as_naive(&list, &query);

        list.reverse();
        let backward = assert_same_as_naive(&list, &query);
        assert_eq!(forward, backward);

        // building twice from the same words gives the same answers
        list.extend(list.clone());
        let doubled = assert_same_as_naive(&list, &query);
        assert_eq!(forward, doubled);
    }

    /// Deterministic words over a small alphabet, so that many of them are solutions
    fn generated_words(count: usize, mut seed: u64) -> Vec<String> {
        const ALPHABET: &[u8] = b"abcdefghijklmnoprstz";
        let mut next = move || {
            // xorshift
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };

        (0..count)
            .map(|_| {
                let len = 1 + (next() % 9) as usize;
                (0..len)
                    .map(|_| char::from(ALPHABET[(next() % ALPHABET.len() as u64) as usize]))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_generated_word_lists() {
        let queries = [
            ("a", "bcdefg"),
            ("e", "abcdst"),
            ("o", "nprstz"),
            ("z", "abcdeo"),
            ("m", "ghijkl"),
        ]
        .map(|(center, others)| Query::new(center, others).unwrap());

        for seed in [1, 42, 0xdead_beef] {
            let list = generated_words(2000, seed);
            for query in &queries {
                let _ = assert_same_as_naive(&list, query);
            }
        }
    }

    #[test]
    fn test_generated_word_lists_have_solutions() {
        let list = generated_words(2000, 42);
        let query = Query::new("a", "bcdefg").unwrap();
        assert!(!assert_same_as_naive(&list, &query).is_empty());
    }

    #[test]
    fn test_invalid_word_fails_every_strategy() {
        for strategy in Strategy::ALL {
            let err = Engine::build(strategy, ["rot", "Rob"]).unwrap_err();
            assert!(
                matches!(err, BuildError::InvalidWord { ref word, source: UnknownLetter('R') } if word == "Rob"),
                "{strategy}: {err:?}"
            );
        }
    }

    #[test]
    fn test_stats_only_for_trees() {
        let query = Query::new("t", "orabyz").unwrap();
        for strategy in Strategy::ALL {
            let engine = Engine::build(strategy, WORDS).unwrap();
            let (mut found, stats) = engine.solve_with_stats(&query);
            found.sort_unstable();
            assert_eq!(found, ["art", "rat", "rot", "tar", "too"], "{strategy}");

            match strategy {
                Strategy::PrefixTree | Strategy::RadixTree => {
                    let stats = stats.unwrap();
                    assert_eq!(stats.max_depth, 3, "{strategy}");
                    assert!(stats.visited > WORDS.len(), "{strategy}");
                }
                _ => assert_eq!(stats, None, "{strategy}"),
            }
        }
    }

    #[test]
    fn test_strategy_names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("Radix-Tree".parse::<Strategy>(), Ok(Strategy::RadixTree));
        assert_eq!(
            "trie".parse::<Strategy>(),
            Err(UnknownStrategy(String::from("trie")))
        );
    }
}
