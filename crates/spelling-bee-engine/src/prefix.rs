//! A flat prefix tree, every node is keyed by the full prefix that leads to it
//!
//! ```text
//!          ""
//!          |
//!          r
//!        /   \
//!      ro     ra
//!     /  \      \
//!   rot  rob    rat
//! ```
//!
//! Each prefix only knows the letters that can follow it and whether it is a word itself.
//! The tree is searched from the empty prefix, following only letters of the puzzle.

use crate::{encode_word, BuildError, Letter, LetterSet, Matcher, Query, TraversalStats};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct PrefixNode {
    next: LetterSet,
    end: bool,
}

/// A prefix tree stored as a map from prefix to the letters that may follow
#[derive(Clone, Debug)]
pub struct PrefixTreeMatcher {
    nodes: HashMap<String, PrefixNode>,
    words: usize,
}

impl Default for PrefixTreeMatcher {
    fn default() -> Self {
        let mut nodes = HashMap::with_capacity(1024);
        // the root can be followed by any letter, the search will stop at missing prefixes
        let _ = nodes.insert(
            String::new(),
            PrefixNode {
                next: LetterSet::ALL,
                end: false,
            },
        );
        Self { nodes, words: 0 }
    }
}

impl PrefixTreeMatcher {
    /// Add a single word to the tree, adding the same word again has no effect
    ///
    /// # Errors
    ///
    /// [`BuildError::InvalidWord`] if the word contains characters outside of [a-z]
    pub fn insert(&mut self, word: &str) -> Result<(), BuildError> {
        let _ = encode_word(word)?;

        for (pos, b) in word.bytes().enumerate() {
            let node = self.nodes.entry(word[..pos].to_owned()).or_default();
            node.next = node.next.add(Letter::new(b));
        }
        let node = self.nodes.entry(word.to_owned()).or_default();
        if !node.end {
            node.end = true;
            self.words += 1;
        }

        Ok(())
    }

    /// Return the number of distinct words in the tree
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    /// Returns true iff no word was added
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Return the number of prefixes in the tree, including the empty one
    #[must_use]
    pub fn prefixes(&self) -> usize {
        self.nodes.len()
    }

    /// Test if the word was added to the tree
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.nodes.get(word).map_or(false, |node| node.end)
    }

    /// Find all solutions and report how much of the tree had to be visited
    ///
    /// The tree is searched depth first, letters in alphabetical order.
    /// Prefixes that are not stored end their branch and are not counted as visited.
    #[must_use]
    pub fn solve_with_stats(&self, query: &Query) -> (Vec<String>, TraversalStats) {
        let center = query.center();
        let letters = query.letters();

        let mut prefix = String::with_capacity(32);
        let mut found = Vec::new();
        let mut stats = TraversalStats::default();

        // length of the prefix above, letter to append, center seen
        let mut pending = vec![(0, None, false)];
        while let Some((depth, letter, has_center)) = pending.pop() {
            prefix.truncate(depth);
            if let Some(letter) = letter {
                prefix.push(char::from(letter));
            }
            let node = match self.nodes.get(prefix.as_str()) {
                Some(node) => node,
                None => continue,
            };
            stats.enter(prefix.len());

            if node.end && has_center {
                found.push(prefix.clone());
            }

            for letter in node.next.intersect(letters).into_iter().rev() {
                pending.push((prefix.len(), Some(letter), has_center || letter == center));
            }
        }

        tracing::trace!(%query, visited = stats.visited, "searched prefix tree");
        (found, stats)
    }
}

impl Matcher for PrefixTreeMatcher {
    fn build<I>(words: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<String> + AsRef<str>,
    {
        let mut tree = Self::default();
        for word in words {
            tree.insert(word.as_ref())?;
        }

        tracing::debug!(words = tree.len(), prefixes = tree.prefixes(), "built prefix tree");
        Ok(tree)
    }

    fn solve(&self, query: &Query) -> Vec<String> {
        self.solve_with_stats(query).0
    }
}
