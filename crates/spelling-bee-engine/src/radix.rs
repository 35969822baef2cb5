//! A nested tree with one node per letter, words with a common prefix share their ancestors
//!
//! ```text
//!      r
//!     / \
//!    o   a
//!   / \   \
//!  t   b   t
//! ```
//!
//! Every node stores the set of letters that have a child and the children themselves,
//! ordered by letter. The position of the child for a letter is the number of letters
//! in the set that come before it, so no per-node map is needed.

use crate::{encode_word, BuildError, Letter, LetterSet, Matcher, Query, TraversalStats};
use std::fmt;

#[derive(Default)]
struct RadixNode {
    letters: LetterSet,
    children: Vec<RadixNode>,
    end: bool,
}

impl RadixNode {
    fn child(&self, letter: Letter) -> Option<&Self> {
        self.letters
            .contains(letter)
            .then(|| &self.children[self.letters.rank(letter)])
    }

    fn child_or_insert(&mut self, letter: Letter) -> &mut Self {
        let idx = self.letters.rank(letter);
        if !self.letters.contains(letter) {
            self.letters = self.letters.add(letter);
            self.children.insert(idx, Self::default());
        }
        &mut self.children[idx]
    }
}

// A word is as deep as it is long, dropping the children one level at a time
// would need one stack frame per letter.
impl Drop for RadixNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// A letter by letter tree of all words
#[derive(Default)]
pub struct RadixTreeMatcher {
    root: RadixNode,
    words: usize,
}

impl RadixTreeMatcher {
    /// Add a single word to the tree, adding the same word again has no effect
    ///
    /// # Errors
    ///
    /// [`BuildError::InvalidWord`] if the word contains characters outside of [a-z]
    pub fn insert(&mut self, word: &str) -> Result<(), BuildError> {
        let _ = encode_word(word)?;

        let node = word
            .bytes()
            .map(Letter::new)
            .fold(&mut self.root, RadixNode::child_or_insert);
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

    /// Return the number of nodes in the tree, including the root
    #[must_use]
    pub fn nodes(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![&self.root];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(&node.children);
        }
        count
    }

    /// Test if the word was added to the tree
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        word.bytes()
            .try_fold(&self.root, |node, b| node.child(Letter::try_new(b)?))
            .map_or(false, |node| node.end)
    }

    /// Find all solutions and report how much of the tree had to be visited
    ///
    /// The tree is searched depth first, children in alphabetical order.
    #[must_use]
    pub fn solve_with_stats(&self, query: &Query) -> (Vec<String>, TraversalStats) {
        let center = query.center();
        let letters = query.letters();

        let mut prefix = String::with_capacity(32);
        let mut found = Vec::new();
        let mut stats = TraversalStats::default();

        // node, length of the prefix above it, letter leading to it, center seen
        let mut pending = vec![(&self.root, 0, None, false)];
        while let Some((node, depth, letter, has_center)) = pending.pop() {
            prefix.truncate(depth);
            if let Some(letter) = letter {
                prefix.push(char::from(letter));
            }
            stats.enter(prefix.len());

            if node.end && has_center {
                found.push(prefix.clone());
            }

            for letter in node.letters.intersect(letters).into_iter().rev() {
                let child = &node.children[node.letters.rank(letter)];
                pending.push((child, prefix.len(), Some(letter), has_center || letter == center));
            }
        }

        tracing::trace!(%query, visited = stats.visited, "searched radix tree");
        (found, stats)
    }
}

impl fmt::Debug for RadixTreeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadixTreeMatcher")
            .field("words", &self.words)
            .field("nodes", &self.nodes())
            .finish()
    }
}

impl Matcher for RadixTreeMatcher {
    fn build<I>(words: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<String> + AsRef<str>,
    {
        let mut tree = Self::default();
        for word in words {
            tree.insert(word.as_ref())?;
        }

        tracing::debug!(words = tree.len(), nodes = tree.nodes(), "built radix tree");
        Ok(tree)
    }

    fn solve(&self, query: &Query) -> Vec<String> {
        self.solve_with_stats(query).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_prefixes() {
        let tree = RadixTreeMatcher::build(["rot", "rob", "rat"]).unwrap();

        // root, r, o, a, t, b, t
        assert_eq!(tree.nodes(), 7);
        assert_eq!(tree.len(), 3);

        let r = tree.root.child(Letter::new(b'r')).unwrap();
        assert_eq!(r.letters, LetterSet::encode("ao").unwrap());
        let ro = r.child(Letter::new(b'o')).unwrap();
        assert_eq!(ro.letters, LetterSet::encode("bt").unwrap());
        assert!(!ro.end);
        assert!(ro.child(Letter::new(b't')).unwrap().end);
        assert!(ro.child(Letter::new(b'x')).is_none());
    }

    #[test]
    fn test_children_are_ordered() {
        let tree = RadixTreeMatcher::build(["zoo", "ant", "moo", "bee"]).unwrap();

        assert_eq!(tree.root.letters, LetterSet::encode("abmz").unwrap());
        let firsts = tree
            .root
            .children
            .iter()
            .map(|c| c.letters.to_string())
            .collect::<Vec<_>>();
        assert_eq!(firsts, ["n", "e", "o", "o"]);
    }

    #[test]
    fn test_contains() {
        let tree = RadixTreeMatcher::build(["tort", "tortoise"]).unwrap();

        assert!(tree.contains("tort"));
        assert!(tree.contains("tortoise"));
        assert!(!tree.contains("tor"));
        assert!(!tree.contains("torte"));
        assert!(!tree.contains("TORT"));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut tree = RadixTreeMatcher::build(["rot", "rob"]).unwrap();
        let nodes = tree.nodes();
        tree.insert("rot").unwrap();
        tree.insert("ro").unwrap();

        assert_eq!(tree.nodes(), nodes);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_solve_depth_first_in_letter_order() {
        let tree = RadixTreeMatcher::build(["tort", "tart", "art", "tot"]).unwrap();
        let query = Query::new("t", "orabyz").unwrap();

        assert_eq!(tree.solve(&query), ["art", "tart", "tort", "tot"]);
    }

    #[test]
    fn test_stats_prune_foreign_letters() {
        let tree = RadixTreeMatcher::build(["rot", "rob", "robe", "zebra"]).unwrap();
        let query = Query::new("t", "orabyz").unwrap();

        let (found, stats) = tree.solve_with_stats(&query);
        assert_eq!(found, ["rot"]);
        // root, r, o, b, t, z; never e below b or z
        assert_eq!(stats.visited, 6);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_empty() {
        let tree = RadixTreeMatcher::build(Vec::<String>::new()).unwrap();
        let query = Query::new("t", "orabyz").unwrap();

        assert!(tree.is_empty());
        assert_eq!(tree.nodes(), 1);
        assert!(tree.solve(&query).is_empty());
    }

    #[test]
    fn test_very_long_word() {
        let word = "a".repeat(200_000);
        let tree = RadixTreeMatcher::build([word.as_str(), "tart"]).unwrap();
        assert_eq!(tree.nodes(), 1 + 200_000 + 4);
        assert!(tree.contains(&word));

        let query = Query::new("a", "bcdefg").unwrap();
        let (found, stats) = tree.solve_with_stats(&query);
        assert_eq!(found, [word]);
        assert_eq!(stats.visited, 1 + 200_000);
        assert_eq!(stats.max_depth, 200_000);

        drop(tree);
    }

    #[test]
    fn test_debug_summarizes() {
        let tree = RadixTreeMatcher::build(["rot", "rob"]).unwrap();
        assert_eq!(
            format!("{tree:?}"),
            "RadixTreeMatcher { words: 2, nodes: 5 }"
        );
    }

    #[test]
    fn test_invalid_word_leaves_tree_untouched() {
        let mut tree = RadixTreeMatcher::default();
        assert!(tree.insert("ro t").is_err());
        assert_eq!(tree.nodes(), 1);
    }
}
