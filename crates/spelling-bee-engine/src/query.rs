//! The puzzle query and the validation shared by all matchers

use crate::types::{Letter, LetterSet, UnknownLetter};
use std::{collections::HashSet, fmt};

/// Number of letters besides the center letter
pub const OTHER_LETTERS: usize = 6;

/// The shape of a query does not describe a Spelling Bee puzzle
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuery {
    /// The other letters contain the same letter more than once
    #[error("List of other letters ({0}) cannot contain repeated letters")]
    DuplicateOtherLetters(String),
    /// There are not exactly six other letters
    #[error("There should be exactly 6 other letters, got {count} - {others}")]
    WrongOtherCount {
        /// The number of distinct other letters
        count: usize,
        /// The other letters as given
        others: String,
    },
    /// The center is not a single letter
    #[error("There can be only one center letter, got {len} - {center}")]
    WrongCenterLength {
        /// The number of characters in the center
        len: usize,
        /// The center as given
        center: String,
    },
    /// The center letter is also one of the other letters
    #[error("Center letter ({center}) cannot be in list of other letters ({others})")]
    CenterInOthers {
        /// The center letter
        center: char,
        /// The other letters as given
        others: String,
    },
    /// A letter of the query is not part of the alphabet
    #[error(transparent)]
    UnknownLetter(#[from] UnknownLetter),
}

/// Check that `center` and `others` describe a Spelling Bee puzzle
///
/// The checks run in order, the first failing one is reported:
/// repeated other letters, the number of distinct other letters,
/// the length of the center, and finally the center being one of the others.
///
/// # Errors
///
/// [`InvalidQuery`] describing the first violated rule
pub fn validate(center: &str, others: &str) -> Result<(), InvalidQuery> {
    let distinct = others.chars().collect::<HashSet<_>>();
    let count = others.chars().count();
    if count > distinct.len() {
        return Err(InvalidQuery::DuplicateOtherLetters(others.to_owned()));
    }
    if distinct.len() != OTHER_LETTERS {
        return Err(InvalidQuery::WrongOtherCount {
            count: distinct.len(),
            others: others.to_owned(),
        });
    }

    let center_letter = single_char(center)?;
    if distinct.contains(&center_letter) {
        return Err(InvalidQuery::CenterInOthers {
            center: center_letter,
            others: others.to_owned(),
        });
    }

    Ok(())
}

fn single_char(center: &str) -> Result<char, InvalidQuery> {
    let mut chars = center.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(InvalidQuery::WrongCenterLength {
            len: center.chars().count(),
            center: center.to_owned(),
        }),
    }
}

/// Check the center on its own, before the other letters are known
///
/// # Errors
///
/// [`InvalidQuery::WrongCenterLength`] unless `center` is a single character,
/// [`InvalidQuery::UnknownLetter`] if that character is not in [a-z]
pub fn parse_center(center: &str) -> Result<Letter, InvalidQuery> {
    Ok(Letter::from_char(single_char(center)?)?)
}

/// A validated puzzle: one center letter and six distinct other letters
///
/// Can only be created through [`Query::new`], which runs [`validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Query {
    center: Letter,
    others: LetterSet,
}

impl Query {
    /// Validate and create a new query
    ///
    /// # Errors
    ///
    /// [`InvalidQuery`] if the query has the wrong shape or uses letters outside of [a-z]
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spelling_bee_engine::{InvalidQuery, Query};
    /// let query = Query::new("t", "orabyz").unwrap();
    /// assert_eq!(query.to_string(), "[T | A B O R Y Z]");
    ///
    /// assert!(matches!(Query::new("t", "ortt"), Err(InvalidQuery::DuplicateOtherLetters(_))));
    /// ```
    pub fn new(center: &str, others: &str) -> Result<Self, InvalidQuery> {
        validate(center, others)?;

        let center = parse_center(center)?;
        let others = others
            .chars()
            .map(Letter::from_char)
            .collect::<Result<LetterSet, _>>()?;

        Ok(Self { center, others })
    }

    /// The letter every solution must contain
    #[must_use]
    pub const fn center(&self) -> Letter {
        self.center
    }

    /// The six letters a solution may contain in addition to the center
    #[must_use]
    pub const fn others(&self) -> LetterSet {
        self.others
    }

    /// All seven letters of the puzzle
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.others.add(self.center)
    }

    /// Test whether a word satisfies this puzzle by looking at every letter
    ///
    /// Words with characters outside of [a-z] never match.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let center = char::from(self.center);
        word.contains(center)
            && LetterSet::encode(word).map_or(false, |set| set.is_subset(self.letters()))
    }

    /// Test whether a word uses all seven letters of the puzzle
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        LetterSet::encode(word).map_or(false, |set| set == self.letters())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} |", char::from(self.center).to_ascii_uppercase())?;
        for letter in self.others {
            write!(f, " {}", char::from(letter).to_ascii_uppercase())?;
        }
        f.write_str("]")
    }
}
