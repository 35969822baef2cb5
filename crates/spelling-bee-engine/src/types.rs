//! Letters and letter sets, the bit level representation every matcher builds on

use std::{
    fmt::{self, Write},
    ops::{BitAnd, BitOr, Not},
};

/// A letter of the puzzle alphabet, can only be lowercase ASCII characters, i.e. [a-z]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: usize = 26;

    /// Create a new letter
    ///
    /// Returns None if the letter is not in [a-z]
    #[must_use]
    pub const fn try_new(b: u8) -> Option<Self> {
        match b {
            b'a'..=b'z' => Some(Self(b - b'a')),
            _ => None,
        }
    }

    /// Create a new letter from a `char`
    ///
    /// # Errors
    ///
    /// [`UnknownLetter`] if the char is not in [a-z]
    pub fn from_char(c: char) -> Result<Self, UnknownLetter> {
        u8::try_from(c)
            .ok()
            .and_then(Self::try_new)
            .ok_or(UnknownLetter(c))
    }

    /// Create a new letter
    ///
    /// # Panics
    /// Panics if the letter is not in [a-z]
    #[must_use]
    pub const fn new(b: u8) -> Self {
        match b {
            b'a'..=b'z' => Self(b - b'a'),
            _ => panic!("Invalid letter, only accept [a-z]"),
        }
    }

    /// The position of this letter in the alphabet, 0..26
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<Letter> for u8 {
    fn from(letter: Letter) -> Self {
        b'a' + letter.0
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        Self::from(u8::from(letter))
    }
}

/// A character that is not part of the alphabet was found in a word or a query
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a letter in [a-z]")]
pub struct UnknownLetter(pub char);

/// A set of letters, one bit per letter of the alphabet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The set that contains every letter of the alphabet
    pub const ALL: Self = Self(0x03FF_FFFF);

    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Encode the distinct letters of a word, ignoring their order and count
    ///
    /// # Errors
    ///
    /// [`UnknownLetter`] for the first character in the word that is not in [a-z]
    pub fn encode(word: &str) -> Result<Self, UnknownLetter> {
        word.chars()
            .try_fold(Self::new(), |set, c| Letter::from_char(c).map(|l| set.add(l)))
    }

    /// The raw bits, bit `i` is set iff the letter with index `i` is in the set
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Test if a letter is contained in this set, O(1)
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        (self.0 >> letter.0) & 1 == 1
    }

    /// Test if all letters of this set are also in `rhs`, O(1)
    #[must_use]
    pub const fn is_subset(self, rhs: Self) -> bool {
        self.0 & !rhs.0 == 0
    }

    /// Add a letter to this set, O(1)
    #[must_use]
    pub const fn add(self, letter: Letter) -> Self {
        Self(self.0 | (1 << letter.0))
    }

    /// Add all letter to this set, O(1)
    #[must_use]
    pub const fn add_all(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    /// Remove a letter from this set, O(1)
    #[must_use]
    pub const fn remove(self, letter: Letter) -> Self {
        Self(self.0 & !(1 << letter.0))
    }

    /// Keep only the letters that are also present in the `rhs` set, O(1)
    #[must_use]
    pub const fn intersect(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }

    /// The complement of this set within the 26 letter alphabet, O(1)
    ///
    /// The bits above the alphabet always stay unset.
    #[must_use]
    pub const fn negate(self) -> Self {
        Self(self.0 ^ Self::ALL.0)
    }

    /// Returns true iff the set is empty
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return the number of letters in this set
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Number of letters in this set that come before `letter` in the alphabet
    #[must_use]
    pub const fn rank(self, letter: Letter) -> usize {
        (self.0 & ((1 << letter.0) - 1)).count_ones() as usize
    }

    /// Iterate over all letters in alphabetical order
    #[must_use]
    pub const fn iter(self) -> Letters {
        Letters(self.0)
    }
}

impl BitAnd for LetterSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl BitOr for LetterSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.add_all(rhs)
    }
}

impl Not for LetterSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl From<Letter> for LetterSet {
    fn from(letter: Letter) -> Self {
        Self::new().add(letter)
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), Self::add)
    }
}

impl IntoIterator for LetterSet {
    type Item = Letter;

    type IntoIter = Letters;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in *self {
            f.write_char(letter.into())?;
        }
        Ok(())
    }
}

/// Iterator over the letters of a [`LetterSet`]
#[derive(Clone, Copy, Debug)]
pub struct Letters(u32);

impl Iterator for Letters {
    type Item = Letter;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        // cast is safe since a u32 has at most 32 trailing zeros
        #[allow(clippy::cast_possible_truncation)]
        let letter = Letter(self.0.trailing_zeros() as u8);
        self.0 &= self.0 - 1;
        Some(letter)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Letters {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let idx = 31 - self.0.leading_zeros();
        self.0 &= !(1 << idx);
        // cast is safe since idx is below 32
        #[allow(clippy::cast_possible_truncation)]
        Some(Letter(idx as u8))
    }
}

impl ExactSizeIterator for Letters {}
