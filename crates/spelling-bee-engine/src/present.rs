//! Grouping and labelling of solutions for display

use crate::Query;
use std::fmt;

/// A single solution with its labels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The word
    pub word: String,
    /// Whether the word uses all seven letters
    pub pangram: bool,
    /// Whether the word was found in the list of common words
    pub common: bool,
}

/// Sorted and labelled solutions of a query
#[derive(Clone, Debug)]
pub struct Presentation {
    query: Query,
    solutions: Vec<Solution>,
    split: bool,
}

impl Presentation {
    /// Label all solutions of a query, treating every word as common
    #[must_use]
    pub fn new(query: Query, solutions: Vec<String>) -> Self {
        let mut presentation = Self::with_common(query, solutions, |_| true);
        presentation.split = false;
        presentation
    }

    /// Label all solutions of a query, using `common` to decide which words are common
    #[must_use]
    pub fn with_common<F>(query: Query, mut solutions: Vec<String>, mut common: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        solutions.sort_unstable();
        solutions.dedup();

        let solutions = solutions
            .into_iter()
            .map(|word| Solution {
                pangram: query.is_pangram(&word),
                common: common(&word),
                word,
            })
            .collect();

        Self {
            query,
            solutions,
            split: true,
        }
    }

    /// All solutions, in alphabetical order
    #[must_use]
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Iterate over the common solutions
    pub fn common(&self) -> impl Iterator<Item = &Solution> + Clone + '_ {
        self.solutions.iter().filter(|s| s.common)
    }

    /// Iterate over the solutions that are not common
    pub fn other(&self) -> impl Iterator<Item = &Solution> + Clone + '_ {
        self.solutions.iter().filter(|s| !s.common)
    }
}

fn write_block<'a>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    solutions: impl Iterator<Item = &'a Solution> + Clone,
) -> fmt::Result {
    writeln!(f, "    {title} - {}:", solutions.clone().count())?;
    for solution in solutions {
        let marker = if solution.pangram { " *" } else { "" };
        writeln!(f, "        {}{marker}", solution.word)?;
    }
    Ok(())
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Spelling Bee Solutions - {}:", self.query)?;
        if self.split {
            write_block(f, "Common Words", self.common())?;
            write_block(f, "Other Words", self.other())
        } else {
            write_block(f, "Words", self.solutions.iter())
        }
    }
}
