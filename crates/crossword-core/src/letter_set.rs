//! A set of confirmed letters for a single grid cell.
//!
//! This module provides [`LetterSet`], the per-cell container of
//! [`GridState`](crate::GridState). Letters are folded to uppercase on insert and
//! kept in sorted order, so the rendered form is independent of the order in
//! which submissions arrived.
//!
//! # Examples
//!
//! ```
//! use crossword_core::LetterSet;
//!
//! let mut set = LetterSet::new();
//! set.insert('d');
//! set.insert('C');
//! set.insert('D');
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains('c'));
//! assert_eq!(set.to_string(), "C, D");
//! ```

use std::{
    collections::{BTreeSet, btree_set},
    fmt::{self, Display},
};

/// Folds a submitted character to the form stored in the grid.
///
/// Characters whose uppercase form is a single character are upper-cased;
/// characters that expand to several characters (such as `ß`) are kept as
/// entered so every cell entry stays one character.
#[must_use]
pub fn fold_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

/// An ordered, deduplicated set of uppercase letters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterSet {
    letters: BTreeSet<char>,
}

impl LetterSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: BTreeSet::new(),
        }
    }

    /// Inserts `letter` after folding it to uppercase.
    ///
    /// Returns `true` if the set did not already contain the letter.
    pub fn insert(&mut self, letter: char) -> bool {
        self.letters.insert(fold_letter(letter))
    }

    /// Returns `true` if the set contains `letter` (compared after folding).
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&fold_letter(letter))
    }

    /// Returns the number of distinct letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if no letter has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Removes every letter.
    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Returns an iterator over the letters in ascending order.
    #[must_use]
    pub fn iter(&self) -> btree_set::Iter<'_, char> {
        self.letters.iter()
    }
}

/// Renders the letters joined by `", "`.
impl Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LetterSet {
    type Item = &'a char;
    type IntoIter = btree_set::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<char> for LetterSet {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        for letter in iter {
            self.insert(letter);
        }
    }
}
