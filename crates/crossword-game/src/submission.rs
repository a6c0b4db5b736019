use std::collections::{BTreeMap, btree_map};

use crossword_core::WordNumber;

/// One batch of answers, keyed by clue number.
///
/// A submission lives for a single submit action. Words without an entry are
/// treated like words whose answer was left blank.
///
/// # Example
///
/// ```
/// use crossword_game::Submission;
///
/// let submission = Submission::from_iter([(1, "CAT"), (2, "")]);
/// assert_eq!(submission.answer(1), Some("CAT"));
/// assert_eq!(submission.answer(2), Some(""));
/// assert_eq!(submission.answer(3), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    answers: BTreeMap<WordNumber, String>,
}

impl Submission {
    /// Creates an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer for word `number`, returning any previous answer.
    pub fn insert(&mut self, number: WordNumber, answer: impl Into<String>) -> Option<String> {
        self.answers.insert(number, answer.into())
    }

    /// Returns the raw answer for word `number`.
    #[must_use]
    pub fn answer(&self, number: WordNumber) -> Option<&str> {
        self.answers.get(&number).map(String::as_str)
    }

    /// Returns the number of recorded answers, blank ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns `true` if no answer was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Returns the clue numbers that have an answer, in ascending order.
    pub fn numbers(&self) -> impl Iterator<Item = WordNumber> + '_ {
        self.answers.keys().copied()
    }

    /// Returns the answers in ascending clue-number order.
    pub fn iter(&self) -> btree_map::Iter<'_, WordNumber, String> {
        self.answers.iter()
    }
}

impl<S: Into<String>> FromIterator<(WordNumber, S)> for Submission {
    fn from_iter<T: IntoIterator<Item = (WordNumber, S)>>(iter: T) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(number, answer)| (number, answer.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Submission {
    type Item = (&'a WordNumber, &'a String);
    type IntoIter = btree_map::Iter<'a, WordNumber, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
