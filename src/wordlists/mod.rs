//! Word lists and the daily answer table
//!
//! The allowed-guess list is a packed binary file; the answer table is a text
//! file with one target per line, indexed by day.

pub mod loader;

use crate::core::Word;

/// One day's puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub day: u16,
    pub target: Word,
}

/// Targets indexed by day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerTable {
    answers: Vec<Word>,
}

impl AnswerTable {
    #[must_use]
    pub const fn new(answers: Vec<Word>) -> Self {
        Self { answers }
    }

    /// Puzzle for `day`, or `None` past the end of the table
    #[must_use]
    pub fn puzzle(&self, day: u16) -> Option<Puzzle> {
        self.answers
            .get(usize::from(day))
            .map(|&target| Puzzle { day, target })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AnswerTable {
        AnswerTable::new(
            ["cigar", "rebut", "sissy"]
                .iter()
                .map(|w| Word::new(w).unwrap())
                .collect(),
        )
    }

    #[test]
    fn puzzle_by_day() {
        let table = table();
        let puzzle = table.puzzle(1).unwrap();
        assert_eq!(puzzle.day, 1);
        assert_eq!(puzzle.target.to_string(), "REBUT");
    }

    #[test]
    fn past_end_has_no_puzzle() {
        let table = table();
        assert_eq!(table.len(), 3);
        assert!(table.puzzle(2).is_some());
        assert!(table.puzzle(3).is_none());
        assert!(AnswerTable::default().puzzle(0).is_none());
    }
}
