//! Tile colouring for the guess grid
//!
//! The category of a tile depends on the whole row it sits in: a letter that
//! occurs `k` times in the target is coloured at most `k` times, counting the
//! row left to right. Correct-position matches get no priority in that count.

use super::{GuessGrid, WORD_LENGTH, Word};

/// Display category of one tile
///
/// Variants are ordered from least to most informative, so `max` picks the
/// best known hint for a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileType {
    /// No letter typed
    Empty,
    /// Letter typed in the row still being edited
    Unsubmitted,
    /// Letter not in the target (or already accounted for)
    Absent,
    /// Letter in the target at a different position
    Present,
    /// Letter in the target at this position
    Correct,
}

/// Evaluate the tile at (`row`, `pos`)
///
/// `num_submitted` is the number of rows already submitted; the row at that
/// index is the one being typed and is never coloured.
///
/// # Panics
/// Panics if `row >= MAX_GUESSES` or `pos >= WORD_LENGTH`. Indices are
/// validated by the caller.
///
/// # Examples
/// ```
/// use daily_wordle::core::{GuessGrid, GuessRow, TileType, Word, evaluate};
///
/// let target = Word::new("allow").unwrap();
/// let mut grid = GuessGrid::default();
/// grid[0] = GuessRow::from_word(&Word::new("llama").unwrap());
///
/// assert_eq!(evaluate(&grid, 0, 0, &target, 1), TileType::Present);
/// assert_eq!(evaluate(&grid, 0, 1, &target, 1), TileType::Correct);
/// ```
#[must_use]
pub fn evaluate(
    grid: &GuessGrid,
    row: usize,
    pos: usize,
    target: &Word,
    num_submitted: usize,
) -> TileType {
    let guess = &grid[row];
    let Some(letter) = guess.letter(pos) else {
        return TileType::Empty;
    };

    if row == num_submitted {
        return TileType::Unsubmitted;
    }
    if letter == target.char_at(pos) {
        return TileType::Correct;
    }

    let count_target = target.count_of(letter);
    let count_prior = guess.bytes()[..pos]
        .iter()
        .filter(|&&c| c == letter)
        .count();

    if count_target > count_prior {
        TileType::Present
    } else {
        TileType::Absent
    }
}

/// Evaluate every tile of one row
#[must_use]
pub fn evaluate_row(
    grid: &GuessGrid,
    row: usize,
    target: &Word,
    num_submitted: usize,
) -> [TileType; WORD_LENGTH] {
    std::array::from_fn(|pos| evaluate(grid, row, pos, target, num_submitted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EMPTY, GuessRow};

    fn grid_with(rows: &[&str]) -> GuessGrid {
        let mut grid = GuessGrid::default();
        for (i, text) in rows.iter().enumerate() {
            grid[i] = GuessRow::from_word(&Word::new(text).unwrap());
        }
        grid
    }

    #[test]
    fn empty_position_is_empty() {
        let target = Word::new("crane").unwrap();
        let grid = GuessGrid::default();
        assert_eq!(evaluate(&grid, 0, 0, &target, 0), TileType::Empty);
        assert_eq!(evaluate(&grid, 3, 4, &target, 2), TileType::Empty);
    }

    #[test]
    fn in_progress_row_is_unsubmitted() {
        let target = Word::new("crane").unwrap();
        let mut grid = GuessGrid::default();
        grid[1] = GuessRow::from_bytes([b'C', b'R', EMPTY, EMPTY, EMPTY]);

        assert_eq!(evaluate(&grid, 1, 0, &target, 1), TileType::Unsubmitted);
        assert_eq!(evaluate(&grid, 1, 1, &target, 1), TileType::Unsubmitted);
        assert_eq!(evaluate(&grid, 1, 2, &target, 1), TileType::Empty);
    }

    #[test]
    fn all_correct() {
        let target = Word::new("crane").unwrap();
        let grid = grid_with(&["crane"]);
        assert_eq!(
            evaluate_row(&grid, 0, &target, 1),
            [TileType::Correct; WORD_LENGTH]
        );
    }

    #[test]
    fn all_absent() {
        let target = Word::new("abcde").unwrap();
        let grid = grid_with(&["fghij"]);
        assert_eq!(
            evaluate_row(&grid, 0, &target, 1),
            [TileType::Absent; WORD_LENGTH]
        );
    }

    #[test]
    fn duplicate_letters_allow_llama() {
        // ALLOW has two L's and one A
        let target = Word::new("allow").unwrap();
        let grid = grid_with(&["llama"]);

        assert_eq!(
            evaluate_row(&grid, 0, &target, 1),
            [
                TileType::Present, // L: 2 in target, 0 before
                TileType::Correct, // L at the right position
                TileType::Present, // A: 1 in target, 0 before
                TileType::Absent,  // M
                TileType::Absent,  // A: 1 in target, 1 before
            ]
        );
    }

    #[test]
    fn excess_duplicates_marked_absent_left_to_right() {
        // SPEED has two E's; EERIE guesses three, none correctly placed
        let target = Word::new("speed").unwrap();
        let grid = grid_with(&["eerie"]);

        assert_eq!(
            evaluate_row(&grid, 0, &target, 1),
            [
                TileType::Present,
                TileType::Present,
                TileType::Absent,
                TileType::Absent,
                TileType::Absent,
            ]
        );
    }

    #[test]
    fn correct_match_gets_no_priority() {
        // TRAIN has one A, at position 2. The earlier A is scanned first and
        // is still shown as present.
        let target = Word::new("train").unwrap();
        let grid = grid_with(&["aahed"]);

        assert_eq!(evaluate(&grid, 0, 0, &target, 1), TileType::Present);
        assert_eq!(evaluate(&grid, 0, 1, &target, 1), TileType::Absent);

        let grid = grid_with(&["xxaxa"]);
        assert_eq!(evaluate(&grid, 0, 2, &target, 1), TileType::Correct);
        assert_eq!(evaluate(&grid, 0, 4, &target, 1), TileType::Absent);

        let grid = grid_with(&["aaaxx"]);
        assert_eq!(evaluate(&grid, 0, 0, &target, 1), TileType::Present);
        assert_eq!(evaluate(&grid, 0, 2, &target, 1), TileType::Correct);
    }

    #[test]
    fn correct_only_for_byte_equal_letters() {
        let targets = ["crane", "allow", "speed", "eerie", "zzzzz"];
        let guesses = ["llama", "crane", "eerie", "speed", "abcde", "zesty"];

        for target in targets {
            let target = Word::new(target).unwrap();
            for guess in guesses {
                let grid = grid_with(&[guess]);
                for pos in 0..WORD_LENGTH {
                    let tile = evaluate(&grid, 0, pos, &target, 1);
                    if tile == TileType::Correct {
                        assert_eq!(grid[0].bytes()[pos], target.char_at(pos));
                    }
                }
            }
        }
    }

    #[test]
    fn tile_order_ranks_hints() {
        assert!(TileType::Correct > TileType::Present);
        assert!(TileType::Present > TileType::Absent);
        assert!(TileType::Absent > TileType::Unsubmitted);
    }
}
