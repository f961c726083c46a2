//! Per-tile animation transforms
//!
//! Pure function of the animation frame and the tile position. Sizes are in
//! abstract units where a resting tile is `TILE_SIZE` square; the terminal
//! renderer scales them down to cells.

use crate::core::{AnimationFrame, AnimationKind, GuessGrid, WORD_LENGTH};

/// Resting tile edge length
pub const TILE_SIZE: i32 = 24;

const POP_SIZES: [i32; 5] = [1, 2, 1, -1, 0];
const HOP_HEIGHTS: [i32; 20] = [1, 3, 6, 8, 10, 11, 12, 8, 4, -1, 0, 4, 5, 5, 4, 2, 1, 0, -1, -1];

/// How one tile is drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileTransform {
    /// Skip the tile entirely
    pub hidden: bool,
    /// Draw as an unrevealed outline regardless of its type
    pub concealed: bool,
    pub width: i32,
    pub height: i32,
    pub dx: i32,
    pub dy: i32,
}

impl Default for TileTransform {
    fn default() -> Self {
        Self {
            hidden: false,
            concealed: false,
            width: TILE_SIZE,
            height: TILE_SIZE,
            dx: 0,
            dy: 0,
        }
    }
}

impl TileTransform {
    fn flip(&mut self, tile_frame: i32) {
        if tile_frame < 7 {
            self.concealed = true;
        }
        if tile_frame > 0 && tile_frame <= 15 {
            self.height = (TILE_SIZE - tile_frame * 2 * TILE_SIZE / 15).abs();
        }
    }

    /// Height as a fraction of a resting tile
    #[must_use]
    pub fn height_ratio(&self) -> f64 {
        f64::from(self.height) / f64::from(TILE_SIZE)
    }
}

/// Transform for the tile at (`row`, `col`)
///
/// `num_submitted` is the row being typed; the row just revealed is the one
/// before it.
#[must_use]
pub fn tile_transform(
    frame: AnimationFrame,
    row: usize,
    col: usize,
    grid: &GuessGrid,
    num_submitted: usize,
) -> TileTransform {
    let mut transform = TileTransform::default();
    let remaining = i32::from(frame.frames_remaining);
    if remaining == 0 {
        return transform;
    }

    let x = col as i32;
    let letter = grid[row].letter(col);
    let revealed_row = num_submitted.checked_sub(1);

    match frame.kind {
        AnimationKind::TypeLetter => {
            let last_typed =
                letter.is_some() && (col == WORD_LENGTH - 1 || grid[row].letter(col + 1).is_none());
            if row == num_submitted && last_typed {
                if remaining == 5 {
                    transform.hidden = true;
                } else if let Some(&delta) = POP_SIZES.get((remaining - 1) as usize) {
                    transform.width += delta;
                    transform.height += delta;
                }
            }
        }
        AnimationKind::FlipAll => {
            if row < num_submitted && letter.is_some() {
                transform.flip(35 - remaining - 5 * x);
            }
        }
        AnimationKind::FlipLine => {
            if revealed_row == Some(row) {
                transform.flip(55 - remaining - 10 * x);
            }
        }
        AnimationKind::InvalidWord => {
            if row == num_submitted {
                match remaining % 4 {
                    0 => transform.dx = -1,
                    2 => transform.dx = 1,
                    _ => {}
                }
            }
        }
        AnimationKind::Success => {
            if revealed_row == Some(row) {
                transform.flip(100 - remaining - 10 * x);
                let hop = 40 - remaining - 5 * x;
                if hop > 0 && hop <= 20 {
                    transform.dy = -HOP_HEIGHTS[(hop - 1) as usize];
                }
            }
        }
    }

    transform
}
