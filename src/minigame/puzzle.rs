//! 3×3 sliding picture puzzle.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::player::Facing;

/// Tiles per side.
pub const PUZZLE_SIDE: usize = 3;
/// Random moves applied by a shuffle.
pub const SHUFFLE_MOVES: usize = 100;

/// Eight numbered tiles and one empty slot.
///
/// Tile `i` belongs at `(i / 3, i % 3)`; the empty slot starts bottom-right.
/// A direction names where the moving tile goes: `Up` slides the tile below
/// the empty slot up into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingPuzzle {
    /// `(row, column)` of each tile.
    tiles: Vec<(usize, usize)>,
    empty: (usize, usize),
    moves: u32,
    solved: bool,
}

impl Default for SlidingPuzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl SlidingPuzzle {
    /// Tiles in order, empty slot bottom-right, not yet marked solved.
    pub fn new() -> Self {
        let count = PUZZLE_SIDE * PUZZLE_SIDE - 1;
        Self {
            tiles: (0..count)
                .map(|i| (i / PUZZLE_SIDE, i % PUZZLE_SIDE))
                .collect(),
            empty: (PUZZLE_SIDE - 1, PUZZLE_SIDE - 1),
            moves: 0,
            solved: false,
        }
    }

    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut puzzle = Self::new();
        puzzle.shuffle(rng);
        puzzle
    }

    /// Apply random moves, skipping blocked ones, then reset the counters.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        const DIRECTIONS: [Facing; 4] = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];
        for _ in 0..SHUFFLE_MOVES {
            if let Some(direction) = DIRECTIONS.choose(rng) {
                self.slide(*direction);
            }
        }
        self.moves = 0;
        self.solved = false;
    }

    /// Player move. Ignored once solved; returns whether a tile moved.
    pub fn move_tile(&mut self, direction: Facing) -> bool {
        if self.solved || !self.slide(direction) {
            return false;
        }
        self.moves += 1;
        self.solved = self.is_in_order();
        true
    }

    fn slide(&mut self, direction: Facing) -> bool {
        let (row, column) = self.empty;
        let source = match direction {
            Facing::Up if row < PUZZLE_SIDE - 1 => (row + 1, column),
            Facing::Down if row > 0 => (row - 1, column),
            Facing::Left if column < PUZZLE_SIDE - 1 => (row, column + 1),
            Facing::Right if column > 0 => (row, column - 1),
            _ => return false,
        };
        let Some(tile) = self.tiles.iter_mut().find(|position| **position == source) else {
            return false;
        };
        *tile = self.empty;
        self.empty = source;
        true
    }

    fn is_in_order(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, position)| *position == (i / PUZZLE_SIDE, i % PUZZLE_SIDE))
    }

    /// Which tile sits at `(row, column)`, if any.
    pub fn tile_at(&self, row: usize, column: usize) -> Option<usize> {
        self.tiles.iter().position(|position| *position == (row, column))
    }

    pub fn position_of(&self, tile: usize) -> Option<(usize, usize)> {
        self.tiles.get(tile).copied()
    }

    pub fn empty(&self) -> (usize, usize) {
        self.empty
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }
}
