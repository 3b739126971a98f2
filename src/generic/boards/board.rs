use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use std::fmt::Display;

use crate::{generic::boards::check_matrix, Coordinates, GameData, GameResult, Mark, Move, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    InvalidWidth { width: usize },
    IllegalMove { index: usize, coordinates: Coordinates },
}

impl Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidWidth { width } => {
                write!(f, "cannot create a board of width {}", width)
            }
            BoardError::IllegalMove { index, coordinates } => write!(
                f,
                "move {} at ({}, {}) is not legal",
                index, coordinates.0, coordinates.1
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// A square tic-tac-toe board of arbitrary width.
///
/// The grid is only ever mutated through [`Board::place_mark`], which keeps every
/// cell a valid [`Mark`] and never overwrites an occupied cell. The player to move
/// is derived from the recorded moves, so it flips exactly once per successful
/// placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    data: Array2<Mark>,
    moves: Vec<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self::with_width(Self::DEFAULT_WIDTH)
    }
}

impl From<&Board> for GameData {
    fn from(board: &Board) -> Self {
        GameData {
            width: board.width(),
            moves: board.moves.clone(),
        }
    }
}

impl TryFrom<GameData> for Board {
    type Error = BoardError;

    /// Replays the recorded moves onto a fresh board.
    fn try_from(game_data: GameData) -> Result<Self, Self::Error> {
        let mut board = Board::new(game_data.width)?;
        for (index, m) in game_data.moves.into_iter().enumerate() {
            let (row, col) = m.coordinates;
            if board.get_next_player() != m.player || !board.place_mark(row, col) {
                return Err(BoardError::IllegalMove {
                    index,
                    coordinates: m.coordinates,
                });
            }
        }
        Ok(board)
    }
}

impl Board {
    pub const DEFAULT_WIDTH: usize = 3;

    /// Creates an empty `width x width` board.
    ///
    /// Fails for a width of 0 and for widths whose cell count cannot be
    /// addressed as an array shape.
    pub fn new(width: usize) -> Result<Self, BoardError> {
        let cells = width.checked_mul(width).unwrap_or(usize::MAX);
        if width == 0 || cells > isize::MAX as usize {
            return Err(BoardError::InvalidWidth { width });
        }
        debug!("creating {}x{} board", width, width);
        Ok(Self::with_width(width))
    }

    fn with_width(width: usize) -> Self {
        Self {
            data: Array2::from_elem((width, width), Mark::Empty),
            moves: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.data.nrows()
    }

    pub fn data(&self) -> &Array2<Mark> {
        &self.data
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn get_next_player(&self) -> Player {
        self.moves
            .last()
            .map(|last_move| last_move.player.other())
            .unwrap_or(Player::FIRST)
    }

    pub fn is_current_turn_x(&self) -> bool {
        self.get_next_player() == Player::X
    }

    /// Translates coordinates into a grid index, `None` if out of bounds.
    fn get_index(&self, coordinates: Coordinates) -> Option<(usize, usize)> {
        let row = usize::try_from(coordinates.0).ok()?;
        let col = usize::try_from(coordinates.1).ok()?;
        (row < self.width() && col < self.width()).then_some((row, col))
    }

    /// Returns the mark at the given cell. Out-of-bounds cells read as
    /// [`Mark::Empty`].
    pub fn get_mark(&self, row: isize, col: isize) -> Mark {
        self.get_index((row, col))
            .map(|index| self.data[index])
            .unwrap_or(Mark::Empty)
    }

    /// Marks the cell for the player to move.
    ///
    /// Returns `false` and leaves the board untouched if the cell is out of
    /// bounds or already marked.
    pub fn place_mark(&mut self, row: isize, col: isize) -> bool {
        let player = self.get_next_player();
        match self.get_index((row, col)) {
            Some(index) if self.data[index].is_empty() => {
                self.data[index] = Mark::from(player);
                self.moves.push(Move::new((row, col), player));
                debug!("{} marked ({}, {})", player, row, col);
                true
            }
            _ => {
                debug!("rejected mark by {} at ({}, {})", player, row, col);
                false
            }
        }
    }

    pub fn get_result(&self) -> GameResult {
        check_matrix(&self.data)
    }

    pub fn is_game_over(&self) -> bool {
        !self.get_result().is_in_progress()
    }

    /// Every empty cell in row-major order.
    pub fn get_allowed_moves(&self) -> Vec<Coordinates> {
        let width = self.width();
        let allowed_moves: Vec<Coordinates> = (0..width)
            .cartesian_product(0..width)
            .filter(|index| self.data[*index].is_empty())
            .map(|(row, col)| (row as isize, col as isize))
            .collect();
        debug!("allowed moves: {}", allowed_moves.len());
        allowed_moves
    }
}

/// Column indices as a header line, a blank line, then each row prefixed by its
/// index.
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // header (columns)
        f.write_str("  ")?;
        for column in 0..self.width() {
            write!(f, "{}", column)?;
        }
        writeln!(f)?;

        // rows
        for (row_index, row) in self.data.rows().into_iter().enumerate() {
            write!(f, "\n{} ", row_index)?;
            for mark in row.iter() {
                write!(f, "{}", mark)?;
            }
        }
        Ok(())
    }
}
