//! Event-driven front end for a grid of named cells, such as a window full of
//! buttons. The toolkit owns the widgets; this controller only turns a press into
//! a list of [`ViewUpdate`]s to apply.

use std::fmt::Display;

use itertools::Itertools;
use log::{debug, info};

use super::INVALID_MOVE_MESSAGE;
use crate::{Board, BoardError, Coordinates, Mark};

const CELL_NAME_PREFIX: &str = "Square";

/// Names carry single decimal digits, which caps the grid at 10x10.
pub const MAX_GRID_WIDTH: usize = 10;

/// Name of the cell at `(row, col)`, e.g. `Square01`.
pub fn cell_name(row: usize, col: usize) -> String {
    format!("{}{}{}", CELL_NAME_PREFIX, row, col)
}

/// Reads the row and column digits that follow the `Square` prefix.
pub fn parse_cell_name(name: &str) -> Option<Coordinates> {
    let mut digits = name.strip_prefix(CELL_NAME_PREFIX)?.chars();
    let row = digits.next()?.to_digit(10)?;
    let col = digits.next()?.to_digit(10)?;
    if digits.next().is_some() {
        return None;
    }
    Some((row as isize, col as isize))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    Board(BoardError),
    WidthTooLarge { width: usize },
}

impl Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::Board(e) => write!(f, "{}", e),
            GridError::WidthTooLarge { width } => write!(
                f,
                "a grid of width {} cannot be addressed by cell names, the maximum is {}",
                width, MAX_GRID_WIDTH
            ),
        }
    }
}

impl std::error::Error for GridError {}

impl From<BoardError> for GridError {
    fn from(e: BoardError) -> Self {
        GridError::Board(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    SetCell { row: isize, col: isize, mark: Mark },
    ShowMessage(String),
    ClearMessage,
    DisableCells,
}

#[derive(Debug, Clone)]
pub struct GridController {
    board: Board,
    disabled: bool,
}

impl GridController {
    pub fn new(width: usize) -> Result<Self, GridError> {
        if width > MAX_GRID_WIDTH {
            return Err(GridError::WidthTooLarge { width });
        }
        Ok(Self {
            board: Board::new(width)?,
            disabled: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// All cell names in row-major order, for laying out the grid.
    pub fn cell_names(&self) -> Vec<String> {
        let width = self.board.width();
        (0..width)
            .cartesian_product(0..width)
            .map(|(row, col)| cell_name(row, col))
            .collect()
    }

    pub fn get_mark_as_string(&self, row: isize, col: isize) -> String {
        self.board.get_mark(row, col).to_string()
    }

    /// Handles a press on the named cell.
    ///
    /// Once the game is over the controller disables itself and further presses
    /// produce no updates.
    pub fn press(&mut self, name: &str) -> Vec<ViewUpdate> {
        if self.disabled {
            debug!("ignoring press on {} after game over", name);
            return Vec::new();
        }

        let mut updates = Vec::new();
        match parse_cell_name(name) {
            Some((row, col)) if self.board.place_mark(row, col) => {
                updates.push(ViewUpdate::ClearMessage);
                updates.push(ViewUpdate::SetCell {
                    row,
                    col,
                    mark: self.board.get_mark(row, col),
                });
            }
            _ => {
                debug!("invalid press on {:?}", name);
                updates.push(ViewUpdate::ShowMessage(INVALID_MOVE_MESSAGE.to_string()));
            }
        }

        if self.board.is_game_over() {
            let result = self.board.get_result();
            match result.winner() {
                Some(winner) => info!("Grid game over: {} wins", winner),
                None => info!("Grid game over: {}", result),
            }
            self.disabled = true;
            updates.push(ViewUpdate::DisableCells);
            updates.push(ViewUpdate::ShowMessage(result.label().to_string()));
        }
        updates
    }
}
