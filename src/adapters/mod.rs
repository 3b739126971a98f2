mod console;
mod grid;

pub use console::{ConsoleArgs, ConsoleError, ConsoleGame, ConsoleView};
pub use grid::{cell_name, parse_cell_name, GridController, GridError, ViewUpdate, MAX_GRID_WIDTH};

/// Shown by every adapter when a move is rejected. The board does not say why.
pub const INVALID_MOVE_MESSAGE: &str =
    "Entered location is invalid, already marked, or out of bounds.";

pub trait AdapterArgs: Sized {
    // loads environment variables or uses default values if not set
    fn from_env() -> Self;
}
