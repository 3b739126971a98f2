mod board;
mod matrix_checker;

pub use board::{Board, BoardError};
pub use matrix_checker::check_matrix;
