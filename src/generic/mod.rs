mod boards;
mod game_data;
mod game_result;
mod mark;
mod r#move;
mod player;

pub use boards::{check_matrix, Board, BoardError};
pub use game_data::GameData;
pub use game_result::GameResult;
pub use mark::Mark;
pub use player::Player;
pub use r#move::{Coordinates, Move};
