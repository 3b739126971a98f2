use crate::Move;
use serde::{Deserialize, Serialize};

/// Serializable record of a game: its width and every successful move in order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameData {
    pub width: usize,
    pub moves: Vec<Move>,
}

impl GameData {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            moves: vec![],
        }
    }
}
