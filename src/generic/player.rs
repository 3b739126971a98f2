use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One of the two players. X always moves first.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

impl Player {
    pub const FIRST: Player = Player::X;

    pub fn other(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Label used when prompting, e.g. `1 (X)`.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Player::X => "1 (X)",
            Player::O => "2 (O)",
        }
    }
}
