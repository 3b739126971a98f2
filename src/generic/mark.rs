use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Player;

/// The content of a single cell.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    X,
    O,
    #[default]
    Empty,
}

impl Mark {
    pub fn label(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "-",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Mark::Empty)
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
