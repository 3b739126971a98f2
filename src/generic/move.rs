use crate::Player;
use serde::{Deserialize, Serialize};

/// `(row, col)`. Signed so that any integer a caller produces can be submitted;
/// everything outside `[0, width)` is out of bounds.
pub type Coordinates = (isize, isize);

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub coordinates: Coordinates,
    pub player: Player,
}

impl Move {
    pub fn new(coordinates: Coordinates, player: Player) -> Self {
        Self {
            coordinates,
            player,
        }
    }
}
