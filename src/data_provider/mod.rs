mod factory;
mod providers;

pub use factory::DataProviderFactory;
pub use providers::*;

use crate::{GameData, GameResult};
use core::fmt::Debug;
use uuid::Uuid;

/// DataProvider is a trait that defines the interface for a store of running
/// games. Each game is confined to one owner at a time: implementations must make
/// the read-validate-mutate sequence of a placement atomic per game.
pub trait DataProvider: Send + Clone {
    type Args: Clone;
    type ErrorKind: Debug + Clone + PartialEq + Eq + ToString;

    fn new(args: Self::Args) -> Result<Self, Self::ErrorKind>
    where
        Self: Sized;

    /// creates a new game of the given width and returns the game id.
    fn create_game(&mut self, game_id: Option<Uuid>, width: usize)
        -> Result<Uuid, Self::ErrorKind>;

    /// checks if a game exists for a given game id.
    fn game_exists(&self, game_id: Uuid) -> Result<bool, Self::ErrorKind>;

    fn get_games(&self) -> Result<Vec<Uuid>, Self::ErrorKind>;

    /// returns a snapshot of the game record for a given game id.
    fn get_game_data(&self, game_id: Uuid) -> Result<GameData, Self::ErrorKind>;

    /// places a mark for whoever is to move. `Ok(false)` means the move was
    /// rejected by the board, not that the store failed.
    fn place_mark(
        &mut self,
        game_id: Uuid,
        row: isize,
        col: isize,
    ) -> Result<bool, Self::ErrorKind>;

    fn get_result(&self, game_id: Uuid) -> Result<GameResult, Self::ErrorKind>;

    /// removes the game and returns its final record.
    fn remove_game(&mut self, game_id: Uuid) -> Result<GameData, Self::ErrorKind>;
}
