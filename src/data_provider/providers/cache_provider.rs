use std::{
    collections::{hash_map::Entry, HashMap},
    fmt::Display,
    sync::{Arc, Mutex},
};

use log::debug;
use uuid::Uuid;

use crate::{Board, DataProvider, GameData, GameResult};

#[derive(Clone, Default)]
pub struct CacheProviderArgs {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheProviderErrorKind {
    LockError,
    KeyNotFound,
    GameExists,
    InvalidWidth { width: usize },
}

impl Display for CacheProviderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheProviderErrorKind::GameExists => write!(f, "the game already exists"),
            CacheProviderErrorKind::KeyNotFound => write!(f, "the game does not exist"),
            CacheProviderErrorKind::LockError => write!(f, "could not acquire lock"),
            CacheProviderErrorKind::InvalidWidth { width } => {
                write!(f, "cannot create a game of width {}", width)
            }
        }
    }
}

type SharedBoard = Arc<Mutex<Board>>;

/// In-memory game store.
///
/// The outer map lock is only held long enough to look a game up; each placement
/// then runs under the lock of its own board, so games never block each other.
#[derive(Clone, Default)]
pub struct CacheProvider {
    games: Arc<Mutex<HashMap<Uuid, SharedBoard>>>,
}

impl CacheProvider {
    fn get_game(&self, game_id: Uuid) -> Result<SharedBoard, CacheProviderErrorKind> {
        let games = self
            .games
            .lock()
            .map_err(|_| CacheProviderErrorKind::LockError)?;
        games
            .get(&game_id)
            .cloned()
            .ok_or(CacheProviderErrorKind::KeyNotFound)
    }

    fn with_board<T>(
        &self,
        game_id: Uuid,
        f: impl FnOnce(&mut Board) -> T,
    ) -> Result<T, CacheProviderErrorKind> {
        let game = self.get_game(game_id)?;
        let mut board = game
            .lock()
            .map_err(|_| CacheProviderErrorKind::LockError)?;
        Ok(f(&mut *board))
    }
}

impl DataProvider for CacheProvider {
    type Args = CacheProviderArgs;
    type ErrorKind = CacheProviderErrorKind;

    fn new(_args: Self::Args) -> Result<Self, Self::ErrorKind>
    where
        Self: Sized,
    {
        Ok(Self::default())
    }

    fn create_game(
        &mut self,
        game_id: Option<Uuid>,
        width: usize,
    ) -> Result<Uuid, Self::ErrorKind> {
        let board =
            Board::new(width).map_err(|_| CacheProviderErrorKind::InvalidWidth { width })?;
        let game_id = game_id.unwrap_or_else(Uuid::new_v4);
        let mut games = self
            .games
            .lock()
            .map_err(|_| Self::ErrorKind::LockError)?;

        match games.entry(game_id) {
            Entry::Occupied(_) => Err(Self::ErrorKind::GameExists),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(Mutex::new(board)));
                debug!("Created game {} with width {}", game_id, width);
                Ok(game_id)
            }
        }
    }

    fn game_exists(&self, game_id: Uuid) -> Result<bool, Self::ErrorKind> {
        let games = self
            .games
            .lock()
            .map_err(|_| Self::ErrorKind::LockError)?;
        Ok(games.contains_key(&game_id))
    }

    fn get_games(&self) -> Result<Vec<Uuid>, Self::ErrorKind> {
        let games = self
            .games
            .lock()
            .map_err(|_| Self::ErrorKind::LockError)?;
        Ok(games.keys().copied().collect())
    }

    fn get_game_data(&self, game_id: Uuid) -> Result<GameData, Self::ErrorKind> {
        self.with_board(game_id, |board| GameData::from(&*board))
    }

    fn place_mark(
        &mut self,
        game_id: Uuid,
        row: isize,
        col: isize,
    ) -> Result<bool, Self::ErrorKind> {
        let placed = self.with_board(game_id, |board| board.place_mark(row, col))?;
        debug!(
            "Game {}: mark at ({}, {}) {}",
            game_id,
            row,
            col,
            if placed { "placed" } else { "rejected" }
        );
        Ok(placed)
    }

    fn get_result(&self, game_id: Uuid) -> Result<GameResult, Self::ErrorKind> {
        self.with_board(game_id, |board| board.get_result())
    }

    fn remove_game(&mut self, game_id: Uuid) -> Result<GameData, Self::ErrorKind> {
        let game = self
            .games
            .lock()
            .map_err(|_| Self::ErrorKind::LockError)?
            .remove(&game_id)
            .ok_or(Self::ErrorKind::KeyNotFound)?;
        let board = game.lock().map_err(|_| Self::ErrorKind::LockError)?;
        debug!("Removed game {}", game_id);
        Ok(GameData::from(&*board))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{DataProviderFactory, Move, Player};
    use std::thread;

    fn get_provider() -> CacheProvider {
        let _ = env_logger::builder().is_test(true).try_init();
        DataProviderFactory::create::<CacheProvider>(CacheProviderArgs {})
            .expect("Failed to create CacheProvider")
    }

    #[test]
    fn create_and_query_games() {
        let mut data_provider = get_provider();

        let mut game_uuids = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        for uuid in game_uuids.iter() {
            assert_eq!(data_provider.create_game(Some(*uuid), 3), Ok(*uuid));
        }
        let generated = data_provider.create_game(None, 4).unwrap();
        game_uuids.push(generated);

        let mut remote_uuids = data_provider.get_games().unwrap();
        remote_uuids.sort();
        game_uuids.sort();
        assert_eq!(remote_uuids, game_uuids);

        assert_eq!(data_provider.get_game_data(generated), Ok(GameData::new(4)));
        assert_eq!(
            data_provider.get_result(generated),
            Ok(GameResult::InProgress)
        );
        assert_eq!(data_provider.game_exists(generated), Ok(true));
        assert_eq!(data_provider.game_exists(Uuid::new_v4()), Ok(false));
    }

    #[test]
    fn errors() {
        let mut data_provider = get_provider();
        let uuid = Uuid::new_v4();
        let unknown = Uuid::new_v4();

        data_provider.create_game(Some(uuid), 3).unwrap();
        assert_eq!(
            data_provider.create_game(Some(uuid), 3),
            Err(CacheProviderErrorKind::GameExists)
        );
        assert_eq!(
            data_provider.create_game(None, 0),
            Err(CacheProviderErrorKind::InvalidWidth { width: 0 })
        );
        assert_eq!(
            data_provider.create_game(None, usize::MAX),
            Err(CacheProviderErrorKind::InvalidWidth { width: usize::MAX })
        );
        assert_eq!(
            data_provider.place_mark(unknown, 0, 0),
            Err(CacheProviderErrorKind::KeyNotFound)
        );
        assert_eq!(
            data_provider.get_game_data(unknown),
            Err(CacheProviderErrorKind::KeyNotFound)
        );
        assert_eq!(
            CacheProviderErrorKind::KeyNotFound.to_string(),
            "the game does not exist"
        );
    }

    #[test]
    fn play_and_remove() {
        let mut data_provider = get_provider();
        let uuid = data_provider.create_game(None, 3).unwrap();

        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
            assert_eq!(data_provider.place_mark(uuid, row, col), Ok(true));
        }
        assert_eq!(data_provider.place_mark(uuid, 1, 1), Ok(false));
        assert_eq!(data_provider.place_mark(uuid, 0, 2), Ok(true));
        assert_eq!(data_provider.get_result(uuid), Ok(GameResult::XWins));

        let game_data = data_provider.remove_game(uuid).unwrap();
        assert_eq!(game_data.moves.len(), 5);
        assert_eq!(game_data.moves[4], Move::new((0, 2), Player::X));
        assert_eq!(data_provider.game_exists(uuid), Ok(false));
        assert_eq!(
            data_provider.remove_game(uuid),
            Err(CacheProviderErrorKind::KeyNotFound)
        );
    }

    #[test]
    fn racing_placements_on_one_cell() {
        let mut data_provider = get_provider();
        let uuid = data_provider.create_game(None, 3).unwrap();

        let successes = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let mut data_provider = data_provider.clone();
                    scope.spawn(move || data_provider.place_mark(uuid, 1, 1).unwrap())
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .filter(|placed| *placed)
                .count()
        });

        assert_eq!(successes, 1);
        let game_data = data_provider.get_game_data(uuid).unwrap();
        assert_eq!(game_data.moves, vec![Move::new((1, 1), Player::X)]);
    }

    #[test]
    fn concurrent_games_keep_turn_order() {
        let mut data_provider = get_provider();
        let width = 4;
        let uuids: Vec<Uuid> = (0..3)
            .map(|_| data_provider.create_game(None, width).unwrap())
            .collect();

        thread::scope(|scope| {
            for uuid in uuids.iter().copied() {
                for row in 0..width as isize {
                    let mut data_provider = data_provider.clone();
                    scope.spawn(move || {
                        for col in 0..width as isize {
                            assert_eq!(data_provider.place_mark(uuid, row, col), Ok(true));
                        }
                    });
                }
            }
        });

        for uuid in uuids {
            let game_data = data_provider.get_game_data(uuid).unwrap();
            assert_eq!(game_data.moves.len(), width * width);
            // replaying only succeeds if X and O strictly alternated
            let board = Board::try_from(game_data).expect("moves alternate");
            assert!(board.get_allowed_moves().is_empty());
        }
    }
}
