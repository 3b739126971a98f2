use std::io::{stdin, stdout};

use log::{error, info};
use tictactoe_nxn::{
    AdapterArgs, Board, ConsoleArgs, ConsoleError, ConsoleGame, ConsoleView, GameData,
};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConsoleError> {
    let args = ConsoleArgs::from_env();
    let board = Board::new(args.width)?;

    let view = ConsoleView::new(stdin().lock(), stdout());
    let mut game = ConsoleGame::new(board, view);
    let result = game.run()?;

    match serde_json::to_string(&GameData::from(game.board())) {
        Ok(record) => info!("Game record: {}", record),
        Err(e) => error!("Failed to serialize game record: {}", e),
    }
    info!("Result: {}", result);
    Ok(())
}
