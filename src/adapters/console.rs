use std::{
    collections::VecDeque,
    fmt::Display,
    io::{BufRead, Write},
};

use log::{debug, info, warn};

use super::{AdapterArgs, INVALID_MOVE_MESSAGE};
use crate::{Board, BoardError, Coordinates, GameResult, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleArgs {
    pub width: usize,
}

impl Default for ConsoleArgs {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
        }
    }
}

impl ConsoleArgs {
    const DEFAULT_WIDTH: usize = Board::DEFAULT_WIDTH;
    const WIDTH_VARIABLE: &'static str = "TICTACTOE_WIDTH";

    fn from_value(value: Option<String>) -> Self {
        let width = match value {
            None => Self::DEFAULT_WIDTH,
            Some(value) => value.trim().parse::<usize>().unwrap_or_else(|_| {
                warn!(
                    "Failed to parse {}={:?}, using width {}",
                    Self::WIDTH_VARIABLE,
                    value,
                    Self::DEFAULT_WIDTH
                );
                Self::DEFAULT_WIDTH
            }),
        };
        Self { width }
    }
}

impl AdapterArgs for ConsoleArgs {
    fn from_env() -> Self {
        Self::from_value(std::env::var(Self::WIDTH_VARIABLE).ok())
    }
}

#[derive(Debug)]
pub enum ConsoleError {
    Io(std::io::Error),
    InputClosed,
    Board(BoardError),
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleError::Io(e) => write!(f, "console i/o failed: {}", e),
            ConsoleError::InputClosed => write!(f, "input closed before the game finished"),
            ConsoleError::Board(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    fn from(e: std::io::Error) -> Self {
        ConsoleError::Io(e)
    }
}

impl From<BoardError> for ConsoleError {
    fn from(e: BoardError) -> Self {
        ConsoleError::Board(e)
    }
}

/// Text front end over any line-based input and any writer.
///
/// Input is consumed as whitespace separated tokens, so a move may be typed on one
/// line or spread over several.
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts until the player enters two integers.
    pub fn get_next_move(&mut self, is_x_turn: bool) -> Result<Coordinates, ConsoleError> {
        let player = if is_x_turn { Player::X } else { Player::O };
        loop {
            writeln!(self.output, "\nPlayer {} Move:", player.prompt_label())?;
            writeln!(
                self.output,
                "Enter the row and column numbers, separated by a space: "
            )?;
            self.output.flush()?;

            let row = self.next_integer()?;
            let col = match row {
                Some(_) => self.next_integer()?,
                None => None,
            };
            if let (Some(row), Some(col)) = (row, col) {
                return Ok((row, col));
            }

            // drop the rest of the line
            self.pending.clear();
            writeln!(self.output, "Please enter two integers.")?;
        }
    }

    pub fn show_input_error(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", INVALID_MOVE_MESSAGE)?;
        Ok(())
    }

    pub fn show_result(&mut self, result: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}!", result)?;
        Ok(())
    }

    pub fn show_board(&mut self, board: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "\n\n{}", board)?;
        Ok(())
    }

    fn next_integer(&mut self) -> Result<Option<isize>, ConsoleError> {
        let token = self.next_token()?;
        let value = token.parse::<isize>().ok();
        if value.is_none() {
            debug!("not an integer: {:?}", token);
        }
        Ok(value)
    }

    fn next_token(&mut self) -> Result<String, ConsoleError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::InputClosed);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Drives a [`Board`] from a [`ConsoleView`] until the game is over.
pub struct ConsoleGame<R, W> {
    board: Board,
    view: ConsoleView<R, W>,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(board: Board, view: ConsoleView<R, W>) -> Self {
        Self { board, view }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_parts(self) -> (Board, ConsoleView<R, W>) {
        (self.board, self.view)
    }

    pub fn run(&mut self) -> Result<GameResult, ConsoleError> {
        info!(
            "Starting {}x{} console game",
            self.board.width(),
            self.board.width()
        );

        while !self.board.is_game_over() {
            self.view.show_board(&self.board.to_string())?;
            loop {
                let (row, col) = self.view.get_next_move(self.board.is_current_turn_x())?;
                if self.board.place_mark(row, col) {
                    break;
                }
                self.view.show_input_error()?;
            }
        }

        let result = self.board.get_result();
        self.view.show_board(&self.board.to_string())?;
        self.view.show_result(result.label())?;
        match result.winner() {
            Some(winner) => info!(
                "Game over after {} moves: player {} wins",
                self.board.moves().len(),
                winner.prompt_label()
            ),
            None => info!("Game over after {} moves: {}", self.board.moves().len(), result),
        }
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn run_game(width: usize, input: &str) -> (Result<GameResult, ConsoleError>, Board, String) {
        let _ = env_logger::builder().is_test(true).try_init();
        let view = ConsoleView::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut game = ConsoleGame::new(Board::new(width).unwrap(), view);
        let result = game.run();
        let (board, view) = game.into_parts();
        let output = String::from_utf8(view.into_output()).expect("output is utf-8");
        (result, board, output)
    }

    #[test]
    fn console_args() {
        let tests = vec![
            (None, 3),
            (Some("4"), 4),
            (Some(" 12\n"), 12),
            (Some("zero"), 3),
            (Some("-2"), 3),
        ];
        for (value, expected_width) in tests {
            assert_eq!(
                ConsoleArgs::from_value(value.map(str::to_string)).width,
                expected_width,
                "value {:?}",
                value
            );
        }
        assert_eq!(ConsoleArgs::default().width, Board::DEFAULT_WIDTH);
    }

    #[test]
    fn full_transcript() {
        let (result, _, output) = run_game(1, "0 0\n");
        assert_eq!(result.unwrap(), GameResult::XWins);
        assert_eq!(
            output,
            "\n\n  0\n\n0 -\n\
             \nPlayer 1 (X) Move:\n\
             Enter the row and column numbers, separated by a space: \n\
             \n\n  0\n\n0 X\n\
             X!\n"
        );
    }

    #[test]
    fn x_wins_top_row() {
        let (result, board, output) = run_game(3, "0 0\n1 1\n0 1\n1 0\n0 2\n");
        assert_eq!(result.unwrap(), GameResult::XWins);
        assert!(board.is_game_over());
        assert!(output.contains("Player 2 (O) Move:"));
        assert!(output.ends_with("  012\n\n0 XXX\n1 OO-\n2 ---\nX!\n"));
    }

    #[test]
    fn invalid_input_is_retried() {
        let input = "5 5\n0 0\n0 0\nfoo 1\n-1 2\n1\n1\n0 1\n2 2\n0 2\n";
        let (result, board, output) = run_game(3, input);
        assert_eq!(result.unwrap(), GameResult::XWins);
        assert_eq!(output.matches(INVALID_MOVE_MESSAGE).count(), 3);
        assert_eq!(output.matches("Please enter two integers.").count(), 1);
        assert_eq!(board.moves().len(), 5);
    }

    #[test]
    fn tie_is_reported() {
        let input = "0 0 0 1 0 2 1 1 1 0 2 0 2 1 1 2 2 2";
        let (result, _, output) = run_game(3, input);
        assert_eq!(result.unwrap(), GameResult::Tie);
        assert!(output.ends_with("TIE!\n"));
    }

    #[test]
    fn closed_input() {
        let (result, board, _) = run_game(3, "0 0\n1");
        assert!(matches!(result, Err(ConsoleError::InputClosed)));
        assert_eq!(board.moves().len(), 1);
    }
}
