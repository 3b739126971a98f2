use crate::{GameResult, Mark, Player};
use log::debug;
use ndarray::{s, Array2, ArrayView1};

/// Checks a matrix of marks for a winner, a tie, or a game still in progress.
///
/// X is checked before O, and both are checked before the tie condition, so a
/// full board containing a complete line reports the winner.
///
/// Usage:
/// ```
/// use ndarray::array;
/// use tictactoe_nxn::{check_matrix, GameResult, Mark};
///
/// // O X X
/// // O O O <-- O wins
/// // X O X
/// let matrix = array![
///    [Mark::O, Mark::X, Mark::X],
///    [Mark::O, Mark::O, Mark::O],
///    [Mark::X, Mark::O, Mark::X],
/// ];
///
/// assert_eq!(check_matrix(&matrix), GameResult::OWins);
/// ```
///
pub fn check_matrix(matrix: &Array2<Mark>) -> GameResult {
    let result = if let Some(winner) = [Player::X, Player::O]
        .into_iter()
        .find(|player| has_line(matrix, *player))
    {
        GameResult::won_by(winner)
    } else if matrix.iter().all(|mark| !mark.is_empty()) {
        GameResult::Tie
    } else {
        GameResult::InProgress
    };
    debug!("evaluated board: {}", result);
    result
}

/// Returns true if every cell of at least one line holds the player's mark.
///
/// Lines are scanned as main diagonal, anti-diagonal, rows, then columns.
fn has_line(matrix: &Array2<Mark>, player: Player) -> bool {
    let mark = Mark::from(player);

    // check diagonal
    if is_complete(matrix.diag(), mark) {
        return true;
    }

    // check anti-diagonal, bottom-left to top-right
    if is_complete(matrix.slice(s![..;-1, ..]).diag(), mark) {
        return true;
    }

    // check rows, then columns
    matrix.rows().into_iter().any(|row| is_complete(row, mark))
        || matrix
            .columns()
            .into_iter()
            .any(|column| is_complete(column, mark))
}

fn is_complete(line: ArrayView1<Mark>, mark: Mark) -> bool {
    !line.is_empty() && line.iter().all(|field| *field == mark)
}
