use crate::{Board, Field, Player, Verdict};
use ndarray::{s, Array2, ArrayView1};

/// Checks a matrix of fields after `player` has moved.
///
/// `player` wins if they hold every field of a row, a column or one of
/// the two diagonals. Only the player who just moved is checked. A win is
/// reported even if the matrix is full; a full matrix without a win is a
/// draw.
///
/// Usage:
/// ```
/// use ndarray::array;
/// use tictactoe_console::{check_matrix, Field, Player, Verdict};
///
/// // O X X
/// // O O O <-- O wins
/// // X O X
/// let x = Field::Occupied { player: Player::One };
/// let o = Field::Occupied { player: Player::Two };
/// let matrix = array![[o, x, x], [o, o, o], [x, o, x]];
///
/// assert_eq!(check_matrix(&matrix, Player::Two), Verdict::Win { winner: Player::Two });
/// assert_eq!(check_matrix(&matrix, Player::One), Verdict::Draw);
/// ```
///
pub fn check_matrix(matrix: &Array2<Field>, player: Player) -> Verdict {
    if holds_line(matrix, player) {
        Verdict::Win { winner: player }
    } else if matrix.iter().all(|field| !field.is_vacant()) {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}

/// Verdict for `board` right after `player` placed a mark.
pub fn evaluate(board: &Board, player: Player) -> Verdict {
    check_matrix(board.as_matrix(), player)
}

/// Any player currently holding a full line on `board`.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::One, Player::Two]
        .into_iter()
        .find(|player| holds_line(board.as_matrix(), *player))
}

fn holds_line(matrix: &Array2<Field>, player: Player) -> bool {
    // diagonal, then anti-diagonal
    line_owned_by(matrix.diag(), player)
        || line_owned_by(matrix.slice(s![..;-1, ..]).diag(), player)
        || matrix.rows().into_iter().any(|row| line_owned_by(row, player))
        || matrix
            .columns()
            .into_iter()
            .any(|column| line_owned_by(column, player))
}

fn line_owned_by(line: ArrayView1<'_, Field>, player: Player) -> bool {
    let mark = Field::Occupied { player };
    !line.is_empty() && line.iter().all(|field| *field == mark)
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    const X: Field = Field::Occupied { player: Player::One };
    const O: Field = Field::Occupied { player: Player::Two };
    const V: Field = Field::Vacant;

    #[test]
    fn matrix_checker() {
        // O X X
        // O O O <-- O wins
        // X O X
        let matrix = array![[O, X, X], [O, O, O], [X, O, X]];
        assert_eq!(
            check_matrix(&matrix, Player::Two),
            Verdict::Win { winner: Player::Two }
        );
    }

    #[test]
    fn every_line_wins() {
        let lines: Vec<[(usize, usize); 3]> = vec![
            [(0, 0), (0, 1), (0, 2)],
            [(1, 0), (1, 1), (1, 2)],
            [(2, 0), (2, 1), (2, 2)],
            [(0, 0), (1, 0), (2, 0)],
            [(0, 1), (1, 1), (2, 1)],
            [(0, 2), (1, 2), (2, 2)],
            [(0, 0), (1, 1), (2, 2)],
            [(0, 2), (1, 1), (2, 0)],
        ];
        for line in lines {
            let mut matrix = Array2::from_elem((3, 3), V);
            for coordinates in line {
                matrix[coordinates] = X;
            }
            assert_eq!(
                check_matrix(&matrix, Player::One),
                Verdict::Win { winner: Player::One },
                "line {:?} should win",
                line
            );
            assert_eq!(check_matrix(&matrix, Player::Two), Verdict::InProgress);
        }
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let matrix = array![[X, O, X], [X, O, O], [O, X, X]];
        assert_eq!(check_matrix(&matrix, Player::One), Verdict::Draw);
        assert_eq!(check_matrix(&matrix, Player::Two), Verdict::Draw);
    }

    #[test]
    fn win_beats_draw_on_full_board() {
        // X X X
        // O O X
        // X O O
        let matrix = array![[X, X, X], [O, O, X], [X, O, O]];
        assert_eq!(
            check_matrix(&matrix, Player::One),
            Verdict::Win { winner: Player::One }
        );
    }

    #[test]
    fn broken_line_is_in_progress() {
        let matrix = array![[X, X, O], [V, O, V], [V, V, V]];
        assert_eq!(check_matrix(&matrix, Player::One), Verdict::InProgress);
        assert_eq!(check_matrix(&matrix, Player::Two), Verdict::InProgress);
    }

    #[test]
    fn winner_finds_either_player() {
        let mut board = Board::new();
        assert_eq!(winner(&board), None);
        for column in 0..3 {
            board.place(2, column, Player::Two).unwrap();
        }
        assert_eq!(winner(&board), Some(Player::Two));
        assert_eq!(evaluate(&board, Player::Two), Verdict::Win { winner: Player::Two });
    }
}
