use std::fmt::Display;

use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use thiserror::Error;

use crate::{Coordinates, Field, Move, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("coordinates are outside the board")]
    OutOfRange,
    #[error("cell is already occupied")]
    CellOccupied,
}

/// The 3x3 grid, row major. Cells only ever go from vacant to occupied
/// until the board is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    data: Array2<Field>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const SIZE: Coordinates = (3, 3);

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem((Self::SIZE.0, Self::SIZE.1), Field::Vacant),
        }
    }

    /// All coordinates of the board in row-major order.
    pub fn coordinates() -> impl Iterator<Item = Coordinates> {
        (0..Self::SIZE.0).cartesian_product(0..Self::SIZE.1)
    }

    pub fn as_matrix(&self) -> &Array2<Field> {
        &self.data
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Result<Field, InvalidMove> {
        self.data
            .get((row, column))
            .copied()
            .ok_or(InvalidMove::OutOfRange)
    }

    pub fn place(&mut self, row: usize, column: usize, player: Player) -> Result<(), InvalidMove> {
        let cell = self
            .data
            .get_mut((row, column))
            .ok_or(InvalidMove::OutOfRange)?;
        if !cell.is_vacant() {
            return Err(InvalidMove::CellOccupied);
        }
        *cell = Field::Occupied { player };
        debug!("placed {} at ({}, {})", player, row, column);
        Ok(())
    }

    pub fn apply(&mut self, m: &Move) -> Result<(), InvalidMove> {
        let (row, column) = m.coordinates;
        self.place(row, column, m.player)
    }

    pub fn is_full(&self) -> bool {
        self.data.iter().all(|field| !field.is_vacant())
    }

    pub fn reset(&mut self) {
        self.data.fill(Field::Vacant);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.data.rows() {
            writeln!(f, " {} ", row.iter().join("  "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_board_is_vacant() {
        let board = Board::new();
        for (row, column) in Board::coordinates() {
            assert_eq!(board.cell_at(row, column), Ok(Field::Vacant));
        }
        assert!(!board.is_full());
    }

    #[test]
    fn coordinates_are_row_major() {
        let coordinates: Vec<Coordinates> = Board::coordinates().collect();
        assert_eq!(coordinates.len(), 9);
        assert_eq!(coordinates[0], (0, 0));
        assert_eq!(coordinates[2], (0, 2));
        assert_eq!(coordinates[3], (1, 0));
        assert_eq!(coordinates[8], (2, 2));
    }

    #[test]
    fn cell_at_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell_at(3, 0), Err(InvalidMove::OutOfRange));
        assert_eq!(board.cell_at(0, 3), Err(InvalidMove::OutOfRange));
    }

    #[test]
    fn place_marks_vacant_cell() {
        let mut board = Board::new();
        assert_eq!(board.place(1, 2, Player::Two), Ok(()));
        assert_eq!(
            board.cell_at(1, 2),
            Ok(Field::Occupied { player: Player::Two })
        );
    }

    #[test]
    fn place_on_occupied_cell_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(0, 0, Player::One).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(0, 0, Player::Two),
            Err(InvalidMove::CellOccupied)
        );
        assert_eq!(
            board.place(0, 0, Player::One),
            Err(InvalidMove::CellOccupied)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn place_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.apply(&Move::new((9, 9), Player::One)),
            Err(InvalidMove::OutOfRange)
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn full_and_reset() {
        let mut board = Board::new();
        let mut player = Player::One;
        for (row, column) in Board::coordinates() {
            board.place(row, column, player).unwrap();
            player = player.other();
        }
        assert!(board.is_full());

        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn invalid_move_messages() {
        assert_eq!(
            InvalidMove::OutOfRange.to_string(),
            "coordinates are outside the board"
        );
        assert_eq!(
            InvalidMove::CellOccupied.to_string(),
            "cell is already occupied"
        );
    }

    #[test]
    fn display_draws_rows() {
        let mut board = Board::new();
        board.place(0, 0, Player::One).unwrap();
        board.place(1, 1, Player::Two).unwrap();
        assert_eq!(board.to_string(), " X  .  . \n .  O  . \n .  .  . \n");
    }
}
