mod boards;
mod field;
mod game_data;
mod r#move;
mod player;
mod verdict;

pub use boards::{check_matrix, evaluate, winner, Board, InvalidMove};
pub use field::Field;
pub use game_data::GameData;
pub use player::Player;
pub use r#move::{Coordinates, Move};
pub use verdict::Verdict;
