use crate::{Move, Verdict};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Summary of a single game, written to the log once the game ends.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameData {
    pub game_id: Uuid,
    pub moves: Vec<Move>,
    pub verdict: Option<Verdict>,
}

impl Default for GameData {
    fn default() -> Self {
        Self::new()
    }
}

impl GameData {
    pub fn new() -> Self {
        Self::new_with_id(Uuid::new_v4())
    }

    pub fn new_with_id(game_id: Uuid) -> Self {
        Self {
            game_id,
            moves: vec![],
            verdict: None,
        }
    }

    pub fn add_move(&mut self, m: Move) {
        self.moves.push(m);
    }

    pub fn finish(&mut self, verdict: Verdict) {
        self.verdict = Some(verdict);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Player;

    #[test]
    fn serializes_to_json() {
        let game_id = Uuid::new_v4();
        let mut game_data = GameData::new_with_id(game_id);
        game_data.add_move(Move::new((1, 1), Player::One));
        game_data.finish(Verdict::Draw);

        let json = serde_json::to_string(&game_data).expect("game data should serialize");
        assert!(json.contains(&game_id.to_string()));
        assert!(json.contains("\"Draw\""));

        let parsed: GameData = serde_json::from_str(&json).expect("game data should parse");
        assert_eq!(parsed, game_data);
    }
}
