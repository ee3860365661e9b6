use serde::{Deserialize, Serialize};

use crate::Player;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Win { winner: Player },
    Draw,
    InProgress,
}

impl Verdict {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Verdict::InProgress)
    }
}
