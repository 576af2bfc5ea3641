use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;
pub const LOSS_POINTS: u32 = 0;

/// Result of one game from a single team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl GameResult {
    /// Classifies a score from the side that scored `goals_for`.
    pub fn from_score(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => GameResult::Win,
            std::cmp::Ordering::Less => GameResult::Loss,
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            GameResult::Win => WIN_POINTS,
            GameResult::Draw => DRAW_POINTS,
            GameResult::Loss => LOSS_POINTS,
        }
    }

    /// The same game seen from the other side.
    pub fn opposite(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Draw => GameResult::Draw,
            GameResult::Loss => GameResult::Win,
        }
    }

    pub fn letter(self) -> char {
        match self {
            GameResult::Win => 'W',
            GameResult::Draw => 'D',
            GameResult::Loss => 'L',
        }
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            GameResult::Win => "WIN",
            GameResult::Draw => "DRAW",
            GameResult::Loss => "LOSS",
        };
        write!(f, "{}", name)
    }
}
