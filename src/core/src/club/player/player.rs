use crate::club::player::builder::PlayerBuilder;
use crate::club::{PlayerPosition, PlayerStatistics};
use crate::{PreconditionViolation, SeasonResult};
use std::fmt::{Display, Formatter, Result};

pub const MIN_PLAYER_AGE: u8 = 18;

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    position: PlayerPosition,
    age: u8,

    pub statistics: PlayerStatistics,
}

impl Player {
    pub fn new(name: impl Into<String>, position: PlayerPosition, age: u8) -> SeasonResult<Self> {
        let name = name.into();

        if age < MIN_PLAYER_AGE {
            return Err(PreconditionViolation::UnderagePlayer { name, age }.into());
        }

        Ok(Player {
            name,
            position,
            age,
            statistics: PlayerStatistics::new(),
        })
    }

    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> PlayerPosition {
        self.position
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn reset_stats(&mut self) {
        self.statistics.reset();
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.name, self.position, self.age)
    }
}
