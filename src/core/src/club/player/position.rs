use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PlayerPosition {
    Goalkeeper,
    Defender,
    Midfielder,
    Striker,
}

impl PlayerPosition {
    /// Every position, in the order a roster lists its groups.
    pub const ALL: [PlayerPosition; 4] = [
        PlayerPosition::Goalkeeper,
        PlayerPosition::Defender,
        PlayerPosition::Midfielder,
        PlayerPosition::Striker,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn short_name(self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "GK",
            PlayerPosition::Defender => "DF",
            PlayerPosition::Midfielder => "MF",
            PlayerPosition::Striker => "ST",
        }
    }
}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_roster_order() {
        for (idx, position) in PlayerPosition::ALL.iter().enumerate() {
            assert_eq!(position.index(), idx);
        }
    }
}
