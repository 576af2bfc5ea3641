use crate::generators::names::{FIRST_NAMES, LAST_NAMES};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use season_core::{Player, PlayerPosition, SeasonResult};
use std::collections::HashSet;

const MIN_AGE: u8 = 18;
const MAX_AGE: u8 = 36;

/// Generates players whose names are unique across everything this
/// generator has produced.
pub struct PlayerGenerator {
    rng: StdRng,
    used_names: HashSet<String>,
}

impl PlayerGenerator {
    pub fn with_seed(seed: u64) -> Self {
        PlayerGenerator {
            rng: StdRng::seed_from_u64(seed),
            used_names: HashSet::new(),
        }
    }

    pub fn generate(&mut self, position: PlayerPosition) -> SeasonResult<Player> {
        let name = self.generate_name();

        let (weight, height) = match position {
            PlayerPosition::Goalkeeper => (
                self.rng.random_range(78..=95),
                self.rng.random_range(185..=200),
            ),
            PlayerPosition::Defender => (
                self.rng.random_range(72..=90),
                self.rng.random_range(178..=195),
            ),
            PlayerPosition::Midfielder => (
                self.rng.random_range(64..=82),
                self.rng.random_range(168..=186),
            ),
            PlayerPosition::Striker => (
                self.rng.random_range(68..=88),
                self.rng.random_range(170..=192),
            ),
        };

        Player::builder()
            .name(name)
            .position(position)
            .age(self.rng.random_range(MIN_AGE..=MAX_AGE))
            .weight(weight)
            .height(height)
            .star_skill(self.rng.random_range(1..=5))
            .weak_foot_ability(self.rng.random_range(1..=5))
            .build()
    }

    fn generate_name(&mut self) -> String {
        let first = FIRST_NAMES.choose(&mut self.rng).copied().unwrap_or("Player");
        let last = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or("Unknown");

        let base = format!("{} {}", first, last);
        let mut name = base.clone();
        let mut suffix = 2;

        while self.used_names.contains(&name) {
            name = format!("{} {}", base, suffix);
            suffix += 1;
        }

        if suffix > 2 {
            debug!("player name `{}` taken, using `{}`", base, name);
        }

        self.used_names.insert(name.clone());
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use season_core::PlayerStat;

    #[test]
    fn test_generated_names_are_unique() {
        let mut generator = PlayerGenerator::with_seed(1);
        let mut names = HashSet::new();

        for _ in 0..2000 {
            let player = generator.generate(PlayerPosition::Midfielder).unwrap();
            assert!(names.insert(player.name().to_string()));
        }
    }

    #[test]
    fn test_generated_player_is_adult_with_attributes() {
        let mut generator = PlayerGenerator::with_seed(9);

        for position in PlayerPosition::ALL {
            let player = generator.generate(position).unwrap();

            assert!(player.age() >= MIN_AGE && player.age() <= MAX_AGE);
            assert_eq!(player.position(), position);
            assert!(player.statistics.get(PlayerStat::Height) >= 165);
            assert_eq!(player.statistics.games_played(), 0);
        }
    }
}
