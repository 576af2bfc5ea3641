use crate::r#match::{MatchResult, MatchSimulator};
use crate::{Player, PlayerPosition, Team};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const MAX_HOME_GOALS: u32 = 4;
const MAX_AWAY_GOALS: u32 = 3;
const ASSIST_PROBABILITY: f64 = 0.7;
const MAX_INTERCEPTIONS: u32 = 8;
const MAX_TACKLES: u32 = 10;

/// Seeded outcome generator. Every game draws from its own RNG, seeded by
/// the engine seed and both team ids, so a game's result does not depend on
/// when, or on which thread, it is simulated.
#[derive(Debug, Clone, Copy)]
pub struct RandomMatchEngine {
    seed: u64,
}

impl Default for RandomMatchEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomMatchEngine {
    pub fn new(seed: u64) -> Self {
        RandomMatchEngine { seed }
    }

    fn game_rng(&self, home: &Team, away: &Team) -> StdRng {
        let pairing = (u64::from(home.id().value()) << 32) | u64::from(away.id().value());

        StdRng::seed_from_u64(self.seed ^ pairing.rotate_left(17))
    }

    fn credit_goals(rng: &mut StdRng, team: &Team, goals: u32, result: &mut MatchResult) {
        let outfield = Self::squad(
            team,
            &[
                PlayerPosition::Striker,
                PlayerPosition::Midfielder,
                PlayerPosition::Defender,
            ],
        );

        for _ in 0..goals {
            let Some(scorer) = outfield.choose(rng) else {
                return;
            };
            result.goal_scorers.push(scorer.name().to_string());

            if rng.random_bool(ASSIST_PROBABILITY) {
                let helpers: Vec<&Player> = outfield
                    .iter()
                    .copied()
                    .filter(|p| p.name() != scorer.name())
                    .collect();

                if let Some(assistant) = helpers.choose(rng) {
                    result.goal_assists.push(assistant.name().to_string());
                }
            }
        }
    }

    fn credit_defensive_events(rng: &mut StdRng, team: &Team, result: &mut MatchResult) {
        let defensive = Self::squad(team, &[PlayerPosition::Defender, PlayerPosition::Midfielder]);

        for _ in 0..rng.random_range(0..=MAX_INTERCEPTIONS) {
            if let Some(player) = defensive.choose(rng) {
                result.interceptions.push(player.name().to_string());
            }
        }

        for _ in 0..rng.random_range(0..=MAX_TACKLES) {
            if let Some(player) = defensive.choose(rng) {
                result.tackles.push(player.name().to_string());
            }
        }
    }

    /// Players of the given positions, or the whole roster if none match.
    fn squad<'t>(team: &'t Team, positions: &[PlayerPosition]) -> Vec<&'t Player> {
        let selected: Vec<&Player> = positions
            .iter()
            .flat_map(|&position| team.players(Some(position)))
            .collect();

        if selected.is_empty() {
            team.players(None)
        } else {
            selected
        }
    }
}

impl MatchSimulator for RandomMatchEngine {
    fn simulate(&self, home: &Team, away: &Team) -> MatchResult {
        let mut rng = self.game_rng(home, away);

        let mut result = MatchResult::new(
            rng.random_range(0..=MAX_HOME_GOALS),
            rng.random_range(0..=MAX_AWAY_GOALS),
        );

        Self::credit_goals(&mut rng, home, result.home_goals, &mut result);
        Self::credit_goals(&mut rng, away, result.away_goals, &mut result);

        Self::credit_defensive_events(&mut rng, home, &mut result);
        Self::credit_defensive_events(&mut rng, away, &mut result);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TeamIdSequence;

    fn generate_test_teams() -> (Team, Team) {
        let mut ids = TeamIdSequence::new();

        let roster = |prefix: &str| -> Vec<Player> {
            PlayerPosition::ALL
                .iter()
                .enumerate()
                .map(|(idx, &position)| {
                    Player::new(format!("{} {}", prefix, idx), position, 24).unwrap()
                })
                .collect()
        };

        (
            Team::new(ids.next_id(), "North", roster("North")),
            Team::new(ids.next_id(), "South", roster("South")),
        )
    }

    #[test]
    fn test_same_game_same_result() {
        let (home, away) = generate_test_teams();
        let engine = RandomMatchEngine::new(7);

        assert_eq!(engine.simulate(&home, &away), engine.simulate(&home, &away));
    }

    #[test]
    fn test_goal_scorers_match_score() {
        let (home, away) = generate_test_teams();

        for seed in 0..20 {
            let result = RandomMatchEngine::new(seed).simulate(&home, &away);

            assert!(result.home_goals <= MAX_HOME_GOALS);
            assert!(result.away_goals <= MAX_AWAY_GOALS);
            assert_eq!(
                result.goal_scorers.len() as u32,
                result.home_goals + result.away_goals
            );
            assert!(result.goal_assists.len() <= result.goal_scorers.len());
        }
    }

    #[test]
    fn test_goalkeepers_do_not_score() {
        let (home, away) = generate_test_teams();

        for seed in 0..20 {
            let result = RandomMatchEngine::new(seed).simulate(&home, &away);

            assert!(!result.goal_scorers.iter().any(|name| name.ends_with(" 0")));
        }
    }
}
