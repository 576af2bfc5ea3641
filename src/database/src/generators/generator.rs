use crate::generators::names::{CITIES, CLUB_SUFFIXES};
use crate::generators::{PlayerGenerator, TeamGenerator};
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use season_core::{SeasonResult, Team, TeamIdSequence};

/// Builds a full roster of uniquely named teams and players.
pub struct SeasonGenerator;

impl SeasonGenerator {
    pub fn generate(team_count: usize, squad_size: usize, seed: u64) -> SeasonResult<Vec<Team>> {
        let mut ids = TeamIdSequence::new();
        let mut players = PlayerGenerator::with_seed(seed);

        let teams = Self::team_names(team_count, seed)
            .into_iter()
            .map(|name| TeamGenerator::generate(&mut ids, name, squad_size, &mut players))
            .collect::<SeasonResult<Vec<Team>>>()?;

        info!("generated {} teams with {} players each", teams.len(), squad_size);

        Ok(teams)
    }

    /// Distinct club names, shuffled. Past the number of city and suffix
    /// combinations names get a running number.
    fn team_names(team_count: usize, seed: u64) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed.rotate_left(32));

        let mut combinations: Vec<String> = CLUB_SUFFIXES
            .iter()
            .flat_map(|suffix| CITIES.iter().map(move |city| format!("{} {}", city, suffix)))
            .collect();
        combinations.shuffle(&mut rng);

        let available = combinations.len();

        (0..team_count)
            .map(|idx| {
                let name = &combinations[idx % available];
                match idx / available {
                    0 => name.clone(),
                    round => format!("{} {}", name, round + 1),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use season_core::Season;
    use std::collections::HashSet;

    #[test]
    fn test_generated_teams_form_a_season() {
        let teams = SeasonGenerator::generate(8, 14, 21).unwrap();

        assert_eq!(teams.len(), 8);

        let season = Season::new(teams).unwrap();
        assert_eq!(season.schedule().len(), 14);
    }

    #[test]
    fn test_team_names_are_unique_beyond_combinations() {
        let count = CITIES.len() * CLUB_SUFFIXES.len() + 10;

        let names = SeasonGenerator::team_names(count, 3);

        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), count);
    }

    #[test]
    fn test_same_seed_same_roster() {
        let first = SeasonGenerator::generate(4, 5, 77).unwrap();
        let second = SeasonGenerator::generate(4, 5, 77).unwrap();

        let names = |teams: &[Team]| -> Vec<String> {
            teams
                .iter()
                .flat_map(|t| {
                    std::iter::once(t.name().to_string())
                        .chain(t.players(None).into_iter().map(|p| p.name().to_string()))
                })
                .collect()
        };

        assert_eq!(names(&first), names(&second));
    }
}
