use crate::league::{Game, WeekOfGames};
use crate::{SeasonError, SeasonResult, TeamId};
use itertools::Itertools;
use log::debug;
use std::collections::HashSet;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FixtureAlgorithm {
    /// Round-robin circle method: N - 1 weeks for even N, N weeks with one
    /// bye each for odd N.
    #[default]
    Circle,
    /// Greedy first-fit packing of the pairings in enumeration order. Not
    /// always minimal, six teams already need more than five weeks.
    FirstFit,
}

impl FromStr for FixtureAlgorithm {
    type Err = SeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(FixtureAlgorithm::Circle),
            "first-fit" | "first_fit" | "greedy" => Ok(FixtureAlgorithm::FirstFit),
            other => Err(SeasonError::invalid_configuration(format!(
                "unknown fixture algorithm `{}`",
                other
            ))),
        }
    }
}

pub struct FixtureGenerator;

impl FixtureGenerator {
    /// Builds both legs of a double round robin. The first leg covers every
    /// pairing once with the earlier-listed team at home; the second leg
    /// repeats each first-leg week in order with home and away swapped.
    ///
    /// Both algorithms are O(N^2) in the number of teams.
    pub fn generate(
        team_ids: &[TeamId],
        algorithm: FixtureAlgorithm,
    ) -> SeasonResult<Vec<WeekOfGames>> {
        if team_ids.len() < 2 {
            return Err(SeasonError::invalid_configuration(format!(
                "a season needs at least 2 teams, got {}",
                team_ids.len()
            )));
        }

        if !team_ids.iter().all_unique() {
            return Err(SeasonError::invalid_configuration(
                "the same team is listed twice",
            ));
        }

        let first_leg = match algorithm {
            FixtureAlgorithm::Circle => Self::circle_leg(team_ids),
            FixtureAlgorithm::FirstFit => Self::first_fit_leg(team_ids),
        };

        if first_leg.iter().any(Vec::is_empty) {
            return Err(SeasonError::invalid_configuration(
                "fixture generation produced a week without games",
            ));
        }

        let leg_weeks = first_leg.len();

        debug!(
            "generated {} weeks per leg for {} teams ({:?})",
            leg_weeks,
            team_ids.len(),
            algorithm
        );

        let return_leg: Vec<Vec<Game>> = first_leg
            .iter()
            .map(|games| games.iter().map(Game::reversed).collect())
            .collect();

        Ok(first_leg
            .into_iter()
            .chain(return_leg)
            .enumerate()
            .map(|(idx, games)| WeekOfGames::new(idx + 1, games))
            .collect())
    }

    /// Every unordered pairing once, `(i, j)` with `i < j`, in list order.
    fn pairings(team_ids: &[TeamId]) -> Vec<Game> {
        team_ids
            .iter()
            .copied()
            .tuple_combinations()
            .map(|(home, away)| Game::new(home, away))
            .collect()
    }

    fn first_fit_leg(team_ids: &[TeamId]) -> Vec<Vec<Game>> {
        let mut pool = Self::pairings(team_ids);
        let mut weeks = Vec::new();

        while !pool.is_empty() {
            let mut used: HashSet<TeamId> = HashSet::with_capacity(team_ids.len());
            let mut week = Vec::with_capacity(team_ids.len() / 2);
            let mut remaining = Vec::with_capacity(pool.len());

            for game in pool {
                if !used.contains(&game.home) && !used.contains(&game.away) {
                    used.insert(game.home);
                    used.insert(game.away);
                    week.push(game);
                } else {
                    remaining.push(game);
                }
            }

            weeks.push(week);
            pool = remaining;
        }

        weeks
    }

    /// Slot 0 stays fixed and meets slot `k` in week `k`. The remaining
    /// slots are numbered `0..m` (m odd) and in the week with round number
    /// `r` slots `a` and `b` meet when `a + b = r (mod m)`. An odd team count
    /// gets one phantom slot; whoever draws it has a bye.
    fn circle_leg(team_ids: &[TeamId]) -> Vec<Vec<Game>> {
        let teams = team_ids.len();
        let slots = teams + teams % 2;
        let m = slots - 1;

        (1..slots)
            .map(|opponent| {
                let fixed_partner = opponent - 1;
                let round = (2 * fixed_partner) % m;

                let mut pairs: Vec<(usize, usize)> = vec![(0, opponent)];

                for a in (0..m).filter(|&a| a != fixed_partner) {
                    let b = (round + m - a) % m;
                    if a < b {
                        pairs.push((a + 1, b + 1));
                    }
                }

                pairs.sort_unstable();

                pairs
                    .into_iter()
                    .filter(|&(_, away)| away < teams)
                    .map(|(home, away)| Game::new(team_ids[home], team_ids[away]))
                    .collect()
            })
            .collect()
    }
}
