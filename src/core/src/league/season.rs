use crate::league::{
    FixtureGenerator, Game, Games, Leaderboard, LeaderboardRow, ScheduleStore, SeasonSettings,
    StatUpdater,
};
use crate::r#match::{GameResult, MatchResult, MatchSimulator};
use crate::{PreconditionViolation, SeasonError, SeasonResult, Team, TeamId};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// One double round-robin season. Owns the teams, their schedule and the
/// table.
#[derive(Debug)]
pub struct Season {
    teams: Vec<Team>,
    positions: HashMap<TeamId, usize>,
    schedule: ScheduleStore,
    leaderboard: Leaderboard,
    settings: SeasonSettings,
}

impl Season {
    pub fn new(teams: Vec<Team>) -> SeasonResult<Self> {
        Self::with_settings(teams, SeasonSettings::default())
    }

    pub fn with_settings(teams: Vec<Team>, settings: SeasonSettings) -> SeasonResult<Self> {
        Self::validate(&teams)?;

        let ids: Vec<TeamId> = teams.iter().map(Team::id).collect();
        let weeks = FixtureGenerator::generate(&ids, settings.fixtures)?;

        let positions = ids
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let leaderboard = Leaderboard::new(&teams);
        let schedule = ScheduleStore::new(weeks);

        info!(
            "season created: {} teams, {} weeks, {} games",
            teams.len(),
            schedule.len(),
            schedule.total_games()
        );

        Ok(Season {
            teams,
            positions,
            schedule,
            leaderboard,
            settings,
        })
    }

    fn validate(teams: &[Team]) -> SeasonResult<()> {
        if teams.len() < 2 {
            return Err(SeasonError::invalid_configuration(format!(
                "a season needs at least 2 teams, got {}",
                teams.len()
            )));
        }

        let mut ids = HashSet::with_capacity(teams.len());
        let mut team_names = HashSet::with_capacity(teams.len());
        let mut player_names = HashSet::new();

        for team in teams {
            if !ids.insert(team.id()) {
                return Err(PreconditionViolation::DuplicateTeamId(team.id()).into());
            }

            if !team_names.insert(team.name()) {
                let name = team.name().to_string();
                return Err(PreconditionViolation::DuplicateTeamName(name).into());
            }

            for player in team.players.players() {
                if !player_names.insert(player.name()) {
                    let name = player.name().to_string();
                    return Err(PreconditionViolation::DuplicatePlayerName(name).into());
                }
            }
        }

        Ok(())
    }

    /// Plays every scheduled game in schedule order.
    ///
    /// Statistics accumulate: a second call plays the whole schedule again
    /// on top of the first. Call `reset_stats` first if that is not wanted.
    pub fn simulate_season<S>(&mut self, simulator: &S) -> SeasonResult<()>
    where
        S: MatchSimulator + Sync,
    {
        info!("simulating season of {} teams", self.teams.len());

        let weeks: Vec<(usize, Vec<Game>)> = self
            .schedule
            .weeks()
            .iter()
            .map(|week| (week.week(), week.games().to_vec()))
            .collect();

        let mut played = 0;

        for (week, games) in weeks {
            // Nobody plays twice in a week, so every game of the week sees
            // the same statistics it would see when played one by one.
            let results = self.simulate_week(&games, simulator)?;

            for (game, result) in games.iter().zip(&results) {
                self.apply_result(*game, result)?;
            }

            played += games.len();
            debug!("week {} played, {} games", week, games.len());
        }

        info!("season finished, {} games played", played);

        Ok(())
    }

    fn simulate_week<S>(&self, games: &[Game], simulator: &S) -> SeasonResult<Vec<MatchResult>>
    where
        S: MatchSimulator + Sync,
    {
        let play = |game: &Game| -> SeasonResult<MatchResult> {
            Ok(simulator.simulate(self.team_by_id(game.home)?, self.team_by_id(game.away)?))
        };

        if self.settings.parallel_outcomes {
            games.par_iter().map(play).collect()
        } else {
            games.iter().map(play).collect()
        }
    }

    /// Runs the full statistics cascade for one reported game and returns the
    /// home side's result.
    pub fn apply_result(&mut self, game: Game, result: &MatchResult) -> SeasonResult<GameResult> {
        let (home, away) = self.pair_mut(game)?;

        Ok(StatUpdater::apply(result, home, away))
    }

    pub fn delay_week_of_games(
        &mut self,
        original_week: usize,
        new_week: Option<usize>,
    ) -> SeasonResult<()> {
        self.schedule.delay(original_week, new_week)
    }

    /// A fresh pass over the whole schedule in its current order, one game
    /// per pull.
    pub fn next_game(&self) -> Games<'_> {
        self.schedule.games()
    }

    /// Clears team and player statistics. The schedule is left as it is.
    pub fn reset_stats(&mut self) {
        self.teams.iter_mut().for_each(Team::reset_stats);

        info!("season statistics reset for {} teams", self.teams.len());
    }

    pub fn rankings(&mut self) -> Vec<LeaderboardRow> {
        self.leaderboard.rankings(&self.teams)
    }

    /// Teams in the order they were given.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.positions.get(&id).map(|&idx| &self.teams[idx])
    }

    pub fn schedule(&self) -> &ScheduleStore {
        &self.schedule
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn settings(&self) -> &SeasonSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    fn position(&self, id: TeamId) -> SeasonResult<usize> {
        self.positions
            .get(&id)
            .copied()
            .ok_or_else(|| PreconditionViolation::UnknownTeam(id).into())
    }

    fn team_by_id(&self, id: TeamId) -> SeasonResult<&Team> {
        self.position(id).map(|idx| &self.teams[idx])
    }

    fn pair_mut(&mut self, game: Game) -> SeasonResult<(&mut Team, &mut Team)> {
        let home = self.position(game.home)?;
        let away = self.position(game.away)?;

        if home == away {
            return Err(SeasonError::invalid_configuration(format!(
                "team {} cannot play itself",
                game.home
            )));
        }

        if home < away {
            let (left, right) = self.teams.split_at_mut(away);
            Ok((&mut left[home], &mut right[0]))
        } else {
            let (left, right) = self.teams.split_at_mut(home);
            Ok((&mut right[0], &mut left[away]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::FixtureAlgorithm;
    use crate::r#match::RandomMatchEngine;
    use crate::{Player, PlayerPosition, PlayerStat, TeamIdSequence};

    fn generate_teams(names: &[&str]) -> Vec<Team> {
        let mut ids = TeamIdSequence::new();

        names
            .iter()
            .map(|name| {
                let players = PlayerPosition::ALL
                    .iter()
                    .map(|&position| {
                        Player::new(format!("{} {}", name, position), position, 21).unwrap()
                    })
                    .collect();

                Team::new(ids.next_id(), *name, players)
            })
            .collect()
    }

    fn names(rows: &[LeaderboardRow]) -> Vec<&str> {
        rows.iter().map(|row| row.team_name.as_str()).collect()
    }

    #[test]
    fn test_single_result_scenario() {
        let mut season = Season::new(generate_teams(&["A", "B", "C", "D"])).unwrap();
        assert_eq!(season.schedule().len(), 6);
        assert!(season.schedule().weeks().iter().all(|w| w.len() == 2));

        let ids: Vec<TeamId> = season.teams().iter().map(Team::id).collect();
        let first_game = *season.next_game().next().unwrap();
        assert_eq!(first_game, Game::new(ids[0], ids[1]));

        season
            .apply_result(first_game, &MatchResult::new(2, 0).with_scorers(["A ST", "A MF"]))
            .unwrap();

        let rows = season.rankings();
        assert_eq!(names(&rows), vec!["A", "C", "D", "B"]);

        let a = &rows[0];
        assert_eq!((a.wins, a.points, a.goals_for, a.goal_difference), (1, 3, 2, 2));
        assert_eq!(a.last_five_results, vec![GameResult::Win]);

        let b = &rows[3];
        assert_eq!((b.losses, b.points, b.goals_against, b.goal_difference), (1, 0, 2, -2));
        assert_eq!(b.last_five_results, vec![GameResult::Loss]);

        for row in &rows[1..3] {
            assert_eq!(row.games_played, 0);
            assert_eq!(row.points, 0);
            assert!(row.last_five_results.is_empty());
        }

        let team_a = season.team(ids[0]).unwrap();
        assert_eq!(team_a.players.find("A ST").unwrap().statistics.get(PlayerStat::Goals), 1);
        assert_eq!(team_a.players.find("A GK").unwrap().statistics.games_played(), 1);
    }

    #[test]
    fn test_initial_rankings_by_name() {
        let mut season = Season::new(generate_teams(&["Wolves", "Ajax", "Lyon"])).unwrap();

        assert_eq!(names(&season.rankings()), vec!["Ajax", "Lyon", "Wolves"]);
        assert_eq!(season.teams()[0].name(), "Wolves");
    }

    #[test]
    fn test_delay_week_to_end() {
        let mut season = Season::new(generate_teams(&["A", "B", "C", "D"])).unwrap();

        season.delay_week_of_games(2, None).unwrap();

        let order: Vec<usize> = season.schedule().weeks().iter().map(|w| w.week()).collect();
        assert_eq!(order, vec![1, 3, 4, 5, 6, 2]);
        assert_eq!(
            season.delay_week_of_games(9, None),
            Err(SeasonError::OutOfRange { week: 9, weeks: 6 })
        );
    }

    #[test]
    fn test_simulate_full_season() {
        let mut season = Season::new(generate_teams(&["A", "B", "C", "D", "E", "F"])).unwrap();

        season.simulate_season(&RandomMatchEngine::new(11)).unwrap();

        let rows = season.rankings();
        for row in &rows {
            assert_eq!(row.games_played, 10);
            assert_eq!(row.wins + row.draws + row.losses, 10);
            assert_eq!(row.points, 3 * row.wins + row.draws);
            assert_eq!(
                i64::from(row.goals_for) - i64::from(row.goals_against),
                row.goal_difference
            );
            assert_eq!(row.last_five_results.len(), 5);
        }

        let goals_for: u32 = rows.iter().map(|r| r.goals_for).sum();
        let goals_against: u32 = rows.iter().map(|r| r.goals_against).sum();
        assert_eq!(goals_for, goals_against);

        for pair in rows.windows(2) {
            assert!(pair[0].points >= pair[1].points);
        }

        for player in season.teams().iter().flat_map(|t| t.players(None)) {
            assert_eq!(player.statistics.games_played(), 10);
        }
    }

    #[test]
    fn test_independent_seasons_agree() {
        let engine = RandomMatchEngine::new(3);

        let mut first = Season::new(generate_teams(&["A", "B", "C", "D", "E"])).unwrap();
        let mut second = Season::with_settings(
            generate_teams(&["A", "B", "C", "D", "E"]),
            SeasonSettings::default().with_parallel_outcomes(false),
        )
        .unwrap();

        first.simulate_season(&engine).unwrap();
        second.simulate_season(&engine).unwrap();

        assert_eq!(first.rankings(), second.rankings());
    }

    #[test]
    fn test_second_simulation_accumulates() {
        let mut season = Season::new(generate_teams(&["A", "B", "C"])).unwrap();
        let engine = RandomMatchEngine::new(5);

        season.simulate_season(&engine).unwrap();
        season.simulate_season(&engine).unwrap();

        assert!(season.rankings().iter().all(|row| row.games_played == 8));
    }

    #[test]
    fn test_leaderboard_entries_index_own_teams() {
        let mut season = Season::new(generate_teams(&["D", "A", "C", "B", "E"])).unwrap();
        season.simulate_season(&RandomMatchEngine::new(11)).unwrap();
        season.rankings();

        let mut entries = season.leaderboard().entries().to_vec();
        entries.sort_unstable();

        assert_eq!(entries, (0..season.len()).collect::<Vec<_>>());
        assert_eq!(season.leaderboard().len(), season.teams().len());
    }

    #[test]
    fn test_reset_stats_allows_clean_replay() {
        let engine = RandomMatchEngine::new(5);
        let mut fresh = Season::new(generate_teams(&["A", "B", "C"])).unwrap();
        fresh.simulate_season(&engine).unwrap();

        let mut replayed = Season::new(generate_teams(&["A", "B", "C"])).unwrap();
        replayed.simulate_season(&engine).unwrap();
        replayed.reset_stats();

        assert!(replayed.rankings().iter().all(|row| row.games_played == 0 && row.points == 0));
        assert!(replayed
            .teams()
            .iter()
            .flat_map(|team| team.players(None))
            .all(|player| player.statistics.games_played() == 0));

        replayed.simulate_season(&engine).unwrap();

        assert_eq!(fresh.rankings(), replayed.rankings());
    }

    #[test]
    fn test_closure_simulator() {
        let mut season = Season::with_settings(
            generate_teams(&["A", "B", "C", "D"]),
            SeasonSettings::default().with_fixtures(FixtureAlgorithm::FirstFit),
        )
        .unwrap();

        let home_always_wins = |_: &Team, _: &Team| MatchResult::new(1, 0);
        season.simulate_season(&home_always_wins).unwrap();

        let rows = season.rankings();
        // every team hosts three games
        assert!(rows.iter().all(|row| row.points == 9 && row.goal_difference == 0));
        assert_eq!(names(&rows), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_next_game_covers_schedule() {
        let season = Season::new(generate_teams(&["A", "B", "C", "D", "E"])).unwrap();

        assert_eq!(season.next_game().count(), 20);
        assert_eq!(season.next_game().count(), season.schedule().total_games());
    }

    #[test]
    fn test_next_game_starts_over_after_delay() {
        let mut season = Season::new(generate_teams(&["A", "B", "C", "D"])).unwrap();
        let second_week_first = season.schedule().weeks()[1].games()[0];

        let mut pass = season.next_game();
        pass.next();
        assert_eq!(pass.count(), season.schedule().total_games() - 1);

        season.delay_week_of_games(1, None).unwrap();

        let first = season.next_game().next().copied().unwrap();
        assert_eq!(first, second_week_first);
        assert_eq!(season.next_game().count(), season.schedule().total_games());
    }

    #[test]
    fn test_too_few_teams() {
        let result = Season::new(generate_teams(&["Alone"]));

        assert!(matches!(result, Err(SeasonError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_duplicate_team_name() {
        let mut teams = generate_teams(&["A", "B"]);
        let mut ids = TeamIdSequence::new();
        for _ in 0..2 {
            ids.next_id();
        }
        teams.push(Team::new(ids.next_id(), "A", Vec::new()));

        let result = Season::new(teams);

        assert_eq!(
            result.unwrap_err(),
            SeasonError::Precondition(PreconditionViolation::DuplicateTeamName(String::from("A")))
        );
    }

    #[test]
    fn test_duplicate_player_name_across_teams() {
        let mut teams = generate_teams(&["A", "B"]);
        teams[1].add_player(Player::new("A GK", PlayerPosition::Goalkeeper, 35).unwrap());

        let result = Season::new(teams);

        assert_eq!(
            result.unwrap_err(),
            SeasonError::Precondition(PreconditionViolation::DuplicatePlayerName(
                String::from("A GK")
            ))
        );
    }

    #[test]
    fn test_apply_result_for_unknown_team() {
        let mut season = Season::new(generate_teams(&["A", "B"])).unwrap();
        let known = season.teams()[0].id();

        let mut other = TeamIdSequence::new();
        let stranger = (0..5).map(|_| other.next_id()).last().unwrap();

        let result = season.apply_result(Game::new(known, stranger), &MatchResult::new(1, 0));

        assert_eq!(
            result,
            Err(SeasonError::Precondition(PreconditionViolation::UnknownTeam(stranger)))
        );
        assert_eq!(season.teams()[0].statistics.games_played(), 0);
    }

    #[test]
    fn test_team_cannot_play_itself() {
        let mut season = Season::new(generate_teams(&["A", "B"])).unwrap();
        let id = season.teams()[1].id();

        let result = season.apply_result(Game::new(id, id), &MatchResult::new(1, 0));

        assert!(matches!(result, Err(SeasonError::InvalidConfiguration { .. })));
    }
}
