use crate::r#match::GameResult;
use std::collections::VecDeque;

pub const LAST_RESULTS_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamStat {
    GamesPlayed,
    Points,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
}

/// Standing of a team. Points, games played, goal difference and the
/// result history are derived: they only move through the `record_*`
/// operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamStatistics {
    games_played: u32,
    points: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    goals_for: u32,
    goals_against: u32,
    goal_difference: i64,
    last_results: VecDeque<GameResult>,
}

impl TeamStatistics {
    pub fn new() -> Self {
        TeamStatistics {
            last_results: VecDeque::with_capacity(LAST_RESULTS_SIZE),
            ..Default::default()
        }
    }

    pub fn get(&self, stat: TeamStat) -> i64 {
        match stat {
            TeamStat::GamesPlayed => i64::from(self.games_played),
            TeamStat::Points => i64::from(self.points),
            TeamStat::Wins => i64::from(self.wins),
            TeamStat::Draws => i64::from(self.draws),
            TeamStat::Losses => i64::from(self.losses),
            TeamStat::GoalsFor => i64::from(self.goals_for),
            TeamStat::GoalsAgainst => i64::from(self.goals_against),
            TeamStat::GoalDifference => self.goal_difference,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn goals_for(&self) -> u32 {
        self.goals_for
    }

    pub fn goals_against(&self) -> u32 {
        self.goals_against
    }

    pub fn goal_difference(&self) -> i64 {
        self.goal_difference
    }

    /// Oldest first, never more than `LAST_RESULTS_SIZE` entries.
    pub fn last_results(&self) -> &VecDeque<GameResult> {
        &self.last_results
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
        self.record_outcome(GameResult::Win);
    }

    pub fn record_draw(&mut self) {
        self.draws += 1;
        self.record_outcome(GameResult::Draw);
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
        self.record_outcome(GameResult::Loss);
    }

    pub fn record_result(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.record_win(),
            GameResult::Draw => self.record_draw(),
            GameResult::Loss => self.record_loss(),
        }
    }

    pub fn record_goals_for(&mut self, goals: u32) {
        self.goals_for += goals;
        self.refresh_goal_difference();
    }

    pub fn record_goals_against(&mut self, goals: u32) {
        self.goals_against += goals;
        self.refresh_goal_difference();
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn record_outcome(&mut self, result: GameResult) {
        self.games_played += 1;
        self.points += result.points();

        if self.last_results.len() >= LAST_RESULTS_SIZE {
            self.last_results.pop_front();
        }
        self.last_results.push_back(result);
    }

    fn refresh_goal_difference(&mut self) {
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
    }
}
