use crate::Team;
use crate::r#match::GameResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub team_name: String,
    pub games_played: u32,
    pub points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub last_five_results: Vec<GameResult>,
}

impl From<&Team> for LeaderboardRow {
    fn from(team: &Team) -> Self {
        let statistics = &team.statistics;

        LeaderboardRow {
            team_name: team.name().to_string(),
            games_played: statistics.games_played(),
            points: statistics.points(),
            wins: statistics.wins(),
            draws: statistics.draws(),
            losses: statistics.losses(),
            goals_for: statistics.goals_for(),
            goals_against: statistics.goals_against(),
            goal_difference: statistics.goal_difference(),
            last_five_results: statistics.last_results().iter().copied().collect(),
        }
    }
}
