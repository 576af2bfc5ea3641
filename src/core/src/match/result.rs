use crate::r#match::GameResult;
use serde::Serialize;

/// Outcome of one game as reported by a `MatchSimulator`. Event lists name
/// the player credited with each event; a name may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub home_goals: u32,
    pub away_goals: u32,
    pub goal_scorers: Vec<String>,
    pub goal_assists: Vec<String>,
    pub interceptions: Vec<String>,
    pub tackles: Vec<String>,
}

impl MatchResult {
    pub fn new(home_goals: u32, away_goals: u32) -> Self {
        MatchResult {
            home_goals,
            away_goals,
            ..Default::default()
        }
    }

    pub fn with_scorers<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.goal_scorers.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_assists<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.goal_assists.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_interceptions<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.interceptions.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_tackles<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.tackles.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn home_result(&self) -> GameResult {
        GameResult::from_score(self.home_goals, self.away_goals)
    }

    pub fn away_result(&self) -> GameResult {
        self.home_result().opposite()
    }
}
