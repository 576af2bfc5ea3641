pub mod club;
pub mod error;
pub mod league;
pub mod r#match;
pub mod utils;

pub use club::*;
pub use error::*;
pub use league::{
    FixtureAlgorithm, FixtureGenerator, Game, Games, Leaderboard, LeaderboardRow, ScheduleStore,
    Season, SeasonSettings, StatUpdater, WeekOfGames,
};
pub use r#match::{GameResult, MatchResult, MatchSimulator, RandomMatchEngine};
