mod leaderboard;
mod row;

pub use leaderboard::*;
pub use row::*;
