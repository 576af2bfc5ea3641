use crate::TeamId;
use thiserror::Error;

pub type SeasonResult<T> = Result<T, SeasonError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeasonError {
    #[error("invalid season configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("week {week} is out of range, schedule has {weeks} weeks")]
    OutOfRange { week: usize, weeks: usize },

    #[error(transparent)]
    Precondition(#[from] PreconditionViolation),

    #[error("{0} is required")]
    Incomplete(&'static str),
}

impl SeasonError {
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        SeasonError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Input the season cannot be built from. Results would be undefined, so
/// these are rejected before any fixture is generated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreconditionViolation {
    #[error("team name `{0}` is used more than once")]
    DuplicateTeamName(String),

    #[error("player name `{0}` is used more than once")]
    DuplicatePlayerName(String),

    #[error("player `{name}` is {age}, players must be at least 18")]
    UnderagePlayer { name: String, age: u8 },

    #[error("team id {0} is used more than once")]
    DuplicateTeamId(TeamId),

    #[error("team {0} does not take part in this season")]
    UnknownTeam(TeamId),
}
