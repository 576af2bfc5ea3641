use crate::Team;
use crate::r#match::MatchResult;

/// Decides what happens in a game. Implementations must be pure functions of
/// the two teams. Several games of a week may be simulated concurrently.
pub trait MatchSimulator {
    fn simulate(&self, home: &Team, away: &Team) -> MatchResult;
}

impl<F> MatchSimulator for F
where
    F: Fn(&Team, &Team) -> MatchResult,
{
    fn simulate(&self, home: &Team, away: &Team) -> MatchResult {
        self(home, away)
    }
}
