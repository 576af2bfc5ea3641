use crate::{Player, SeasonError, SeasonResult, Team, TeamId};

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<TeamId>,
    name: Option<String>,
    players: Option<Vec<Player>>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: TeamId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = Some(players);
        self
    }

    pub fn build(self) -> SeasonResult<Team> {
        Ok(Team::new(
            self.id.ok_or(SeasonError::Incomplete("id"))?,
            self.name.ok_or(SeasonError::Incomplete("name"))?,
            self.players.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TeamIdSequence;

    #[test]
    fn test_build_requires_id() {
        let result = Team::builder().name("Nameless").build();

        assert_eq!(result.unwrap_err(), SeasonError::Incomplete("id"));
    }

    #[test]
    fn test_build_without_players() {
        let mut ids = TeamIdSequence::new();

        let team = Team::builder().id(ids.next_id()).name("Empty Side").build().unwrap();

        assert!(team.is_empty());
        assert_eq!(team.statistics.points(), 0);
    }
}
