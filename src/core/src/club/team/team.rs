use crate::club::team::builder::TeamBuilder;
use crate::r#match::GameResult;
use crate::{Player, PlayerCollection, PlayerPosition, PlayerStat, TeamId, TeamStatistics};
use std::collections::VecDeque;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone)]
pub struct Team {
    id: TeamId,
    name: String,

    pub players: PlayerCollection,
    pub statistics: TeamStatistics,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, players: Vec<Player>) -> Self {
        Team {
            id,
            name: name.into(),
            players: PlayerCollection::new(players),
            statistics: TeamStatistics::new(),
        }
    }

    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.add(player);
    }

    pub fn remove_player(&mut self, name: &str) -> Option<Player> {
        self.players.remove(name)
    }

    /// Players of one position, or the whole roster in position order
    /// when `position` is `None`.
    pub fn players(&self, position: Option<PlayerPosition>) -> Vec<&Player> {
        match position {
            Some(position) => self.players.by_position(position).iter().collect(),
            None => self.players.players().collect(),
        }
    }

    /// `None` until the team has played.
    pub fn last_five_results(&self) -> Option<&VecDeque<GameResult>> {
        let results = self.statistics.last_results();

        if results.is_empty() { None } else { Some(results) }
    }

    /// Best `count` players by `stat`, highest first, ties by name.
    pub fn top_players(&self, stat: PlayerStat, count: usize) -> Vec<(u32, &str, &Player)> {
        let mut ranked: Vec<(u32, &str, &Player)> = self
            .players
            .players()
            .map(|p| (p.statistics.get(stat), p.name(), p))
            .collect();

        ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        ranked.truncate(count);
        ranked
    }

    /// Clears the standing and every rostered player's statistics.
    pub fn reset_stats(&mut self) {
        self.statistics.reset();

        for player in self.players.players_mut() {
            player.reset_stats();
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}
