use crate::TeamId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Game {
    pub home: TeamId,
    pub away: TeamId,
}

impl Game {
    pub fn new(home: TeamId, away: TeamId) -> Self {
        Game { home, away }
    }

    /// The return fixture: same pairing, home and away swapped.
    pub fn reversed(&self) -> Self {
        Game::new(self.away, self.home)
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home == team_id || self.away == team_id
    }
}

/// Games played in the same week. No team appears in two of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekOfGames {
    week: usize,
    games: Vec<Game>,
}

impl WeekOfGames {
    pub fn new(week: usize, games: Vec<Game>) -> Self {
        WeekOfGames { week, games }
    }

    /// Number the week was generated with. It stays the same when the week
    /// is delayed.
    pub fn week(&self) -> usize {
        self.week
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Game> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl<'w> IntoIterator for &'w WeekOfGames {
    type Item = &'w Game;
    type IntoIter = std::slice::Iter<'w, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}
