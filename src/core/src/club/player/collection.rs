use crate::club::{Player, PlayerPosition};

/// Players grouped by position. Within a group players keep the order in
/// which they joined.
#[derive(Debug, Clone, Default)]
pub struct PlayerCollection {
    groups: [Vec<Player>; PlayerPosition::COUNT],
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        let mut collection = PlayerCollection::default();

        for player in players {
            collection.add(player);
        }

        collection
    }

    pub fn add(&mut self, player: Player) {
        self.groups[player.position().index()].push(player);
    }

    pub fn remove(&mut self, name: &str) -> Option<Player> {
        self.groups.iter_mut().find_map(|group| {
            group
                .iter()
                .position(|p| p.name() == name)
                .map(|idx| group.remove(idx))
        })
    }

    pub fn by_position(&self, position: PlayerPosition) -> &[Player] {
        &self.groups[position.index()]
    }

    /// All players, goalkeepers first, then defenders, midfielders, strikers.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.groups.iter().flatten()
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.groups.iter_mut().flatten()
    }

    pub fn find(&self, name: &str) -> Option<&Player> {
        self.players().find(|p| p.name() == name)
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }
}
