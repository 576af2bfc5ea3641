use crate::r#match::GameResult;

/// Slots kept for a player's most recent results.
pub const PLAYER_RESULT_SLOTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStat {
    GamesPlayed,
    Goals,
    Assists,
    Interceptions,
    Tackles,
    Weight,
    Height,
    StarSkill,
    WeakFootAbility,
}

impl PlayerStat {
    pub const ALL: [PlayerStat; 9] = [
        PlayerStat::GamesPlayed,
        PlayerStat::Goals,
        PlayerStat::Assists,
        PlayerStat::Interceptions,
        PlayerStat::Tackles,
        PlayerStat::Weight,
        PlayerStat::Height,
        PlayerStat::StarSkill,
        PlayerStat::WeakFootAbility,
    ];
}

/// Physical and skill attributes. Unlike the match counters these are
/// assigned directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAttribute {
    Weight,
    Height,
    StarSkill,
    WeakFootAbility,
}

impl From<PlayerAttribute> for PlayerStat {
    fn from(attribute: PlayerAttribute) -> Self {
        match attribute {
            PlayerAttribute::Weight => PlayerStat::Weight,
            PlayerAttribute::Height => PlayerStat::Height,
            PlayerAttribute::StarSkill => PlayerStat::StarSkill,
            PlayerAttribute::WeakFootAbility => PlayerStat::WeakFootAbility,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStatistics {
    games_played: u32,
    goals: u32,
    assists: u32,
    interceptions: u32,
    tackles: u32,
    last_results: [Option<GameResult>; PLAYER_RESULT_SLOTS],
    weight: u32,
    height: u32,
    star_skill: u32,
    weak_foot_ability: u32,
}

impl PlayerStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: PlayerStat) -> u32 {
        match stat {
            PlayerStat::GamesPlayed => self.games_played,
            PlayerStat::Goals => self.goals,
            PlayerStat::Assists => self.assists,
            PlayerStat::Interceptions => self.interceptions,
            PlayerStat::Tackles => self.tackles,
            PlayerStat::Weight => self.weight,
            PlayerStat::Height => self.height,
            PlayerStat::StarSkill => self.star_skill,
            PlayerStat::WeakFootAbility => self.weak_foot_ability,
        }
    }

    pub fn set_attribute(&mut self, attribute: PlayerAttribute, value: u32) {
        match attribute {
            PlayerAttribute::Weight => self.weight = value,
            PlayerAttribute::Height => self.height = value,
            PlayerAttribute::StarSkill => self.star_skill = value,
            PlayerAttribute::WeakFootAbility => self.weak_foot_ability = value,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn goals(&self) -> u32 {
        self.goals
    }

    pub fn assists(&self) -> u32 {
        self.assists
    }

    pub fn interceptions(&self) -> u32 {
        self.interceptions
    }

    pub fn tackles(&self) -> u32 {
        self.tackles
    }

    /// Results of the latest games, oldest first. Unused slots are `None`
    /// and always trail the filled ones.
    pub fn last_results(&self) -> &[Option<GameResult>; PLAYER_RESULT_SLOTS] {
        &self.last_results
    }

    /// Counts one more game and stores its result, dropping the oldest slot
    /// when all of them are taken.
    pub fn record_game(&mut self, result: GameResult) {
        self.games_played += 1;

        match self.last_results.iter().position(Option::is_none) {
            Some(free) => self.last_results[free] = Some(result),
            None => {
                self.last_results.rotate_left(1);
                self.last_results[PLAYER_RESULT_SLOTS - 1] = Some(result);
            }
        }
    }

    pub fn record_goals(&mut self, count: u32) {
        self.goals += count;
    }

    pub fn record_assists(&mut self, count: u32) {
        self.assists += count;
    }

    pub fn record_interceptions(&mut self, count: u32) {
        self.interceptions += count;
    }

    pub fn record_tackles(&mut self, count: u32) {
        self.tackles += count;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
