use crate::club::{Player, PlayerAttribute, PlayerPosition};
use crate::{SeasonError, SeasonResult};

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    name: Option<String>,
    position: Option<PlayerPosition>,
    age: Option<u8>,
    weight: Option<u32>,
    height: Option<u32>,
    star_skill: Option<u32>,
    weak_foot_ability: Option<u32>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: PlayerPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn star_skill(mut self, star_skill: u32) -> Self {
        self.star_skill = Some(star_skill);
        self
    }

    pub fn weak_foot_ability(mut self, weak_foot_ability: u32) -> Self {
        self.weak_foot_ability = Some(weak_foot_ability);
        self
    }

    pub fn build(self) -> SeasonResult<Player> {
        let mut player = Player::new(
            self.name.ok_or(SeasonError::Incomplete("name"))?,
            self.position.ok_or(SeasonError::Incomplete("position"))?,
            self.age.ok_or(SeasonError::Incomplete("age"))?,
        )?;

        let attributes = [
            (PlayerAttribute::Weight, self.weight),
            (PlayerAttribute::Height, self.height),
            (PlayerAttribute::StarSkill, self.star_skill),
            (PlayerAttribute::WeakFootAbility, self.weak_foot_ability),
        ];

        for (attribute, value) in attributes {
            if let Some(value) = value {
                player.statistics.set_attribute(attribute, value);
            }
        }

        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerStat;

    #[test]
    fn test_builder_sets_attributes() {
        let player = Player::builder()
            .name("Ines Duarte")
            .position(PlayerPosition::Midfielder)
            .age(27)
            .height(171)
            .star_skill(4)
            .build()
            .unwrap();

        assert_eq!(player.statistics.get(PlayerStat::Height), 171);
        assert_eq!(player.statistics.get(PlayerStat::StarSkill), 4);
        assert_eq!(player.statistics.get(PlayerStat::Weight), 0);
    }

    #[test]
    fn test_builder_requires_position() {
        let result = Player::builder().name("Nobody").age(30).build();

        assert_eq!(result.unwrap_err(), SeasonError::Incomplete("position"));
    }
}
