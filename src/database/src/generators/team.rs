use crate::generators::PlayerGenerator;
use season_core::{PlayerPosition, SeasonResult, Team, TeamIdSequence};

const GOALKEEPERS: usize = 2;

/// Outfield positions filled in turn after the goalkeepers.
const OUTFIELD_ROTATION: [PlayerPosition; 7] = [
    PlayerPosition::Defender,
    PlayerPosition::Midfielder,
    PlayerPosition::Striker,
    PlayerPosition::Defender,
    PlayerPosition::Midfielder,
    PlayerPosition::Defender,
    PlayerPosition::Midfielder,
];

pub struct TeamGenerator;

impl TeamGenerator {
    pub fn generate(
        ids: &mut TeamIdSequence,
        name: impl Into<String>,
        squad_size: usize,
        players: &mut PlayerGenerator,
    ) -> SeasonResult<Team> {
        let roster = (0..squad_size)
            .map(|idx| {
                let position = if idx < GOALKEEPERS {
                    PlayerPosition::Goalkeeper
                } else {
                    OUTFIELD_ROTATION[(idx - GOALKEEPERS) % OUTFIELD_ROTATION.len()]
                };

                players.generate(position)
            })
            .collect::<SeasonResult<Vec<_>>>()?;

        Team::builder()
            .id(ids.next_id())
            .name(name)
            .players(roster)
            .build()
    }
}
