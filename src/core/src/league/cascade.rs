use crate::r#match::{GameResult, MatchResult};
use crate::{Player, Team};
use log::{debug, warn};
use std::collections::HashMap;

/// How many times each name appears in one event list.
#[derive(Debug, Default)]
struct EventCounts<'r> {
    counts: HashMap<&'r str, u32>,
}

impl<'r> EventCounts<'r> {
    fn from_names(names: &'r [String]) -> Self {
        let mut counts = HashMap::with_capacity(names.len());

        for name in names {
            *counts.entry(name.as_str()).or_insert(0) += 1;
        }

        EventCounts { counts }
    }

    fn of(&self, player: &Player) -> u32 {
        self.counts.get(player.name()).copied().unwrap_or(0)
    }

    fn unmatched<'t>(&'t self, teams: [&'t Team; 2]) -> impl Iterator<Item = &'r str> + 't {
        self.counts
            .keys()
            .copied()
            .filter(move |name| teams.iter().all(|team| team.players.find(name).is_none()))
    }
}

/// Per-player event tallies of one reported game.
struct PlayerEvents<'r> {
    goals: EventCounts<'r>,
    assists: EventCounts<'r>,
    interceptions: EventCounts<'r>,
    tackles: EventCounts<'r>,
}

impl<'r> PlayerEvents<'r> {
    fn new(result: &'r MatchResult) -> Self {
        PlayerEvents {
            goals: EventCounts::from_names(&result.goal_scorers),
            assists: EventCounts::from_names(&result.goal_assists),
            interceptions: EventCounts::from_names(&result.interceptions),
            tackles: EventCounts::from_names(&result.tackles),
        }
    }

    fn lists(&self) -> [(&'static str, &EventCounts<'r>); 4] {
        [
            ("goal", &self.goals),
            ("assist", &self.assists),
            ("interception", &self.interceptions),
            ("tackle", &self.tackles),
        ]
    }
}

pub struct StatUpdater;

impl StatUpdater {
    /// Applies one reported game to both teams and every rostered player.
    ///
    /// Player attribution is by name. Names are unique across the season,
    /// which `Season` checks on construction; events naming nobody on either
    /// roster are ignored.
    pub fn apply(result: &MatchResult, home: &mut Team, away: &mut Team) -> GameResult {
        let home_result = result.home_result();
        let away_result = home_result.opposite();

        let events = PlayerEvents::new(result);

        for (kind, counts) in events.lists() {
            for name in counts.unmatched([&*home, &*away]) {
                warn!(
                    "{} credited to `{}` who plays for neither {} nor {}",
                    kind,
                    name,
                    home.name(),
                    away.name()
                );
            }
        }

        Self::apply_team(home, home_result, result.home_goals, result.away_goals, &events);
        Self::apply_team(away, away_result, result.away_goals, result.home_goals, &events);

        debug!(
            "{} {} - {} {}",
            home.name(),
            result.home_goals,
            result.away_goals,
            away.name()
        );

        home_result
    }

    fn apply_team(
        team: &mut Team,
        result: GameResult,
        goals_for: u32,
        goals_against: u32,
        events: &PlayerEvents<'_>,
    ) {
        team.statistics.record_result(result);

        team.statistics.record_goals_for(goals_for);
        team.statistics.record_goals_against(goals_against);

        for player in team.players.players_mut() {
            let goals = events.goals.of(player);
            let assists = events.assists.of(player);
            let interceptions = events.interceptions.of(player);
            let tackles = events.tackles.of(player);

            let statistics = &mut player.statistics;
            statistics.record_game(result);
            statistics.record_goals(goals);
            statistics.record_assists(assists);
            statistics.record_interceptions(interceptions);
            statistics.record_tackles(tackles);
        }
    }
}
