use crate::Team;
use crate::league::LeaderboardRow;
use std::cmp::Ordering;

type CmpFunc = fn(&Team, &Team) -> Ordering;

fn compare_points(a: &Team, b: &Team) -> Ordering {
    b.statistics.points().cmp(&a.statistics.points())
}

fn compare_goal_difference(a: &Team, b: &Team) -> Ordering {
    b.statistics.goal_difference().cmp(&a.statistics.goal_difference())
}

fn compare_goals_for(a: &Team, b: &Team) -> Ordering {
    b.statistics.goals_for().cmp(&a.statistics.goals_for())
}

fn compare_name(a: &Team, b: &Team) -> Ordering {
    a.name().cmp(b.name())
}

/// Ranking criteria, highest priority first.
const CRITERIA: [CmpFunc; 4] = [
    compare_points,
    compare_goal_difference,
    compare_goals_for,
    compare_name,
];

/// Standing order: points, goal difference and goals scored descending,
/// then name ascending. Unique names make it total.
pub fn compare_standings(a: &Team, b: &Team) -> Ordering {
    CRITERIA
        .iter()
        .map(|compare| compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Season table. Entries are positions in the season's team list. Team
/// statistics change underneath the table, so the stored order is only
/// correct right after `sort` (which `rankings` always runs).
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<usize>,
}

impl Leaderboard {
    pub(crate) fn new(teams: &[Team]) -> Self {
        let mut leaderboard = Leaderboard {
            entries: Vec::with_capacity(teams.len()),
        };

        for idx in 0..teams.len() {
            leaderboard.insert(idx, teams);
        }

        leaderboard
    }

    /// Places `teams[idx]` after every entry that does not rank below it.
    pub(crate) fn insert(&mut self, idx: usize, teams: &[Team]) {
        let team = &teams[idx];
        let position = self
            .entries
            .partition_point(|&entry| compare_standings(&teams[entry], team) != Ordering::Greater);

        self.entries.insert(position, idx);
    }

    /// Order as of the last sort or insertion. May be stale.
    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    pub(crate) fn sort(&mut self, teams: &[Team]) {
        self.entries
            .sort_by(|&a, &b| compare_standings(&teams[a], &teams[b]));
    }

    pub(crate) fn rankings(&mut self, teams: &[Team]) -> Vec<LeaderboardRow> {
        self.sort(teams);

        self.entries
            .iter()
            .map(|&idx| LeaderboardRow::from(&teams[idx]))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
