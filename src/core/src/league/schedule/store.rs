use crate::league::{Game, WeekOfGames};
use crate::{SeasonError, SeasonResult};
use log::debug;

/// The season's weeks in playing order.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    weeks: Vec<WeekOfGames>,
}

impl ScheduleStore {
    pub fn new(weeks: Vec<WeekOfGames>) -> Self {
        ScheduleStore { weeks }
    }

    pub fn weeks(&self) -> &[WeekOfGames] {
        &self.weeks
    }

    /// Week at a 1-indexed position in the current order.
    pub fn week(&self, position: usize) -> Option<&WeekOfGames> {
        position.checked_sub(1).and_then(|idx| self.weeks.get(idx))
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn total_games(&self) -> usize {
        self.weeks.iter().map(WeekOfGames::len).sum()
    }

    /// Moves the week at 1-indexed `original` so that it ends up at
    /// 1-indexed `destination`, or last when `destination` is `None`. The
    /// week is taken out first and `destination` counts positions of the
    /// remaining weeks. Out of range positions leave the store untouched.
    pub fn delay(&mut self, original: usize, destination: Option<usize>) -> SeasonResult<()> {
        let weeks = self.weeks.len();

        if original == 0 || original > weeks {
            return Err(SeasonError::OutOfRange {
                week: original,
                weeks,
            });
        }

        let insert_at = match destination {
            None => weeks - 1,
            Some(position) if (1..=weeks).contains(&position) => position - 1,
            Some(position) => {
                return Err(SeasonError::OutOfRange {
                    week: position,
                    weeks,
                });
            }
        };

        let week = self.weeks.remove(original - 1);

        debug!(
            "week {} moved from position {} to position {}",
            week.week(),
            original,
            insert_at + 1
        );

        self.weeks.insert(insert_at, week);

        Ok(())
    }

    /// A fresh pass over every game, week by week in the current order.
    pub fn games(&self) -> Games<'_> {
        Games {
            weeks: &self.weeks,
            week: 0,
            game: 0,
        }
    }
}

/// Forward-only cursor over the games of a schedule.
#[derive(Debug, Clone)]
pub struct Games<'s> {
    weeks: &'s [WeekOfGames],
    week: usize,
    game: usize,
}

impl<'s> Iterator for Games<'s> {
    type Item = &'s Game;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(week) = self.weeks.get(self.week) {
            if let Some(game) = week.games().get(self.game) {
                self.game += 1;
                return Some(game);
            }

            self.week += 1;
            self.game = 0;
        }

        None
    }
}
