use crate::league::FixtureAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonSettings {
    pub fixtures: FixtureAlgorithm,
    /// Simulate the games of a week on the rayon pool. Results are still
    /// applied one game at a time in schedule order.
    pub parallel_outcomes: bool,
}

impl Default for SeasonSettings {
    fn default() -> Self {
        SeasonSettings {
            fixtures: FixtureAlgorithm::Circle,
            parallel_outcomes: true,
        }
    }
}

impl SeasonSettings {
    pub fn with_fixtures(mut self, fixtures: FixtureAlgorithm) -> Self {
        self.fixtures = fixtures;
        self
    }

    pub fn with_parallel_outcomes(mut self, parallel_outcomes: bool) -> Self {
        self.parallel_outcomes = parallel_outcomes;
        self
    }
}
