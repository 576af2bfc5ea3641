use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TeamId(u32);

impl TeamId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Display for TeamId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out team ids for one roster, starting at 1. Every season setup
/// owns its own sequence, so independent seasons never share numbering.
#[derive(Debug)]
pub struct TeamIdSequence {
    next: u32,
}

impl Default for TeamIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamIdSequence {
    pub fn new() -> Self {
        TeamIdSequence { next: 1 }
    }

    pub fn next_id(&mut self) -> TeamId {
        let id = TeamId(self.next);
        self.next += 1;
        id
    }
}
