mod builder;
mod sequence;
mod statistics;
mod team;

pub use builder::TeamBuilder;
pub use sequence::*;
pub use statistics::*;
pub use team::*;
