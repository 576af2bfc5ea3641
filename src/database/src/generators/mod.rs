mod generator;
mod names;
mod player;
mod team;

pub use generator::*;
pub use player::*;
pub use team::*;
