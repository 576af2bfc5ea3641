mod game;
mod generator;
mod store;

pub use game::*;
pub use generator::*;
pub use store::*;
