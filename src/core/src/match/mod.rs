pub mod engine;
mod outcome;
mod result;
mod simulator;

pub use engine::*;
pub use outcome::*;
pub use result::*;
pub use simulator::*;
