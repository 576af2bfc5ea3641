mod cascade;
mod schedule;
mod season;
mod settings;
mod table;

pub use cascade::*;
pub use schedule::*;
pub use season::*;
pub use settings::*;
pub use table::*;
