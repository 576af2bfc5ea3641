mod generators;

pub use generators::*;
