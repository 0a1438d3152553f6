pub mod evaluator;
pub mod types;

pub use evaluator::{compare, percent_spread};
pub use types::{Leg, SpreadConfig, SpreadReport};
