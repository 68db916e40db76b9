//! Donut records and the preparation stage state machine.
//!
//! Every donut moves through `Placed -> Acknowledged -> Cooking -> Ready`,
//! one step at a time, and never backwards.

mod types;

pub use types::{Donut, DonutError, DonutId, Stage, StageParseError};
