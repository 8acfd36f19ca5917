//! Game controller: the stateful side of the engine.
//!
//! `GameController` owns the roster and round counter, calls the
//! `RoundResolver`, applies deltas and eliminations, and reports back to
//! the presentation layer through `RoundStart`, `RoundReport` and `Advance`.

mod game;
mod outcome;

pub use game::GameController;
pub use outcome::{Advance, Phase, RoundReport, RoundStart};
