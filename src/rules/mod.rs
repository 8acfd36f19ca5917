//! Round resolution.
//!
//! `RoundResolver` runs an ordered chain of `Rule`s against a
//! `RoundContext`. The first rule that produces a `Verdict` decides the
//! round; `ClosestToTarget` is the terminal fallback.
//!
//! Priority order:
//! 1. `Revelation`
//! 2. `FinalDuel`
//! 3. `DuplicateVote`
//! 4. `ExactMatch`
//! 5. `ClosestToTarget`

pub mod context;
pub mod engine;
pub mod resolver;
pub mod result;
pub mod rule_set;
pub mod special;
pub mod standard;

pub use context::{is_prime, round_half_up, RoundContext};
pub use engine::{Rule, Verdict};
pub use resolver::RoundResolver;
pub use result::{RoundResult, RuleKind, ScoreDelta};
pub use rule_set::RuleSet;
pub use special::{DuplicateVote, ExactMatch, FinalDuel, Revelation};
pub use standard::ClosestToTarget;
