//! # beauty-contest
//!
//! Rule engine for a multiplayer number-guessing elimination game.
//!
//! Every round each surviving player secretly submits a number in `0..=100`
//! or spends their once-per-game joker. The mean of the numbers times a
//! multiplier is the target; the closest player wins and everyone else
//! loses a point. A handful of special rules take over in particular
//! situations. Players at -10 or below are eliminated; the last one
//! standing wins.
//!
//! ## Design Principles
//!
//! 1. **Pure Resolution**: `RoundResolver` is a function of the active
//!    players, their submissions and the round number. It never mutates.
//!
//! 2. **Ordered Rule Chain**: Special rules are `Rule` trait objects
//!    evaluated in fixed priority; the first verdict wins and
//!    `ClosestToTarget` is the fallback.
//!
//! 3. **Rejections Change Nothing**: Every fallible operation returns
//!    `GameError` and leaves state exactly as it was.
//!
//! ## Modules
//!
//! - `core`: Players, submissions, rule configuration, errors
//! - `rules`: Round context, rule chain, resolver, results
//! - `controller`: Roster, round lifecycle, eliminations, history
//! - `sim`: Seeded self-play with bot strategies

pub mod controller;
pub mod core;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    GameError, Penalties, Player, PlayerId, PlayerName, RuleConfig, Submission, Submissions,
};

pub use crate::rules::{
    ClosestToTarget, DuplicateVote, ExactMatch, FinalDuel, Revelation, RoundContext, RoundResolver,
    RoundResult, Rule, RuleKind, RuleSet, ScoreDelta, Verdict,
};

pub use crate::controller::{Advance, GameController, Phase, RoundReport, RoundStart};

pub use crate::sim::{
    GameRng, PlayerView, RandomStrategy, ScriptedStrategy, Simulation, SimulationConfig,
    SimulationReport, SimulationSummary, Strategy, TargetChaser,
};
