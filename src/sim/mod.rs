//! Simulated games.
//!
//! Seat bots implementing `Strategy` at a `Simulation` and play whole games
//! through a real `GameController`. Runs are deterministic for a given seed.

pub mod rng;
pub mod runner;
pub mod strategy;

pub use rng::GameRng;
pub use runner::{Simulation, SimulationConfig, SimulationReport, SimulationSummary};
pub use strategy::{PlayerView, RandomStrategy, ScriptedStrategy, Strategy, TargetChaser};
