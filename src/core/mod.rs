//! Core types: players, submissions, rule configuration, errors.
//!
//! Everything here is plain data. Rule logic lives in `rules`, lifecycle in
//! `controller`.

pub mod config;
pub mod error;
pub mod player;
pub mod submission;

pub use config::{Penalties, RuleConfig};
pub use error::GameError;
pub use player::{Player, PlayerId, PlayerName};
pub use submission::{Submission, Submissions};
