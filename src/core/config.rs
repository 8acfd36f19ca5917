//! Rule configuration.
//!
//! Every tunable constant the resolver and controller consult lives here:
//! - Multipliers applied to the mean of numeric submissions
//! - Player-count thresholds that switch special rules on
//! - Per-rule penalties
//! - Elimination floor and table size
//!
//! `RuleConfig::default()` is the standard game.

use serde::{Deserialize, Serialize};

/// Point losses applied by each rule.
///
/// Stored as positive magnitudes; the resolver negates them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalties {
    /// Closest-to-target rule: every non-winner, non-joker player.
    pub standard: i32,
    /// Endgame exact match: everyone except the exact matchers.
    pub exact_match: i32,
    /// Revelation: everyone except the prime matchers.
    pub revelation: i32,
    /// Endgame duplicate vote: every active player.
    pub duplicate: i32,
    /// Final duel: the player who submitted 0.
    pub final_duel: i32,
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            standard: 1,
            exact_match: 2,
            revelation: 2,
            duplicate: 1,
            final_duel: 1,
        }
    }
}

/// Complete rule configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Multiplier while more than `endgame_threshold` players are alive.
    pub standard_multiplier: f64,

    /// Multiplier once `endgame_threshold` or fewer players are alive.
    pub endgame_multiplier: f64,

    /// Alive-player count at or below which endgame rules apply.
    pub endgame_threshold: usize,

    /// Exact alive-player count for the revelation rule.
    pub revelation_players: usize,

    /// First round in which the revelation rule can fire.
    pub revelation_min_round: u32,

    /// A player whose score is at or below this value is eliminated.
    pub elimination_floor: i32,

    /// Minimum players needed to start a game.
    pub min_players: usize,

    /// Expected number of players. `None` for any count above `min_players`.
    pub table_size: Option<usize>,

    /// Point losses per rule.
    pub penalties: Penalties,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            standard_multiplier: 0.8,
            endgame_multiplier: 1.2,
            endgame_threshold: 3,
            revelation_players: 4,
            revelation_min_round: 5,
            elimination_floor: -10,
            min_players: 2,
            table_size: None,
            penalties: Penalties::default(),
        }
    }
}

impl RuleConfig {
    /// Alive-player count for the final duel. The duel pairs two entries, so
    /// this is fixed rather than configurable.
    pub const DUEL_PLAYERS: usize = 2;

    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require exactly `size` players before the game can start.
    #[must_use]
    pub fn with_table_size(mut self, size: usize) -> Self {
        assert!(size >= self.min_players, "Table size below minimum player count");
        assert!(size <= 255, "At most 255 players supported");
        self.table_size = Some(size);
        self
    }

    /// Set the elimination floor.
    #[must_use]
    pub fn with_elimination_floor(mut self, floor: i32) -> Self {
        assert!(floor < 0, "Elimination floor must be negative");
        self.elimination_floor = floor;
        self
    }

    /// Set the standard and endgame multipliers.
    #[must_use]
    pub fn with_multipliers(mut self, standard: f64, endgame: f64) -> Self {
        assert!(standard.is_finite() && standard > 0.0, "Multiplier must be positive");
        assert!(endgame.is_finite() && endgame > 0.0, "Multiplier must be positive");
        self.standard_multiplier = standard;
        self.endgame_multiplier = endgame;
        self
    }

    /// Replace the penalty table.
    #[must_use]
    pub fn with_penalties(mut self, penalties: Penalties) -> Self {
        self.penalties = penalties;
        self
    }

    /// Whether endgame rules apply for this many active players.
    #[must_use]
    pub fn is_endgame(&self, active_players: usize) -> bool {
        active_players <= self.endgame_threshold
    }

    /// Multiplier the closest-to-target rule uses for this many players.
    #[must_use]
    pub fn multiplier_for(&self, active_players: usize) -> f64 {
        if self.is_endgame(active_players) {
            self.endgame_multiplier
        } else {
            self.standard_multiplier
        }
    }
}
