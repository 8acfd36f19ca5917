//! Game controller: roster, round counter and round lifecycle.

use im::Vector;
use log::{info, warn};
use rustc_hash::FxHashSet;

use crate::core::{GameError, Player, PlayerId, PlayerName, RuleConfig, Submission, Submissions};
use crate::rules::{RoundResolver, RuleSet};

use super::outcome::{Advance, Phase, RoundReport, RoundStart};

/// Seats are `u8` indices.
const MAX_PLAYERS: usize = 255;

/// Owns one game session.
///
/// Construct one per session; call `reset()` to start over with the same rules.
///
/// ## Example
///
/// ```
/// use beauty_contest::{Advance, GameController, Submissions};
///
/// let mut game = GameController::default();
/// game.add_player("alice").unwrap();
/// game.add_player("bob").unwrap();
/// game.start_round().unwrap();
///
/// let subs = Submissions::new()
///     .with_number("alice", 0).unwrap()
///     .with_number("bob", 100).unwrap();
/// let report = game.submit_round(&subs).unwrap();
/// assert_eq!(report.result.winners[0].as_str(), "BOB");
///
/// assert!(matches!(game.advance_round().unwrap(), Advance::NextRound(_)));
/// ```
#[derive(Debug)]
pub struct GameController {
    resolver: RoundResolver,

    /// Every seated player, in join order (index = `PlayerId`).
    players: Vector<Player>,

    /// Round number (starts at 1).
    round: u32,

    phase: Phase,

    /// Players alive when the current round started.
    active: Vec<PlayerId>,

    /// Joker picks made through `toggle_joker()` this round.
    joker_picks: FxHashSet<PlayerName>,

    /// Every scored round, oldest first.
    history: Vector<RoundReport>,
}

impl GameController {
    /// Create a controller with the given rules.
    #[must_use]
    pub fn new(config: RuleConfig) -> Self {
        Self::with_resolver(RoundResolver::new(config))
    }

    /// Create a controller around a custom resolver.
    #[must_use]
    pub fn with_resolver(resolver: RoundResolver) -> Self {
        Self {
            resolver,
            players: Vector::new(),
            round: 1,
            phase: Phase::Setup,
            active: Vec::new(),
            joker_picks: FxHashSet::default(),
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        self.resolver.config()
    }

    // === Setup ===

    /// Seat a new player.
    ///
    /// ## Errors
    ///
    /// `EmptyName`, `DuplicateName`, `TableFull`, or `WrongPhase` outside setup.
    pub fn add_player(&mut self, raw_name: &str) -> Result<&Player, GameError> {
        self.expect_phase("add_player", &[Phase::Setup])?;

        let name = PlayerName::parse(raw_name)?;
        if self.player(name.as_str()).is_some() {
            warn!("rejected duplicate player {name}");
            return Err(GameError::DuplicateName(name));
        }

        let capacity = self.config().table_size.unwrap_or(MAX_PLAYERS);
        if self.players.len() >= capacity {
            return Err(GameError::TableFull { capacity });
        }

        let id = PlayerId::new(self.players.len() as u8);
        info!("{name} joined as {id}");
        self.players.push_back(Player::new(id, name));
        Ok(&self.players[id.index()])
    }

    // === Round lifecycle ===

    /// Start the current round.
    ///
    /// From setup this starts the game. During a round it restarts the round,
    /// dropping any joker picks.
    ///
    /// ## Errors
    ///
    /// `NotEnoughPlayers` from setup, `WrongPhase` after resolution or game end.
    pub fn start_round(&mut self) -> Result<RoundStart, GameError> {
        self.expect_phase("start_round", &[Phase::Setup, Phase::InRound])?;

        if self.phase == Phase::Setup {
            let config = self.config();
            let actual = self.players.len();
            let required = config.table_size.unwrap_or(config.min_players);
            let ready = match config.table_size {
                Some(size) => actual == size,
                None => actual >= required,
            };
            if !ready {
                return Err(GameError::NotEnoughPlayers { required, actual });
            }
            info!("game started with {actual} players");
        }

        Ok(self.begin_round())
    }

    /// Toggle a joker pick for an active player.
    ///
    /// A picked player is submitted as `JOKER` whatever `submit_round()`
    /// receives for them. Returns the new pick state.
    ///
    /// ## Errors
    ///
    /// `UnknownPlayer`, `JokerAlreadyUsed`, or `WrongPhase` outside a round.
    pub fn toggle_joker(&mut self, raw_name: &str) -> Result<bool, GameError> {
        self.expect_phase("toggle_joker", &[Phase::InRound])?;

        let name = PlayerName::parse(raw_name)?;
        let player = self
            .active_players()
            .find(|p| p.name() == &name)
            .ok_or_else(|| GameError::UnknownPlayer(name.clone()))?;
        if player.has_used_joker() {
            return Err(GameError::JokerAlreadyUsed(name));
        }

        if self.joker_picks.remove(&name) {
            Ok(false)
        } else {
            self.joker_picks.insert(name);
            Ok(true)
        }
    }

    /// Resolve the round and apply it.
    ///
    /// Applies score deltas, spends jokers, then eliminates every active
    /// player at or below the floor, all against post-round scores.
    ///
    /// ## Errors
    ///
    /// Whatever the resolver rejects (`IncompleteSubmission`, `UnknownPlayer`,
    /// `JokerAlreadyUsed`), or `WrongPhase` outside a round. State is
    /// unchanged on error.
    pub fn submit_round(&mut self, submissions: &Submissions) -> Result<RoundReport, GameError> {
        self.expect_phase("submit_round", &[Phase::InRound])?;

        let mut effective = submissions.clone();
        for name in &self.joker_picks {
            effective.insert(name.clone(), Submission::Joker);
        }

        let active: Vec<Player> = self.active_players().cloned().collect();
        let result = self
            .resolver
            .resolve(&active, &effective, self.round)
            .inspect_err(|e| warn!("round {} rejected: {e}", self.round))?;

        for change in &result.deltas {
            if let Some(player) = self.player_mut(&change.player) {
                player.apply_delta(change.delta);
            }
        }
        for name in &result.jokers_used {
            if let Some(player) = self.player_mut(name) {
                player.mark_joker_used();
            }
        }

        let floor = self.config().elimination_floor;
        let mut eliminated = Vec::new();
        for id in &self.active {
            if let Some(player) = self.players.get_mut(id.index()) {
                if player.eliminate_at(floor) {
                    info!("{} eliminated with {} points", player.name(), player.score());
                    eliminated.push(player.name().clone());
                }
            }
        }

        let report = RoundReport { result, eliminated };
        self.history.push_back(report.clone());
        self.joker_picks.clear();
        self.phase = Phase::Resolved;
        Ok(report)
    }

    /// Move on after a scored round.
    ///
    /// Ends the game when one or no players are alive; otherwise starts the
    /// next round.
    ///
    /// ## Errors
    ///
    /// `WrongPhase` unless the current round has been scored.
    pub fn advance_round(&mut self) -> Result<Advance, GameError> {
        self.expect_phase("advance_round", &[Phase::Resolved])?;

        if self.alive_count() <= 1 {
            self.phase = Phase::GameOver;
            let winner = self.alive_players().next().map(|p| p.name().clone());
            match &winner {
                Some(name) => info!("game over after {} rounds: {name} wins", self.round),
                None => info!("game over after {} rounds: no survivors", self.round),
            }
            return Ok(Advance::GameOver { winner });
        }

        self.round += 1;
        Ok(Advance::NextRound(self.begin_round()))
    }

    /// Clear everything back to setup.
    pub fn reset(&mut self) {
        self.players.clear();
        self.round = 1;
        self.phase = Phase::Setup;
        self.active.clear();
        self.joker_picks.clear();
        self.history.clear();
    }

    fn begin_round(&mut self) -> RoundStart {
        self.active = self
            .players
            .iter()
            .filter(|p| p.is_alive())
            .map(Player::id)
            .collect();
        self.joker_picks.clear();
        self.phase = Phase::InRound;

        RoundStart {
            round: self.round,
            active_players: self.active_players().map(|p| p.name().clone()).collect(),
            rule_set: self.rule_set(),
        }
    }

    fn expect_phase(&self, operation: &'static str, allowed: &[Phase]) -> Result<(), GameError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn player_mut(&mut self, name: &PlayerName) -> Option<&mut Player> {
        let idx = self.players.iter().position(|p| p.name() == name)?;
        self.players.get_mut(idx)
    }

    // === Queries ===

    /// Snapshot of the roster. O(1); later mutations do not affect it.
    #[must_use]
    pub fn roster(&self) -> Vector<Player> {
        self.players.clone()
    }

    /// Every seated player in join order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Look up a player by (unnormalized) name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        let name = PlayerName::parse(name).ok()?;
        self.players.iter().find(|p| p.name() == &name)
    }

    #[must_use]
    pub fn player_by_id(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.alive_players().count()
    }

    /// Players taking part in the current round.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.active.iter().filter_map(|id| self.players.get(id.index()))
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a joker pick is pending for this player.
    #[must_use]
    pub fn joker_picked(&self, name: &str) -> bool {
        PlayerName::parse(name).is_ok_and(|n| self.joker_picks.contains(&n))
    }

    /// Rules in force for the current alive count and round.
    #[must_use]
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::for_round(self.alive_count(), self.round, self.config())
    }

    /// Every scored round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundReport> {
        &self.history
    }

    /// The survivor once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        if self.phase == Phase::GameOver {
            self.alive_players().next()
        } else {
            None
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}
