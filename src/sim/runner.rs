//! Self-play driver: plays whole games with bot strategies.

use im::Vector;
use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::controller::{Advance, GameController, RoundReport};
use crate::core::{GameError, PlayerName, RuleConfig, Submissions};

use super::rng::GameRng;
use super::strategy::{PlayerView, Strategy};

/// Configuration for simulated games.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Rules for every simulated game.
    pub rules: RuleConfig,

    /// Round cap; a game still running after this many rounds is abandoned.
    pub max_rounds: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rules: RuleConfig::default(),
            max_rounds: 500,
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max: u32) -> Self {
        self.max_rounds = max;
        self
    }
}

/// Outcome of one simulated game.
#[derive(Clone, Debug)]
pub struct SimulationReport {
    /// Sole survivor, if the game finished with one.
    pub winner: Option<PlayerName>,
    /// Whether the game reached game over before the round cap.
    pub finished: bool,
    pub rounds_played: u32,
    /// Players in the order they were eliminated.
    pub elimination_order: Vec<PlayerName>,
    /// Final scores in seat order.
    pub final_scores: Vec<(PlayerName, i32)>,
    pub history: Vector<RoundReport>,
}

/// Aggregate over many simulated games.
#[derive(Clone, Debug, Default)]
pub struct SimulationSummary {
    pub games: usize,
    pub wins: FxHashMap<PlayerName, usize>,
    /// Games where everybody left fell in the same round.
    pub no_survivor: usize,
    /// Games abandoned at the round cap.
    pub unfinished: usize,
    pub total_rounds: u64,
}

impl SimulationSummary {
    #[must_use]
    pub fn average_rounds(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_rounds as f64 / self.games as f64
        }
    }

    #[must_use]
    pub fn wins_for(&self, name: &PlayerName) -> usize {
        self.wins.get(name).copied().unwrap_or(0)
    }

    fn record(&mut self, report: &SimulationReport) {
        self.games += 1;
        self.total_rounds += u64::from(report.rounds_played);
        match (&report.winner, report.finished) {
            (_, false) => self.unfinished += 1,
            (Some(name), true) => *self.wins.entry(name.clone()).or_insert(0) += 1,
            (None, true) => self.no_survivor += 1,
        }
    }
}

/// A table of bots.
#[derive(Debug, Default)]
pub struct Simulation {
    config: SimulationConfig,
    seats: Vec<(String, Box<dyn Strategy>)>,
}

impl Simulation {
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            seats: Vec::new(),
        }
    }

    /// Seat a bot.
    #[must_use]
    pub fn with_seat(mut self, name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        self.seats.push((name.into(), Box::new(strategy)));
        self
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Play one game.
    ///
    /// ## Errors
    ///
    /// Setup errors from the controller (duplicate names, too few seats) and
    /// submissions a strategy got wrong (a second joker).
    pub fn run(&self, rng: &mut GameRng) -> Result<SimulationReport, GameError> {
        let mut game = GameController::new(self.config.rules.clone());
        for (name, _) in &self.seats {
            game.add_player(name)?;
        }
        game.start_round()?;

        let mut elimination_order = Vec::new();
        let mut last_report: Option<RoundReport> = None;
        let mut finished = false;

        loop {
            let submissions = self.collect(&game, last_report.as_ref(), rng);
            let report = game.submit_round(&submissions)?;
            debug!("{}", report.result);
            elimination_order.extend(report.eliminated.iter().cloned());
            last_report = Some(report);

            if game.round() >= self.config.max_rounds && game.alive_count() > 1 {
                info!("simulation abandoned after {} rounds", game.round());
                break;
            }
            if let Advance::GameOver { .. } = game.advance_round()? {
                finished = true;
                break;
            }
        }

        Ok(SimulationReport {
            winner: game.winner().map(|p| p.name().clone()),
            finished,
            rounds_played: game.round(),
            elimination_order,
            final_scores: game.players().map(|p| (p.name().clone(), p.score())).collect(),
            history: game.history().clone(),
        })
    }

    /// Play `games` games, each on its own fork of `seed`.
    pub fn run_many(&self, seed: u64, games: usize) -> Result<SimulationSummary, GameError> {
        let mut root = GameRng::new(seed);
        let mut summary = SimulationSummary::default();
        for _ in 0..games {
            let mut rng = root.fork();
            let report = self.run(&mut rng)?;
            summary.record(&report);
        }
        Ok(summary)
    }

    fn collect(
        &self,
        game: &GameController,
        last: Option<&RoundReport>,
        rng: &mut GameRng,
    ) -> Submissions {
        let rule_set = game.rule_set();
        let alive_count = game.alive_count();
        let mut submissions = Submissions::new();

        for (seat, strategy) in &self.seats {
            let Some(player) = game.player(seat) else {
                continue;
            };
            if !player.is_alive() {
                continue;
            }
            let view = PlayerView {
                name: player.name(),
                round: game.round(),
                score: player.score(),
                alive_count,
                rule_set,
                joker_available: !player.has_used_joker(),
                last_result: last.map(|r| &r.result),
            };
            submissions.insert(player.name().clone(), strategy.choose(&view, rng));
        }
        submissions
    }
}
