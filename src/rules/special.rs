//! Special rules, in priority order:
//!
//! 1. `Revelation`: 4 players from round 5, prime rounded mean matched exactly
//! 2. `FinalDuel`: 2 players splitting 0 and 100
//! 3. `DuplicateVote`: endgame, same number submitted twice
//! 4. `ExactMatch`: endgame, target hit exactly
//!
//! Each rule returns `None` to fall through to the next one.

use log::debug;
use smallvec::SmallVec;

use crate::core::RuleConfig;

use super::context::{is_prime, round_half_up, RoundContext};
use super::engine::{Rule, Verdict};
use super::result::RuleKind;

/// Prime-target revelation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Revelation;

impl Rule for Revelation {
    fn name(&self) -> &'static str {
        "revelation"
    }

    fn evaluate(&self, ctx: &RoundContext<'_>) -> Option<Verdict> {
        let config = ctx.config;
        if ctx.active_count() != config.revelation_players || ctx.round < config.revelation_min_round {
            return None;
        }
        let mean = ctx.mean()?;

        let target = round_half_up(mean);
        if !is_prime(target) {
            debug!("revelation: rounded mean {target} is not prime");
            return None;
        }

        let winners: SmallVec<[usize; 4]> = ctx
            .numeric()
            .iter()
            .filter(|&&(_, v)| u32::from(v) == target)
            .map(|&(idx, _)| idx)
            .collect();
        if winners.is_empty() {
            debug!("revelation: nobody submitted prime target {target}");
            return None;
        }

        let mut verdict = Verdict::new(RuleKind::Revelation { target }, ctx.active_count())
            .with_winners(winners)
            .with_average(Some(mean))
            .with_target(f64::from(target), None);
        verdict.penalize_losers(config.penalties.revelation);
        Some(verdict)
    }
}

/// Two-player 0/100 split: 100 wins, 0 pays.
#[derive(Clone, Copy, Debug, Default)]
pub struct FinalDuel;

impl Rule for FinalDuel {
    fn name(&self) -> &'static str {
        "final-duel"
    }

    fn evaluate(&self, ctx: &RoundContext<'_>) -> Option<Verdict> {
        if ctx.active_count() != RuleConfig::DUEL_PLAYERS {
            return None;
        }
        let [(a_idx, a), (b_idx, b)] = ctx.numeric() else {
            return None;
        };

        let (winner, loser) = match (*a, *b) {
            (100, 0) => (*a_idx, *b_idx),
            (0, 100) => (*b_idx, *a_idx),
            _ => return None,
        };

        let mut verdict = Verdict::new(RuleKind::FinalDuel, ctx.active_count()).with_winners([winner]);
        verdict.penalize(loser, ctx.config.penalties.final_duel);
        Some(verdict)
    }
}

/// Endgame duplicate-vote penalty: everyone pays, nobody wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct DuplicateVote;

impl Rule for DuplicateVote {
    fn name(&self) -> &'static str {
        "duplicate-vote"
    }

    fn evaluate(&self, ctx: &RoundContext<'_>) -> Option<Verdict> {
        if !ctx.is_endgame() || !ctx.has_numeric() || !ctx.has_duplicates() {
            return None;
        }

        let mut verdict = Verdict::new(RuleKind::DuplicateVote, ctx.active_count()).with_average(ctx.mean());
        verdict.penalize_all(ctx.config.penalties.duplicate);
        Some(verdict)
    }
}

/// Endgame exact match: hitting the target exactly costs everyone else.
///
/// Uses plain `==` against the target; a target like `36.000000000000004`
/// matches nobody.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactMatch;

impl Rule for ExactMatch {
    fn name(&self) -> &'static str {
        "exact-match"
    }

    fn evaluate(&self, ctx: &RoundContext<'_>) -> Option<Verdict> {
        if !ctx.is_endgame() || ctx.has_duplicates() {
            return None;
        }
        let mean = ctx.mean()?;

        let multiplier = ctx.config.endgame_multiplier;
        let target = mean * multiplier;
        let winners: SmallVec<[usize; 4]> = ctx
            .numeric()
            .iter()
            .filter(|&&(_, v)| f64::from(v) == target)
            .map(|&(idx, _)| idx)
            .collect();
        if winners.is_empty() {
            return None;
        }

        let mut verdict = Verdict::new(RuleKind::ExactMatch, ctx.active_count())
            .with_winners(winners)
            .with_average(Some(mean))
            .with_target(target, Some(multiplier));
        verdict.penalize_losers(ctx.config.penalties.exact_match);
        Some(verdict)
    }
}
