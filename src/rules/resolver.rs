//! Round resolution: validate submissions, run the rule chain, build the result.

use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::core::{GameError, Player, PlayerName, RuleConfig, Submission, Submissions};

use super::context::RoundContext;
use super::engine::{Rule, Verdict};
use super::result::{RoundResult, ScoreDelta};
use super::special::{DuplicateVote, ExactMatch, FinalDuel, Revelation};
use super::standard::ClosestToTarget;

/// Resolves a round into a `RoundResult`.
///
/// Pure: reads the active players and submissions, mutates nothing. The
/// controller applies the result.
#[derive(Debug)]
pub struct RoundResolver {
    config: RuleConfig,
    rules: Vec<Box<dyn Rule>>,
    fallback: ClosestToTarget,
}

impl RoundResolver {
    /// Resolver with the standard rule chain.
    #[must_use]
    pub fn new(config: RuleConfig) -> Self {
        Self::with_rules(config, Self::standard_rules())
    }

    /// Resolver with a custom chain of special rules.
    ///
    /// `ClosestToTarget` always runs last when no rule in `rules` fires.
    #[must_use]
    pub fn with_rules(config: RuleConfig, rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            config,
            rules,
            fallback: ClosestToTarget,
        }
    }

    /// The special rules in priority order.
    #[must_use]
    pub fn standard_rules() -> Vec<Box<dyn Rule>> {
        vec![
            Box::new(Revelation),
            Box::new(FinalDuel),
            Box::new(DuplicateVote),
            Box::new(ExactMatch),
        ]
    }

    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Names of the rules in evaluation order, fallback included.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .iter()
            .map(|r| r.name())
            .chain(std::iter::once(self.fallback.name()))
    }

    /// Resolve one round.
    ///
    /// `active` lists the players alive at round start, in seat order.
    ///
    /// ## Errors
    ///
    /// - `UnknownPlayer` if a submission names a non-active player
    /// - `IncompleteSubmission` if an active player has no entry
    /// - `InvalidSubmissionValue` if a number lies outside `0..=100`
    /// - `JokerAlreadyUsed` if a player who spent their joker submits one
    ///
    /// On error nothing is scored.
    pub fn resolve(
        &self,
        active: &[Player],
        submissions: &Submissions,
        round: u32,
    ) -> Result<RoundResult, GameError> {
        let entries = Self::collect_entries(active, submissions)?;
        let ctx = RoundContext::new(round, &entries, &self.config);
        let verdict = self.run_chain(&ctx);
        Ok(Self::build_result(&ctx, verdict))
    }

    /// Validate and order submissions by seat.
    fn collect_entries(
        active: &[Player],
        submissions: &Submissions,
    ) -> Result<Vec<(PlayerName, Submission)>, GameError> {
        let active_names: FxHashSet<&PlayerName> = active.iter().map(Player::name).collect();
        if let Some((stranger, _)) = submissions.iter().find(|(name, _)| !active_names.contains(name)) {
            return Err(GameError::UnknownPlayer(stranger.clone()));
        }

        active
            .iter()
            .map(|player| {
                let submission = submissions
                    .get(player.name())
                    .ok_or_else(|| GameError::IncompleteSubmission(player.name().clone()))?
                    .validate()?;
                if submission.is_joker() && player.has_used_joker() {
                    return Err(GameError::JokerAlreadyUsed(player.name().clone()));
                }
                Ok((player.name().clone(), submission))
            })
            .collect()
    }

    fn run_chain(&self, ctx: &RoundContext<'_>) -> Verdict {
        for rule in &self.rules {
            if let Some(verdict) = rule.evaluate(ctx) {
                info!("round {}: {} fired", ctx.round, rule.name());
                return verdict;
            }
            debug!("round {}: {} did not apply", ctx.round, rule.name());
        }
        debug!("round {}: falling back to {}", ctx.round, self.fallback.name());
        self.fallback.decide(ctx)
    }

    fn build_result(ctx: &RoundContext<'_>, verdict: Verdict) -> RoundResult {
        let name_of = |idx: usize| ctx.entries[idx].0.clone();

        let deltas = verdict
            .deltas
            .iter()
            .enumerate()
            .filter(|&(_, &delta)| delta != 0)
            .map(|(idx, &delta)| ScoreDelta {
                player: name_of(idx),
                delta,
            })
            .collect();

        RoundResult {
            round: ctx.round,
            rule: verdict.rule,
            submissions: ctx.entries.to_vec(),
            winners: verdict.winners.iter().map(|&idx| name_of(idx)).collect(),
            average: verdict.average,
            target: verdict.target,
            multiplier: verdict.multiplier,
            deltas,
            jokers_used: ctx.jokers().map(name_of).collect(),
            message: verdict.rule.message(),
        }
    }
}

impl Default for RoundResolver {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::rules::RuleKind;

    fn players(names: &[&str]) -> Vec<Player> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Player::new(PlayerId::new(i as u8), PlayerName::parse(n).unwrap()))
            .collect()
    }

    fn name(s: &str) -> PlayerName {
        PlayerName::parse(s).unwrap()
    }

    #[test]
    fn test_rule_order() {
        let resolver = RoundResolver::default();
        let names: Vec<_> = resolver.rule_names().collect();
        assert_eq!(
            names,
            vec!["revelation", "final-duel", "duplicate-vote", "exact-match", "closest-to-target"]
        );
    }

    #[test]
    fn test_missing_entry_is_incomplete() {
        let resolver = RoundResolver::default();
        let active = players(&["a", "b", "c"]);
        let subs = Submissions::new()
            .with_number("a", 10)
            .unwrap()
            .with_joker("c")
            .unwrap();

        assert_eq!(
            resolver.resolve(&active, &subs, 1),
            Err(GameError::IncompleteSubmission(name("b")))
        );
    }

    #[test]
    fn test_stranger_is_rejected() {
        let resolver = RoundResolver::default();
        let active = players(&["a", "b"]);
        let subs = Submissions::new()
            .with_number("a", 10)
            .unwrap()
            .with_number("b", 20)
            .unwrap()
            .with_number("zed", 30)
            .unwrap();

        assert_eq!(
            resolver.resolve(&active, &subs, 1),
            Err(GameError::UnknownPlayer(name("zed")))
        );
    }

    #[test]
    fn test_out_of_range_number_is_rejected() {
        let resolver = RoundResolver::default();
        let active = players(&["a", "b", "c", "d", "e"]);
        let mut subs = Submissions::new();
        subs.insert(name("a"), Submission::Number(250));
        for n in ["b", "c", "d", "e"] {
            subs.insert(name(n), Submission::Number(50));
        }

        assert_eq!(
            resolver.resolve(&active, &subs, 1),
            Err(GameError::InvalidSubmissionValue {
                value: "250".to_string(),
                min: Submission::MIN,
                max: Submission::MAX
            })
        );
    }

    #[test]
    fn test_second_joker_is_rejected() {
        let resolver = RoundResolver::default();
        let mut active = players(&["a", "b"]);
        active[1].mark_joker_used();
        let subs = Submissions::new()
            .with_number("a", 10)
            .unwrap()
            .with_joker("b")
            .unwrap();

        assert_eq!(
            resolver.resolve(&active, &subs, 1),
            Err(GameError::JokerAlreadyUsed(name("b")))
        );
    }

    #[test]
    fn test_result_in_seat_order() {
        let resolver = RoundResolver::default();
        let active = players(&["a", "b", "c", "d", "e"]);
        let subs = Submissions::new()
            .with_number("e", 70)
            .unwrap()
            .with_number("d", 60)
            .unwrap()
            .with_number("c", 50)
            .unwrap()
            .with_number("b", 40)
            .unwrap()
            .with_joker("a")
            .unwrap();

        let result = resolver.resolve(&active, &subs, 1).unwrap();
        let order: Vec<&str> = result.submissions.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(result.jokers_used, vec![name("a")]);
        assert_eq!(result.rule, RuleKind::ClosestToTarget);
        // mean 55, target 44: B (40) is 4 away
        assert_eq!(result.winners.as_slice(), &[name("b")]);
        assert_eq!(result.delta_for(&name("a")), 0);
        assert_eq!(result.total_delta(), -3);
    }

    #[test]
    fn test_custom_chain_without_specials() {
        let resolver = RoundResolver::with_rules(RuleConfig::default(), Vec::new());
        let active = players(&["a", "b"]);
        let subs = Submissions::new()
            .with_number("a", 0)
            .unwrap()
            .with_number("b", 100)
            .unwrap();

        // Without FinalDuel: mean 50, target 60, 100 is 40 away, 0 is 60 away
        let result = resolver.resolve(&active, &subs, 1).unwrap();
        assert_eq!(result.rule, RuleKind::ClosestToTarget);
        assert_eq!(result.winners.as_slice(), &[name("b")]);
        assert_eq!(result.delta_for(&name("a")), -1);
    }

    #[test]
    fn test_resolve_does_not_touch_players() {
        let resolver = RoundResolver::default();
        let active = players(&["a", "b", "c"]);
        let before = active.clone();
        let subs = Submissions::new()
            .with_number("a", 20)
            .unwrap()
            .with_number("b", 20)
            .unwrap()
            .with_joker("c")
            .unwrap();

        let result = resolver.resolve(&active, &subs, 3).unwrap();
        assert_eq!(result.rule, RuleKind::DuplicateVote);
        assert_eq!(active, before);
    }
}
