//! Default rule: closest to the target wins.

use smallvec::SmallVec;

use super::context::RoundContext;
use super::engine::{Rule, Verdict};
use super::result::RuleKind;

/// Closest-to-target rule. Always produces a verdict.
///
/// Target = mean × multiplier (endgame or standard). Every numeric submitter
/// at the minimum distance wins. Everyone else who did not play a joker pays
/// the standard penalty.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosestToTarget;

impl ClosestToTarget {
    /// Decide the round. Infallible, unlike the special rules.
    #[must_use]
    pub fn decide(&self, ctx: &RoundContext<'_>) -> Verdict {
        let mut verdict = Verdict::new(RuleKind::ClosestToTarget, ctx.active_count());

        if let Some(mean) = ctx.mean() {
            let multiplier = ctx.config.multiplier_for(ctx.active_count());
            let target = mean * multiplier;

            let mut best = f64::INFINITY;
            let mut winners: SmallVec<[usize; 4]> = SmallVec::new();
            for &(idx, value) in ctx.numeric() {
                let distance = (f64::from(value) - target).abs();
                if distance < best {
                    best = distance;
                    winners.clear();
                    winners.push(idx);
                } else if distance == best {
                    winners.push(idx);
                }
            }

            verdict = verdict
                .with_winners(winners)
                .with_average(Some(mean))
                .with_target(target, Some(multiplier));
        }

        let penalty = ctx.config.penalties.standard;
        for (idx, (_, submission)) in ctx.entries.iter().enumerate() {
            if !submission.is_joker() && !verdict.winners.contains(&idx) {
                verdict.penalize(idx, penalty);
            }
        }
        verdict
    }
}

impl Rule for ClosestToTarget {
    fn name(&self) -> &'static str {
        "closest-to-target"
    }

    fn evaluate(&self, ctx: &RoundContext<'_>) -> Option<Verdict> {
        Some(self.decide(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerName, RuleConfig, Submission};

    fn decide(values: &[Option<u8>]) -> Verdict {
        let config = RuleConfig::default();
        let entries: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let s = v.map_or(Submission::Joker, Submission::Number);
                (PlayerName::parse(&format!("p{i}")).unwrap(), s)
            })
            .collect();
        let ctx = RoundContext::new(1, &entries, &config);
        ClosestToTarget.decide(&ctx)
    }

    #[test]
    fn test_standard_multiplier() {
        let verdict = decide(&[Some(30), Some(40), Some(50), Some(60), Some(70)]);

        assert_eq!(verdict.average, Some(50.0));
        assert_eq!(verdict.multiplier, Some(0.8));
        assert_eq!(verdict.target, Some(40.0));
        assert_eq!(verdict.winners.as_slice(), &[1]);
        assert_eq!(verdict.deltas, vec![-1, 0, -1, -1, -1]);
    }

    #[test]
    fn test_endgame_multiplier() {
        // mean 15, target 18: 20 is closest
        let verdict = decide(&[Some(10), Some(20), Some(15)]);
        assert_eq!(verdict.multiplier, Some(1.2));
        assert_eq!(verdict.winners.as_slice(), &[1]);
    }

    #[test]
    fn test_ties_share_the_win() {
        // mean 50, target 40: 30 and 50 are both 10 away
        let verdict = decide(&[Some(30), Some(50), Some(70), Some(50), Some(50)]);
        assert_eq!(verdict.target, Some(40.0));
        assert_eq!(verdict.winners.as_slice(), &[0, 1, 3, 4]);
        assert_eq!(verdict.deltas, vec![0, 0, -1, 0, 0]);
    }

    #[test]
    fn test_jokers_are_exempt() {
        let verdict = decide(&[Some(0), None, Some(100), Some(40), None]);
        assert_eq!(verdict.deltas[1], 0);
        assert_eq!(verdict.deltas[4], 0);
        assert_eq!(verdict.deltas.iter().filter(|&&d| d == -1).count(), 2);
    }

    #[test]
    fn test_all_jokers() {
        let verdict = decide(&[None, None, None, None]);
        assert!(verdict.winners.is_empty());
        assert_eq!(verdict.average, None);
        assert_eq!(verdict.target, None);
        assert_eq!(verdict.total_delta(), 0);
    }
}
