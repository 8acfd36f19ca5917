//! Bot strategies for simulated games.

use crate::core::{PlayerName, Submission};
use crate::rules::{RoundResult, RuleSet};

use super::rng::GameRng;

/// What a bot can see when choosing its submission.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a> {
    pub name: &'a PlayerName,
    pub round: u32,
    pub score: i32,
    pub alive_count: usize,
    pub rule_set: RuleSet,
    /// False once the joker has been spent.
    pub joker_available: bool,
    /// The previous round, if any.
    pub last_result: Option<&'a RoundResult>,
}

/// Chooses a submission for one player.
///
/// Implementations must not return `Submission::Joker` when
/// `view.joker_available` is false; the controller rejects it.
pub trait Strategy: std::fmt::Debug {
    fn choose(&self, view: &PlayerView<'_>, rng: &mut GameRng) -> Submission;
}

/// Uniform random numbers, occasionally a joker.
#[derive(Clone, Copy, Debug)]
pub struct RandomStrategy {
    pub joker_probability: f64,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(joker_probability: f64) -> Self {
        Self { joker_probability }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new(0.05)
    }
}

impl Strategy for RandomStrategy {
    fn choose(&self, view: &PlayerView<'_>, rng: &mut GameRng) -> Submission {
        if view.joker_available && rng.gen_bool(self.joker_probability) {
            return Submission::Joker;
        }
        Submission::Number(rng.gen_value())
    }
}

/// Aims near last round's target, with some noise.
///
/// Falls back to a uniform pick in round one or after an all-joker round.
#[derive(Clone, Copy, Debug)]
pub struct TargetChaser {
    pub spread: u8,
}

impl Default for TargetChaser {
    fn default() -> Self {
        Self { spread: 5 }
    }
}

impl Strategy for TargetChaser {
    fn choose(&self, view: &PlayerView<'_>, rng: &mut GameRng) -> Submission {
        let Some(target) = view.last_result.and_then(|r| r.target) else {
            return Submission::Number(rng.gen_value());
        };
        let center = target.round().clamp(0.0, f64::from(Submission::MAX)) as u8;
        let lo = center.saturating_sub(self.spread);
        let hi = center.saturating_add(self.spread);
        Submission::Number(rng.gen_value_between(lo, hi))
    }
}

/// Plays a fixed script, one entry per round, repeating the last entry.
#[derive(Clone, Debug)]
pub struct ScriptedStrategy {
    script: Vec<Submission>,
}

impl ScriptedStrategy {
    /// ## Panics
    ///
    /// If `script` is empty.
    #[must_use]
    pub fn new(script: Vec<Submission>) -> Self {
        assert!(!script.is_empty(), "Script must have at least one entry");
        Self { script }
    }

    /// Always submit the same number.
    #[must_use]
    pub fn constant(value: u8) -> Self {
        Self::new(vec![Submission::Number(value.min(Submission::MAX))])
    }
}

impl Strategy for ScriptedStrategy {
    fn choose(&self, view: &PlayerView<'_>, _rng: &mut GameRng) -> Submission {
        let idx = (view.round as usize).saturating_sub(1).min(self.script.len() - 1);
        self.script[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view<'a>(name: &'a PlayerName, round: u32, last: Option<&'a RoundResult>) -> PlayerView<'a> {
        PlayerView {
            name,
            round,
            score: 0,
            alive_count: 5,
            rule_set: RuleSet::Standard,
            joker_available: true,
            last_result: last,
        }
    }

    #[test]
    fn test_random_respects_spent_joker() {
        let name = PlayerName::parse("bot").unwrap();
        let mut v = view(&name, 1, None);
        v.joker_available = false;

        let always_joker = RandomStrategy::new(1.0);
        let mut rng = GameRng::new(5);
        for _ in 0..50 {
            assert!(!always_joker.choose(&v, &mut rng).is_joker());
        }
    }

    #[test]
    fn test_random_plays_joker_when_allowed() {
        let name = PlayerName::parse("bot").unwrap();
        let v = view(&name, 1, None);
        let mut rng = GameRng::new(5);
        assert_eq!(RandomStrategy::new(1.0).choose(&v, &mut rng), Submission::Joker);
    }

    #[test]
    fn test_scripted_repeats_last() {
        let name = PlayerName::parse("bot").unwrap();
        let bot = ScriptedStrategy::new(vec![Submission::Number(1), Submission::Number(2)]);
        let mut rng = GameRng::new(0);

        assert_eq!(bot.choose(&view(&name, 1, None), &mut rng), Submission::Number(1));
        assert_eq!(bot.choose(&view(&name, 2, None), &mut rng), Submission::Number(2));
        assert_eq!(bot.choose(&view(&name, 9, None), &mut rng), Submission::Number(2));
    }

    #[test]
    #[should_panic(expected = "Script must have at least one entry")]
    fn test_empty_script() {
        let _ = ScriptedStrategy::new(Vec::new());
    }

    #[test]
    fn test_chaser_stays_near_target() {
        use smallvec::SmallVec;

        let name = PlayerName::parse("bot").unwrap();
        let last = RoundResult {
            round: 1,
            rule: crate::rules::RuleKind::ClosestToTarget,
            submissions: Vec::new(),
            winners: SmallVec::new(),
            average: Some(50.0),
            target: Some(40.0),
            multiplier: Some(0.8),
            deltas: Vec::new(),
            jokers_used: Vec::new(),
            message: None,
        };
        let bot = TargetChaser { spread: 3 };
        let mut rng = GameRng::new(11);

        for _ in 0..50 {
            let Submission::Number(v) = bot.choose(&view(&name, 2, Some(&last)), &mut rng) else {
                panic!("chaser never plays a joker");
            };
            assert!((37..=43).contains(&v));
        }
    }
}
