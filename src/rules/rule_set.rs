//! Which rule banner is in force for a round, for display before submission.

use serde::{Deserialize, Serialize};

use crate::core::RuleConfig;

/// The rule set announced to players at round start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleSet {
    /// Revelation is live (4 players, late game).
    Revelation,
    /// Final duel between the last two players.
    FinalDuel,
    /// Three or fewer players: duplicate and exact-match rules.
    Endgame,
    /// Closest to the standard target.
    Standard,
}

impl RuleSet {
    /// Rule set for a round with `alive` players.
    #[must_use]
    pub fn for_round(alive: usize, round: u32, config: &RuleConfig) -> Self {
        if alive == config.revelation_players && round >= config.revelation_min_round {
            Self::Revelation
        } else if alive == RuleConfig::DUEL_PLAYERS {
            Self::FinalDuel
        } else if config.is_endgame(alive) {
            Self::Endgame
        } else {
            Self::Standard
        }
    }

    /// Banner text.
    #[must_use]
    pub fn description(self, config: &RuleConfig) -> String {
        let p = &config.penalties;
        match self {
            Self::Revelation => format!(
                "Revelation: if the rounded average is prime, whoever picked it wins outright; everyone else loses {}",
                p.revelation
            ),
            Self::FinalDuel => "Final duel: if 0 and 100 are picked, 100 wins".to_string(),
            Self::Endgame => format!(
                "Endgame: duplicate numbers cost everyone {}; an exact target hit costs everyone else {}",
                p.duplicate, p.exact_match
            ),
            Self::Standard => format!("Standard: target multiplier {}", config.standard_multiplier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_round() {
        let config = RuleConfig::default();

        assert_eq!(RuleSet::for_round(6, 1, &config), RuleSet::Standard);
        assert_eq!(RuleSet::for_round(4, 4, &config), RuleSet::Standard);
        assert_eq!(RuleSet::for_round(4, 5, &config), RuleSet::Revelation);
        assert_eq!(RuleSet::for_round(3, 9, &config), RuleSet::Endgame);
        assert_eq!(RuleSet::for_round(2, 1, &config), RuleSet::FinalDuel);
    }

    /// The banner and the duel rule agree on the player count.
    #[test]
    fn test_duel_banner_matches_rule() {
        use crate::core::{PlayerName, Submission};
        use crate::rules::{FinalDuel, Rule, RoundContext};

        let config = RuleConfig::default();
        let entries: Vec<(PlayerName, Submission)> = (0..RuleConfig::DUEL_PLAYERS)
            .map(|i| {
                let value = if i == 0 { 0 } else { 100 };
                (PlayerName::parse(&format!("p{i}")).unwrap(), Submission::Number(value))
            })
            .collect();
        let ctx = RoundContext::new(1, &entries, &config);

        assert_eq!(
            RuleSet::for_round(RuleConfig::DUEL_PLAYERS, 1, &config),
            RuleSet::FinalDuel
        );
        assert!(FinalDuel.evaluate(&ctx).is_some());
    }

    #[test]
    fn test_description() {
        let config = RuleConfig::default();
        assert_eq!(
            RuleSet::Standard.description(&config),
            "Standard: target multiplier 0.8"
        );
        assert!(RuleSet::Endgame.description(&config).contains("everyone else 2"));
    }
}
