//! Sticky status tags degrading a side's position.

use serde::{Deserialize, Serialize};

/// A constraint attached to a side.
///
/// A side's constraints form a duplicate-free set; insertion order is kept
/// because narration reports the first tag added during a turn. Three
/// simultaneous constraints lose the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Publicly stripped of credibility.
    Discredited,
    /// Unable to speak or be heard.
    Censored,
    /// Bound into procedure; only escape moves remain legal.
    TrappedInRules,
    /// Cowed by an implied or open threat.
    Intimidated,
    /// A scheme or mask has been uncovered.
    Exposed,
    /// Knocked out of composure.
    OffBalance,
}

impl Constraint {
    /// All six tags in declaration order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Discredited,
            Self::Censored,
            Self::TrappedInRules,
            Self::Intimidated,
            Self::Exposed,
            Self::OffBalance,
        ]
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discredited => write!(f, "discredited"),
            Self::Censored => write!(f, "censored"),
            Self::TrappedInRules => write!(f, "trapped in rules"),
            Self::Intimidated => write!(f, "intimidated"),
            Self::Exposed => write!(f, "exposed"),
            Self::OffBalance => write!(f, "off balance"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_six_distinct_tags() {
        let all = Constraint::all();
        assert_eq!(all.len(), 6);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_phrases() {
        assert_eq!(Constraint::TrappedInRules.to_string(), "trapped in rules");
        assert_eq!(Constraint::OffBalance.to_string(), "off balance");
        assert_eq!(Constraint::Exposed.to_string(), "exposed");
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Constraint::TrappedInRules).unwrap();
        assert_eq!(json, "\"trapped_in_rules\"");
        let c: Constraint = serde_json::from_str(&json).unwrap();
        assert_eq!(c, Constraint::TrappedInRules);
    }
}
