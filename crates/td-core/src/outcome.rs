//! Battle outcomes.

use serde::{Deserialize, Serialize};

use crate::side::Side;

/// How a concluded battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// One side won.
    Winner(Side),
    /// Neither side could claim the battle.
    Draw,
}

impl Outcome {
    /// The winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            Self::Winner(side) => Some(side),
            Self::Draw => None,
        }
    }

    /// The losing side, if any.
    pub fn loser(self) -> Option<Side> {
        self.winner().map(Side::opponent)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winner(side) => write!(f, "{} wins", side.full_name()),
            Self::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_and_loser() {
        let o = Outcome::Winner(Side::Powerless);
        assert_eq!(o.winner(), Some(Side::Powerless));
        assert_eq!(o.loser(), Some(Side::Powerful));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Draw.loser(), None);
    }

    #[test]
    fn display() {
        assert_eq!(
            Outcome::Winner(Side::Powerful).to_string(),
            "Powerful Trickster wins"
        );
        assert_eq!(Outcome::Draw.to_string(), "draw");
    }
}
