//! The two battle sides.

use serde::{Deserialize, Serialize};

/// One of the two battle participants.
///
/// The roles are symmetric mechanically; the asymmetry (which moves each
/// side may use, the underdog probability bonus) lives in the catalog and
/// configuration, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The trickster without institutional power.
    Powerless,
    /// The trickster in power.
    Powerful,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Self::Powerless => Self::Powerful,
            Self::Powerful => Self::Powerless,
        }
    }

    /// Both sides, powerless first (stable iteration order).
    pub fn all() -> &'static [Self] {
        &[Self::Powerless, Self::Powerful]
    }

    /// Display title used by narration ("the powerless trickster").
    pub fn title(self) -> &'static str {
        match self {
            Self::Powerless => "the powerless trickster",
            Self::Powerful => "the trickster in power",
        }
    }

    /// Capitalized name used when a build supplies no custom name.
    pub fn full_name(self) -> &'static str {
        match self {
            Self::Powerless => "Powerless Trickster",
            Self::Powerful => "Powerful Trickster",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Powerless => write!(f, "powerless"),
            Self::Powerful => write!(f, "powerful"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involutive() {
        for side in Side::all() {
            assert_eq!(side.opponent().opponent(), *side);
            assert_ne!(side.opponent(), *side);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Side::Powerless.to_string(), "powerless");
        assert_eq!(Side::Powerful.to_string(), "powerful");
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Side::Powerless).unwrap();
        assert_eq!(json, "\"powerless\"");
        let side: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(side, Side::Powerless);
    }
}
