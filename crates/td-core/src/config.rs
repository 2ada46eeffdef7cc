//! Battle configuration.
//!
//! The source material disagrees with itself across revisions on repeat
//! prevention, the turn-limit tie-break, and the underdog bonus; all three
//! are explicit toggles here rather than hardcoded behavior.

use crate::moves::MoveId;
use crate::side::Side;
use crate::state::PerSide;

/// Whether a side may reuse a move it has already played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatPolicy {
    /// A used move comes back once its cooldown expires.
    #[default]
    CooldownOnly,
    /// Every move is playable at most once per side per battle.
    SingleUse,
}

/// How to settle a battle that reaches the turn limit with momentum and
/// crowd both tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Call it a draw.
    #[default]
    Draw,
    /// Hand the win to a fixed side.
    Favor(Side),
}

/// Configuration for one battle.
#[derive(Debug, Clone)]
pub struct BattleConfig {
    /// Fixed battle length in turns.
    pub max_turns: u32,
    /// Starting credibility per side.
    pub initial_credibility: PerSide<f64>,
    /// Flat success-probability bonus for the powerless attacker
    /// (0.0 disables it).
    pub underdog_bonus: f64,
    /// Repeat-prevention policy.
    pub repeat_policy: RepeatPolicy,
    /// Turn-limit tie-break policy.
    pub tie_break: TieBreak,
    /// Selection-policy temperature; 1.0 is neutral, lower sharpens the
    /// distribution, higher flattens it.
    pub temperature: f64,
    /// Move resolved when a side has no legal move left.
    pub fallback_move: MoveId,
    /// RNG seed for a reproducible session.
    pub seed: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_turns: 20,
            initial_credibility: PerSide::splat(3.0),
            underdog_bonus: 0.05,
            repeat_policy: RepeatPolicy::default(),
            tie_break: TieBreak::default(),
            temperature: 1.0,
            fallback_move: MoveId::PersuadeFrame,
            seed: 42,
        }
    }
}

impl BattleConfig {
    /// Set the battle length.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the starting credibility split.
    pub fn with_initial_credibility(mut self, powerless: f64, powerful: f64) -> Self {
        self.initial_credibility = PerSide::new(powerless, powerful);
        self
    }

    /// Set the underdog success-probability bonus.
    pub fn with_underdog_bonus(mut self, bonus: f64) -> Self {
        self.underdog_bonus = bonus;
        self
    }

    /// Set the repeat-prevention policy.
    pub fn with_repeat_policy(mut self, policy: RepeatPolicy) -> Self {
        self.repeat_policy = policy;
        self
    }

    /// Set the turn-limit tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the selection-policy temperature (floored at a small positive
    /// value; zero would divide scores away).
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature.max(0.05);
        self
    }

    /// Set the fallback move for empty legal sets.
    pub fn with_fallback_move(mut self, move_id: MoveId) -> Self {
        self.fallback_move = move_id;
        self
    }

    /// Set the session RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
