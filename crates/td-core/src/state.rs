//! The mutable battle state aggregate.
//!
//! One `BattleState` exists per battle. The resolution engine takes
//! exclusive access for the duration of a turn; policy and narration read
//! it. All numeric mutations go through the clamped adjusters here so the
//! documented bounds hold after every mutation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::BattleConfig;
use crate::constraint::Constraint;
use crate::moves::MoveId;
use crate::side::Side;

/// Lower bound of the momentum stat.
pub const MOMENTUM_MIN: i32 = -5;
/// Upper bound of the momentum stat.
pub const MOMENTUM_MAX: i32 = 5;
/// Lower bound of the credibility stat.
pub const CREDIBILITY_MIN: f64 = 0.0;
/// Upper bound of the credibility stat.
pub const CREDIBILITY_MAX: f64 = 5.0;
/// Lower bound of the crowd stat.
pub const CROWD_MIN: i32 = -3;
/// Upper bound of the crowd stat.
pub const CROWD_MAX: i32 = 3;

/// A pair of values, one per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerSide<T> {
    /// Value for the powerless side.
    pub powerless: T,
    /// Value for the powerful side.
    pub powerful: T,
}

impl<T> PerSide<T> {
    /// Create from explicit per-side values.
    pub fn new(powerless: T, powerful: T) -> Self {
        Self {
            powerless,
            powerful,
        }
    }

    /// Create with the same value on both sides.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            powerless: value.clone(),
            powerful: value,
        }
    }

    /// Borrow the value for a side.
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Powerless => &self.powerless,
            Side::Powerful => &self.powerful,
        }
    }

    /// Mutably borrow the value for a side.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Powerless => &mut self.powerless,
            Side::Powerful => &mut self.powerful,
        }
    }
}

impl<T> std::ops::Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> std::ops::IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}

/// One resolved move in the battle history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The side that acted.
    pub side: Side,
    /// The move that was used.
    #[serde(rename = "move")]
    pub move_id: MoveId,
    /// Whether the probabilistic roll succeeded.
    pub success: bool,
}

/// The mutable aggregate for one battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleState {
    /// Turn counter, starting at 1, incremented after every resolved move.
    pub turn: u32,
    /// Fixed battle length.
    pub max_turns: u32,
    /// Per-side momentum, clamped to [-5, 5].
    pub momentum: PerSide<i32>,
    /// Per-side credibility, clamped to [0, 5]; moves on half-point steps.
    pub credibility: PerSide<f64>,
    /// Per-side crowd favor, clamped to [-3, 3].
    pub crowd: PerSide<i32>,
    /// Per-side constraint sets; duplicate-free, insertion ordered.
    pub constraints: PerSide<Vec<Constraint>>,
    /// Per-side remaining cooldown turns; entries are always positive.
    pub cooldowns: PerSide<HashMap<MoveId, u32>>,
    /// Append-only record of every resolved move.
    pub history: Vec<TurnRecord>,
}

impl BattleState {
    /// A fresh state at turn 1 with the configured initial values.
    pub fn new(config: &BattleConfig) -> Self {
        Self {
            turn: 1,
            max_turns: config.max_turns,
            momentum: PerSide::splat(0),
            credibility: config.initial_credibility,
            crowd: PerSide::splat(0),
            constraints: PerSide::default(),
            cooldowns: PerSide::default(),
            history: Vec::new(),
        }
    }

    /// Adjust a side's momentum, clamping to bounds.
    pub fn adjust_momentum(&mut self, side: Side, delta: i32) {
        let v = self.momentum.get_mut(side);
        *v = (*v + delta).clamp(MOMENTUM_MIN, MOMENTUM_MAX);
    }

    /// Adjust a side's credibility, clamping to bounds.
    pub fn adjust_credibility(&mut self, side: Side, delta: f64) {
        let v = self.credibility.get_mut(side);
        *v = (*v + delta).clamp(CREDIBILITY_MIN, CREDIBILITY_MAX);
    }

    /// Adjust a side's crowd favor, clamping to bounds.
    pub fn adjust_crowd(&mut self, side: Side, delta: i32) {
        let v = self.crowd.get_mut(side);
        *v = (*v + delta).clamp(CROWD_MIN, CROWD_MAX);
    }

    /// Attach a constraint to a side. Adding a tag that is already present
    /// leaves the set unchanged.
    pub fn add_constraint(&mut self, side: Side, constraint: Constraint) {
        let set = self.constraints.get_mut(side);
        if !set.contains(&constraint) {
            set.push(constraint);
        }
    }

    /// Remove the listed constraints from a side; absent tags are ignored.
    pub fn remove_constraints(&mut self, side: Side, to_remove: &[Constraint]) {
        self.constraints
            .get_mut(side)
            .retain(|c| !to_remove.contains(c));
    }

    /// Remove and return a side's oldest constraint, if any.
    pub fn drop_first_constraint(&mut self, side: Side) -> Option<Constraint> {
        let set = self.constraints.get_mut(side);
        if set.is_empty() {
            None
        } else {
            Some(set.remove(0))
        }
    }

    /// Whether a side currently holds the given constraint.
    pub fn has_constraint(&self, side: Side, constraint: Constraint) -> bool {
        self.constraints.get(side).contains(&constraint)
    }

    /// Whether a move is on cooldown for a side.
    pub fn is_on_cooldown(&self, side: Side, move_id: MoveId) -> bool {
        self.cooldowns
            .get(side)
            .get(&move_id)
            .is_some_and(|turns| *turns > 0)
    }

    /// Start a cooldown for a side's move.
    ///
    /// Stores `duration + 1` so the end-of-turn tick absorbs the current
    /// turn. An existing larger remaining count is never shortened.
    pub fn start_cooldown(&mut self, side: Side, move_id: MoveId, duration: u32) {
        if duration == 0 {
            return;
        }
        let entry = self.cooldowns.get_mut(side).entry(move_id).or_insert(0);
        *entry = (*entry).max(duration + 1);
    }

    /// Tick every cooldown on both sides down by one turn, pruning entries
    /// that reach zero.
    pub fn tick_cooldowns(&mut self) {
        for side in Side::all() {
            self.cooldowns.get_mut(*side).retain(|_, turns| {
                *turns = turns.saturating_sub(1);
                *turns > 0
            });
        }
    }

    /// Append a resolved move to the history.
    pub fn record(&mut self, side: Side, move_id: MoveId, success: bool) {
        self.history.push(TurnRecord {
            side,
            move_id,
            success,
        });
    }

    /// Whether a side has used the given move at any point in the battle.
    pub fn has_used(&self, side: Side, move_id: MoveId) -> bool {
        self.history
            .iter()
            .any(|r| r.side == side && r.move_id == move_id)
    }

    /// The most recent successful move, if any.
    pub fn last_success(&self) -> Option<&TurnRecord> {
        self.history.iter().rev().find(|r| r.success)
    }
}
