//! The per-turn resolution engine.
//!
//! Computes a clamped success probability, rolls it, applies the move's
//! effect, and does the turn bookkeeping (cooldown start, history entry,
//! cooldown tick, turn increment) as one atomic unit. The engine takes
//! exclusive access to the state for the duration of the turn; callers
//! wanting a before-snapshot clone first.

use rand::Rng;

use td_core::{BattleConfig, BattleState, MoveId, Side};

use crate::catalog::{holds_trait, move_def};

/// No computed probability ever drops below this.
pub const PROBABILITY_FLOOR: f64 = 0.05;
/// No computed probability ever exceeds this.
pub const PROBABILITY_CEILING: f64 = 0.95;

const SIGNATURE_BONUS: f64 = 0.1;
const COUNTER_PENALTY: f64 = 0.1;
const MOMENTUM_WEIGHT: f64 = 0.03;
const CROWD_WEIGHT: f64 = 0.04;
const JITTER_SPAN: f64 = 0.2;

/// The success probability for a move in the current state.
///
/// Consumes one uniform draw for the jitter term. Unknown moves never
/// succeed. The result is clamped to
/// [[`PROBABILITY_FLOOR`], [`PROBABILITY_CEILING`]] regardless of how
/// extreme the modifier inputs are.
pub fn success_probability<R: Rng>(
    attacker: Side,
    move_id: MoveId,
    state: &BattleState,
    attacker_traits: &[String],
    defender_traits: &[String],
    config: &BattleConfig,
    rng: &mut R,
) -> f64 {
    let Some(def) = move_def(move_id) else {
        return 0.0;
    };
    let defender = attacker.opponent();
    let mut p = def.base;

    if attacker == Side::Powerless {
        p += config.underdog_bonus;
    }
    if let Some(trait_id) = def.signature_trait {
        if holds_trait(attacker_traits, trait_id) {
            p += SIGNATURE_BONUS;
        }
    }

    let momentum_diff = state.momentum[attacker] - state.momentum[defender];
    p += f64::from(momentum_diff) * MOMENTUM_WEIGHT;
    let crowd_diff = state.crowd[attacker] - state.crowd[defender];
    p += f64::from(crowd_diff) * CROWD_WEIGHT;

    if let Some(trait_id) = def.counter_trait {
        if holds_trait(defender_traits, trait_id) {
            p -= COUNTER_PENALTY;
        }
    }

    p += (rng.random::<f64>() - 0.5) * JITTER_SPAN;
    p.clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING)
}

/// Resolve one move for the attacker, mutating the state in place.
///
/// Returns whether the roll succeeded. An unknown move resolves as a
/// failure with no state change at all; this defensive path is unreachable
/// when moves come from the legality filter.
pub fn resolve_move<R: Rng>(
    attacker: Side,
    move_id: MoveId,
    state: &mut BattleState,
    attacker_traits: &[String],
    defender_traits: &[String],
    config: &BattleConfig,
    rng: &mut R,
) -> bool {
    let Some(def) = move_def(move_id) else {
        return false;
    };
    let defender = attacker.opponent();

    let p = success_probability(
        attacker,
        move_id,
        state,
        attacker_traits,
        defender_traits,
        config,
        rng,
    );
    let roll: f64 = rng.random();
    let success = roll < p;

    if success {
        (def.apply)(state, attacker, defender);
    } else if let Some(on_fail) = def.on_fail {
        on_fail(state, attacker, defender);
    }

    // Cooldown is charged whether or not the move landed.
    state.start_cooldown(attacker, move_id, def.cooldown_turns);
    state.record(attacker, move_id, success);
    state.tick_cooldowns();
    state.turn += 1;

    success
}
