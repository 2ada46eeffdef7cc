//! The stochastic move-selection policy.
//!
//! Scores every legal move with situational heuristics, adds uniform
//! jitter, divides by temperature, and samples one move from the softmax
//! distribution with a single uniform draw.

use rand::Rng;

use td_core::{BattleConfig, BattleState, MoveId, Side};

use crate::catalog::{ESCAPE_MOVES, holds_trait, move_def, traits};
use crate::legality::legal_moves;

/// Moves that exploit a high-credibility opponent.
const EXPLOIT_CREDIBILITY: &[MoveId] = &[MoveId::TechLeverage, MoveId::MediaSpin];

/// Moves that recover a sagging crowd.
const RECOVER_CROWD: &[MoveId] = &[MoveId::LaughDisarm, MoveId::PersuadeFrame];

/// The powerless side's signature aggressive moves.
const UNDERDOG_FAVORITES: &[MoveId] = &[MoveId::LaughDisarm, MoveId::PersuadeFrame];

/// The powerful side's high-impact moves.
const BIG_MOVES: &[MoveId] = &[
    MoveId::MoneySolve,
    MoveId::RulesWeaponize,
    MoveId::DelegateEnforce,
    MoveId::TechLeverage,
    MoveId::MagicException,
];

/// Pick one legal move for a side, or `None` when no move is legal.
///
/// Not deterministic unless the random source is; tests inject a scripted
/// or seeded generator.
pub fn choose_move<R: Rng>(
    side: Side,
    state: &BattleState,
    selected_traits: &[String],
    config: &BattleConfig,
    rng: &mut R,
) -> Option<MoveId> {
    let legal = legal_moves(side, state, selected_traits, config.repeat_policy);
    if legal.is_empty() {
        return None;
    }

    let opponent = side.opponent();
    let opponent_credibility = state.credibility[opponent];
    let own_crowd = state.crowd[side];
    let constrained = !state.constraints[side].is_empty();
    let has_laughter = holds_trait(selected_traits, traits::LAUGHTER);
    let has_rules = holds_trait(selected_traits, traits::RULES_LAWS);

    let mut candidates = Vec::with_capacity(legal.len());
    let mut scores = Vec::with_capacity(legal.len());
    for move_id in legal {
        let Some(def) = move_def(move_id) else {
            continue;
        };
        let mut score = def.base * 2.0;

        if constrained && ESCAPE_MOVES.contains(&move_id) {
            score += 1.5;
        }
        if opponent_credibility >= 3.0 && EXPLOIT_CREDIBILITY.contains(&move_id) {
            score += 1.2;
        }
        if own_crowd <= -1 && RECOVER_CROWD.contains(&move_id) {
            score += 1.0;
        }
        if has_laughter && move_id == MoveId::LaughDisarm {
            score += 1.0;
        }
        if has_rules && (move_id == MoveId::RulesWeaponize || move_id == MoveId::LiteralOverobey) {
            score += 0.8;
        }
        match side {
            Side::Powerless if UNDERDOG_FAVORITES.contains(&move_id) => score += 0.3,
            Side::Powerful if BIG_MOVES.contains(&move_id) => score += 0.3,
            _ => {}
        }

        let jitter = (rng.random::<f64>() - 0.5) * 0.6;
        candidates.push(move_id);
        scores.push((score + jitter) / config.temperature);
    }

    softmax_sample(&scores, &candidates, rng)
}

/// Sample one move from the softmax distribution of the scores, walking a
/// single uniform draw against the cumulative probabilities. The last move
/// catches any floating-point remainder.
fn softmax_sample<R: Rng>(scores: &[f64], moves: &[MoveId], rng: &mut R) -> Option<MoveId> {
    if scores.is_empty() {
        return None;
    }
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();

    let mut remainder = rng.random::<f64>();
    for (exp, move_id) in exps.iter().zip(moves) {
        let p = exp / sum;
        if remainder < p {
            return Some(*move_id);
        }
        remainder -= p;
    }
    moves.last().copied()
}
