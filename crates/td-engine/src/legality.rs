//! The cooldown/legality filter.
//!
//! Produces the ordered list of moves a side may currently select. The
//! trapped-in-rules override is two-tier: it restricts the legal set to the
//! escape subset while bypassing ordinary trait gates for all of that
//! subset except Persuasive Framing, which keeps its own stricter gate.

use td_core::{BattleState, Constraint, MoveId, RepeatPolicy, Side};

use crate::catalog::{CATALOG, ESCAPE_MOVES, holds_trait, satisfies_gate, traits};

/// The legal moves for a side, in catalog order.
///
/// A move is legal iff the side may use it, it is off cooldown, its trait
/// gate passes (or is bypassed by the trapped-state override), and the
/// repeat policy permits it. The result may be empty; callers substitute a
/// configured fallback rather than this filter fabricating one.
pub fn legal_moves(
    side: Side,
    state: &BattleState,
    selected_traits: &[String],
    repeat_policy: RepeatPolicy,
) -> Vec<MoveId> {
    let trapped = state.has_constraint(side, Constraint::TrappedInRules);
    let mut legal = Vec::new();

    for def in CATALOG {
        if !def.allowed_sides.contains(&side) {
            continue;
        }

        // Persuasive Framing demands the persuasion trait itself, always.
        // While trapped it is a one-shot: a side that has ever played it
        // cannot reach for it again to slip the trap.
        if def.id == MoveId::PersuadeFrame {
            if !holds_trait(selected_traits, traits::PERSUASION) {
                continue;
            }
            if trapped && state.has_used(side, MoveId::PersuadeFrame) {
                continue;
            }
        }

        if trapped {
            // Only escape moves remain; their ordinary gates are waived.
            if !ESCAPE_MOVES.contains(&def.id) {
                continue;
            }
        } else if !satisfies_gate(selected_traits, def.requires_any_trait) {
            continue;
        }

        if state.is_on_cooldown(side, def.id) {
            continue;
        }
        if repeat_policy == RepeatPolicy::SingleUse && state.has_used(side, def.id) {
            continue;
        }

        legal.push(def.id);
    }

    legal
}
