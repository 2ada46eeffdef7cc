//! The terminal winner check.
//!
//! Inspected after every resolved turn. A battle concludes when a side
//! collapses (zero credibility while discredited), drowns in constraints,
//! or the turn limit passes; the limit is settled by momentum, then crowd,
//! then the configured tie-break.

use td_core::{BattleState, Constraint, Outcome, Side, TieBreak};

/// Check whether the battle has concluded, and how.
///
/// Returns `None` while the battle is still in progress. Sides are checked
/// powerless-first, so simultaneous collapse hands the win to the powerful
/// side deterministically.
pub fn check_winner(state: &BattleState, tie_break: TieBreak) -> Option<Outcome> {
    for side in Side::all() {
        let side = *side;
        if state.credibility[side] <= 0.0 && state.has_constraint(side, Constraint::Discredited) {
            return Some(Outcome::Winner(side.opponent()));
        }
        if state.constraints[side].len() >= 3 {
            return Some(Outcome::Winner(side.opponent()));
        }
    }

    if state.turn > state.max_turns {
        let momentum = &state.momentum;
        if momentum.powerless != momentum.powerful {
            let ahead = if momentum.powerless > momentum.powerful {
                Side::Powerless
            } else {
                Side::Powerful
            };
            return Some(Outcome::Winner(ahead));
        }
        let crowd = &state.crowd;
        if crowd.powerless != crowd.powerful {
            let ahead = if crowd.powerless > crowd.powerful {
                Side::Powerless
            } else {
                Side::Powerful
            };
            return Some(Outcome::Winner(ahead));
        }
        return Some(match tie_break {
            TieBreak::Draw => Outcome::Draw,
            TieBreak::Favor(side) => Outcome::Winner(side),
        });
    }

    None
}
