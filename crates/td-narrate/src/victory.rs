//! Victory narration.
//!
//! Classifies a concluded battle into one of six narrative archetypes and
//! renders three sentences from archetype-specific template pools, sharing
//! one arena, one key resource, and one leftover constraint across the
//! whole text.

use rand::Rng;
use serde::{Deserialize, Serialize};

use td_core::{BattleState, Constraint, MoveId, Outcome, Side};

use crate::words::pick;

/// Arenas the final scene is staged in.
const ARENAS: &[&str] = &[
    "forest clearing",
    "court hall",
    "committee room",
    "village square",
    "corridor outside the office",
];

/// Resources the battle was ultimately about.
const KEY_RESOURCES: &[&str] = &[
    "status",
    "rules",
    "money",
    "laughter",
    "speech",
    "procedure",
    "surveillance",
];

/// What gives way when power collapses.
const COLLAPSE_REASONS: &[&str] = &[
    "legitimacy",
    "attention",
    "fear",
    "procedure",
    "exposure",
];

const SUBVERSION_OPENERS: &[&str] = &[
    "The {loser} moves first, confident that {key_resource} will settle everything.",
    "In the {arena}, the {loser} reaches for {key_resource} like it's inevitable.",
    "The {loser} presses the advantage, expecting compliance.",
];

const SUBVERSION_PIVOTS: &[&str] = &[
    "But the {winner} treats the system like a puzzle, not a wall.",
    "Instead of resisting head-on, the {winner} slips sideways, one small twist at a time.",
    "The {winner} answers with {winning_move}, and the frame of the encounter shifts.",
];

const SUBVERSION_CLOSES: &[&str] = &[
    "When the dust clears, {key_resource} can't find a target. The {loser} has nothing left to grip.",
    "The {loser} is still in power, but powerless to make the moment behave.",
    "No final blow is needed. The {loser} simply runs out of plausible moves.",
];

const COLLAPSE_TEMPLATES: &[&str] = &[
    "The {loser} tries to stabilize the scene with {key_resource}. It backfires: the system starts policing itself.",
    "What looked like control becomes overreach. When {collapse_reason} cracks, everything built on it follows.",
    "The {winner} doesn't defeat {key_resource} directly; the {winner} makes it contradict itself.",
];

const COLLAPSE_CLOSERS: &[&str] = &[
    "The {loser} cannot answer without exposing the trick. That silence is the collapse.",
    "Authority remains on paper, but the room has moved on. The {loser} loses by irrelevance.",
];

const HUMILIATION_OPENERS: &[&str] = &[
    "The {winner} doesn't argue. The {winner} laughs.",
    "A single joke lands where a thousand objections wouldn't.",
];

const HUMILIATION_PIVOTS: &[&str] = &[
    "The {loser} tries to restore seriousness, but the air won't hold it.",
    "Each attempt to correct the scene only feeds the spectacle.",
];

const HUMILIATION_CLOSES: &[&str] = &[
    "Once {key_resource} becomes funny, it stops working. The {loser} loses on the spot.",
    "The crowd, real or imagined, crowns the {winner}. The {loser} is still standing, just not standing for anything.",
];

const ESCAPE_TEMPLATES: &[&str] = &[
    "The {loser} tightens the constraints: {constraint}. The {winner} doesn't resist; the {winner} exits.",
    "The {winner} refuses the terms of the contest. With {winning_move}, the {winner} steps outside the frame.",
    "Power tries to trap. The trickster replies with distance.",
];

const ESCAPE_CLOSES: &[&str] = &[
    "The {loser} wins the system. The {winner} wins freedom.",
    "No capture, no concession, just disappearance.",
];

const DOMINATION_TEMPLATES: &[&str] = &[
    "The {winner} doesn't need imagination. The {winner} needs enforcement.",
    "The {loser} reaches for subversion, but the arena has been sealed: {constraint}.",
    "With {winning_move}, the {winner} converts {key_resource} into inevitability.",
];

const DOMINATION_CLOSERS: &[&str] = &[
    "The {loser} could have won in a looser world. This world isn't loose today.",
];

const STALEMATE_TEMPLATES: &[&str] = &[
    "Each trick becomes a counter-trick, each counter becomes a knot. Nothing can move without tightening something else.",
    "The battle doesn't end in victory. It ends in mutual incompatibility.",
    "Both sides still have tools, but no tool that fits the moment.",
];

const STALEMATE_CLOSER: &[&str] = &[
    "Result: stalemate. The system holds, and so does the trickster.",
];

/// The narrative archetype a concluded battle falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictoryKind {
    /// The winner out-maneuvered the system from below.
    Subversion,
    /// The loser's position collapsed under its own contradictions.
    Collapse,
    /// Comedic deflation; authority became funny and stopped working.
    Humiliation,
    /// The winner escaped the frame entirely.
    Escape,
    /// The stronger side simply enforced the outcome.
    Domination,
    /// Neither side could move.
    Stalemate,
}

/// A classified outcome with its rendered narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victory {
    /// The archetype the battle fell into.
    pub kind: VictoryKind,
    /// Three rendered sentences.
    pub text: String,
}

/// Classify a concluded battle.
///
/// When the caller does not supply the final move and attacker, the most
/// recent successful history entry stands in.
pub fn classify(
    outcome: Outcome,
    state: &BattleState,
    last_move: Option<MoveId>,
    last_attacker: Option<Side>,
) -> VictoryKind {
    let Some(winner) = outcome.winner() else {
        return VictoryKind::Stalemate;
    };
    let loser = winner.opponent();

    let fallback = state.last_success();
    let last_move = last_move.or_else(|| fallback.map(|r| r.move_id));
    let last_attacker = last_attacker.or_else(|| fallback.map(|r| r.side));

    if last_move == Some(MoveId::BorderAdvantage) && last_attacker == Some(winner) {
        return VictoryKind::Escape;
    }
    if state.has_constraint(loser, Constraint::Exposed) {
        return VictoryKind::Collapse;
    }
    if winner == Side::Powerless
        && (state.has_constraint(loser, Constraint::Discredited)
            || state.has_constraint(loser, Constraint::OffBalance))
    {
        return VictoryKind::Subversion;
    }
    if winner == Side::Powerless {
        VictoryKind::Humiliation
    } else {
        VictoryKind::Domination
    }
}

/// Render the victory narration for a concluded battle.
///
/// `winner_name`/`loser_name` override the default side names (a build's
/// display name, typically).
pub fn compose_victory<R: Rng>(
    outcome: Outcome,
    state: &BattleState,
    last_move: Option<MoveId>,
    last_attacker: Option<Side>,
    winner_name: Option<&str>,
    loser_name: Option<&str>,
    rng: &mut R,
) -> Victory {
    let kind = classify(outcome, state, last_move, last_attacker);

    let fallback = state.last_success();
    let winning_move = match last_move.or_else(|| fallback.map(|r| r.move_id)) {
        Some(m) => m.label().to_string(),
        None => "a last-minute trick".to_string(),
    };

    let winner_default = outcome.winner().map(Side::full_name).unwrap_or_default();
    let loser_default = outcome.loser().map(Side::full_name).unwrap_or_default();

    // One representative leftover constraint flavors the whole text.
    let leftover = match outcome
        .loser()
        .and_then(|loser| state.constraints[loser].first())
        .or_else(|| state.constraints[Side::Powerful].first())
        .or_else(|| state.constraints[Side::Powerless].first())
    {
        Some(c) => c.to_string(),
        None => "constraint".to_string(),
    };

    let vars = [
        ("{winner}", winner_name.unwrap_or(winner_default).to_string()),
        ("{loser}", loser_name.unwrap_or(loser_default).to_string()),
        ("{winning_move}", winning_move),
        ("{arena}", pick(rng, ARENAS).to_string()),
        ("{key_resource}", pick(rng, KEY_RESOURCES).to_string()),
        ("{collapse_reason}", pick(rng, COLLAPSE_REASONS).to_string()),
        ("{constraint}", leftover),
    ];

    let pools: [&[&str]; 3] = match kind {
        VictoryKind::Subversion => [SUBVERSION_OPENERS, SUBVERSION_PIVOTS, SUBVERSION_CLOSES],
        VictoryKind::Collapse => [COLLAPSE_TEMPLATES, COLLAPSE_TEMPLATES, COLLAPSE_CLOSERS],
        VictoryKind::Humiliation => [
            HUMILIATION_OPENERS,
            HUMILIATION_PIVOTS,
            HUMILIATION_CLOSES,
        ],
        VictoryKind::Escape => [ESCAPE_TEMPLATES, ESCAPE_TEMPLATES, ESCAPE_CLOSES],
        VictoryKind::Domination => [DOMINATION_TEMPLATES, DOMINATION_TEMPLATES, DOMINATION_CLOSERS],
        VictoryKind::Stalemate => [STALEMATE_TEMPLATES, STALEMATE_TEMPLATES, STALEMATE_CLOSER],
    };

    let sentences: Vec<String> = pools
        .iter()
        .map(|pool| {
            let mut sentence = pick(rng, pool).to_string();
            for (tag, value) in &vars {
                if sentence.contains(tag) {
                    sentence = sentence.replace(tag, value);
                }
            }
            sentence
        })
        .collect();

    Victory {
        kind,
        text: sentences.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use td_core::BattleConfig;

    fn state() -> BattleState {
        BattleState::new(&BattleConfig::default())
    }

    #[test]
    fn draw_is_stalemate() {
        assert_eq!(
            classify(Outcome::Draw, &state(), None, None),
            VictoryKind::Stalemate
        );
    }

    #[test]
    fn winner_closing_with_border_advantage_escapes() {
        let kind = classify(
            Outcome::Winner(Side::Powerless),
            &state(),
            Some(MoveId::BorderAdvantage),
            Some(Side::Powerless),
        );
        assert_eq!(kind, VictoryKind::Escape);

        // The loser playing it last does not count as an escape.
        let kind = classify(
            Outcome::Winner(Side::Powerless),
            &state(),
            Some(MoveId::BorderAdvantage),
            Some(Side::Powerful),
        );
        assert_ne!(kind, VictoryKind::Escape);
    }

    #[test]
    fn exposed_loser_collapses() {
        let mut s = state();
        s.add_constraint(Side::Powerful, Constraint::Exposed);
        let kind = classify(Outcome::Winner(Side::Powerless), &s, None, None);
        assert_eq!(kind, VictoryKind::Collapse);
    }

    #[test]
    fn discredited_loser_against_powerless_winner_is_subversion() {
        let mut s = state();
        s.add_constraint(Side::Powerful, Constraint::Discredited);
        let kind = classify(Outcome::Winner(Side::Powerless), &s, None, None);
        assert_eq!(kind, VictoryKind::Subversion);

        // The powerful side winning over a discredited powerless side is
        // plain domination.
        let mut s = state();
        s.add_constraint(Side::Powerless, Constraint::Discredited);
        let kind = classify(Outcome::Winner(Side::Powerful), &s, None, None);
        assert_eq!(kind, VictoryKind::Domination);
    }

    #[test]
    fn bare_wins_fall_to_humiliation_or_domination() {
        assert_eq!(
            classify(Outcome::Winner(Side::Powerless), &state(), None, None),
            VictoryKind::Humiliation
        );
        assert_eq!(
            classify(Outcome::Winner(Side::Powerful), &state(), None, None),
            VictoryKind::Domination
        );
    }

    #[test]
    fn history_stands_in_for_missing_last_move() {
        let mut s = state();
        s.record(Side::Powerless, MoveId::LaughDisarm, false);
        s.record(Side::Powerless, MoveId::BorderAdvantage, true);
        s.record(Side::Powerful, MoveId::MediaSpin, false);
        let kind = classify(Outcome::Winner(Side::Powerless), &s, None, None);
        assert_eq!(kind, VictoryKind::Escape);
    }

    #[test]
    fn rendered_text_has_three_sentences_and_no_placeholders() {
        let mut s = state();
        s.add_constraint(Side::Powerful, Constraint::Exposed);
        s.record(Side::Powerless, MoveId::HolyTruth, true);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let v = compose_victory(
                Outcome::Winner(Side::Powerless),
                &s,
                None,
                None,
                None,
                None,
                &mut rng,
            );
            assert_eq!(v.kind, VictoryKind::Collapse);
            assert!(!v.text.is_empty());
            assert!(!v.text.contains('{'), "{}", v.text);
            assert!(v.text.matches('.').count() >= 3, "{}", v.text);
        }
    }

    #[test]
    fn custom_names_replace_side_names() {
        let mut s = state();
        s.add_constraint(Side::Powerful, Constraint::Discredited);
        let mut rng = StdRng::seed_from_u64(5);
        let v = compose_victory(
            Outcome::Winner(Side::Powerless),
            &s,
            None,
            None,
            Some("Reynard"),
            Some("The Registrar"),
            &mut rng,
        );
        assert_eq!(v.kind, VictoryKind::Subversion);
        assert!(!v.text.contains("Powerless Trickster"), "{}", v.text);
    }

    #[test]
    fn stalemate_text_renders() {
        let mut rng = StdRng::seed_from_u64(1);
        let v = compose_victory(Outcome::Draw, &state(), None, None, None, None, &mut rng);
        assert_eq!(v.kind, VictoryKind::Stalemate);
        assert!(v.text.contains("stalemate"), "{}", v.text);
    }
}
