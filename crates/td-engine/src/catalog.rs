//! The static move catalog.
//!
//! Each entry is plain data plus two pure transition functions operating on
//! an explicit state parameter. Definition order is the legality filter's
//! iteration order. All stat mutations go through the clamped adjusters on
//! `BattleState`, so effects cannot leave the documented bounds.

use td_core::{BattleState, Constraint, MoveId, Side};

/// Trait identifiers consumed by move gates.
///
/// These mirror the external trait catalog's wire identifiers verbatim;
/// the core never validates them beyond set membership.
pub mod traits {
    /// Talks an audience into a frame of its choosing.
    pub const PERSUASION: &str = "persuasion";
    /// Fast, slippery speech.
    pub const QUICK_TONGUE: &str = "quick_tongue";
    /// Rank that makes people defer.
    pub const SOCIAL_STATUS: &str = "social_status";
    /// Owns the channels attention flows through.
    pub const MEDIA_PRESENCE: &str = "media_presence";
    /// Laughter as a weapon.
    pub const LAUGHTER: &str = "laughter";
    /// Licensed fool.
    pub const JESTER: &str = "jester";
    /// Everything is a performance.
    pub const PERFORMATIVITY: &str = "performativity";
    /// Plays dumber than anyone can punish.
    pub const SIMPLETON: &str = "simpleton";
    /// Charms targets into entanglement.
    pub const SEDUCTIVE_TRICKSTAR: &str = "seductive_trickstar";
    /// Refuses the social script outright.
    pub const NONSEDUCTIVE_TRICKSTAR: &str = "nonseductive_trickstar";
    /// Shape-shifter of the fox lineage.
    pub const SHAPESHIFTING_FOX: &str = "shapeshifting_fox";
    /// Shape-shifting backed by power.
    pub const SHAPESHIFTING_POWER: &str = "shapeshifting_power";
    /// Rogue living by small hustles.
    pub const PICARO: &str = "picaro";
    /// Speaks forbidden truths under a halo.
    pub const HOLY_FOOL: &str = "holy_fool";
    /// Commands the rulebook.
    pub const RULES_LAWS: &str = "rules_laws";
    /// Obeys instructions to the letter.
    pub const LITERALISM: &str = "literalism";
    /// Hands out quests that bind.
    pub const QUESTS: &str = "quests";
    /// Acts through subordinates.
    pub const DELEGATION: &str = "delegation";
    /// Chaos for its own sake.
    pub const CHAOTIC_PRANKS: &str = "chaotic_pranks";
    /// Makes shared spaces unusable.
    pub const SOCIAL_DISRUPTION: &str = "social_disruption";
    /// Problems have price tags.
    pub const MONEY: &str = "money";
    /// Sees what others cannot.
    pub const TECHNOLOGY: &str = "technology";
    /// Rearranges the material scene.
    pub const OBJECT_MANIPULATION: &str = "object_manipulation";
    /// Beyond-human capacity.
    pub const MAGIC: &str = "magic";
    /// Force, implied or open.
    pub const VIOLENCE: &str = "violence";
    /// Lives where categories blur.
    pub const LIMINALITY: &str = "liminality";
}

/// A state-transition function applied on success or failure:
/// `(state, attacker, defender)`.
pub type EffectFn = fn(&mut BattleState, Side, Side);

/// A move definition: legality gate, probability data, and effects.
#[derive(Debug, Clone, Copy)]
pub struct MoveDef {
    /// The move's identifier.
    pub id: MoveId,
    /// Sides permitted to use the move.
    pub allowed_sides: &'static [Side],
    /// Any-of trait gate; empty means ungated.
    pub requires_any_trait: &'static [&'static str],
    /// Attacker trait granting a flat success-probability bonus.
    pub signature_trait: Option<&'static str>,
    /// Defender trait inflicting a flat success-probability penalty.
    pub counter_trait: Option<&'static str>,
    /// Baseline success probability before modifiers, in (0, 1).
    pub base: f64,
    /// Cooldown duration in turns after use; 0 means none.
    pub cooldown_turns: u32,
    /// Effect applied when the roll succeeds.
    pub apply: EffectFn,
    /// Effect applied instead when the roll fails.
    pub on_fail: Option<EffectFn>,
}

const BOTH: &[Side] = &[Side::Powerless, Side::Powerful];
const POWERLESS: &[Side] = &[Side::Powerless];
const POWERFUL: &[Side] = &[Side::Powerful];

/// Moves that remain legal while a side is trapped in rules, and that the
/// selection policy favors for any constrained side.
pub const ESCAPE_MOVES: &[MoveId] = &[
    MoveId::PersuadeFrame,
    MoveId::LiteralOverobey,
    MoveId::BorderAdvantage,
];

/// The full move catalog in definition order.
pub static CATALOG: &[MoveDef] = &[
    // Talk and narrative control.
    MoveDef {
        id: MoveId::PersuadeFrame,
        allowed_sides: BOTH,
        requires_any_trait: &[
            traits::PERSUASION,
            traits::QUICK_TONGUE,
            traits::SOCIAL_STATUS,
            traits::MEDIA_PRESENCE,
        ],
        signature_trait: Some(traits::QUICK_TONGUE),
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 0,
        apply: |state, attacker, defender| {
            state.adjust_credibility(defender, -0.5);
            state.adjust_momentum(attacker, 1);
            state.adjust_crowd(attacker, 1);
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::LaughDisarm,
        allowed_sides: POWERLESS,
        requires_any_trait: &[
            traits::LAUGHTER,
            traits::JESTER,
            traits::PERFORMATIVITY,
            traits::SIMPLETON,
        ],
        signature_trait: Some(traits::LAUGHTER),
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 1,
        apply: |state, attacker, defender| {
            // Laughter shakes off intimidation and composure alike.
            state.remove_constraints(attacker, &[Constraint::Intimidated]);
            state.add_constraint(defender, Constraint::OffBalance);
            state.adjust_crowd(attacker, 1);
        },
        on_fail: None,
    },
    // Status and persona play.
    MoveDef {
        id: MoveId::SeduceEntangle,
        allowed_sides: POWERLESS,
        requires_any_trait: &[traits::SEDUCTIVE_TRICKSTAR],
        signature_trait: None,
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 2,
        apply: |state, attacker, defender| {
            state.add_constraint(defender, Constraint::OffBalance);
            state.adjust_crowd(attacker, 1);
            state.adjust_credibility(defender, -0.5);
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::NormRefusal,
        allowed_sides: POWERLESS,
        requires_any_trait: &[traits::NONSEDUCTIVE_TRICKSTAR],
        signature_trait: None,
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 2,
        apply: |state, attacker, defender| {
            state.add_constraint(defender, Constraint::OffBalance);
            state.adjust_momentum(attacker, 1);
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::IdentityForgery,
        allowed_sides: BOTH,
        requires_any_trait: &[traits::SHAPESHIFTING_FOX, traits::SHAPESHIFTING_POWER],
        signature_trait: None,
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 2,
        apply: |state, attacker, defender| {
            // A convincing mask clears exposure and censorship pressure.
            state.remove_constraints(attacker, &[Constraint::Exposed, Constraint::Censored]);
            state.add_constraint(defender, Constraint::OffBalance);
            state.adjust_momentum(attacker, 1);
        },
        on_fail: Some(|state, attacker, _defender| {
            // Cover blown.
            state.add_constraint(attacker, Constraint::Exposed);
            state.adjust_momentum(attacker, -1);
        }),
    },
    MoveDef {
        id: MoveId::PicaroHustle,
        allowed_sides: POWERLESS,
        requires_any_trait: &[traits::PICARO],
        signature_trait: None,
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 1,
        apply: |state, attacker, defender| {
            state.adjust_momentum(attacker, 1);
            state.adjust_credibility(defender, -0.5);
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::HolyTruth,
        allowed_sides: POWERLESS,
        requires_any_trait: &[traits::HOLY_FOOL],
        signature_trait: None,
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 3,
        apply: |state, attacker, defender| {
            state.remove_constraints(attacker, &[Constraint::Censored]);
            state.adjust_credibility(defender, -1.0);
            state.adjust_crowd(attacker, 1);
        },
        on_fail: None,
    },
    // Rules, tasks, procedure.
    MoveDef {
        id: MoveId::RulesWeaponize,
        allowed_sides: POWERFUL,
        requires_any_trait: &[traits::RULES_LAWS],
        signature_trait: Some(traits::RULES_LAWS),
        counter_trait: Some(traits::RULES_LAWS),
        base: 0.55,
        cooldown_turns: 2,
        apply: |state, attacker, defender| {
            state.add_constraint(defender, Constraint::TrappedInRules);
            state.adjust_credibility(defender, -0.5);
            state.adjust_momentum(attacker, 1);
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::LiteralOverobey,
        allowed_sides: BOTH,
        requires_any_trait: &[traits::LITERALISM],
        signature_trait: Some(traits::LITERALISM),
        counter_trait: Some(traits::RULES_LAWS),
        base: 0.55,
        cooldown_turns: 2,
        apply: |state, attacker, defender| {
            // Against a defender already trapped, literalism cuts deeper;
            // otherwise it springs the trap.
            if state.has_constraint(defender, Constraint::TrappedInRules) {
                state.adjust_credibility(defender, -1.0);
                state.add_constraint(defender, Constraint::OffBalance);
            } else {
                state.add_constraint(defender, Constraint::TrappedInRules);
            }
            state.adjust_momentum(attacker, 1);
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::QuestControl,
        allowed_sides: POWERFUL,
        requires_any_trait: &[traits::QUESTS],
        signature_trait: None,
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 2,
        apply: |state, attacker, defender| {
            state.add_constraint(defender, Constraint::TrappedInRules);
            state.add_constraint(defender, Constraint::OffBalance);
            state.adjust_momentum(attacker, 1);
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::DelegateEnforce,
        allowed_sides: POWERFUL,
        requires_any_trait: &[traits::DELEGATION],
        signature_trait: None,
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 2,
        apply: |state, _attacker, defender| {
            state.add_constraint(defender, Constraint::Exposed);
            state.add_constraint(defender, Constraint::OffBalance);
            state.adjust_credibility(defender, -1.0);
        },
        on_fail: None,
    },
    // Disruption and chaos.
    MoveDef {
        id: MoveId::ChaosEscalate,
        allowed_sides: POWERLESS,
        requires_any_trait: &[traits::CHAOTIC_PRANKS],
        signature_trait: None,
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 1,
        apply: |state, _attacker, defender| {
            state.add_constraint(defender, Constraint::OffBalance);
            state.adjust_momentum(defender, -1);
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::SocialContamination,
        allowed_sides: POWERLESS,
        requires_any_trait: &[traits::SOCIAL_DISRUPTION],
        signature_trait: None,
        counter_trait: None,
        base: 0.55,
        cooldown_turns: 3,
        apply: |state, attacker, defender| {
            // Slow, ugly pressure.
            state.adjust_crowd(defender, -1);
            state.adjust_credibility(defender, -0.5);
            state.adjust_momentum(attacker, 1);
        },
        on_fail: None,
    },
    // Resources, visibility, tech, force.
    MoveDef {
        id: MoveId::MoneySolve,
        allowed_sides: POWERFUL,
        requires_any_trait: &[traits::MONEY],
        signature_trait: None,
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 2,
        apply: |state, attacker, defender| {
            // Money removes friction: buy off one's oldest constraint, or
            // apply soft pressure if unencumbered.
            if state.drop_first_constraint(attacker).is_some() {
                state.adjust_momentum(attacker, 1);
            } else {
                state.adjust_credibility(defender, -0.5);
                state.adjust_momentum(attacker, 1);
            }
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::MediaSpin,
        allowed_sides: POWERFUL,
        requires_any_trait: &[traits::MEDIA_PRESENCE],
        signature_trait: None,
        counter_trait: Some(traits::MEDIA_PRESENCE),
        base: 0.6,
        cooldown_turns: 2,
        apply: |state, attacker, defender| {
            state.adjust_crowd(defender, -1);
            state.add_constraint(defender, Constraint::Discredited);
            state.adjust_momentum(attacker, 1);
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::TechLeverage,
        allowed_sides: POWERFUL,
        requires_any_trait: &[traits::TECHNOLOGY],
        signature_trait: None,
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 2,
        apply: |state, attacker, defender| {
            state.add_constraint(defender, Constraint::Exposed);
            state.adjust_credibility(defender, -0.5);
            state.adjust_momentum(attacker, 1);
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::ObjectControl,
        allowed_sides: BOTH,
        requires_any_trait: &[traits::OBJECT_MANIPULATION],
        signature_trait: None,
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 1,
        apply: |state, _attacker, defender| {
            state.add_constraint(defender, Constraint::OffBalance);
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::MagicException,
        allowed_sides: POWERFUL,
        requires_any_trait: &[traits::MAGIC],
        signature_trait: None,
        counter_trait: None,
        base: 0.65,
        cooldown_turns: 3,
        apply: |state, attacker, defender| {
            state.add_constraint(defender, Constraint::OffBalance);
            state.adjust_credibility(defender, -1.0);
            state.adjust_momentum(attacker, 1);
        },
        on_fail: None,
    },
    MoveDef {
        id: MoveId::ImpliedThreat,
        allowed_sides: POWERFUL,
        requires_any_trait: &[traits::VIOLENCE],
        signature_trait: None,
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 2,
        apply: |state, attacker, defender| {
            state.add_constraint(defender, Constraint::Intimidated);
            state.adjust_crowd(defender, -1);
            state.adjust_momentum(defender, -1);
            state.adjust_momentum(attacker, 1);
        },
        on_fail: None,
    },
    // Border life and liminality.
    MoveDef {
        id: MoveId::BorderAdvantage,
        allowed_sides: BOTH,
        requires_any_trait: &[traits::LIMINALITY],
        signature_trait: Some(traits::QUICK_TONGUE),
        counter_trait: None,
        base: 0.6,
        cooldown_turns: 2,
        apply: |state, attacker, defender| {
            // Slip out of procedure and censorship, destabilize the other side.
            state.remove_constraints(
                attacker,
                &[Constraint::TrappedInRules, Constraint::Censored],
            );
            state.add_constraint(defender, Constraint::OffBalance);
            state.adjust_momentum(attacker, 1);
        },
        on_fail: Some(|state, attacker, _defender| {
            state.adjust_momentum(attacker, -1);
        }),
    },
];

/// Look up a move definition by id.
pub fn move_def(id: MoveId) -> Option<&'static MoveDef> {
    CATALOG.iter().find(|def| def.id == id)
}

/// Whether a trait set holds a specific trait id.
pub fn holds_trait(traits: &[String], trait_id: &str) -> bool {
    traits.iter().any(|t| t == trait_id)
}

/// Whether a trait set satisfies an any-of gate (an empty gate passes).
pub fn satisfies_gate(traits: &[String], gate: &[&str]) -> bool {
    gate.is_empty() || gate.iter().any(|id| holds_trait(traits, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use td_core::BattleConfig;

    fn state() -> BattleState {
        BattleState::new(&BattleConfig::default())
    }

    fn traits_of(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn catalog_is_complete_and_ordered() {
        assert_eq!(CATALOG.len(), MoveId::all().len());
        for (def, id) in CATALOG.iter().zip(MoveId::all()) {
            assert_eq!(def.id, *id);
        }
        for id in MoveId::all() {
            assert!(move_def(*id).is_some(), "missing definition for {id:?}");
        }
    }

    #[test]
    fn bases_are_probabilities() {
        for def in CATALOG {
            assert!(def.base > 0.0 && def.base < 1.0, "{:?}", def.id);
            assert!(!def.allowed_sides.is_empty(), "{:?}", def.id);
        }
    }

    #[test]
    fn persuade_frame_effect() {
        let mut s = state();
        let def = move_def(MoveId::PersuadeFrame).unwrap();
        (def.apply)(&mut s, Side::Powerless, Side::Powerful);
        assert_eq!(s.credibility[Side::Powerful], 2.5);
        assert_eq!(s.momentum[Side::Powerless], 1);
        assert_eq!(s.crowd[Side::Powerless], 1);
    }

    #[test]
    fn laugh_disarm_clears_intimidation() {
        let mut s = state();
        s.add_constraint(Side::Powerless, Constraint::Intimidated);
        let def = move_def(MoveId::LaughDisarm).unwrap();
        (def.apply)(&mut s, Side::Powerless, Side::Powerful);
        assert!(!s.has_constraint(Side::Powerless, Constraint::Intimidated));
        assert!(s.has_constraint(Side::Powerful, Constraint::OffBalance));
    }

    #[test]
    fn identity_forgery_failure_exposes() {
        let mut s = state();
        let def = move_def(MoveId::IdentityForgery).unwrap();
        (def.on_fail.unwrap())(&mut s, Side::Powerful, Side::Powerless);
        assert!(s.has_constraint(Side::Powerful, Constraint::Exposed));
        assert_eq!(s.momentum[Side::Powerful], -1);
    }

    #[test]
    fn literal_overobey_sharpens_against_trapped_defender() {
        let def = move_def(MoveId::LiteralOverobey).unwrap();

        let mut fresh = state();
        (def.apply)(&mut fresh, Side::Powerless, Side::Powerful);
        assert!(fresh.has_constraint(Side::Powerful, Constraint::TrappedInRules));
        assert_eq!(fresh.credibility[Side::Powerful], 3.0);

        let mut trapped = state();
        trapped.add_constraint(Side::Powerful, Constraint::TrappedInRules);
        (def.apply)(&mut trapped, Side::Powerless, Side::Powerful);
        assert_eq!(trapped.credibility[Side::Powerful], 2.0);
        assert!(trapped.has_constraint(Side::Powerful, Constraint::OffBalance));
    }

    #[test]
    fn money_solve_buys_off_own_constraint_first() {
        let def = move_def(MoveId::MoneySolve).unwrap();

        let mut encumbered = state();
        encumbered.add_constraint(Side::Powerful, Constraint::Censored);
        (def.apply)(&mut encumbered, Side::Powerful, Side::Powerless);
        assert!(encumbered.constraints[Side::Powerful].is_empty());
        assert_eq!(encumbered.credibility[Side::Powerless], 3.0);
        assert_eq!(encumbered.momentum[Side::Powerful], 1);

        let mut free = state();
        (def.apply)(&mut free, Side::Powerful, Side::Powerless);
        assert_eq!(free.credibility[Side::Powerless], 2.5);
        assert_eq!(free.momentum[Side::Powerful], 1);
    }

    #[test]
    fn border_advantage_slips_the_trap() {
        let mut s = state();
        s.add_constraint(Side::Powerless, Constraint::TrappedInRules);
        s.add_constraint(Side::Powerless, Constraint::Censored);
        let def = move_def(MoveId::BorderAdvantage).unwrap();
        (def.apply)(&mut s, Side::Powerless, Side::Powerful);
        assert!(s.constraints[Side::Powerless].is_empty());
        assert!(s.has_constraint(Side::Powerful, Constraint::OffBalance));
    }

    #[test]
    fn effects_respect_clamps_from_extreme_states() {
        for def in CATALOG {
            for attacker in [Side::Powerless, Side::Powerful] {
                let mut s = state();
                // Drive every stat to its worst edge first.
                for side in Side::all() {
                    s.adjust_momentum(*side, -100);
                    s.adjust_credibility(*side, -100.0);
                    s.adjust_crowd(*side, -100);
                    for c in Constraint::all() {
                        s.add_constraint(*side, *c);
                    }
                }
                (def.apply)(&mut s, attacker, attacker.opponent());
                if let Some(on_fail) = def.on_fail {
                    on_fail(&mut s, attacker, attacker.opponent());
                }
                for side in Side::all() {
                    assert!((-5..=5).contains(&s.momentum[*side]), "{:?}", def.id);
                    assert!((0.0..=5.0).contains(&s.credibility[*side]), "{:?}", def.id);
                    assert!((-3..=3).contains(&s.crowd[*side]), "{:?}", def.id);
                    let set = &s.constraints[*side];
                    let unique: std::collections::HashSet<_> = set.iter().collect();
                    assert_eq!(set.len(), unique.len(), "{:?}", def.id);
                }
            }
        }
    }

    #[test]
    fn trait_helpers() {
        let set = traits_of(&[traits::LAUGHTER, traits::PICARO]);
        assert!(holds_trait(&set, traits::LAUGHTER));
        assert!(!holds_trait(&set, traits::MAGIC));
        assert!(satisfies_gate(&set, &[traits::MAGIC, traits::PICARO]));
        assert!(!satisfies_gate(&set, &[traits::MAGIC, traits::MONEY]));
        assert!(satisfies_gate(&set, &[]));
    }
}
