//! Action and effect template pools.
//!
//! `{A}` and `{B}` stand for the attacker and defender; the remaining
//! placeholders are flavor tags resolved by [`crate::words::fill_flavor`].

use td_core::MoveId;

/// Action templates for a move.
pub fn action_templates(move_id: MoveId) -> &'static [&'static str] {
    match move_id {
        MoveId::PersuadeFrame => &[
            "{A} persuades everyone that what just happened was perfectly reasonable.",
            "{A} offers a \"fair compromise\" that quietly locks in {A}'s outcome.",
            "{A} retells {B}'s objection until it sounds like agreement.",
        ],
        MoveId::LaughDisarm => &[
            "{A} laughs first, and {B}'s threat suddenly feels performative.",
            "{A} turns the tense moment into a joke {crowd} repeats instead of resolving.",
            "{A} mimics {B} playfully until authority loses its edge.",
        ],
        MoveId::SeduceEntangle => &[
            "{A} lets {B} feel like the pursuer, then sets the terms from that position.",
            "{A} whispers \"just between us\" and {B} starts protecting the secret.",
            "{A} asks for {task} that quietly establishes a pattern of compliance.",
        ],
        MoveId::NormRefusal => &[
            "{A} ignores the expected script so completely that no standard response fits.",
            "{A} breaks etiquette openly, making punishment look petty and overeager.",
            "{A} does the embarrassing thing first, and shame stops working.",
        ],
        MoveId::IdentityForgery => &[
            "{A} arrives as {identity}, with details so convincing that checking feels rude.",
            "{A} wears the signals of an innocent person and everyone self-enforces the illusion.",
            "{A} appears to be the person in charge, and the room behaves accordingly.",
        ],
        MoveId::PicaroHustle => &[
            "{A} borrows authority for ten minutes, just long enough to overrule {B}.",
            "{A} leaves behind {story} that keeps {B} busy while {A} moves on.",
        ],
        MoveId::HolyTruth => &[
            "{A} says the forbidden truth out loud, as a blessing, and the room must face it.",
            "{A} humiliates himself with such dignity that {B} is painted as the villain.",
        ],
        MoveId::RulesWeaponize => &[
            "{A} starts a process nobody can stop without breaking protocol.",
            "{A} wins on a technicality that looks perfectly fair on paper.",
            "{A} has {authority} open a file on {B} that can only ever grow.",
        ],
        MoveId::LiteralOverobey => &[
            "{A} follows {rule} so precisely the outcome becomes unusable.",
            "{A} demands written confirmation for every step until progress stalls.",
        ],
        MoveId::QuestControl => &[
            "{A} sends {B} on an errand that leads nowhere by design.",
            "{A} adds one last requirement just as {B} seems to succeed.",
        ],
        MoveId::DelegateEnforce => &[
            "{A} lets {agents} enforce the decision while remaining officially uninvolved.",
            "{A} is absent from the scene; {agents} carry out the scheme regardless.",
        ],
        MoveId::ChaosEscalate => &[
            "{A} starts a tiny disorder that snowballs until routines collapse.",
            "{A} adds one more absurd step and order tips into farce.",
        ],
        MoveId::SocialContamination => &[
            "{A} introduces a stench nobody can ignore or remove.",
            "{A} fouls the shared space until every routine breaks down.",
        ],
        MoveId::MoneySolve => &[
            "{A} turns resistance into a price tag, then pays it.",
            "{A} offers compensation that makes the problem disappear quietly.",
        ],
        MoveId::MediaSpin => &[
            "{A} floods the channels with breaking news so {B}'s story cannot gain traction.",
            "{A} performs transparency for {crowd} while the real decision happens off-screen.",
        ],
        MoveId::TechLeverage => &[
            "{A} uses {device} to learn what no one else knows, and aims it at {B}.",
        ],
        MoveId::ObjectControl => &[
            "{A} physically changes {object} so the situation cannot return to what it was.",
            "{A} rearranges {object}, and one of {B}'s options quietly disappears.",
        ],
        MoveId::MagicException => &[
            "{A} does what humans cannot, and the usual objections stop applying.",
            "{A} changes one fact of the world; afterwards, everyone must act differently.",
        ],
        MoveId::ImpliedThreat => &[
            "{A} rests a hand on {weapon} and keeps talking calmly.",
            "{A} mentions what happened to {precedent} and lets the silence work.",
            "{A} makes refusal feel expensive without ever raising a voice.",
        ],
        MoveId::BorderAdvantage => &[
            "{A} operates where categories blur, and enforcement hesitates.",
            "{A} moves through back channels and informal favors where {rule} thins out.",
            "{A} brokers passage between groups that distrust each other, editing messages as needed.",
        ],
    }
}

/// Effect templates used when the roll succeeded.
pub const SUCCESS_EFFECTS: &[&str] = &[
    "It lands. {B} is now {constraint}.",
    "Success: {B} gives ground on {stat}.",
    "{crowd} shifts toward {A}.",
];

/// Effect templates used when the roll failed.
pub const FAIL_EFFECTS: &[&str] = &[
    "It doesn't stick. {B} stays steady.",
    "The attempt backfires, and {A} looks worse for trying.",
    "{crowd} hesitates. Nobody commits.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_move_has_templates() {
        for id in MoveId::all() {
            let pool = action_templates(*id);
            assert!(!pool.is_empty(), "no templates for {id:?}");
            for template in pool {
                assert!(template.contains("{A}"), "{id:?}: {template:?}");
            }
        }
    }

    #[test]
    fn effect_pools_are_nonempty() {
        assert!(!SUCCESS_EFFECTS.is_empty());
        assert!(!FAIL_EFFECTS.is_empty());
    }
}
