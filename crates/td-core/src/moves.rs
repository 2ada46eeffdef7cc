//! Move identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog move.
///
/// The set is closed; the catalog in the engine crate defines gates,
/// probabilities, and effects for every variant. Unit variants serialize
/// as strings so they can key cooldown maps in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveId {
    /// Reframe the encounter so one's behavior reads as justified.
    PersuadeFrame,
    /// Laugh first and drain a threat of its seriousness.
    LaughDisarm,
    /// Entangle the opponent in manufactured intimacy.
    SeduceEntangle,
    /// Refuse the social script so completely no response fits.
    NormRefusal,
    /// Wear a borrowed identity with convincing detail.
    IdentityForgery,
    /// Borrow authority just long enough to overrule a decision.
    PicaroHustle,
    /// Say the forbidden truth as a blessing.
    HolyTruth,
    /// Start a procedure nobody can stop without breaking it.
    RulesWeaponize,
    /// Obey an instruction so literally the outcome becomes unusable.
    LiteralOverobey,
    /// Bind the opponent into an open-ended obligation.
    QuestControl,
    /// Let others enforce the decision while staying uninvolved.
    DelegateEnforce,
    /// Start tiny disorder that snowballs into farce.
    ChaosEscalate,
    /// Make a shared space unusable until routines break down.
    SocialContamination,
    /// Turn resistance into a price tag and pay it.
    MoneySolve,
    /// Flood attention so rival narratives cannot gain traction.
    MediaSpin,
    /// Use privileged information to undermine the opponent.
    TechLeverage,
    /// Physically rearrange the scene so one option disappears.
    ObjectControl,
    /// Do what humans cannot; the usual objections stop applying.
    MagicException,
    /// Rest a hand on a weapon and keep talking calmly.
    ImpliedThreat,
    /// Operate where categories blur and enforcement hesitates.
    BorderAdvantage,
}

impl MoveId {
    /// All twenty move identifiers in catalog order.
    pub fn all() -> &'static [Self] {
        &[
            Self::PersuadeFrame,
            Self::LaughDisarm,
            Self::SeduceEntangle,
            Self::NormRefusal,
            Self::IdentityForgery,
            Self::PicaroHustle,
            Self::HolyTruth,
            Self::RulesWeaponize,
            Self::LiteralOverobey,
            Self::QuestControl,
            Self::DelegateEnforce,
            Self::ChaosEscalate,
            Self::SocialContamination,
            Self::MoneySolve,
            Self::MediaSpin,
            Self::TechLeverage,
            Self::ObjectControl,
            Self::MagicException,
            Self::ImpliedThreat,
            Self::BorderAdvantage,
        ]
    }

    /// Human-readable label used by narration and the CLI.
    pub fn label(self) -> &'static str {
        match self {
            Self::PersuadeFrame => "Persuasive Framing",
            Self::LaughDisarm => "Disarming Laughter",
            Self::SeduceEntangle => "Seductive Entanglement",
            Self::NormRefusal => "Norm Refusal",
            Self::IdentityForgery => "Identity Forgery",
            Self::PicaroHustle => "Picaro Hustle",
            Self::HolyTruth => "Holy Truth",
            Self::RulesWeaponize => "Weaponized Rules",
            Self::LiteralOverobey => "Literal Over-Obedience",
            Self::QuestControl => "Quest Control",
            Self::DelegateEnforce => "Delegated Enforcement",
            Self::ChaosEscalate => "Escalating Chaos",
            Self::SocialContamination => "Social Contamination",
            Self::MoneySolve => "Money Solves It",
            Self::MediaSpin => "Media Spin",
            Self::TechLeverage => "Technical Leverage",
            Self::ObjectControl => "Object Control",
            Self::MagicException => "Magical Exception",
            Self::ImpliedThreat => "Implied Threat",
            Self::BorderAdvantage => "Border Advantage",
        }
    }
}

impl std::fmt::Display for MoveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
