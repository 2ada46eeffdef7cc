//! Template-driven narration for Trickster Duel.
//!
//! Renders a resolved turn into an action line and an effect line, and a
//! concluded battle into a three-sentence victory text, by sampling
//! templates and flavor words from fixed pools. Pure with respect to
//! battle state; all randomness comes from the injected generator.

pub mod templates;
pub mod turn;
pub mod victory;
pub mod words;

pub use turn::{TurnNarration, narrate_turn};
pub use victory::{Victory, VictoryKind, compose_victory};
