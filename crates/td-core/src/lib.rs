//! Core types for the Trickster Duel battle simulator.
//!
//! Provides the two battle sides, the closed constraint and move-identifier
//! sets, the clamped battle state aggregate, battle configuration with
//! variant toggles, and a scripted RNG for deterministic tests.

pub mod config;
pub mod constraint;
pub mod moves;
pub mod outcome;
pub mod rng;
pub mod side;
pub mod state;

pub use config::{BattleConfig, RepeatPolicy, TieBreak};
pub use constraint::Constraint;
pub use moves::MoveId;
pub use outcome::Outcome;
pub use rng::ScriptedRng;
pub use side::Side;
pub use state::{BattleState, PerSide, TurnRecord};
