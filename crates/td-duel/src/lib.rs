//! Duel session runner for Trickster Duel.
//!
//! `Duel` composes the engine and the narrator into a full battle loop:
//! sides alternate by turn parity, the policy picks each move (falling
//! back to the configured default when nothing is legal), every resolved
//! turn is narrated into a log entry, and the terminal check concludes the
//! session with a victory narration.

pub mod error;
pub mod session;

pub use error::{DuelError, DuelResult};
pub use session::{Duel, TurnReport};
