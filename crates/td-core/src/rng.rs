//! Scripted randomness for deterministic tests.
//!
//! Production code draws from a seeded `StdRng`. Tests that need exact
//! control over each uniform draw (success rolls, jitter) use
//! `ScriptedRng`, which replays a fixed sequence of floats.

use rand::RngCore;

/// Scale factor for the 53-bit fraction `Rng::random::<f64>()` reads from
/// the top of `next_u64`.
const F64_SCALE: f64 = (1u64 << 53) as f64;

/// An [`RngCore`] that cycles through a fixed sequence of uniform floats.
///
/// Each scripted value must lie in `[0, 1)`. A call to
/// `Rng::random::<f64>()` yields the next scripted value (to within one
/// ulp); the sequence wraps around when exhausted.
///
/// Integer-range sampling (`random_range`) consumes the same word stream
/// but maps onto it differently; scripted tests should stick to plain
/// uniform-float draws.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRng {
    /// Create a scripted source replaying `values` in order, cyclically.
    /// Values must lie in `[0, 1)` and the sequence must be non-empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted sequence must be non-empty");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "scripted values must lie in [0, 1)"
        );
        Self { values, next: 0 }
    }

    /// Create a scripted source that returns `value` on every draw.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        ((value * F64_SCALE) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
