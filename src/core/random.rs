//! Random source used by every randomized branch of the session.
//!
//! The session never calls into `rand` directly. It draws unit values from a
//! [`RandomSource`] and derives indices, ranges and coin flips from them, so a
//! test can script the exact sequence of outcomes.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource: Send {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index into a slice of `len` elements. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let raw = (self.unit() * len as f64).floor() as usize;
        raw.min(len.saturating_sub(1))
    }

    /// Uniform integer in the closed range `[lo, hi]`.
    fn int_in(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo + 1) as f64;
        let offset = (self.unit() * span).floor() as i64;
        (lo + offset).min(hi)
    }

    /// Uniform float in `[lo, hi)`.
    fn float_in(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.unit() * (hi - lo)
    }

    fn coin(&mut self) -> bool {
        self.unit() < 0.5
    }
}

/// Picks one element of a non-empty slice.
pub fn pick<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    &items[rng.index(items.len())]
}

/// Production source backed by [`StdRng`].
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when a seed is given, entropy-backed otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of unit values, then repeats `fallback` forever.
///
/// Values are clamped into `[0, 1)` so scripted draws behave like real ones.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    queue: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRandom {
    /// Fallback used once the script is exhausted: a successful turn with no
    /// low-credit nudge.
    pub const DEFAULT_FALLBACK: f64 = 0.99;

    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            queue: values.into_iter().collect(),
            fallback: Self::DEFAULT_FALLBACK,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self {
            queue: VecDeque::new(),
            fallback: value,
        }
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn push(&mut self, value: f64) {
        self.queue.push_back(value);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        let value = self.queue.pop_front().unwrap_or(self.fallback);
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_values_replay_in_order_then_fall_back() {
        let mut rng = ScriptedRandom::new([0.1, 0.2]).with_fallback(0.7);
        assert_eq!(rng.unit(), 0.1);
        assert_eq!(rng.unit(), 0.2);
        assert_eq!(rng.unit(), 0.7);
        assert_eq!(rng.unit(), 0.7);
    }

    #[test]
    fn scripted_unit_never_reaches_one() {
        let mut rng = ScriptedRandom::constant(1.0);
        assert!(rng.unit() < 1.0);
        assert_eq!(rng.index(4), 3);
    }

    #[test]
    fn int_in_covers_both_bounds() {
        let mut low = ScriptedRandom::constant(0.0);
        let mut high = ScriptedRandom::constant(0.999);
        assert_eq!(low.int_in(75, 98), 75);
        assert_eq!(high.int_in(75, 98), 98);
    }

    #[test]
    fn int_in_with_degenerate_range_returns_lower_bound() {
        let mut rng = ScriptedRandom::constant(0.5);
        assert_eq!(rng.int_in(5, 5), 5);
        assert_eq!(rng.int_in(9, 3), 9);
    }

    #[test]
    fn pick_selects_by_scaled_unit() {
        let items = ["a", "b", "c", "d"];
        let mut rng = ScriptedRandom::new([0.0, 0.26, 0.5, 0.99]);
        let picked: Vec<&str> = (0..4).map(|_| *pick(&mut rng, &items)).collect();
        assert_eq!(picked, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        for _ in 0..16 {
            let value = a.unit();
            assert_eq!(value, b.unit());
            assert!((0.0..1.0).contains(&value));
        }
    }
}
