//! RNG module - injectable random sources for grid refills
//!
//! The engine never owns a process-wide RNG. Every operation that draws candies
//! takes a `&mut impl RandomSource`, so sessions can be replayed from a seed and
//! tests can script exact refills.
//!
//! Provides a simple LCG for gameplay and a scripted source for deterministic tests.

/// A source of uniform draws in `[0, max)`.
pub trait RandomSource {
    /// Generate random value in range [0, max). `max` is never 0.
    fn next_range(&mut self, max: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG have short periods; use the high half.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Each scripted value is reduced modulo `max`, so a script of candy indices
/// (0-based into the alphabet) produces exactly those candies.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0);
        }
        Self { values, next: 0 }
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedSource {
    fn next_range(&mut self, max: u32) -> u32 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v % max
    }
}
