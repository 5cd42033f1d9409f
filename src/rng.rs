//! Random draws used by the simulation.
//!
//! Chickens never touch a concrete generator; they ask a [`RandomSource`] for a
//! uniform integer below some bound. Any `rand` generator is a source, and
//! [`ScriptedRandom`] replays a fixed sequence so outcomes can be asserted.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// Uniform draw from `0..bound`. A zero bound yields zero.
    fn below(&mut self, bound: u32) -> u32;
}

impl<R: RngCore> RandomSource for R {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.gen_range(0..bound)
    }
}

/// Generator for a run: reproducible when a seed is given, entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Replays a fixed list of draws, wrapping around when exhausted.
///
/// Each value is clamped to `bound - 1`, so a script of `[99]` means "always the
/// highest possible outcome" whatever the bound.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 || self.values.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.min(bound - 1)
    }
}
