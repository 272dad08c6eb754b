//! Operating system backed die roller

use rand::rngs::OsRng;
use rand::Rng;

use crate::domain::traits::RandomSource;

/// Rolls dice with the operating system's CSPRNG.
///
/// Holds no state of its own, so any number of invocations can roll at
/// once without sharing a generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        OsRng.gen_range(1..=sides)
    }
}
