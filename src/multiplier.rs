//! Multiplier: the scrambling constant `z` for multiplicative hashing.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Odd 32-bit multiplier.
///
/// The low bit is always forced on: with an even `z` the product no longer
/// depends on the top bit of the hash code.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Multiplier(u32);

impl Multiplier {
    pub const fn new(z: u32) -> Self {
        Multiplier(z | 1)
    }

    /// Draw a multiplier from `rng`.
    pub fn from_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.next_u32())
    }

    /// Draw a multiplier from a fresh OS-seeded generator.
    pub fn random() -> Self {
        Self::from_rng(&mut SmallRng::from_os_rng())
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}
