//! `rand_core` implementations for the engines.
//!
//! `next_u32` yields the engine's raw output word, so an engine driving a
//! `rand_distr` sampler consumes the same stream as [`BitEngine::next_uniform`].
//! The native uniform mapping is unaffected.

use rand_core::{impls, Error, RngCore, SeedableRng};

use super::{AnyEngine, BitEngine, Mt19937Engine, Well1024aEngine};

macro_rules! impl_rand_core {
    ($engine:ty) => {
        impl RngCore for $engine {
            #[inline]
            fn next_u32(&mut self) -> u32 {
                self.next_word()
            }

            #[inline]
            fn next_u64(&mut self) -> u64 {
                impls::next_u64_via_u32(self)
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }
    };
}

impl_rand_core!(Mt19937Engine);
impl_rand_core!(Well1024aEngine);
impl_rand_core!(AnyEngine);

impl SeedableRng for Mt19937Engine {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Uses the low 32 bits of `state` as the seed.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

impl SeedableRng for Well1024aEngine {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Uses the low 32 bits of `state` as the seed.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
