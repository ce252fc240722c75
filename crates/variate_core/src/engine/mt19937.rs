//! MT19937 twisted-feedback generator.
//!
//! The Mersenne Twister has a period of 2^19937 - 1. A badly initialised
//! state can take several hundred thousand steps to recover (bits dominated
//! by zeros or ones), so the state is always expanded through
//! [`diversify`](crate::seeding::diversify) rather than copied from the seed.
//!
//! Algorithm: M. Matsumoto and T. Nishimura, "Mersenne Twister: A
//! 623-dimensionally equidistributed uniform pseudo-random number generator",
//! ACM TOMACS 8(1), 1998.

use std::fmt;

use super::{BitEngine, WORD_SCALE};
use crate::seeding::{diversify, wall_clock_seed};

/// Number of words in the state vector.
pub const STATE_WORDS: usize = 624;

/// Offset of the middle word mixed into each twist.
const SHIFT: usize = 397;

/// Twist matrix constant.
const MATRIX_A: u32 = 0x9908_b0df;

const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// The MT19937 engine.
///
/// Owns a 624-word state vector and a cursor. The cursor reaching
/// [`STATE_WORDS`] triggers in-place regeneration of the whole vector before
/// the next word is consumed.
///
/// Uniforms are `(w + 0.5) / 2^32` for a tempered word `w`, so they are
/// never exactly `0.0` or `1.0`.
///
/// # Examples
///
/// ```rust
/// use variate_core::{BitEngine, Mt19937Engine};
///
/// let mut engine = Mt19937Engine::new(5489);
/// assert_eq!(engine.next_word(), 3_499_211_612);
/// ```
pub struct Mt19937Engine {
    state: [u32; STATE_WORDS],
    cursor: usize,
    seed: u32,
}

impl Mt19937Engine {
    /// Creates an engine seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        let mut engine = Self {
            state: [0; STATE_WORDS],
            cursor: STATE_WORDS,
            seed,
        };
        engine.set_seed(seed);
        engine
    }

    /// Creates an engine seeded from the wall clock.
    pub fn from_wall_clock() -> Self {
        Self::new(wall_clock_seed())
    }

    /// Regenerates all 624 words in place.
    fn twist(&mut self) {
        let mt = &mut self.state;
        for k in 0..STATE_WORDS {
            let y = (mt[k] & UPPER_MASK) | (mt[(k + 1) % STATE_WORDS] & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            mt[k] = mt[(k + SHIFT) % STATE_WORDS] ^ (y >> 1) ^ mag;
        }
        self.cursor = 0;
    }

    #[inline]
    fn temper(mut y: u32) -> u32 {
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }
}

impl BitEngine for Mt19937Engine {
    fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
        diversify(seed, &mut self.state);
        self.cursor = STATE_WORDS;
        tracing::debug!(engine = "MT19937", seed, "engine seeded");
    }

    #[inline]
    fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    fn name(&self) -> &'static str {
        "MT19937"
    }

    #[inline]
    fn next_word(&mut self) -> u32 {
        if self.cursor >= STATE_WORDS {
            self.twist();
        }
        let y = self.state[self.cursor];
        self.cursor += 1;
        Self::temper(y)
    }

    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (f64::from(self.next_word()) + 0.5) * WORD_SCALE
    }
}

impl fmt::Debug for Mt19937Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937Engine")
            .field("seed", &self.seed)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_draw_triggers_twist() {
        let mut engine = Mt19937Engine::new(1);
        assert_eq!(engine.cursor, STATE_WORDS);
        engine.next_word();
        assert_eq!(engine.cursor, 1);
    }

    #[test]
    fn test_cursor_wraps_after_full_block() {
        let mut engine = Mt19937Engine::new(1);
        for _ in 0..STATE_WORDS {
            engine.next_word();
        }
        assert_eq!(engine.cursor, STATE_WORDS);
        engine.next_word();
        assert_eq!(engine.cursor, 1);
    }

    #[test]
    fn test_temper_fixes_zero() {
        assert_eq!(Mt19937Engine::temper(0), 0);
    }

    #[test]
    fn test_uniform_is_offset_word() {
        let mut a = Mt19937Engine::new(99);
        let mut b = Mt19937Engine::new(99);
        for _ in 0..100 {
            let w = a.next_word();
            let u = b.next_uniform();
            assert_eq!(u, (w as f64 + 0.5) / 4_294_967_296.0);
        }
    }

    #[test]
    fn test_extreme_words_stay_inside_open_interval() {
        let lo = (0.0 + 0.5) * WORD_SCALE;
        let hi = (u32::MAX as f64 + 0.5) * WORD_SCALE;
        assert!(lo > 0.0);
        assert!(hi < 1.0);
    }

    #[test]
    fn test_debug_omits_state() {
        let engine = Mt19937Engine::new(3);
        let text = format!("{:?}", engine);
        assert!(text.contains("seed: 3"));
        assert!(!text.contains("state"));
    }
}
