//! Seeding helpers shared by both engines.
//!
//! Both engines expand a single 32-bit seed into their state array with the
//! Knuth-style multiplier recurrence
//! `w[i] = 1812433253 * (w[i-1] ^ (w[i-1] >> 30)) + i` (mod 2^32).
//! Because the index is added at every step, the expanded state is never the
//! all-zero vector, even for `seed == 0`.

/// Multiplier of the state-diversification recurrence (Knuth TAOCP Vol. 2, p. 106).
pub const DIVERSIFY_MULTIPLIER: u32 = 1_812_433_253;

/// Expands `seed` into `state` using the diversification recurrence.
///
/// `state[0]` receives the seed verbatim; every later word depends on the
/// whole of its predecessor, so high seed bits reach the low bits of later
/// words. An empty slice is left untouched.
///
/// # Examples
///
/// ```rust
/// use variate_core::seeding::diversify;
///
/// let mut state = [0u32; 4];
/// diversify(0, &mut state);
/// assert_eq!(state[0], 0);
/// assert_eq!(state[1], 1);
/// assert!(state.iter().any(|&w| w != 0));
/// ```
#[inline]
pub fn diversify(seed: u32, state: &mut [u32]) {
    let Some(first) = state.first_mut() else {
        return;
    };
    *first = seed;
    for i in 1..state.len() {
        let prev = state[i - 1];
        state[i] = DIVERSIFY_MULTIPLIER
            .wrapping_mul(prev ^ (prev >> 30))
            .wrapping_add(i as u32);
    }
}

/// Returns a seed derived from the wall clock.
///
/// Seconds since the Unix epoch, truncated to 32 bits. Two calls within the
/// same second return the same seed; callers needing distinct streams should
/// seed explicitly.
pub fn wall_clock_seed() -> u32 {
    chrono::Utc::now().timestamp() as u32
}
