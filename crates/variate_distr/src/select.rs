//! Uniform selection from collections.
//!
//! Thin helpers over [`int_from_to`](crate::distributions::int_from_to) for
//! picking an element of a slice or an exact-size iterator. Empty inputs
//! yield `None`.

use variate_core::BitEngine;

use crate::distributions::int_from_to;

/// Uniform index in `0..len`, or `None` when `len == 0`.
pub fn random_index<E: BitEngine + ?Sized>(engine: &mut E, len: usize) -> Option<usize> {
    let last = i64::try_from(len.checked_sub(1)?).ok()?;
    int_from_to(engine, 0, last).ok().map(|i| i as usize)
}

/// Mutable reference to a uniformly chosen element.
///
/// # Examples
///
/// ```rust
/// use variate_core::Mt19937Engine;
/// use variate_distr::select::random_from;
///
/// let mut engine = Mt19937Engine::new(1);
/// let mut agents = vec![10, 20, 30];
/// if let Some(agent) = random_from(&mut engine, &mut agents) {
///     *agent += 1;
/// }
/// assert_eq!(agents.iter().sum::<i32>(), 61);
/// ```
pub fn random_from<'a, E, T>(engine: &mut E, items: &'a mut [T]) -> Option<&'a mut T>
where
    E: BitEngine + ?Sized,
{
    let index = random_index(engine, items.len())?;
    items.get_mut(index)
}

/// Shared reference to a uniformly chosen element.
pub fn random_ref<'a, E, T>(engine: &mut E, items: &'a [T]) -> Option<&'a T>
where
    E: BitEngine + ?Sized,
{
    let index = random_index(engine, items.len())?;
    items.get(index)
}

/// Uniformly chosen item of an exact-size iterator.
///
/// Advances the iterator to the chosen position; items after it are not
/// visited.
pub fn random_from_iter<E, I>(engine: &mut E, items: I) -> Option<I::Item>
where
    E: BitEngine + ?Sized,
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    let mut iter = items.into_iter();
    let index = random_index(engine, iter.len())?;
    iter.nth(index)
}
