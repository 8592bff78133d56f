//! Sources of randomness for the randomized operators.
//!
//! Every randomized operator in this crate is a pure function of the sequence of draws it takes
//! from its [`RandomSource`], so seeding the source makes the result reproducible.
use rand::Rng;

use crate::error::PermError;
use crate::El;

/// Uniform draws used by randomized operators.
pub trait RandomSource {
    /// A uniformly distributed integer in `0..bound`. `bound` must be positive.
    fn next_uniform_int(&mut self, bound: usize) -> usize;

    /// A uniformly distributed float in `[0, 1)`.
    fn next_uniform_float(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_uniform_int(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn next_uniform_float(&mut self) -> f64 {
        self.gen()
    }
}

/// A real number in the closed interval `[0, 1]`.
///
/// Used as the intensity of a mutation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct UnitInterval(f64);

impl UnitInterval {
    pub fn new(value: f64) -> Result<UnitInterval, PermError> {
        if (0.0..=1.0).contains(&value) {
            Ok(UnitInterval(value))
        } else {
            Err(PermError::NotInUnitInterval(value))
        }
    }

    /// A uniformly random value, drawn as a single float.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> UnitInterval {
        UnitInterval(rng.next_uniform_float())
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for UnitInterval {
    type Error = PermError;

    fn try_from(value: f64) -> Result<UnitInterval, PermError> {
        UnitInterval::new(value)
    }
}

/// Shuffle a slice uniformly at random.
///
/// Walks `i` from `len` down to `2`, drawing `j` in `0..i` and swapping positions `i - 1` and
/// `j`. This takes exactly `len - 1` draws, none for slices of length at most one.
pub fn shuffle<T, R: RandomSource + ?Sized>(values: &mut [T], rng: &mut R) {
    for i in (2..=values.len()).rev() {
        let j = rng.next_uniform_int(i);
        values.swap(i - 1, j);
    }
}

/// Two distinct uniformly random indices into `0..len`.
///
/// The second index is redrawn until it differs from the first. Returns `None` without drawing
/// when `len < 2`.
pub fn distinct_pair<R: RandomSource + ?Sized>(len: usize, rng: &mut R) -> Option<(usize, usize)> {
    if len < 2 {
        return None;
    }
    let first = rng.next_uniform_int(len);
    loop {
        let second = rng.next_uniform_int(len);
        if second != first {
            return Some((first, second));
        }
    }
}

/// `k` distinct indices drawn uniformly from `0..len` without replacement, in draw order.
///
/// Runs the first `k` steps of a forward Fisher–Yates pass over `0..len`, taking exactly `k`
/// draws. `k` is clamped to `len`.
pub fn sample_indices<R: RandomSource + ?Sized>(len: usize, k: usize, rng: &mut R) -> Vec<El> {
    let k = k.min(len);
    let mut pool: Vec<El> = (0..len).collect();
    for i in 0..k {
        let j = i + rng.next_uniform_int(len - i);
        pool.swap(i, j);
    }
    pool.truncate(k);
    pool
}
