//! Randomized mutation operators on permutations.
//!
//! A [`Mutator`] produces a new value from an existing one, a mutation intensity in `[0, 1]` and a
//! source of randomness. The stock operators copy their input and apply one randomized primitive
//! of [`ArrayForm`]. Permutations of fewer than two points are returned unchanged.
use crate::perm::ArrayForm;
use crate::random::{RandomSource, UnitInterval};

/// A randomized transformation of a state.
pub trait Mutator<S> {
    fn apply(&self, state: &S, degree: UnitInterval, rng: &mut dyn RandomSource) -> S;
}

/// Move a random value to a different random position. Ignores the degree.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomInsert;

impl Mutator<ArrayForm> for RandomInsert {
    fn apply(&self, state: &ArrayForm, _: UnitInterval, rng: &mut dyn RandomSource) -> ArrayForm {
        let mut result = state.clone();
        result.random_insert(rng);
        result
    }
}

/// Exchange the values at two distinct random positions. Ignores the degree.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSwap;

impl Mutator<ArrayForm> for RandomSwap {
    fn apply(&self, state: &ArrayForm, _: UnitInterval, rng: &mut dyn RandomSource) -> ArrayForm {
        let mut result = state.clone();
        result.random_swap(rng);
        result
    }
}

/// Replace the state by a uniformly random permutation. Ignores the degree.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomShuffle;

impl Mutator<ArrayForm> for RandomShuffle {
    fn apply(&self, state: &ArrayForm, _: UnitInterval, rng: &mut dyn RandomSource) -> ArrayForm {
        let mut result = state.clone();
        result.shuffle(rng);
        result
    }
}

/// Shuffle a random subset of positions, larger for higher degrees.
///
/// See [`ArrayForm::random_shuffle_subset`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsetShuffle;

impl Mutator<ArrayForm> for SubsetShuffle {
    fn apply(
        &self,
        state: &ArrayForm,
        degree: UnitInterval,
        rng: &mut dyn RandomSource,
    ) -> ArrayForm {
        let mut result = state.clone();
        result.random_shuffle_subset(degree, rng);
        result
    }
}

/// An n-opt move with 2 to 5 random flips, more for higher degrees.
///
/// See [`ArrayForm::random_n_opt`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NOpt;

impl Mutator<ArrayForm> for NOpt {
    fn apply(
        &self,
        state: &ArrayForm,
        degree: UnitInterval,
        rng: &mut dyn RandomSource,
    ) -> ArrayForm {
        let mut result = state.clone();
        result.random_n_opt(degree, rng);
        result
    }
}

/// Reverse the block between two distinct random positions. Ignores the degree.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentReversal;

impl Mutator<ArrayForm> for SegmentReversal {
    fn apply(&self, state: &ArrayForm, _: UnitInterval, rng: &mut dyn RandomSource) -> ArrayForm {
        let mut result = state.clone();
        result.random_reverse(rng);
        result
    }
}
