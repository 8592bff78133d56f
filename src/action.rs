//! Permutations acting on points.
use std::collections::BTreeSet;

use crate::El;

/// A permutation of the non-negative integers with finite support.
///
/// Implementors only store the points they move. Every other point is a fixed point, so any
/// point can be mapped and any two implementors can be composed, regardless of representation.
pub trait Permutation {
    /// The image of a point.
    fn image(&self, point: El) -> El;

    /// All points that are not fixed by this permutation.
    fn preimage(&self) -> BTreeSet<El>;

    /// The smallest point that is not fixed, `None` for the identity.
    fn min_preimage(&self) -> Option<El> {
        self.preimage().first().copied()
    }

    /// The largest point that is not fixed, `None` for the identity.
    fn max_preimage(&self) -> Option<El> {
        self.preimage().last().copied()
    }
}

impl<P: Permutation + ?Sized> Permutation for &P {
    fn image(&self, point: El) -> El {
        (**self).image(point)
    }

    fn preimage(&self) -> BTreeSet<El> {
        (**self).preimage()
    }

    fn min_preimage(&self) -> Option<El> {
        (**self).min_preimage()
    }

    fn max_preimage(&self) -> Option<El> {
        (**self).max_preimage()
    }
}
