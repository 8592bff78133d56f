//! Permutations as sets of disjoint cycles.
use std::collections::btree_set::{self, BTreeSet};
use std::fmt;

use num_integer::Integer;

use crate::action::Permutation;
use crate::bits::BitSet;
use crate::cycle::Cycle;
use crate::error::PermError;
use crate::perm::ArrayForm;
use crate::raw::{self, check_result};
use crate::El;

/// A permutation given as a set of pairwise disjoint cycles.
///
/// No point is moved by more than one member cycle, so the members commute and their product is
/// independent of order. 1-cycles are fixed points and are not stored, which makes equality of
/// two values equality of the permutations they represent. The empty set is the identity.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisjointCycleForm {
    cycles: BTreeSet<Cycle>,
}

impl DisjointCycleForm {
    /// The identity permutation.
    pub fn new() -> DisjointCycleForm {
        DisjointCycleForm::default()
    }

    /// Create a permutation from cycles that must be pairwise disjoint.
    ///
    /// Repeated copies of the same cycle are not disjoint and are rejected. 1-cycles take part
    /// in the check and are then dropped.
    pub fn from_cycles<I>(cycles: I) -> Result<DisjointCycleForm, PermError>
    where
        I: IntoIterator<Item = Cycle>,
    {
        let mut seen = BitSet::default();
        let mut result = DisjointCycleForm::new();
        for cycle in cycles {
            for point in cycle.iter() {
                if seen.get(point) {
                    log::debug!("rejecting {cycle}: {point} is already moved by {result}");
                    return Err(PermError::NonDisjointCycles { point });
                }
                seen.set(point);
            }
            if !cycle.is_trivial() {
                result.cycles.insert(cycle);
            }
        }
        Ok(result)
    }

    /// The cycle decomposition of a vector containing the images of `0..n`.
    pub fn from_array(perm: &[El]) -> Result<DisjointCycleForm, PermError> {
        if raw::is_permutation(perm) {
            Ok(decompose_slice(perm))
        } else {
            log::debug!("rejecting {perm:?}: not a permutation");
            Err(PermError::InvalidPermutation(perm.to_vec()))
        }
    }

    /// Number of non-trivial cycles.
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn is_identity(&self) -> bool {
        self.is_empty()
    }

    /// Iterator over the cycles, ordered lexicographically.
    pub fn iter(&self) -> btree_set::Iter<'_, Cycle> {
        self.cycles.iter()
    }

    /// The multiplicative order, the least common multiple of the cycle lengths.
    ///
    /// The identity has order 1. Returns `None` when the order does not fit in a `usize`, which
    /// already happens for a few hundred points.
    pub fn order(&self) -> Option<usize> {
        self.cycles.iter().try_fold(1usize, |acc, c| {
            let len = c.len();
            (acc / acc.gcd(&len)).checked_mul(len)
        })
    }

    /// The images of `0..=max_preimage`, empty for the identity.
    pub fn to_permutation_array(&self) -> Vec<El> {
        let len = self.max_preimage().map_or(0, |max| max + 1);
        let perm: Vec<El> = (0..len).map(|i| self.image(i)).collect();
        check_result(&perm);
        perm
    }

    /// This permutation restricted to `0..n`, padded with fixed points.
    ///
    /// Fails when a point at or past `n` is moved.
    pub fn to_array_form(&self, n: usize) -> Result<ArrayForm, PermError> {
        if let Some(max) = self.max_preimage().filter(|&max| max >= n) {
            return Err(PermError::IndexOutOfRange { index: max, len: n });
        }
        let mut perm = raw::identity(n);
        for cycle in &self.cycles {
            for el in cycle.iter() {
                perm[el] = cycle.image(el);
            }
        }
        ArrayForm::from_vec(perm)
    }

    /// Compose with `other` on the right: `self` is applied first.
    pub fn multiply(&self, other: &DisjointCycleForm) -> DisjointCycleForm {
        multiply_cycles(self, other)
    }
}

impl From<Cycle> for DisjointCycleForm {
    fn from(cycle: Cycle) -> DisjointCycleForm {
        let mut cycles = BTreeSet::new();
        if !cycle.is_trivial() {
            cycles.insert(cycle);
        }
        DisjointCycleForm { cycles }
    }
}

impl From<&ArrayForm> for DisjointCycleForm {
    fn from(perm: &ArrayForm) -> DisjointCycleForm {
        decompose(perm)
    }
}

impl<'a> IntoIterator for &'a DisjointCycleForm {
    type Item = &'a Cycle;
    type IntoIter = btree_set::Iter<'a, Cycle>;

    fn into_iter(self) -> Self::IntoIter {
        self.cycles.iter()
    }
}

impl Permutation for DisjointCycleForm {
    fn image(&self, point: El) -> El {
        self.cycles
            .iter()
            .map(|c| c.image(point))
            .find(|&image| image != point)
            .unwrap_or(point)
    }

    fn preimage(&self) -> BTreeSet<El> {
        self.cycles.iter().flat_map(|c| c.iter()).collect()
    }

    fn min_preimage(&self) -> Option<El> {
        // Cycles are ordered by their smallest element first.
        self.cycles.first().map(Cycle::first)
    }

    fn max_preimage(&self) -> Option<El> {
        self.cycles.iter().map(Cycle::largest).max()
    }
}

/// Formats as the concatenated cycles, e.g. `(0 2 1 3)(4 5)`, with `()` for the identity.
impl fmt::Display for DisjointCycleForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.cycles.is_empty() {
            return f.write_str("()");
        }
        for cycle in &self.cycles {
            fmt::Display::fmt(cycle, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DisjointCycleForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Whether no point is moved by two of the given cycles.
pub fn are_disjoint<'a, I>(cycles: I) -> bool
where
    I: IntoIterator<Item = &'a Cycle>,
{
    let mut seen = BitSet::default();
    let mut total = 0;
    for cycle in cycles {
        for el in cycle.iter() {
            seen.set(el);
        }
        total += cycle.len();
        if seen.cardinality() != total {
            return false;
        }
    }
    true
}

/// The disjoint cycles of a permutation in array form, without 1-cycles.
///
/// Runs in time linear in the length of the permutation.
pub fn decompose(perm: &ArrayForm) -> DisjointCycleForm {
    decompose_slice(perm.as_slice())
}

fn decompose_slice(perm: &[El]) -> DisjointCycleForm {
    let mut unvisited = BitSet::full(perm.len());
    let mut cycles = BTreeSet::new();
    let mut walk = Vec::with_capacity(perm.len());

    let mut next = unvisited.next_set_bit(0);
    while let Some(start) = next {
        walk.clear();
        let mut j = start;
        while unvisited.get(j) {
            unvisited.clear(j);
            walk.push(j);
            j = perm[j];
        }
        if walk.len() > 1 {
            // Every point below `start` is visited, so the walk begins at its minimum.
            cycles.insert(Cycle::from_walk(walk.clone()));
        }
        next = unvisited.next_set_bit(start + 1);
    }

    log::trace!("{} points decompose into {} cycles", perm.len(), cycles.len());
    let result = DisjointCycleForm { cycles };
    debug_assert!(are_disjoint(&result));
    result
}

/// The product of two permutations in disjoint-cycle form, applying `first` then `second`.
///
/// Only the points moved by either operand are visited. Starting from the smallest one not yet
/// placed, each walk follows `i -> second.image(first.image(i))` until it reaches a point that is
/// already placed, and becomes one output cycle. Walks of length one are fixed points of the
/// product and are dropped.
pub fn multiply_cycles<P, Q>(first: &P, second: &Q) -> DisjointCycleForm
where
    P: Permutation + ?Sized,
    Q: Permutation + ?Sized,
{
    let mut available: BitSet = first.preimage().into_iter().collect();
    for el in second.preimage() {
        available.set(el);
    }

    let mut cycles = BTreeSet::new();
    let mut next = available.next_set_bit(0);
    while let Some(start) = next {
        let mut walk = vec![start];
        available.clear(start);
        let mut i = second.image(first.image(start));
        while available.get(i) {
            available.clear(i);
            walk.push(i);
            i = second.image(first.image(i));
        }
        if walk.len() > 1 {
            cycles.insert(Cycle::from_walk(walk));
        }
        next = available.next_set_bit(start + 1);
    }

    log::trace!("product has {} cycles", cycles.len());
    let result = DisjointCycleForm { cycles };
    debug_assert!(are_disjoint(&result));
    result
}
