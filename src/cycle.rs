//! Single cycles.
use std::collections::BTreeSet;
use std::fmt;

use crate::action::Permutation;
use crate::error::PermError;
use crate::raw::check_result;
use crate::El;

/// A cyclic permutation `(c_0 c_1 ... c_k)` sending each `c_i` to `c_{i+1}` and `c_k` to `c_0`.
///
/// Cycles are stored rotated so that the smallest element comes first. Rotations of the same
/// cyclic sequence therefore compare equal, and ordering is lexicographic on this canonical form.
/// A 1-cycle is allowed and acts as the identity.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cycle {
    cycle: Box<[El]>,
}

impl Cycle {
    /// Create a cycle from its elements in cyclic order.
    ///
    /// Fails unless the elements are distinct and there is at least one.
    pub fn new(mut elements: Vec<El>) -> Result<Cycle, PermError> {
        if !is_cycle(&elements) {
            log::debug!("rejecting {elements:?}: not a cycle");
            return Err(PermError::InvalidCycle(elements));
        }
        let min_pos = elements
            .iter()
            .enumerate()
            .min_by_key(|&(_, &el)| el)
            .map_or(0, |(pos, _)| pos);
        elements.rotate_left(min_pos);
        Ok(Cycle {
            cycle: elements.into_boxed_slice(),
        })
    }

    /// A cycle from distinct elements whose first element is the smallest.
    pub(crate) fn from_walk(walk: Vec<El>) -> Cycle {
        debug_assert!(is_cycle(&walk) && walk.iter().all(|&el| el >= walk[0]));
        Cycle {
            cycle: walk.into_boxed_slice(),
        }
    }

    /// Number of elements, which is also the order of the cycle as a permutation.
    pub fn len(&self) -> usize {
        self.cycle.len()
    }

    pub fn order(&self) -> usize {
        self.len()
    }

    /// Whether this is a 1-cycle.
    pub fn is_trivial(&self) -> bool {
        self.cycle.len() == 1
    }

    /// The elements, starting with the smallest.
    pub fn as_slice(&self) -> &[El] {
        &self.cycle
    }

    pub fn iter(&self) -> impl Iterator<Item = El> + '_ {
        self.cycle.iter().copied()
    }

    /// The smallest element.
    pub fn first(&self) -> El {
        self.cycle[0]
    }

    /// The largest element.
    pub fn largest(&self) -> El {
        self.iter().max().unwrap_or(self.cycle[0])
    }

    /// The images of `0..=largest`.
    pub fn to_permutation_array(&self) -> Vec<El> {
        let perm: Vec<El> = (0..=self.largest()).map(|i| self.image(i)).collect();
        check_result(&perm);
        perm
    }
}

/// Whether `elements` can be read as a cycle: non-empty and without repetitions.
pub fn is_cycle(elements: &[El]) -> bool {
    let distinct: BTreeSet<El> = elements.iter().copied().collect();
    !elements.is_empty() && distinct.len() == elements.len()
}

impl Permutation for Cycle {
    fn image(&self, point: El) -> El {
        match self.cycle.iter().position(|&el| el == point) {
            Some(pos) => self.cycle[(pos + 1) % self.cycle.len()],
            None => point,
        }
    }

    fn preimage(&self) -> BTreeSet<El> {
        if self.is_trivial() {
            BTreeSet::new()
        } else {
            self.iter().collect()
        }
    }

    fn min_preimage(&self) -> Option<El> {
        (!self.is_trivial()).then(|| self.first())
    }

    fn max_preimage(&self) -> Option<El> {
        (!self.is_trivial()).then(|| self.largest())
    }
}

impl TryFrom<Vec<El>> for Cycle {
    type Error = PermError;

    fn try_from(elements: Vec<El>) -> Result<Cycle, PermError> {
        Cycle::new(elements)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for el in self.iter() {
            f.write_str(if first { "(" } else { " " })?;
            first = false;
            fmt::Display::fmt(&el, f)?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::raw::is_permutation;

    fn cycle(v: &[El]) -> Cycle {
        Cycle::new(v.to_vec()).unwrap()
    }

    #[test]
    fn canonical_rotation() {
        assert_eq!(cycle(&[3, 1, 2]).as_slice(), &[1, 2, 3]);
        assert_eq!(cycle(&[2, 3, 1]), cycle(&[1, 2, 3]));
        assert_ne!(cycle(&[1, 3, 2]), cycle(&[1, 2, 3]));
        assert_eq!(cycle(&[7]).as_slice(), &[7]);
    }

    #[test]
    fn rejects_invalid() {
        assert_eq!(Cycle::new(vec![]), Err(PermError::InvalidCycle(vec![])));
        assert_eq!(
            Cycle::new(vec![1, 2, 1]),
            Err(PermError::InvalidCycle(vec![1, 2, 1]))
        );
        assert!(Cycle::try_from(vec![0, 0]).is_err());
    }

    #[test]
    fn images() {
        let c = cycle(&[4, 1, 3]);
        assert_eq!(c.image(1), 3);
        assert_eq!(c.image(3), 4);
        assert_eq!(c.image(4), 1);
        assert_eq!(c.image(2), 2);
        assert_eq!(c.image(100), 100);
        assert_eq!(c.min_preimage(), Some(1));
        assert_eq!(c.max_preimage(), Some(4));
        assert_eq!(c.order(), 3);
    }

    #[test]
    fn trivial_cycle_fixes_everything() {
        let c = cycle(&[5]);
        assert_eq!(c.image(5), 5);
        assert!(c.preimage().is_empty());
        assert_eq!(c.max_preimage(), None);
        assert_eq!(c.to_permutation_array(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn to_array() {
        assert_eq!(cycle(&[0, 1, 2]).to_permutation_array(), vec![1, 2, 0]);
        assert_eq!(cycle(&[1, 2, 3]).to_permutation_array(), vec![0, 2, 3, 1]);
        assert_eq!(cycle(&[3, 1]).to_permutation_array(), vec![0, 3, 2, 1]);
    }

    #[test]
    fn fmt_cycles() {
        assert_eq!(format!("{}", cycle(&[2, 0, 5])), "(0 5 2)");
        assert_eq!(format!("{:?}", cycle(&[9])), "(9)");
    }

    proptest! {
        #[test]
        fn rotations_are_equal(
            elements in prop::collection::btree_set(0..500usize, 1..40)
                .prop_map(|s| s.into_iter().collect::<Vec<_>>())
                .prop_shuffle(),
            shift in any::<prop::sample::Index>(),
        ) {
            let mut rotated = elements.clone();
            rotated.rotate_left(shift.index(elements.len()));
            let a = Cycle::new(elements).unwrap();
            let b = Cycle::new(rotated).unwrap();
            prop_assert_eq!(a.first(), *a.as_slice().iter().min().unwrap());
            prop_assert_eq!(&a, &b);
            prop_assert!(is_permutation(&a.to_permutation_array()));
        }
    }
}
