//! Permutations of finite sets in array form.
use std::collections::BTreeSet;
use std::fmt;

use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::action::Permutation;
use crate::bits::BitSet;
use crate::cycles::{decompose, DisjointCycleForm};
use crate::error::{in_range, same_len, PermError};
use crate::random::{self, RandomSource, UnitInterval};
use crate::{lehmer, raw, El};

/// A permutation of `{0, ..., n-1}` stored as the array of images.
///
/// `perm[i]` is the image of `i`. The array is a bijection on `0..n` after every public
/// operation: constructors validate their input and operators check their arguments before
/// writing, so a failed call leaves the value unchanged.
///
/// Binary operators require both operands to have the same length. Composition applies `self`
/// first, so after `p.multiply(&q)` the value maps `i` to `q[p[i]]`.
///
/// Points at or past the length are fixed, which makes every `ArrayForm` a [`Permutation`] of
/// all of [`El`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ArrayForm {
    perm: Vec<El>,
}

impl ArrayForm {
    /// The identity permutation of `0..n`.
    pub fn identity(n: usize) -> ArrayForm {
        ArrayForm {
            perm: raw::identity(n),
        }
    }

    /// Create a permutation from a vector containing the images of `0..n`.
    pub fn from_vec(perm: Vec<El>) -> Result<ArrayForm, PermError> {
        if raw::is_permutation(&perm) {
            Ok(ArrayForm { perm })
        } else {
            log::debug!("rejecting {perm:?}: not a permutation");
            Err(PermError::InvalidPermutation(perm))
        }
    }

    /// A uniformly random permutation of `0..n`, taking `n - 1` draws.
    pub fn random<R: RandomSource + ?Sized>(n: usize, rng: &mut R) -> ArrayForm {
        let mut result = ArrayForm::identity(n);
        result.shuffle(rng);
        result
    }

    /// The permutation of `0..vector.len() + 1` with the given inversion vector.
    pub fn from_inversion_vector(vector: &[El]) -> Result<ArrayForm, PermError> {
        lehmer::from_inversion_vector(vector).map(|perm| ArrayForm { perm })
    }

    pub fn len(&self) -> usize {
        self.perm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }

    pub fn is_identity(&self) -> bool {
        self.perm.iter().enumerate().all(|(i, &p_i)| i == p_i)
    }

    /// The image of `i`, `None` when `i` is out of range.
    pub fn get(&self, i: usize) -> Option<El> {
        self.perm.get(i).copied()
    }

    pub fn as_slice(&self) -> &[El] {
        &self.perm
    }

    pub fn into_vec(self) -> Vec<El> {
        self.perm
    }

    fn check(&self) {
        raw::check_result(&self.perm);
    }

    // Positional operators

    /// Exchange the values at positions `i` and `j`.
    pub fn transpose(&mut self, i: usize, j: usize) -> Result<(), PermError> {
        in_range(i, self.len())?;
        in_range(j, self.len())?;
        raw::transpose(&mut self.perm, i, j);
        self.check();
        Ok(())
    }

    /// Exchange the values at two distinct random positions.
    ///
    /// Does nothing, and takes no draws, for fewer than two positions.
    pub fn random_swap<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        if let Some((i, j)) = random::distinct_pair(self.len(), rng) {
            raw::transpose(&mut self.perm, i, j);
            self.check();
        }
    }

    /// Move the value at `src` to position `dst`, shifting the values in between.
    pub fn insert(&mut self, src: usize, dst: usize) -> Result<(), PermError> {
        in_range(src, self.len())?;
        in_range(dst, self.len())?;
        raw::insert(&mut self.perm, src, dst);
        self.check();
        Ok(())
    }

    /// Move the value at a random position to a different random position.
    ///
    /// Does nothing, and takes no draws, for fewer than two positions.
    pub fn random_insert<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        if let Some((src, dst)) = random::distinct_pair(self.len(), rng) {
            raw::insert(&mut self.perm, src, dst);
            self.check();
        }
    }

    /// Rotate cyclically so that the value at `i` moves to `(i + amount) mod n`.
    pub fn rotate(&mut self, amount: isize) {
        raw::rotate(&mut self.perm, amount);
        self.check();
    }

    /// Shuffle all values uniformly at random.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        random::shuffle(&mut self.perm, rng);
        self.check();
    }

    /// Shuffle the values at `2 + ⌊degree · (n - 2)⌋` random positions among themselves.
    ///
    /// All other positions keep their values. Does nothing, and takes no draws, for fewer than
    /// two positions.
    pub fn random_shuffle_subset<R: RandomSource + ?Sized>(
        &mut self,
        degree: UnitInterval,
        rng: &mut R,
    ) {
        let n = self.len();
        if n < 2 {
            return;
        }
        let k = 2 + (degree.value() * (n - 2) as f64) as usize;
        let mut positions = random::sample_indices(n, k, rng);
        let values: Vec<El> = positions.iter().map(|&i| self.perm[i]).collect();
        random::shuffle(&mut positions, rng);
        for (&i, value) in positions.iter().zip(values) {
            self.perm[i] = value;
        }
        self.check();
    }

    /// Reverse the values at positions `from..=to`.
    pub fn reverse_range(&mut self, from: usize, to: usize) -> Result<(), PermError> {
        in_range(to, self.len())?;
        if from > to {
            return Err(PermError::IndexOutOfRange {
                index: from,
                len: self.len(),
            });
        }
        raw::reverse(&mut self.perm, from, to);
        self.check();
        Ok(())
    }

    /// Reverse the values between two distinct random positions, both included.
    ///
    /// Does nothing, and takes no draws, for fewer than two positions.
    pub fn random_reverse<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        if let Some((a, b)) = random::distinct_pair(self.len(), rng) {
            raw::reverse(&mut self.perm, a.min(b), a.max(b));
            self.check();
        }
    }

    /// Reverse positions `a..=b`, or the positions strictly between `b` and `a` when `a > b`.
    pub fn flip(&mut self, a: usize, b: usize) -> Result<(), PermError> {
        in_range(a, self.len())?;
        in_range(b, self.len())?;
        raw::flip(&mut self.perm, a, b);
        self.check();
        Ok(())
    }

    /// Apply `n - 1` flips between pairs of distinct random positions.
    pub fn n_opt<R: RandomSource + ?Sized>(&mut self, n: usize, rng: &mut R) {
        for _ in 1..n {
            match random::distinct_pair(self.len(), rng) {
                Some((a, b)) => raw::flip(&mut self.perm, a, b),
                None => break,
            }
        }
        self.check();
    }

    /// [`n_opt`](Self::n_opt) with `n` growing from 2 to 5 in quarter steps of `degree`.
    pub fn random_n_opt<R: RandomSource + ?Sized>(&mut self, degree: UnitInterval, rng: &mut R) {
        let n = match degree.value() {
            d if d <= 0.25 => 2,
            d if d <= 0.5 => 3,
            d if d <= 0.75 => 4,
            _ => 5,
        };
        self.n_opt(n, rng);
    }

    /// Positions `i` with `perm[i] < perm[i + 1]`.
    pub fn ascents(&self) -> BitSet {
        raw::ascents(&self.perm)
    }

    /// Number of positions at which `self` and `other` differ.
    pub fn hamming_distance(&self, other: &ArrayForm) -> Result<usize, PermError> {
        same_len(self.len(), other.len())?;
        Ok(raw::hamming_distance(&self.perm, &other.perm))
    }

    // Group operations

    fn combine(
        &mut self,
        other: &ArrayForm,
        op: impl FnOnce(&[El], &[El]) -> Vec<El>,
    ) -> Result<(), PermError> {
        same_len(self.len(), other.len())?;
        self.perm = op(&self.perm, &other.perm);
        Ok(())
    }

    /// Compose with `other` on the right: `self` is applied first.
    pub fn multiply(&mut self, other: &ArrayForm) -> Result<(), PermError> {
        self.combine(other, raw::multiply)
    }

    /// Compose with the inverse of `other` on the right.
    pub fn divide(&mut self, other: &ArrayForm) -> Result<(), PermError> {
        self.combine(other, raw::divide)
    }

    /// Replace `self` by its inverse composed with `other`.
    pub fn modulo(&mut self, other: &ArrayForm) -> Result<(), PermError> {
        self.combine(other, raw::modulo)
    }

    /// Conjugate by `other`, giving `other⁻¹ self other`.
    pub fn conjugate(&mut self, other: &ArrayForm) -> Result<(), PermError> {
        self.combine(other, raw::conjugate)
    }

    /// Replace `self` by the commutator `self⁻¹ other⁻¹ self other`.
    pub fn commutator_with(&mut self, other: &ArrayForm) -> Result<(), PermError> {
        self.combine(other, raw::commutator)
    }

    /// Digit-wise sum of inversion vectors. See [`lehmer::add`].
    pub fn add(&mut self, other: &ArrayForm) -> Result<(), PermError> {
        self.combine(other, lehmer::add)
    }

    /// Digit-wise difference of inversion vectors. See [`lehmer::subtract`].
    pub fn subtract(&mut self, other: &ArrayForm) -> Result<(), PermError> {
        self.combine(other, lehmer::subtract)
    }

    pub fn invert(&mut self) {
        self.perm = raw::invert(&self.perm);
    }

    /// The inverse of this permutation.
    pub fn inverse(&self) -> ArrayForm {
        ArrayForm {
            perm: raw::invert(&self.perm),
        }
    }

    /// Raise to a power in place. Negative exponents raise the inverse.
    pub fn power<E>(&mut self, exponent: E)
    where
        E: Integer + ToPrimitive,
    {
        self.perm = raw::power(&self.perm, exponent);
    }

    /// A power of this permutation.
    ///
    /// This implementation performs efficient exponentiation by squaring.
    pub fn pow<E>(&self, exponent: E) -> ArrayForm
    where
        E: Integer + ToPrimitive,
    {
        ArrayForm {
            perm: raw::power(&self.perm, exponent),
        }
    }

    /// The inversion vector of this permutation, empty when `n <= 1`.
    pub fn inversion_vector(&self) -> Vec<El> {
        lehmer::inversion_vector(&self.perm)
    }

    /// The disjoint cycles of this permutation, without 1-cycles.
    pub fn to_disjoint_cycle_form(&self) -> DisjointCycleForm {
        decompose(self)
    }
}

impl Permutation for ArrayForm {
    fn image(&self, point: El) -> El {
        self.get(point).unwrap_or(point)
    }

    fn preimage(&self) -> BTreeSet<El> {
        self.perm
            .iter()
            .enumerate()
            .filter(|&(i, &p_i)| i != p_i)
            .map(|(i, _)| i)
            .collect()
    }

    fn min_preimage(&self) -> Option<El> {
        self.perm.iter().enumerate().position(|(i, &p_i)| i != p_i)
    }

    fn max_preimage(&self) -> Option<El> {
        self.perm.iter().enumerate().rposition(|(i, &p_i)| i != p_i)
    }
}

impl TryFrom<Vec<El>> for ArrayForm {
    type Error = PermError;

    fn try_from(perm: Vec<El>) -> Result<ArrayForm, PermError> {
        ArrayForm::from_vec(perm)
    }
}

impl From<ArrayForm> for Vec<El> {
    fn from(perm: ArrayForm) -> Vec<El> {
        perm.perm
    }
}

impl AsRef<[El]> for ArrayForm {
    fn as_ref(&self) -> &[El] {
        &self.perm
    }
}

/// Formats in disjoint-cycle notation, e.g. `(0 4 3 2 5)`, with `()` for the identity.
impl fmt::Display for ArrayForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.to_disjoint_cycle_form(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::{rngs::SmallRng, SeedableRng};

    use crate::random::tests::Scripted;

    fn perm(v: &[El]) -> ArrayForm {
        ArrayForm::from_vec(v.to_vec()).unwrap()
    }

    fn random_perm(size: std::ops::Range<usize>) -> impl Strategy<Value = ArrayForm> {
        crate::raw::tests::random_perm(size).prop_map(|v| ArrayForm::from_vec(v).unwrap())
    }

    fn unit(d: f64) -> UnitInterval {
        UnitInterval::new(d).unwrap()
    }

    #[test]
    fn construction() {
        assert_eq!(ArrayForm::identity(3).as_slice(), &[0, 1, 2]);
        assert!(ArrayForm::identity(0).is_empty());
        assert_eq!(
            ArrayForm::from_vec(vec![0, 0]),
            Err(PermError::InvalidPermutation(vec![0, 0]))
        );
        assert!(ArrayForm::try_from(vec![1, 2]).is_err());
        let p = perm(&[2, 0, 1]);
        let q = p.clone();
        assert_eq!(Vec::from(q), vec![2, 0, 1]);
    }

    #[test]
    fn random_takes_n_minus_one_draws() {
        let mut rng = Scripted::new(vec![]);
        let p = ArrayForm::random(6, &mut rng);
        assert_eq!(rng.draws, 5);
        assert_eq!(p.len(), 6);

        let a = ArrayForm::random(30, &mut SmallRng::seed_from_u64(1));
        let b = ArrayForm::random(30, &mut SmallRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_leaves_value_unchanged() {
        let mut p = perm(&[2, 0, 1]);
        assert_eq!(
            p.transpose(0, 3),
            Err(PermError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(p.insert(5, 0).is_err());
        assert!(p.reverse_range(2, 1).is_err());
        assert!(p.flip(0, 9).is_err());
        assert_eq!(p, perm(&[2, 0, 1]));
    }

    #[test]
    fn length_mismatch_leaves_value_unchanged() {
        let mut p = perm(&[2, 0, 1]);
        let q = ArrayForm::identity(4);
        let err = PermError::LengthMismatch { left: 3, right: 4 };
        assert_eq!(p.multiply(&q), Err(err.clone()));
        assert_eq!(p.divide(&q), Err(err.clone()));
        assert_eq!(p.modulo(&q), Err(err.clone()));
        assert_eq!(p.conjugate(&q), Err(err.clone()));
        assert_eq!(p.commutator_with(&q), Err(err.clone()));
        assert_eq!(p.add(&q), Err(err.clone()));
        assert_eq!(p.subtract(&q), Err(err.clone()));
        assert_eq!(p.hamming_distance(&q), Err(err));
        assert_eq!(p, perm(&[2, 0, 1]));
    }

    #[test]
    fn positional_moves() {
        let mut p = ArrayForm::identity(4);
        p.transpose(0, 3).unwrap();
        assert_eq!(p.as_slice(), &[3, 1, 2, 0]);
        p.insert(0, 2).unwrap();
        assert_eq!(p.as_slice(), &[1, 2, 3, 0]);
        p.rotate(-1);
        assert_eq!(p.as_slice(), &[2, 3, 0, 1]);
        p.reverse_range(1, 3).unwrap();
        assert_eq!(p.as_slice(), &[2, 1, 0, 3]);
        assert_eq!(p.ascents().iter().collect::<Vec<_>>(), vec![2]);
        assert_eq!(p.hamming_distance(&ArrayForm::identity(4)), Ok(2));
    }

    #[test]
    fn random_swap_follows_draws() {
        let mut p = ArrayForm::identity(4);
        let mut rng = Scripted::new(vec![1, 1, 3]);
        p.random_swap(&mut rng);
        assert_eq!(p.as_slice(), &[0, 3, 2, 1]);
        assert_eq!(rng.draws, 3);

        let mut single = ArrayForm::identity(1);
        let mut rng = Scripted::new(vec![]);
        single.random_swap(&mut rng);
        single.random_insert(&mut rng);
        single.random_reverse(&mut rng);
        assert_eq!(rng.draws, 0);
    }

    #[test]
    fn random_reverse_orders_bounds() {
        let mut p = ArrayForm::identity(6);
        let mut rng = Scripted::new(vec![4, 4, 1]);
        p.random_reverse(&mut rng);
        assert_eq!(p.as_slice(), &[0, 4, 3, 2, 1, 5]);
        assert_eq!(rng.draws, 3);
    }

    #[test]
    fn random_insert_follows_draws() {
        let mut p = ArrayForm::identity(4);
        p.random_insert(&mut Scripted::new(vec![0, 0, 3]));
        assert_eq!(p.as_slice(), &[1, 2, 3, 0]);
    }

    #[test]
    fn subset_shuffle_touches_only_chosen_positions() {
        let mut p = ArrayForm::identity(6);
        // sample positions 3 then 5, then swap them back in the shuffle
        let mut rng = Scripted::new(vec![3, 4, 0]);
        p.random_shuffle_subset(unit(0.0), &mut rng);
        assert_eq!(rng.draws, 3);
        assert_eq!(p.as_slice(), &[0, 1, 2, 5, 4, 3]);

        let mut rng = SmallRng::seed_from_u64(11);
        let mut q = ArrayForm::identity(20);
        for _ in 0..200 {
            let before = q.clone();
            let degree = UnitInterval::random(&mut rng);
            q.random_shuffle_subset(degree, &mut rng);
            let k = 2 + (degree.value() * 18.0) as usize;
            assert_at_most(q.hamming_distance(&before).unwrap(), k);
        }
    }

    fn assert_at_most(a: usize, b: usize) {
        assert!(a <= b, "{a} > {b}");
    }

    #[test]
    fn n_opt_flips() {
        let mut p = ArrayForm::identity(6);
        p.n_opt(2, &mut Scripted::new(vec![1, 4]));
        assert_eq!(p.as_slice(), &[0, 4, 3, 2, 1, 5]);

        let mut rng = Scripted::new(vec![]);
        p.n_opt(1, &mut rng);
        assert_eq!(rng.draws, 0);

        let mut rng = Scripted::new(vec![0, 1, 0, 1, 0, 1, 0, 1]);
        p.random_n_opt(unit(1.0), &mut rng);
        assert_eq!(rng.draws, 8);
    }

    #[test]
    fn group_operations() {
        let mut p = perm(&[1, 2, 3, 0]);
        p.invert();
        assert_eq!(p, perm(&[3, 0, 1, 2]));

        let mut p = perm(&[3, 2, 0, 1]);
        p.multiply(&perm(&[1, 2, 3, 0])).unwrap();
        assert_eq!(p, perm(&[0, 3, 1, 2]));

        let mut a = perm(&[0, 2, 1, 3]);
        a.conjugate(&perm(&[0, 2, 3, 1])).unwrap();
        assert_eq!(a, perm(&[0, 3, 2, 1]));

        let mut a = perm(&[0, 2, 1, 3]);
        a.commutator_with(&perm(&[0, 2, 3, 1])).unwrap();
        assert_eq!(a, perm(&[0, 3, 1, 2]));

        let p = perm(&[4, 8, 0, 7, 1, 5, 3, 6, 2]);
        assert_eq!(p.inversion_vector(), vec![4, 7, 0, 5, 0, 2, 1, 1]);
        assert_eq!(ArrayForm::from_inversion_vector(&p.inversion_vector()), Ok(p));
    }

    #[test]
    fn permutation_capability() {
        let p = perm(&[0, 3, 2, 1, 4]);
        assert_eq!(p.image(1), 3);
        assert_eq!(p.image(2), 2);
        assert_eq!(p.image(17), 17);
        assert_eq!(p.preimage(), [1, 3].into_iter().collect::<BTreeSet<_>>());
        assert_eq!(p.min_preimage(), Some(1));
        assert_eq!(p.max_preimage(), Some(3));
        assert_eq!(ArrayForm::identity(3).min_preimage(), None);
        assert!(ArrayForm::identity(3).is_identity());
    }

    #[test]
    fn display() {
        assert_eq!(ArrayForm::identity(3).to_string(), "()");
        assert_eq!(perm(&[4, 1, 5, 2, 3, 0]).to_string(), "(0 4 3 2 5)");
        assert_eq!(perm(&[2, 3, 1, 0, 5, 4]).to_string(), "(0 2 1 3)(4 5)");
    }

    proptest! {
        #[test]
        fn power_consistency(p in random_perm(0..100), a in -50..50i32, b in -50..50i32) {
            prop_assert_eq!(p.pow(0), ArrayForm::identity(p.len()));
            prop_assert_eq!(p.pow(1), p.clone());
            prop_assert_eq!(p.pow(-1), p.inverse());
            let mut combined = p.pow(a);
            combined.multiply(&p.pow(b)).unwrap();
            prop_assert_eq!(combined, p.pow(a + b));
        }

        #[test]
        fn in_place_power(p in random_perm(0..100), k in 0..20u64) {
            let mut q = p.clone();
            q.power(k);
            prop_assert_eq!(q, p.pow(k));
        }

        #[test]
        fn division_undoes_multiplication(
            (p, q) in (0..60usize).prop_flat_map(|n| (random_perm(n..n + 1), random_perm(n..n + 1)))
        ) {
            let mut r = p.clone();
            r.multiply(&q).unwrap();
            r.divide(&q).unwrap();
            prop_assert_eq!(&r, &p);

            let mut s = p.clone();
            let mut pq = p.clone();
            pq.multiply(&q).unwrap();
            s.modulo(&pq).unwrap();
            prop_assert_eq!(&s, &q);

            let mut t = p.clone();
            t.add(&q).unwrap();
            t.subtract(&q).unwrap();
            prop_assert_eq!(t, p);
        }

        #[test]
        fn random_operators_preserve_bijection(n in 0..40usize, seed in any::<u64>()) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut p = ArrayForm::random(n, &mut rng);
            for _ in 0..20 {
                let degree = UnitInterval::random(&mut rng);
                p.random_swap(&mut rng);
                p.random_insert(&mut rng);
                p.random_shuffle_subset(degree, &mut rng);
                p.random_n_opt(degree, &mut rng);
                p.rotate(rng.next_uniform_int(100) as isize - 50);
                prop_assert!(raw::is_permutation(p.as_slice()));
            }
        }
    }
}
