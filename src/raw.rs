//! Operations on permutations stored as raw slices of images.
//!
//! A slice `perm` of length `n` represents the permutation sending `i` to `perm[i]`. Functions in
//! this module expect valid permutations of equal length and do not report errors; checking
//! happens once at the public boundary of [`ArrayForm`][crate::perm::ArrayForm]. Every function
//! that produces a permutation asserts that its result is one in debug builds and with the
//! `checked` feature.
//!
//! Composition applies the left operand first: `multiply(p, q)[i] == q[p[i]]`.
use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::bits::BitSet;
use crate::El;

/// Whether `perm` is a bijection on `0..perm.len()`.
pub fn is_permutation(perm: &[El]) -> bool {
    let mut seen = BitSet::new(perm.len());
    for &p_i in perm {
        if p_i >= perm.len() {
            return false;
        }
        seen.set(p_i);
    }
    seen.cardinality() == perm.len()
}

#[inline]
pub(crate) fn check_result(perm: &[El]) {
    if cfg!(any(debug_assertions, feature = "checked")) {
        assert!(is_permutation(perm), "{perm:?} is not a permutation");
    }
}

pub fn identity(n: usize) -> Vec<El> {
    (0..n).collect()
}

/// Apply `p` then `q`.
pub fn multiply(p: &[El], q: &[El]) -> Vec<El> {
    debug_assert_eq!(p.len(), q.len());
    let result: Vec<El> = p.iter().map(|&p_i| q[p_i]).collect();
    check_result(&result);
    result
}

pub fn invert(p: &[El]) -> Vec<El> {
    let mut result = vec![0; p.len()];
    for (i, &p_i) in p.iter().enumerate() {
        result[p_i] = i;
    }
    check_result(&result);
    result
}

/// `p` followed by the inverse of `q`.
pub fn divide(p: &[El], q: &[El]) -> Vec<El> {
    multiply(p, &invert(q))
}

/// The inverse of `p` followed by `q`.
pub fn modulo(p: &[El], q: &[El]) -> Vec<El> {
    multiply(&invert(p), q)
}

/// `b⁻¹ a b`, computed pointwise as `b⁻¹[a[b[i]]]`.
pub fn conjugate(a: &[El], b: &[El]) -> Vec<El> {
    debug_assert_eq!(a.len(), b.len());
    let b_inv = invert(b);
    let result: Vec<El> = b.iter().map(|&b_i| b_inv[a[b_i]]).collect();
    check_result(&result);
    result
}

/// `a⁻¹ b⁻¹ a b`, computed pointwise as `a⁻¹[b⁻¹[a[b[i]]]]`.
pub fn commutator(a: &[El], b: &[El]) -> Vec<El> {
    debug_assert_eq!(a.len(), b.len());
    let a_inv = invert(a);
    let b_inv = invert(b);
    let result: Vec<El> = b.iter().map(|&b_i| a_inv[b_inv[a[b_i]]]).collect();
    check_result(&result);
    result
}

/// A power of a permutation.
///
/// Negative exponents raise the inverse. Small exponents are composed directly, larger ones
/// use exponentiation by squaring.
pub fn power<E>(perm: &[El], exponent: E) -> Vec<El>
where
    E: Integer + ToPrimitive,
{
    let mut exp = exponent;
    if exp < E::zero() {
        // -(exp + 1) is representable even for the most negative exponent.
        let inv = invert(perm);
        let rest = power(&inv, E::zero() - (exp + E::one()));
        return multiply(&rest, &inv);
    }

    let result: Vec<El> = match exp.to_usize() {
        Some(0) => identity(perm.len()),
        Some(1) => perm.to_vec(),
        Some(2) => perm.iter().map(|&p_i| perm[p_i]).collect(),
        Some(3) => perm.iter().map(|&p_i| perm[perm[p_i]]).collect(),
        _ => {
            let mut base = perm.to_vec();
            let mut acc = identity(perm.len());
            while !exp.is_zero() {
                if exp.is_odd() {
                    acc = acc.iter().map(|&a_i| base[a_i]).collect();
                }
                exp = exp / (E::one() + E::one());
                if !exp.is_zero() {
                    base = base.iter().map(|&b_i| base[b_i]).collect();
                }
            }
            acc
        }
    };
    check_result(&result);
    result
}

/// Exchange the values at two positions.
pub fn transpose(perm: &mut [El], i: usize, j: usize) {
    perm.swap(i, j);
}

/// Move the value at `src` to `dst`, shifting the values in between by one position.
pub fn insert(perm: &mut [El], src: usize, dst: usize) {
    if src < dst {
        perm[src..=dst].rotate_left(1);
    } else {
        perm[dst..=src].rotate_right(1);
    }
}

/// Rotate the values so that position `i` moves to `(i + amount) mod n`.
///
/// Negative amounts rotate the other way.
pub fn rotate(perm: &mut [El], amount: isize) {
    if perm.is_empty() {
        return;
    }
    let shift = amount.rem_euclid(perm.len() as isize) as usize;
    perm.rotate_right(shift);
}

/// Reverse the block of positions `from..=to`.
pub fn reverse(perm: &mut [El], from: usize, to: usize) {
    perm[from..=to].reverse();
}

/// Reverse the block `a..=b`, or the inner block `b + 1..a` when `a > b`.
pub fn flip(perm: &mut [El], a: usize, b: usize) {
    if a <= b {
        perm[a..=b].reverse();
    } else {
        perm[b + 1..a].reverse();
    }
}

/// Positions `i` with `perm[i] < perm[i + 1]`, as a set over `0..n - 1`.
pub fn ascents(perm: &[El]) -> BitSet {
    let mut result = BitSet::new(perm.len().saturating_sub(1));
    for (i, pair) in perm.windows(2).enumerate() {
        if pair[0] < pair[1] {
            result.set(i);
        }
    }
    result
}

/// Number of positions where `p` and `q` disagree.
pub fn hamming_distance(p: &[El], q: &[El]) -> usize {
    debug_assert_eq!(p.len(), q.len());
    p.iter().zip(q).filter(|(a, b)| a != b).count()
}
