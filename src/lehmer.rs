//! Inversion vectors and the arithmetic they induce on permutations.
//!
//! The inversion vector of a permutation `p` of `0..n` has `n - 1` entries; entry `i` counts the
//! positions right of `i` holding a value smaller than `p[i]`. Entry `i` therefore lies in
//! `0..n - i`, and the map is a bijection between permutations of `0..n` and that mixed-radix
//! space.
//!
//! [`add`] and [`subtract`] work digit by digit in the mixed-radix space. They are not the group
//! operation of the symmetric group, and no distributive law over
//! [`multiply`][crate::raw::multiply] is assumed.
use crate::error::PermError;
use crate::raw::check_result;
use crate::El;

/// The inversion vector of a permutation.
///
/// Empty for permutations of length at most one.
pub fn inversion_vector(perm: &[El]) -> Vec<El> {
    let n = perm.len();
    (0..n.saturating_sub(1))
        .map(|i| perm[i + 1..].iter().filter(|&&p_j| p_j < perm[i]).count())
        .collect()
}

/// Whether `vector` is the inversion vector of some permutation, i.e. `vector[i] < len + 1 - i`.
pub fn is_inversion_vector(vector: &[El]) -> bool {
    let n = vector.len() + 1;
    vector.iter().enumerate().all(|(i, &v_i)| v_i < n - i)
}

/// The permutation of `0..vector.len() + 1` with the given inversion vector.
pub fn from_inversion_vector(vector: &[El]) -> Result<Vec<El>, PermError> {
    if !is_inversion_vector(vector) {
        log::debug!("rejecting inversion vector {vector:?}");
        return Err(PermError::InvalidInversionVector(vector.to_vec()));
    }
    Ok(decode(vector))
}

fn decode(vector: &[El]) -> Vec<El> {
    let mut pool: Vec<El> = (0..=vector.len()).collect();
    let mut perm = Vec::with_capacity(pool.len());
    for &v_k in vector {
        perm.push(pool.remove(v_k));
    }
    perm.append(&mut pool);
    check_result(&perm);
    perm
}

/// Digit-wise sum of the inversion vectors of `p` and `q`, decoded.
///
/// Both operands must be permutations of the same length.
pub fn add(p: &[El], q: &[El]) -> Vec<El> {
    combine(p, q, |a, b, radix| (a + b) % radix)
}

/// Digit-wise difference of the inversion vectors of `p` and `q`, decoded.
///
/// Both operands must be permutations of the same length.
pub fn subtract(p: &[El], q: &[El]) -> Vec<El> {
    combine(p, q, |a, b, radix| (a + radix - b) % radix)
}

fn combine(p: &[El], q: &[El], digit: impl Fn(El, El, El) -> El) -> Vec<El> {
    debug_assert_eq!(p.len(), q.len());
    let n = p.len();
    if n == 0 {
        return vec![];
    }
    let vector: Vec<El> = inversion_vector(p)
        .into_iter()
        .zip(inversion_vector(q))
        .enumerate()
        .map(|(i, (a, b))| digit(a, b, n - i))
        .collect();
    decode(&vector)
}
