//! Errors reported by permutation constructors and operators.
use thiserror::Error;

use crate::El;

/// Failure of a permutation constructor or operator.
///
/// All errors are detected before any in-place write, so a value that an operator failed on is
/// left unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PermError {
    #[error("{0:?} is not a permutation of 0..{len}", len = .0.len())]
    InvalidPermutation(Vec<El>),
    #[error("{0:?} is not a cycle: elements must be distinct and there must be at least one")]
    InvalidCycle(Vec<El>),
    #[error("cycles are not disjoint: {point} is moved by more than one cycle")]
    NonDisjointCycles { point: El },
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("index {index} out of range for a permutation of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{0:?} is not an inversion vector")]
    InvalidInversionVector(Vec<El>),
    #[error("{0} is not in the unit interval")]
    NotInUnitInterval(f64),
}

/// Fails with [`PermError::LengthMismatch`] unless both lengths agree.
pub(crate) fn same_len(left: usize, right: usize) -> Result<(), PermError> {
    if left == right {
        Ok(())
    } else {
        Err(PermError::LengthMismatch { left, right })
    }
}

/// Fails with [`PermError::IndexOutOfRange`] unless `index < len`.
pub(crate) fn in_range(index: usize, len: usize) -> Result<(), PermError> {
    if index < len {
        Ok(())
    } else {
        Err(PermError::IndexOutOfRange { index, len })
    }
}
