//! Finite permutations in array and disjoint-cycle form
//!
//! This crate provides value types for permutations of `{0, ..., n-1}` together with the usual
//! group operations on them, conversion between array and cycle notation, and randomized
//! mutation operators of the kind used by local search.
//!
//! * [`ArrayForm`] stores the images of `0..n` and owns the positional, randomized and algebraic
//!   operators.
//! * [`Cycle`] and [`DisjointCycleForm`] represent a permutation by its cycles.
//!   [`decompose`] converts from array form in linear time and [`multiply_cycles`] composes any
//!   two [`Permutation`]s into disjoint cycles.
//! * [`lehmer`] encodes permutations as inversion vectors and defines digit-wise addition and
//!   subtraction on them.
//! * [`raw`] holds the underlying operations on plain slices.
//!
//! Composition applies the left operand first: the product of `p` and `q` sends `i` to
//! `q[p[i]]`.
pub mod action;
pub mod bits;
pub mod cycle;
pub mod cycles;
pub mod error;
pub mod lehmer;
pub mod mutation;
pub mod perm;
pub mod random;
pub mod raw;

pub use action::Permutation;
pub use bits::BitSet;
pub use cycle::Cycle;
pub use cycles::{decompose, multiply_cycles, DisjointCycleForm};
pub use error::PermError;
pub use perm::ArrayForm;
pub use random::{RandomSource, UnitInterval};

/// Set element.
///
/// Set elements are represented by non-negative integers (`usize`), which also index the array
/// form of a permutation.
pub type El = usize;
