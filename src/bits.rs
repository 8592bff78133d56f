//! Fixed-capacity bit sets used for point bookkeeping.
use bitvec::vec::BitVec;

/// A set of small non-negative integers stored as one bit per possible member.
///
/// The capacity grows when a bit past the end is set. Reading past the end yields `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSet {
    bits: BitVec,
}

impl BitSet {
    /// An empty set able to hold `0..capacity` without reallocating.
    pub fn new(capacity: usize) -> BitSet {
        BitSet {
            bits: BitVec::repeat(false, capacity),
        }
    }

    /// A set containing every element of `0..len`.
    pub fn full(len: usize) -> BitSet {
        BitSet {
            bits: BitVec::repeat(true, len),
        }
    }

    /// Number of bits currently allocated.
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    pub fn set(&mut self, i: usize) {
        if i >= self.bits.len() {
            self.bits.resize(i + 1, false);
        }
        self.bits.set(i, true);
    }

    pub fn clear(&mut self, i: usize) {
        if i < self.bits.len() {
            self.bits.set(i, false);
        }
    }

    pub fn get(&self, i: usize) -> bool {
        self.bits.get(i).map_or(false, |bit| *bit)
    }

    /// The smallest member that is `>= from`.
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        self.bits
            .get(from..)
            .and_then(|tail| tail.first_one())
            .map(|offset| from + offset)
    }

    /// Number of members.
    pub fn cardinality(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Whether both sets share a member.
    pub fn intersects(&self, other: &BitSet) -> bool {
        self.bits.iter_ones().any(|i| other.get(i))
    }

    /// Iterator over the members in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> BitSet {
        let mut set = BitSet::default();
        for i in iter {
            set.set(i);
        }
        set
    }
}
