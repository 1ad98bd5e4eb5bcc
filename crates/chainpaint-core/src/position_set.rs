//! A compact set of board positions.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub, SubAssign},
};

use crate::position::{CELLS, Position};

/// A set of board positions stored as a 48-bit bitboard.
///
/// Components, match sets, recolor patterns and exclusion masks are all
/// position sets. Iteration follows row-major order.
///
/// # Examples
///
/// ```
/// use chainpaint_core::{Position, PositionSet};
///
/// let mut set = PositionSet::EMPTY;
/// set.insert(Position::new(0, 0));
/// set.insert(Position::new(7, 5));
/// assert_eq!(set.len(), 2);
///
/// let rest = !set;
/// assert_eq!(rest.len(), 46);
/// assert!((set & rest).is_empty());
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSet {
    bits: u64,
}

impl PositionSet {
    const MASK: u64 = (1 << CELLS) - 1;

    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set of all 48 positions.
    pub const FULL: Self = Self { bits: Self::MASK };

    /// Creates an empty set.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set holding one position.
    #[must_use]
    #[inline]
    pub const fn from_elem(pos: Position) -> Self {
        Self {
            bits: 1 << pos.index(),
        }
    }

    /// Returns the raw bitboard (bit `i` is [`Position::from_index(i)`]).
    #[must_use]
    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Returns the number of positions in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set holds no position.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if `pos` is in the set.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & (1 << pos.index()) != 0
    }

    /// Inserts a position; returns `true` if it was not present.
    #[inline]
    pub fn insert(&mut self, pos: Position) -> bool {
        let bit = 1 << pos.index();
        let added = self.bits & bit == 0;
        self.bits |= bit;
        added
    }

    /// Removes a position; returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, pos: Position) -> bool {
        let bit = 1 << pos.index();
        let present = self.bits & bit != 0;
        self.bits &= !bit;
        present
    }

    /// Returns `true` if every position of `self` is also in `other`.
    #[must_use]
    #[inline]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns the first position in row-major order.
    #[must_use]
    #[inline]
    pub fn first(self) -> Option<Position> {
        self.iter().next()
    }

    /// Returns an iterator over the positions in row-major order.
    #[must_use]
    #[inline]
    pub const fn iter(self) -> PositionSetIter {
        PositionSetIter { bits: self.bits }
    }
}

impl Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for PositionSet {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for PositionSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for PositionSet {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for PositionSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl Sub for PositionSet {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & !rhs.bits,
        }
    }
}

impl SubAssign for PositionSet {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.bits &= !rhs.bits;
    }
}

impl Not for PositionSet {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self {
            bits: !self.bits & Self::MASK,
        }
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Position> for PositionSet {
    fn extend<T: IntoIterator<Item = Position>>(&mut self, iter: T) {
        for pos in iter {
            self.insert(pos);
        }
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = PositionSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &PositionSet {
    type Item = Position;
    type IntoIter = PositionSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`].
#[derive(Debug, Clone)]
pub struct PositionSetIter {
    bits: u64,
}

impl Iterator for PositionSetIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Position::from_index(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for PositionSetIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = 63 - self.bits.leading_zeros() as usize;
        self.bits &= !(1 << index);
        Some(Position::from_index(index))
    }
}

impl ExactSizeIterator for PositionSetIter {}
impl FusedIterator for PositionSetIter {}
