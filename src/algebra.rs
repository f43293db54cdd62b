//! Set Algebra
//!
//! Binary operations over [`StringSet`]: union, intersection, difference and
//! equality, plus operator sugar. Every binary operation allocates a fresh
//! set and leaves both operands untouched; intersection is the only
//! operation that interprets the negative flag.

use std::ops::{BitAnd, BitOr, Not, Sub};

use crate::set::StringSet;

impl StringSet {
    /// Returns the union (OR) of the two sets as a new set.
    ///
    /// The negative flag has no effect on either operand and the result is
    /// always positive.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut members = self.members.clone();
        members.extend(other.members.iter().cloned());

        Self {
            members,
            negative: false,
        }
    }

    /// Returns the asymmetric set difference as a new set: the members of
    /// this set that are not in `other`.
    ///
    /// The negative flag has no effect on either operand and the result is
    /// always positive.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let members = self.members.difference(&other.members).cloned().collect();

        Self {
            members,
            negative: false,
        }
    }

    /// Returns the intersection (AND) of the two sets as a new set, where
    /// either or both operands may be negative:
    ///
    /// ```text
    ///  abc &  cde ==  c
    ///  abc & !cde ==  ab
    /// !abc &  cde ==  de
    /// !abc & !cde == !abcde
    /// ```
    ///
    /// Both operands are left unchanged. The result is negative only when
    /// both operands are negative, in which case it holds the union of their
    /// members.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        match (self.negative, other.negative) {
            (false, _) => self.signed_intersection(other),
            (true, false) => other.signed_intersection(self),
            (true, true) => {
                let mut union = self.union(other);
                union.negate();
                union
            }
        }
    }

    /// Intersects a positive receiver against a possibly-negative `other`:
    /// a member is kept iff its presence in `other` matches `other`'s sign.
    ///
    /// ```text
    /// abc &  cde == c
    /// abc & !cde == ab
    /// ```
    fn signed_intersection(&self, other: &Self) -> Self {
        // When both sides are positive the roles are interchangeable, so
        // iterate the smaller set and probe the larger.
        let (iterated, probed) = if !other.negative && other.members.len() < self.members.len() {
            (other, self)
        } else {
            (self, other)
        };

        let mut intersection = Self::new();
        for member in &iterated.members {
            if probed.members.contains(member) != probed.negative {
                intersection.members.insert(member.clone());
            }
        }

        intersection
    }

    /// Whether the two sets have the same members.
    ///
    /// The negative flag has no effect: a negative set equals a positive set
    /// with the same members. This asymmetry with
    /// [`intersection`](StringSet::intersection) is deliberate.
    pub fn equals(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

/// Equality carries the [`StringSet::equals`] contract: membership only,
/// ignoring the negative flag.
impl PartialEq for StringSet {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for StringSet {}

impl BitAnd<&StringSet> for &StringSet {
    type Output = StringSet;

    fn bitand(self, rhs: &StringSet) -> StringSet {
        self.intersection(rhs)
    }
}

impl BitOr<&StringSet> for &StringSet {
    type Output = StringSet;

    fn bitor(self, rhs: &StringSet) -> StringSet {
        self.union(rhs)
    }
}

impl Sub<&StringSet> for &StringSet {
    type Output = StringSet;

    fn sub(self, rhs: &StringSet) -> StringSet {
        self.difference(rhs)
    }
}

/// Negation by value, for building negative sets in one expression.
impl Not for StringSet {
    type Output = StringSet;

    fn not(mut self) -> StringSet {
        self.negate();
        self
    }
}
