//! Inclusive integer intervals and pairwise difference.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors raised when constructing an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    #[error("invalid range: low {low:#x} is greater than high {high:#x}")]
    InvalidRange { low: u64, high: u64 },
}

/// Closed range of unsigned integers `[low, high]`.
///
/// The only way to build one is through `Interval::new` (or `TryFrom`),
/// so `low <= high` holds for every value of this type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    low: u64,
    high: u64,
}

#[derive(Deserialize)]
struct RawInterval {
    low: u64,
    high: u64,
}

impl TryFrom<RawInterval> for Interval {
    type Error = IntervalError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::new(raw.low, raw.high)
    }
}

impl TryFrom<(u64, u64)> for Interval {
    type Error = IntervalError;

    fn try_from((low, high): (u64, u64)) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl Interval {
    pub fn new(low: u64, high: u64) -> Result<Self, IntervalError> {
        if low > high {
            return Err(IntervalError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Interval holding exactly one value.
    #[inline]
    pub const fn single(value: u64) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    #[inline]
    pub const fn low(&self) -> u64 {
        self.low
    }

    #[inline]
    pub const fn high(&self) -> u64 {
        self.high
    }

    #[inline]
    pub const fn contains(&self, value: u64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Number of values covered. `u128` because `[0, u64::MAX]` holds 2^64 values.
    #[inline]
    pub const fn len(&self) -> u128 {
        (self.high - self.low) as u128 + 1
    }

    /// Overlap of two intervals, if any.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        let low = self.low.max(other.low);
        let high = self.high.min(other.high);
        (low <= high).then_some(Interval { low, high })
    }

    /// True if `other` lies entirely inside `self`.
    #[inline]
    pub const fn covers(&self, other: &Interval) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    #[inline]
    const fn is_disjoint(&self, other: &Interval) -> bool {
        self.high < other.low || other.high < self.low
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#x}, {:#x}]", self.low, self.high)
    }
}

/// Values of `a` that are not in `b`.
///
/// Returns zero, one or two disjoint fragments in ascending order. None of
/// them is ever empty.
pub fn difference(a: Interval, b: Interval) -> Vec<Interval> {
    if a.is_disjoint(&b) {
        return vec![a];
    }

    if b.covers(&a) {
        return Vec::new();
    }

    if a.covers(&b) {
        let mut fragments = Vec::with_capacity(2);
        if a.low != b.low {
            fragments.push(Interval {
                low: a.low,
                high: b.low - 1,
            });
        }
        if b.high != a.high {
            fragments.push(Interval {
                low: b.high + 1,
                high: a.high,
            });
        }
        return fragments;
    }

    // Partial overlap: `b` sticks out of exactly one side of `a`.
    if a.low < b.low {
        return vec![Interval {
            low: a.low,
            high: b.low - 1,
        }];
    }

    vec![Interval {
        low: b.high + 1,
        high: a.high,
    }]
}
