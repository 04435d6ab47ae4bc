//! Group-by over transaction ids with a running min/max per group.
//!
//! One pass over the rows; each id keeps a single accumulator. Output is a
//! `BTreeMap` so groups always come back in id order.

use log::debug;
use std::collections::BTreeMap;
use std::fmt;

/// A time value the aggregator can reduce
///
/// Implemented for raw nanoseconds (`i64`) and normalized milliseconds (`f64`).
pub trait Timestamp: Copy + PartialOrd + fmt::Display {
    fn as_f64(self) -> f64;

    /// `later - earlier`, assuming `earlier <= later`
    fn span_between(earlier: Self, later: Self) -> Self;
}

impl Timestamp for i64 {
    fn as_f64(self) -> f64 {
        self as f64
    }

    // Clamps at i64::MAX instead of wrapping negative
    fn span_between(earlier: Self, later: Self) -> Self {
        later.saturating_sub(earlier)
    }
}

impl Timestamp for f64 {
    fn as_f64(self) -> f64 {
        self
    }

    fn span_between(earlier: Self, later: Self) -> Self {
        later - earlier
    }
}

/// Earliest and latest time seen for one transaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: Timestamp> TimeBounds<T> {
    pub fn new(time: T) -> Self {
        Self { min: time, max: time }
    }

    /// Widen the bounds to cover `time`
    pub fn include(&mut self, time: T) {
        if time < self.min {
            self.min = time;
        }
        if time > self.max {
            self.max = time;
        }
    }

    /// Processing span; never negative since `min <= max`
    pub fn span(&self) -> T {
        T::span_between(self.min, self.max)
    }
}

/// Min/max time per transaction id
pub fn group_bounds<'a, T, I>(rows: I) -> BTreeMap<String, TimeBounds<T>>
where
    T: Timestamp,
    I: IntoIterator<Item = (&'a str, T)>,
{
    let mut groups: BTreeMap<String, TimeBounds<T>> = BTreeMap::new();
    let mut row_count = 0usize;

    for (id, time) in rows {
        row_count += 1;
        match groups.get_mut(id) {
            Some(bounds) => bounds.include(time),
            None => {
                groups.insert(id.to_string(), TimeBounds::new(time));
            }
        }
    }

    debug!("Grouped {} rows into {} transactions", row_count, groups.len());

    groups
}
