//! Cartesian-product enumeration of local-parts

use std::iter::FusedIterator;

use super::formatter::push_formatted;
use crate::types::{Pattern, PatternSet, RangeMode};

/// Effective iteration range of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    /// First value produced
    pub start: i64,
    /// Number of values produced
    pub len: u128,
}

impl SlotRange {
    /// `min..=max`, empty when `min > max`
    pub fn inclusive(min: i64, max: i64) -> Self {
        let len = if min > max {
            0
        } else {
            (max as i128 - min as i128 + 1) as u128
        };
        Self { start: min, len }
    }

    /// `0..max`, empty when `max <= 0`
    pub fn zero_based(max: i64) -> Self {
        Self {
            start: 0,
            len: max.max(0) as u128,
        }
    }

    /// Range a slot iterates at `position` (0-based) under `mode`
    pub fn for_slot(pattern: &Pattern, position: usize, mode: RangeMode) -> Self {
        match (mode, position) {
            // First slot ignores `min` and excludes `max`.
            (RangeMode::Legacy, 0) => Self::zero_based(pattern.max),
            _ => Self::inclusive(pattern.min, pattern.max),
        }
    }

    /// Value at `offset`; `offset` must be below `len`
    fn value_at(&self, offset: u128) -> i64 {
        (self.start as i128 + offset as i128) as i64
    }
}

/// Lazy generator for every local-part of a pattern set.
///
/// Slot 1 is the outermost loop and slot 3 the innermost, so output is
/// ordered lexicographically by (slot1, slot2, slot3) iteration order.
/// Any local-part can be produced directly by index, which makes the
/// sequence restartable and resumable.
#[derive(Debug, Clone)]
pub struct Combinator<'a> {
    patterns: &'a [Pattern],
    ranges: Vec<SlotRange>,
    current_index: u128,
    total: u128,
}

impl<'a> Combinator<'a> {
    /// Create a combinator for `patterns` iterated under `mode`
    pub fn new(patterns: &'a PatternSet, mode: RangeMode) -> Self {
        let ranges: Vec<SlotRange> = patterns
            .iter()
            .enumerate()
            .map(|(position, pattern)| SlotRange::for_slot(pattern, position, mode))
            .collect();
        let total = Self::product(&ranges);

        Self {
            patterns: patterns.patterns(),
            ranges,
            current_index: 0,
            total,
        }
    }

    /// Product of range lengths, saturating at `u128::MAX`
    fn product(ranges: &[SlotRange]) -> u128 {
        if ranges.iter().any(|r| r.len == 0) {
            return 0;
        }
        ranges
            .iter()
            .try_fold(1u128, |acc, r| acc.checked_mul(r.len))
            .unwrap_or(u128::MAX)
    }

    /// Effective range of each slot
    pub fn ranges(&self) -> &[SlotRange] {
        &self.ranges
    }

    /// Get total number of local-parts
    pub fn total(&self) -> u128 {
        self.total
    }

    /// Get current progress index
    pub fn current_index(&self) -> u128 {
        self.current_index
    }

    /// Set current index (for resume)
    pub fn set_index(&mut self, index: u128) {
        self.current_index = index.min(self.total);
    }

    /// Rewind to the first local-part
    pub fn reset(&mut self) {
        self.current_index = 0;
    }

    /// Slot values of the combination at `index`
    pub fn values_at(&self, index: u128) -> Option<Vec<i64>> {
        if index >= self.total {
            return None;
        }

        let mut values = vec![0; self.ranges.len()];
        let mut n = index;

        for (i, range) in self.ranges.iter().enumerate().rev() {
            values[i] = range.value_at(n % range.len);
            n /= range.len;
        }

        Some(values)
    }

    /// Generate local-part at specific index
    pub fn local_part_at(&self, index: u128) -> Option<String> {
        let values = self.values_at(index)?;
        let mut local_part = String::new();
        for (pattern, value) in self.patterns.iter().zip(values) {
            push_formatted(&mut local_part, pattern, value);
        }
        Some(local_part)
    }

    /// Generate next batch of local-parts
    pub fn next_batch(&mut self, count: usize) -> Vec<String> {
        self.by_ref().take(count).collect()
    }

    /// Check if generator is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.total
    }

    /// Remaining count
    pub fn remaining(&self) -> u128 {
        self.total.saturating_sub(self.current_index)
    }
}

impl Iterator for Combinator<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let local_part = self.local_part_at(self.current_index)?;
        self.current_index += 1;
        Some(local_part)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.set_index(self.current_index.saturating_add(n as u128));
        self.next()
    }
}

impl FusedIterator for Combinator<'_> {}

/// Every local-part of `patterns` under the legacy range rule, eagerly collected
pub fn combine(patterns: &PatternSet) -> Vec<String> {
    combine_with_mode(patterns, RangeMode::Legacy)
}

/// Every local-part of `patterns` under `mode`, eagerly collected
pub fn combine_with_mode(patterns: &PatternSet, mode: RangeMode) -> Vec<String> {
    Combinator::new(patterns, mode).collect()
}
