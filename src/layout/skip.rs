//! Slot skip strategies
//!
//! A ring is divided into `period` equally spaced slots. The skip strategy
//! decides which of those slots receive an object; the same template repeats
//! on every ring.

use std::fmt;

use super::error::LayoutError;

/// How occupied and skipped slots are chosen within one ring period
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipStrategy {
    /// Explicit template, `true` = occupied, `false` = skipped
    ByPattern(Vec<bool>),
    /// Occupy one slot, then skip `n` slots
    ByCount(usize),
}

impl Default for SkipStrategy {
    fn default() -> Self {
        SkipStrategy::pattern("1111")
    }
}

impl SkipStrategy {
    /// Build a pattern strategy from a string of `0`/`1` characters.
    ///
    /// Any other character is dropped, so `"1 0-1"` reads as `101`. The result
    /// is not validated here; see [`SkipStrategy::resolve`].
    pub fn pattern(bits: &str) -> Self {
        SkipStrategy::ByPattern(
            bits.chars()
                .filter_map(|c| match c {
                    '1' => Some(true),
                    '0' => Some(false),
                    _ => None,
                })
                .collect(),
        )
    }

    /// Build a count strategy: every `(skip + 1)`-th slot is occupied
    pub fn count(skip: usize) -> Self {
        SkipStrategy::ByCount(skip)
    }

    /// Number of occupied slots per ring
    pub fn occupied_count(&self) -> usize {
        match self {
            SkipStrategy::ByPattern(bits) => bits.iter().filter(|b| **b).count(),
            SkipStrategy::ByCount(_) => 1,
        }
    }

    /// One-line description shown next to the skip setting
    pub fn summary(&self) -> String {
        match self {
            SkipStrategy::ByPattern(bits) if bits.is_empty() => "Invalid skip list.".to_string(),
            _ => format!("Valid Skip Count (1's): {}", self.occupied_count()),
        }
    }

    /// Expand into a concrete slot template.
    ///
    /// Fails with [`LayoutError::InvalidSkipPattern`] when a pattern is empty
    /// or has no occupied slot, or when a count's period overflows `usize`.
    pub fn resolve(&self) -> Result<SlotPattern, LayoutError> {
        match self {
            SkipStrategy::ByPattern(bits) => {
                if bits.is_empty() {
                    return Err(LayoutError::invalid_pattern("no '0' or '1' characters"));
                }
                SlotPattern::new(bits)
            }
            SkipStrategy::ByCount(skip) => skip
                .checked_add(1)
                .map(SlotPattern::single)
                .ok_or_else(|| LayoutError::invalid_pattern("skip count too large")),
        }
    }
}

impl fmt::Display for SkipStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipStrategy::ByPattern(bits) => {
                for bit in bits {
                    f.write_str(if *bit { "1" } else { "0" })?;
                }
                Ok(())
            }
            SkipStrategy::ByCount(skip) => write!(f, "skip {}", skip),
        }
    }
}

/// A validated slot template: at least one slot, at least one occupied.
///
/// Only the occupied indices are stored, so a count strategy with a very
/// long period costs no more than a short one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPattern {
    period: usize,
    occupied: Vec<usize>,
}

impl SlotPattern {
    pub fn new(slots: &[bool]) -> Result<Self, LayoutError> {
        let occupied: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter(|(_, bit)| **bit)
            .map(|(i, _)| i)
            .collect();
        if occupied.is_empty() {
            return Err(LayoutError::invalid_pattern("no occupied slots"));
        }
        Ok(Self {
            period: slots.len(),
            occupied,
        })
    }

    /// Slot 0 occupied, the remaining `period - 1` slots skipped
    fn single(period: usize) -> Self {
        Self {
            period,
            occupied: vec![0],
        }
    }

    /// Number of slots in one ring, occupied or not
    pub fn period(&self) -> usize {
        self.period
    }

    /// Number of objects a single ring holds
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    /// Indices of occupied slots, ascending
    pub fn occupied_slots(&self) -> &[usize] {
        &self.occupied
    }

    /// Ring and slot index for the object at global position `index`
    pub fn locate(&self, index: usize) -> (usize, usize) {
        let per_ring = self.occupied.len();
        (index / per_ring, self.occupied[index % per_ring])
    }

    /// Rings needed to hold `count` objects
    pub fn rings_for(&self, count: usize) -> usize {
        count.div_ceil(self.occupied.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_filters_noise() {
        assert_eq!(
            SkipStrategy::pattern("1 0-1x"),
            SkipStrategy::ByPattern(vec![true, false, true])
        );
    }

    #[test]
    fn test_count_resolves_to_single_leading_slot() {
        let pattern = SkipStrategy::count(3).resolve().unwrap();
        assert_eq!(pattern.period(), 4);
        assert_eq!(pattern.occupied_slots(), &[0]);
    }

    #[test]
    fn test_count_zero_means_no_skipping() {
        let pattern = SkipStrategy::count(0).resolve().unwrap();
        assert_eq!(pattern.period(), 1);
        assert_eq!(pattern.occupied_count(), 1);
    }

    #[test]
    fn test_huge_count_keeps_period_without_expanding_it() {
        let skip = usize::MAX / 2;
        let pattern = SkipStrategy::count(skip).resolve().unwrap();
        assert_eq!(pattern.period(), skip + 1);
        assert_eq!(pattern.occupied_slots(), &[0]);
        assert_eq!(pattern.locate(3), (3, 0));
    }

    #[test]
    fn test_count_at_usize_max_rejected() {
        let err = SkipStrategy::count(usize::MAX).resolve().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidSkipPattern { .. }));
    }

    #[test]
    fn test_matching_count_and_pattern_resolve_equal() {
        assert_eq!(
            SkipStrategy::count(3).resolve().unwrap(),
            SkipStrategy::pattern("1000").resolve().unwrap()
        );
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = SkipStrategy::pattern("abc").resolve().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidSkipPattern { .. }));
    }

    #[test]
    fn test_all_zero_pattern_rejected() {
        let err = SkipStrategy::pattern("0000").resolve().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidSkipPattern { .. }));
    }

    #[test]
    fn test_locate_wraps_into_next_ring() {
        let pattern = SkipStrategy::pattern("1010").resolve().unwrap();
        assert_eq!(pattern.locate(0), (0, 0));
        assert_eq!(pattern.locate(1), (0, 2));
        assert_eq!(pattern.locate(2), (1, 0));
        assert_eq!(pattern.locate(5), (2, 2));
    }

    #[test]
    fn test_rings_for_partial_ring() {
        let pattern = SkipStrategy::pattern("111").resolve().unwrap();
        assert_eq!(pattern.rings_for(3), 1);
        assert_eq!(pattern.rings_for(4), 2);
        assert_eq!(pattern.rings_for(7), 3);
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            SkipStrategy::pattern("101011").summary(),
            "Valid Skip Count (1's): 4"
        );
        assert_eq!(SkipStrategy::pattern("").summary(), "Invalid skip list.");
        assert_eq!(SkipStrategy::count(4).summary(), "Valid Skip Count (1's): 1");
    }

    #[test]
    fn test_display() {
        assert_eq!(SkipStrategy::pattern("1100").to_string(), "1100");
        assert_eq!(SkipStrategy::count(2).to_string(), "skip 2");
    }
}
