//! Region classification for the current selection.
//!
//! The windowed layout uses three formula sets depending on where the
//! selection sits in the strip; this module picks which one applies.

/// Position of the current selection relative to the whole strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Selection is pinned near the first dot; the window hugs the
    /// leading edge.
    Start,
    /// Selection is far from both edges; the window is centered on it.
    Center,
    /// Selection is pinned near the last dot; the window hugs the
    /// trailing edge.
    End,
}

impl Region {
    /// Classifies `index` into a region.
    ///
    /// `Start` covers `[0, middle_count]` inclusive, `End` covers
    /// `[total - middle_count - 1, total)`. `Start` is checked first,
    /// so when the two ranges overlap (totals barely above the window
    /// size) `Start` wins; the windowed pipeline relies on that
    /// ordering and a test pins it down.
    ///
    /// Callers reach this only on the windowed path, i.e. with
    /// `total > visible_count`; degenerate totals (0, 1) still
    /// classify without panicking.
    #[must_use]
    pub fn classify(index: usize, total: usize, middle_count: usize) -> Self {
        if index <= middle_count {
            Self::Start
        } else if index + middle_count + 1 >= total {
            Self::End
        } else {
            Self::Center
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_large_total() {
        let total = 20;
        let middle = 3;
        for index in 0..=3 {
            assert_eq!(Region::classify(index, total, middle), Region::Start);
        }
        for index in 4..16 {
            assert_eq!(Region::classify(index, total, middle), Region::Center);
        }
        for index in 16..20 {
            assert_eq!(Region::classify(index, total, middle), Region::End);
        }
    }

    #[test]
    fn test_start_wins_when_ranges_overlap() {
        // total = 7 with middle_count = 3: index 3 is inside both the
        // start range [0, 3] and the end range [3, 7). Start is
        // evaluated first and wins. Preserved behavior.
        assert_eq!(Region::classify(3, 7, 3), Region::Start);
        assert_eq!(Region::classify(4, 7, 3), Region::End);
    }

    #[test]
    fn test_degenerate_totals_do_not_panic() {
        assert_eq!(Region::classify(0, 0, 3), Region::Start);
        assert_eq!(Region::classify(0, 1, 3), Region::Start);
    }
}
