//! Hizb boundary index
//!
//! The 60 hizb segments partition the same verse sequence as the chapters
//! but are defined independently, so their boundaries usually fall inside
//! chapters. Only the start index of each hizb is stored; the last hizb runs
//! to the end of the text.

use crate::error::{Coordinate, MapperError, Result};
use crate::position::{GlobalIndex, GlobalRange};

/// Number of hizb segments
pub const HIZB_COUNT: usize = 60;

/// Hizb start indices plus the total verse count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HizbIndex {
    starts: Vec<GlobalIndex>,
    total: u32,
}

impl HizbIndex {
    /// Validate a table of [`HIZB_COUNT`] start indices against `total` verses.
    pub fn new(starts: Vec<GlobalIndex>, total: u32) -> Result<Self> {
        if starts.len() != HIZB_COUNT {
            return Err(reject(format!(
                "expected {} hizb starts, got {}",
                HIZB_COUNT,
                starts.len()
            )));
        }
        if starts[0] != 1 {
            return Err(reject(format!(
                "first hizb must start at 1, not {}",
                starts[0]
            )));
        }
        if let Some(i) = starts.windows(2).position(|w| w[0] >= w[1]) {
            return Err(reject(format!(
                "hizb {} starts at {}, not after hizb {} at {}",
                i + 2,
                starts[i + 1],
                i + 1,
                starts[i]
            )));
        }
        let last = starts[HIZB_COUNT - 1];
        if last > total {
            return Err(reject(format!(
                "hizb {} starts at {}, past the last verse {}",
                HIZB_COUNT, last, total
            )));
        }

        Ok(Self { starts, total })
    }

    /// Skips validation; only for the bundled tables, which are checked by tests.
    pub(crate) fn from_trusted(starts: &[GlobalIndex], total: u32) -> Self {
        Self {
            starts: starts.to_vec(),
            total,
        }
    }

    pub fn starts(&self) -> &[GlobalIndex] {
        &self.starts
    }

    /// Last global index covered by the table
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Global span of hizb `h` (1-based).
    pub fn hizb_range(&self, h: u32) -> Result<GlobalRange> {
        let count = self.starts.len() as u32;
        if h == 0 || h > count {
            return Err(MapperError::out_of_range(Coordinate::Hizb, h, count));
        }

        let i = (h - 1) as usize;
        let end = match self.starts.get(i + 1) {
            Some(next) => next - 1,
            None => self.total,
        };
        Ok(GlobalRange::from_bounds(self.starts[i], end))
    }

    /// Hizb containing global index `g`.
    pub fn hizb_of(&self, g: GlobalIndex) -> Result<u32> {
        if g == 0 || g > self.total {
            return Err(MapperError::out_of_range(Coordinate::Global, g, self.total));
        }
        // Number of hizbs starting at or before `g`; starts[0] == 1 keeps it >= 1.
        Ok(self.starts.partition_point(|&start| start <= g) as u32)
    }

    /// All hizb spans in order
    pub fn ranges(&self) -> impl Iterator<Item = GlobalRange> + '_ {
        self.starts.iter().enumerate().map(move |(i, &start)| {
            let end = self
                .starts
                .get(i + 1)
                .map_or(self.total, |next| next - 1);
            GlobalRange::from_bounds(start, end)
        })
    }
}

fn reject(reason: String) -> MapperError {
    tracing::warn!("Rejecting hizb table: {}", reason);
    MapperError::InvalidHizbTable(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every hizb is 10 verses long over a 600-verse text.
    fn even_index() -> HizbIndex {
        let starts = (0..HIZB_COUNT as u32).map(|i| i * 10 + 1).collect();
        HizbIndex::new(starts, 600).unwrap()
    }

    #[test]
    fn test_hizb_range() {
        let index = even_index();
        assert_eq!(index.hizb_range(1).unwrap(), GlobalRange::new(1, 10).unwrap());
        assert_eq!(index.hizb_range(2).unwrap(), GlobalRange::new(11, 20).unwrap());
        assert_eq!(index.hizb_range(60).unwrap(), GlobalRange::new(591, 600).unwrap());
    }

    #[test]
    fn test_last_hizb_runs_to_total() {
        let starts = (0..HIZB_COUNT as u32).map(|i| i * 10 + 1).collect();
        let index = HizbIndex::new(starts, 1000).unwrap();
        assert_eq!(index.hizb_range(60).unwrap(), GlobalRange::new(591, 1000).unwrap());
    }

    #[test]
    fn test_hizb_range_out_of_range() {
        let index = even_index();
        assert_eq!(
            index.hizb_range(0),
            Err(MapperError::out_of_range(Coordinate::Hizb, 0, 60))
        );
        assert_eq!(
            index.hizb_range(61),
            Err(MapperError::out_of_range(Coordinate::Hizb, 61, 60))
        );
    }

    #[test]
    fn test_hizb_of() {
        let index = even_index();
        assert_eq!(index.hizb_of(1).unwrap(), 1);
        assert_eq!(index.hizb_of(10).unwrap(), 1);
        assert_eq!(index.hizb_of(11).unwrap(), 2);
        assert_eq!(index.hizb_of(600).unwrap(), 60);
        assert!(index.hizb_of(0).is_err());
        assert!(index.hizb_of(601).is_err());
    }

    #[test]
    fn test_ranges_partition_text() {
        let index = even_index();
        let ranges: Vec<_> = index.ranges().collect();
        assert_eq!(ranges.len(), HIZB_COUNT);
        assert_eq!(ranges[0].start(), 1);
        assert_eq!(ranges[HIZB_COUNT - 1].end(), 600);
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end() + 1, pair[1].start());
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(matches!(
            HizbIndex::new(vec![1, 5, 9], 100),
            Err(MapperError::InvalidHizbTable(_))
        ));
    }

    #[test]
    fn test_rejects_bad_first_start() {
        let starts = (0..HIZB_COUNT as u32).map(|i| i * 10 + 2).collect();
        assert!(HizbIndex::new(starts, 600).is_err());
    }

    #[test]
    fn test_rejects_non_increasing() {
        let mut starts: Vec<u32> = (0..HIZB_COUNT as u32).map(|i| i * 10 + 1).collect();
        starts[5] = starts[4];
        let err = HizbIndex::new(starts, 600).unwrap_err();
        assert_eq!(
            err,
            MapperError::InvalidHizbTable(
                "hizb 6 starts at 41, not after hizb 5 at 41".to_string()
            )
        );
    }

    #[test]
    fn test_rejects_start_past_total() {
        let starts = (0..HIZB_COUNT as u32).map(|i| i * 10 + 1).collect();
        assert!(HizbIndex::new(starts, 500).is_err());
    }
}
