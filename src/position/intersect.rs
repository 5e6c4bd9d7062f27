//! Range intersection
//!
//! All ranges are closed, so two ranges that share a single endpoint
//! overlap. Intersecting a chapter's span with a query range and shifting by
//! `C[s-1]` yields the chapter-local verses inside the query.

use std::cmp::{max, min};

use super::types::{GlobalRange, LocalRange};
use crate::chapter::CumulativeIndex;
use crate::error::{Coordinate, MapperError, Result};

/// True iff the closed ranges share at least one index.
pub fn intersects(a: GlobalRange, b: GlobalRange) -> bool {
    max(a.start(), b.start()) <= min(a.end(), b.end())
}

impl GlobalRange {
    /// Overlap of two ranges, `None` when they are disjoint
    pub fn intersection(&self, other: &GlobalRange) -> Option<GlobalRange> {
        let start = max(self.start(), other.start());
        let end = min(self.end(), other.end());
        (start <= end).then(|| GlobalRange::from_bounds(start, end))
    }
}

impl CumulativeIndex {
    /// Local verses of `chapter_id` that fall inside `query`.
    ///
    /// No overlap is `Ok(None)`; only an unknown chapter is an error.
    pub fn ayah_range_for_chapter_intersection(
        &self,
        chapter_id: u32,
        query: GlobalRange,
    ) -> Result<Option<LocalRange>> {
        let chapter = self.surah_range(chapter_id)?;
        let Some(overlap) = chapter.intersection(&query) else {
            tracing::trace!("Chapter {} does not overlap {}", chapter_id, query);
            return Ok(None);
        };

        let offset = self.at(chapter_id - 1);
        Ok(Some(LocalRange::new(
            chapter_id,
            overlap.start() - offset,
            overlap.end() - offset,
        )))
    }

    /// Every chapter overlapping `query`, in reading order, with its local sub-range.
    pub fn chapters_in_range(&self, query: GlobalRange) -> Result<Vec<LocalRange>> {
        let total = self.total();
        if query.end() > total {
            return Err(MapperError::out_of_range(
                Coordinate::Global,
                query.end(),
                total,
            ));
        }

        let first = self.from_global(query.start())?.chapter_id;
        let last = self.from_global(query.end())?.chapter_id;

        let mut ranges = Vec::with_capacity((last - first + 1) as usize);
        for chapter_id in first..=last {
            if let Some(local) = self.ayah_range_for_chapter_intersection(chapter_id, query)? {
                ranges.push(local);
            }
        }
        Ok(ranges)
    }
}
