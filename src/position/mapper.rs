//! Local <-> global position mapping
//!
//! `to_global` is a single addition against the prefix sums. `from_global`
//! inverts it with a lower-bound binary search: the owning chapter is the
//! smallest `s` with `C[s] >= g`.

use super::types::{GlobalIndex, GlobalRange, LocalPosition};
use crate::chapter::CumulativeIndex;
use crate::error::{Coordinate, MapperError, Result};

impl CumulativeIndex {
    /// Global index of verse `verse_in_chapter` of `chapter_id`.
    pub fn to_global(&self, chapter_id: u32, verse_in_chapter: u32) -> Result<GlobalIndex> {
        let verse_count = self.checked_verse_count(chapter_id)?;
        if verse_in_chapter == 0 || verse_in_chapter > verse_count {
            return Err(MapperError::out_of_range(
                Coordinate::Verse,
                verse_in_chapter,
                verse_count,
            ));
        }
        Ok(self.at(chapter_id - 1) + verse_in_chapter)
    }

    /// Chapter-relative position of global index `g`.
    pub fn from_global(&self, g: GlobalIndex) -> Result<LocalPosition> {
        let total = self.total();
        if g == 0 || g > total {
            return Err(MapperError::out_of_range(Coordinate::Global, g, total));
        }

        let mut lo = 1u32;
        let mut hi = self.chapter_count();
        let mut found = hi;
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            if self.at(mid) >= g {
                found = mid;
                hi = mid - 1;
            } else {
                lo = mid + 1;
            }
        }

        Ok(LocalPosition::new(found, g - self.at(found - 1)))
    }

    /// Global span of a whole chapter: `[C[s-1] + 1, C[s]]`.
    pub fn surah_range(&self, chapter_id: u32) -> Result<GlobalRange> {
        self.checked_verse_count(chapter_id)?;
        Ok(GlobalRange::from_bounds(
            self.at(chapter_id - 1) + 1,
            self.at(chapter_id),
        ))
    }

    pub(crate) fn checked_verse_count(&self, chapter_id: u32) -> Result<u32> {
        self.verse_count(chapter_id).ok_or_else(|| {
            MapperError::out_of_range(Coordinate::Chapter, chapter_id, self.chapter_count())
        })
    }
}
