//! Editions: a chapter table and a hizb table over the same verse sequence
//!
//! An [`Edition`] is built once, validated as a whole, and then only read.
//! Switching editions means building a new value; tables are never patched
//! in place, so any clone held elsewhere stays consistent.
//!
//! Editions other than the bundled Hafs tables are loaded from JSON:
//!
//! ```json
//! {
//!   "chapters": [{ "id": 1, "verseCount": 7 }, { "id": 2, "verses_count": 286 }],
//!   "hizbStarts": [1, 82, 149]
//! }
//! ```

mod hafs;

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::chapter::{Chapter, ChapterTable, CumulativeIndex};
use crate::error::Result;
use crate::hizb::HizbIndex;
use crate::point::{Point, Position};
use crate::position::{GlobalIndex, GlobalRange, LocalPosition, LocalRange};

/// Serialized form of an edition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditionData {
    pub chapters: Vec<Chapter>,
    pub hizb_starts: Vec<GlobalIndex>,
}

/// Validated chapter and hizb tables plus the derived prefix sums
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edition {
    chapters: ChapterTable,
    index: CumulativeIndex,
    hizbs: HizbIndex,
}

impl Edition {
    /// The bundled Hafs edition (114 chapters, 6236 verses, 60 hizbs)
    pub fn hafs() -> Self {
        let chapters = ChapterTable::from_trusted(&hafs::VERSE_COUNTS);
        let index = CumulativeIndex::new(&chapters);
        let hizbs = HizbIndex::from_trusted(&hafs::HIZB_STARTS, hafs::TOTAL_VERSES);
        Self {
            chapters,
            index,
            hizbs,
        }
    }

    pub fn from_parts(chapters: Vec<Chapter>, hizb_starts: Vec<GlobalIndex>) -> Result<Self> {
        let chapters = ChapterTable::new(chapters)?;
        let index = CumulativeIndex::new(&chapters);
        let hizbs = HizbIndex::new(hizb_starts, index.total())?;

        tracing::debug!(
            "Built edition: {} chapters, {} verses, {} hizbs",
            chapters.len(),
            index.total(),
            hizbs.starts().len()
        );

        Ok(Self {
            chapters,
            index,
            hizbs,
        })
    }

    pub fn from_data(data: EditionData) -> Result<Self> {
        Self::from_parts(data.chapters, data.hizb_starts)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_data(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_data(serde_json::from_reader(reader)?)
    }

    pub fn to_data(&self) -> EditionData {
        EditionData {
            chapters: self.chapters.chapters().collect(),
            hizb_starts: self.hizbs.starts().to_vec(),
        }
    }

    pub fn chapters(&self) -> &ChapterTable {
        &self.chapters
    }

    pub fn index(&self) -> &CumulativeIndex {
        &self.index
    }

    pub fn hizbs(&self) -> &HizbIndex {
        &self.hizbs
    }

    pub fn total_verses(&self) -> u32 {
        self.index.total()
    }

    pub fn to_global(&self, chapter_id: u32, verse_in_chapter: u32) -> Result<GlobalIndex> {
        self.index.to_global(chapter_id, verse_in_chapter)
    }

    pub fn from_global(&self, g: GlobalIndex) -> Result<LocalPosition> {
        self.index.from_global(g)
    }

    pub fn surah_range(&self, chapter_id: u32) -> Result<GlobalRange> {
        self.index.surah_range(chapter_id)
    }

    pub fn hizb_range(&self, hizb: u32) -> Result<GlobalRange> {
        self.hizbs.hizb_range(hizb)
    }

    /// Hizb containing a chapter-relative verse
    pub fn hizb_of(&self, chapter_id: u32, verse_in_chapter: u32) -> Result<u32> {
        self.hizbs
            .hizb_of(self.index.to_global(chapter_id, verse_in_chapter)?)
    }

    /// Verses of `chapter_id` that belong to `hizb`, `None` if they share none.
    pub fn verses_of_chapter_in_hizb(
        &self,
        chapter_id: u32,
        hizb: u32,
    ) -> Result<Option<LocalRange>> {
        let range = self.hizbs.hizb_range(hizb)?;
        self.index.ayah_range_for_chapter_intersection(chapter_id, range)
    }

    /// Chapters spanned by `hizb`, each with the local verses it contributes
    pub fn chapters_in_hizb(&self, hizb: u32) -> Result<Vec<LocalRange>> {
        self.index.chapters_in_range(self.hizbs.hizb_range(hizb)?)
    }

    /// Range-check a typed position and return the verses it selects.
    pub fn resolve_position(&self, position: Position) -> Result<GlobalRange> {
        match position {
            Position::Verse(p) => {
                let g = self.index.to_global(p.chapter_id, p.verse_in_chapter)?;
                GlobalRange::single(g)
            }
            Position::Hizb(h) => self.hizbs.hizb_range(h),
        }
    }

    /// Validate a parsed point against this edition; the empty point selects nothing.
    pub fn resolve(&self, point: &Point) -> Result<Option<GlobalRange>> {
        point
            .to_position()?
            .map(|position| self.resolve_position(position))
            .transpose()
    }
}

impl Default for Edition {
    fn default() -> Self {
        Self::hafs()
    }
}
