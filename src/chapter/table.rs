//! Chapter table
//!
//! Per-chapter verse counts as delivered by the chapter-metadata source.
//! Entries may arrive in any order; validation sorts them by id and checks
//! that ids form the contiguous run `1..=n`.

use serde::{Deserialize, Serialize};

use crate::error::{MapperError, Result};

/// Number of chapters in a complete edition
pub const CHAPTER_COUNT: usize = 114;

/// One chapter record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// 1-based chapter id
    pub id: u32,
    /// Number of verses in the chapter
    #[serde(alias = "verses_count")]
    pub verse_count: u32,
}

impl Chapter {
    pub fn new(id: u32, verse_count: u32) -> Self {
        Self { id, verse_count }
    }
}

/// Validated verse counts, indexed by `chapter id - 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterTable {
    verse_counts: Vec<u32>,
}

impl ChapterTable {
    /// Validate a complete table of [`CHAPTER_COUNT`] chapters.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self> {
        Self::with_len(chapters, CHAPTER_COUNT)
    }

    /// Validate a table that must hold exactly `len` chapters.
    ///
    /// Used for abridged editions and fixtures; [`ChapterTable::new`] is the
    /// complete-edition entry point.
    pub fn with_len(mut chapters: Vec<Chapter>, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(reject("table has no chapters".to_string()));
        }
        if chapters.len() != len {
            return Err(reject(format!(
                "expected {} chapters, got {}",
                len,
                chapters.len()
            )));
        }

        chapters.sort_by_key(|c| c.id);

        let mut verse_counts = Vec::with_capacity(len);
        let mut total = 0u32;
        for (position, chapter) in chapters.iter().enumerate() {
            let expected = position as u32 + 1;
            if chapter.id != expected {
                // Sorted ids that skip `expected` mean it is missing (or a
                // neighbour is duplicated).
                return Err(reject(format!(
                    "chapter {} missing or duplicated (found id {})",
                    expected, chapter.id
                )));
            }
            if chapter.verse_count == 0 {
                return Err(reject(format!("chapter {} has no verses", chapter.id)));
            }
            total = total
                .checked_add(chapter.verse_count)
                .ok_or_else(|| reject("total verse count overflows u32".to_string()))?;
            verse_counts.push(chapter.verse_count);
        }

        Ok(Self { verse_counts })
    }

    /// Build from counts listed in chapter order (`counts[0]` is chapter 1).
    pub fn from_verse_counts(counts: &[u32]) -> Result<Self> {
        let chapters = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| Chapter::new(i as u32 + 1, count))
            .collect();
        Self::with_len(chapters, counts.len())
    }

    /// Skips validation; only for the bundled tables, which are checked by tests.
    pub(crate) fn from_trusted(counts: &[u32]) -> Self {
        Self {
            verse_counts: counts.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.verse_counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verse_counts.is_empty()
    }

    /// Verse count of a chapter, `None` if the id is unknown
    pub fn verse_count(&self, chapter_id: u32) -> Option<u32> {
        let idx = (chapter_id as usize).checked_sub(1)?;
        self.verse_counts.get(idx).copied()
    }

    pub fn verse_counts(&self) -> &[u32] {
        &self.verse_counts
    }

    pub fn chapters(&self) -> impl Iterator<Item = Chapter> + '_ {
        self.verse_counts
            .iter()
            .enumerate()
            .map(|(i, &count)| Chapter::new(i as u32 + 1, count))
    }
}

fn reject(reason: String) -> MapperError {
    tracing::warn!("Rejecting chapter table: {}", reason);
    MapperError::InvalidChapterTable(reason)
}
