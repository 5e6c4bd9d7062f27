//! Position and range value types
//!
//! A verse is addressed either locally, as `(chapter, verse)`, or globally,
//! as its 1-based index in reading order across the whole text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MapperError, Result};

/// 1-based index of a verse in reading order
pub type GlobalIndex = u32;

/// A verse addressed relative to its chapter
///
/// Ordering is reading order: chapter first, then verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalPosition {
    pub chapter_id: u32,
    pub verse_in_chapter: u32,
}

impl LocalPosition {
    pub fn new(chapter_id: u32, verse_in_chapter: u32) -> Self {
        Self {
            chapter_id,
            verse_in_chapter,
        }
    }
}

/// Inclusive range of global indices, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GlobalRange {
    start: GlobalIndex,
    end: GlobalIndex,
}

impl GlobalRange {
    /// Create a range; both ends are inclusive and must be 1-based.
    pub fn new(start: GlobalIndex, end: GlobalIndex) -> Result<Self> {
        if start == 0 || start > end {
            return Err(MapperError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one verse
    pub fn single(index: GlobalIndex) -> Result<Self> {
        Self::new(index, index)
    }

    /// Callers guarantee `1 <= start <= end`.
    pub(crate) fn from_bounds(start: GlobalIndex, end: GlobalIndex) -> Self {
        debug_assert!(start >= 1 && start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> GlobalIndex {
        self.start
    }

    pub fn end(&self) -> GlobalIndex {
        self.end
    }

    /// Number of verses covered
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Always false; a range covers at least one verse
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, index: GlobalIndex) -> bool {
        self.start <= index && index <= self.end
    }
}

impl fmt::Display for GlobalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Inclusive range of verses within one chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalRange {
    pub chapter_id: u32,
    pub first_verse: u32,
    pub last_verse: u32,
}

impl LocalRange {
    pub fn new(chapter_id: u32, first_verse: u32, last_verse: u32) -> Self {
        Self {
            chapter_id,
            first_verse,
            last_verse,
        }
    }

    pub fn len(&self) -> u32 {
        self.last_verse - self.first_verse + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for LocalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}",
            self.chapter_id, self.first_verse, self.last_verse
        )
    }
}
