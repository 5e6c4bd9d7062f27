//! Cumulative verse index
//!
//! `C[0] = 0` and `C[s] = C[s-1] + verse_count(s)`, so `C[s]` is the number
//! of verses up to and including chapter `s`, and the last entry is the
//! total verse count.

use super::table::{Chapter, ChapterTable};
use crate::error::Result;

/// Prefix sums over a validated [`ChapterTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeIndex {
    prefix: Vec<u32>,
}

impl CumulativeIndex {
    pub fn new(table: &ChapterTable) -> Self {
        let mut prefix = Vec::with_capacity(table.len() + 1);
        prefix.push(0);

        let mut running = 0u32;
        for &count in table.verse_counts() {
            running += count;
            prefix.push(running);
        }

        Self { prefix }
    }

    /// Validate a complete chapter list and build its index in one step.
    pub fn from_chapters(chapters: Vec<Chapter>) -> Result<Self> {
        Ok(Self::new(&ChapterTable::new(chapters)?))
    }

    /// Total number of verses (`C[last]`)
    pub fn total(&self) -> u32 {
        self.prefix.last().copied().unwrap_or(0)
    }

    pub fn chapter_count(&self) -> u32 {
        (self.prefix.len() - 1) as u32
    }

    /// Verse count of `chapter_id`, `None` if unknown
    pub fn verse_count(&self, chapter_id: u32) -> Option<u32> {
        let s = chapter_id as usize;
        if s == 0 || s >= self.prefix.len() {
            return None;
        }
        Some(self.prefix[s] - self.prefix[s - 1])
    }

    /// The raw prefix array, `chapter_count() + 1` entries long
    pub fn as_slice(&self) -> &[u32] {
        &self.prefix
    }

    /// `C[s]` without bounds interpretation; callers check `s` first.
    pub(crate) fn at(&self, s: u32) -> u32 {
        self.prefix[s as usize]
    }
}
