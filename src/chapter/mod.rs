//! Chapter metadata and the prefix-sum index derived from it

mod cumulative;
mod table;

pub use cumulative::CumulativeIndex;
pub use table::{Chapter, ChapterTable, CHAPTER_COUNT};
