//! Verse positions, global mapping and range intersection
//!
//! # Example
//!
//! ```
//! use mushaf_index::{ChapterTable, CumulativeIndex, GlobalRange, LocalPosition, LocalRange};
//!
//! let table = ChapterTable::from_verse_counts(&[7, 286, 200]).unwrap();
//! let index = CumulativeIndex::new(&table);
//!
//! assert_eq!(index.to_global(3, 1).unwrap(), 294);
//! assert_eq!(index.from_global(293).unwrap(), LocalPosition::new(2, 286));
//!
//! let query = GlobalRange::new(8, 50).unwrap();
//! assert_eq!(
//!     index.ayah_range_for_chapter_intersection(2, query).unwrap(),
//!     Some(LocalRange::new(2, 1, 43))
//! );
//! ```

mod intersect;
mod mapper;
mod types;

pub use intersect::intersects;
pub use types::{GlobalIndex, GlobalRange, LocalPosition, LocalRange};
