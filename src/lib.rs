//! Mushaf Index
//!
//! Coordinate mapping over the verse sequence of the Mushaf, which is split
//! two ways at once: into 114 chapters (surahs) and into 60 hizbs whose
//! boundaries do not line up with chapter boundaries. Provides:
//! - Chapter-relative <-> global verse index conversion
//! - Hizb spans and hizb lookup for any verse
//! - Range intersection projected back into chapter-local verse numbers
//! - A lenient string codec for selections carried in URLs (`2:255`, `hizb:12`)
//!
//! Everything is a pure function of immutable tables. The crate is usable
//! natively and from the browser through [`MushafMapper`].

use wasm_bindgen::prelude::*;

pub mod chapter;
pub mod edition;
pub mod error;
pub mod hizb;
pub mod point;
pub mod position;

// Re-export common types
pub use chapter::{Chapter, ChapterTable, CumulativeIndex, CHAPTER_COUNT};
pub use edition::{Edition, EditionData};
pub use error::{Coordinate, MapperError, Result};
pub use hizb::{HizbIndex, HIZB_COUNT};
pub use point::{Point, Position};
pub use position::{intersects, GlobalIndex, GlobalRange, LocalPosition, LocalRange};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in debug mode
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn to_js_value<T: serde::Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(to_js_error)
}

/// Mushaf Mapper - browser interface over one [`Edition`]
#[wasm_bindgen]
pub struct MushafMapper {
    edition: Edition,
}

#[wasm_bindgen]
impl MushafMapper {
    /// Create a mapper over the bundled Hafs edition
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            edition: Edition::hafs(),
        }
    }

    /// Create a mapper from edition JSON (`{chapters, hizbStarts}`)
    #[wasm_bindgen(js_name = "fromJson")]
    pub fn from_json(json: &str) -> std::result::Result<MushafMapper, JsValue> {
        let edition = Edition::from_json(json).map_err(to_js_error)?;
        Ok(Self { edition })
    }

    #[wasm_bindgen(js_name = "totalVerses")]
    pub fn total_verses(&self) -> u32 {
        self.edition.total_verses()
    }

    #[wasm_bindgen(js_name = "toGlobal")]
    pub fn to_global(&self, chapter_id: u32, verse_in_chapter: u32) -> std::result::Result<u32, JsValue> {
        self.edition
            .to_global(chapter_id, verse_in_chapter)
            .map_err(to_js_error)
    }

    /// Returns `{chapterId, verseInChapter}`
    #[wasm_bindgen(js_name = "fromGlobal")]
    pub fn from_global(&self, index: u32) -> std::result::Result<JsValue, JsValue> {
        let position = self.edition.from_global(index).map_err(to_js_error)?;
        to_js_value(&position)
    }

    /// Returns `{start, end}`
    #[wasm_bindgen(js_name = "surahRange")]
    pub fn surah_range(&self, chapter_id: u32) -> std::result::Result<JsValue, JsValue> {
        let range = self.edition.surah_range(chapter_id).map_err(to_js_error)?;
        to_js_value(&range)
    }

    /// Returns `{start, end}`
    #[wasm_bindgen(js_name = "hizbRange")]
    pub fn hizb_range(&self, hizb: u32) -> std::result::Result<JsValue, JsValue> {
        let range = self.edition.hizb_range(hizb).map_err(to_js_error)?;
        to_js_value(&range)
    }

    #[wasm_bindgen(js_name = "hizbOf")]
    pub fn hizb_of(&self, chapter_id: u32, verse_in_chapter: u32) -> std::result::Result<u32, JsValue> {
        self.edition
            .hizb_of(chapter_id, verse_in_chapter)
            .map_err(to_js_error)
    }

    /// Returns `{chapterId, firstVerse, lastVerse}` or `null` when the chapter
    /// has no verses in the hizb
    #[wasm_bindgen(js_name = "chapterRangeInHizb")]
    pub fn chapter_range_in_hizb(&self, chapter_id: u32, hizb: u32) -> std::result::Result<JsValue, JsValue> {
        match self
            .edition
            .verses_of_chapter_in_hizb(chapter_id, hizb)
            .map_err(to_js_error)?
        {
            Some(range) => to_js_value(&range),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = "chaptersInHizb")]
    pub fn chapters_in_hizb(&self, hizb: u32) -> std::result::Result<JsValue, JsValue> {
        let ranges = self.edition.chapters_in_hizb(hizb).map_err(to_js_error)?;
        to_js_value(&ranges)
    }

    /// Parse a URL token; malformed tokens give `{}`
    #[wasm_bindgen(js_name = "parsePoint")]
    pub fn parse_point(&self, token: &str) -> std::result::Result<JsValue, JsValue> {
        to_js_value(&Point::parse(token))
    }

    /// Serialize a point object back to its token
    #[wasm_bindgen(js_name = "serializePoint")]
    pub fn serialize_point(&self, point: JsValue) -> std::result::Result<String, JsValue> {
        let point: Point = serde_wasm_bindgen::from_value(point).map_err(to_js_error)?;
        Ok(point.serialize())
    }

    /// Resolve a token to the global range it selects, `null` for no selection
    #[wasm_bindgen(js_name = "resolvePoint")]
    pub fn resolve_point(&self, token: &str) -> std::result::Result<JsValue, JsValue> {
        match self
            .edition
            .resolve(&Point::parse(token))
            .map_err(to_js_error)?
        {
            Some(range) => to_js_value(&range),
            None => Ok(JsValue::NULL),
        }
    }
}

impl Default for MushafMapper {
    fn default() -> Self {
        Self::new()
    }
}
