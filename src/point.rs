//! Point token codec
//!
//! A point is the user-facing selection carried in URLs and query strings:
//!
//! ```text
//! 2:255     chapter 2, verse 255
//! hizb:12   hizb 12
//! ""        nothing selected
//! ```
//!
//! Parsing is lenient. A token of any other shape means "no selection" and
//! yields [`Point::Empty`] instead of an error. Components are kept as the
//! strings the user typed; numeric and range checks happen only when the
//! point is turned into a [`Position`] or resolved against an edition.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{Coordinate, MapperError, Result};
use crate::position::LocalPosition;

const HIZB_PREFIX: &str = "hizb:";

/// Unvalidated selection as it appears in a token
///
/// A component is never the empty string: the constructors and the
/// deserializer turn an empty component into [`Point::Empty`]. Building a
/// variant literal with an empty component is still treated as empty by
/// [`Point::is_empty`] and serializes to `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Point {
    #[serde(rename_all = "camelCase")]
    Verse {
        chapter_id: String,
        verse_in_chapter: String,
    },
    Hizb {
        hizb: String,
    },
    Empty {},
}

/// Object shape sent by the UI: `{chapterId, verseInChapter}`, `{hizb}` or `{}`.
///
/// Components may be strings or integers. Unknown fields are rejected so a
/// misspelled key is an error instead of an empty selection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawPoint {
    #[serde(default)]
    chapter_id: Option<Component>,
    #[serde(default)]
    verse_in_chapter: Option<Component>,
    #[serde(default)]
    hizb: Option<Component>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Component {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    // JS numbers can arrive as doubles
    Float(f64),
}

impl Component {
    fn into_text(self) -> String {
        match self {
            Component::Text(text) => text,
            Component::Unsigned(n) => n.to_string(),
            Component::Signed(n) => n.to_string(),
            Component::Float(n) => n.to_string(),
        }
    }
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        let chapter_id = raw.chapter_id.map(Component::into_text);
        let verse_in_chapter = raw.verse_in_chapter.map(Component::into_text);
        let hizb = raw.hizb.map(Component::into_text);

        // Same precedence as serialization: a complete chapter/verse pair,
        // then a hizb, otherwise nothing.
        match (chapter_id, verse_in_chapter, hizb) {
            (Some(chapter_id), Some(verse_in_chapter), _)
                if !chapter_id.is_empty() && !verse_in_chapter.is_empty() =>
            {
                Point::verse(chapter_id, verse_in_chapter)
            }
            (_, _, Some(hizb)) => Point::hizb(hizb),
            _ => Point::empty(),
        }
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawPoint::deserialize(deserializer).map(Point::from)
    }
}

/// Validated, numeric form of a [`Point`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    Verse(LocalPosition),
    Hizb(u32),
}

impl Point {
    pub fn empty() -> Self {
        Point::Empty {}
    }

    /// Chapter/verse point; an empty component gives the empty point.
    pub fn verse(chapter_id: impl Into<String>, verse_in_chapter: impl Into<String>) -> Self {
        let chapter_id = chapter_id.into();
        let verse_in_chapter = verse_in_chapter.into();
        if chapter_id.is_empty() || verse_in_chapter.is_empty() {
            return Point::empty();
        }
        Point::Verse {
            chapter_id,
            verse_in_chapter,
        }
    }

    /// Hizb point; an empty component gives the empty point.
    pub fn hizb(hizb: impl Into<String>) -> Self {
        let hizb = hizb.into();
        if hizb.is_empty() {
            return Point::empty();
        }
        Point::Hizb { hizb }
    }

    /// Parse a token; anything unrecognised is the empty point.
    pub fn parse(token: &str) -> Self {
        if token.is_empty() {
            return Point::empty();
        }

        if let Some(hizb) = token.strip_prefix(HIZB_PREFIX) {
            if hizb.is_empty() {
                return Point::empty();
            }
            return Point::hizb(hizb);
        }

        let mut parts = token.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(chapter), Some(verse), None) if !chapter.is_empty() && !verse.is_empty() => {
                Point::verse(chapter, verse)
            }
            _ => Point::empty(),
        }
    }

    /// Token form of this point; the empty point serializes to `""`.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Point::Verse {
                chapter_id,
                verse_in_chapter,
            } => chapter_id.is_empty() || verse_in_chapter.is_empty(),
            Point::Hizb { hizb } => hizb.is_empty(),
            Point::Empty {} => true,
        }
    }

    /// Convert the string components to numbers.
    ///
    /// Only checks that each component is an unsigned integer; range checks
    /// need an edition (see [`crate::Edition::resolve`]).
    pub fn to_position(&self) -> Result<Option<Position>> {
        if self.is_empty() {
            return Ok(None);
        }
        let position = match self {
            Point::Verse {
                chapter_id,
                verse_in_chapter,
            } => Position::Verse(LocalPosition::new(
                parse_component(Coordinate::Chapter, chapter_id)?,
                parse_component(Coordinate::Verse, verse_in_chapter)?,
            )),
            Point::Hizb { hizb } => Position::Hizb(parse_component(Coordinate::Hizb, hizb)?),
            Point::Empty {} => return Ok(None),
        };
        Ok(Some(position))
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::empty()
    }
}

impl From<&str> for Point {
    fn from(token: &str) -> Self {
        Point::parse(token)
    }
}

impl From<Position> for Point {
    fn from(position: Position) -> Self {
        match position {
            Position::Verse(p) => {
                Point::verse(p.chapter_id.to_string(), p.verse_in_chapter.to_string())
            }
            Position::Hizb(h) => Point::hizb(h.to_string()),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        match self {
            Point::Verse {
                chapter_id,
                verse_in_chapter,
            } => write!(f, "{}:{}", chapter_id, verse_in_chapter),
            Point::Hizb { hizb } => write!(f, "{}{}", HIZB_PREFIX, hizb),
            Point::Empty {} => Ok(()),
        }
    }
}

fn parse_component(coordinate: Coordinate, value: &str) -> Result<u32> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MapperError::InvalidNumber {
            coordinate,
            value: value.to_string(),
        });
    }
    value.parse().map_err(|_| MapperError::InvalidNumber {
        coordinate,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verse_token() {
        assert_eq!(Point::parse("2:255"), Point::verse("2", "255"));
    }

    #[test]
    fn test_parse_hizb_token() {
        assert_eq!(Point::parse("hizb:12"), Point::hizb("12"));
    }

    #[test]
    fn test_parse_lenient_fallbacks() {
        for token in ["", "garbage", "1:2:3", ":5", "5:", ":", "hizb:"] {
            assert_eq!(Point::parse(token), Point::empty(), "token {token:?}");
        }
    }

    #[test]
    fn test_parse_keeps_components_verbatim() {
        // Validation is deferred to `to_position`.
        assert_eq!(Point::parse("abc:x"), Point::verse("abc", "x"));
        assert_eq!(Point::parse("hizb:99"), Point::hizb("99"));
        assert_eq!(Point::parse("hizb:1:2"), Point::hizb("1:2"));
    }

    #[test]
    fn test_serialize() {
        assert_eq!(Point::verse("2", "255").serialize(), "2:255");
        assert_eq!(Point::hizb("12").serialize(), "hizb:12");
        assert_eq!(Point::empty().serialize(), "");
        assert_eq!(Point::verse("", "3").serialize(), "");
    }

    #[test]
    fn test_round_trip_well_formed_tokens() {
        for token in ["1:1", "2:255", "114:6", "hizb:1", "hizb:60", ""] {
            assert_eq!(Point::parse(token).serialize(), token);
        }
    }

    #[test]
    fn test_to_position() {
        assert_eq!(
            Point::parse("2:255").to_position().unwrap(),
            Some(Position::Verse(LocalPosition::new(2, 255)))
        );
        assert_eq!(
            Point::parse("hizb:12").to_position().unwrap(),
            Some(Position::Hizb(12))
        );
        assert_eq!(Point::parse("").to_position().unwrap(), None);
    }

    #[test]
    fn test_to_position_rejects_non_numeric() {
        assert_eq!(
            Point::parse("two:255").to_position(),
            Err(MapperError::InvalidNumber {
                coordinate: Coordinate::Chapter,
                value: "two".to_string(),
            })
        );
        assert_eq!(
            Point::parse("hizb:-1").to_position(),
            Err(MapperError::InvalidNumber {
                coordinate: Coordinate::Hizb,
                value: "-1".to_string(),
            })
        );
        assert!(Point::parse("2:99999999999").to_position().is_err());
    }

    #[test]
    fn test_position_back_to_point() {
        let point: Point = Position::Verse(LocalPosition::new(3, 7)).into();
        assert_eq!(point.serialize(), "3:7");
        let point: Point = Position::Hizb(4).into();
        assert_eq!(point.serialize(), "hizb:4");
    }

    #[test]
    fn test_json_shapes() {
        assert_eq!(
            serde_json::to_string(&Point::verse("2", "255")).unwrap(),
            r#"{"chapterId":"2","verseInChapter":"255"}"#
        );
        assert_eq!(
            serde_json::to_string(&Point::hizb("12")).unwrap(),
            r#"{"hizb":"12"}"#
        );
        assert_eq!(serde_json::to_string(&Point::empty()).unwrap(), "{}");

        let point: Point = serde_json::from_str(r#"{"hizb":"3"}"#).unwrap();
        assert_eq!(point, Point::hizb("3"));
        let point: Point = serde_json::from_str("{}").unwrap();
        assert_eq!(point, Point::empty());
    }

    #[test]
    fn test_deserialize_numeric_components() {
        let point: Point =
            serde_json::from_str(r#"{"chapterId":2,"verseInChapter":255}"#).unwrap();
        assert_eq!(point, Point::verse("2", "255"));
        assert_eq!(point.serialize(), "2:255");

        let point: Point = serde_json::from_str(r#"{"hizb":12}"#).unwrap();
        assert_eq!(point, Point::hizb("12"));
        assert_eq!(point.serialize(), "hizb:12");

        let point: Point = serde_json::from_str(r#"{"chapterId":"2","verseInChapter":7}"#).unwrap();
        assert_eq!(point.serialize(), "2:7");
    }

    #[test]
    fn test_deserialize_defers_number_checks() {
        let point: Point = serde_json::from_str(r#"{"hizb":-1}"#).unwrap();
        assert_eq!(point, Point::hizb("-1"));
        assert!(point.to_position().is_err());

        let point: Point = serde_json::from_str(r#"{"hizb":2.5}"#).unwrap();
        assert_eq!(point, Point::hizb("2.5"));
        assert!(point.to_position().is_err());
    }

    #[test]
    fn test_deserialize_partial_objects() {
        for json in [
            r#"{"chapterId":"2"}"#,
            r#"{"verseInChapter":255}"#,
            r#"{"chapterId":"","verseInChapter":"3"}"#,
            r#"{"hizb":""}"#,
            r#"{"chapterId":null,"verseInChapter":null}"#,
        ] {
            let point: Point = serde_json::from_str(json).unwrap();
            assert_eq!(point, Point::empty(), "json {json}");
            assert_eq!(point.serialize(), "");
        }
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        assert!(serde_json::from_str::<Point>(r#"{"chapter":2,"verse":255}"#).is_err());
        assert!(serde_json::from_str::<Point>(r#"{"hizb":1,"juz":1}"#).is_err());
        assert!(serde_json::from_str::<Point>(r#"{"hizb":[1]}"#).is_err());
    }

    #[test]
    fn test_deserialize_verse_wins_over_hizb() {
        let point: Point =
            serde_json::from_str(r#"{"chapterId":1,"verseInChapter":2,"hizb":3}"#).unwrap();
        assert_eq!(point, Point::verse("1", "2"));

        let point: Point = serde_json::from_str(r#"{"chapterId":1,"hizb":3}"#).unwrap();
        assert_eq!(point, Point::hizb("3"));
    }

    #[test]
    fn test_constructors_normalize_empty_components() {
        assert_eq!(Point::verse("", "3"), Point::empty());
        assert_eq!(Point::verse("3", ""), Point::empty());
        assert_eq!(Point::hizb(""), Point::empty());

        // A literal built around the constructors still reads as empty.
        let literal = Point::Hizb {
            hizb: String::new(),
        };
        assert!(literal.is_empty());
        assert_eq!(literal.serialize(), "");
        assert_eq!(literal.to_position().unwrap(), None);
    }

    #[test]
    fn test_position_json_shape() {
        assert_eq!(
            serde_json::to_string(&Position::Verse(LocalPosition::new(2, 255))).unwrap(),
            r#"{"verse":{"chapterId":2,"verseInChapter":255}}"#
        );
        assert_eq!(
            serde_json::to_string(&Position::Hizb(12)).unwrap(),
            r#"{"hizb":12}"#
        );
    }
}
