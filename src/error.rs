//! Error types for the coordinate mapper

use std::fmt;

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, MapperError>;

/// Which coordinate a failed lookup was about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coordinate {
    Chapter,
    Verse,
    Global,
    Hizb,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Coordinate::Chapter => "chapter",
            Coordinate::Verse => "verse",
            Coordinate::Global => "global index",
            Coordinate::Hizb => "hizb",
        };
        f.write_str(name)
    }
}

/// Errors raised while building tables or answering queries.
///
/// Table construction errors (`InvalidChapterTable`, `InvalidHizbTable`,
/// `InvalidEdition`) mean no index was produced. The remaining variants are
/// per-query and leave every table untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapperError {
    #[error("Invalid chapter table: {0}")]
    InvalidChapterTable(String),

    #[error("Invalid hizb table: {0}")]
    InvalidHizbTable(String),

    #[error("{coordinate} {value} out of range (expected 1..={max})")]
    OutOfRange {
        coordinate: Coordinate,
        value: u32,
        max: u32,
    },

    #[error("Invalid range: [{start}, {end}]")]
    InvalidRange { start: u32, end: u32 },

    #[error("Invalid {coordinate} number: {value:?}")]
    InvalidNumber {
        coordinate: Coordinate,
        value: String,
    },

    #[error("Invalid edition data: {0}")]
    InvalidEdition(String),
}

impl MapperError {
    pub(crate) fn out_of_range(coordinate: Coordinate, value: u32, max: u32) -> Self {
        MapperError::OutOfRange {
            coordinate,
            value,
            max,
        }
    }
}

impl From<serde_json::Error> for MapperError {
    fn from(err: serde_json::Error) -> Self {
        MapperError::InvalidEdition(err.to_string())
    }
}
