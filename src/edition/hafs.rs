//! Reference tables for the Hafs edition

/// Verses per chapter, chapter 1 first.
#[rustfmt::skip]
pub(crate) const VERSE_COUNTS: [u32; 114] = [
    7, 286, 200, 176, 120, 165, 206, 75, 129, 109,
    123, 111, 43, 52, 99, 128, 111, 110, 98, 135,
    112, 78, 118, 64, 77, 227, 93, 88, 69, 60,
    34, 30, 73, 54, 45, 83, 182, 88, 75, 85,
    54, 53, 89, 59, 37, 35, 38, 29, 18, 45,
    60, 49, 62, 55, 78, 96, 29, 22, 24, 13,
    14, 11, 11, 18, 12, 12, 30, 52, 52, 44,
    28, 28, 20, 56, 40, 31, 50, 40, 46, 42,
    29, 19, 36, 25, 22, 17, 19, 26, 30, 20,
    15, 21, 11, 8, 8, 19, 5, 8, 8, 11,
    11, 8, 3, 9, 5, 4, 7, 3, 6, 3,
    5, 4, 5, 6,
];

/// Total verse count (sum of [`VERSE_COUNTS`])
pub(crate) const TOTAL_VERSES: u32 = 6236;

/// Global index of the first verse of each hizb.
///
/// Odd hizbs open a juz (2:142, 2:253, 3:93, ...); even hizbs open its
/// second half (2:75, 2:203, 3:15, ...).
#[rustfmt::skip]
pub(crate) const HIZB_STARTS: [u32; 60] = [
    1, 82, 149, 210, 260, 308, 386, 464, 517, 581,
    641, 696, 751, 825, 900, 955, 1042, 1125, 1201, 1269,
    1328, 1390, 1479, 1557, 1649, 1726, 1803, 1952, 2030, 2128,
    2215, 2309, 2484, 2596, 2674, 2812, 2876, 3043, 3215, 3303,
    3386, 3491, 3564, 3630, 3733, 3933, 4090, 4174, 4265, 4349,
    4511, 4601, 4706, 4902, 5105, 5178, 5242, 5448, 5673, 5949,
];
