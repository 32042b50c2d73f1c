//! Precomposed syllable encoding (U+AC00..=U+D7A3).
//!
//! `syllable = 0xAC00 + (choseong * 21 + jungseong) * 28 + jongseong`

use crate::jamo::{Choseong, Jongseong, Jungseong};
use thiserror::Error;

pub const SYLLABLE_BASE: u32 = 0xAC00;
pub const CHOSEONG_COUNT: u32 = 19;
pub const JUNGSEONG_COUNT: u32 = 21;
/// Trailing slots per vowel, including "no trailing consonant".
pub const JONGSEONG_COUNT: u32 = 28;
pub const SYLLABLE_COUNT: u32 = CHOSEONG_COUNT * JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// Index value meaning "slot not filled yet".
pub const UNSET: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyllableError {
    /// The leading consonant or the vowel is unset; there is no syllable to
    /// show and nothing should be appended.
    #[error("cannot encode syllable: choseong={choseong} jungseong={jungseong}")]
    Unencodable { choseong: i32, jungseong: i32 },

    #[error("{role} index {index} out of range")]
    IndexOutOfRange { role: &'static str, index: i32 },
}

/// Combine raw formula indices into a syllable.
///
/// `choseong` and `jungseong` may be [`UNSET`], in which case the result is
/// [`SyllableError::Unencodable`]. A `jongseong` of 0 means no trailing
/// consonant and is always valid.
pub fn combine(choseong: i32, jungseong: i32, jongseong: i32) -> Result<char, SyllableError> {
    if choseong == UNSET || jungseong == UNSET {
        return Err(SyllableError::Unencodable {
            choseong,
            jungseong,
        });
    }
    check_range("choseong", choseong, CHOSEONG_COUNT)?;
    check_range("jungseong", jungseong, JUNGSEONG_COUNT)?;
    check_range("jongseong", jongseong, JONGSEONG_COUNT)?;

    let code = SYLLABLE_BASE
        + (choseong as u32 * JUNGSEONG_COUNT + jungseong as u32) * JONGSEONG_COUNT
        + jongseong as u32;
    // every code in the syllable block is a valid scalar value
    char::from_u32(code).ok_or(SyllableError::IndexOutOfRange {
        role: "syllable",
        index: code as i32,
    })
}

fn check_range(role: &'static str, index: i32, count: u32) -> Result<(), SyllableError> {
    if index < 0 || index as u32 >= count {
        Err(SyllableError::IndexOutOfRange { role, index })
    } else {
        Ok(())
    }
}

/// Typed counterpart of [`combine`]; cannot fail because the role types are
/// always in range.
pub fn compose(choseong: Choseong, jungseong: Jungseong, jongseong: Option<Jongseong>) -> char {
    let code = SYLLABLE_BASE
        + (choseong.index() as u32 * JUNGSEONG_COUNT + jungseong.index() as u32)
            * JONGSEONG_COUNT
        + jongseong.map_or(0, |j| j.index() as u32);
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

pub fn is_syllable(ch: char) -> bool {
    (SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).contains(&(ch as u32))
}

/// Split a precomposed syllable into its roles.
pub fn decompose(ch: char) -> Option<(Choseong, Jungseong, Option<Jongseong>)> {
    if !is_syllable(ch) {
        return None;
    }
    let offset = ch as u32 - SYLLABLE_BASE;
    let jong = (offset % JONGSEONG_COUNT) as usize;
    let jung = ((offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT) as usize;
    let cho = (offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT)) as usize;

    Some((
        Choseong::from_index(cho)?,
        Jungseong::from_index(jung)?,
        Jongseong::from_index(jong),
    ))
}
