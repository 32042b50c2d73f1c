//! Hangul compatibility jamo classification and compound tables.
//!
//! A single glyph such as `ㄱ` can act as a leading consonant (choseong) or as
//! a trailing consonant (jongseong); the role is decided by the automaton, not
//! by the glyph. Each role therefore gets its own newtype carrying the index
//! used by the Unicode syllable formula.
//!
//! ## Compound tables
//!
//! | Table | Example | Entries |
//! |---|---|---|
//! | double choseong | ㄱ + ㄱ → ㄲ | 5 |
//! | double jungseong | ㅗ + ㅏ → ㅘ | 11 |
//! | short vowel | ㅏ + ㅏ → ㅑ | 6 |
//! | double jongseong | ㄹ + ㄱ → ㄺ | 11 |
//!
//! The short-vowel table is only consulted when
//! [`Config::short_vowel_input`](crate::Config::short_vowel_input) is set.

use phf::phf_map;

/// Leading consonants in syllable-formula order.
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Vowels in syllable-formula order.
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Trailing consonants in syllable-formula order. Index 0 of the formula is
/// "no trailing consonant", so `JONGSEONG[i]` has formula index `i + 1`.
pub const JONGSEONG: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

static DOUBLE_CHOSEONG: phf::Map<&'static str, char> = phf_map! {
    "ㄱㄱ" => 'ㄲ',
    "ㄷㄷ" => 'ㄸ',
    "ㅂㅂ" => 'ㅃ',
    "ㅅㅅ" => 'ㅆ',
    "ㅈㅈ" => 'ㅉ',
};

static DOUBLE_JUNGSEONG: phf::Map<&'static str, char> = phf_map! {
    "ㅏㅣ" => 'ㅐ',
    "ㅑㅣ" => 'ㅒ',
    "ㅓㅣ" => 'ㅔ',
    "ㅕㅣ" => 'ㅖ',
    "ㅗㅏ" => 'ㅘ',
    "ㅗㅐ" => 'ㅙ',
    "ㅗㅣ" => 'ㅚ',
    "ㅜㅓ" => 'ㅝ',
    "ㅜㅔ" => 'ㅞ',
    "ㅜㅣ" => 'ㅟ',
    "ㅡㅣ" => 'ㅢ',
};

static SHORT_VOWEL: phf::Map<&'static str, char> = phf_map! {
    "ㅏㅏ" => 'ㅑ',
    "ㅐㅐ" => 'ㅒ',
    "ㅓㅓ" => 'ㅕ',
    "ㅔㅔ" => 'ㅖ',
    "ㅗㅗ" => 'ㅛ',
    "ㅜㅜ" => 'ㅠ',
};

static DOUBLE_JONGSEONG: phf::Map<&'static str, char> = phf_map! {
    "ㄱㅅ" => 'ㄳ',
    "ㄴㅈ" => 'ㄵ',
    "ㄴㅎ" => 'ㄶ',
    "ㄹㄱ" => 'ㄺ',
    "ㄹㅁ" => 'ㄻ',
    "ㄹㅂ" => 'ㄼ',
    "ㄹㅅ" => 'ㄽ',
    "ㄹㅌ" => 'ㄾ',
    "ㄹㅍ" => 'ㄿ',
    "ㄹㅎ" => 'ㅀ',
    "ㅂㅅ" => 'ㅄ',
};

/// Leading consonant role, index 0-18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choseong(u8);

/// Vowel role, index 0-20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jungseong(u8);

/// Trailing consonant role, formula index 1-27.
///
/// The absent trailing consonant (formula index 0) is modelled as
/// `Option::<Jongseong>::None` rather than as a value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jongseong(u8);

impl Choseong {
    pub const COUNT: usize = CHOSEONG.len();

    /// Classify `ch` as a leading consonant.
    pub fn from_char(ch: char) -> Option<Self> {
        CHOSEONG.iter().position(|&c| c == ch).map(|i| Self(i as u8))
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then(|| Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        CHOSEONG[self.index()]
    }

    /// The same glyph in the trailing role, if it has one (ㄸ, ㅃ and ㅉ
    /// never close a syllable).
    pub fn to_jongseong(self) -> Option<Jongseong> {
        Jongseong::from_char(self.to_char())
    }
}

impl Jungseong {
    pub const COUNT: usize = JUNGSEONG.len();

    /// Classify `ch` as a vowel.
    pub fn from_char(ch: char) -> Option<Self> {
        JUNGSEONG.iter().position(|&c| c == ch).map(|i| Self(i as u8))
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then(|| Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        JUNGSEONG[self.index()]
    }
}

impl Jongseong {
    /// Number of formula slots, including the absent slot 0.
    pub const COUNT: usize = JONGSEONG.len() + 1;

    /// Classify `ch` as a trailing consonant.
    pub fn from_char(ch: char) -> Option<Self> {
        JONGSEONG
            .iter()
            .position(|&c| c == ch)
            .map(|i| Self(i as u8 + 1))
    }

    /// Build from a formula index. Index 0 is the absent consonant and has no
    /// `Jongseong` value.
    pub fn from_index(index: usize) -> Option<Self> {
        (1..Self::COUNT).contains(&index).then(|| Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        JONGSEONG[self.index() - 1]
    }

    /// The same glyph in the leading role. Compound finals such as ㄳ have
    /// none; use [`Jongseong::split`] for those.
    pub fn to_choseong(self) -> Option<Choseong> {
        Choseong::from_char(self.to_char())
    }

    /// Split a compound final back into its two parts (ㄺ → ㄹ, ㄱ).
    pub fn split(self) -> Option<(Jongseong, Jongseong)> {
        let glyph = self.to_char();
        DOUBLE_JONGSEONG
            .entries()
            .find(|&(_, &fused)| fused == glyph)
            .and_then(|(key, _)| {
                let mut parts = key.chars();
                let first = Jongseong::from_char(parts.next()?)?;
                let second = Jongseong::from_char(parts.next()?)?;
                Some((first, second))
            })
    }

    pub fn is_compound(self) -> bool {
        self.split().is_some()
    }
}

pub fn is_choseong(ch: char) -> bool {
    Choseong::from_char(ch).is_some()
}

pub fn is_jungseong(ch: char) -> bool {
    Jungseong::from_char(ch).is_some()
}

pub fn is_jongseong(ch: char) -> bool {
    Jongseong::from_char(ch).is_some()
}

/// True for any compatibility jamo the automaton knows in at least one role.
pub fn is_jamo(ch: char) -> bool {
    is_choseong(ch) || is_jungseong(ch) || is_jongseong(ch)
}

/// Encode a two-glyph table key on the stack.
fn pair_key(buf: &mut [u8; 8], a: char, b: char) -> Option<&str> {
    let first = a.len_utf8();
    let second = b.len_utf8();
    a.encode_utf8(&mut buf[..first]);
    b.encode_utf8(&mut buf[first..first + second]);
    std::str::from_utf8(&buf[..first + second]).ok()
}

fn lookup(table: &phf::Map<&'static str, char>, a: char, b: char) -> Option<char> {
    let mut buf = [0u8; 8];
    let key = pair_key(&mut buf, a, b)?;
    table.get(key).copied()
}

/// Fuse two identical plain consonants into a tense consonant (ㄱ + ㄱ → ㄲ).
pub fn double_choseong(first: Choseong, second: Choseong) -> Option<Choseong> {
    lookup(&DOUBLE_CHOSEONG, first.to_char(), second.to_char()).and_then(Choseong::from_char)
}

/// Fuse two vowels into a diphthong (ㅗ + ㅏ → ㅘ).
pub fn double_jungseong(first: Jungseong, second: Jungseong) -> Option<Jungseong> {
    lookup(&DOUBLE_JUNGSEONG, first.to_char(), second.to_char()).and_then(Jungseong::from_char)
}

/// Repeat a vowel to get its y-glide form (ㅏ + ㅏ → ㅑ).
pub fn short_vowel(first: Jungseong, second: Jungseong) -> Option<Jungseong> {
    lookup(&SHORT_VOWEL, first.to_char(), second.to_char()).and_then(Jungseong::from_char)
}

/// Fuse two trailing consonants into a compound final (ㄹ + ㅎ → ㅀ).
pub fn double_jongseong(first: Jongseong, second: Jongseong) -> Option<Jongseong> {
    lookup(&DOUBLE_JONGSEONG, first.to_char(), second.to_char()).and_then(Jongseong::from_char)
}
