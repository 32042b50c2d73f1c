//! libhangul-core
//!
//! Jamo tables, syllable encoding and the composition automaton shared by the
//! `libhangul` editing-surface integration.
//!
//! Public API:
//! - `Composer` - Stateful two-stage syllable composer with one-step undo
//! - `Output` - How an editing surface should apply a keystroke result
//! - `Choseong` / `Jungseong` / `Jongseong` - Jamo classified by role
//! - `combine` / `compose` / `decompose` - Syllable codec
//! - `Config` - Composition options
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub mod jamo;
pub use jamo::{is_choseong, is_jamo, is_jongseong, is_jungseong, Choseong, Jongseong, Jungseong};

pub mod syllable;
pub use syllable::{combine, compose, decompose, is_syllable, SyllableError};

pub mod composer;
pub use composer::{Composer, ComposerState, Output};

/// Composition options.
///
/// Options that only concern a particular editing surface (maximum length,
/// starting input mode) live in `HangulConfig` in the `libhangul` crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Typing a vowel twice yields its y-glide form (ㅏ + ㅏ → ㅑ). Meant for
    /// reduced on-screen keyboards that only show the plain vowels.
    pub short_vowel_input: bool,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("write config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn toggle_short_vowel_input(&mut self) {
        self.short_vowel_input = !self.short_vowel_input;
    }
}

/// Utility helpers.
pub mod utils {
    use crate::jamo::{Choseong, Jongseong, Jungseong};
    use crate::syllable::decompose;

    /// Expand every precomposed syllable in `s` into its jamo, splitting
    /// compound finals so that the result can be fed back through a
    /// `Composer` keystroke by keystroke. Other characters pass unchanged.
    pub fn to_keystrokes(s: &str) -> String {
        let mut out = String::with_capacity(s.len() * 3);
        for ch in s.chars() {
            match decompose(ch) {
                Some((cho, jung, jong)) => {
                    out.push(cho.to_char());
                    out.push(jung.to_char());
                    match jong.map(|j| (j, j.split())) {
                        Some((_, Some((first, second)))) => {
                            out.push(first.to_char());
                            out.push(second.to_char());
                        }
                        Some((j, None)) => out.push(j.to_char()),
                        None => {}
                    }
                }
                None => out.push(ch),
            }
        }
        out
    }

    /// Human-readable role label of a single jamo ("choseong/jongseong" for
    /// glyphs that can take both roles).
    pub fn describe_jamo(ch: char) -> String {
        let mut roles = Vec::new();
        if let Some(c) = Choseong::from_char(ch) {
            roles.push(format!("choseong #{}", c.index()));
        }
        if let Some(v) = Jungseong::from_char(ch) {
            roles.push(format!("jungseong #{}", v.index()));
        }
        if let Some(j) = Jongseong::from_char(ch) {
            roles.push(format!("jongseong #{}", j.index()));
        }
        if roles.is_empty() {
            "not a jamo".to_string()
        } else {
            roles.join(", ")
        }
    }
}
