use crate::editor::{HangulInput, InputMode, NameEdit};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Name-entry configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All composition options from `libhangul_core::Config` (flattened via serde)
/// - The maximum name length of the bound `NameEdit`
/// - The keyboard page the entry starts on
///
/// # Example
///
/// ```rust
/// use libhangul::HangulConfig;
///
/// let config = HangulConfig::from_toml_str("short_vowel_input = true\nmax_length = 6").unwrap();
/// assert!(config.base().short_vowel_input);
/// assert_eq!(config.max_length, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HangulConfig {
    /// Base composition options
    #[serde(flatten)]
    pub base: libhangul_core::Config,

    /// Maximum number of glyphs in the name field
    pub max_length: usize,

    /// Page shown when the entry opens
    pub start_mode: InputMode,
}

impl Default for HangulConfig {
    fn default() -> Self {
        Self {
            base: libhangul_core::Config::default(),
            max_length: 16,
            start_mode: InputMode::Hangul,
        }
    }
}

impl HangulConfig {
    /// Convert this config into the base config for use with `Composer::with_config()`
    pub fn into_base(self) -> libhangul_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libhangul_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libhangul_core::Config {
        &mut self.base
    }

    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Build a name entry bound to an empty `NameEdit` of `max_length`.
    pub fn name_input(&self) -> HangulInput<NameEdit> {
        let mut input = HangulInput::with_target(NameEdit::new(self.max_length), &self.base);
        input.set_mode(self.start_mode);
        input
    }
}
