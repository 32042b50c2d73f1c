//! Editing-surface integration.
//!
//! The surface is anything that can append a glyph and remove its last one
//! ([`DisplaySink`]). [`HangulInput`] owns the [`Composer`] for one surface and
//! translates every composer [`Output`] into those two primitives, so the
//! surface never needs to know about jamo.
//!
//! Backspace protocol: the surface removes its last glyph first; only when
//! something was actually removed is the composer asked to `cancel`, and the
//! glyph it returns (if any) is appended back.

use libhangul_core::{Composer, Config, Output};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Minimal display contract of an editing surface.
pub trait DisplaySink {
    /// Append `ch`. Returns false when the surface refuses it (e.g. full).
    fn append_char(&mut self, ch: char) -> bool;

    /// Remove the last glyph. Returns whether anything was removed.
    fn remove_last_char(&mut self) -> bool;
}

impl DisplaySink for String {
    fn append_char(&mut self, ch: char) -> bool {
        self.push(ch);
        true
    }

    fn remove_last_char(&mut self) -> bool {
        self.pop().is_some()
    }
}

/// Bounded name field, counted in glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEdit {
    name: String,
    max_length: usize,
}

impl NameEdit {
    pub fn new(max_length: usize) -> Self {
        Self {
            name: String::new(),
            max_length,
        }
    }

    /// Start from an existing name. Glyphs beyond `max_length` are dropped.
    pub fn with_name(name: &str, max_length: usize) -> Self {
        Self {
            name: name.chars().take(max_length).collect(),
            max_length,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn len(&self) -> usize {
        self.name.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.max_length
    }

    pub fn clear(&mut self) {
        self.name.clear();
    }
}

impl DisplaySink for NameEdit {
    fn append_char(&mut self, ch: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.name.push(ch);
        true
    }

    fn remove_last_char(&mut self) -> bool {
        self.name.pop().is_some()
    }
}

/// Which keyboard page is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Keystrokes go through the composer
    #[default]
    Hangul,
    /// Keystrokes are appended as typed
    Latin,
}

/// Key events an editing surface forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A glyph picked on the keyboard (jamo, letter, digit, symbol)
    Char(char),
    /// Backspace
    Backspace,
    /// Finish the current syllable without touching the text
    Escape,
    /// Switch between the Hangul and Latin pages
    ToggleMode,
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key was handled
    Handled,
    /// Key had no effect (no target bound, nothing to delete)
    NotHandled,
}

/// Composer bound to one editing surface.
#[derive(Debug, Clone)]
pub struct HangulInput<S: DisplaySink> {
    composer: Composer,
    target: Option<S>,
    mode: InputMode,
}

impl<S: DisplaySink> HangulInput<S> {
    /// Create an input without a target; call [`HangulInput::set_target`]
    /// before typing.
    pub fn new(config: &Config) -> Self {
        Self {
            composer: Composer::with_config(config),
            target: None,
            mode: InputMode::Hangul,
        }
    }

    pub fn with_target(target: S, config: &Config) -> Self {
        let mut input = Self::new(config);
        input.target = Some(target);
        input
    }

    /// Bind a surface, returning the previous one. The composition is
    /// dropped: it described glyphs on the old surface.
    pub fn set_target(&mut self, target: S) -> Option<S> {
        self.composer.reset();
        self.target.replace(target)
    }

    pub fn take_target(&mut self) -> Option<S> {
        self.composer.reset();
        self.target.take()
    }

    pub fn target(&self) -> Option<&S> {
        self.target.as_ref()
    }

    /// Direct access to the surface. Edits made here bypass the composer;
    /// call [`HangulInput::reset`] afterwards.
    pub fn target_mut(&mut self) -> Option<&mut S> {
        self.target.as_mut()
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            debug!(?mode, "input mode changed");
            self.composer.reset();
            self.mode = mode;
        }
    }

    pub fn toggle_mode(&mut self) {
        let next = match self.mode {
            InputMode::Hangul => InputMode::Latin,
            InputMode::Latin => InputMode::Hangul,
        };
        self.set_mode(next);
    }

    /// Type one glyph into the bound surface.
    ///
    /// Returns the composer output that was applied, or `None` when no target
    /// is bound. In Latin mode the glyph is appended as an `Output::Append`.
    pub fn add_character(&mut self, ch: char) -> Option<Output> {
        let Some(target) = self.target.as_mut() else {
            warn!(%ch, "no target bound, keystroke dropped");
            return None;
        };

        if self.mode == InputMode::Latin {
            if !target.append_char(ch) {
                debug!(%ch, "surface refused glyph");
            }
            return Some(Output::Append(ch));
        }

        let output = self.composer.add_character(ch);
        let accepted = match output {
            Output::Append(c) => target.append_char(c),
            Output::Replace(c) => {
                target.remove_last_char();
                target.append_char(c)
            }
            Output::Split { committed, current } => {
                target.remove_last_char();
                target.append_char(committed) && target.append_char(current)
            }
        };
        if !accepted {
            // the live glyph is not on screen, so there is nothing left to compose
            debug!(?output, "surface refused glyph, dropping composition");
            self.composer.reset();
        }
        Some(output)
    }

    /// Backspace. Returns whether the surface removed a glyph.
    pub fn back(&mut self) -> bool {
        let Some(target) = self.target.as_mut() else {
            return false;
        };
        if !target.remove_last_char() {
            return false;
        }
        if let Some(glyph) = self.composer.cancel() {
            target.append_char(glyph);
        }
        true
    }

    /// End the current composition; already shown glyphs stay as they are.
    pub fn reset(&mut self) {
        self.composer.reset();
    }

    /// The live composed glyph, if any.
    pub fn current(&self) -> Option<char> {
        self.composer.current()
    }

    /// Route a key event.
    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        match key {
            KeyEvent::Char(ch) => match self.add_character(ch) {
                Some(_) => KeyResult::Handled,
                None => KeyResult::NotHandled,
            },
            KeyEvent::Backspace => {
                if self.back() {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyEvent::Escape => {
                self.reset();
                KeyResult::Handled
            }
            KeyEvent::ToggleMode => {
                self.toggle_mode();
                KeyResult::Handled
            }
        }
    }
}
