//! Two-stage (dubeolsik) syllable composition automaton.
//!
//! The `Composer` owns the pending jamo of the syllable being typed and turns
//! each keystroke into an [`Output`] telling the editing surface how to update
//! what it shows. It never touches the display itself.
//!
//! States: `Empty -> Choseong -> ChoseongJungseong -> Full`. Any state falls
//! back to `Empty` when the next jamo cannot extend it (the jamo is then
//! processed again as the start of a new syllable), and `Full` moves to
//! `ChoseongJungseong` when a vowel arrives: the trailing consonant is taken
//! over by the next syllable ("floating fire").
//!
//! Every accepted keystroke records the state it replaced, so [`Composer::cancel`]
//! is an exact one-step inverse: undoing ㅘ gives back ㅗ, undoing ㄺ gives back
//! ㄹ, undoing ㄲ gives back ㄱ.

use crate::jamo::{self, Choseong, Jongseong, Jungseong};
use crate::syllable::compose;
use crate::Config;
use tracing::{debug, trace};

/// What the editing surface has to do with the result of a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Append a new glyph. Whatever was shown before stays as it is.
    Append(char),

    /// Erase the glyph produced by the previous keystroke and append this one.
    Replace(char),

    /// Erase the glyph produced by the previous keystroke, append `committed`
    /// (final, no longer part of the composition) and then `current` (live).
    Split { committed: char, current: char },
}

impl Output {
    /// The glyph left live at the end of the display.
    pub fn glyph(&self) -> char {
        match *self {
            Output::Append(c) | Output::Replace(c) => c,
            Output::Split { current, .. } => current,
        }
    }

    /// Whether the previously appended glyph must be erased first.
    pub fn replaces_previous(&self) -> bool {
        !matches!(self, Output::Append(_))
    }
}

/// Coarse fill state of the composition buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerState {
    #[default]
    Empty,
    Choseong,
    ChoseongJungseong,
    Full,
}

/// Buffer contents. `Compound` keeps both halves of a fused final so that the
/// second one can move to the next syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slots {
    Empty,
    Choseong(Choseong),
    ChoseongJungseong(Choseong, Jungseong),
    Full(Choseong, Jungseong, Jongseong),
    Compound {
        cho: Choseong,
        jung: Jungseong,
        first: Jongseong,
        second: Jongseong,
        fused: Jongseong,
    },
}

enum Step {
    /// Buffer grows (or fuses) by one keystroke.
    Extend(Slots, Output),
    /// Floating fire: `committed` leaves the buffer, composition restarts at
    /// `cho` + `jung`.
    Carry {
        committed: char,
        cho: Choseong,
        jung: Jungseong,
    },
    /// Not a leading consonant on an empty buffer.
    PassThrough(char),
}

/// Stateful syllable composer. One instance per text-entry session.
#[derive(Debug, Clone)]
pub struct Composer {
    slots: Slots,
    /// State before each keystroke of the live composition, oldest first.
    history: Vec<Slots>,
    short_vowel_input: bool,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            slots: Slots::Empty,
            history: Vec::new(),
            short_vowel_input: false,
        }
    }

    pub fn with_config(config: &Config) -> Self {
        let mut composer = Self::new();
        composer.short_vowel_input = config.short_vowel_input;
        composer
    }

    pub fn set_short_vowel_input(&mut self, enabled: bool) {
        self.short_vowel_input = enabled;
    }

    pub fn short_vowel_input(&self) -> bool {
        self.short_vowel_input
    }

    /// Feed one keystroke.
    ///
    /// A jamo that cannot extend the buffer resets it and is processed once
    /// more as the start of a new syllable; that second attempt always
    /// succeeds.
    pub fn add_character(&mut self, ch: char) -> Output {
        let step = match self.transition(ch) {
            Some(step) => step,
            None => {
                debug!(%ch, state = ?self.state(), "cannot extend composition, restarting");
                self.reset();
                Self::start(ch)
            }
        };
        self.apply(step)
    }

    /// Undo the most recent keystroke of the live composition.
    ///
    /// Returns the glyph that now represents the buffer, or `None` when the
    /// buffer became (or already was) empty. Glyphs committed by floating fire
    /// are out of reach.
    pub fn cancel(&mut self) -> Option<char> {
        let previous = self.history.pop()?;
        debug!(from = ?self.slots, to = ?previous, "cancel");
        self.slots = previous;
        self.current()
    }

    /// Drop the buffer and the live glyph.
    pub fn reset(&mut self) {
        self.slots = Slots::Empty;
        self.history.clear();
    }

    /// The live composed glyph: a syllable, a bare leading consonant, or
    /// `None` when nothing is being composed.
    pub fn current(&self) -> Option<char> {
        match self.slots {
            Slots::Empty => None,
            Slots::Choseong(cho) => Some(cho.to_char()),
            Slots::ChoseongJungseong(cho, jung) => Some(compose(cho, jung, None)),
            Slots::Full(cho, jung, jong) => Some(compose(cho, jung, Some(jong))),
            Slots::Compound {
                cho, jung, fused, ..
            } => Some(compose(cho, jung, Some(fused))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots == Slots::Empty
    }

    pub fn state(&self) -> ComposerState {
        match self.slots {
            Slots::Empty => ComposerState::Empty,
            Slots::Choseong(_) => ComposerState::Choseong,
            Slots::ChoseongJungseong(..) => ComposerState::ChoseongJungseong,
            Slots::Full(..) | Slots::Compound { .. } => ComposerState::Full,
        }
    }

    /// The pending jamo in buffer order (0-4 glyphs; a fused final is listed
    /// as its two parts).
    pub fn pending(&self) -> Vec<char> {
        match self.slots {
            Slots::Empty => Vec::new(),
            Slots::Choseong(cho) => vec![cho.to_char()],
            Slots::ChoseongJungseong(cho, jung) => vec![cho.to_char(), jung.to_char()],
            Slots::Full(cho, jung, jong) => vec![cho.to_char(), jung.to_char(), jong.to_char()],
            Slots::Compound {
                cho,
                jung,
                first,
                second,
                ..
            } => vec![
                cho.to_char(),
                jung.to_char(),
                first.to_char(),
                second.to_char(),
            ],
        }
    }

    /// Number of keystrokes `cancel` can still undo.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    fn start(ch: char) -> Step {
        match Choseong::from_char(ch) {
            Some(cho) => Step::Extend(Slots::Choseong(cho), Output::Append(ch)),
            None => Step::PassThrough(ch),
        }
    }

    fn transition(&self, ch: char) -> Option<Step> {
        match self.slots {
            Slots::Empty => Some(Self::start(ch)),

            Slots::Choseong(cho) => {
                if let Some(jung) = Jungseong::from_char(ch) {
                    let next = Slots::ChoseongJungseong(cho, jung);
                    return Some(Step::Extend(next, Output::Replace(compose(cho, jung, None))));
                }
                let fused = jamo::double_choseong(cho, Choseong::from_char(ch)?)?;
                debug!(from = %cho.to_char(), to = %fused.to_char(), "double choseong");
                Some(Step::Extend(
                    Slots::Choseong(fused),
                    Output::Replace(fused.to_char()),
                ))
            }

            Slots::ChoseongJungseong(cho, jung) => {
                if let Some(jong) = Jongseong::from_char(ch) {
                    let next = Slots::Full(cho, jung, jong);
                    return Some(Step::Extend(
                        next,
                        Output::Replace(compose(cho, jung, Some(jong))),
                    ));
                }
                let vowel = Jungseong::from_char(ch)?;
                let fused = jamo::double_jungseong(jung, vowel).or_else(|| {
                    self.short_vowel_input
                        .then(|| jamo::short_vowel(jung, vowel))
                        .flatten()
                })?;
                debug!(from = %jung.to_char(), to = %fused.to_char(), "double jungseong");
                Some(Step::Extend(
                    Slots::ChoseongJungseong(cho, fused),
                    Output::Replace(compose(cho, fused, None)),
                ))
            }

            Slots::Full(cho, jung, jong) => {
                if let Some(vowel) = Jungseong::from_char(ch) {
                    // a final typed directly as a compound glyph (ㄳ) still
                    // hands its second half over
                    let (kept, carried) = match jong.to_choseong() {
                        Some(next_cho) => (None, next_cho),
                        None => {
                            let (first, second) = jong.split()?;
                            (Some(first), second.to_choseong()?)
                        }
                    };
                    return Some(Step::Carry {
                        committed: compose(cho, jung, kept),
                        cho: carried,
                        jung: vowel,
                    });
                }
                let second = Jongseong::from_char(ch)?;
                let fused = jamo::double_jongseong(jong, second)?;
                debug!(from = %jong.to_char(), to = %fused.to_char(), "double jongseong");
                Some(Step::Extend(
                    Slots::Compound {
                        cho,
                        jung,
                        first: jong,
                        second,
                        fused,
                    },
                    Output::Replace(compose(cho, jung, Some(fused))),
                ))
            }

            Slots::Compound {
                cho,
                jung,
                first,
                second,
                ..
            } => {
                let vowel = Jungseong::from_char(ch)?;
                Some(Step::Carry {
                    committed: compose(cho, jung, Some(first)),
                    cho: second.to_choseong()?,
                    jung: vowel,
                })
            }
        }
    }

    fn apply(&mut self, step: Step) -> Output {
        match step {
            Step::Extend(next, output) => {
                self.history.push(self.slots);
                self.slots = next;
                output
            }
            Step::Carry {
                committed,
                cho,
                jung,
            } => {
                debug!(%committed, carried = %cho.to_char(), "floating fire");
                self.history.clear();
                self.history.push(Slots::Empty);
                self.history.push(Slots::Choseong(cho));
                self.slots = Slots::ChoseongJungseong(cho, jung);
                Output::Split {
                    committed,
                    current: compose(cho, jung, None),
                }
            }
            Step::PassThrough(ch) => {
                trace!(%ch, "pass-through");
                Output::Append(ch)
            }
        }
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_all(composer: &mut Composer, input: &str) -> Vec<Output> {
        input.chars().map(|c| composer.add_character(c)).collect()
    }

    #[test]
    fn test_floating_fire_sequence() {
        let mut c = Composer::new();
        let out = type_all(&mut c, "ㄱㅏㅇㅏ");
        assert_eq!(
            out,
            vec![
                Output::Append('ㄱ'),
                Output::Replace('가'),
                Output::Replace('강'),
                Output::Split {
                    committed: '가',
                    current: '아'
                },
            ]
        );
        assert_eq!(c.current(), Some('아'));
        assert_eq!(c.state(), ComposerState::ChoseongJungseong);
    }

    #[test]
    fn test_double_choseong() {
        let mut c = Composer::new();
        assert_eq!(c.add_character('ㅅ'), Output::Append('ㅅ'));
        assert_eq!(c.add_character('ㅅ'), Output::Replace('ㅆ'));
        assert_eq!(c.current(), Some('ㅆ'));
        // ㅆ + ㅅ has no entry: a new syllable starts
        assert_eq!(c.add_character('ㅅ'), Output::Append('ㅅ'));
    }

    #[test]
    fn test_double_jungseong() {
        let mut c = Composer::new();
        type_all(&mut c, "ㄱㅗ");
        assert_eq!(c.add_character('ㅏ'), Output::Replace('과'));
        assert_eq!(c.pending(), vec!['ㄱ', 'ㅘ']);
    }

    #[test]
    fn test_double_jongseong_and_carry() {
        let mut c = Composer::new();
        let out = type_all(&mut c, "ㄷㅏㄹㄱ");
        assert_eq!(out[3], Output::Replace('닭'));
        assert_eq!(c.pending(), vec!['ㄷ', 'ㅏ', 'ㄹ', 'ㄱ']);

        assert_eq!(
            c.add_character('ㅏ'),
            Output::Split {
                committed: '달',
                current: '가'
            }
        );
    }

    #[test]
    fn test_consonant_without_syllable_restarts() {
        let mut c = Composer::new();
        type_all(&mut c, "ㄱ");
        assert_eq!(c.add_character('ㅅ'), Output::Append('ㅅ'));
        assert_eq!(c.current(), Some('ㅅ'));
    }

    #[test]
    fn test_pass_through_on_empty() {
        let mut c = Composer::new();
        assert_eq!(c.add_character('ㅏ'), Output::Append('ㅏ'));
        assert!(c.is_empty());
        assert_eq!(c.current(), None);
        assert_eq!(c.add_character('A'), Output::Append('A'));
        assert!(c.is_empty());
    }

    #[test]
    fn test_short_vowel_input() {
        let mut c = Composer::new();
        type_all(&mut c, "ㄱㅏ");
        // disabled: the second ㅏ cannot extend, so it passes through
        assert_eq!(c.add_character('ㅏ'), Output::Append('ㅏ'));

        let mut c = Composer::with_config(&Config {
            short_vowel_input: true,
        });
        type_all(&mut c, "ㄱㅏ");
        assert_eq!(c.add_character('ㅏ'), Output::Replace('갸'));
        assert_eq!(c.add_character('ㅣ'), Output::Replace('걔'));
    }

    #[test]
    fn test_cancel_is_one_step_inverse() {
        let mut c = Composer::new();
        type_all(&mut c, "ㄲ");
        type_all(&mut c, "ㅗㅏㄹㄱ");
        assert_eq!(c.current(), Some('꽑'));

        assert_eq!(c.cancel(), Some('꽐'));
        assert_eq!(c.cancel(), Some('꽈'));
        assert_eq!(c.cancel(), Some('꼬'));
        assert_eq!(c.cancel(), Some('ㄲ'));
        assert_eq!(c.cancel(), None);
        assert!(c.is_empty());
    }

    #[test]
    fn test_cancel_undoes_choseong_fusion() {
        let mut c = Composer::new();
        type_all(&mut c, "ㄱㄱ");
        assert_eq!(c.cancel(), Some('ㄱ'));
        assert_eq!(c.cancel(), None);
    }

    #[test]
    fn test_cancel_after_floating_fire() {
        let mut c = Composer::new();
        type_all(&mut c, "ㄱㅏㅇㅏ");
        assert_eq!(c.undo_depth(), 2);
        assert_eq!(c.cancel(), Some('ㅇ'));
        assert_eq!(c.cancel(), None);
        assert_eq!(c.cancel(), None);
    }

    #[test]
    fn test_cancel_on_empty_is_idempotent() {
        let mut c = Composer::new();
        for _ in 0..3 {
            assert_eq!(c.cancel(), None);
            assert!(c.is_empty());
        }
    }

    #[test]
    fn test_reset() {
        let mut c = Composer::new();
        type_all(&mut c, "ㅎㅏㄴ");
        c.reset();
        assert_eq!(c.current(), None);
        assert_eq!(c.undo_depth(), 0);
        assert_eq!(c.state(), ComposerState::Empty);
    }
}
