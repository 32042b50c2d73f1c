//! Keystroke-sequence tests for the composition automaton.
//!
//! Covers:
//! - Forward composition of every choseong/jungseong/jongseong triple
//! - Undo symmetry, including compound fusions
//! - Floating fire with plain and compound finals
//! - Reset-and-reprocess on invalid transitions

use libhangul_core::jamo::{CHOSEONG, JONGSEONG, JUNGSEONG};
use libhangul_core::{combine, Composer, ComposerState, Config, Output};

fn type_keys(composer: &mut Composer, keys: &str) -> Vec<Output> {
    keys.chars().map(|c| composer.add_character(c)).collect()
}

#[test]
fn test_every_triple_composes_and_cancels_to_empty() {
    for (ci, &cho) in CHOSEONG.iter().enumerate() {
        for (vi, &jung) in JUNGSEONG.iter().enumerate() {
            for (ti, &jong) in JONGSEONG.iter().enumerate() {
                let mut c = Composer::new();
                assert_eq!(c.add_character(cho), Output::Append(cho));

                let open = combine(ci as i32, vi as i32, 0).unwrap();
                assert_eq!(c.add_character(jung), Output::Replace(open));

                let closed = combine(ci as i32, vi as i32, ti as i32 + 1).unwrap();
                assert_eq!(c.add_character(jong), Output::Replace(closed));
                assert_eq!(c.state(), ComposerState::Full);

                assert_eq!(c.cancel(), Some(open));
                assert_eq!(c.cancel(), Some(cho));
                assert_eq!(c.cancel(), None);
                assert!(c.is_empty(), "{}{}{} did not cancel to empty", cho, jung, jong);
            }
        }
    }
}

#[test]
fn test_gaang_a_floating_fire() {
    let mut c = Composer::new();
    assert_eq!(c.add_character('ㄱ'), Output::Append('ㄱ'));
    assert_eq!(c.add_character('ㅏ'), Output::Replace('가'));
    assert_eq!(c.add_character('ㅇ'), Output::Replace('강'));
    assert_eq!(
        c.add_character('ㅏ'),
        Output::Split {
            committed: '가',
            current: '아'
        }
    );
}

#[test]
fn test_double_choseong_is_single_replace() {
    let mut c = Composer::new();
    let out = type_keys(&mut c, "ㅅㅅ");
    assert_eq!(out, vec![Output::Append('ㅅ'), Output::Replace('ㅆ')]);
    assert_eq!(c.pending(), vec!['ㅆ']);
}

#[test]
fn test_diphthong_with_prior_choseong() {
    let mut c = Composer::new();
    type_keys(&mut c, "ㅎㅗ");
    assert_eq!(c.add_character('ㅏ'), Output::Replace('화'));

    let mut c = Composer::new();
    type_keys(&mut c, "ㅁㅜ");
    assert_eq!(c.add_character('ㅓ'), Output::Replace('뭐'));
}

#[test]
fn test_giyeok_siot_depends_on_context() {
    // after a full syllable: compound final
    let mut c = Composer::new();
    type_keys(&mut c, "ㄴㅓㄱ");
    assert_eq!(c.add_character('ㅅ'), Output::Replace('넋'));

    // without a syllable: new leading consonant
    let mut c = Composer::new();
    type_keys(&mut c, "ㄱ");
    assert_eq!(c.add_character('ㅅ'), Output::Append('ㅅ'));
    assert_eq!(c.state(), ComposerState::Choseong);
}

#[test]
fn test_compound_final_carries_second_half() {
    let mut c = Composer::new();
    type_keys(&mut c, "ㅇㅓㅂㅅ");
    assert_eq!(c.current(), Some('없'));
    assert_eq!(
        c.add_character('ㅓ'),
        Output::Split {
            committed: '업',
            current: '서'
        }
    );
}

#[test]
fn test_directly_typed_compound_final_is_split_on_carry() {
    let mut c = Composer::new();
    type_keys(&mut c, "ㄷㅏㄺ");
    assert_eq!(c.current(), Some('닭'));
    assert_eq!(
        c.add_character('ㅏ'),
        Output::Split {
            committed: '달',
            current: '가'
        }
    );
}

#[test]
fn test_compound_final_blocks_further_fusion() {
    let mut c = Composer::new();
    type_keys(&mut c, "ㄷㅏㄹㄱ");
    assert_eq!(c.add_character('ㅅ'), Output::Append('ㅅ'));
    assert_eq!(c.state(), ComposerState::Choseong);
}

#[test]
fn test_invalid_transitions_restart() {
    // tense consonant that cannot close a syllable
    let mut c = Composer::new();
    type_keys(&mut c, "ㄱㅏ");
    assert_eq!(c.add_character('ㄸ'), Output::Append('ㄸ'));
    assert_eq!(c.current(), Some('ㄸ'));

    // vowel that does not fuse: passes through, buffer empty
    let mut c = Composer::new();
    type_keys(&mut c, "ㄱㅏ");
    assert_eq!(c.add_character('ㅓ'), Output::Append('ㅓ'));
    assert!(c.is_empty());

    // non-jamo after a full syllable
    let mut c = Composer::new();
    type_keys(&mut c, "ㄱㅏㄱ");
    assert_eq!(c.add_character('7'), Output::Append('7'));
    assert!(c.is_empty());
}

#[test]
fn test_cancel_steps_back_through_every_fusion() {
    let mut c = Composer::new();
    type_keys(&mut c, "ㅂㅂㅜㅔㄹㅎ");
    assert_eq!(c.current(), Some('쀓'));

    let undone: Vec<Option<char>> = (0..7).map(|_| c.cancel()).collect();
    assert_eq!(
        undone,
        vec![
            Some('쀌'),
            Some('쀄'),
            Some('뿌'),
            Some('ㅃ'),
            Some('ㅂ'),
            None,
            None
        ]
    );
}

#[test]
fn test_cancel_then_retype_restores_state() {
    let mut c = Composer::new();
    type_keys(&mut c, "ㄷㅏㄹ");
    c.cancel();
    assert_eq!(c.add_character('ㄹ'), Output::Replace('달'));
    assert_eq!(c.add_character('ㄱ'), Output::Replace('닭'));
}

#[test]
fn test_short_vowel_mode() {
    let config = Config {
        short_vowel_input: true,
    };
    let mut c = Composer::with_config(&config);
    type_keys(&mut c, "ㅇㅗ");
    assert_eq!(c.add_character('ㅗ'), Output::Replace('요'));
    assert_eq!(c.cancel(), Some('오'));

    c.set_short_vowel_input(false);
    assert_eq!(c.add_character('ㅗ'), Output::Append('ㅗ'));
}

#[test]
fn test_reset_then_current_is_empty() {
    let mut c = Composer::new();
    for keys in ["", "ㄱ", "ㄱㅏ", "ㄱㅏㄴ", "ㄱㅏㄹㄱ"] {
        type_keys(&mut c, keys);
        c.reset();
        assert_eq!(c.current(), None);
        assert_eq!(c.cancel(), None);
    }
}
