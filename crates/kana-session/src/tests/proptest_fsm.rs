//! Property-based tests for the KanaSession edit loop.
//!
//! Generates random edit sequences via proptest and verifies that structural
//! invariants hold after every input change.

use proptest::prelude::*;

use kana_core::settings::Settings;
use kana_core::unicode::{contains_kanji, is_hiragana, is_katakana};

use crate::KanaSession;

// ---------------------------------------------------------------------------
// Action enum — models what a user (or IME) does to the two fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Action {
    TypeHiragana(char),
    /// Replace the trailing hiragana character with a kanji.
    Convert(char),
    TypeOther(char),
    Backspace,
    Clear,
    /// The user edits the reading field directly.
    EditReading(String),
    CompositionStart,
    CompositionEnd,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        40 => prop::sample::select(vec!['か', 'ん', 'じ', 'を', 'た', 'の', 'ー'])
            .prop_map(Action::TypeHiragana),
        15 => prop::sample::select(vec!['漢', '字', '書', '山', '田', '々'])
            .prop_map(Action::Convert),
        5 => prop::sample::select(vec!['a', '1', ' ', 'ア', '、'])
            .prop_map(Action::TypeOther),
        10 => Just(Action::Backspace),
        3 => Just(Action::Clear),
        5 => "[アカンジヲa]{0,6}".prop_map(Action::EditReading),
        5 => Just(Action::CompositionStart),
        5 => Just(Action::CompositionEnd),
    ]
}

// ---------------------------------------------------------------------------
// Invariant checks — run after every input change
// ---------------------------------------------------------------------------

fn check_invariants(session: &KanaSession, raw: &str, field: &str) -> Result<(), TestCaseError> {
    prop_assert!(
        field.chars().all(is_katakana),
        "committed reading {:?} has non-katakana",
        field
    );
    if raw.is_empty() {
        prop_assert_eq!(field, "");
        prop_assert!(session.furigana_map().is_empty());
    }
    for (key, value) in session.furigana_map().iter() {
        prop_assert!(contains_kanji(key), "key {:?} has no kanji", key);
        prop_assert!(!value.is_empty());
        prop_assert!(value.chars().all(is_katakana));
    }
    Ok(())
}

proptest! {
    #[test]
    fn edit_sequences_keep_invariants(actions in prop::collection::vec(arb_action(), 1..40)) {
        let mut session = KanaSession::with_settings(&Settings::default());
        let mut raw = String::new();
        let mut field = String::new();

        for action in &actions {
            match action {
                Action::TypeHiragana(c) | Action::TypeOther(c) => {
                    raw.push(*c);
                    if session.is_composing() && is_hiragana(*c) {
                        session.composition_update(&raw);
                    }
                }
                Action::Convert(k) => {
                    if raw.chars().next_back().is_some_and(is_hiragana) {
                        raw.pop();
                    }
                    raw.push(*k);
                }
                Action::Backspace => {
                    raw.pop();
                }
                Action::Clear => raw.clear(),
                Action::EditReading(r) => {
                    field = r.clone();
                    continue;
                }
                Action::CompositionStart => {
                    session.composition_start();
                    continue;
                }
                Action::CompositionEnd => {
                    let was_composing = session.is_composing();
                    let end = session.composition_end();
                    prop_assert_eq!(end.is_some(), was_composing);
                    prop_assert!(!session.is_composing());
                    continue;
                }
            }

            let resp = session.handle_input_change(&raw, &mut field);
            prop_assert_eq!(&resp.reading, &field);
            check_invariants(&session, &raw, &field)?;
        }
    }

    #[test]
    fn known_text_never_rebuilds_twice(n in 1usize..5) {
        let mut session = KanaSession::with_settings(&Settings::default());
        let mut field = String::new();
        session.handle_input_change("かんじ", &mut field);
        let first = session.handle_input_change("漢字", &mut field);
        prop_assert!(first.rebuilt);

        let repeated = "漢字".repeat(n);
        let resp = session.handle_input_change(&repeated, &mut field);
        prop_assert!(!resp.rebuilt);
        prop_assert_eq!(resp.reading, "カンジ".repeat(n));
    }
}
