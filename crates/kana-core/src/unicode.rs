//! Character-level script classification for reading alignment.
//!
//! "Katakana" here is the reading-field script: besides the katakana letters it
//! admits CJK punctuation (U+3000..U+301C) and the middle dot / prolonged sound
//! mark / iteration marks (U+30FB..U+30FE), since those survive into readings.

/// Hiragana letters that have a katakana counterpart at +0x60 (ぁ..ゖ).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
}

/// Reading-field characters. ゠ (U+30A0) and the half-width forms are excluded.
pub fn is_katakana(c: char) -> bool {
    ('\u{3000}'..='\u{301C}').contains(&c)
        || ('\u{30A1}'..='\u{30F6}').contains(&c)
        || ('\u{30FB}'..='\u{30FE}').contains(&c)
}

/// Ideographs plus 々 / 〇 / 〻, which behave like kanji inside words.
///
/// Note 々 and 〇 also fall inside the CJK punctuation range, so they classify
/// as katakana too.
pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{3005}' | '\u{3007}' | '\u{303B}')
        || ('\u{3400}'..='\u{9FFF}').contains(&c)
        || ('\u{F900}'..='\u{FAFF}').contains(&c)
        || ('\u{20000}'..='\u{2FFFF}').contains(&c)
}

/// Variation selectors that may trail a kanji (standard + ideographic).
pub fn is_variation_selector(c: char) -> bool {
    ('\u{FE00}'..='\u{FE02}').contains(&c) || ('\u{E0100}'..='\u{E01EF}').contains(&c)
}

/// True if any character of `s` is kanji. Empty strings are never kanji.
pub fn contains_kanji(s: &str) -> bool {
    s.chars().any(is_kanji)
}

/// True if any character of `s` is a reading-field character.
pub fn contains_katakana(s: &str) -> bool {
    s.chars().any(is_katakana)
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, kanji, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_hiragana(c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Inverse of [`hiragana_to_katakana`] for ァ..ヶ. Punctuation and ー are kept.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Keep only reading-field characters, in order.
pub fn extract_katakana(s: &str) -> String {
    s.chars().filter(|&c| is_katakana(c)).collect()
}

/// Whether a composition update still shows the raw reading (ぁ..ん, ー and
/// the ideographic space) rather than a converted candidate.
pub fn is_hiragana_segment(s: &str) -> bool {
    s.chars()
        .all(|c| ('\u{3041}'..='\u{3093}').contains(&c) || c == 'ー' || c == '\u{3000}')
}
