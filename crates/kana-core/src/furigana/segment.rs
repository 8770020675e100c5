use super::map::FuriganaMap;
use crate::unicode::{contains_kanji, contains_katakana};

/// Split katakana/kanji text into alignable blocks.
///
/// Characters that belong to a learned key stay grouped with the rest of that
/// key, unmapped kanji coalesce, and katakana runs coalesce. Everything else
/// becomes a one-character block.
pub fn split_blocks(text: &str, map: &FuriganaMap) -> Vec<String> {
    let mut blocks: Vec<String> = Vec::new();
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let cur: &str = c.encode_utf8(&mut buf);
        match blocks.last_mut() {
            Some(prev) if should_merge(prev.as_str(), cur, map) => prev.push(c),
            _ => blocks.push(cur.to_string()),
        }
    }
    blocks
}

fn should_merge(prev: &str, cur: &str, map: &FuriganaMap) -> bool {
    // A character of a known key either continues that key or starts a new
    // block; it never falls through to the script rules.
    if let Some(cur_key) = map.key_containing(cur) {
        return map.key_containing(prev) == Some(cur_key);
    }
    let unmapped_kanji = contains_kanji(prev)
        && contains_kanji(cur)
        && !map.contains_key(prev)
        && !map.contains_key(cur);
    unmapped_kanji || (contains_katakana(prev) && contains_katakana(cur))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str, map: &FuriganaMap) -> Vec<String> {
        split_blocks(text, map)
    }

    #[test]
    fn empty_text_has_no_blocks() {
        assert!(split("", &FuriganaMap::new()).is_empty());
    }

    #[test]
    fn single_char_is_one_block() {
        let map = FuriganaMap::new();
        assert_eq!(split("漢", &map), vec!["漢"]);
        assert_eq!(split("a", &map), vec!["a"]);
        assert_eq!(split("ア", &map), vec!["ア"]);
    }

    #[test]
    fn other_script_is_one_block_per_char() {
        assert_eq!(split("ab 1", &FuriganaMap::new()), vec!["a", "b", " ", "1"]);
    }

    #[test]
    fn unmapped_kanji_coalesce() {
        assert_eq!(split("漢字", &FuriganaMap::new()), vec!["漢字"]);
    }

    #[test]
    fn katakana_coalesce() {
        assert_eq!(split("カタカナ", &FuriganaMap::new()), vec!["カタカナ"]);
    }

    #[test]
    fn mixed_script_splits_at_boundaries() {
        assert_eq!(
            split("漢字ヲ書クa", &FuriganaMap::new()),
            vec!["漢字", "ヲ", "書", "ク", "a"]
        );
    }

    #[test]
    fn katakana_does_not_merge_into_kanji() {
        // 書 is not katakana, so ク starts a new block.
        assert_eq!(split("書ク", &FuriganaMap::new()), vec!["書", "ク"]);
    }

    #[test]
    fn known_key_stays_atomic() {
        let map: FuriganaMap = [("漢字", "カンジ")].into_iter().collect();
        assert_eq!(split("漢字書", &map), vec!["漢字", "書"]);
    }

    #[test]
    fn known_key_does_not_absorb_neighbouring_kanji() {
        let map: FuriganaMap = [("漢字", "カンジ")].into_iter().collect();
        assert_eq!(split("山漢字", &map), vec!["山", "漢字"]);
    }

    #[test]
    fn mapped_single_kanji_blocks_merge() {
        let map: FuriganaMap = [("書", "カ")].into_iter().collect();
        assert_eq!(split("書書", &map), vec!["書書"]);
        // 山 after a mapped block is not merged: the previous block has an entry.
        assert_eq!(split("書山", &map), vec!["書", "山"]);
    }
}
