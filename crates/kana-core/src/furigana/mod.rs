//! Incremental kanji → reading alignment.
//!
//! The reading field is the only evidence for how a kanji run sounds. Each
//! time unknown kanji appear in the input, the input is split into blocks and
//! the previous reading is distributed over them; kanji blocks and their
//! share of the reading become the new [`FuriganaMap`].

mod align;
mod map;
mod segment;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::unicode::{contains_kanji, extract_katakana, hiragana_to_katakana};

pub use align::align_blocks;
pub use map::FuriganaMap;
pub use segment::split_blocks;

/// Blocks of one input and the reading assigned to each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub blocks: Vec<String>,
    pub readings: Vec<String>,
}

impl Alignment {
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.blocks
            .iter()
            .zip(&self.readings)
            .map(|(b, r)| (b.as_str(), r.as_str()))
    }
}

/// Segment `input` (hiragana is folded to katakana first) and align it
/// against `reading`.
pub fn align(input: &str, reading: &str, map: &FuriganaMap) -> Alignment {
    let text = hiragana_to_katakana(input);
    let blocks = split_blocks(&text, map);
    let readings = align_blocks(&blocks, reading, map);
    Alignment { blocks, readings }
}

/// Rebuild the map from the current input and the reading shown before it.
///
/// Only kanji blocks are stored. Aligned readings are reduced to their
/// katakana and dropped if nothing remains, so unresolved kanji stay
/// unregistered and are retried on the next edit. Entries not re-derived here
/// are gone from the result.
pub fn update_mapping(input: &str, reading: &str, map: &FuriganaMap) -> FuriganaMap {
    if input.is_empty() {
        return FuriganaMap::new();
    }
    let _span = debug_span!("update_mapping", input, reading, known = map.len()).entered();

    let alignment = align(input, reading, map);
    let mut next = FuriganaMap::new();
    for (block, aligned) in alignment.pairs() {
        if !contains_kanji(block) {
            continue;
        }
        let reading = extract_katakana(aligned);
        if !next.insert(block.to_string(), reading) {
            debug!(block, aligned, "no reading for kanji block");
        }
    }

    debug!(blocks = alignment.blocks.len(), entries = next.len());
    next
}

/// Whether `text` still has kanji once every learned key is removed.
pub fn has_unregistered_kanji(text: &str, map: &FuriganaMap) -> bool {
    let remaining = map
        .keys()
        .fold(text.to_string(), |acc, key| acc.replace(key, ""));
    contains_kanji(&remaining)
}

/// Substitute every learned key in `text` and keep the katakana.
///
/// Keys are applied in map order, each on the result of the previous one.
pub fn render_reading(text: &str, map: &FuriganaMap) -> String {
    let replaced = map
        .iter()
        .fold(text.to_string(), |acc, (key, reading)| acc.replace(key, reading));
    extract_katakana(&replaced)
}
