//! Stateful reading-field session.
//!
//! `KanaSession` owns the learned furigana map for one input field and turns
//! each change of the field's raw text into a new reading, which it commits
//! to the host's reading field.

pub(crate) mod types;

mod composing;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use kana_core::furigana::{has_unregistered_kanji, render_reading, update_mapping, FuriganaMap};
use kana_core::settings::{settings, ReadingScript, Settings};
use kana_core::unicode::hiragana_to_katakana;
use tracing::{debug, debug_span};

pub use types::{CompositionEnd, InputResponse, ReadingField};

use types::CompositionState;

/// Reading synchroniser for a single input field.
pub struct KanaSession {
    /// Replaced on every change, never mutated, so snapshots handed out by
    /// [`KanaSession::furigana_map`] stay valid.
    map: Arc<FuriganaMap>,
    composition: CompositionState,

    // Settings
    script: ReadingScript,
    track_segments: bool,
}

impl KanaSession {
    /// Session configured from the global settings.
    pub fn new() -> Self {
        Self::with_settings(settings())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            map: Arc::new(FuriganaMap::new()),
            composition: CompositionState::Idle,
            script: settings.reading.script(),
            track_segments: settings.composition.track_segments,
        }
    }

    pub fn script(&self) -> ReadingScript {
        self.script
    }

    /// Snapshot of the current map.
    pub fn furigana_map(&self) -> Arc<FuriganaMap> {
        Arc::clone(&self.map)
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.composition, CompositionState::Composing { .. })
    }

    /// Hiragana buffered for the composition in progress.
    pub fn composing_segment(&self) -> Option<&str> {
        match &self.composition {
            CompositionState::Composing { segment } => Some(segment.as_str()),
            CompositionState::Idle => None,
        }
    }

    /// Forget everything learned and leave any composition.
    pub fn reset(&mut self) {
        self.map = Arc::new(FuriganaMap::new());
        self.composition = CompositionState::Idle;
    }

    /// Entry point for the host's "input changed" notification.
    ///
    /// Reads `field` once, commits the new reading to it once.
    pub fn handle_input_change<F>(&mut self, raw: &str, field: &mut F) -> InputResponse
    where
        F: ReadingField + ?Sized,
    {
        let current = field.reading();
        let resp = self.process_input(raw, &current);
        field.commit_reading(&resp.reading);
        resp
    }

    /// Compute the reading for `raw` given the reading field's present value,
    /// updating the learned map. Does not touch any host state.
    pub fn process_input(&mut self, raw: &str, current_reading: &str) -> InputResponse {
        let _span = debug_span!("handle_input_change", raw, composing = self.is_composing())
            .entered();

        let katakana_and_kanji = hiragana_to_katakana(raw);
        let stale = has_unregistered_kanji(&katakana_and_kanji, &self.map);

        let next = if stale {
            let reading = self.script.to_internal(current_reading);
            Arc::new(update_mapping(&katakana_and_kanji, &reading, &self.map))
        } else if !raw.is_empty() {
            Arc::clone(&self.map)
        } else {
            Arc::new(FuriganaMap::new())
        };

        let rendered = render_reading(&katakana_and_kanji, &next);
        debug!(rebuilt = stale, entries = next.len(), rendered = rendered.as_str());

        self.map = next;
        InputResponse {
            reading: self.script.to_field(rendered),
            rebuilt: stale,
        }
    }
}

impl Default for KanaSession {
    fn default() -> Self {
        Self::new()
    }
}
