use kana_core::unicode::is_hiragana_segment;
use tracing::debug;

use super::types::{CompositionEnd, CompositionState};
use super::KanaSession;

impl KanaSession {
    /// compositionstart: begin a fresh segment (restarts an unfinished one).
    pub fn composition_start(&mut self) {
        if !self.track_segments {
            return;
        }
        if self.is_composing() {
            debug!("composition restarted");
        }
        self.composition = CompositionState::Composing {
            segment: String::new(),
        };
    }

    /// compositionupdate: keep `data` while it is still the raw hiragana
    /// reading; once the IME shows a converted candidate the buffered
    /// reading is left as is.
    pub fn composition_update(&mut self, data: &str) {
        match &mut self.composition {
            CompositionState::Composing { segment } => {
                if is_hiragana_segment(data) {
                    segment.clear();
                    segment.push_str(data);
                } else {
                    debug!(data, "composition shows converted text");
                }
            }
            CompositionState::Idle => {
                debug!(data, "composition update while idle ignored");
            }
        }
    }

    /// compositionend: flush the buffered segment and return to idle.
    pub fn composition_end(&mut self) -> Option<CompositionEnd> {
        match std::mem::replace(&mut self.composition, CompositionState::Idle) {
            CompositionState::Composing { segment } => {
                debug!(segment = segment.as_str(), "composition ended");
                Some(CompositionEnd { segment })
            }
            CompositionState::Idle => None,
        }
    }
}
