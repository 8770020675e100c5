//! Keep a katakana reading field in sync with a mixed kanji/kana input field.
//!
//! The algorithms live in `kana_core` and the per-field state in
//! `kana_session`; this crate re-exports both and owns tracing setup.

mod trace_init;

pub use kana_core::furigana::{
    align, align_blocks, has_unregistered_kanji, render_reading, split_blocks, update_mapping,
    Alignment, FuriganaMap,
};
pub use kana_core::settings::{self, ReadingScript, Settings, SettingsError};
pub use kana_core::unicode;
pub use kana_session::{CompositionEnd, InputResponse, KanaSession, ReadingField};
pub use trace_init::init_tracing;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
