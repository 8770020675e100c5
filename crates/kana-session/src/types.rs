/// IME composition tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CompositionState {
    Idle,
    /// `segment` is the latest composition update that was still plain
    /// hiragana, i.e. the reading of the text being composed.
    Composing { segment: String },
}

/// Result of one input change, returned alongside the commit to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputResponse {
    /// Value committed to the reading field.
    pub reading: String,
    /// Whether the map was rebuilt for unregistered kanji.
    pub rebuilt: bool,
}

/// Emitted when a composition ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionEnd {
    /// Hiragana reading of the finished composition (may be empty).
    pub segment: String,
}

/// Host-side reading field.
///
/// The session reads it once and commits to it once per input change.
pub trait ReadingField {
    fn reading(&self) -> String;
    fn commit_reading(&mut self, value: &str);
}

/// A plain string acts as an in-memory reading field.
impl ReadingField for String {
    fn reading(&self) -> String {
        self.clone()
    }

    fn commit_reading(&mut self, value: &str) {
        self.clear();
        self.push_str(value);
    }
}
